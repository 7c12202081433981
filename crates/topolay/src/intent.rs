//! Wire contract of the external intent-extraction service.
//!
//! The service turns a free-text utterance into an optional
//! `(topology, devices)` pair. Only the response shapes are modeled here; the
//! transport (and its retry/timeout policy) lives with the caller.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Response of the `/chat` endpoint. `message` is the dialogue reply shown in
/// the chat transcript; `data` carries whatever the extraction recognized,
/// either half of which may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub message: Option<String>,
    pub data: ChatData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatData {
    pub topology: Option<String>,
    pub devices: Option<i64>,
}

/// Liveness contract of the `/health` endpoint, polled independently of the
/// generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub rasa_healthy: bool,
}

/// A complete `(kind, device count)` pair ready for generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyRequest {
    pub kind: String,
    pub device_count: i64,
}

impl ChatResponse {
    /// The topology request carried by this response, if the extraction
    /// produced both halves of the pair. Failed responses never yield a
    /// request. The kind is lower-cased here so downstream matching sees the
    /// canonical spelling.
    pub fn topology_request(&self) -> Option<TopologyRequest> {
        if !self.success {
            return None;
        }
        let kind = self.data.topology.as_deref()?.to_ascii_lowercase();
        let device_count = self.data.devices?;
        Some(TopologyRequest { kind, device_count })
    }
}

/// Decodes a raw `/chat` response body.
pub fn decode_chat_response(body: &str) -> Result<ChatResponse> {
    serde_json::from_str(body).map_err(|err| Error::MalformedResponse {
        message: err.to_string(),
    })
}

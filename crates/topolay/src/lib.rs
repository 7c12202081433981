#![forbid(unsafe_code)]

//! Headless network-topology layout synthesis.
//!
//! Given a topology kind and a device count (extracted upstream from a natural
//! language utterance), this crate produces a concrete graph: nodes with stable
//! ids, labels, 2-D coordinates and a visual role, plus edges between them. The
//! upstream intent-extraction service and the interactive renderer both stay
//! external; this crate only speaks their wire contracts.
//!
//! Design goals:
//! - deterministic, testable layouts (identical input, identical graph)
//! - total generation: unrecognized kinds degrade to the empty graph instead of
//!   failing
//! - no I/O and no shared state beyond the session's current graph

pub mod error;
pub mod geom;
pub mod graph;
pub mod intent;
pub mod layout;
pub mod session;
pub mod topology;

pub use error::{Error, Result};
pub use graph::{Edge, Node, NodeRole, TopologyGraph};
pub use intent::{ChatData, ChatResponse, HealthResponse, TopologyRequest, decode_chat_response};
pub use layout::generate;
pub use session::TopologySession;
pub use topology::TopologyKind;

#[cfg(test)]
mod tests;

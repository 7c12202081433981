use serde::{Deserialize, Serialize};

/// The closed set of topology kinds the generator understands.
///
/// Matching is case-insensitive. Anything outside the set maps to
/// [`TopologyKind::Unrecognized`], which generates the empty graph: unrecognized
/// input is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    Clean,
    Star,
    Ring,
    Line,
    Bus,
    Mesh,
    Unrecognized,
}

impl TopologyKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "clean" => Self::Clean,
            "star" => Self::Star,
            "ring" => Self::Ring,
            "line" => Self::Line,
            "bus" => Self::Bus,
            "mesh" => Self::Mesh,
            _ => Self::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Star => "star",
            Self::Ring => "ring",
            Self::Line => "line",
            Self::Bus => "bus",
            Self::Mesh => "mesh",
            Self::Unrecognized => "unrecognized",
        }
    }
}

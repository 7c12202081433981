use crate::graph::TopologyGraph;
use crate::intent::ChatResponse;
use crate::layout;
use crate::topology::TopologyKind;

/// Edge-triggered recompute boundary between the intent service and the
/// renderer.
///
/// The session remembers the last observed `(kind, device count)` pair and the
/// graph generated for it. A complete observation regenerates the graph only
/// when the pair changed, replacing the previous graph wholesale; a partial
/// observation (either half absent) leaves the current graph untouched.
#[derive(Debug, Default)]
pub struct TopologySession {
    last: Option<(TopologyKind, i64)>,
    graph: TopologyGraph,
}

impl TopologySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed graph. Empty until the first complete
    /// observation.
    pub fn graph(&self) -> &TopologyGraph {
        &self.graph
    }

    /// Feeds one upstream update. Returns `true` when the graph was
    /// regenerated.
    ///
    /// Kinds are compared after parsing, so spellings that only differ in case
    /// or padding do not force a recompute.
    pub fn observe(&mut self, topology: Option<&str>, devices: Option<i64>) -> bool {
        let (Some(raw), Some(devices)) = (topology, devices) else {
            return false;
        };
        let kind = TopologyKind::parse(raw);
        if self.last == Some((kind, devices)) {
            return false;
        }
        tracing::debug!(kind = kind.as_str(), devices, "recomputing topology graph");
        self.graph = layout::generate(kind, devices);
        self.last = Some((kind, devices));
        true
    }

    /// Applies a decoded chat response. Failed responses and responses without
    /// a complete pair never reach the generator.
    pub fn apply(&mut self, response: &ChatResponse) -> bool {
        match response.topology_request() {
            Some(request) => self.observe(Some(&request.kind), Some(request.device_count)),
            None => false,
        }
    }
}

//! Per-kind topology construction.
//!
//! The canonical layout area is a 500x500 logical unit square centered at
//! (250, 250). Circular layouts (star, ring) place devices on a 150-unit
//! radius; row layouts (line, bus) and the mesh grid use a 100-unit pitch.

use crate::geom::{self, Point};
use crate::graph::{Edge, Node, NodeRole, TopologyGraph};
use crate::topology::TopologyKind;
use std::f64::consts::TAU;

const CENTER_X: f64 = 250.0;
const CENTER_Y: f64 = 250.0;
const RADIUS: f64 = 150.0;
const ROW_START_X: f64 = 100.0;
const SPACING: f64 = 100.0;
const MESH_COLUMNS: usize = 5;

fn center() -> Point {
    geom::point(CENTER_X, CENTER_Y)
}

/// Builds the graph for `kind` with `device_count` ordinary devices.
///
/// Pure and total: `clean` and unrecognized kinds produce the empty graph, and
/// so does a negative count (the declared domain is non-negative; degrading
/// beats letting per-kind loops disagree about what a negative count means).
pub fn generate(kind: TopologyKind, device_count: i64) -> TopologyGraph {
    let Ok(count) = usize::try_from(device_count) else {
        return TopologyGraph::default();
    };

    match kind {
        TopologyKind::Clean | TopologyKind::Unrecognized => TopologyGraph::default(),
        TopologyKind::Star => star(count),
        TopologyKind::Ring => ring(count),
        TopologyKind::Line => line(count),
        TopologyKind::Bus => bus(count),
        TopologyKind::Mesh => mesh(count),
    }
}

/// Hub "Center" in the middle, devices on the radius circle, one spoke each.
fn star(count: usize) -> TopologyGraph {
    let mut graph = TopologyGraph::default();
    graph
        .nodes
        .push(Node::new("0", "Center", center(), NodeRole::Hub));
    for i in 1..=count {
        let angle = TAU * (i - 1) as f64 / count as f64;
        let pos = geom::on_circle(center(), RADIUS, angle);
        graph
            .nodes
            .push(Node::new(i.to_string(), format!("Device {i}"), pos, NodeRole::Leaf));
        graph
            .edges
            .push(Edge::new(format!("0-{i}"), "0", i.to_string()));
    }
    graph
}

/// Devices evenly spaced on the radius circle; device `i` connects to
/// `(i + 1) mod count`, closing the cycle. A single device keeps the
/// wrap-around edge and therefore connects to itself.
fn ring(count: usize) -> TopologyGraph {
    let mut graph = TopologyGraph::default();
    for i in 0..count {
        let angle = TAU * i as f64 / count as f64;
        let pos = geom::on_circle(center(), RADIUS, angle);
        graph.nodes.push(Node::new(
            i.to_string(),
            format!("Device {}", i + 1),
            pos,
            NodeRole::Leaf,
        ));
    }
    for i in 0..count {
        let j = (i + 1) % count;
        graph
            .edges
            .push(Edge::new(format!("e{i}-{j}"), i.to_string(), j.to_string()));
    }
    graph
}

/// Devices left-to-right on one row; device `i` connects back to `i - 1`.
fn line(count: usize) -> TopologyGraph {
    let mut graph = TopologyGraph::default();
    for i in 0..count {
        let pos = geom::point(ROW_START_X + i as f64 * SPACING, CENTER_Y);
        graph.nodes.push(Node::new(
            i.to_string(),
            format!("Device {}", i + 1),
            pos,
            NodeRole::Leaf,
        ));
        if i > 0 {
            graph.edges.push(Edge::new(
                format!("e{}-{i}", i - 1),
                (i - 1).to_string(),
                i.to_string(),
            ));
        }
    }
    graph
}

/// Hub "Bus" fixed on the left, devices on the same row to its right, each
/// attached to the hub.
fn bus(count: usize) -> TopologyGraph {
    let mut graph = TopologyGraph::default();
    graph.nodes.push(Node::new(
        "bus",
        "Bus",
        geom::point(ROW_START_X, CENTER_Y),
        NodeRole::Hub,
    ));
    for i in 0..count {
        let pos = geom::point(ROW_START_X + SPACING + i as f64 * SPACING, CENTER_Y);
        graph.nodes.push(Node::new(
            format!("device-{i}"),
            format!("Device {}", i + 1),
            pos,
            NodeRole::Leaf,
        ));
        graph
            .edges
            .push(Edge::new(format!("bus-{i}"), "bus", format!("device-{i}")));
    }
    graph
}

/// Devices in a fixed-width grid, row-major; every unordered pair connects
/// exactly once, so the edge count is `count * (count - 1) / 2`.
fn mesh(count: usize) -> TopologyGraph {
    let mut graph = TopologyGraph::default();
    for i in 0..count {
        let col = i % MESH_COLUMNS;
        let row = i / MESH_COLUMNS;
        let pos = geom::point(
            ROW_START_X + col as f64 * SPACING,
            CENTER_Y - 200.0 + row as f64 * SPACING,
        );
        graph.nodes.push(Node::new(
            i.to_string(),
            format!("Device {}", i + 1),
            pos,
            NodeRole::Leaf,
        ));
    }
    for i in 0..count {
        for j in (i + 1)..count {
            graph
                .edges
                .push(Edge::new(format!("e{i}-{j}"), i.to_string(), j.to_string()));
        }
    }
    graph
}

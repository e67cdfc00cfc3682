// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! An undirected graph representation of the connectivity nodes of a
//! substation, and the equipment that connects them.

mod boundary;
mod creation;
mod description;
mod retrieval;
mod traversal;

pub mod iterators;

pub use boundary::Boundary;

use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Nodes stored in an `UnGraph` instance can be addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any connectivity
/// node id, so that nodes in the `UnGraph` can be retrieved from their ids.
pub(crate) type NodeIndexMap = HashMap<String, NodeIndex>;

/// The label of an edge in a [`TopologyGraph`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// The edge was produced by the equipment with the given id.
    Equipment(String),
    /// The edge connects a transformer winding to its neutral point.
    Neutral,
}

impl EdgeLabel {
    /// Returns the id of the equipment that produced the edge, if any.
    pub fn equipment_id(&self) -> Option<&str> {
        match self {
            EdgeLabel::Equipment(id) => Some(id),
            EdgeLabel::Neutral => None,
        }
    }
}

impl std::fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeLabel::Equipment(id) => write!(f, "{id}"),
            EdgeLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// A graph representation of the connectivity nodes of a substation and the
/// equipment connecting them.
///
/// The graph is built once from a snapshot of the equipment model and is
/// never updated afterwards.
#[derive(Clone, Debug, Default)]
pub struct TopologyGraph {
    graph: UnGraph<String, EdgeLabel>,
    node_indices: NodeIndexMap,
}

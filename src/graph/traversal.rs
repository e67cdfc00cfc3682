// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains methods that help with graph traversal.

use crate::search::{self, ParentMap, SearchGraph, Traversal, TraversalOrder};
use crate::{Error, TopologyGraph};

impl SearchGraph for TopologyGraph {
    type NodeId = String;

    fn contains_node(&self, node: &String) -> bool {
        TopologyGraph::contains_node(self, node)
    }
}

/// Traversal methods.
impl TopologyGraph {
    /// Performs a pre-order depth-first search from the given start nodes,
    /// until `should_stop` returns `true`.
    ///
    /// Neighbors are visited in the order described in
    /// [`neighbors`][TopologyGraph::neighbors].
    pub fn bounded_search(
        &self,
        starts: impl IntoIterator<Item = String>,
        should_stop: impl FnMut(&[String], &TopologyGraph, &ParentMap<String>) -> bool,
    ) -> Result<Traversal<String>, Error> {
        search::dfs(
            self,
            starts,
            TraversalOrder::PreOrder,
            |graph, node| {
                graph
                    .neighbors(node)
                    .map(|neighbors| neighbors.map(str::to_string).collect::<Vec<_>>())
                    .unwrap_or_default()
            },
            should_stop,
        )
    }
}

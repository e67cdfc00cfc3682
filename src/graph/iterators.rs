// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over nodes and connections in a `TopologyGraph`.

use std::vec::IntoIter;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::EdgeLabel;

/// An iterator over the node ids in a `TopologyGraph`.
pub struct Nodes<'a> {
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<String>>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| n.weight.as_str())
    }
}

/// An iterator over the connections in a `TopologyGraph`.
///
/// Each item is a `(node, node, label)` triple, with the nodes in the order
/// in which the equipment listed its terminals.
pub struct Connections<'a> {
    pub(crate) graph: &'a UnGraph<String, EdgeLabel>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<EdgeLabel>>,
}

impl<'a> Iterator for Connections<'a> {
    type Item = (&'a str, &'a str, &'a EdgeLabel);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
                &e.weight,
            )
        })
    }
}

/// An iterator over the neighbors of a node in a `TopologyGraph`.
pub struct Neighbors<'a> {
    pub(crate) graph: &'a UnGraph<String, EdgeLabel>,
    pub(crate) iter: IntoIter<NodeIndex>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| self.graph[i].as_str())
    }
}

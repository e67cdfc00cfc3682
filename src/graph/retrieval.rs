// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving nodes and connections from a [`TopologyGraph`].

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::iterators::{Connections, Neighbors, Nodes};
use crate::{Error, TopologyGraph};

use super::EdgeLabel;

/// Node and connection retrieval.
impl TopologyGraph {
    /// Returns true if the graph has a node with the given id.
    pub fn contains_node(&self, node: &str) -> bool {
        self.node_indices.contains_key(node)
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns an iterator over the node ids, in the order they were added.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the connections in the graph, in the order
    /// they were added.
    pub fn connections(&self) -> Connections<'_> {
        Connections {
            graph: &self.graph,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns the label of the edge between the two given nodes, in any
    /// direction.
    ///
    /// If multiple pieces of equipment connect the two nodes, the label of
    /// the one that was added first is returned.
    pub fn edge_label(&self, a: &str, b: &str) -> Option<&EdgeLabel> {
        self.edge_labels(a, b).next()
    }

    /// Returns an iterator over the labels of all edges between the two given
    /// nodes, in any direction, in the order the edges were added.
    ///
    /// The iterator is empty if either node does not exist.
    pub fn edge_labels(&self, a: &str, b: &str) -> impl Iterator<Item = &EdgeLabel> {
        let mut edges = match (self.node_indices.get(a), self.node_indices.get(b)) {
            (Some(&a), Some(&b)) => self.graph.edges_connecting(a, b).collect::<Vec<_>>(),
            _ => vec![],
        };
        edges.sort_by_key(|e| e.id());
        edges.into_iter().map(|e| e.weight())
    }

    /// Returns an iterator over the *neighbors* of the given node.
    ///
    /// Neighbors are listed in the order in which the edges connecting them
    /// to the node were added to the graph.  A neighbor that is connected
    /// through multiple edges is listed only once, at the position of its
    /// first edge.
    ///
    /// Returns an error if the given node does not exist.
    pub fn neighbors(&self, node: &str) -> Result<Neighbors<'_>, Error> {
        let index = self.node_index(node)?;

        let mut edges = self.graph.edges(index).collect::<Vec<_>>();
        edges.sort_by_key(|e| e.id());

        let mut seen = HashSet::new();
        let neighbors = edges
            .into_iter()
            .map(|e| if e.source() == index { e.target() } else { e.source() })
            .filter(|n| seen.insert(*n))
            .collect::<Vec<_>>();

        Ok(Neighbors {
            graph: &self.graph,
            iter: neighbors.into_iter(),
        })
    }

    pub(crate) fn node_index(&self, node: &str) -> Result<NodeIndex, Error> {
        self.node_indices
            .get(node)
            .copied()
            .ok_or_else(|| Error::node_not_found(format!("Graph does not have node: {node}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestModel;
    use crate::EquipmentType;

    fn model() -> TestModel {
        let mut model = TestModel::new();
        model
            .add_equipment("Q1", EquipmentType::CircuitBreaker, &["A", "B"])
            .add_equipment("Q2", EquipmentType::CircuitBreaker, &["C", "A"])
            .add_equipment("Q3", EquipmentType::Disconnector, &["B", "D"])
            .add_equipment("Q4", EquipmentType::Disconnector, &["A", "B"])
            .add_equipment("Q5", EquipmentType::Line, &["D", "A"]);
        model
    }

    #[test]
    fn test_nodes() {
        let tg = TopologyGraph::new(&model());

        assert!(tg.nodes().eq(["A", "B", "C", "D"]));
        assert!(tg.contains_node("D"));
        assert!(!tg.contains_node("E"));
    }

    #[test]
    fn test_edge_label() {
        let tg = TopologyGraph::new(&model());

        assert_eq!(
            tg.edge_label("A", "C"),
            Some(&EdgeLabel::Equipment("Q2".to_string()))
        );
        assert_eq!(
            tg.edge_label("C", "A"),
            Some(&EdgeLabel::Equipment("Q2".to_string()))
        );
        assert_eq!(
            tg.edge_label("B", "A"),
            Some(&EdgeLabel::Equipment("Q1".to_string()))
        );
        assert_eq!(tg.edge_label("B", "C"), None);
        assert_eq!(tg.edge_label("B", "E"), None);
    }

    #[test]
    fn test_edge_labels() {
        let tg = TopologyGraph::new(&model());

        let labels = |a: &str, b: &str| {
            tg.edge_labels(a, b)
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(labels("A", "B"), vec!["Q1", "Q4"]);
        assert_eq!(labels("B", "A"), vec!["Q1", "Q4"]);
        assert_eq!(labels("D", "A"), vec!["Q5"]);
        assert!(labels("B", "C").is_empty());
        assert!(labels("A", "E").is_empty());
    }

    #[test]
    fn test_neighbors() -> Result<(), Error> {
        let tg = TopologyGraph::new(&model());

        assert!(tg.neighbors("A")?.eq(["B", "C", "D"]));
        assert!(tg.neighbors("B")?.eq(["A", "D"]));
        assert!(tg.neighbors("C")?.eq(["A"]));
        assert!(tg.neighbors("D")?.eq(["B", "A"]));

        assert!(tg
            .neighbors("E")
            .is_err_and(|e| e == Error::node_not_found("Graph does not have node: E")));

        Ok(())
    }
}

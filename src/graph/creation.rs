// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`TopologyGraph`] instances from an equipment model.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;

use crate::{
    equipment_type::TypePredicates, Equipment, EquipmentIndex, EquipmentModel, Terminal, Winding,
};

use super::{EdgeLabel, TopologyGraph};

/// `TopologyGraph` instantiation.
impl TopologyGraph {
    /// Creates a new [`TopologyGraph`] from the given equipment model.
    ///
    /// Equipment is connected through its non-grounded terminals.  Equipment
    /// with more than two, or no such terminals can't be represented as a
    /// single edge and is left unconnected.
    ///
    /// A winding with a neutral point connects its node to the neutral point
    /// with an [`EdgeLabel::Neutral`] edge.  The edge is left out if the
    /// winding's transformer resolves to equipment that is not a power
    /// transformer, and kept if the transformer can't be resolved at all.
    pub fn new<M: EquipmentModel>(model: &M) -> Self {
        let mut tg = Self::default();

        let mut terminals: HashMap<&str, Vec<&str>> = HashMap::new();
        for terminal in model.terminals().filter(|t| !t.is_grounded()) {
            terminals
                .entry(terminal.equipment_id())
                .or_default()
                .push(terminal.connectivity_node());
        }

        for equipment in model.equipment() {
            let eid = equipment.equipment_id();
            let nodes = terminals.get(eid).map(Vec::as_slice).unwrap_or_default();
            tg.add_equipment(eid, nodes);
        }

        for winding in model.windings() {
            tg.add_neutral_point(model, winding);
        }

        tg
    }

    fn add_equipment(&mut self, eid: &str, nodes: &[&str]) {
        let label = EdgeLabel::Equipment(eid.to_string());
        match nodes {
            // Without a far side, the equipment is a point of its own.
            [node] => self.add_connection(eid, node, label),
            [a, b] if a == b => {
                tracing::debug!("Skipping {eid}: both terminals connect to {a}.");
            }
            [a, b] => self.add_connection(a, b, label),
            _ => {
                tracing::debug!(
                    "Skipping {eid}: can't connect equipment with {} terminals.",
                    nodes.len()
                );
            }
        }
    }

    fn add_neutral_point<M: EquipmentIndex, W: Winding>(&mut self, model: &M, winding: &W) {
        let (Some(node), Some(neutral)) = (winding.connectivity_node(), winding.neutral_point())
        else {
            return;
        };

        let tid = winding.transformer_id();
        if let Some(transformer) = model.resolve(tid) {
            if !transformer.is_power_transformer() {
                tracing::warn!(
                    "Skipping neutral point {neutral}: {tid} is a {}, not a power transformer.",
                    transformer.equipment_type()
                );
                return;
            }
        }

        self.add_connection(node, neutral, EdgeLabel::Neutral);
    }

    fn add_connection(&mut self, a: &str, b: &str, label: EdgeLabel) {
        let a = self.add_node(a);
        let b = self.add_node(b);
        self.graph.add_edge(a, b, label);
    }

    fn add_node(&mut self, node: &str) -> NodeIndex {
        if let Some(index) = self.node_indices.get(node) {
            return *index;
        }
        let index = self.graph.add_node(node.to_string());
        self.node_indices.insert(node.to_string(), index);
        index
    }
}

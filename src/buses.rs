// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Discovery of the buses of a substation, which are used as the starting
//! points of boundary searches.

use crate::{Bay, EquipmentModel, TopologyConfig};

/// The buses of a substation, mapped to their connectivity nodes, in the
/// order they were discovered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Buses {
    entries: Vec<(String, String)>,
}

impl Buses {
    /// Returns the connectivity node of the bus with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node.as_str())
    }

    /// Returns an iterator over the bus names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns an iterator over `(name, connectivity node)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, node)| (name.as_str(), node.as_str()))
    }

    /// Returns the number of buses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no buses.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a bus, or replaces the connectivity node of a bus that was
    /// already discovered, keeping its position.
    fn insert(&mut self, name: &str, node: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = node.to_string(),
            None => self.entries.push((name.to_string(), node.to_string())),
        }
    }
}

/// Finds the bays of the model that act as buses, and their connectivity
/// nodes.
///
/// A bay is a bus if its name starts with
/// [`bus_prefix`][TopologyConfig::bus_prefix], ignoring case.
///
/// Returns `None` if there is no model, which is different from a model
/// without buses, for which an empty [`Buses`] is returned.
pub fn discover_buses<M: EquipmentModel>(
    model: Option<&M>,
    config: &TopologyConfig,
) -> Option<Buses> {
    let model = model?;

    let mut buses = Buses::default();
    for bay in model.bays().filter(|b| config.is_bus_name(b.name())) {
        let Some(node) = bay.connectivity_node() else {
            tracing::warn!("Bus {} has no connectivity node.", bay.name());
            continue;
        };
        buses.insert(bay.name(), node);
    }

    tracing::debug!("Discovered {} buses.", buses.len());
    Some(buses)
}

// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for finding the equipment on the boundary between a starting point
//! and the nearest equipment of a given type.

use std::collections::HashSet;

use crate::equipment_type::TypePredicates;
use crate::search::{ParentMap, Traversal};
use crate::{Buses, EquipmentIndex, EquipmentType, Error, TopologyGraph};

use super::EdgeLabel;

/// The result of a boundary search.
#[derive(Debug)]
pub struct Boundary<'a, E> {
    traversal: Traversal<String>,
    equipment: Vec<&'a E>,
}

impl<'a, E> Boundary<'a, E> {
    /// Returns the nodes visited by the search, in the order they were
    /// visited.
    pub fn path(&self) -> &[String] {
        self.traversal.path()
    }

    /// Returns the traversal the boundary was resolved from.
    pub fn traversal(&self) -> &Traversal<String> {
        &self.traversal
    }

    /// Returns true if the search crossed equipment of the target type.
    pub fn reached(&self) -> bool {
        self.traversal.halted()
    }

    /// Returns the equipment of the target type along the path, in the
    /// order it was found.
    pub fn equipment(&self) -> &[&'a E] {
        &self.equipment
    }

    /// Consumes the boundary and returns the equipment of the target type.
    pub fn into_equipment(self) -> Vec<&'a E> {
        self.equipment
    }
}

/// Boundary search.
impl TopologyGraph {
    /// Searches from the given node until an edge produced by equipment of
    /// the `target` type is crossed, and returns the equipment of that type
    /// along the visited path.
    ///
    /// Equipment that `index` can't resolve doesn't take part in the search
    /// or in the result.
    ///
    /// Returns an error if the given node does not exist.
    pub fn find_boundary<'a, I: EquipmentIndex>(
        &self,
        index: &'a I,
        from: &str,
        target: EquipmentType,
    ) -> Result<Boundary<'a, I::Equipment>, Error> {
        let traversal = self.bounded_search([from.to_string()], |path, graph, parents| {
            graph.crosses_boundary(index, path, parents, target)
        })?;
        let equipment = self.path_equipment(index, traversal.path(), target);

        Ok(Boundary {
            traversal,
            equipment,
        })
    }

    /// Returns the equipment found by [`find_boundary`][Self::find_boundary].
    pub fn boundary_equipment<'a, I: EquipmentIndex>(
        &self,
        index: &'a I,
        from: &str,
        target: EquipmentType,
    ) -> Result<Vec<&'a I::Equipment>, Error> {
        self.find_boundary(index, from, target)
            .map(Boundary::into_equipment)
    }

    /// Searches for the boundary of the bus with the given name.
    ///
    /// Returns an error if there is no such bus, or if its connectivity node
    /// is not in the graph.
    pub fn bus_boundary<'a, I: EquipmentIndex>(
        &self,
        index: &'a I,
        buses: &Buses,
        bus_name: &str,
        target: EquipmentType,
    ) -> Result<Boundary<'a, I::Equipment>, Error> {
        let node = buses
            .get(bus_name)
            .ok_or_else(|| Error::bus_not_found(format!("No bus named {bus_name}.")))?;
        self.find_boundary(index, node, target)
    }

    /// Searches for the boundary of every bus, in the order of `buses`.
    ///
    /// Buses whose connectivity node has no equipment attached, and therefore
    /// is not in the graph, are skipped.
    pub fn bus_boundaries<'a, 'b, I: EquipmentIndex>(
        &self,
        index: &'a I,
        buses: &'b Buses,
        target: EquipmentType,
    ) -> Vec<(&'b str, Boundary<'a, I::Equipment>)> {
        buses
            .iter()
            .filter_map(|(name, node)| match self.find_boundary(index, node, target) {
                Ok(boundary) => Some((name, boundary)),
                Err(err) => {
                    tracing::warn!("Skipping bus {name}: {err}");
                    None
                }
            })
            .collect()
    }

    /// Returns true if the last node of `path` was reached over an edge that
    /// was produced by equipment of the `target` type.
    ///
    /// All parallel edges between the node and its parent are considered.
    fn crosses_boundary<I: EquipmentIndex>(
        &self,
        index: &I,
        path: &[String],
        parents: &ParentMap<String>,
        target: EquipmentType,
    ) -> bool {
        let Some(node) = path.last() else {
            return false;
        };
        let Some(parent) = parents.get(node) else {
            return false;
        };
        self.edge_labels(parent, node)
            .filter_map(EdgeLabel::equipment_id)
            .filter_map(|id| index.resolve(id))
            .any(|equipment| equipment.is_type(target))
    }

    /// Resolves the equipment of the `target` type along `path`.
    ///
    /// For every node on the path, this looks at the edges from the previously
    /// visited node, and at direct edges from the start node, which catches
    /// equipment that connects straight back to the start.
    fn path_equipment<'a, I: EquipmentIndex>(
        &self,
        index: &'a I,
        path: &[String],
        target: EquipmentType,
    ) -> Vec<&'a I::Equipment> {
        let Some(start) = path.first() else {
            return vec![];
        };

        let mut seen = HashSet::new();
        let mut ids = vec![];
        for (i, node) in path.iter().enumerate().skip(1) {
            for from in [&path[i - 1], start] {
                for id in self.edge_labels(from, node).filter_map(EdgeLabel::equipment_id) {
                    if seen.insert(id) {
                        ids.push(id);
                    }
                }
            }
        }

        ids.into_iter()
            .filter_map(|id| index.resolve(id))
            .filter(|equipment| equipment.is_type(target))
            .collect()
    }
}

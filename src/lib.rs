// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Substation Topology

This is a library for representing the electrical connectivity of a
substation as an undirected graph of connectivity nodes, and for finding the
equipment that lies on the boundary between a starting point and the nearest
equipment of a given type, for example the nearest current transformer of a
bus.

## The model traits

The main struct is [`TopologyGraph`], instances of which can be created from
any equipment model with the [`new`][TopologyGraph::new] method.

Because `substation_topology` is an independent library, it doesn't know
about the record types of the equipment model and instead uses traits to
interact with them.  The model must implement [`EquipmentModel`], and its
records must implement [`Equipment`], [`Terminal`], [`Winding`] and [`Bay`].

## Graph construction

Each equipment item is connected according to its non-grounded terminals:

- Equipment with two terminals becomes an edge between the connectivity nodes
  of its terminals.
- Equipment with a single terminal becomes a node of its own, connected to
  the connectivity node of its terminal.
- Windings of power transformers that declare a neutral point are connected
  to that neutral point with an edge labelled [`EdgeLabel::Neutral`].

Edges are labelled with the id of the equipment that produced them.

## Bounded search

The [`search`] module contains a generic, early terminating depth-first
search that also records the node from which every node was reached.  It is
specialized by:

- [`find_boundary`][TopologyGraph::find_boundary]
- [`boundary_equipment`][TopologyGraph::boundary_equipment]
- [`bus_boundary`][TopologyGraph::bus_boundary]
- [`bus_boundaries`][TopologyGraph::bus_boundaries]

The seeds for these searches are usually found with [`discover_buses`].
*/

mod equipment_type;
pub use equipment_type::{EquipmentType, TypePredicates};

mod graph;
pub use graph::{iterators, Boundary, EdgeLabel, TopologyGraph};

mod model_traits;
pub use model_traits::{Bay, Equipment, EquipmentIndex, EquipmentModel, Terminal, Winding};

mod buses;
pub use buses::{discover_buses, Buses};

pub mod search;

mod config;
pub use config::TopologyConfig;

mod error;
pub use error::Error;

#[cfg(test)]
mod test_utils;

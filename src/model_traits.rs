// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the
//! equipment model and its records.

use crate::equipment_type::EquipmentType;

/**
This trait needs to be implemented by the type that represents a piece of
conducting equipment.

Read more about why this is necessary [here][crate#the-model-traits].

<details>
<summary>Example implementation for an XML element wrapper:</summary>

```ignore
impl substation_topology::Equipment for ConductingEquipment {
    fn equipment_id(&self) -> &str {
        // e.g. "XAT/V220/Bus_A/QB1", built from the names of the ancestors.
        &self.identity
    }

    fn equipment_type(&self) -> substation_topology::EquipmentType {
        substation_topology::EquipmentType::from(self.attribute("type").unwrap_or_default())
    }

    fn name(&self) -> &str {
        self.attribute("name").unwrap_or_default()
    }
}
```

</details>
*/
pub trait Equipment {
    /// Returns the stable, unique id of the equipment.
    fn equipment_id(&self) -> &str;
    /// Returns the type of the equipment.
    fn equipment_type(&self) -> EquipmentType;
    /// Returns the human readable name of the equipment.
    fn name(&self) -> &str;
}

/// This trait needs to be implemented by the type that represents the
/// connection point of a piece of equipment to a connectivity node.
pub trait Terminal {
    /// Returns the id of the equipment that owns the terminal.
    fn equipment_id(&self) -> &str;
    /// Returns the id of the connectivity node the terminal connects to.
    fn connectivity_node(&self) -> &str;
    /// Returns true if the terminal connects to ground rather than to a
    /// connectivity node of the substation.
    fn is_grounded(&self) -> bool;
}

/// This trait needs to be implemented by the type that represents a winding
/// of a power transformer.
pub trait Winding {
    /// Returns the id of the power transformer the winding belongs to.
    fn transformer_id(&self) -> &str;
    /// Returns the connectivity node of the winding's terminal, if any.
    fn connectivity_node(&self) -> Option<&str>;
    /// Returns the connectivity node of the winding's neutral point, if the
    /// winding declares one.
    fn neutral_point(&self) -> Option<&str>;
}

/// This trait needs to be implemented by the type that represents a named
/// group of equipment, some of which act as buses.
pub trait Bay {
    /// Returns the name of the bay.
    fn name(&self) -> &str;
    /// Returns the connectivity node owned by the bay, if any.
    fn connectivity_node(&self) -> Option<&str>;
}

/// A lookup of equipment records by id.
pub trait EquipmentIndex {
    type Equipment: Equipment;

    /// Returns the equipment with the given id, or `None` if the model
    /// doesn't know about it.
    fn resolve(&self, equipment_id: &str) -> Option<&Self::Equipment>;
}

/**
This trait needs to be implemented by the type that provides a snapshot of
the equipment model.

All enumerations must return the records in document order, because the
order of the edges in a [`TopologyGraph`][crate::TopologyGraph] and hence the
order of a search follow from it.
*/
pub trait EquipmentModel: EquipmentIndex {
    type Terminal: Terminal;
    type Winding: Winding;
    type Bay: Bay;

    /// Returns an iterator over the conducting equipment and the power
    /// transformers of the model.
    fn equipment(&self) -> impl Iterator<Item = &Self::Equipment>;
    /// Returns an iterator over the terminals of all equipment.
    fn terminals(&self) -> impl Iterator<Item = &Self::Terminal>;
    /// Returns an iterator over the windings of all power transformers.
    fn windings(&self) -> impl Iterator<Item = &Self::Winding>;
    /// Returns an iterator over all bays of the model.
    fn bays(&self) -> impl Iterator<Item = &Self::Bay>;
}

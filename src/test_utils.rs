// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the crate.
//!
//! - the `TestEquipment`, `TestTerminal`, `TestWinding` and `TestBay` types,
//!   which implement the model traits.
//! - the `TestModel`, which can declaratively build equipment models for use
//!   in tests.

use crate::{Bay, Equipment, EquipmentIndex, EquipmentModel, EquipmentType, Terminal, Winding};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestEquipment(String, EquipmentType);

impl TestEquipment {
    pub(crate) fn new(id: &str, equipment_type: EquipmentType) -> Self {
        TestEquipment(id.to_string(), equipment_type)
    }
}

impl Equipment for TestEquipment {
    fn equipment_id(&self) -> &str {
        &self.0
    }

    fn equipment_type(&self) -> EquipmentType {
        self.1
    }

    fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestTerminal {
    equipment_id: String,
    node: String,
    grounded: bool,
}

impl Terminal for TestTerminal {
    fn equipment_id(&self) -> &str {
        &self.equipment_id
    }

    fn connectivity_node(&self) -> &str {
        &self.node
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestWinding {
    transformer_id: String,
    node: Option<String>,
    neutral: Option<String>,
}

impl Winding for TestWinding {
    fn transformer_id(&self) -> &str {
        &self.transformer_id
    }

    fn connectivity_node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    fn neutral_point(&self) -> Option<&str> {
        self.neutral.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestBay(String, Option<String>);

impl Bay for TestBay {
    fn name(&self) -> &str {
        &self.0
    }

    fn connectivity_node(&self) -> Option<&str> {
        self.1.as_deref()
    }
}

/// An in-memory equipment model, for use in tests.
#[derive(Default)]
pub(crate) struct TestModel {
    equipment: Vec<TestEquipment>,
    terminals: Vec<TestTerminal>,
    windings: Vec<TestWinding>,
    bays: Vec<TestBay>,
}

impl TestModel {
    /// Creates a new, empty `TestModel`.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a piece of equipment with one terminal on each of the given
    /// connectivity nodes.
    pub(crate) fn add_equipment(
        &mut self,
        id: &str,
        equipment_type: EquipmentType,
        nodes: &[&str],
    ) -> &mut Self {
        self.equipment.push(TestEquipment::new(id, equipment_type));
        for node in nodes {
            self.add_terminal(id, node, false);
        }
        self
    }

    /// Adds a terminal to an existing piece of equipment.
    pub(crate) fn add_terminal(&mut self, id: &str, node: &str, grounded: bool) -> &mut Self {
        self.terminals.push(TestTerminal {
            equipment_id: id.to_string(),
            node: node.to_string(),
            grounded,
        });
        self
    }

    /// Adds a power transformer with the given `(node, neutral)` windings.
    ///
    /// Every winding also contributes a terminal owned by the transformer.
    pub(crate) fn add_transformer(
        &mut self,
        id: &str,
        windings: &[(&str, Option<&str>)],
    ) -> &mut Self {
        self.equipment
            .push(TestEquipment::new(id, EquipmentType::PowerTransformer));
        for (node, neutral) in windings {
            self.add_terminal(id, node, false);
            self.windings.push(TestWinding {
                transformer_id: id.to_string(),
                node: Some(node.to_string()),
                neutral: neutral.map(str::to_string),
            });
        }
        self
    }

    /// Adds a bay owning the given connectivity node.
    pub(crate) fn add_bay(&mut self, name: &str, node: Option<&str>) -> &mut Self {
        self.bays
            .push(TestBay(name.to_string(), node.map(str::to_string)));
        self
    }

    /// Removes the record of the given equipment, but keeps its terminals,
    /// to emulate a partial view of a model.
    pub(crate) fn forget(&mut self, id: &str) -> &mut Self {
        self.equipment.retain(|e| e.equipment_id() != id);
        self
    }

    /// Builds the model from the chain `A -CBR- B -CTR- C -LIN- D`, with the
    /// equipment ids `eq1`, `eq2` and `eq3`.
    pub(crate) fn chain() -> Self {
        let mut model = Self::new();
        model
            .add_equipment("eq1", EquipmentType::CircuitBreaker, &["A", "B"])
            .add_equipment("eq2", EquipmentType::CurrentTransformer, &["B", "C"])
            .add_equipment("eq3", EquipmentType::Line, &["C", "D"]);
        model
    }
}

impl EquipmentIndex for TestModel {
    type Equipment = TestEquipment;

    fn resolve(&self, equipment_id: &str) -> Option<&TestEquipment> {
        self.equipment
            .iter()
            .find(|e| e.equipment_id() == equipment_id)
    }
}

impl EquipmentModel for TestModel {
    type Terminal = TestTerminal;
    type Winding = TestWinding;
    type Bay = TestBay;

    fn equipment(&self) -> impl Iterator<Item = &TestEquipment> {
        self.equipment.iter()
    }

    fn terminals(&self) -> impl Iterator<Item = &TestTerminal> {
        self.terminals.iter()
    }

    fn windings(&self) -> impl Iterator<Item = &TestWinding> {
        self.windings.iter()
    }

    fn bays(&self) -> impl Iterator<Item = &TestBay> {
        self.bays.iter()
    }
}

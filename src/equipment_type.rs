// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `EquipmentType` enum, which represents the type of
//! a piece of conducting equipment.

use crate::model_traits::Equipment;
use std::fmt::Display;

/// Represents the type of a piece of conducting equipment.
///
/// Values are usually obtained from the three letter type codes of a
/// substation description, with [`From<&str>`].  Unknown codes become
/// [`EquipmentType::Unspecified`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EquipmentType {
    Unspecified,
    CircuitBreaker,
    Disconnector,
    CurrentTransformer,
    VoltageTransformer,
    Line,
    Cable,
    GasInsulatedLine,
    PowerTransformer,
    Generator,
    Infeed,
    Battery,
    Motor,
    CapacitorBank,
    Reactor,
    SurgeArrester,
    Bushing,
}

impl From<&str> for EquipmentType {
    fn from(code: &str) -> Self {
        match code {
            "CBR" => EquipmentType::CircuitBreaker,
            "DIS" => EquipmentType::Disconnector,
            "CTR" => EquipmentType::CurrentTransformer,
            "VTR" => EquipmentType::VoltageTransformer,
            "LIN" => EquipmentType::Line,
            "CAB" => EquipmentType::Cable,
            "GIL" => EquipmentType::GasInsulatedLine,
            "PTR" => EquipmentType::PowerTransformer,
            "GEN" => EquipmentType::Generator,
            "IFL" => EquipmentType::Infeed,
            "BAT" => EquipmentType::Battery,
            "MOT" => EquipmentType::Motor,
            "CAP" => EquipmentType::CapacitorBank,
            "REA" => EquipmentType::Reactor,
            "SAR" => EquipmentType::SurgeArrester,
            "BSH" => EquipmentType::Bushing,
            _ => EquipmentType::Unspecified,
        }
    }
}

impl Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquipmentType::Unspecified => write!(f, "Unspecified"),
            EquipmentType::CircuitBreaker => write!(f, "CBR"),
            EquipmentType::Disconnector => write!(f, "DIS"),
            EquipmentType::CurrentTransformer => write!(f, "CTR"),
            EquipmentType::VoltageTransformer => write!(f, "VTR"),
            EquipmentType::Line => write!(f, "LIN"),
            EquipmentType::Cable => write!(f, "CAB"),
            EquipmentType::GasInsulatedLine => write!(f, "GIL"),
            EquipmentType::PowerTransformer => write!(f, "PTR"),
            EquipmentType::Generator => write!(f, "GEN"),
            EquipmentType::Infeed => write!(f, "IFL"),
            EquipmentType::Battery => write!(f, "BAT"),
            EquipmentType::Motor => write!(f, "MOT"),
            EquipmentType::CapacitorBank => write!(f, "CAP"),
            EquipmentType::Reactor => write!(f, "REA"),
            EquipmentType::SurgeArrester => write!(f, "SAR"),
            EquipmentType::Bushing => write!(f, "BSH"),
        }
    }
}

/// Predicates for checking the type of an [`Equipment`].
///
/// Implemented for every type that implements [`Equipment`].
pub trait TypePredicates: Equipment {
    /// Returns true if the equipment is of the given type.
    fn is_type(&self, equipment_type: EquipmentType) -> bool {
        self.equipment_type() == equipment_type
    }

    fn is_breaker(&self) -> bool {
        self.is_type(EquipmentType::CircuitBreaker)
    }

    fn is_disconnector(&self) -> bool {
        self.is_type(EquipmentType::Disconnector)
    }

    fn is_current_transformer(&self) -> bool {
        self.is_type(EquipmentType::CurrentTransformer)
    }

    fn is_voltage_transformer(&self) -> bool {
        self.is_type(EquipmentType::VoltageTransformer)
    }

    fn is_power_transformer(&self) -> bool {
        self.is_type(EquipmentType::PowerTransformer)
    }

    /// Returns true for lines, cables and gas insulated lines.
    fn is_line(&self) -> bool {
        matches!(
            self.equipment_type(),
            EquipmentType::Line | EquipmentType::Cable | EquipmentType::GasInsulatedLine
        )
    }
}

/// Implement the `TypePredicates` trait for all types that implement the
/// `Equipment` trait.
impl<T: Equipment + ?Sized> TypePredicates for T {}

// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for topology analysis.

/// The default prefix of bays that are treated as buses.
pub(crate) const DEFAULT_BUS_PREFIX: &str = "BUS";

/// Configuration options for topology analysis.
#[derive(Clone, Debug)]
pub struct TopologyConfig {
    /// Bays whose name starts with this prefix are treated as buses.  The
    /// comparison ignores case.
    pub bus_prefix: String,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            bus_prefix: DEFAULT_BUS_PREFIX.to_string(),
        }
    }
}

impl TopologyConfig {
    /// Returns true if a bay with the given name should be treated as a bus.
    pub(crate) fn is_bus_name(&self, name: &str) -> bool {
        name.to_uppercase()
            .starts_with(&self.bus_prefix.to_uppercase())
    }
}

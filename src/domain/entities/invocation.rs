//! Invocation entity - everything the host build tool hands over for one run

use crate::domain::value_objects::InvocationMode;

use super::unit::InputUnit;

/// One pipeline run: the global mode plus every input unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub mode: InvocationMode,
    pub units: Vec<InputUnit>,
}

impl Invocation {
    pub fn new(mode: InvocationMode) -> Self {
        Self {
            mode,
            units: Vec::new(),
        }
    }

    pub fn full() -> Self {
        Self::new(InvocationMode::Full)
    }

    pub fn incremental() -> Self {
        Self::new(InvocationMode::Incremental)
    }

    pub fn with_unit(mut self, unit: impl Into<InputUnit>) -> Self {
        self.units.push(unit.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

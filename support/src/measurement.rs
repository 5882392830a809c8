//! Proxy access to measurement information services (e.g. UCUM).
//!
//! Services are owned by the caller and handed to the operations that need unit knowledge.

use crate::meta::{Error, Result};
use std::fmt;

/// A source of knowledge about units strings.
pub trait MeasurementService {
    /// True if `units` is a valid units string according to this source.
    fn is_valid_units_string(&self, units: &str) -> bool;

    /// True if both units strings measure the same property, e.g. `km` and `mm`.
    fn units_equivalent(&self, units1: &str, units2: &str) -> bool;
}

/// Ordered collection of [`MeasurementService`]s queried as one.
///
/// Services do not share knowledge: two units are only equivalent if a single service knows
/// both of them.
#[derive(Default)]
pub struct MeasurementServices {
    services: Vec<Box<dyn MeasurementService>>,
}

impl MeasurementServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, service: impl MeasurementService + 'static) {
        self.services.push(Box::new(service));
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn is_valid_units_string(&self, units: &str) -> Result<bool> {
        check_units(units)?;
        Ok(self
            .services
            .iter()
            .any(|service| service.is_valid_units_string(units)))
    }

    pub fn units_equivalent(&self, units1: &str, units2: &str) -> Result<bool> {
        check_units(units1)?;
        check_units(units2)?;
        let service = self.services.iter().find(|service| {
            service.is_valid_units_string(units1) && service.is_valid_units_string(units2)
        });
        match service {
            Some(service) => Ok(service.units_equivalent(units1, units2)),
            None => {
                tracing::trace!(units1, units2, "no measurement service knows both units");
                Ok(false)
            }
        }
    }
}

impl fmt::Debug for MeasurementServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasurementServices")
            .field("services", &self.services.len())
            .finish()
    }
}

fn check_units(units: &str) -> Result<()> {
    if units.trim().is_empty() {
        return Err(Error::InvalidUnits(units.to_string()));
    }
    Ok(())
}

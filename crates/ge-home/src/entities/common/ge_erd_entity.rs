//! Base for entities backed by an appliance register

use ge_erd::{ApplianceApi, ErdCode};
use std::fmt;
use std::sync::Arc;

/// Shared state for an entity bound to one appliance register
///
/// Concrete entities embed this and derive their names from the
/// appliance's serial number or MAC address.
#[derive(Clone)]
pub struct GeErdEntity {
    api: Arc<dyn ApplianceApi>,
    erd_code: ErdCode,
}

impl GeErdEntity {
    pub fn new(api: Arc<dyn ApplianceApi>, erd_code: ErdCode) -> Self {
        Self { api, erd_code }
    }

    /// The appliance client
    pub fn appliance(&self) -> &dyn ApplianceApi {
        self.api.as_ref()
    }

    /// The register this entity is bound to
    pub fn erd_code(&self) -> ErdCode {
        self.erd_code
    }

    pub fn serial_or_mac(&self) -> &str {
        self.api.serial_or_mac()
    }
}

impl fmt::Debug for GeErdEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeErdEntity")
            .field("serial_or_mac", &self.serial_or_mac())
            .field("erd_code", &self.erd_code)
            .finish()
    }
}

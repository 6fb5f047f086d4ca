//! Dishwasher device

use ge_erd::ApplianceApi;
use ha_entity::ToggleEntity;
use std::sync::Arc;
use tracing::debug;

use crate::config::DishwasherConfig;
use crate::entities::dishwasher::GeDishwasherStartStopSwitch;

/// A discovered dishwasher and its entities
///
/// Entities are built once at discovery and live as long as the device.
pub struct DishwasherDevice {
    api: Arc<dyn ApplianceApi>,
    start_stop: Arc<GeDishwasherStartStopSwitch>,
}

impl DishwasherDevice {
    pub fn new(api: Arc<dyn ApplianceApi>, config: &DishwasherConfig) -> Self {
        let start_stop = Arc::new(
            GeDishwasherStartStopSwitch::new(api.clone(), config.start_erd)
                .with_stop_erd(config.stop_erd),
        );

        debug!(
            serial = %api.serial_or_mac(),
            start_erd = %config.start_erd,
            stop_erd = %config.stop_erd,
            "Created dishwasher device"
        );

        Self { api, start_stop }
    }

    pub fn serial_or_mac(&self) -> &str {
        self.api.serial_or_mac()
    }

    /// The start/stop switch
    pub fn start_stop_switch(&self) -> Arc<GeDishwasherStartStopSwitch> {
        self.start_stop.clone()
    }

    /// All entities to register with the host
    pub fn entities(&self) -> Vec<Arc<dyn ToggleEntity>> {
        vec![self.start_stop.clone() as Arc<dyn ToggleEntity>]
    }
}

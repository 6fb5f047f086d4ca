//! Dishwasher start/stop switch
//!
//! The switch reads as on while a cycle is running or while the dishwasher
//! is armed for remote start. Turning it on starts the selected cycle (only
//! when remote start is enabled); turning it off requests a stop.
//!
//! Nothing here reports errors to the host. Each operation has a fallible
//! `try_*` form, and the [`Entity`]/[`ToggleEntity`] implementations map its
//! failures to a fixed fallback: off for the on-state, available for
//! availability, a logged no-op for commands, a missing key for attributes.

use async_trait::async_trait;
use ge_erd::{truthy, ApplianceApi, ErdCode, ErdValue};
use ha_entity::{Entity, ToggleEntity};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::config::DEFAULT_STOP_ERD;
use crate::entities::common::GeErdEntity;
use crate::error::StartStopError;

const ICON_ON: &str = "mdi:dishwasher";
const ICON_OFF: &str = "mdi:dishwasher-off";

/// Value written to both command registers
const COMMAND_VALUE: i64 = 0;

/// Start/stop control for a dishwasher
#[derive(Debug, Clone)]
pub struct GeDishwasherStartStopSwitch {
    base: GeErdEntity,
    stop_erd: ErdCode,
}

impl GeDishwasherStartStopSwitch {
    /// Create a switch that starts cycles by writing to `start_erd`
    pub fn new(api: Arc<dyn ApplianceApi>, start_erd: ErdCode) -> Self {
        Self {
            base: GeErdEntity::new(api, start_erd),
            stop_erd: DEFAULT_STOP_ERD,
        }
    }

    /// Use a different register for the stop command
    pub fn with_stop_erd(mut self, stop_erd: ErdCode) -> Self {
        self.stop_erd = stop_erd;
        self
    }

    pub fn start_erd(&self) -> ErdCode {
        self.base.erd_code()
    }

    pub fn stop_erd(&self) -> ErdCode {
        self.stop_erd
    }

    fn appliance(&self) -> &dyn ApplianceApi {
        self.base.appliance()
    }

    /// Whether the dishwasher is armed for remote start
    pub fn remote_start_enabled(&self) -> Result<bool, StartStopError> {
        let value = self
            .appliance()
            .get_erd_value(ErdCode::DishwasherRemoteStartEnable)?;
        Ok(truthy(&value))
    }

    /// Whether a cycle is running or the dishwasher can be started
    ///
    /// A cycle state that cannot be read is treated like an absent one.
    pub fn try_is_on(&self) -> Result<bool, StartStopError> {
        let cycle_state = self
            .appliance()
            .get_erd_value(ErdCode::DishwasherCycleState);

        match cycle_state {
            Ok(Some(state)) if state.is_truthy() && state.contains_ignore_case("running") => {
                return Ok(true);
            }
            Ok(_) => {}
            Err(e) => {
                debug!(
                    unique_id = %self.unique_id(),
                    error = %e,
                    "Cycle state unreadable, checking remote start"
                );
            }
        }

        self.remote_start_enabled()
    }

    /// Start the selected cycle
    ///
    /// Refuses with [`StartStopError::RemoteStartDisabled`] without writing
    /// anything unless remote start is enabled.
    #[instrument(skip(self), fields(unique_id = %self.unique_id()))]
    pub async fn try_turn_on(&self) -> Result<(), StartStopError> {
        if !self.remote_start_enabled()? {
            return Err(StartStopError::RemoteStartDisabled);
        }

        self.appliance()
            .set_erd_value(self.start_erd(), ErdValue::Int(COMMAND_VALUE))
            .await?;
        Ok(())
    }

    /// Request a stop of the current cycle
    #[instrument(skip(self), fields(unique_id = %self.unique_id()))]
    pub async fn try_turn_off(&self) -> Result<(), StartStopError> {
        self.appliance()
            .set_erd_value(self.stop_erd, ErdValue::Int(COMMAND_VALUE))
            .await?;
        Ok(())
    }
}

impl Entity for GeDishwasherStartStopSwitch {
    fn domain(&self) -> &'static str {
        "switch"
    }

    fn name(&self) -> String {
        format!("{} Start/Stop", self.base.serial_or_mac())
    }

    fn unique_id(&self) -> String {
        format!("{}-start-stop", self.base.serial_or_mac())
    }

    fn device_class(&self) -> Option<String> {
        Some("switch".to_string())
    }

    fn icon(&self) -> Option<String> {
        let icon = if self.is_on() { ICON_ON } else { ICON_OFF };
        Some(icon.to_string())
    }

    /// Available while remote start is enabled, or when that cannot be read
    fn available(&self) -> bool {
        self.remote_start_enabled().unwrap_or_else(|e| {
            debug!(
                unique_id = %self.unique_id(),
                error = %e,
                "Availability unknown, assuming available"
            );
            true
        })
    }

    /// Cycle state and operating mode, each omitted when unreadable or empty
    fn extra_state_attributes(&self) -> HashMap<String, Value> {
        let mut attributes = HashMap::new();

        for (key, code) in [
            ("cycle_state", ErdCode::DishwasherCycleState),
            ("operating_mode", ErdCode::DishwasherOperatingMode),
        ] {
            if let Ok(Some(value)) = self.appliance().get_erd_value(code) {
                if value.is_truthy() {
                    attributes.insert(key.to_string(), json!(value.to_string()));
                }
            }
        }

        attributes
    }
}

#[async_trait]
impl ToggleEntity for GeDishwasherStartStopSwitch {
    fn is_on(&self) -> bool {
        self.try_is_on().unwrap_or_else(|e| {
            warn!("Error checking dishwasher state: {}", e);
            false
        })
    }

    async fn turn_on(&self) {
        let unique_id = self.unique_id();
        info!("Starting dishwasher {}", unique_id);

        match self.try_turn_on().await {
            Ok(()) => info!("Start command sent to dishwasher {}", unique_id),
            Err(StartStopError::RemoteStartDisabled) => {
                error!("Cannot start dishwasher - remote start is not enabled")
            }
            Err(e) => error!("Error starting dishwasher {}: {}", unique_id, e),
        }
    }

    async fn turn_off(&self) {
        let unique_id = self.unique_id();
        info!("Stopping dishwasher {}", unique_id);

        match self.try_turn_off().await {
            Ok(()) => info!("Stop command sent to dishwasher {}", unique_id),
            Err(e) => error!("Error stopping dishwasher {}: {}", unique_id, e),
        }
    }
}

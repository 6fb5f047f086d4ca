//! Entity traits implemented by integrations

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Properties every entity exposes to the host
pub trait Entity: Send + Sync {
    /// Entity platform domain (e.g., "switch", "sensor")
    fn domain(&self) -> &'static str;

    /// Display name
    fn name(&self) -> String;

    /// Identifier that is stable across restarts
    fn unique_id(&self) -> String;

    fn device_class(&self) -> Option<String> {
        None
    }

    /// Icon (e.g., "mdi:dishwasher")
    fn icon(&self) -> Option<String> {
        None
    }

    /// Whether the underlying device can currently be reached
    fn available(&self) -> bool {
        true
    }

    /// Integration-specific attributes recorded alongside the state
    fn extra_state_attributes(&self) -> HashMap<String, Value> {
        HashMap::new()
    }
}

/// An entity that can be switched on and off
///
/// Commands do not report failure to the host; implementations log and
/// swallow errors, and the next state read reflects what actually happened.
#[async_trait]
pub trait ToggleEntity: Entity {
    /// Whether the entity is currently on
    fn is_on(&self) -> bool;

    /// Turn the entity on
    async fn turn_on(&self);

    /// Turn the entity off
    async fn turn_off(&self);

    /// Turn off if on, otherwise turn on
    async fn toggle(&self) {
        if self.is_on() {
            debug!(unique_id = %self.unique_id(), "Toggling off");
            self.turn_off().await;
        } else {
            debug!(unique_id = %self.unique_id(), "Toggling on");
            self.turn_on().await;
        }
    }
}

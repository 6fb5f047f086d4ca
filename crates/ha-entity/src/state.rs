//! State snapshots recorded by the host for an entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::trace;

use crate::{
    attributes, suggested_entity_id, ToggleEntity, STATE_OFF, STATE_ON, STATE_UNAVAILABLE,
};

/// The state of a toggle entity at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityState {
    /// Entity ID derived from the entity's name
    pub entity_id: String,

    /// "on", "off" or "unavailable"
    pub state: String,

    /// Host-derived attributes plus the entity's extra state attributes
    #[serde(default)]
    pub attributes: HashMap<String, Value>,

    /// When the snapshot was taken
    pub last_updated: DateTime<Utc>,
}

impl EntityState {
    /// Get an attribute value by key
    pub fn attribute<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn is_on(&self) -> bool {
        self.state == STATE_ON
    }

    pub fn is_unavailable(&self) -> bool {
        self.state == STATE_UNAVAILABLE
    }
}

/// Compute the state the host would record for an entity
///
/// Unavailable entities report only the host-derived attributes; their
/// on/off state and extra attributes are not queried.
pub fn state_of<E: ToggleEntity + ?Sized>(entity: &E) -> EntityState {
    let name = entity.name();
    let entity_id = suggested_entity_id(entity.domain(), &name);
    let available = entity.available();

    let mut attrs = HashMap::new();
    attrs.insert(attributes::FRIENDLY_NAME.to_string(), json!(name));
    if let Some(icon) = entity.icon() {
        attrs.insert(attributes::ICON.to_string(), json!(icon));
    }
    if let Some(device_class) = entity.device_class() {
        attrs.insert(attributes::DEVICE_CLASS.to_string(), json!(device_class));
    }

    let state = if !available {
        STATE_UNAVAILABLE
    } else {
        // Host-derived keys win over extra attributes
        for (key, value) in entity.extra_state_attributes() {
            attrs.entry(key).or_insert(value);
        }
        if entity.is_on() {
            STATE_ON
        } else {
            STATE_OFF
        }
    };

    trace!(entity_id = %entity_id, state, "Computed entity state");

    EntityState {
        entity_id,
        state: state.to_string(),
        attributes: attrs,
        last_updated: Utc::now(),
    }
}

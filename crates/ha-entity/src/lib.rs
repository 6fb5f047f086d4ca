//! Entity platform contract for Home Assistant integrations
//!
//! Integrations expose device features to Home Assistant as entities. This
//! crate defines the traits an integration implements ([`Entity`] and
//! [`ToggleEntity`]) and the [`EntityState`] snapshot the host records for
//! them. Lifecycle (polling, state pushes, registry) stays with the host.

mod entity;
mod slug;
mod state;

pub use entity::{Entity, ToggleEntity};
pub use slug::{slugify, suggested_entity_id};
pub use state::{state_of, EntityState};

/// State value for an entity that is on
pub const STATE_ON: &str = "on";

/// State value for an entity that is off
pub const STATE_OFF: &str = "off";

/// State value for an entity whose device cannot be reached
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// Attribute keys the host derives from entity properties
pub mod attributes {
    pub const FRIENDLY_NAME: &str = "friendly_name";
    pub const ICON: &str = "icon";
    pub const DEVICE_CLASS: &str = "device_class";
}

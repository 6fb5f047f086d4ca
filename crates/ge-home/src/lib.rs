//! GE Home integration
//!
//! Exposes GE Home appliances to Home Assistant. Currently provides the
//! dishwasher start/stop switch, which starts the selected cycle remotely
//! (when the dishwasher has been armed for remote start) and stops the
//! running cycle.

pub mod config;
pub mod devices;
pub mod entities;
mod error;

pub use config::{ApplianceConfig, DishwasherConfig, GeHomeConfig};
pub use devices::DishwasherDevice;
pub use entities::common::GeErdEntity;
pub use entities::dishwasher::GeDishwasherStartStopSwitch;
pub use error::{ConfigError, ConfigResult, StartStopError};

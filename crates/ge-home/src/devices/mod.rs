//! Appliance devices and the entities they expose

mod dishwasher;

pub use dishwasher::DishwasherDevice;

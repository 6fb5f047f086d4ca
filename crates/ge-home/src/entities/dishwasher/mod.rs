//! Dishwasher entities

mod start_stop_switch;

pub use start_stop_switch::GeDishwasherStartStopSwitch;

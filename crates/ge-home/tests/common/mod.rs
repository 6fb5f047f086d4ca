//! Common test utilities for the GE Home integration

mod log_capture;
mod mock_appliance;

pub use log_capture::*;
pub use mock_appliance::*;

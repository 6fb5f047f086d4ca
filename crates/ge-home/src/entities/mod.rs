//! Entities exposed by GE Home appliances

pub mod common;
pub mod dishwasher;

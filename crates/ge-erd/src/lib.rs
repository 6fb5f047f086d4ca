//! ERD register model for GE Home appliances
//!
//! Appliances expose their state and accept commands through ERDs
//! (Entity Reference Designators): addressed registers holding loosely typed
//! values. This crate provides typed register codes and values, the
//! [`ApplianceApi`] contract that integrations read and write through, and
//! [`ErdStore`], an in-memory register cache implementing it.

mod code;
mod error;
mod store;
mod value;

use async_trait::async_trait;

pub use code::{ErdCode, ErdCodeError};
pub use error::{ErdError, ErdResult};
pub use store::ErdStore;
pub use value::{truthy, ErdValue};

/// Client handle for a single appliance
///
/// Reads are served from the client's cached view of the appliance and are
/// synchronous. Writes go out to the appliance and are awaited.
#[async_trait]
pub trait ApplianceApi: Send + Sync {
    /// Serial number (or MAC address when no serial is known)
    fn serial_or_mac(&self) -> &str;

    /// Read the current value of a register
    ///
    /// `Ok(None)` means the appliance has not reported a value for it.
    fn get_erd_value(&self, code: ErdCode) -> ErdResult<Option<ErdValue>>;

    /// Write a value to a register
    async fn set_erd_value(&self, code: ErdCode, value: ErdValue) -> ErdResult<()>;
}

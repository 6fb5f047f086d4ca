//! In-memory register cache for an appliance

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument, trace};

use crate::{ApplianceApi, ErdCode, ErdError, ErdResult, ErdValue};

/// Cached register values for one appliance
///
/// The store holds the last value reported for each register. Status
/// updates pushed by the appliance land here through [`ErdStore::update`];
/// writes through [`ApplianceApi::set_erd_value`] are accepted for command
/// registers only and recorded as the register's latest value.
///
/// While the store is offline every read and write fails with
/// [`ErdError::Unavailable`].
pub struct ErdStore {
    serial: String,
    values: DashMap<ErdCode, ErdValue>,
    online: AtomicBool,
}

impl ErdStore {
    /// Create an empty, online store for an appliance
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            values: DashMap::new(),
            online: AtomicBool::new(true),
        }
    }

    /// Create a store seeded with initial register values
    pub fn with_values(
        serial: impl Into<String>,
        values: impl IntoIterator<Item = (ErdCode, ErdValue)>,
    ) -> Self {
        let store = Self::new(serial);
        for (code, value) in values {
            store.values.insert(code, value);
        }
        store
    }

    /// Record a value reported by the appliance
    pub fn update(&self, code: ErdCode, value: ErdValue) {
        trace!(serial = %self.serial, erd = %code, value = %value, "ERD update");
        self.values.insert(code, value);
    }

    /// Forget a register's value
    pub fn clear(&self, code: ErdCode) -> Option<ErdValue> {
        self.values.remove(&code).map(|(_, v)| v)
    }

    /// Mark the appliance as connected or disconnected
    pub fn set_online(&self, online: bool) {
        debug!(serial = %self.serial, online, "Appliance connectivity changed");
        self.online.store(online, Ordering::SeqCst);
    }

    /// Whether the appliance is connected
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Copy of all cached values
    pub fn snapshot(&self) -> HashMap<ErdCode, ErdValue> {
        self.values
            .iter()
            .map(|r| (*r.key(), r.value().clone()))
            .collect()
    }

    fn ensure_online(&self) -> ErdResult<()> {
        if self.is_online() {
            Ok(())
        } else {
            Err(ErdError::Unavailable {
                serial: self.serial.clone(),
            })
        }
    }
}

#[async_trait]
impl ApplianceApi for ErdStore {
    fn serial_or_mac(&self) -> &str {
        &self.serial
    }

    fn get_erd_value(&self, code: ErdCode) -> ErdResult<Option<ErdValue>> {
        self.ensure_online()?;
        Ok(self.values.get(&code).map(|v| v.clone()))
    }

    #[instrument(skip(self, value), fields(serial = %self.serial, erd = %code))]
    async fn set_erd_value(&self, code: ErdCode, value: ErdValue) -> ErdResult<()> {
        self.ensure_online()?;
        if !code.is_writable() {
            return Err(ErdError::ReadOnly(code));
        }

        debug!(value = %value, "Writing ERD");
        self.values.insert(code, value);
        Ok(())
    }
}

//! Mock appliance for testing
//!
//! Provides a scriptable appliance client: each register can hold a value,
//! be absent, or fail on read. Writes are recorded for assertions.

use async_trait::async_trait;
use ge_erd::{ApplianceApi, ErdCode, ErdError, ErdResult, ErdValue};
use std::collections::HashMap;
use std::sync::Mutex;

/// How a register responds to reads
#[derive(Debug, Clone)]
enum Register {
    Value(ErdValue),
    Failing,
}

/// A mock appliance client
pub struct MockAppliance {
    serial: String,
    registers: Mutex<HashMap<ErdCode, Register>>,
    reads: Mutex<Vec<ErdCode>>,
    writes: Mutex<Vec<(ErdCode, ErdValue)>>,
    fail_writes: bool,
}

#[allow(dead_code)]
impl MockAppliance {
    /// Create a mock appliance with no register values
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            registers: Mutex::new(HashMap::new()),
            reads: Mutex::new(Vec::new()),
            writes: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    /// Set a register value
    pub fn with_value(self, code: ErdCode, value: impl Into<ErdValue>) -> Self {
        self.set_value(code, value);
        self
    }

    /// Make reads of a register fail
    pub fn with_failing_read(self, code: ErdCode) -> Self {
        self.registers
            .lock()
            .unwrap()
            .insert(code, Register::Failing);
        self
    }

    /// Make every write fail
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Change a register value after construction
    pub fn set_value(&self, code: ErdCode, value: impl Into<ErdValue>) {
        self.registers
            .lock()
            .unwrap()
            .insert(code, Register::Value(value.into()));
    }

    /// All writes issued so far, in order
    pub fn writes(&self) -> Vec<(ErdCode, ErdValue)> {
        self.writes.lock().unwrap().clone()
    }

    /// Number of reads of a register so far
    pub fn read_count(&self, code: ErdCode) -> usize {
        self.reads
            .lock()
            .unwrap()
            .iter()
            .filter(|c| **c == code)
            .count()
    }
}

#[async_trait]
impl ApplianceApi for MockAppliance {
    fn serial_or_mac(&self) -> &str {
        &self.serial
    }

    fn get_erd_value(&self, code: ErdCode) -> ErdResult<Option<ErdValue>> {
        self.reads.lock().unwrap().push(code);
        match self.registers.lock().unwrap().get(&code) {
            Some(Register::Value(value)) => Ok(Some(value.clone())),
            Some(Register::Failing) => {
                Err(ErdError::Transport(format!("read of {} timed out", code)))
            }
            None => Ok(None),
        }
    }

    async fn set_erd_value(&self, code: ErdCode, value: ErdValue) -> ErdResult<()> {
        self.writes.lock().unwrap().push((code, value));
        if self.fail_writes {
            return Err(ErdError::Rejected {
                code,
                reason: "appliance busy".to_string(),
            });
        }
        Ok(())
    }
}

//! Loosely typed register values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value read from or written to a register
///
/// Appliances report registers as booleans, integers, text, SDK enum members
/// or raw bytes depending on the register. The textual form matches what the
/// SDK reports, so booleans render as `True`/`False`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErdValue {
    Bool(bool),
    Int(i64),
    Text(String),
    /// Member of an SDK enum, e.g. `ErdCycleState.RUNNING`
    Enum {
        #[serde(rename = "enum")]
        kind: String,
        member: String,
    },
    Bytes(Vec<u8>),
}

impl ErdValue {
    /// Create an enum member value
    pub fn member(kind: impl Into<String>, member: impl Into<String>) -> Self {
        ErdValue::Enum {
            kind: kind.into(),
            member: member.into(),
        }
    }

    /// Truthiness of a present value
    ///
    /// `false`, `0`, empty text and empty bytes are falsy. Enum members are
    /// always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            ErdValue::Bool(b) => *b,
            ErdValue::Int(n) => *n != 0,
            ErdValue::Text(s) => !s.is_empty(),
            ErdValue::Enum { .. } => true,
            ErdValue::Bytes(b) => !b.is_empty(),
        }
    }

    /// Whether the textual form contains `needle`, ignoring case
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.to_string()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// Truthiness of a possibly absent value; absent is falsy
pub fn truthy(value: &Option<ErdValue>) -> bool {
    value.as_ref().is_some_and(ErdValue::is_truthy)
}

impl fmt::Display for ErdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErdValue::Bool(true) => f.write_str("True"),
            ErdValue::Bool(false) => f.write_str("False"),
            ErdValue::Int(n) => write!(f, "{}", n),
            ErdValue::Text(s) => f.write_str(s),
            ErdValue::Enum { kind, member } => write!(f, "{}.{}", kind, member),
            ErdValue::Bytes(bytes) => bytes.iter().try_for_each(|b| write!(f, "{:02x}", b)),
        }
    }
}

impl From<bool> for ErdValue {
    fn from(b: bool) -> Self {
        ErdValue::Bool(b)
    }
}

impl From<i64> for ErdValue {
    fn from(n: i64) -> Self {
        ErdValue::Int(n)
    }
}

impl From<&str> for ErdValue {
    fn from(s: &str) -> Self {
        ErdValue::Text(s.to_string())
    }
}

impl From<String> for ErdValue {
    fn from(s: String) -> Self {
        ErdValue::Text(s)
    }
}

//! Status enums for receipts.

use serde::{Deserialize, Serialize};

/// Receipt processing status.
///
/// There is no payment integration and no pending/in-flight state: a receipt
/// only exists once checkout has succeeded, so `Completed` is the only value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    #[default]
    Completed,
}

impl std::fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
        }
    }
}

//! Store backend type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported todo store backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// PostgreSQL database
    #[default]
    Postgres,
    /// Process-local store, lost on exit
    Memory,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Postgres => write!(f, "postgres"),
            StoreKind::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" | "inmemory" => Ok(StoreKind::Memory),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_kind_from_str() {
        assert_eq!(StoreKind::from_str("postgres").unwrap(), StoreKind::Postgres);
        assert_eq!(StoreKind::from_str("PostgreSQL").unwrap(), StoreKind::Postgres);
        assert_eq!(StoreKind::from_str("memory").unwrap(), StoreKind::Memory);
        assert_eq!(StoreKind::from_str("inmemory").unwrap(), StoreKind::Memory);
        assert!(StoreKind::from_str("sqlite").is_err());
    }

    #[test]
    fn test_store_kind_display() {
        assert_eq!(StoreKind::Postgres.to_string(), "postgres");
        assert_eq!(StoreKind::Memory.to_string(), "memory");
    }

    #[test]
    fn test_store_kind_serde() {
        let json = serde_json::to_string(&StoreKind::Postgres).unwrap();
        assert_eq!(json, "\"postgres\"");

        let kind: StoreKind = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(kind, StoreKind::Memory);
    }

    #[test]
    fn test_store_kind_default() {
        assert_eq!(StoreKind::default(), StoreKind::Postgres);
    }
}

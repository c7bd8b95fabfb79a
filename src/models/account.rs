//! Account model
//!
//! The three ledger endpoints a plan moves money between.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ledger endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Account {
    /// Money entering or leaving the modeled system
    External,
    /// Day-to-day account that receives income and pays expenses
    Checking,
    /// Buffer account used for smoothing
    Savings,
}

impl Account {
    /// All accounts, in display order
    pub const ALL: [Account; 3] = [Self::External, Self::Checking, Self::Savings];

    /// Returns true if this account's balance must never go negative
    pub fn must_stay_solvent(&self) -> bool {
        matches!(self, Self::Checking | Self::Savings)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::External => "External",
            Self::Checking => "Checking",
            Self::Savings => "Savings",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solvency_accounts() {
        assert!(!Account::External.must_stay_solvent());
        assert!(Account::Checking.must_stay_solvent());
        assert!(Account::Savings.must_stay_solvent());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Account::Savings).unwrap();
        assert_eq!(json, "\"savings\"");
    }
}

use serde::{Deserialize, Serialize};

use super::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// What the agent owns
    Assets,
    /// What the agent owes
    Liabilities,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Assets, Side::Liabilities];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Assets => "assets",
            Side::Liabilities => "liabilities",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asset" | "assets" => Some(Side::Assets),
            "liability" | "liabilities" | "liab" => Some(Side::Liabilities),
            _ => None,
        }
    }

    /// Label given to an entry recorded without a name.
    pub fn default_label(&self) -> &'static str {
        match self {
            Side::Assets => "Unnamed Asset",
            Side::Liabilities => "Unnamed Liability",
        }
    }

    /// Column heading used when rendering this side.
    pub fn title(&self) -> &'static str {
        match self {
            Side::Assets => "Assets",
            Side::Liabilities => "Liabilities",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single labeled amount under one agent and side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub amount_cents: Cents,
    pub label: String,
}

impl Entry {
    pub fn new(amount_cents: Cents, label: impl Into<String>) -> Self {
        Self {
            amount_cents,
            label: label.into(),
        }
    }

    /// Build an entry, substituting the side's default label when `label` is blank.
    pub fn labeled(amount_cents: Cents, label: &str, side: Side) -> Self {
        let label = label.trim();
        if label.is_empty() {
            Self::new(amount_cents, side.default_label())
        } else {
            Self::new(amount_cents, label)
        }
    }
}

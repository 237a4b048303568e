use serde::{Deserialize, Serialize};

use super::{Entry, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentId {
    A,
    B,
}

impl AgentId {
    pub const ALL: [AgentId; 2] = [AgentId::A, AgentId::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentId::A => "a",
            AgentId::B => "b",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" | "agent-a" => Some(AgentId::A),
            "b" | "agent-b" => Some(AgentId::B),
            _ => None,
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            AgentId::A => "Agent A",
            AgentId::B => "Agent B",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            AgentId::A => 0,
            AgentId::B => 1,
        }
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One party of the ledger: a display name and its two T-account sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub assets: Vec<Entry>,
    pub liabilities: Vec<Entry>,
}

impl Agent {
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            name: id.default_name().to_string(),
            assets: Vec::new(),
            liabilities: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.rename(name);
        self
    }

    /// Set the display name. Blank names fall back to the agent's default.
    pub fn rename(&mut self, name: &str) {
        let name = name.trim();
        self.name = if name.is_empty() {
            self.id.default_name().to_string()
        } else {
            name.to_string()
        };
    }

    pub fn entries(&self, side: Side) -> &[Entry] {
        match side {
            Side::Assets => &self.assets,
            Side::Liabilities => &self.liabilities,
        }
    }

    pub(crate) fn entries_mut(&mut self, side: Side) -> &mut Vec<Entry> {
        match side {
            Side::Assets => &mut self.assets,
            Side::Liabilities => &mut self.liabilities,
        }
    }

    pub fn clear(&mut self) {
        self.assets.clear();
        self.liabilities.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.liabilities.is_empty()
    }
}

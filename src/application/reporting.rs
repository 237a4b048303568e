use serde::{Deserialize, Serialize};

use crate::domain::{AgentId, Total};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub agents: Vec<AgentBalance>,
    pub system: SystemBalance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentBalance {
    pub agent: AgentId,
    pub name: String,
    pub total_assets: Total,
    pub total_liabilities: Total,
    pub is_balanced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemBalance {
    pub total_assets: Total,
    pub total_liabilities: Total,
    pub is_balanced: bool,
}

impl BalanceReport {
    pub fn agent(&self, id: AgentId) -> Option<&AgentBalance> {
        self.agents.iter().find(|a| a.agent == id)
    }
}

impl AgentBalance {
    /// Assets minus liabilities; zero when balanced.
    pub fn difference(&self) -> Total {
        self.total_assets - self.total_liabilities
    }
}

impl SystemBalance {
    pub fn difference(&self) -> Total {
        self.total_assets - self.total_liabilities
    }
}

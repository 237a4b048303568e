use tracing::debug;

use crate::domain::{
    Agent, AgentId, Entry, Side, Total, is_balanced, parse_cents, side_total, sum_entries,
};

use super::{AgentBalance, BalanceReport, SystemBalance};

/// In-memory ledger for one session: two agents, each with an assets and a
/// liabilities list. All operations are infallible; bad input is dropped.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    agents: [Agent; 2],
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore {
    /// Create an empty store with the default agent names.
    pub fn new() -> Self {
        Self {
            agents: [Agent::new(AgentId::A), Agent::new(AgentId::B)],
        }
    }

    /// Create an empty store with the given agent names (blank names use the defaults).
    pub fn with_names(agent_a: &str, agent_b: &str) -> Self {
        Self {
            agents: [
                Agent::new(AgentId::A).with_name(agent_a),
                Agent::new(AgentId::B).with_name(agent_b),
            ],
        }
    }

    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn entries(&self, agent: AgentId, side: Side) -> &[Entry] {
        self.agent(agent).entries(side)
    }

    pub fn is_empty(&self) -> bool {
        self.agents.iter().all(Agent::is_empty)
    }

    // ========================
    // Mutations
    // ========================

    /// Parse `amount_text` and append a new entry.
    ///
    /// Returns the stored entry, or `None` when the amount does not parse, in
    /// which case the ledger is left untouched.
    pub fn add_entry(
        &mut self,
        agent: AgentId,
        side: Side,
        amount_text: &str,
        name_text: &str,
    ) -> Option<&Entry> {
        let amount_cents = match parse_cents(amount_text) {
            Ok(cents) => cents,
            Err(err) => {
                debug!(%agent, %side, amount = amount_text, %err, "discarded entry");
                return None;
            }
        };

        let entry = Entry::labeled(amount_cents, name_text, side);
        debug!(%agent, %side, amount_cents, label = %entry.label, "added entry");

        let entries = self.agents[agent.index()].entries_mut(side);
        entries.push(entry);
        entries.last()
    }

    /// Remove the entry at `index`. Out-of-range indexes leave the ledger unchanged.
    pub fn delete_entry(&mut self, agent: AgentId, side: Side, index: usize) -> Option<Entry> {
        let entries = self.agents[agent.index()].entries_mut(side);
        if index >= entries.len() {
            debug!(%agent, %side, index, len = entries.len(), "delete out of range");
            return None;
        }
        let removed = entries.remove(index);
        debug!(%agent, %side, index, label = %removed.label, "deleted entry");
        Some(removed)
    }

    /// Clear every entry list. Agent names are kept.
    pub fn reset_all(&mut self) {
        for agent in &mut self.agents {
            agent.clear();
        }
        debug!("reset all entries");
    }

    /// Set an agent's display name. Blank input restores the default name.
    pub fn rename_agent(&mut self, agent: AgentId, new_name: &str) -> &str {
        let target = &mut self.agents[agent.index()];
        target.rename(new_name);
        debug!(%agent, name = %target.name, "renamed agent");
        &target.name
    }

    // ========================
    // Queries
    // ========================

    pub fn sum_side(&self, agent: AgentId, side: Side) -> Total {
        side_total(self.agent(agent), side)
    }

    pub fn balance_report(&self) -> BalanceReport {
        let agents: Vec<AgentBalance> = self
            .agents
            .iter()
            .map(|agent| {
                let total_assets = sum_entries(&agent.assets);
                let total_liabilities = sum_entries(&agent.liabilities);
                AgentBalance {
                    agent: agent.id,
                    name: agent.name.clone(),
                    total_assets,
                    total_liabilities,
                    is_balanced: is_balanced(total_assets, total_liabilities),
                }
            })
            .collect();

        let total_assets: Total = agents.iter().map(|a| a.total_assets).sum();
        let total_liabilities: Total = agents.iter().map(|a| a.total_liabilities).sum();

        BalanceReport {
            agents,
            system: SystemBalance {
                total_assets,
                total_liabilities,
                is_balanced: is_balanced(total_assets, total_liabilities),
            },
        }
    }
}

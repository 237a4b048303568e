use crate::domain::{AgentId, Entry, Side};

use super::LedgerStore;

/// A user action against the ledger, independent of how it was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        agent: AgentId,
        side: Side,
        amount: String,
        label: String,
    },
    Delete {
        agent: AgentId,
        side: Side,
        index: usize,
    },
    Reset,
    Rename {
        agent: AgentId,
        name: String,
    },
}

/// What applying a [`Command`] did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added {
        agent: AgentId,
        side: Side,
        index: usize,
        entry: Entry,
    },
    /// The amount did not parse; nothing was recorded.
    Discarded { agent: AgentId, side: Side },
    Deleted {
        agent: AgentId,
        side: Side,
        index: usize,
        entry: Entry,
    },
    /// Delete with an index past the end of the list.
    Unchanged,
    Reset,
    Renamed { agent: AgentId, name: String },
}

impl Outcome {
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Discarded { .. } | Outcome::Unchanged)
    }
}

impl LedgerStore {
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Add {
                agent,
                side,
                amount,
                label,
            } => {
                let added = self.add_entry(agent, side, &amount, &label).cloned();
                match added {
                    Some(entry) => Outcome::Added {
                        agent,
                        side,
                        index: self.entries(agent, side).len() - 1,
                        entry,
                    },
                    None => Outcome::Discarded { agent, side },
                }
            }
            Command::Delete { agent, side, index } => {
                match self.delete_entry(agent, side, index) {
                    Some(entry) => Outcome::Deleted {
                        agent,
                        side,
                        index,
                        entry,
                    },
                    None => Outcome::Unchanged,
                }
            }
            Command::Reset => {
                self.reset_all();
                Outcome::Reset
            }
            Command::Rename { agent, name } => Outcome::Renamed {
                agent,
                name: self.rename_agent(agent, &name).to_string(),
            },
        }
    }
}

// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use taccount::cli::Session;
use taccount::{AgentId, LedgerStore, Side};

/// Helper to create a store with named agents
pub fn test_store() -> LedgerStore {
    LedgerStore::with_names("Household", "Bank")
}

/// Helper to run a scripted session and capture what it printed
pub fn run_script(session: &mut Session, script: &str) -> Result<String> {
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

/// Test fixture: common opening positions
pub struct StandardEntries;

impl StandardEntries {
    /// Agent A holds 100.00 cash funded by 100.00 equity
    pub fn balanced_opening(store: &mut LedgerStore) {
        store.add_entry(AgentId::A, Side::Assets, "100.00", "Cash");
        store.add_entry(AgentId::A, Side::Liabilities, "100.00", "Equity");
    }

    /// Agent B lends 250.00 to agent A, recorded on both sides of both agents
    pub fn bank_loan(store: &mut LedgerStore) {
        store.add_entry(AgentId::A, Side::Assets, "250", "Loan proceeds");
        store.add_entry(AgentId::A, Side::Liabilities, "250", "Loan payable");
        store.add_entry(AgentId::B, Side::Assets, "250", "Loan receivable");
        store.add_entry(AgentId::B, Side::Liabilities, "250", "Deposit");
    }
}

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::{AppError, BalanceReport, LedgerStore};
use crate::domain::{Agent, Side, format_cents};

/// Full view of a session: both agents with their entries, plus the balance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub agents: Vec<Agent>,
    pub report: BalanceReport,
}

/// Exporter for writing the current session to CSV or JSON
pub struct Exporter<'a> {
    store: &'a LedgerStore,
}

impl<'a> Exporter<'a> {
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Export every entry as one CSV row, in display order
    pub fn export_entries_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "agent",
            "agent_name",
            "side",
            "index",
            "amount_cents",
            "amount",
            "label",
        ])?;

        let mut count = 0;
        for agent in self.store.agents() {
            for side in Side::ALL {
                for (index, entry) in agent.entries(side).iter().enumerate() {
                    csv_writer.write_record([
                        agent.id.as_str(),
                        agent.name.as_str(),
                        side.as_str(),
                        index.to_string().as_str(),
                        entry.amount_cents.to_string().as_str(),
                        format_cents(entry.amount_cents).as_str(),
                        entry.label.as_str(),
                    ])?;
                    count += 1;
                }
            }
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export per-agent and system totals to CSV format
    pub fn export_report_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let report = self.store.balance_report();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "scope",
            "name",
            "total_assets",
            "total_liabilities",
            "balanced",
        ])?;

        let mut count = 0;
        for agent in &report.agents {
            csv_writer.write_record([
                agent.agent.as_str(),
                agent.name.as_str(),
                format_cents(agent.total_assets).as_str(),
                format_cents(agent.total_liabilities).as_str(),
                agent.is_balanced.to_string().as_str(),
            ])?;
            count += 1;
        }
        csv_writer.write_record([
            "system",
            "System",
            format_cents(report.system.total_assets).as_str(),
            format_cents(report.system.total_liabilities).as_str(),
            report.system.is_balanced.to_string().as_str(),
        ])?;
        count += 1;

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export both agents with their entry lists as JSON
    pub fn export_entries_json<W: Write>(&self, mut writer: W) -> Result<usize, AppError> {
        let agents = self.store.agents();
        serde_json::to_writer_pretty(&mut writer, agents)?;
        writeln!(writer)?;
        Ok(agents
            .iter()
            .map(|a| a.assets.len() + a.liabilities.len())
            .sum())
    }

    /// Export the balance report as JSON
    pub fn export_report_json<W: Write>(&self, mut writer: W) -> Result<BalanceReport, AppError> {
        let report = self.store.balance_report();
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
        Ok(report)
    }

    /// Export the whole session as pretty-printed JSON
    pub fn export_snapshot_json<W: Write>(
        &self,
        mut writer: W,
    ) -> Result<LedgerSnapshot, AppError> {
        let snapshot = self.snapshot();
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            agents: self.store.agents().to_vec(),
            report: self.store.balance_report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AgentId;

    fn sample_store() -> LedgerStore {
        let mut store = LedgerStore::with_names("Household", "Bank");
        store.add_entry(AgentId::A, Side::Assets, "100", "Cash, on hand");
        store.add_entry(AgentId::A, Side::Liabilities, "100", "Equity");
        store.add_entry(AgentId::B, Side::Liabilities, "-2.5", "");
        store
    }

    #[test]
    fn test_export_entries_csv() {
        let store = sample_store();
        let mut buf = Vec::new();
        let count = Exporter::new(&store).export_entries_csv(&mut buf).unwrap();
        assert_eq!(count, 3);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "agent,agent_name,side,index,amount_cents,amount,label",
                "a,Household,assets,0,10000,100.00,\"Cash, on hand\"",
                "a,Household,liabilities,0,10000,100.00,Equity",
                "b,Bank,liabilities,0,-250,-2.50,Unnamed Liability",
            ]
        );
    }

    #[test]
    fn test_export_report_csv() {
        let store = sample_store();
        let mut buf = Vec::new();
        let count = Exporter::new(&store).export_report_csv(&mut buf).unwrap();
        assert_eq!(count, 3);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "a,Household,100.00,100.00,true");
        assert_eq!(lines[2], "b,Bank,0.00,-2.50,false");
        assert_eq!(lines[3], "system,System,100.00,97.50,false");
    }

    #[test]
    fn test_export_entries_json() {
        let store = sample_store();
        let mut buf = Vec::new();
        let count = Exporter::new(&store).export_entries_json(&mut buf).unwrap();
        assert_eq!(count, 3);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[1]["id"], "b");
        assert_eq!(value[1]["liabilities"][0]["label"], "Unnamed Liability");
    }

    #[test]
    fn test_export_snapshot_json() {
        let store = sample_store();
        let mut buf = Vec::new();
        let snapshot = Exporter::new(&store).export_snapshot_json(&mut buf).unwrap();
        assert_eq!(snapshot.agents.len(), 2);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["agents"][0]["name"], "Household");
        assert_eq!(value["agents"][0]["assets"][0]["amount_cents"], 10000);
        assert_eq!(value["report"]["system"]["is_balanced"], false);
    }
}

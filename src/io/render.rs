use crate::application::{BalanceReport, LedgerStore};
use crate::domain::{AgentId, Entry, Side, format_cents, format_signed_cents};

/// One entry as shown in a side listing: `[index] ±amount  label`.
pub fn format_entry(index: usize, entry: &Entry) -> String {
    format!(
        "[{}] {}  {}",
        index,
        format_signed_cents(entry.amount_cents),
        entry.label
    )
}

/// A table cell: signed amount and label.
fn format_cell(entry: Option<&Entry>) -> String {
    entry
        .map(|e| format!("{} {}", format_signed_cents(e.amount_cents), e.label))
        .unwrap_or_default()
}

/// Heading plus one line per entry for a single agent/side.
pub fn render_side(store: &LedgerStore, agent: AgentId, side: Side) -> String {
    let mut lines = vec![format!("{} {}", store.agent(agent).name, side.title())];
    let entries = store.entries(agent, side);
    if entries.is_empty() {
        lines.push("  (no entries)".to_string());
    }
    lines.extend(
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| format!("  {}", format_entry(index, entry))),
    );
    join_lines(&lines)
}

/// Side-by-side T-account table for both agents, one row per index.
pub fn render_t_accounts(store: &LedgerStore) -> String {
    let columns: Vec<(AgentId, Side)> = AgentId::ALL
        .iter()
        .flat_map(|&agent| Side::ALL.map(|side| (agent, side)))
        .collect();

    let rows = columns
        .iter()
        .map(|&(agent, side)| store.entries(agent, side).len())
        .max()
        .unwrap_or(0)
        .max(1);

    let headers: Vec<String> = columns
        .iter()
        .map(|&(agent, side)| format!("{} {}", store.agent(agent).name, side.title()))
        .collect();
    let rule: Vec<String> = headers
        .iter()
        .map(|h| "-".repeat(h.chars().count().max(3)))
        .collect();

    let mut lines = vec![
        format!("| Idx | {} |", headers.join(" | ")),
        format!("|-----|-{}-|", rule.join("-|-")),
    ];
    for index in 0..rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|&(agent, side)| format_cell(store.entries(agent, side).get(index)))
            .collect();
        lines.push(format!("| {} | {} |", index, cells.join(" | ")));
    }
    join_lines(&lines)
}

fn balanced_label(balanced: bool) -> &'static str {
    if balanced { "Balanced" } else { "Not Balanced" }
}

/// Per-agent totals followed by the system-wide totals.
pub fn render_summary(report: &BalanceReport) -> String {
    let mut lines: Vec<String> = report
        .agents
        .iter()
        .map(|agent| {
            format!(
                "{}: Assets = {}, Liabilities = {}  [{}]",
                agent.name,
                format_cents(agent.total_assets),
                format_cents(agent.total_liabilities),
                balanced_label(agent.is_balanced)
            )
        })
        .collect();
    lines.push(format!(
        "System: Assets = {}, Liabilities = {}  [System {}]",
        format_cents(report.system.total_assets),
        format_cents(report.system.total_liabilities),
        balanced_label(report.system.is_balanced)
    ));
    join_lines(&lines)
}

/// Newline-terminated block of lines.
fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Table followed by the summary; what the session prints after each change.
pub fn render_view(store: &LedgerStore) -> String {
    format!(
        "{}\n{}",
        render_t_accounts(store),
        render_summary(&store.balance_report())
    )
}

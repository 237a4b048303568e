use super::{Agent, Entry, Side, Total};

/// Sum the amounts of a list of entries. An empty list sums to zero.
pub fn sum_entries(entries: &[Entry]) -> Total {
    entries.iter().map(|e| Total::from(e.amount_cents)).sum()
}

/// Total of one side of an agent's T-account.
pub fn side_total(agent: &Agent, side: Side) -> Total {
    sum_entries(agent.entries(side))
}

/// A T-account is balanced when total assets equal total liabilities.
pub fn is_balanced(total_assets: Total, total_liabilities: Total) -> bool {
    total_assets == total_liabilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AgentId;

    #[test]
    fn test_sum_entries_empty() {
        assert_eq!(sum_entries(&[]), 0);
    }

    #[test]
    fn test_sum_entries_mixed_signs() {
        let entries = vec![
            Entry::new(10000, "Cash"),
            Entry::new(-2550, "Overdraft"),
            Entry::new(1, "Penny"),
        ];
        assert_eq!(sum_entries(&entries), 7451);
    }

    #[test]
    fn test_sum_entries_past_cents_range_stays_exact() {
        let assets = vec![Entry::new(i64::MAX, "Vault"), Entry::new(1, "Penny")];
        let liabilities = vec![Entry::new(i64::MAX, "Equity")];

        assert_eq!(sum_entries(&assets), Total::from(i64::MAX) + 1);
        assert!(!is_balanced(sum_entries(&assets), sum_entries(&liabilities)));
    }

    #[test]
    fn test_side_total() {
        let mut agent = Agent::new(AgentId::A);
        agent.assets.push(Entry::new(5000, "Cash"));
        agent.assets.push(Entry::new(2500, "Bonds"));
        agent.liabilities.push(Entry::new(7500, "Equity"));

        assert_eq!(side_total(&agent, Side::Assets), 7500);
        assert_eq!(side_total(&agent, Side::Liabilities), 7500);
    }

    #[test]
    fn test_is_balanced() {
        assert!(is_balanced(0, 0));
        assert!(is_balanced(-300, -300));
        assert!(!is_balanced(100, 99));
    }

    #[test]
    fn test_two_decimal_sums_are_exact() {
        // 0.10 + 0.20 == 0.30 must hold for the balance check
        let assets = vec![Entry::new(10, "a"), Entry::new(20, "b")];
        let liabilities = vec![Entry::new(30, "c")];
        assert!(is_balanced(sum_entries(&assets), sum_entries(&liabilities)));
    }
}

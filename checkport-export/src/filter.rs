//! Status filter policy.
//!
//! With disabled checks excluded, an uptime check is kept only when its
//! status is `up` (any case). Transaction checks are never filtered.

use checkport_core::{TransactionCheck, UptimeCheck};

/// Decides which listed checks are exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFilter {
    include_disabled: bool,
}

impl StatusFilter {
    /// Creates a filter. `include_disabled` keeps every check.
    pub fn new(include_disabled: bool) -> Self {
        Self { include_disabled }
    }

    /// Returns true if an uptime check passes the filter.
    pub fn retains_uptime(&self, check: &UptimeCheck) -> bool {
        self.include_disabled || check.is_up()
    }

    /// Keeps the uptime checks that pass, in listing order.
    pub fn apply_uptime(&self, checks: Vec<UptimeCheck>) -> Vec<UptimeCheck> {
        checks
            .into_iter()
            .filter(|check| self.retains_uptime(check))
            .collect()
    }

    /// Transaction checks are kept regardless of status.
    pub fn apply_transactions(&self, checks: Vec<TransactionCheck>) -> Vec<TransactionCheck> {
        checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptime(id: i64, status: &str) -> UptimeCheck {
        UptimeCheck {
            id,
            status: status.to_string(),
            ..Default::default()
        }
    }

    fn transaction(id: i64, status: &str) -> TransactionCheck {
        TransactionCheck {
            id,
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keeps_only_up_checks() {
        let filter = StatusFilter::new(false);
        let kept = filter.apply_uptime(vec![
            uptime(1, "up"),
            uptime(2, "UP"),
            uptime(3, "paused"),
            uptime(4, "down"),
            uptime(5, "unknown"),
        ]);

        let ids: Vec<i64> = kept.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_include_disabled_keeps_everything() {
        let filter = StatusFilter::new(true);
        let kept = filter.apply_uptime(vec![uptime(1, "paused"), uptime(2, "down")]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_transactions_are_not_filtered() {
        for include_disabled in [false, true] {
            let filter = StatusFilter::new(include_disabled);
            let kept = filter.apply_transactions(vec![
                transaction(1, "failing"),
                transaction(2, "paused"),
            ]);
            assert_eq!(kept.len(), 2);
        }
    }
}

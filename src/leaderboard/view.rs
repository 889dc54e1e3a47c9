use std::collections::HashSet;

use crate::address::AccountId;

use super::{Entry, IdentityStatus};

/// A displayed leaderboard row. Positions are numbered over the
/// displayed subset only, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRow<'a> {
    pub position: usize,
    pub entry: &'a Entry,
}

/// Apply the render-time identity filter. With `identity_only` set,
/// entries whose status is [`IdentityStatus::None`] are excluded; the
/// underlying entries are untouched.
pub fn visible_rows(entries: &[Entry], identity_only: bool) -> Vec<DisplayRow<'_>> {
    let mut rows = Vec::new();
    let mut position = 1;
    for entry in entries {
        if identity_only && entry.identity_status == IdentityStatus::None {
            continue;
        }
        rows.push(DisplayRow { position, entry });
        position += 1;
    }
    rows
}

/// Transient expand/collapse state, kept apart from the aggregation
/// result so rebuilding the entry list resets it by a single `clear`.
#[derive(Debug, Clone, Default)]
pub struct ExpandedRows(HashSet<AccountId>);

impl ExpandedRows {
    /// Flip the state for one entry, returning the new state.
    pub fn toggle(&mut self, account_id: &AccountId) -> bool {
        if self.0.remove(account_id) {
            false
        } else {
            self.0.insert(*account_id);
            true
        }
    }

    pub fn is_expanded(&self, account_id: &AccountId) -> bool {
        self.0.contains(account_id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod test {
    use super::{visible_rows, ExpandedRows};
    use crate::{
        address::AccountId,
        amount::Amount,
        leaderboard::{Entry, IdentityStatus},
    };

    fn entry(tag: u8, status: IdentityStatus) -> Entry {
        Entry {
            account_id: AccountId::from([tag; 32]),
            address: String::new(),
            display: format!("validator-{tag}"),
            identity_status: status,
            total: Amount(u128::from(tag)),
            subs: Vec::new(),
        }
    }

    #[test]
    fn positions_are_over_displayed_entries_only() {
        let entries = vec![
            entry(1, IdentityStatus::Confirmed),
            entry(2, IdentityStatus::None),
            entry(3, IdentityStatus::Unconfirmed),
        ];
        let rows = visible_rows(&entries, true);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].entry.display, "validator-1");
        assert_eq!(rows[1].position, 2);
        assert_eq!(rows[1].entry.display, "validator-3");

        let all = visible_rows(&entries, false);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].position, 3);
    }

    #[test]
    fn expanded_rows_toggle_and_clear() {
        let id = AccountId::from([7; 32]);
        let mut expanded = ExpandedRows::default();
        assert!(!expanded.is_expanded(&id));
        assert!(expanded.toggle(&id));
        assert!(expanded.is_expanded(&id));
        expanded.clear();
        assert!(!expanded.is_expanded(&id));
        assert!(expanded.toggle(&id));
        assert!(!expanded.toggle(&id));
    }
}

pub mod view;

use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    address::{truncate_ss58, AccountId},
    amount::Amount,
    chart::{ChartAccount, ChartData},
    network::Network,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdentityStatus {
    /// No on-chain identity set.
    #[default]
    None,
    Confirmed,
    Unconfirmed,
}

/// One leaderboard row. `total` is the sum of the entry's own direct
/// contribution and every `sub` total; once `subs` is non-empty the
/// direct contribution lives in a sub-row of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub account_id: AccountId,
    pub address: String,
    pub display: String,
    pub identity_status: IdentityStatus,
    pub total: Amount,
    pub subs: Vec<Entry>,
}

/// Display-name precedence: sub-account display name (requires a parent
/// link to a different account), then on-chain identity, then the
/// truncated address.
pub fn resolve_identity(account: &ChartAccount, address: &str) -> (String, IdentityStatus) {
    if let (Some(parent_id), Some(child_display)) =
        (account.parent_account_id, &account.child_display)
    {
        if parent_id != account.id {
            return (child_display.clone(), IdentityStatus::None);
        }
    }
    if let Some(identity) = &account.identity {
        let status = if identity.confirmed {
            IdentityStatus::Confirmed
        } else {
            IdentityStatus::Unconfirmed
        };
        return (identity.display.clone(), status);
    }
    (truncate_ss58(address), IdentityStatus::None)
}

/// Aggregates raw reward records into ranked parent/child entries.
///
/// Entries are kept in first-seen order in a vector with a key-to-index
/// map for O(1) merges; the final sort is stable, so ties keep
/// first-seen order. Repeated [`ingest`](Self::ingest) calls merge into
/// the existing state; [`clear`](Self::clear) starts a fresh board.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    ss58_prefix: u16,
    entries: Vec<Entry>,
    index: HashMap<AccountId, usize>,
    skipped_count: usize,
    skipped_total: Amount,
}

impl Leaderboard {
    pub fn new(network: &Network) -> Self {
        Self::with_prefix(network.ss58_prefix)
    }

    pub fn with_prefix(ss58_prefix: u16) -> Self {
        Self {
            ss58_prefix,
            ..Self::default()
        }
    }

    /// Build a sorted entry list from a single payload.
    pub fn aggregate(network: &Network, data: &ChartData) -> Vec<Entry> {
        let mut board = Self::new(network);
        board.ingest(data);
        board.into_sorted()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.skipped_count = 0;
        self.skipped_total = Amount::default();
    }

    /// Rewards silently dropped because their account (or referenced
    /// parent account) was missing from the payload.
    pub fn skipped(&self) -> (usize, Amount) {
        (self.skipped_count, self.skipped_total)
    }

    /// Fold a payload's rewards into the board, in input order.
    pub fn ingest(&mut self, data: &ChartData) {
        let accounts: HashMap<AccountId, &ChartAccount> =
            data.accounts.iter().map(|a| (a.id, a)).collect();
        for reward in &data.rewards {
            let Some(account) = accounts.get(&reward.validator_account_id) else {
                self.skip(reward.validator_account_id, reward.total_reward);
                continue;
            };
            let candidate = self.entry_for(account, reward.total_reward);
            if let Some(&i) = self.index.get(&account.id) {
                // Same key seen before: fold into the existing entry,
                // splitting it into sub-rows.
                let entry = &mut self.entries[i];
                if entry.subs.is_empty() {
                    let own = Entry {
                        subs: Vec::new(),
                        ..entry.clone()
                    };
                    entry.subs.push(own);
                }
                entry.total = entry.total.add(&candidate.total);
                entry.subs.push(candidate);
            } else if account.parent_account_id == Some(account.id) {
                // The account is itself a parent record.
                let mut parent = self.entry_for(account, reward.total_reward);
                parent.subs.push(candidate);
                self.insert(parent);
            } else if let Some(parent_id) = account.parent_account_id {
                let Some(parent_account) = accounts.get(&parent_id) else {
                    self.skip(reward.validator_account_id, reward.total_reward);
                    continue;
                };
                if let Some(&i) = self.index.get(&parent_id) {
                    let parent = &mut self.entries[i];
                    if parent.subs.is_empty() {
                        // Keep the parent's direct contribution visible
                        // as a sub-row before the split.
                        let own = Entry {
                            subs: Vec::new(),
                            ..parent.clone()
                        };
                        parent.subs.push(own);
                    }
                    parent.total = parent.total.add(&candidate.total);
                    parent.subs.push(candidate);
                } else {
                    let mut parent = self.entry_for(parent_account, reward.total_reward);
                    parent.subs.push(candidate);
                    self.insert(parent);
                }
            } else {
                self.insert(candidate);
            }
        }
    }

    /// Consume the board, returning entries sorted descending by total.
    pub fn into_sorted(self) -> Vec<Entry> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.total.cmp(&a.total));
        entries
    }

    /// Sorted snapshot without consuming the board.
    pub fn sorted_entries(&self) -> Vec<Entry> {
        self.clone().into_sorted()
    }

    fn entry_for(&self, account: &ChartAccount, total: Amount) -> Entry {
        let address = account.id.to_ss58(self.ss58_prefix);
        let (display, identity_status) = resolve_identity(account, &address);
        Entry {
            account_id: account.id,
            address,
            display,
            identity_status,
            total,
            subs: Vec::new(),
        }
    }

    fn insert(&mut self, entry: Entry) {
        self.index.insert(entry.account_id, self.entries.len());
        self.entries.push(entry);
    }

    fn skip(&mut self, account_id: AccountId, total: Amount) {
        debug!(%account_id, "reward account not in payload, skipping");
        self.skipped_count += 1;
        self.skipped_total = self.skipped_total.add(&total);
    }
}

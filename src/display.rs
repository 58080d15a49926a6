//! Displayed List
//!
//! The card list plus selection-cycle bookkeeping. Every cycle gets a
//! ticket stamped with the filter epoch at issue time; a filter change
//! bumps the epoch, so results from superseded cycles are dropped
//! instead of overwriting newer ones.

use crate::models::Item;

/// How a finished cycle merges into the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Filter changed: swap the whole list
    Replace,
    /// "Add more": extend after existing entries
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTicket {
    pub seq: u64,
    pub epoch: u64,
    pub mode: MergeMode,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    items: Vec<Item>,
    next_seq: u64,
    epoch: u64,
    in_flight: usize,
}

impl DisplayList {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Full-page spinner: nothing to show yet and a cycle is running
    pub fn shows_page_spinner(&self) -> bool {
        self.is_loading() && self.items.is_empty()
    }

    /// Register a new cycle. `Replace` supersedes every earlier cycle.
    pub fn begin(&mut self, mode: MergeMode) -> CycleTicket {
        if mode == MergeMode::Replace {
            self.epoch += 1;
        }
        self.next_seq += 1;
        self.in_flight += 1;
        CycleTicket {
            seq: self.next_seq,
            epoch: self.epoch,
            mode,
        }
    }

    /// Settle a cycle; `None` marks a failed cycle, which leaves the list
    /// untouched. Returns whether anything was merged.
    pub fn finish(&mut self, ticket: CycleTicket, outcome: Option<Vec<Item>>) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        let Some(items) = outcome else {
            return false;
        };
        if ticket.epoch != self.epoch {
            log::debug!("dropping {} items from superseded cycle #{}", items.len(), ticket.seq);
            return false;
        }

        match ticket.mode {
            MergeMode::Replace => self.items = items,
            MergeMode::Append => self.items.extend(items),
        }
        true
    }

    /// Render keys tolerate duplicate ids across appends
    pub fn keyed(&self) -> Vec<(usize, Item)> {
        self.items.iter().cloned().enumerate().collect()
    }
}

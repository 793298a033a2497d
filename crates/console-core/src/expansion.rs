//! Expandable Rows
//!
//! Per-row expansion state of the restaurant tables. Details are fetched on
//! first expansion, kept while the row stays open, and dropped on collapse.
//! Every fetch carries a ticket; a response whose ticket is no longer the
//! row's current one (row collapsed, or refreshed after a mutation) is
//! discarded.

use std::collections::{HashMap, HashSet};

use crate::domain::RecordId;

/// Identifies one detail fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What the caller must do after an expansion change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Fetch details for the row and hand the ticket back to `finish_fetch`
    Fetch(FetchTicket),
    /// Nothing to load
    None,
}

#[derive(Debug, Clone)]
pub struct RowExpansion<D> {
    open: HashSet<RecordId>,
    loading: HashMap<RecordId, FetchTicket>,
    details: HashMap<RecordId, D>,
    next_ticket: u64,
}

impl<D> Default for RowExpansion<D> {
    fn default() -> Self {
        Self { open: HashSet::new(), loading: HashMap::new(), details: HashMap::new(), next_ticket: 0 }
    }
}

impl<D> RowExpansion<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: &RecordId) -> bool {
        self.open.contains(id)
    }

    pub fn is_loading(&self, id: &RecordId) -> bool {
        self.loading.contains_key(id)
    }

    pub fn detail(&self, id: &RecordId) -> Option<&D> {
        self.details.get(id)
    }

    /// Flip a row open or closed
    pub fn toggle(&mut self, id: &RecordId) -> RowAction {
        if self.is_open(id) {
            self.collapse(id);
            RowAction::None
        } else {
            self.expand(id)
        }
    }

    /// Open a row; fetches only when nothing is cached or in flight
    pub fn expand(&mut self, id: &RecordId) -> RowAction {
        self.open.insert(id.clone());
        if self.details.contains_key(id) || self.loading.contains_key(id) {
            return RowAction::None;
        }
        self.begin_fetch(id)
    }

    pub fn collapse(&mut self, id: &RecordId) {
        self.open.remove(id);
        self.loading.remove(id);
        self.details.remove(id);
    }

    fn begin_fetch(&mut self, id: &RecordId) -> RowAction {
        self.next_ticket += 1;
        let ticket = FetchTicket(self.next_ticket);
        self.loading.insert(id.clone(), ticket);
        RowAction::Fetch(ticket)
    }

    /// Record a detail response. Returns false when it was discarded.
    pub fn finish_fetch(&mut self, id: &RecordId, ticket: FetchTicket, detail: Option<D>) -> bool {
        if self.loading.get(id) != Some(&ticket) {
            return false;
        }
        self.loading.remove(id);
        match detail {
            Some(detail) if self.open.contains(id) => {
                self.details.insert(id.clone(), detail);
                true
            }
            _ => false,
        }
    }

    /// After a row mutation: an open row reloads its details, superseding
    /// any fetch still in flight
    pub fn refresh(&mut self, id: &RecordId) -> RowAction {
        if !self.open.contains(id) {
            return RowAction::None;
        }
        self.details.remove(id);
        self.begin_fetch(id)
    }

    /// Forget a deleted row entirely
    pub fn forget(&mut self, id: &RecordId) {
        self.collapse(id);
    }
}

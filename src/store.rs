// File: ./src/store.rs
//! In-memory event store: the single source of truth for the remote,
//! local and imported collections and the filtered view over their union.
//! UI layers delegate all collection changes here so persistence and
//! dedup behavior stay consistent.
use crate::context::SharedContext;
use crate::model::filter::{self, FilterState};
use crate::model::normalize::{RawEvent, normalize};
use crate::model::{Event, merge};
use crate::storage::LocalStore;
use anyhow::Result;
use chrono::TimeZone;

pub struct EventStore {
    ctx: SharedContext,
    /// Fetched once at startup; replaced wholesale, mutated only by import.
    pub remote: Vec<Event>,
    /// User submissions, persisted on every change.
    pub local: Vec<Event>,
}

impl EventStore {
    pub fn new(ctx: SharedContext) -> Self {
        Self {
            ctx,
            remote: vec![],
            local: vec![],
        }
    }

    /// Reads persisted submissions into memory (empty on anything wrong).
    pub fn load_local(&mut self) {
        self.local = LocalStore::load(self.ctx.as_ref());
    }

    /// Replaces the remote set with a freshly normalized feed batch.
    pub fn set_remote_raw(&mut self, raw: Vec<RawEvent>) {
        self.remote = normalize(raw);
    }

    /// Normalizes and stores one user submission, persisting the whole
    /// local collection immediately. Fails when the start time is missing
    /// or unparseable (the one hard requirement on a submission).
    pub fn submit(&mut self, raw: RawEvent) -> Result<Event> {
        let mut normalized = normalize(vec![raw]);
        let Some(event) = normalized.pop() else {
            anyhow::bail!("Submission needs a valid start date/time");
        };
        self.local.push(event.clone());
        LocalStore::save(self.ctx.as_ref(), &self.local)?;
        Ok(event)
    }

    /// Drops all local submissions, both in memory and on disk.
    pub fn clear_local(&mut self) -> Result<()> {
        self.local.clear();
        LocalStore::clear(self.ctx.as_ref())
    }

    /// Merges an imported batch into the in-memory remote set (existing
    /// events win on id collisions). Nothing is persisted. Returns how
    /// many events the batch contributed after normalization.
    pub fn import_raw(&mut self, raw: Vec<RawEvent>) -> usize {
        let incoming = normalize(raw);
        let count = incoming.len();
        self.remote = merge::merge(&self.remote, &incoming);
        count
    }

    /// The unioned remote+local set the filter engine consumes.
    pub fn union(&self) -> Vec<Event> {
        let mut all = self.remote.clone();
        all.extend(self.local.iter().cloned());
        all
    }

    /// Filtered and sorted view over the union.
    pub fn filtered<Tz: TimeZone>(&self, filters: &FilterState, tz: &Tz) -> Vec<Event> {
        filter::apply(&self.union(), filters, tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;
    use chrono::Utc;
    use std::sync::Arc;

    fn store() -> EventStore {
        EventStore::new(Arc::new(TestContext::new()))
    }

    fn raw(title: &str, start: &str) -> RawEvent {
        RawEvent {
            title: Some(title.to_string()),
            start: Some(start.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_rejects_missing_start() {
        let mut s = store();
        let result = s.submit(RawEvent {
            title: Some("No date".into()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert!(s.local.is_empty());
    }

    #[test]
    fn test_union_holds_remote_and_local() {
        let mut s = store();
        s.set_remote_raw(vec![raw("Remote pizza", "2026-03-04T18:00:00Z")]);
        s.submit(raw("My bake sale", "2026-03-05T10:00:00Z")).unwrap();
        assert_eq!(s.union().len(), 2);
        assert_eq!(s.filtered(&FilterState::default(), &Utc).len(), 2);
    }

    #[test]
    fn test_import_does_not_clobber_existing() {
        let mut s = store();
        let mut a = raw("Original", "2026-03-04T18:00:00Z");
        a.id = Some("engage-1".into());
        s.set_remote_raw(vec![a]);

        let mut b = raw("Re-scrape", "2026-03-04T18:30:00Z");
        b.id = Some("engage-1".into());
        let mut c = raw("Fresh", "2026-03-06T12:00:00Z");
        c.id = Some("engage-2".into());
        let count = s.import_raw(vec![b, c]);

        assert_eq!(count, 2);
        assert_eq!(s.remote.len(), 2);
        assert_eq!(
            s.remote.iter().find(|e| e.id == "engage-1").unwrap().title,
            "Original"
        );
    }
}

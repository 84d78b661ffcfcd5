// File: ./src/model/merge.rs
use crate::model::Event;
use std::collections::HashSet;

/// Merges an imported batch into an existing set, deduplicating by `id`
/// with first-occurrence-wins semantics (`existing` runs first, so it
/// always beats `incoming` on a collision).
///
/// Pure: the caller decides whether the merged set is kept in memory only.
pub fn merge(existing: &[Event], incoming: &[Event]) -> Vec<Event> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(existing.len() + incoming.len());
    for ev in existing.iter().chain(incoming) {
        if seen.insert(ev.id.as_str()) {
            out.push(ev.clone());
        }
    }
    out
}

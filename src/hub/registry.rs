//! # Listener registry - bucket map keyed by subscription name.
//!
//! The registry owns one bucket per subscription name plus the flat list of
//! any-listeners. It is a pure data structure: dispatch policy (snapshot,
//! live-check, retire-before-invoke) lives in the hub core.
//!
//! ## Rules
//! - Insertion order within a bucket is preserved; cross-bucket order is
//!   recovered by sorting matches on [`ListenerId`].
//! - A bucket is dropped when its last entry is removed, which also resets
//!   its ceiling-warning latch.
//! - The ceiling is advisory: exceeding it logs a warning once per bucket,
//!   the registration always succeeds.

use std::collections::HashMap;
use std::rc::Rc;

use crate::hub::entry::{AnyEntry, ListenerEntry, ListenerId};
use crate::pattern::{split_segments, Pattern};

/// Listeners registered under one subscription name.
struct Bucket<P> {
    /// Parsed pattern; present only in wildcard mode.
    pattern: Option<Pattern>,
    entries: Vec<Rc<ListenerEntry<P>>>,
    /// Latches after the first ceiling warning for this bucket.
    warned: bool,
}

/// Bucket map plus any-listeners, with a shared id sequence.
pub(crate) struct Registry<P> {
    buckets: HashMap<String, Bucket<P>>,
    any: Vec<Rc<AnyEntry<P>>>,
    next_id: u64,
}

impl<P> Registry<P> {
    pub(crate) fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            any: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registers a listener under `name`, warning when the bucket grows past
    /// `ceiling` (0 disables the warning).
    pub(crate) fn insert(
        &mut self,
        name: &str,
        delimiter: &str,
        wildcard: bool,
        times: Option<u32>,
        callback: Rc<dyn Fn(&P)>,
        ceiling: usize,
    ) -> ListenerId {
        let id = self.next_id();
        let bucket = self.buckets.entry(name.to_string()).or_insert_with(|| Bucket {
            pattern: wildcard.then(|| Pattern::parse(name, delimiter)),
            entries: Vec::new(),
            warned: false,
        });
        bucket
            .entries
            .push(Rc::new(ListenerEntry::new(id, times, callback)));

        if ceiling > 0 && bucket.entries.len() > ceiling && !bucket.warned {
            bucket.warned = true;
            let count = bucket.entries.len();
            tracing::warn!(
                event = name,
                count,
                max = ceiling,
                "listener ceiling exceeded; possible listener leak"
            );
        }
        id
    }

    /// Removes the entry with `id` from the bucket keyed `name`.
    ///
    /// Returns false when either the bucket or the entry is absent.
    pub(crate) fn remove(&mut self, name: &str, id: ListenerId) -> bool {
        let Some(bucket) = self.buckets.get_mut(name) else {
            return false;
        };
        let Some(pos) = bucket.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        bucket.entries.remove(pos);
        if bucket.entries.is_empty() {
            self.buckets.remove(name);
        }
        true
    }

    /// True when the bucket keyed `name` still holds the entry with `id`.
    pub(crate) fn contains(&self, name: &str, id: ListenerId) -> bool {
        self.buckets
            .get(name)
            .is_some_and(|b| b.entries.iter().any(|e| e.id == id))
    }

    /// Collects entries matching an emitted name, sorted by registration id.
    ///
    /// Exact mode is a single bucket lookup; wildcard mode scans every
    /// bucket's parsed pattern against the segmented name.
    pub(crate) fn matches(
        &self,
        name: &str,
        delimiter: &str,
        wildcard: bool,
    ) -> Vec<(String, Rc<ListenerEntry<P>>)> {
        let mut out = Vec::new();
        if wildcard {
            let segments = split_segments(name, delimiter);
            for (key, bucket) in &self.buckets {
                let hit = match &bucket.pattern {
                    Some(pattern) => pattern.matches_segments(&segments),
                    None => key == name,
                };
                if hit {
                    out.extend(
                        bucket
                            .entries
                            .iter()
                            .map(|e| (key.clone(), Rc::clone(e))),
                    );
                }
            }
            out.sort_by_key(|(_, e)| e.id);
        } else if let Some(bucket) = self.buckets.get(name) {
            out.extend(
                bucket
                    .entries
                    .iter()
                    .map(|e| (name.to_string(), Rc::clone(e))),
            );
        }
        out
    }

    /// Drops every bucket; any-listeners and the id sequence survive.
    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Drops the bucket keyed `name`, if present.
    pub(crate) fn clear_event(&mut self, name: &str) {
        self.buckets.remove(name);
    }

    /// Returns sorted list of subscription names with live entries.
    pub(crate) fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.buckets.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    // ---------------------------
    // Any-listeners
    // ---------------------------

    pub(crate) fn insert_any(&mut self, callback: Rc<dyn Fn(&str, &P)>) -> ListenerId {
        let id = self.next_id();
        self.any.push(Rc::new(AnyEntry { id, callback }));
        id
    }

    pub(crate) fn remove_any(&mut self, id: ListenerId) -> bool {
        let Some(pos) = self.any.iter().position(|e| e.id == id) else {
            return false;
        };
        self.any.remove(pos);
        true
    }

    pub(crate) fn contains_any(&self, id: ListenerId) -> bool {
        self.any.iter().any(|e| e.id == id)
    }

    pub(crate) fn any_snapshot(&self) -> Vec<Rc<AnyEntry<P>>> {
        self.any.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop<P: 'static>() -> Rc<dyn Fn(&P)> {
        Rc::new(|_| {})
    }

    #[test]
    fn test_ids_increase_across_buckets_and_any() {
        let mut reg: Registry<()> = Registry::new();
        let a = reg.insert("a", ".", false, None, noop(), 0);
        let b = reg.insert("b", ".", false, None, noop(), 0);
        let c = reg.insert_any(Rc::new(|_, _| {}));
        assert!(a < b && b < c);
    }

    #[test]
    fn test_remove_drops_empty_bucket() {
        let mut reg: Registry<()> = Registry::new();
        let id = reg.insert("evt", ".", false, None, noop(), 0);
        assert!(reg.contains("evt", id));
        assert!(reg.remove("evt", id));
        assert!(!reg.contains("evt", id));
        assert!(reg.names().is_empty(), "empty bucket must be dropped");
        assert!(!reg.remove("evt", id), "second removal is a no-op");
    }

    #[test]
    fn test_names_are_sorted() {
        let mut reg: Registry<()> = Registry::new();
        reg.insert("zeta", ".", false, None, noop(), 0);
        reg.insert("alpha", ".", false, None, noop(), 0);
        reg.insert("mid", ".", false, None, noop(), 0);
        assert_eq!(reg.names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_wildcard_matches_sort_by_registration_order() {
        let mut reg: Registry<()> = Registry::new();
        let wild = reg.insert("job.*", ".", true, None, noop(), 0);
        let exact = reg.insert("job.done", ".", true, None, noop(), 0);
        let hits = reg.matches("job.done", ".", true);
        let ids: Vec<ListenerId> = hits.iter().map(|(_, e)| e.id).collect();
        assert_eq!(ids, vec![wild, exact]);
    }

    #[test]
    fn test_exact_mode_treats_star_as_literal_text() {
        let mut reg: Registry<()> = Registry::new();
        reg.insert("job.*", ".", false, None, noop(), 0);
        assert_eq!(reg.matches("job.done", ".", false).len(), 0);
        assert_eq!(reg.matches("job.*", ".", false).len(), 1);
    }

    #[test]
    fn test_ceiling_never_rejects_registration() {
        let mut reg: Registry<()> = Registry::new();
        for _ in 0..15 {
            reg.insert("evt", ".", false, None, noop(), 3);
        }
        assert_eq!(reg.matches("evt", ".", false).len(), 15);
    }
}

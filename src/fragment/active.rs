//! The set of cues overlapping the fragmenter's current position.

use std::collections::BTreeMap;

use crate::webvtt::cue::Cue;

/// Ordered multiset of in-flight cues.
///
/// Entries are keyed by `(end_time, arrival index)`: the primary key drives
/// eviction (earliest end first, ties evicted together), the secondary key
/// keeps entries with equal end times distinct and fixes their relative
/// order. Serialization order inside an emitted sample is arrival order,
/// recomputed on demand via [`ActiveCues::in_arrival_order`].
#[derive(Debug, Default)]
pub(crate) struct ActiveCues {
    by_end: BTreeMap<(u64, u64), Cue>,
}

impl ActiveCues {
    pub(crate) fn is_empty(&self) -> bool {
        self.by_end.is_empty()
    }

    /// Insert a cue with its arrival index.
    pub(crate) fn insert(&mut self, cue: Cue, arrival: u64) {
        self.by_end.insert((cue.end_time(), arrival), cue);
    }

    /// The smallest end time among current entries.
    pub(crate) fn earliest_end(&self) -> Option<u64> {
        self.by_end.keys().next().map(|&(end, _)| end)
    }

    /// Remove every cue whose end time is `<= t`, in eviction order.
    pub(crate) fn evict_through(&mut self, t: u64) -> Vec<Cue> {
        let mut evicted = Vec::new();
        while let Some(entry) = self.by_end.first_entry() {
            if entry.key().0 > t {
                break;
            }
            evicted.push(entry.remove());
        }
        evicted
    }

    /// Current entries sorted by arrival index.
    pub(crate) fn in_arrival_order(&self) -> Vec<&Cue> {
        let mut entries: Vec<(u64, &Cue)> = self
            .by_end
            .iter()
            .map(|(&(_, arrival), cue)| (arrival, cue))
            .collect();
        entries.sort_unstable_by_key(|&(arrival, _)| arrival);
        entries.into_iter().map(|(_, cue)| cue).collect()
    }
}

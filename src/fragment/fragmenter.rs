//! Fragmenting of timed WebVTT cues into contiguous ISO-BMFF text samples.

use std::collections::VecDeque;

use bytes::Bytes;

use crate::fragment::active::ActiveCues;
use crate::fragment::boxes::{VttCueBox, VttEmptyCueBox};
use crate::types::TextSample;
use crate::webvtt::cue::Cue;

/// Converts a stream of possibly-overlapping cues into non-overlapping,
/// time-contiguous [`TextSample`]s suitable for an fMP4 text track.
///
/// Cues must be pushed in non-decreasing start-time order. Each emitted
/// sample covers one maximal interval over which the set of active cues is
/// constant and carries the serialized `vttc` box of every cue spanning the
/// whole interval, in the order the cues were pushed. Intervals with no
/// active cue carry a single `vtte` box. A leading interval before the first
/// cue is never emitted.
///
/// ```
/// use webvtt_fmp4::{Cue, WebVttFragmenter};
///
/// let mut fragmenter = WebVttFragmenter::new();
/// fragmenter.push_sample(Cue::from_text(0, 2000, "hi"));
/// fragmenter.push_sample(Cue::from_text(1000, 2000, "hello"));
/// fragmenter.flush();
///
/// // [0,1000) {hi}, [1000,2000) {hi,hello}, [2000,3000) {hello}
/// assert_eq!(fragmenter.ready_samples_size(), 3);
/// while let Some(sample) = fragmenter.pop_sample() {
///     assert!(sample.duration > 0);
/// }
/// ```
#[derive(Debug, Default)]
pub struct WebVttFragmenter {
    active: ActiveCues,
    ready: VecDeque<TextSample>,
    /// Timestamp through which output has been emitted. Meaningless until
    /// the first cue arrives.
    cursor: u64,
    started: bool,
    next_arrival: u64,
    last_start_time: u64,
}

impl WebVttFragmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one cue to the timeline.
    ///
    /// Panics if `cue.duration` is zero or `cue.start_time` is smaller than
    /// a previously pushed start time; both are caller bugs, not runtime
    /// conditions. Comment blocks carry no timing, so callers are expected
    /// to drop cues with [`Cue::is_comment`] before pushing.
    ///
    /// Pushing may complete zero or more output samples; completed samples
    /// accumulate until [`WebVttFragmenter::pop_sample`] retrieves them.
    pub fn push_sample(&mut self, cue: Cue) {
        assert!(cue.duration > 0, "cue duration must be positive");
        assert!(
            !self.started || cue.start_time >= self.last_start_time,
            "cues must be pushed in non-decreasing start-time order"
        );

        if !self.started {
            // The timeline begins at the first cue; nothing is emitted for
            // whatever came before it.
            self.cursor = cue.start_time;
            self.started = true;
        } else if cue.start_time > self.cursor {
            self.advance_to(cue.start_time);
        }
        self.last_start_time = cue.start_time;

        self.active.insert(cue, self.next_arrival);
        self.next_arrival += 1;
    }

    /// Drain the active set, emitting samples up to the last cue's end.
    pub fn flush(&mut self) {
        let mut drained = 0;
        while let Some(end) = self.active.earliest_end() {
            self.emit_until(end);
            self.cursor = end;
            drained += self.active.evict_through(end).len();
        }
        tracing::debug!(
            "flushed fragmenter: drained {} cues, {} samples ready",
            drained,
            self.ready.len()
        );
    }

    /// Number of completed samples waiting to be popped.
    pub fn ready_samples_size(&self) -> usize {
        self.ready.len()
    }

    /// Remove and return the oldest completed sample, if any.
    pub fn pop_sample(&mut self) -> Option<TextSample> {
        self.ready.pop_front()
    }

    /// Advance the timeline to `target`, emitting a sample for every maximal
    /// interval over which the active set is constant and evicting cues as
    /// their end times are passed.
    fn advance_to(&mut self, target: u64) {
        while let Some(end) = self.active.earliest_end() {
            if end > target {
                break;
            }
            self.emit_until(end);
            self.cursor = end;
            self.active.evict_through(end);
        }
        if target > self.cursor {
            self.emit_until(target);
            self.cursor = target;
        }
    }

    /// Emit one sample covering `[cursor, until)`. Zero-length intervals are
    /// skipped: they occur when several cues share an end time, or when a
    /// cue starts exactly where another ends.
    fn emit_until(&mut self, until: u64) {
        if until <= self.cursor {
            return;
        }
        let mut data = Vec::new();
        if self.active.is_empty() {
            // Nothing on screen: the interval still needs a sample so the
            // timeline stays contiguous.
            VttEmptyCueBox.append_to(&mut data);
        } else {
            for cue in self.active.in_arrival_order() {
                VttCueBox::from(cue).append_to(&mut data);
            }
        }
        self.ready.push_back(TextSample::new(
            self.cursor,
            until - self.cursor,
            Bytes::from(data),
        ));
    }
}

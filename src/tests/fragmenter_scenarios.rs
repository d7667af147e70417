//! Canonical cue-arrangement scenarios, checked byte-for-byte.
//!
//! The ways cues can relate in time:
//!
//! 1. No overlap, contiguous:   |-- cue1 --||-- cue2 --|
//! 2. No overlap, gap:          |-- cue1 --|   |-- cue2 --|
//! 3. Staircase overlap:        |-- cue1 --|
//!                                  |-- cue2 --|
//!                                      |-- cue3 --|
//! 4. Long cue enclosing short ones
//! 5. First cue starting after zero
//! 6. Two cues sharing a start time
//!
//! Expected sample payloads are rebuilt with the box serializer, so these
//! tests also pin the exact bytes a muxer receives.

use crate::webvtt::cue::Cue;
use crate::{VttCueBox, VttEmptyCueBox, WebVttFragmenter};

const MESSAGE_1: &str = "hi";
const MESSAGE_2: &str = "hello";
const MESSAGE_3: &str = "some multi word message";
const MESSAGE_4: &str = "message!!";

/// Serialized concatenation of payload-only cue boxes, one per text.
fn cue_boxes(texts: &[&str]) -> Vec<u8> {
    let mut out = Vec::new();
    for text in texts {
        VttCueBox {
            cue_payload: text.to_string(),
            ..Default::default()
        }
        .append_to(&mut out);
    }
    out
}

fn empty_cue_box() -> Vec<u8> {
    let mut out = Vec::new();
    VttEmptyCueBox.append_to(&mut out);
    out
}

fn assert_next_sample(fragmenter: &mut WebVttFragmenter, pts: u64, end: u64, expected: &[u8]) {
    let sample = fragmenter.pop_sample().expect("a sample should be ready");
    assert_eq!(
        (sample.pts, sample.end_time()),
        (pts, end),
        "wrong interval"
    );
    assert_eq!(&sample.data[..], expected, "wrong payload for [{pts},{end})");
}

#[test]
fn test_no_overlap_contiguous() {
    let mut fragmenter = WebVttFragmenter::new();
    fragmenter.push_sample(Cue::from_text(0, 2000, MESSAGE_1));
    fragmenter.push_sample(Cue::from_text(2000, 1000, MESSAGE_2));
    fragmenter.flush();
    assert_eq!(fragmenter.ready_samples_size(), 2);

    assert_next_sample(&mut fragmenter, 0, 2000, &cue_boxes(&[MESSAGE_1]));
    assert_next_sample(&mut fragmenter, 2000, 3000, &cue_boxes(&[MESSAGE_2]));
}

#[test]
fn test_gap() {
    let mut fragmenter = WebVttFragmenter::new();
    fragmenter.push_sample(Cue::from_text(0, 1000, MESSAGE_1));
    fragmenter.push_sample(Cue::from_text(2000, 1000, MESSAGE_2));
    // The finished cue and the gap sample are ready before the flush.
    assert_eq!(fragmenter.ready_samples_size(), 2);

    fragmenter.flush();
    assert_eq!(fragmenter.ready_samples_size(), 3);

    assert_next_sample(&mut fragmenter, 0, 1000, &cue_boxes(&[MESSAGE_1]));
    assert_next_sample(&mut fragmenter, 1000, 2000, &empty_cue_box());
    assert_next_sample(&mut fragmenter, 2000, 3000, &cue_boxes(&[MESSAGE_2]));
}

#[test]
fn test_overlapping_cues_sequential() {
    let mut fragmenter = WebVttFragmenter::new();
    fragmenter.push_sample(Cue::from_text(0, 2000, MESSAGE_1));
    fragmenter.push_sample(Cue::from_text(1000, 2000, MESSAGE_2));
    fragmenter.push_sample(Cue::from_text(1500, 4000, MESSAGE_3));
    fragmenter.flush();
    assert_eq!(fragmenter.ready_samples_size(), 5);

    assert_next_sample(&mut fragmenter, 0, 1000, &cue_boxes(&[MESSAGE_1]));
    assert_next_sample(&mut fragmenter, 1000, 1500, &cue_boxes(&[MESSAGE_1, MESSAGE_2]));
    assert_next_sample(
        &mut fragmenter,
        1500,
        2000,
        &cue_boxes(&[MESSAGE_1, MESSAGE_2, MESSAGE_3]),
    );
    assert_next_sample(&mut fragmenter, 2000, 3000, &cue_boxes(&[MESSAGE_2, MESSAGE_3]));
    assert_next_sample(&mut fragmenter, 3000, 5500, &cue_boxes(&[MESSAGE_3]));
}

#[test]
fn test_overlapping_long_cue() {
    let mut fragmenter = WebVttFragmenter::new();
    fragmenter.push_sample(Cue::from_text(0, 10000, MESSAGE_1));
    fragmenter.push_sample(Cue::from_text(1000, 5000, MESSAGE_2));
    fragmenter.push_sample(Cue::from_text(2000, 1000, MESSAGE_3));
    fragmenter.push_sample(Cue::from_text(8000, 1000, MESSAGE_4));
    fragmenter.flush();
    assert_eq!(fragmenter.ready_samples_size(), 7);

    assert_next_sample(&mut fragmenter, 0, 1000, &cue_boxes(&[MESSAGE_1]));
    assert_next_sample(&mut fragmenter, 1000, 2000, &cue_boxes(&[MESSAGE_1, MESSAGE_2]));
    assert_next_sample(
        &mut fragmenter,
        2000,
        3000,
        &cue_boxes(&[MESSAGE_1, MESSAGE_2, MESSAGE_3]),
    );
    assert_next_sample(&mut fragmenter, 3000, 6000, &cue_boxes(&[MESSAGE_1, MESSAGE_2]));
    assert_next_sample(&mut fragmenter, 6000, 8000, &cue_boxes(&[MESSAGE_1]));
    assert_next_sample(&mut fragmenter, 8000, 9000, &cue_boxes(&[MESSAGE_1, MESSAGE_4]));
    assert_next_sample(&mut fragmenter, 9000, 10000, &cue_boxes(&[MESSAGE_1]));
}

#[test]
fn test_gap_at_beginning() {
    let mut fragmenter = WebVttFragmenter::new();
    fragmenter.push_sample(Cue::from_text(1200, 2000, MESSAGE_1));
    fragmenter.flush();

    // The timeline starts at the first cue: no leading empty sample.
    assert_eq!(fragmenter.ready_samples_size(), 1);
    assert_next_sample(&mut fragmenter, 1200, 3200, &cue_boxes(&[MESSAGE_1]));
}

#[test]
fn test_same_start_time() {
    let mut fragmenter = WebVttFragmenter::new();
    fragmenter.push_sample(Cue::from_text(0, 2000, MESSAGE_1));
    fragmenter.push_sample(Cue::from_text(0, 1500, MESSAGE_2));
    fragmenter.flush();
    assert_eq!(fragmenter.ready_samples_size(), 2);

    assert_next_sample(&mut fragmenter, 0, 1500, &cue_boxes(&[MESSAGE_1, MESSAGE_2]));
    assert_next_sample(&mut fragmenter, 1500, 2000, &cue_boxes(&[MESSAGE_1]));
}

#[test]
fn test_combined_cases() {
    let mut fragmenter = WebVttFragmenter::new();
    fragmenter.push_sample(Cue::from_text(0, 2000, MESSAGE_1));
    fragmenter.push_sample(Cue::from_text(100, 100, MESSAGE_2));
    fragmenter.push_sample(Cue::from_text(1500, 1000, MESSAGE_3));
    fragmenter.push_sample(Cue::from_text(1500, 800, MESSAGE_4));
    fragmenter.flush();
    assert_eq!(fragmenter.ready_samples_size(), 6);

    assert_next_sample(&mut fragmenter, 0, 100, &cue_boxes(&[MESSAGE_1]));
    assert_next_sample(&mut fragmenter, 100, 200, &cue_boxes(&[MESSAGE_1, MESSAGE_2]));
    assert_next_sample(&mut fragmenter, 200, 1500, &cue_boxes(&[MESSAGE_1]));
    assert_next_sample(
        &mut fragmenter,
        1500,
        2000,
        &cue_boxes(&[MESSAGE_1, MESSAGE_3, MESSAGE_4]),
    );
    assert_next_sample(&mut fragmenter, 2000, 2300, &cue_boxes(&[MESSAGE_3, MESSAGE_4]));
    assert_next_sample(&mut fragmenter, 2300, 2500, &cue_boxes(&[MESSAGE_3]));
}

#[test]
fn test_equal_interval_cues() {
    let mut fragmenter = WebVttFragmenter::new();
    fragmenter.push_sample(Cue::from_text(0, 1000, MESSAGE_1));
    fragmenter.push_sample(Cue::from_text(0, 1000, MESSAGE_2));
    fragmenter.flush();

    // Identical intervals collapse into one sample with both cues, pushed order.
    assert_eq!(fragmenter.ready_samples_size(), 1);
    assert_next_sample(&mut fragmenter, 0, 1000, &cue_boxes(&[MESSAGE_1, MESSAGE_2]));
}

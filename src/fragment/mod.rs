//! Fragmenting of timed text into ISO-BMFF samples.
//!
//! This module turns parsed WebVTT cues into the sample stream an fMP4
//! muxer consumes: serialized cue boxes over non-overlapping, contiguous
//! intervals.

pub mod active;
pub mod boxes;
pub mod fragmenter;
pub mod isobmff;

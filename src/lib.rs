pub(crate) mod error;
pub(crate) mod fragment;
pub(crate) mod types;
pub(crate) mod webvtt;

#[cfg(test)]
pub(crate) mod tests;

pub use error::{Result, VttError};
pub use fragment::boxes::{parse_boxes, VttBox, VttCueBox, VttEmptyCueBox, VTT_EMPTY_CUE_BOX_BYTES};
pub use fragment::fragmenter::WebVttFragmenter;
pub use types::TextSample;
pub use webvtt::cue::Cue;
pub use webvtt::parser::{parse_document, parse_file, WebVttParser};
pub use webvtt::timestamp::{format_timestamp, parse_timestamp};
pub use webvtt::writer::{WebVttConfig, WebVttWriter};

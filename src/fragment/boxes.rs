//! WebVTT sample boxes (ISO 14496-30).
//!
//! Fragmented text samples carry their cues as `vttc` boxes, each wrapping
//! `iden`/`sttg`/`payl` string sub-boxes; intervals with no active cue carry
//! a single empty `vtte` box.

use crate::error::{Result, VttError};
use crate::fragment::isobmff::{append_box, append_box_header, walk_boxes};
use crate::webvtt::cue::Cue;

const CUE_BOX: &[u8; 4] = b"vttc";
const CUE_ID_BOX: &[u8; 4] = b"iden";
const CUE_SETTINGS_BOX: &[u8; 4] = b"sttg";
const CUE_PAYLOAD_BOX: &[u8; 4] = b"payl";
const CUE_TIME_BOX: &[u8; 4] = b"ctim";

/// The serialized form of an empty cue box is a bare 8-byte header.
pub const VTT_EMPTY_CUE_BOX_BYTES: [u8; 8] = [0x00, 0x00, 0x00, 0x08, b'v', b't', b't', b'e'];

/// A `vttc` box: one cue as stored inside a text sample.
///
/// String fields map to sub-boxes and are serialized only when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VttCueBox {
    /// Cue identifier (`iden`)
    pub cue_id: String,
    /// Cue settings (`sttg`), passed through without interpretation
    pub cue_settings: String,
    /// Cue text (`payl`)
    pub cue_payload: String,
    /// Originating presentation time (`ctim`); callers that do not track
    /// originating time leave this empty and no sub-box is written
    pub cue_time: String,
}

impl VttCueBox {
    /// Serialized size in bytes, including the 8-byte `vttc` header.
    pub fn box_size(&self) -> usize {
        let mut size = 8;
        for field in [
            &self.cue_id,
            &self.cue_settings,
            &self.cue_payload,
            &self.cue_time,
        ] {
            if !field.is_empty() {
                size += 8 + field.len();
            }
        }
        size
    }

    /// Append the serialized box to `out`.
    pub fn append_to(&self, out: &mut Vec<u8>) {
        append_box_header(out, CUE_BOX, self.box_size() - 8);
        if !self.cue_id.is_empty() {
            append_box(out, CUE_ID_BOX, self.cue_id.as_bytes());
        }
        if !self.cue_settings.is_empty() {
            append_box(out, CUE_SETTINGS_BOX, self.cue_settings.as_bytes());
        }
        if !self.cue_payload.is_empty() {
            append_box(out, CUE_PAYLOAD_BOX, self.cue_payload.as_bytes());
        }
        if !self.cue_time.is_empty() {
            append_box(out, CUE_TIME_BOX, self.cue_time.as_bytes());
        }
    }

    /// Parse a `vttc` payload (the bytes after its header) back into a box.
    fn parse_payload(payload: &[u8]) -> Result<Self> {
        let mut parsed = VttCueBox::default();
        walk_boxes(payload, &mut |btype, content| {
            let text = std::str::from_utf8(content)
                .map_err(|_| VttError::MalformedBox("non-UTF-8 cue sub-box".to_string()))?
                .to_string();
            match btype {
                b"iden" => parsed.cue_id = text,
                b"sttg" => parsed.cue_settings = text,
                b"payl" => parsed.cue_payload = text,
                b"ctim" => parsed.cue_time = text,
                other => {
                    return Err(VttError::MalformedBox(format!(
                        "unknown cue sub-box {:?}",
                        String::from_utf8_lossy(other)
                    )))
                }
            }
            Ok(())
        })?;
        Ok(parsed)
    }
}

impl From<&Cue> for VttCueBox {
    fn from(cue: &Cue) -> Self {
        VttCueBox {
            cue_id: cue.identifier.clone(),
            cue_settings: cue.settings.clone(),
            cue_payload: cue.text(),
            cue_time: String::new(),
        }
    }
}

/// An empty `vtte` box, marking an interval with no active cue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VttEmptyCueBox;

impl VttEmptyCueBox {
    /// Append the constant 8-byte serialization to `out`.
    pub fn append_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&VTT_EMPTY_CUE_BOX_BYTES);
    }
}

/// One top-level box recovered from a text sample payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VttBox {
    /// A cue (`vttc`)
    Cue(VttCueBox),
    /// An empty-cue marker (`vtte`)
    Empty,
}

/// Parse the concatenated boxes of a text sample payload.
///
/// Recovers, in order, every `vttc`/`vtte` box in `data`. Used by tests and
/// by consumers that need to inspect already-fragmented samples.
pub fn parse_boxes(data: &[u8]) -> Result<Vec<VttBox>> {
    let mut boxes = Vec::new();
    walk_boxes(data, &mut |btype, payload| {
        match btype {
            b"vttc" => boxes.push(VttBox::Cue(VttCueBox::parse_payload(payload)?)),
            b"vtte" => {
                if !payload.is_empty() {
                    return Err(VttError::MalformedBox(
                        "vtte box with non-empty payload".to_string(),
                    ));
                }
                boxes.push(VttBox::Empty);
            }
            other => {
                return Err(VttError::MalformedBox(format!(
                    "unexpected top-level box {:?}",
                    String::from_utf8_lossy(other)
                )))
            }
        }
        Ok(())
    })?;
    Ok(boxes)
}

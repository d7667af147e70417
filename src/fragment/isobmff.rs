//! ISO-BMFF box framing utilities.
//! Centralizes the length-prefixed read/write boilerplate shared by the
//! cue box serializer and its tests.

use crate::error::{Result, VttError};

/// Append an 8-byte box header: `u32` big-endian total size, then the type.
///
/// `payload_len` is the size of the box content excluding the header.
pub(crate) fn append_box_header(out: &mut Vec<u8>, box_type: &[u8; 4], payload_len: usize) {
    let total = payload_len + 8;
    debug_assert!(total <= u32::MAX as usize);
    out.extend_from_slice(&(total as u32).to_be_bytes());
    out.extend_from_slice(box_type);
}

/// Append a complete box: header plus payload bytes.
pub(crate) fn append_box(out: &mut Vec<u8>, box_type: &[u8; 4], payload: &[u8]) {
    append_box_header(out, box_type, payload.len());
    out.extend_from_slice(payload);
}

/// Walk all top-level boxes in a buffer.
/// `callback` is invoked once per box with `(box_type, payload)`.
/// Unlike a best-effort traversal, truncated or undersized boxes are
/// reported as `MalformedBox` so corrupt sample data cannot pass silently.
pub(crate) fn walk_boxes<'a, F>(data: &'a [u8], callback: &mut F) -> Result<()>
where
    F: FnMut(&[u8; 4], &'a [u8]) -> Result<()>,
{
    let mut pos = 0;
    while pos < data.len() {
        if pos + 8 > data.len() {
            return Err(VttError::MalformedBox(format!(
                "truncated box header at offset {}",
                pos
            )));
        }
        let size = u32::from_be_bytes(data[pos..pos + 4].try_into().unwrap()) as usize;
        if size < 8 || pos + size > data.len() {
            return Err(VttError::MalformedBox(format!(
                "bad box size {} at offset {}",
                size, pos
            )));
        }
        let btype: &[u8; 4] = data[pos + 4..pos + 8].try_into().unwrap();
        let payload = &data[pos + 8..pos + size];

        callback(btype, payload)?;

        pos += size;
    }
    Ok(())
}

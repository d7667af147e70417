//! The parsed WebVTT cue record.

/// A single WebVTT cue or comment block.
///
/// If `comment` is non-empty this is a NOTE block: it carries no timing and
/// all other fields are empty. Multiline text is kept one line per element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cue {
    /// Optional cue identifier (the line before the timing line)
    pub identifier: String,
    /// Start of the display interval. The parser produces milliseconds;
    /// the fragmenter treats the unit as opaque.
    pub start_time: u64,
    /// Length of the display interval, always > 0 for parsed cues
    pub duration: u64,
    /// Cue settings, the tokens after the end timestamp, uninterpreted
    pub settings: String,
    /// Cue text lines
    pub payload: Vec<String>,
    /// NOTE block lines; non-empty only for comments
    pub comment: Vec<String>,
}

impl Cue {
    /// Build a plain cue from timing and single-line text.
    pub fn from_text(start_time: u64, duration: u64, text: &str) -> Self {
        Cue {
            start_time,
            duration,
            payload: vec![text.to_string()],
            ..Default::default()
        }
    }

    /// Exclusive end of the display interval.
    pub fn end_time(&self) -> u64 {
        self.start_time + self.duration
    }

    /// Whether this is a NOTE block rather than a displayable cue.
    pub fn is_comment(&self) -> bool {
        !self.comment.is_empty()
    }

    /// The cue text with lines rejoined.
    pub fn text(&self) -> String {
        self.payload.join("\n")
    }
}

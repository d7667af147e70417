//! Streaming WebVTT text parser.
//!
//! A line-oriented state machine over incrementally supplied bytes. Input
//! may arrive in arbitrary chunks; only complete lines are consumed, so a
//! cue (or even a UTF-8 sequence) split across chunks is handled
//! transparently. Completed cues are returned from each [`WebVttParser::parse`]
//! call; [`WebVttParser::flush`] completes whatever is still in progress at
//! end of input.

use std::path::Path;

use crate::error::{Result, VttError};
use crate::webvtt::cue::Cue;
use crate::webvtt::timestamp::parse_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Expecting the `WEBVTT` magic line
    Header,
    /// Collecting header/global-settings lines until the first blank line
    Metadata,
    /// Between cues: the next line starts a cue, a NOTE, or is blank
    CueIdentifierOrTimingOrComment,
    /// An identifier was seen; the next line must be a timing line
    CueTiming,
    /// Collecting cue text until a blank line
    CuePayload,
    /// Collecting NOTE lines until a blank line
    Comment,
    /// A malformed document was seen; all further input is rejected
    Error,
}

/// Incremental WebVTT document parser.
///
/// ```
/// use webvtt_fmp4::WebVttParser;
///
/// let mut parser = WebVttParser::new();
/// let mut cues = parser.parse(b"WEBVTT\n\n00:01.000 --> 00:03.000\nhi\n\n").unwrap();
/// cues.extend(parser.flush().unwrap());
/// assert_eq!(cues.len(), 1);
/// assert_eq!(cues[0].start_time, 1000);
/// ```
#[derive(Debug)]
pub struct WebVttParser {
    /// Bytes received but not yet consumed as complete lines
    buffer: Vec<u8>,
    state: ParseState,
    /// The `WEBVTT` line plus any metadata lines (e.g. `X-TIMESTAMP-MAP`)
    header: Vec<String>,
    current: Cue,
}

impl Default for WebVttParser {
    fn default() -> Self {
        Self::new()
    }
}

impl WebVttParser {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            state: ParseState::Header,
            header: Vec::new(),
            current: Cue::default(),
        }
    }

    /// The header block seen so far: the magic line and metadata lines.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Feed a chunk of document bytes, returning the cues it completed.
    ///
    /// Comment (NOTE) blocks are returned as cues with
    /// [`Cue::is_comment`] set; they carry no timing.
    pub fn parse(&mut self, data: &[u8]) -> Result<Vec<Cue>> {
        if self.state == ParseState::Error {
            return Err(VttError::ParserPoisoned);
        }
        self.buffer.extend_from_slice(data);

        let mut completed = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut line_bytes: Vec<u8> = self.buffer.drain(..=newline).collect();
            line_bytes.pop();
            if line_bytes.last() == Some(&b'\r') {
                line_bytes.pop();
            }
            let line = String::from_utf8_lossy(&line_bytes).into_owned();
            self.process_line(line, &mut completed)?;
        }
        Ok(completed)
    }

    /// Signal end of input, completing any cue still in progress.
    pub fn flush(&mut self) -> Result<Vec<Cue>> {
        if self.state == ParseState::Error {
            return Err(VttError::ParserPoisoned);
        }

        let mut completed = Vec::new();
        if !self.buffer.is_empty() {
            // Unterminated final line.
            let mut line_bytes = std::mem::take(&mut self.buffer);
            if line_bytes.last() == Some(&b'\r') {
                line_bytes.pop();
            }
            let line = String::from_utf8_lossy(&line_bytes).into_owned();
            self.process_line(line, &mut completed)?;
        }

        match self.state {
            ParseState::CuePayload | ParseState::Comment => {
                completed.push(std::mem::take(&mut self.current));
                self.state = ParseState::CueIdentifierOrTimingOrComment;
            }
            ParseState::CueTiming => {
                self.state = ParseState::Error;
                return Err(VttError::InvalidTiming(format!(
                    "end of input after cue identifier {:?}",
                    self.current.identifier
                )));
            }
            _ => {}
        }
        Ok(completed)
    }

    fn process_line(&mut self, line: String, completed: &mut Vec<Cue>) -> Result<()> {
        match self.state {
            ParseState::Header => {
                let line = line.strip_prefix('\u{feff}').unwrap_or(&line);
                let is_magic = line == "WEBVTT"
                    || line.starts_with("WEBVTT ")
                    || line.starts_with("WEBVTT\t");
                if !is_magic {
                    self.state = ParseState::Error;
                    return Err(VttError::MissingHeader);
                }
                self.header.push(line.to_string());
                self.state = ParseState::Metadata;
            }
            ParseState::Metadata => {
                if line.is_empty() {
                    self.state = ParseState::CueIdentifierOrTimingOrComment;
                } else {
                    self.header.push(line);
                }
            }
            ParseState::CueIdentifierOrTimingOrComment => {
                if line.is_empty() {
                    // Stray blank line between cues.
                } else if line == "NOTE" || line.starts_with("NOTE ") || line.starts_with("NOTE\t")
                {
                    self.current.comment.push(line);
                    self.state = ParseState::Comment;
                } else if line.contains("-->") {
                    self.parse_timing_line(&line)?;
                    self.state = ParseState::CuePayload;
                } else {
                    self.current.identifier = line;
                    self.state = ParseState::CueTiming;
                }
            }
            ParseState::CueTiming => {
                if line.contains("-->") {
                    self.parse_timing_line(&line)?;
                    self.state = ParseState::CuePayload;
                } else {
                    tracing::warn!("expected a cue timing line, got {:?}", line);
                    self.state = ParseState::Error;
                    return Err(VttError::UnexpectedLine(line));
                }
            }
            ParseState::CuePayload => {
                if line.is_empty() {
                    completed.push(std::mem::take(&mut self.current));
                    self.state = ParseState::CueIdentifierOrTimingOrComment;
                } else {
                    self.current.payload.push(line);
                }
            }
            ParseState::Comment => {
                if line.is_empty() {
                    completed.push(std::mem::take(&mut self.current));
                    self.state = ParseState::CueIdentifierOrTimingOrComment;
                } else {
                    self.current.comment.push(line);
                }
            }
            ParseState::Error => unreachable!("parse() rejects input in the error state"),
        }
        Ok(())
    }

    /// Parse `<start> --> <end> [settings…]` into the current cue.
    fn parse_timing_line(&mut self, line: &str) -> Result<()> {
        let mut tokens = line.split_whitespace();

        let start = match tokens.next() {
            Some(token) => parse_timestamp(token).inspect_err(|_| {
                self.state = ParseState::Error;
            })?,
            None => {
                self.state = ParseState::Error;
                return Err(VttError::InvalidTiming(line.to_string()));
            }
        };
        if tokens.next() != Some("-->") {
            self.state = ParseState::Error;
            return Err(VttError::InvalidTiming(line.to_string()));
        }
        let end = match tokens.next() {
            Some(token) => parse_timestamp(token).inspect_err(|_| {
                self.state = ParseState::Error;
            })?,
            None => {
                self.state = ParseState::Error;
                return Err(VttError::InvalidTiming(line.to_string()));
            }
        };
        if end <= start {
            self.state = ParseState::Error;
            return Err(VttError::InvalidTiming(line.to_string()));
        }

        self.current.start_time = start;
        self.current.duration = end - start;
        self.current.settings = tokens.collect::<Vec<_>>().join(" ");
        Ok(())
    }
}

/// Parse a complete in-memory WebVTT document.
pub fn parse_document(data: &[u8]) -> Result<Vec<Cue>> {
    let mut parser = WebVttParser::new();
    let mut cues = parser.parse(data)?;
    cues.extend(parser.flush()?);
    Ok(cues)
}

/// Read and parse a WebVTT file.
pub fn parse_file(path: &Path) -> Result<Vec<Cue>> {
    let data = std::fs::read(path)?;
    parse_document(&data)
}

//! WebVTT document generation.
//!
//! Renders parsed cues back into WebVTT text, e.g. for serving subtitle
//! segments to players that consume raw `.vtt` rather than fMP4.

use crate::webvtt::cue::Cue;
use crate::webvtt::timestamp::format_timestamp;

/// Options for WebVTT document output.
#[derive(Debug, Clone, Default)]
pub struct WebVttConfig {
    /// Extra header lines written after the `WEBVTT` magic, e.g. an
    /// `X-TIMESTAMP-MAP` mapping for HLS.
    pub header_lines: Vec<String>,
}

/// Renders cues as a WebVTT document.
pub struct WebVttWriter {
    config: WebVttConfig,
}

impl WebVttWriter {
    pub fn with_config(config: WebVttConfig) -> Self {
        Self { config }
    }

    /// Render a complete document. Cue timings must be in milliseconds.
    pub fn write(&self, cues: &[Cue]) -> String {
        let mut output = String::new();
        output.push_str("WEBVTT\n");
        for line in &self.config.header_lines {
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');

        for cue in cues {
            if cue.is_comment() {
                for line in &cue.comment {
                    output.push_str(line);
                    output.push('\n');
                }
                output.push('\n');
                continue;
            }

            if !cue.identifier.is_empty() {
                output.push_str(&cue.identifier);
                output.push('\n');
            }
            output.push_str(&format_timestamp(cue.start_time));
            output.push_str(" --> ");
            output.push_str(&format_timestamp(cue.end_time()));
            if !cue.settings.is_empty() {
                output.push(' ');
                output.push_str(&cue.settings);
            }
            output.push('\n');
            for line in &cue.payload {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }
}

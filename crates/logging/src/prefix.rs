//! crates/logging/src/prefix.rs
//! Recognition and removal of the metadata prefix upstream embeds in formats.
//!
//! Upstream call sites build their format strings as
//! `<colour?><severity> (<timestamp>) <tag>: <message>` and pass the
//! timestamp and tag as the leading arguments. The sink receives severity and
//! tag separately, so the prefix and its two arguments are dropped before the
//! call is forwarded.
//!
//! Two textual shapes are recognised:
//!
//! - the placeholder marker `%c (%d) %s:`, searched for anywhere in the
//!   format because a colour escape may precede it;
//! - the literal-letter marker `E (%u) %s:` (any of `E W I D V`, with `%u` or
//!   `%d`), either at the start of the format or directly after one ANSI SGR
//!   colour escape. With upstream's seven byte escapes the colon lands at
//!   offset 9 or 16.
//!
//! Parsing only uses `find`, `strip_prefix` and `get`, so inputs shorter than
//! a marker are never inspected past their end.

use logging_sink::ArgCursor;

use crate::levels::Severity;

/// Placeholder marker searched for anywhere in a format string.
pub const PLACEHOLDER_MARKER: &str = "%c (%d) %s:";

/// Text following the severity letter in the literal-letter marker.
const LETTER_MARKER_TAILS: [&str; 2] = [" (%u) %s:", " (%d) %s:"];

/// Leading arguments that accompany a metadata prefix (tag copy and timestamp).
pub const PREFIX_ARGUMENTS: usize = 2;

/// The shape of metadata prefix found in a format string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrefixShape<'a> {
    /// No prefix; the format is forwarded unchanged.
    NoPrefix,
    /// A prefix at the very start of the format.
    Bare,
    /// A prefix preceded by other text, normally an ANSI colour escape.
    ColorEscaped {
        /// The text that preceded the marker.
        escape: &'a str,
    },
}

/// Result of scanning a format string for a metadata prefix.
///
/// # Examples
///
/// ```
/// use logging::{PrefixShape, strip_metadata_prefix};
///
/// let stripped = strip_metadata_prefix("%c (%d) %s: hello %d");
/// assert_eq!(stripped.shape(), PrefixShape::Bare);
/// assert_eq!(stripped.format(), "hello %d");
/// assert_eq!(stripped.discard(), 2);
///
/// let untouched = strip_metadata_prefix("plain %d");
/// assert_eq!(untouched.shape(), PrefixShape::NoPrefix);
/// assert_eq!(untouched.format(), "plain %d");
/// assert_eq!(untouched.discard(), 0);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StrippedFormat<'a> {
    shape: PrefixShape<'a>,
    format: &'a str,
    discard: usize,
}

impl<'a> StrippedFormat<'a> {
    const fn unchanged(format: &'a str) -> Self {
        Self {
            shape: PrefixShape::NoPrefix,
            format,
            discard: 0,
        }
    }

    fn stripped(shape: PrefixShape<'a>, rest: &'a str) -> Self {
        Self {
            shape,
            format: skip_separator(rest),
            discard: PREFIX_ARGUMENTS,
        }
    }

    /// Returns which prefix shape was recognised.
    #[must_use]
    pub const fn shape(&self) -> PrefixShape<'a> {
        self.shape
    }

    /// Returns the format string that remains after the prefix.
    #[must_use]
    pub const fn format(&self) -> &'a str {
        self.format
    }

    /// Returns how many leading arguments belong to the prefix.
    #[must_use]
    pub const fn discard(&self) -> usize {
        self.discard
    }

    /// Reports whether a prefix was found.
    #[must_use]
    pub const fn has_prefix(&self) -> bool {
        !matches!(self.shape, PrefixShape::NoPrefix)
    }

    /// Advances `args` past the arguments consumed by the prefix.
    #[must_use]
    pub const fn align<'b>(&self, args: ArgCursor<'b>) -> ArgCursor<'b> {
        args.skip(self.discard)
    }
}

/// Scans `format` for a metadata prefix and returns the remaining format.
#[must_use]
pub fn strip_metadata_prefix(format: &str) -> StrippedFormat<'_> {
    if let Some(found) = find_placeholder_marker(format) {
        return found;
    }
    if let Some(found) = parse_letter_marker(format) {
        return found;
    }
    StrippedFormat::unchanged(format)
}

fn find_placeholder_marker(format: &str) -> Option<StrippedFormat<'_>> {
    let start = format.find(PLACEHOLDER_MARKER)?;
    let rest = &format[start + PLACEHOLDER_MARKER.len()..];
    Some(StrippedFormat::stripped(shape_for(&format[..start]), rest))
}

fn parse_letter_marker(format: &str) -> Option<StrippedFormat<'_>> {
    let (escape, body) = split_color_escape(format);
    Severity::from_letter(*body.as_bytes().first()?)?;
    let tail = body.get(1..)?;
    let rest = LETTER_MARKER_TAILS
        .iter()
        .find_map(|marker| tail.strip_prefix(marker))?;
    Some(StrippedFormat::stripped(shape_for(escape), rest))
}

const fn shape_for(escape: &str) -> PrefixShape<'_> {
    if escape.is_empty() {
        PrefixShape::Bare
    } else {
        PrefixShape::ColorEscaped { escape }
    }
}

/// Splits a leading `ESC [ <digits;...> m` sequence from the rest of `format`.
fn split_color_escape(format: &str) -> (&str, &str) {
    let Some(params) = format.strip_prefix("\x1b[") else {
        return ("", format);
    };
    let end = params
        .bytes()
        .position(|byte| !(byte.is_ascii_digit() || byte == b';'));
    match end {
        Some(len) if params.as_bytes()[len] == b'm' => format.split_at(2 + len + 1),
        _ => ("", format),
    }
}

fn skip_separator(rest: &str) -> &str {
    rest.strip_prefix(' ').unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::Arg;

    #[test]
    fn placeholder_marker_at_start_is_bare() {
        let stripped = strip_metadata_prefix("%c (%d) %s: hello %d");
        assert_eq!(stripped.shape(), PrefixShape::Bare);
        assert_eq!(stripped.format(), "hello %d");
        assert_eq!(stripped.discard(), PREFIX_ARGUMENTS);
    }

    #[test]
    fn placeholder_marker_after_escape_is_found_by_search() {
        let stripped = strip_metadata_prefix("\x1b[0;33m%c (%d) %s: low heap");
        assert_eq!(
            stripped.shape(),
            PrefixShape::ColorEscaped {
                escape: "\x1b[0;33m"
            }
        );
        assert_eq!(stripped.format(), "low heap");
    }

    #[test]
    fn placeholder_marker_without_trailing_space() {
        let stripped = strip_metadata_prefix("%c (%d) %s:%d");
        assert_eq!(stripped.format(), "%d");
        assert!(stripped.has_prefix());
    }

    #[test]
    fn marker_only_leaves_empty_format() {
        let stripped = strip_metadata_prefix("%c (%d) %s:");
        assert_eq!(stripped.format(), "");
        assert_eq!(stripped.discard(), 2);
    }

    #[test]
    fn literal_letter_marker_colon_at_offset_nine() {
        let format = "W (%u) %s: retrying";
        assert_eq!(format.find(':'), Some(9));
        let stripped = strip_metadata_prefix(format);
        assert_eq!(stripped.shape(), PrefixShape::Bare);
        assert_eq!(stripped.format(), "retrying");
    }

    #[test]
    fn literal_letter_marker_colon_at_offset_sixteen() {
        let format = "\x1b[0;31mE (%d) %s: failed %d";
        assert_eq!(format.find(':'), Some(16));
        let stripped = strip_metadata_prefix(format);
        assert_eq!(
            stripped.shape(),
            PrefixShape::ColorEscaped {
                escape: "\x1b[0;31m"
            }
        );
        assert_eq!(stripped.format(), "failed %d");
        assert_eq!(stripped.discard(), 2);
    }

    #[test]
    fn unknown_letter_is_not_a_marker() {
        let stripped = strip_metadata_prefix("X (%u) %s: nope");
        assert_eq!(stripped.shape(), PrefixShape::NoPrefix);
        assert_eq!(stripped.format(), "X (%u) %s: nope");
    }

    #[test]
    fn literal_letter_marker_must_be_at_start() {
        let format = "note: I (%u) %s: inner";
        let stripped = strip_metadata_prefix(format);
        assert_eq!(stripped.shape(), PrefixShape::NoPrefix);
        assert_eq!(stripped.format(), format);
    }

    #[test]
    fn unterminated_escape_is_not_split() {
        let format = "\x1b[0;31E (%u) %s: x";
        assert_eq!(split_color_escape(format), ("", format));
        assert_eq!(strip_metadata_prefix(format).shape(), PrefixShape::NoPrefix);
    }

    #[test]
    fn absent_marker_leaves_format_untouched() {
        for format in ["", "hello", "%s", " %s:", "value %d (%d)", "\x1b[0m"] {
            let stripped = strip_metadata_prefix(format);
            assert_eq!(stripped.format(), format);
            assert_eq!(stripped.discard(), 0);
            assert!(!stripped.has_prefix());
        }
    }

    #[test]
    fn truncated_markers_are_ignored() {
        for format in ["%", "%c (", "%c (%d) %s", "E", "E (%u) %s", "\x1b[", "\x1b[0;31mE (%u"] {
            let stripped = strip_metadata_prefix(format);
            assert_eq!(stripped.shape(), PrefixShape::NoPrefix, "input {format:?}");
            assert_eq!(stripped.format(), format);
        }
    }

    #[test]
    fn multibyte_text_does_not_confuse_parser() {
        let format = "é (%u) %s: x";
        assert_eq!(strip_metadata_prefix(format).format(), format);
        let format = "\x1b[1méé";
        assert_eq!(strip_metadata_prefix(format).format(), format);
    }

    #[test]
    fn align_skips_prefix_arguments() {
        let slots = [Arg::Str("tag"), Arg::Uint(1000), Arg::Int(42)];
        let stripped = strip_metadata_prefix("%c (%d) %s: hello %d");
        let mut args = stripped.align(ArgCursor::new(&slots));
        assert_eq!(args.next(), Some(Arg::Int(42)));
        assert_eq!(args.next(), None);
    }

    #[test]
    fn align_without_prefix_consumes_nothing() {
        let slots = [Arg::Int(1)];
        let stripped = strip_metadata_prefix("value %d");
        assert_eq!(stripped.align(ArgCursor::new(&slots)).consumed(), 0);
    }
}

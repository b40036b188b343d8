//! Cursor: the scanning primitives every view operation is built from.
//!
//! A [`Cursor`] pairs a span of code units with the whitespace policy and
//! answers one question in several flavours: "where does the thing starting
//! at `pos` end". Nesting depth, string quoting and escape skipping are
//! decided here and nowhere else.
//!
//! Conventions
//! - Positions are indices into the span. Section ends are exclusive, so a
//!   section is always `span[start..end]`.
//! - Every scan terminates at `len` on malformed input (an unterminated
//!   string, an unclosed bracket). Nothing here indexes past the span.
//! - Escapes are skipped, never decoded: a backslash hides the next unit
//!   from the delimiter checks and that is all.

use crate::{options::ViewOptions, unit::CodeUnit};

pub(crate) const OBJECT_OPEN: u8 = b'{';
pub(crate) const OBJECT_CLOSE: u8 = b'}';
pub(crate) const ARRAY_OPEN: u8 = b'[';
pub(crate) const ARRAY_CLOSE: u8 = b']';
pub(crate) const COLON: u8 = b':';
pub(crate) const COMMA: u8 = b',';
pub(crate) const QUOTE: u8 = b'"';
pub(crate) const ESCAPE: u8 = b'\\';

/// What kind of section starts at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Object,
    Array,
    String,
    /// Anything else: numbers, literals, and garbage.
    Scalar,
}

impl Section {
    #[inline]
    pub(crate) fn classify<C: CodeUnit>(unit: C) -> Self {
        match unit.ascii() {
            Some(OBJECT_OPEN) => Section::Object,
            Some(ARRAY_OPEN) => Section::Array,
            Some(QUOTE) => Section::String,
            _ => Section::Scalar,
        }
    }
}

/// How [`Cursor::end_of_structure`] decides where to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanMode {
    /// Starting on `{` or `[`, stop after the matching close.
    Matching,
    /// Starting anywhere, stop before the first `,` at depth zero or the
    /// first closing bracket that was never opened. Trailing whitespace is
    /// not part of the element.
    Element,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a, C> {
    span: &'a [C],
    strict_whitespace: bool,
}

impl<'a, C: CodeUnit> Cursor<'a, C> {
    pub(crate) fn new(span: &'a [C], options: ViewOptions) -> Self {
        Self {
            span,
            strict_whitespace: options.strict_whitespace,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.span.len()
    }

    #[inline]
    pub(crate) fn span(&self) -> &'a [C] {
        self.span
    }

    /// The ASCII byte at `pos`, or `None` past the end or for non-ASCII.
    #[inline]
    pub(crate) fn byte(&self, pos: usize) -> Option<u8> {
        self.span.get(pos).and_then(|u| u.ascii())
    }

    #[inline]
    fn is_whitespace(&self, unit: C) -> bool {
        match unit.ascii() {
            Some(b' ' | b'\t' | b'\n' | b'\r') => true,
            Some(0x0B | 0x0C) => !self.strict_whitespace,
            _ => false,
        }
    }

    /// First position `>= pos` that is not whitespace, or `len`.
    pub(crate) fn skip_whitespace(&self, pos: usize) -> usize {
        let rest = self.span.get(pos..).unwrap_or_default();
        rest.iter()
            .position(|&u| !self.is_whitespace(u))
            .map_or(self.len(), |offset| pos + offset)
    }

    /// Moves `end` back over trailing whitespace, never below `start`.
    pub(crate) fn trim_end(&self, start: usize, end: usize) -> usize {
        let mut end = end.min(self.len());
        while end > start && self.is_whitespace(self.span[end - 1]) {
            end -= 1;
        }
        end
    }

    /// Index of the quote closing the string that opens at `pos`.
    pub(crate) fn closing_quote(&self, pos: usize) -> Option<usize> {
        debug_assert_eq!(self.byte(pos), Some(QUOTE));
        let mut i = pos + 1;
        while i < self.len() {
            match self.byte(i) {
                Some(ESCAPE) => i += 2,
                Some(QUOTE) => return Some(i),
                _ => i += 1,
            }
        }
        trace!("unterminated string at {pos}");
        None
    }

    /// End of the string that opens at `pos`: one past its closing quote, or
    /// `len` when the string never closes.
    pub(crate) fn end_of_string(&self, pos: usize) -> usize {
        self.closing_quote(pos).map_or(self.len(), |i| i + 1)
    }

    /// Index of the bracket closing the structure that opens at `pos`.
    pub(crate) fn matching_close(&self, pos: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut i = pos;
        while i < self.len() {
            match self.byte(i) {
                Some(QUOTE) => {
                    i = self.end_of_string(i);
                    continue;
                }
                Some(OBJECT_OPEN | ARRAY_OPEN) => depth += 1,
                Some(OBJECT_CLOSE | ARRAY_CLOSE) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        trace!("unclosed structure at {pos}");
        None
    }

    pub(crate) fn end_of_structure(&self, pos: usize, mode: ScanMode) -> usize {
        match mode {
            ScanMode::Matching => self.matching_close(pos).map_or(self.len(), |i| i + 1),
            ScanMode::Element => self.end_of_element(pos),
        }
    }

    fn end_of_element(&self, pos: usize) -> usize {
        let mut depth = 0usize;
        let mut i = pos;
        while i < self.len() {
            match self.byte(i) {
                Some(QUOTE) => {
                    i = self.end_of_string(i);
                    continue;
                }
                Some(OBJECT_OPEN | ARRAY_OPEN) => depth += 1,
                Some(OBJECT_CLOSE | ARRAY_CLOSE) => {
                    if depth == 0 {
                        return self.trim_end(pos, i);
                    }
                    depth -= 1;
                }
                Some(COMMA) if depth == 0 => return self.trim_end(pos, i),
                _ => {}
            }
            i += 1;
        }
        self.trim_end(pos, self.len())
    }

    /// End of the bare token at `pos`: the first whitespace, `,`, `}` or `]`.
    ///
    /// A token that starts on one of those terminators is one unit long, so
    /// callers always make progress.
    pub(crate) fn end_of_value(&self, pos: usize) -> usize {
        let rest = self.span.get(pos..).unwrap_or_default();
        let end = rest
            .iter()
            .position(|&u| {
                self.is_whitespace(u) || matches!(u.ascii(), Some(COMMA | OBJECT_CLOSE | ARRAY_CLOSE))
            })
            .map_or(self.len(), |offset| pos + offset);
        if end == pos && pos < self.len() {
            pos + 1
        } else {
            end
        }
    }

    /// End of whatever section starts at `pos`.
    pub(crate) fn end_of_section(&self, pos: usize) -> usize {
        let Some(&unit) = self.span.get(pos) else {
            return self.len();
        };
        match Section::classify(unit) {
            Section::Object | Section::Array => self.end_of_structure(pos, ScanMode::Matching),
            Section::String => self.end_of_string(pos),
            Section::Scalar => self.end_of_value(pos),
        }
    }

    /// Position of the next `target` delimiter at or after `pos`, skipping
    /// whole sections so delimiters inside strings or nested structures are
    /// never matched.
    pub(crate) fn next_occurrence(&self, pos: usize, target: u8) -> Option<usize> {
        let mut i = self.skip_whitespace(pos);
        while i < self.len() {
            i = match self.byte(i) {
                Some(b) if b == target => return Some(i),
                Some(COMMA | COLON | OBJECT_CLOSE | ARRAY_CLOSE) => i + 1,
                _ => self.end_of_section(i),
            };
            i = self.skip_whitespace(i);
        }
        None
    }
}

#[cfg(test)]
mod tests;

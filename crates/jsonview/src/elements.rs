//! Iteration over the elements of an object or array.
use core::iter::FusedIterator;

use crate::{
    cursor::{ARRAY_OPEN, COMMA, Cursor, OBJECT_OPEN, ScanMode},
    unit::CodeUnit,
    view::{Member, View},
};

/// Iterator over the elements of a container [`View`].
///
/// Array elements are values; object elements are whole members
/// (`"key": value`). Each element is bounded on demand, so building the
/// iterator costs nothing and walking it costs one scan of the container.
/// Views that are not objects or arrays yield no elements.
#[derive(Debug, Clone)]
pub struct Elements<'a, C: CodeUnit = u8> {
    /// The container body, cut off before the closing bracket.
    body: Cursor<'a, C>,
    pos: usize,
    parent: View<'a, C>,
}

impl<'a, C: CodeUnit> Elements<'a, C> {
    pub(crate) fn new(parent: View<'a, C>) -> Self {
        let cursor = parent.cursor();
        let span = cursor.span();
        let (body, pos) = match cursor.byte(0) {
            Some(OBJECT_OPEN | ARRAY_OPEN) => {
                let close = cursor.matching_close(0).unwrap_or(span.len());
                let body = Cursor::new(&span[..close], parent.options());
                let start = body.skip_whitespace(1);
                (body, start)
            }
            _ => (Cursor::new(&span[..0], parent.options()), 0),
        };
        Self { body, pos, parent }
    }

    /// The view being iterated.
    pub fn parent(&self) -> View<'a, C> {
        self.parent
    }
}

impl<'a, C: CodeUnit> Iterator for Elements<'a, C> {
    type Item = View<'a, C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.body.len() {
            return None;
        }
        let start = self.pos;
        let end = self.body.end_of_structure(start, ScanMode::Element);

        let after = self.body.skip_whitespace(end);
        self.pos = if self.body.byte(after) == Some(COMMA) {
            self.body.skip_whitespace(after + 1)
        } else {
            self.body.len()
        };

        #[cfg(any(test, feature = "fuzzing"))]
        assert!(
            start <= end && end <= self.body.len() && self.pos > start,
            "Internal error: element scan did not advance"
        );

        Some(View::with_options(
            &self.body.span()[start..end],
            self.parent.options(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.body.len().saturating_sub(self.pos);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<C: CodeUnit> FusedIterator for Elements<'_, C> {}

/// Iterator over the members of an object [`View`], split into key and
/// value.
#[derive(Debug, Clone)]
pub struct Entries<'a, C: CodeUnit = u8> {
    elements: Elements<'a, C>,
}

impl<'a, C: CodeUnit> Entries<'a, C> {
    pub(crate) fn new(elements: Elements<'a, C>) -> Self {
        Self { elements }
    }
}

impl<'a, C: CodeUnit> Iterator for Entries<'a, C> {
    type Item = Member<'a, C>;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next().map(|element| element.member())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<C: CodeUnit> FusedIterator for Entries<'_, C> {}

//! The [`View`] type: a borrowed window onto JSON text.
//!
//! A view is nothing more than a slice of the caller's buffer. Every
//! question asked of it (is this an object, what is the value of `"k"`, how
//! many elements are there) is answered by scanning that slice again; no
//! parse state is ever stored.
use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::{fmt, ops::Range, str::FromStr};

use crate::{
    cursor::{
        ARRAY_CLOSE, ARRAY_OPEN, COLON, Cursor, OBJECT_CLOSE, OBJECT_OPEN, QUOTE, Section,
    },
    elements::{Elements, Entries},
    error::{Kind, ViewError},
    number,
    options::ViewOptions,
    path::PathComponent,
    unit::{self, CodeUnit},
};

/// A read-only window onto a JSON document or any part of one.
///
/// A `View` borrows its text for `'a` and never copies it. Navigation
/// ([`at`](Self::at), [`at_index`](Self::at_index), [`iter`](Self::iter))
/// returns further views into the same buffer. Lookups that find nothing
/// return an empty view, and every operation on an empty view returns
/// another empty view or a zero value, so chains never need to be checked
/// step by step.
///
/// The input is trusted to be well-formed JSON. Malformed input produces
/// meaningless answers, never a panic.
///
/// # Examples
///
/// ```rust
/// use jsonview::View;
///
/// let doc = View::from(r#"{"a": {"b": 1, "c": [1, 2, {"d": 3}]}, "e": 4}"#);
/// assert_eq!(doc.at("a").at("c").at_index(2).at("d").integer(), 3);
/// assert_eq!(doc.at("a").at("c").size(), 3);
/// assert!(doc.at("missing").at("deeper").is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct View<'a, C: CodeUnit = u8> {
    span: &'a [C],
    options: ViewOptions,
}

/// An object member split into its key and value.
///
/// Produced by [`View::member`] and by [`View::entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member<'a, C: CodeUnit = u8> {
    /// The quoted key, or an empty view when the element is not a member.
    pub key: View<'a, C>,
    /// The value after the colon, or the whole element when there is no key.
    pub value: View<'a, C>,
}

impl<'a, C: CodeUnit> View<'a, C> {
    /// Creates a view over `text`, skipping leading whitespace.
    pub fn new(text: &'a [C]) -> Self {
        Self::with_options(text, ViewOptions::default())
    }

    /// Creates a view over `text` with explicit options.
    pub fn with_options(text: &'a [C], options: ViewOptions) -> Self {
        let start = Cursor::new(text, options).skip_whitespace(0);
        Self {
            span: &text[start..],
            options,
        }
    }

    /// A view with no content.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            span: &[],
            options: ViewOptions {
                strict_whitespace: false,
            },
        }
    }

    /// The raw units this view covers, verbatim.
    pub fn as_units(&self) -> &'a [C] {
        self.span
    }

    /// The options this view was built with.
    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// Whether the view covers no text at all.
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub(crate) fn cursor(&self) -> Cursor<'a, C> {
        Cursor::new(self.span, self.options)
    }

    fn slice(&self, range: Range<usize>) -> Self {
        Self::with_options(&self.span[range], self.options)
    }

    fn empty_like(&self) -> Self {
        Self {
            span: &[],
            options: self.options,
        }
    }

    #[inline]
    fn first(&self) -> Option<u8> {
        self.span.first().and_then(|u| u.ascii())
    }

    /// The span without trailing whitespace.
    fn trimmed(&self) -> &'a [C] {
        let end = self.cursor().trim_end(0, self.span.len());
        &self.span[..end]
    }

    fn last(&self) -> Option<u8> {
        self.trimmed().last().and_then(|u| u.ascii())
    }

    fn trimmed_is(&self, literal: &[u8]) -> bool {
        let t = self.trimmed();
        t.len() == literal.len() && t.iter().zip(literal).all(|(u, &b)| u.is(b))
    }

    /// End of the first section and, when a colon follows it, the colon's
    /// position.
    fn split(&self) -> (usize, Option<usize>) {
        let cursor = self.cursor();
        let last = cursor.end_of_section(0);
        (last, cursor.next_occurrence(last, COLON))
    }

    /// The key of an object member, quotes included.
    ///
    /// Empty unless a colon follows the first section of this view.
    ///
    /// ```rust
    /// use jsonview::View;
    ///
    /// let member = View::from(r#""name" : "jsonview""#);
    /// assert_eq!(member.key().to_string(), r#""name""#);
    /// assert!(View::from("42").key().is_empty());
    /// ```
    pub fn key(&self) -> Self {
        if self.is_empty() {
            return *self;
        }
        match self.split() {
            (last, Some(_)) => self.slice(0..last),
            (_, None) => self.empty_like(),
        }
    }

    /// The value of an object member, or the first section of a bare value.
    pub fn value(&self) -> Self {
        if self.is_empty() {
            return *self;
        }
        match self.split() {
            (_, Some(colon)) => {
                let cursor = self.cursor();
                let start = cursor.skip_whitespace(colon + 1);
                self.slice(start..cursor.end_of_section(start))
            }
            (last, None) => self.slice(0..last),
        }
    }

    /// Splits a member view into key and value.
    pub fn member(&self) -> Member<'a, C> {
        Member {
            key: self.key(),
            value: self.value(),
        }
    }

    /// The value of the first member whose key is exactly `key`.
    ///
    /// Keys are compared unit for unit against the raw text between the
    /// quotes, so escaped keys only match their escaped spelling. Returns an
    /// empty view when no member matches.
    pub fn at(&self, key: &str) -> Self {
        for element in self.iter() {
            let found = element.key();
            if !found.is_empty() && C::eq_str(found.string_view(), key) {
                return element.value();
            }
        }
        if !self.is_empty() {
            trace!("no member {key:?} among {} units", self.span.len());
        }
        self.empty_like()
    }

    /// Alias for [`at`](Self::at).
    pub fn get(&self, key: &str) -> Self {
        self.at(key)
    }

    /// The element at `index`, or an empty view when out of range.
    pub fn at_index(&self, index: usize) -> Self {
        self.iter().nth(index).unwrap_or_else(|| self.empty_like())
    }

    /// Alias for [`at_index`](Self::at_index).
    pub fn nth(&self, index: usize) -> Self {
        self.at_index(index)
    }

    /// Follows a sequence of keys and indices, stopping with an empty view
    /// at the first miss.
    ///
    /// ```rust
    /// use jsonview::{path, View};
    ///
    /// let doc = View::from(r#"{"users": [{"id": 7}, {"id": 9}]}"#);
    /// assert_eq!(doc.pointer(&path!["users", 1, "id"]).integer(), 9);
    /// assert!(doc.pointer(&path!["users", 5, "id"]).is_empty());
    /// ```
    pub fn pointer(&self, path: &[PathComponent<'_>]) -> Self {
        path.iter().fold(*self, |view, step| match *step {
            PathComponent::Key(key) => view.at(key),
            PathComponent::Index(index) => view.at_index(index),
        })
    }

    /// Iterates the elements of an object or array.
    ///
    /// Object elements are whole members (`"k": v`); use
    /// [`entries`](Self::entries) to get them split.
    pub fn iter(&self) -> Elements<'a, C> {
        Elements::new(*self)
    }

    /// Iterates the members of an object as key/value pairs.
    pub fn entries(&self) -> Entries<'a, C> {
        Entries::new(self.iter())
    }

    /// Number of elements in an object or array; zero for anything else.
    ///
    /// This walks the container every time it is called.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// All elements, collected.
    pub fn to_vec(&self) -> Vec<Self> {
        self.iter().collect()
    }

    /// Members keyed by their raw key text.
    ///
    /// The first occurrence of a duplicated key wins, as with
    /// [`at`](Self::at). If any element is not a `key: value` member the
    /// whole result is empty.
    pub fn object(&self) -> BTreeMap<&'a [C], Self> {
        let mut map = BTreeMap::new();
        for member in self.entries() {
            if member.key.is_empty() {
                return BTreeMap::new();
            }
            map.entry(member.key.string_view()).or_insert(member.value);
        }
        map
    }

    /// `{` first and `}` last.
    pub fn is_object(&self) -> bool {
        self.first() == Some(OBJECT_OPEN) && self.last() == Some(OBJECT_CLOSE)
    }

    /// `[` first and `]` last.
    pub fn is_array(&self) -> bool {
        self.first() == Some(ARRAY_OPEN) && self.last() == Some(ARRAY_CLOSE)
    }

    /// A quoted string that is not the key of a member.
    pub fn is_string(&self) -> bool {
        self.first() == Some(QUOTE) && self.key().is_empty()
    }

    /// Exactly `true` or `false`.
    pub fn is_boolean(&self) -> bool {
        self.trimmed_is(b"true") || self.trimmed_is(b"false")
    }

    /// Exactly `null`.
    pub fn is_null(&self) -> bool {
        self.trimmed_is(b"null")
    }

    /// Every character is one a number may contain (`0-9 + - . e E`).
    ///
    /// This is an alphabet check, not a grammar check; see
    /// [`is_integer`](Self::is_integer) and [`is_float`](Self::is_float)
    /// for exact ones.
    pub fn is_number(&self) -> bool {
        number::is_number_token(self.trimmed())
    }

    /// Matches `-?[0-9]+`.
    pub fn is_integer(&self) -> bool {
        number::is_integer_token(self.trimmed())
    }

    /// Matches `-?(0|[1-9][0-9]*)\.[0-9]+([eE][+-]?[0-9]+)?`.
    pub fn is_float(&self) -> bool {
        number::is_float_token(self.trimmed())
    }

    /// Classifies the view.
    pub fn kind(&self) -> Kind {
        match self.first() {
            None => Kind::Unknown,
            Some(OBJECT_OPEN) if self.is_object() => Kind::Object,
            Some(ARRAY_OPEN) if self.is_array() => Kind::Array,
            Some(QUOTE) if self.key().is_empty() => Kind::String,
            Some(QUOTE) => Kind::Member,
            _ if self.is_boolean() => Kind::Boolean,
            _ if self.is_null() => Kind::Null,
            _ if self.is_number() => Kind::Number,
            _ => Kind::Unknown,
        }
    }

    /// The raw text of the first section, with the quotes removed when it is
    /// a string.
    ///
    /// Escape sequences are returned exactly as written: `"a\"b"` yields the
    /// four units `a\"b`.
    pub fn string_view(&self) -> &'a [C] {
        let Some(&first) = self.span.first() else {
            return self.span;
        };
        let cursor = self.cursor();
        match Section::classify(first) {
            Section::String => {
                let close = cursor.closing_quote(0).unwrap_or(self.span.len());
                &self.span[1..close]
            }
            _ => &self.span[..cursor.end_of_section(0)],
        }
    }

    /// Owned copy of [`string_view`](Self::string_view), decoded lossily.
    pub fn string(&self) -> String {
        unit::to_string_lossy(self.string_view())
    }

    /// `true` only for the literal `true`.
    pub fn boolean(&self) -> bool {
        self.trimmed_is(b"true")
    }

    /// # Errors
    ///
    /// [`ViewError::Empty`] on an empty view, [`ViewError::Mismatch`] for
    /// anything but `true` or `false`.
    pub fn try_boolean(&self) -> Result<bool, ViewError> {
        if self.trimmed_is(b"true") {
            Ok(true)
        } else if self.trimmed_is(b"false") {
            Ok(false)
        } else {
            Err(self.mismatch(Kind::Boolean))
        }
    }

    /// The value as an `i64`, or `0` when it is not exactly an integer.
    pub fn integer(&self) -> i64 {
        self.try_integer().unwrap_or_default()
    }

    /// # Errors
    ///
    /// See [`try_number`](Self::try_number).
    pub fn try_integer(&self) -> Result<i64, ViewError> {
        self.try_number()
    }

    /// The value as an `f64`, or `0.0` when it does not parse.
    pub fn float(&self) -> f64 {
        self.try_float().unwrap_or_default()
    }

    /// # Errors
    ///
    /// See [`try_number`](Self::try_number).
    pub fn try_float(&self) -> Result<f64, ViewError> {
        self.try_number()
    }

    /// The value parsed as `T`, or `T::default()` when the parse fails.
    ///
    /// ```rust
    /// use jsonview::View;
    ///
    /// assert_eq!(View::from("250").number::<u8>(), 250);
    /// assert_eq!(View::from("256").number::<u8>(), 0);
    /// assert_eq!(View::from("2.75").number::<f32>(), 2.75);
    /// ```
    pub fn number<T: FromStr + Default>(&self) -> T {
        self.try_number().unwrap_or_default()
    }

    /// Parses the scalar token with `T::from_str`, which is
    /// locale-independent.
    ///
    /// # Errors
    ///
    /// [`ViewError::Empty`] on an empty view, [`ViewError::Mismatch`] for
    /// strings and structures, [`ViewError::InvalidNumber`] when the token
    /// holds anything but number characters (`NaN`, `inf`) or the parse
    /// does not consume the whole token (`12abc`, `12 34`).
    pub fn try_number<T: FromStr>(&self) -> Result<T, ViewError> {
        let first = self.span.first().ok_or(ViewError::Empty)?;
        if Section::classify(*first) != Section::Scalar {
            return Err(self.mismatch(Kind::Number));
        }
        let token = self.trimmed();
        if self.cursor().end_of_value(0) != token.len() || !number::is_number_token(token) {
            return Err(ViewError::InvalidNumber);
        }
        number::parse(token)
    }

    fn mismatch(&self, expected: Kind) -> ViewError {
        match self.kind() {
            _ if self.is_empty() => ViewError::Empty,
            found => ViewError::Mismatch { expected, found },
        }
    }
}

impl<'a> View<'a, u8> {
    /// The string contents as `&str`, escapes left as written.
    ///
    /// `None` unless the view is a string holding valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        self.try_str().ok()
    }

    /// # Errors
    ///
    /// [`ViewError::Empty`], [`ViewError::Mismatch`] for non-strings, or
    /// [`ViewError::Utf8`].
    pub fn try_str(&self) -> Result<&'a str, ViewError> {
        if !self.is_string() {
            return Err(self.mismatch(Kind::String));
        }
        core::str::from_utf8(self.string_view()).map_err(|_| ViewError::Utf8)
    }
}

impl<C: CodeUnit> Default for View<'_, C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, C: CodeUnit> From<&'a [C]> for View<'a, C> {
    fn from(text: &'a [C]) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a str> for View<'a, u8> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<'a, C: CodeUnit> IntoIterator for View<'a, C> {
    type Item = View<'a, C>;
    type IntoIter = Elements<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, C: CodeUnit> IntoIterator for &View<'a, C> {
    type Item = View<'a, C>;
    type IntoIter = Elements<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the underlying text verbatim.
impl<C: CodeUnit> fmt::Display for View<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&C::to_str_lossy(self.span))
    }
}

impl<C: CodeUnit> fmt::Debug for View<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("View(")?;
        unit::debug_units(self.span, f)?;
        f.write_str(")")
    }
}

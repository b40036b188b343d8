/// Configuration options for a [`View`](crate::View).
///
/// Options are fixed when the root view is built and are inherited by every
/// view derived from it.
///
/// # Examples
///
/// ```rust
/// use jsonview::{View, ViewOptions};
///
/// let text = "\x0b[1, 2]";
/// let lenient = View::new(text.as_bytes());
/// assert!(lenient.is_array());
///
/// let strict = View::with_options(
///     text.as_bytes(),
///     ViewOptions {
///         strict_whitespace: true,
///     },
/// );
/// assert!(!strict.is_array());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewOptions {
    /// Whether to recognise only the whitespace defined by RFC 8259.
    ///
    /// By default the reader skips space (U+0020), horizontal tab (U+0009),
    /// line feed (U+000A), carriage return (U+000D), vertical tab (U+000B)
    /// and form feed (U+000C). When `true`, the last two are treated as
    /// ordinary characters.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_whitespace: bool,
}

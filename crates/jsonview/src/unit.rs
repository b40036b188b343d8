//! Code units a [`View`](crate::View) can be built over.
//!
//! JSON structure is pure ASCII, so the scanner only ever needs to ask a unit
//! "which ASCII byte are you, if any". Everything else (key comparison,
//! rendering, numeric transcoding) is specific to the encoding and lives on
//! [`CodeUnit`].
use alloc::{
    borrow::Cow,
    string::{String, ToString},
};
use core::fmt;

use bstr::ByteSlice;

use crate::error::ViewError;

/// Longest numeric token that is transcoded for parsing when the code unit is
/// wider than a byte.
pub(crate) const NUMBER_BUFFER_LEN: usize = 64;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for char {}
}

/// A single unit of JSON text: a UTF-8 byte, a UTF-16 or UTF-32 code unit,
/// or a `char`.
///
/// This trait is sealed; the reader supports exactly the four encodings
/// above.
pub trait CodeUnit: sealed::Sealed + Copy + Ord + core::hash::Hash + fmt::Debug {
    /// The ASCII byte this unit encodes, or `None` for anything else.
    fn ascii(self) -> Option<u8>;

    /// Whether a run of units spells exactly `text`.
    fn eq_str(units: &[Self], text: &str) -> bool;

    /// Decodes units for display, substituting U+FFFD for anything that
    /// does not decode.
    fn to_str_lossy(units: &[Self]) -> Cow<'_, str>;

    /// Borrows or copies a numeric token as `&str` for `FromStr`.
    ///
    /// # Errors
    ///
    /// [`ViewError::TooLong`] when the token does not fit the transcoding
    /// buffer, [`ViewError::InvalidNumber`] when a unit is not ASCII.
    #[doc(hidden)]
    fn number_text<'b>(
        units: &'b [Self],
        buf: &'b mut [u8; NUMBER_BUFFER_LEN],
    ) -> Result<&'b str, ViewError>;

    /// Whether this unit is the ASCII byte `byte`.
    #[inline]
    fn is(self, byte: u8) -> bool {
        self.ascii() == Some(byte)
    }
}

/// Copies ASCII-only units into `buf`.
fn transcode_ascii<'b, C: CodeUnit>(
    units: &[C],
    buf: &'b mut [u8; NUMBER_BUFFER_LEN],
) -> Result<&'b str, ViewError> {
    if units.len() > buf.len() {
        return Err(ViewError::TooLong { len: units.len() });
    }
    for (slot, unit) in buf.iter_mut().zip(units) {
        *slot = unit.ascii().ok_or(ViewError::InvalidNumber)?;
    }
    core::str::from_utf8(&buf[..units.len()]).map_err(|_| ViewError::InvalidNumber)
}

impl CodeUnit for u8 {
    #[inline]
    fn ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }

    fn eq_str(units: &[Self], text: &str) -> bool {
        units == text.as_bytes()
    }

    fn to_str_lossy(units: &[Self]) -> Cow<'_, str> {
        units.to_str_lossy()
    }

    fn number_text<'b>(
        units: &'b [Self],
        _buf: &'b mut [u8; NUMBER_BUFFER_LEN],
    ) -> Result<&'b str, ViewError> {
        units.to_str().map_err(|_| ViewError::InvalidNumber)
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }

    fn eq_str(units: &[Self], text: &str) -> bool {
        units.iter().copied().eq(text.encode_utf16())
    }

    fn to_str_lossy(units: &[Self]) -> Cow<'_, str> {
        Cow::Owned(
            char::decode_utf16(units.iter().copied())
                .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect::<String>(),
        )
    }

    fn number_text<'b>(
        units: &'b [Self],
        buf: &'b mut [u8; NUMBER_BUFFER_LEN],
    ) -> Result<&'b str, ViewError> {
        transcode_ascii(units, buf)
    }
}

impl CodeUnit for u32 {
    #[inline]
    fn ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }

    fn eq_str(units: &[Self], text: &str) -> bool {
        units.iter().copied().eq(text.chars().map(u32::from))
    }

    fn to_str_lossy(units: &[Self]) -> Cow<'_, str> {
        Cow::Owned(
            units
                .iter()
                .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect::<String>(),
        )
    }

    fn number_text<'b>(
        units: &'b [Self],
        buf: &'b mut [u8; NUMBER_BUFFER_LEN],
    ) -> Result<&'b str, ViewError> {
        transcode_ascii(units, buf)
    }
}

impl CodeUnit for char {
    #[inline]
    fn ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }

    fn eq_str(units: &[Self], text: &str) -> bool {
        units.iter().copied().eq(text.chars())
    }

    fn to_str_lossy(units: &[Self]) -> Cow<'_, str> {
        Cow::Owned(units.iter().collect::<String>())
    }

    fn number_text<'b>(
        units: &'b [Self],
        buf: &'b mut [u8; NUMBER_BUFFER_LEN],
    ) -> Result<&'b str, ViewError> {
        transcode_ascii(units, buf)
    }
}

/// Renders `units` as a quoted, escaped string for `Debug` output.
pub(crate) fn debug_units<C: CodeUnit>(units: &[C], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&*C::to_str_lossy(units), f)
}

/// Owned, lossily decoded copy of `units`.
pub(crate) fn to_string_lossy<C: CodeUnit>(units: &[C]) -> String {
    C::to_str_lossy(units).to_string()
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn ascii_only_for_ascii_units() {
        assert_eq!(b'{'.ascii(), Some(b'{'));
        assert_eq!(0xC3u8.ascii(), None);
        assert_eq!(0x7Bu16.ascii(), Some(b'{'));
        assert_eq!(0x017Bu16.ascii(), None);
        assert_eq!(0x1_007Bu32.ascii(), None);
        assert_eq!('é'.ascii(), None);
    }

    #[test]
    fn eq_str_across_encodings() {
        assert!(u8::eq_str(b"key", "key"));
        assert!(u16::eq_str(&utf16("ключ"), "ключ"));
        assert!(!u16::eq_str(&utf16("ключ"), "клю"));
        let wide: Vec<u32> = "日本".chars().map(u32::from).collect();
        assert!(u32::eq_str(&wide, "日本"));
        let chars: Vec<char> = "a😀".chars().collect();
        assert!(char::eq_str(&chars, "a😀"));
    }

    #[test]
    fn lossy_decoding_replaces_garbage() {
        assert_eq!(u8::to_str_lossy(b"a\xFFb"), "a\u{FFFD}b");
        assert_eq!(u16::to_str_lossy(&[0x61, 0xD800, 0x62]), "a\u{FFFD}b");
        assert_eq!(u32::to_str_lossy(&[0x61, 0x11_0000]), "a\u{FFFD}");
    }

    #[test]
    fn number_text_rejects_wide_or_long_tokens() {
        let mut buf = [0u8; NUMBER_BUFFER_LEN];
        assert_eq!(u16::number_text(&utf16("-12.5"), &mut buf), Ok("-12.5"));
        let mut buf = [0u8; NUMBER_BUFFER_LEN];
        assert_eq!(
            u16::number_text(&utf16("1٣"), &mut buf),
            Err(ViewError::InvalidNumber)
        );
        let long = [u32::from(b'1'); NUMBER_BUFFER_LEN + 1];
        let mut buf = [0u8; NUMBER_BUFFER_LEN];
        assert_eq!(
            u32::number_text(&long, &mut buf),
            Err(ViewError::TooLong {
                len: NUMBER_BUFFER_LEN + 1
            })
        );
    }
}

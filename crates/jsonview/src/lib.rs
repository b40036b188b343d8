//! A zero-copy, lazily evaluated JSON reader.
//!
//! [`View`] wraps a borrowed slice of JSON text and answers questions about
//! it (member lookup, indexing, iteration, scalar extraction) by scanning
//! that slice on demand. Nothing is parsed ahead of time and nothing is
//! allocated unless a caller asks for an owned value. Every navigation step
//! returns another `View` into the same buffer, and the borrow checker keeps
//! the buffer alive for as long as any view of it exists.
//!
//! ```rust
//! use jsonview::View;
//!
//! let text = r#"{"name": "jsonview", "tags": ["json", "no_std"], "stars": 42}"#;
//! let doc = View::from(text);
//!
//! assert_eq!(doc.at("name").as_str(), Some("jsonview"));
//! assert_eq!(doc.at("tags").size(), 2);
//! assert_eq!(doc.at("tags").at_index(1).as_str(), Some("no_std"));
//! assert_eq!(doc.at("stars").integer(), 42);
//! assert!(doc.at("forks").is_empty());
//! ```
//!
//! The reader is permissive: it assumes well-formed input, never decodes
//! string escapes, and degrades to empty views and zero values instead of
//! reporting errors. The `try_*` getters say why a conversion failed when
//! that matters.
//!
//! Text can be UTF-8 bytes, UTF-16 or UTF-32 code units, or `char`s; see
//! [`CodeUnit`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

/// Forwards to `log::trace!` when the `log` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        {
            log::trace!($($arg)*);
        }
    }};
}

mod cursor;
mod elements;
mod error;
mod number;
mod options;
mod path;
#[cfg(feature = "serde")]
mod serialize;
mod unit;
mod view;


pub use elements::{Elements, Entries};
pub use error::{Kind, ViewError};
pub use options::ViewOptions;
pub use path::{PathComponent, PathComponentFrom};
pub use unit::CodeUnit;
pub use view::{Member, View};

/// A view over UTF-16 text.
pub type Utf16View<'a> = View<'a, u16>;

/// A view over UTF-32 text.
pub type Utf32View<'a> = View<'a, u32>;

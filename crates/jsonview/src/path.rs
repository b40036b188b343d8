/// One step of a lookup path: a member key or an element index.
///
/// Used with [`View::pointer`](crate::View::pointer), usually built with the
/// [`path!`](crate::path) macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathComponent<'k> {
    /// Look up an object member by its raw key.
    Key(&'k str),
    /// Take the n-th element of an object or array.
    Index(usize),
}

// Convenient conversions so users can write `path![0, "foo"]` etc.
macro_rules! impl_from_int_for_pathcomponent {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PathComponent<'_> {
                fn from(i: $t) -> Self {
                    PathComponent::Index(usize::from(i))
                }
            }
        )*
    };
}

impl_from_int_for_pathcomponent!(u8, u16, usize);

impl<'k> From<&'k str> for PathComponent<'k> {
    fn from(s: &'k str) -> Self {
        Self::Key(s)
    }
}

#[doc(hidden)]
pub trait PathComponentFrom<T> {
    fn from_path_component(value: T) -> Self;
}

// Negative or oversized indices map to `usize::MAX`, which never matches an
// element, so the lookup degrades to an empty view like any other miss.
macro_rules! impl_integer_as_path_component {
    ($($t:ty),+) => {
        $(
            impl PathComponentFrom<$t> for PathComponent<'_> {
                fn from_path_component(value: $t) -> Self {
                    PathComponent::Index(usize::try_from(value).unwrap_or(usize::MAX))
                }
            }
        )+
    };
}
impl_integer_as_path_component!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'k> PathComponentFrom<&'k str> for PathComponent<'k> {
    fn from_path_component(value: &'k str) -> Self {
        PathComponent::Key(value)
    }
}

/// Builds an array of [`PathComponent`]s from a heterogeneous list of keys
/// and indices.
///
/// ```rust
/// use jsonview::{path, PathComponent};
///
/// let p = path![0, "foo", 2];
/// assert_eq!(
///     p,
///     [
///         PathComponent::Index(0),
///         PathComponent::Key("foo"),
///         PathComponent::Index(2)
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {
        [$(<$crate::PathComponent<'_> as $crate::PathComponentFrom<_>>::from_path_component($elem)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::View;

    #[test]
    fn mixed_path_formation() {
        let p = path!["a", 1u8, -1];
        assert_eq!(
            p,
            [
                PathComponent::Key("a"),
                PathComponent::Index(1),
                PathComponent::Index(usize::MAX)
            ]
        );
    }

    #[test]
    #[deny(unused_imports)]
    fn empty_path_is_identity() {
        let doc = View::from("[1, 2]");
        let p: [PathComponent<'_>; 0] = path![];
        assert_eq!(doc.pointer(&p), doc);
    }

    #[test]
    fn negative_index_misses() {
        let doc = View::from("[1, 2]");
        assert!(doc.pointer(&path![-1]).is_empty());
    }

    #[test]
    fn from_conversions() {
        assert_eq!(PathComponent::from("k"), PathComponent::Key("k"));
        assert_eq!(PathComponent::from(3usize), PathComponent::Index(3));
    }
}

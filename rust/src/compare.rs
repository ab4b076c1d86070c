//! Ordering relations for AvlTreeMap.
//!
//! The map never uses `Ord` directly. It asks a [`Compare`] implementation
//! whether one key precedes another; two keys are equivalent when neither
//! precedes the other.

/// A strict weak order over `K`.
///
/// Implementations must be irreflexive and transitive, and equivalence
/// (`!less(a, b) && !less(b, a)`) must be transitive as well. The map treats
/// equivalent keys as the same key.
///
/// Closures of type `Fn(&K, &K) -> bool` implement this trait:
///
/// ```
/// use avltreemap::AvlTreeMap;
///
/// let mut map = AvlTreeMap::with_comparator(|a: &i32, b: &i32| a.abs() < b.abs());
/// map.insert(-3, "a");
/// map.insert(2, "b");
/// let (_, inserted) = map.insert(3, "c");
///
/// assert!(!inserted); // 3 is equivalent to -3
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [2, -3]);
/// ```
pub trait Compare<K: ?Sized> {
    /// Returns true if `a` strictly precedes `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    /// Returns true if neither key precedes the other.
    #[inline]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Ascending order by `Ord`. The default comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

/// Descending order by `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> Compare<K> for NaturalOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

impl<K: Ord + ?Sized> Compare<K> for ReverseOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

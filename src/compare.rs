//! Ordering capability shared by every algorithm of this crate.
//!
//! All algorithms take the same shape of ordering, `FnMut(&T, &T) -> Result<Ordering, E>`. Its
//! error propagates unchanged to the caller as [`SortError::Compare`](crate::SortError::Compare).
//! Infallible orderings are [`lift`]ed into that shape with `E = Infallible`.
//!
//! Orderings over a field of a record are built from statically known accessors with [`by_key`]
//! and [`try_by_key`], chosen by the caller when it configures the sort.

use core::{cmp::Ordering, convert::Infallible};

/// Direction of an ordering built by [`by_key`] or [`try_by_key`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Smallest key first.
	#[default]
	Ascending,
	/// Largest key first.
	Descending,
}

impl Direction {
	/// Orients `order`, which was computed for ascending keys.
	#[inline]
	#[must_use]
	pub fn apply(self, order: Ordering) -> Ordering {
		match self {
			Self::Ascending => order,
			Self::Descending => order.reverse(),
		}
	}
}

/// Lifts an infallible ordering into the fallible shape expected by the algorithms.
#[inline]
pub fn lift<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Result<Ordering, Infallible>
where
	T: ?Sized,
	F: FnMut(&T, &T) -> Ordering,
{
	move |a: &T, b: &T| Ok(compare(a, b))
}

/// Orders elements by the key `key` extracts, in the given `direction`.
///
/// # Examples
///
/// ```
/// use cmpsort::{Sort1Ext, compare::{Direction, by_key}, ndarray::arr1};
///
/// let mut v = arr1(&[(1, 'a'), (3, 'b'), (2, 'c')]);
/// v.merge_sort_by(by_key(|&(n, _): &(i32, char)| n, Direction::Descending));
/// assert_eq!(v, arr1(&[(3, 'b'), (2, 'c'), (1, 'a')]));
/// ```
pub fn by_key<T, K, F>(mut key: F, direction: Direction) -> impl FnMut(&T, &T) -> Ordering
where
	T: ?Sized,
	K: Ord,
	F: FnMut(&T) -> K,
{
	move |a: &T, b: &T| direction.apply(key(a).cmp(&key(b)))
}

/// Orders elements by a key that may fail to be extracted.
///
/// The first extraction error aborts the sort and is handed to its caller.
///
/// # Examples
///
/// ```
/// use cmpsort::{Sort1Ext, SortError, compare::{Direction, try_by_key}, ndarray::arr1};
///
/// let mut v = arr1(&["10", "9", "x"]);
/// let result = v.try_merge_sort_by(0..3, try_by_key(|s: &&str| s.parse::<u32>(), Direction::Ascending));
/// assert!(matches!(result, Err(SortError::Compare(_))));
/// ```
pub fn try_by_key<T, K, E, F>(
	mut key: F,
	direction: Direction,
) -> impl FnMut(&T, &T) -> Result<Ordering, E>
where
	T: ?Sized,
	K: Ord,
	F: FnMut(&T) -> Result<K, E>,
{
	move |a: &T, b: &T| Ok(direction.apply(key(a)?.cmp(&key(b)?)))
}

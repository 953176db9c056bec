//! Comparator-driven sorting for (sub)views into 1-dimensional arrays and for singly linked chains.
//!
//! Every algorithm takes the ordering as a value rather than requiring [`Ord`]: a closure
//! `FnMut(&T, &T) -> Result<Ordering, E>` whose error aborts the sort and is handed back as
//! [`SortError::Compare`]. Infallible orderings are accepted by the `*_by` methods directly.
//!
//! # Example
//!
//! ```
//! use cmpsort::{Sort1Ext, ndarray::arr2};
//!
//! // Sort the last column of a row-major matrix, which is not contiguous in memory.
//! let mut v = arr2(&[[-5, 4,  2],
//!                    [ 8, 3,  8],
//!                    [38, 9, -1]]);
//! v.column_mut(2).quick_sort();
//!
//! assert!(v == arr2(&[[-5, 4, -1],
//!                     [ 8, 3,  2],
//!                     [38, 9,  8]]));
//! ```
//!
//! # Algorithms
//!
//! | Algorithm            | Stable | Time (average)   | Time (worst)     | Extra space           |
//! |----------------------|--------|------------------|------------------|-----------------------|
//! | Insertion sort       | yes    | *O*(*n*^2)       | *O*(*n*^2)       | *O*(1)                |
//! | Quicksort            | no     | *O*(*n* log *n*) | *O*(*n*^2)       | *O*(log *n*) stack    |
//! | Merge sort (array)   | yes    | *O*(*n* log *n*) | *O*(*n* log *n*) | *n* indices           |
//! | Merge sort (chain)   | yes    | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(log *n*) stack    |
//!
//! Quicksort picks the median of the first, middle, and last element as pivot and hands views
//! shorter than five elements to insertion sort. Merge sort skips merging halves that are already
//! in order, so sorted input costs *n* - 1 comparisons. The chain merge sort relinks nodes and
//! never moves their data.
//!
//! # Features
//!
//!   * `alloc` for merge sort and chains. Enabled by `std`.
//!   * `std` for [`std::error::Error`] implementations. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod algorithm;
mod chain_sort;
mod error;
mod insertion_sort;
mod merge_sort;
mod quick_sort;

pub mod chain;
pub mod compare;

pub use crate::{algorithm::Algorithm, error::SortError};
#[cfg(feature = "alloc")]
pub use crate::{
	chain::{Chain, Link, Node},
	error::ChainError,
};

use crate::{compare::lift, error::check_range};
use core::{cmp::Ordering, ops::Range};
use ndarray::{ArrayBase, ArrayViewMut1, Data, DataMut, Ix1, s};

pub use ndarray;

/// Sorts the first `len` elements of `v` in place.
///
/// Fails with [`SortError::InvalidRange`] before touching `v` if `len` exceeds its length, and
/// with [`SortError::Compare`] if `compare` fails.
///
/// # Examples
///
/// ```
/// use cmpsort::{Algorithm, ndarray::ArrayViewMut1, sort_array};
///
/// let mut v = [5, 3, 8, 3, 1, 0];
/// sort_array(ArrayViewMut1::from(&mut v), 5, Algorithm::Quick, |a: &i32, b: &i32| {
/// 	Ok::<_, ()>(a.cmp(b))
/// })?;
/// assert_eq!(v, [1, 3, 3, 5, 8, 0]);
/// # Ok::<(), cmpsort::SortError<()>>(())
/// ```
pub fn sort_array<T, F, E>(
	v: ArrayViewMut1<'_, T>,
	len: usize,
	algorithm: Algorithm,
	compare: F,
) -> Result<(), SortError<E>>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	sort_array_range(v, 0..len, algorithm, compare)
}

/// Sorts the elements of `v` within `range` in place.
///
/// An inclusive range `[first, last]` corresponds to `first..last + 1`, so `first == last + 1`
/// addresses no element. Fails with [`SortError::InvalidRange`] before touching `v` if
/// `range.start > range.end` or `range.end > v.len()`.
///
/// # Examples
///
/// ```
/// use cmpsort::{Algorithm, SortError, ndarray::arr1, sort_array_range};
///
/// let mut v = arr1(&[5, 3, 8, 3, 1]);
/// let result = sort_array_range(v.view_mut(), 3..2, Algorithm::Merge, |a: &i32, b: &i32| {
/// 	Ok::<_, ()>(a.cmp(b))
/// });
/// assert_eq!(result, Err(SortError::InvalidRange { start: 3, end: 2, len: 5 }));
/// assert_eq!(v, arr1(&[5, 3, 8, 3, 1]));
/// ```
pub fn sort_array_range<T, F, E>(
	mut v: ArrayViewMut1<'_, T>,
	range: Range<usize>,
	algorithm: Algorithm,
	mut compare: F,
) -> Result<(), SortError<E>>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	check_range(v.len(), &range)?;
	algorithm
		.run(v.slice_mut(s![range]), &mut compare)
		.map_err(SortError::Compare)
}

/// Sorts the first `len` nodes of the chain starting at `head` and returns the new head.
///
/// The merge sort is stable and relinks nodes without moving their data or allocating. Nodes
/// behind the first `len` stay unsorted behind the sorted ones. The passed head is consumed, so
/// the returned one is the only way back to the chain.
///
/// On failure the chain comes back inside the [`ChainError`], untouched for
/// [`SortError::InvalidRange`] (`len` exceeds the number of nodes) and with every node in
/// unspecified order for [`SortError::Compare`].
///
/// # Examples
///
/// ```
/// use cmpsort::{Chain, sort_chain};
///
/// let chain = [6, 5, 4, 3, 2, 1].into_iter().collect::<Chain<i32>>();
/// let head = sort_chain(chain.into_head(), 6, |a: &i32, b: &i32| Ok::<_, ()>(a.cmp(b)))?;
/// assert_eq!(head.as_ref().map(|node| node.data), Some(1));
/// assert!(Chain::from_head(head).iter().eq(&[1, 2, 3, 4, 5, 6]));
/// # Ok::<(), cmpsort::ChainError<i32, ()>>(())
/// ```
#[cfg(feature = "alloc")]
pub fn sort_chain<T, F, E>(
	mut head: Link<T>,
	len: usize,
	mut compare: F,
) -> Result<Link<T>, ChainError<T, E>>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	let nodes = chain::count(&head);
	if len > nodes {
		return Err(ChainError {
			head,
			error: SortError::InvalidRange {
				start: 0,
				end: len,
				len: nodes,
			},
		});
	}

	let rest = chain::split_off(&mut head, len);
	match chain_sort::merge_sort(head, len, &mut compare) {
		Ok(mut head) => {
			chain::append(&mut head, rest);
			Ok(head)
		}
		Err(interrupted) => {
			let mut head = interrupted.head;
			chain::append(&mut head, rest);
			Err(ChainError {
				head,
				error: SortError::Compare(interrupted.error),
			})
		}
	}
}

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing comparator-driven sorting.
///
/// The `try_*` methods sort a sub-range with a fallible ordering, the others sort everything with
/// an infallible one.
pub trait Sort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array using insertion sort.
	///
	/// This sort is stable, in-place, and *O*(*n*^2) worst-case but *O*(*n*) on sorted input.
	fn insertion_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using insertion sort.
	fn insertion_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function using insertion sort.
	fn insertion_sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts `range` of the array with a fallible comparator function using insertion sort.
	fn try_insertion_sort_by<F, E>(
		&mut self,
		range: Range<usize>,
		compare: F,
	) -> Result<(), SortError<E>>
	where
		F: FnMut(&A, &A) -> Result<Ordering, E>,
		S: DataMut;

	/// Sorts the array using quicksort.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place, and
	/// *O*(*n* \* log(*n*)) on average.
	///
	/// # Current Implementation
	///
	/// The pivot is the median of the first, middle, and last element. Partitions shorter than five
	/// elements are sorted using insertion sort. Inputs crafted against the median-of-three take
	/// *O*(*n*^2) time.
	///
	/// # Examples
	///
	/// ```
	/// use cmpsort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.quick_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn quick_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using quicksort.
	///
	/// # Examples
	///
	/// ```
	/// use cmpsort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.quick_sort_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.quick_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn quick_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function using quicksort.
	fn quick_sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts `range` of the array with a fallible comparator function using quicksort.
	fn try_quick_sort_by<F, E>(
		&mut self,
		range: Range<usize>,
		compare: F,
	) -> Result<(), SortError<E>>
	where
		F: FnMut(&A, &A) -> Result<Ordering, E>,
		S: DataMut;

	/// Sorts the array using merge sort.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
	/// worst-case.
	///
	/// # Current Implementation
	///
	/// Top-down merge sort that skips merging halves which are already in order. It allocates one
	/// buffer of `self.len()` indices and reorders elements by swapping, so `A` does not need to be
	/// [`Clone`].
	#[cfg(feature = "alloc")]
	fn merge_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using merge sort.
	///
	/// # Examples
	///
	/// ```
	/// use cmpsort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[(1, 'a'), (1, 'b'), (0, 'c')]);
	/// v.merge_sort_by(|a, b| a.0.cmp(&b.0));
	/// assert!(v == arr1(&[(0, 'c'), (1, 'a'), (1, 'b')]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function using merge sort.
	///
	/// # Examples
	///
	/// ```
	/// use cmpsort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.merge_sort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts `range` of the array with a fallible comparator function using merge sort.
	#[cfg(feature = "alloc")]
	fn try_merge_sort_by<F, E>(
		&mut self,
		range: Range<usize>,
		compare: F,
	) -> Result<(), SortError<E>>
	where
		F: FnMut(&A, &A) -> Result<Ordering, E>,
		S: DataMut;
}

impl<A, S> Sort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn insertion_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		self.insertion_sort_by(A::cmp);
	}
	#[inline]
	fn insertion_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		let Ok(()) = insertion_sort::insertion_sort(self.view_mut(), &mut lift(compare));
	}
	#[inline]
	fn insertion_sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		self.insertion_sort_by(|a, b| f(a).cmp(&f(b)));
	}
	#[inline]
	fn try_insertion_sort_by<F, E>(
		&mut self,
		range: Range<usize>,
		compare: F,
	) -> Result<(), SortError<E>>
	where
		F: FnMut(&A, &A) -> Result<Ordering, E>,
		S: DataMut,
	{
		sort_array_range(self.view_mut(), range, Algorithm::Insertion, compare)
	}

	#[inline]
	fn quick_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		self.quick_sort_by(A::cmp);
	}
	#[inline]
	fn quick_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		let Ok(()) = quick_sort::quick_sort(self.view_mut(), &mut lift(compare));
	}
	#[inline]
	fn quick_sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		self.quick_sort_by(|a, b| f(a).cmp(&f(b)));
	}
	#[inline]
	fn try_quick_sort_by<F, E>(
		&mut self,
		range: Range<usize>,
		compare: F,
	) -> Result<(), SortError<E>>
	where
		F: FnMut(&A, &A) -> Result<Ordering, E>,
		S: DataMut,
	{
		sort_array_range(self.view_mut(), range, Algorithm::Quick, compare)
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		self.merge_sort_by(A::cmp);
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		let Ok(()) = merge_sort::merge_sort(self.view_mut(), &mut lift(compare));
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		self.merge_sort_by(|a, b| f(a).cmp(&f(b)));
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn try_merge_sort_by<F, E>(
		&mut self,
		range: Range<usize>,
		compare: F,
	) -> Result<(), SortError<E>>
	where
		F: FnMut(&A, &A) -> Result<Ordering, E>,
		S: DataMut,
	{
		sort_array_range(self.view_mut(), range, Algorithm::Merge, compare)
	}
}

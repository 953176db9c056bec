use crate::{insertion_sort::insertion_sort, quick_sort::quick_sort};
use core::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
};
use ndarray::ArrayViewMut1;

#[cfg(feature = "alloc")]
use crate::merge_sort::merge_sort;

/// Sorting algorithm used by [`sort_array`](crate::sort_array).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// Insertion sort, stable, *O*(*n*^2).
	Insertion,
	/// Quicksort with median-of-three pivot selection, not stable.
	#[default]
	Quick,
	/// Top-down merge sort, stable, allocates one scratch buffer of indices.
	#[cfg(feature = "alloc")]
	Merge,
}

impl Algorithm {
	/// Whether the algorithm keeps equal elements in their input order.
	#[must_use]
	pub const fn is_stable(self) -> bool {
		match self {
			Self::Insertion => true,
			Self::Quick => false,
			#[cfg(feature = "alloc")]
			Self::Merge => true,
		}
	}

	/// Sorts the whole view.
	pub(crate) fn run<T, F, E>(self, v: ArrayViewMut1<'_, T>, compare: &mut F) -> Result<(), E>
	where
		F: FnMut(&T, &T) -> Result<Ordering, E>,
	{
		match self {
			Self::Insertion => insertion_sort(v, compare),
			Self::Quick => quick_sort(v, compare),
			#[cfg(feature = "alloc")]
			Self::Merge => merge_sort(v, compare),
		}
	}
}

impl Display for Algorithm {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Insertion => "insertion sort",
			Self::Quick => "quicksort",
			#[cfg(feature = "alloc")]
			Self::Merge => "merge sort",
		})
	}
}

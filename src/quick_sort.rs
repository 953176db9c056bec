use crate::insertion_sort::insertion_sort;
use core::cmp::Ordering::{self, Greater, Less};
use ndarray::{ArrayViewMut1, Axis};

/// Views shorter than this get sorted using insertion sort and are never partitioned.
pub const MIN_SIZE: usize = 5;

/// Sorts `v` using quicksort with median-of-three pivot selection.
///
/// Average *O*(*n* \* log(*n*)), worst-case *O*(*n*^2) for inputs that keep defeating the
/// median-of-three. Not stable. Recursion only descends into the shorter partition, so stack depth
/// stays *O*(log(*n*)).
pub fn quick_sort<T, F, E>(mut v: ArrayViewMut1<'_, T>, compare: &mut F) -> Result<(), E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	loop {
		if v.len() < MIN_SIZE {
			return insertion_sort(v, compare);
		}

		let mid = partition(v.view_mut(), compare)?;

		// Split the view into `left`, `pivot`, and `right`.
		let (left, right) = v.split_at(Axis(0), mid);
		let (_, right) = right.split_at(Axis(0), 1);

		// Recurse into the shorter side only and continue with the longer side.
		if left.len() < right.len() {
			quick_sort(left, compare)?;
			v = right;
		} else {
			quick_sort(right, compare)?;
			v = left;
		}
	}
}

/// Partitions `v` into elements smaller than or equal to the pivot, followed by the pivot, followed
/// by elements greater than or equal to the pivot.
///
/// Returns the final index of the pivot. Requires `v.len() >= MIN_SIZE`.
fn partition<T, F, E>(mut v: ArrayViewMut1<'_, T>, compare: &mut F) -> Result<usize, E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	let last = v.len() - 1;
	let mid = last / 2;
	sort_first_middle_last(v.view_mut(), mid, compare)?;

	// `v[0] <= pivot <= v[last]`, so neither end takes part in the scan. The pivot itself waits at
	// `last - 1` and stops the left scan.
	let pivot = last - 1;
	v.swap(mid, pivot);

	let mut left = 1;
	let mut right = last - 2;
	loop {
		while left < pivot && compare(&v[left], &v[pivot])? == Less {
			left += 1;
		}
		while right > 0 && compare(&v[right], &v[pivot])? == Greater {
			right -= 1;
		}
		if left < right {
			v.swap(left, right);
			left += 1;
			right -= 1;
		} else {
			break;
		}
	}

	v.swap(pivot, left);
	Ok(left)
}

/// Orders the first, middle, and last element so that `v[0] <= v[mid] <= v[last]`.
fn sort_first_middle_last<T, F, E>(
	mut v: ArrayViewMut1<'_, T>,
	mid: usize,
	compare: &mut F,
) -> Result<(), E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	let last = v.len() - 1;
	order(v.view_mut(), 0, mid, compare)?;
	order(v.view_mut(), mid, last, compare)?;
	order(v, 0, mid, compare)
}

/// Swaps `v[i]` and `v[j]` if they are out of order.
#[inline]
fn order<T, F, E>(mut v: ArrayViewMut1<'_, T>, i: usize, j: usize, compare: &mut F) -> Result<(), E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	if compare(&v[i], &v[j])? == Greater {
		v.swap(i, j);
	}
	Ok(())
}

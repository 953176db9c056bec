#![cfg(feature = "alloc")]

use alloc::vec;
use core::cmp::Ordering::{self, Greater};
use ndarray::{ArrayViewMut1, s};

/// Sorts `v` using top-down merge sort, which is stable and *O*(*n* \* log(*n*)) worst-case.
///
/// Allocates a single scratch buffer of `v.len()` indices which is shared by every merge. Halves
/// that are already in order are not merged, so sorted input costs `v.len() - 1` comparisons.
pub fn merge_sort<T, F, E>(v: ArrayViewMut1<'_, T>, compare: &mut F) -> Result<(), E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	let len = v.len();
	if len < 2 {
		return Ok(());
	}
	let mut scratch = vec![0; len];
	recurse(v, &mut scratch, compare)
}

/// Sorts `v` recursively, `scratch` being the part of the buffer that covers `v`.
fn recurse<T, F, E>(
	mut v: ArrayViewMut1<'_, T>,
	scratch: &mut [usize],
	compare: &mut F,
) -> Result<(), E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	let len = v.len();
	if len < 2 {
		return Ok(());
	}

	// Last index of the left half.
	let mid = (len - 1) / 2;
	let (left_scratch, right_scratch) = scratch.split_at_mut(mid + 1);
	recurse(v.slice_mut(s![..mid + 1]), left_scratch, compare)?;
	recurse(v.slice_mut(s![mid + 1..]), right_scratch, compare)?;

	if compare(&v[mid], &v[mid + 1])? == Greater {
		merge(v, mid, scratch, compare)?;
	}
	Ok(())
}

/// Merges the non-decreasing runs `v[..=mid]` and `v[mid + 1..]`.
///
/// `order` first receives, for every slot of the merged run, the index of the element that belongs
/// there. Ties take the left run to keep the sort stable. `v` is not touched until every comparison
/// has been made.
fn merge<T, F, E>(
	v: ArrayViewMut1<'_, T>,
	mid: usize,
	order: &mut [usize],
	compare: &mut F,
) -> Result<(), E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	let len = v.len();
	let mut left = 0;
	let mut right = mid + 1;
	let mut out = 0;

	while left <= mid && right < len {
		if compare(&v[left], &v[right])? == Greater {
			order[out] = right;
			right += 1;
		} else {
			order[out] = left;
			left += 1;
		}
		out += 1;
	}

	// At most one of the runs still has elements.
	for (slot, index) in order[out..].iter_mut().zip((left..=mid).chain(right..len)) {
		*slot = index;
	}

	apply_permutation(v, order);
	Ok(())
}

/// Moves `v[order[i]]` to `v[i]` for every `i` by following the cycles of `order`.
///
/// Consumes `order`, which is left as the identity.
fn apply_permutation<T>(mut v: ArrayViewMut1<'_, T>, order: &mut [usize]) {
	for i in 0..order.len() {
		let mut current = i;
		while order[current] != i {
			let next = order[current];
			v.swap(current, next);
			order[current] = current;
			current = next;
		}
		order[current] = current;
	}
}

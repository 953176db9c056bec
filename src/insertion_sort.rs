use core::cmp::Ordering::{self, Less};
use ndarray::{ArrayViewMut1, s};

/// Sorts a view using insertion sort, which is *O*(*n*^2) worst-case and *O*(*n*) on sorted input.
///
/// Stable. Elements only ever move past strictly greater neighbours, so a failing `compare` leaves
/// the view holding every element it held before.
pub fn insertion_sort<T, F, E>(mut v: ArrayViewMut1<'_, T>, compare: &mut F) -> Result<(), E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	for unsorted in 1..v.len() {
		shift_tail(v.slice_mut(s![..unsorted + 1]), compare)?;
	}
	Ok(())
}

/// Shifts the last element to the left until it encounters a smaller or equal element.
fn shift_tail<T, F, E>(mut v: ArrayViewMut1<'_, T>, compare: &mut F) -> Result<(), E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	let mut hole = v.len() - 1;
	while hole > 0 && compare(&v[hole], &v[hole - 1])? == Less {
		v.swap(hole, hole - 1);
		hole -= 1;
	}
	Ok(())
}

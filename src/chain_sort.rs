#![cfg(feature = "alloc")]

use crate::chain::{Link, append, split_off};
use core::cmp::Ordering::{self, Greater};

/// Chain handed back by a merge sort whose ordering failed.
pub(crate) struct Interrupted<T, E> {
	/// Every node of the input, relinked in unspecified order.
	pub head: Link<T>,
	pub error: E,
}

/// Sorts the chain of exactly `size` nodes starting at `head` and returns its new head.
///
/// Stable and *O*(*n* \* log(*n*)). Nodes are relinked, their data never moves, and nothing is
/// allocated. Finding each midpoint takes a walk of half the sub-chain.
pub(crate) fn merge_sort<T, F, E>(
	mut head: Link<T>,
	size: usize,
	compare: &mut F,
) -> Result<Link<T>, Interrupted<T, E>>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	if size <= 1 {
		return Ok(head);
	}

	// Cut behind the `mid`-th node.
	let mid = size / 2;
	let right = split_off(&mut head, mid);

	let left = match merge_sort(head, mid, compare) {
		Ok(left) => left,
		Err(mut interrupted) => {
			append(&mut interrupted.head, right);
			return Err(interrupted);
		}
	};
	let right = match merge_sort(right, size - mid, compare) {
		Ok(right) => right,
		Err(interrupted) => {
			let mut head = left;
			append(&mut head, interrupted.head);
			return Err(Interrupted {
				head,
				error: interrupted.error,
			});
		}
	};

	merge(left, right, compare)
}

/// Merges the non-decreasing chains `left` and `right` by splicing their nodes.
///
/// Ties take the node of `left` to keep the sort stable.
fn merge<T, F, E>(
	mut left: Link<T>,
	mut right: Link<T>,
	compare: &mut F,
) -> Result<Link<T>, Interrupted<T, E>>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	let mut head = None;
	let mut tail = &mut head;

	while let (Some(l), Some(r)) = (left.as_deref(), right.as_deref()) {
		let front = match compare(&l.data, &r.data) {
			Ok(Greater) => &mut right,
			Ok(_) => &mut left,
			Err(error) => {
				*tail = left;
				append(tail, right);
				return Err(Interrupted { head, error });
			}
		};
		if let Some(mut node) = front.take() {
			*front = node.next.take();
			tail = &mut tail.insert(node).next;
		}
	}

	// The rest of the remaining side is already in order and moves over in one link.
	*tail = if left.is_some() { left } else { right };
	Ok(head)
}

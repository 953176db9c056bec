//! Singly linked chains of boxed nodes.
//!
//! A chain is identified by its head [`Link`]. [`Chain`] pairs a head with its length and is what
//! most callers want; raw links are for callers that manage nodes themselves and sort them with
//! [`sort_chain`](crate::sort_chain).

#![cfg(feature = "alloc")]

use crate::{chain_sort::merge_sort, compare::lift, error::SortError};
use alloc::boxed::Box;
use core::{
	cmp::Ordering,
	fmt::{self, Debug, Formatter},
	iter::{FusedIterator, successors},
	mem::ManuallyDrop,
	ptr,
};

/// Owning reference to the first node of a chain, `None` for the empty chain.
pub type Link<T> = Option<Box<Node<T>>>;

/// Node of a chain, exclusively owning its successor.
///
/// Dropping, cloning, comparing, and formatting a node walk its successors in a loop, so chains of
/// any length are handled without deep recursion.
pub struct Node<T> {
	/// Element stored in this node.
	pub data: T,
	/// Rest of the chain.
	pub next: Link<T>,
}

impl<T> Node<T> {
	/// Creates a node without successor.
	#[must_use]
	pub fn new(data: T) -> Self {
		Self { data, next: None }
	}
	/// Creates a node followed by `next`.
	#[must_use]
	pub fn with_next(data: T, next: Link<T>) -> Self {
		Self { data, next }
	}
	/// Splits the node into its element and the rest of the chain.
	#[must_use]
	pub fn into_parts(self) -> (T, Link<T>) {
		let node = ManuallyDrop::new(self);
		// SAFETY: `node` is never dropped, so both fields are read exactly once and their ownership
		// moves to the returned pair.
		unsafe { (ptr::read(&node.data), ptr::read(&node.next)) }
	}

	/// Iterates over the elements of this node and its successors.
	fn elements(&self) -> impl Iterator<Item = &T> {
		successors(Some(self), |node| node.next.as_deref()).map(|node| &node.data)
	}
}

impl<T> Drop for Node<T> {
	fn drop(&mut self) {
		unlink(self.next.take());
	}
}

impl<T: Clone> Clone for Node<T> {
	fn clone(&self) -> Self {
		let mut head = Self::new(self.data.clone());
		let mut tail = &mut head.next;
		for data in self.elements().skip(1) {
			tail = &mut tail.insert(Box::new(Self::new(data.clone()))).next;
		}
		head
	}
}

impl<T: PartialEq> PartialEq for Node<T> {
	fn eq(&self, other: &Self) -> bool {
		self.elements().eq(other.elements())
	}
}

impl<T: Eq> Eq for Node<T> {}

impl<T: Debug> Debug for Node<T> {
	/// Formats the node and its successors as a list.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.elements()).finish()
	}
}

/// Counts the nodes reachable from `link`.
#[must_use]
pub fn count<T>(link: &Link<T>) -> usize {
	let mut count = 0;
	let mut cursor = link.as_deref();
	while let Some(node) = cursor {
		count += 1;
		cursor = node.next.as_deref();
	}
	count
}

/// Cuts the chain after its first `at` nodes and returns the cut-off rest.
///
/// Returns `None` without cutting if the chain has `at` nodes or fewer.
pub(crate) fn split_off<T>(head: &mut Link<T>, at: usize) -> Link<T> {
	let mut cursor = head;
	for _ in 0..at {
		match cursor {
			Some(node) => cursor = &mut node.next,
			None => return None,
		}
	}
	cursor.take()
}

/// Links `rest` behind the last node reachable from `link`.
pub(crate) fn append<T>(link: &mut Link<T>, rest: Link<T>) {
	let mut cursor = link;
	while let Some(node) = cursor {
		cursor = &mut node.next;
	}
	*cursor = rest;
}

/// Drops the nodes of a chain one after the other instead of recursively.
fn unlink<T>(mut link: Link<T>) {
	// Each node is dropped with an empty `next`, so its own `Drop` returns at once.
	while let Some(mut node) = link {
		link = node.next.take();
	}
}

/// Singly linked list that can be sorted by relinking its nodes.
///
/// # Examples
///
/// ```
/// use cmpsort::Chain;
///
/// let mut chain = [6, 5, 4, 3, 2, 1].into_iter().collect::<Chain<_>>();
/// chain.sort();
/// assert_eq!(chain.front(), Some(&1));
/// assert!(chain.iter().eq(&[1, 2, 3, 4, 5, 6]));
/// ```
pub struct Chain<T> {
	head: Link<T>,
	len: usize,
}

impl<T> Chain<T> {
	/// Creates an empty chain.
	#[must_use]
	pub const fn new() -> Self {
		Self { head: None, len: 0 }
	}
	/// Takes ownership of the chain starting at `head`.
	#[must_use]
	pub fn from_head(head: Link<T>) -> Self {
		let len = count(&head);
		Self { head, len }
	}
	/// Releases the nodes, returning the head.
	#[must_use]
	pub fn into_head(mut self) -> Link<T> {
		self.len = 0;
		self.head.take()
	}
	/// Head of the chain.
	#[must_use]
	pub fn head(&self) -> &Link<T> {
		&self.head
	}

	/// Number of elements.
	#[must_use]
	pub fn len(&self) -> usize {
		self.len
	}
	/// Whether the chain has no elements.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
	/// First element, if any.
	#[must_use]
	pub fn front(&self) -> Option<&T> {
		self.head.as_deref().map(|node| &node.data)
	}

	/// Prepends `data`.
	pub fn push_front(&mut self, data: T) {
		let next = self.head.take();
		self.head = Some(Box::new(Node::with_next(data, next)));
		self.len += 1;
	}
	/// Removes and returns the first element.
	pub fn pop_front(&mut self) -> Option<T> {
		self.head.take().map(|node| {
			let (data, next) = (*node).into_parts();
			self.head = next;
			self.len -= 1;
			data
		})
	}
	/// Removes all elements.
	pub fn clear(&mut self) {
		self.head = None;
		self.len = 0;
	}

	/// Iterates over the elements from front to back.
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			next: self.head.as_deref(),
			len: self.len,
		}
	}

	/// Sorts the chain.
	///
	/// Stable, *O*(*n* \* log(*n*)), and does not allocate. Nodes are relinked, never moved.
	pub fn sort(&mut self)
	where
		T: Ord,
	{
		self.sort_by(T::cmp);
	}
	/// Sorts the chain with a comparator function.
	///
	/// # Examples
	///
	/// ```
	/// use cmpsort::Chain;
	///
	/// let mut chain = ["b", "a", "c"].into_iter().collect::<Chain<_>>();
	/// chain.sort_by(|a, b| b.cmp(a));
	/// assert!(chain.iter().eq(&["c", "b", "a"]));
	/// ```
	pub fn sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&T, &T) -> Ordering,
	{
		let Ok(()) = self.relink_sorted(&mut lift(compare));
	}
	/// Sorts the chain with a key extraction function.
	pub fn sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&T) -> K,
	{
		self.sort_by(|a, b| f(a).cmp(&f(b)));
	}
	/// Sorts the chain with a fallible comparator function.
	///
	/// On error the chain still holds all of its elements, in unspecified order.
	pub fn try_sort_by<F, E>(&mut self, mut compare: F) -> Result<(), SortError<E>>
	where
		F: FnMut(&T, &T) -> Result<Ordering, E>,
	{
		self.relink_sorted(&mut compare).map_err(SortError::Compare)
	}

	fn relink_sorted<F, E>(&mut self, compare: &mut F) -> Result<(), E>
	where
		F: FnMut(&T, &T) -> Result<Ordering, E>,
	{
		match merge_sort(self.head.take(), self.len, compare) {
			Ok(head) => {
				self.head = head;
				Ok(())
			}
			Err(interrupted) => {
				self.head = interrupted.head;
				Err(interrupted.error)
			}
		}
	}
}

impl<T> Default for Chain<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> Clone for Chain<T> {
	fn clone(&self) -> Self {
		self.iter().cloned().collect()
	}
}

impl<T: PartialEq> PartialEq for Chain<T> {
	fn eq(&self, other: &Self) -> bool {
		self.len == other.len && self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: Debug> Debug for Chain<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T> FromIterator<T> for Chain<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut chain = Self::new();
		chain.extend(iter);
		chain
	}
}

impl<T> Extend<T> for Chain<T> {
	/// Appends the elements at the back.
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		let mut tail = &mut self.head;
		while let Some(node) = tail {
			tail = &mut node.next;
		}
		for data in iter {
			tail = &mut tail.insert(Box::new(Node::new(data))).next;
			self.len += 1;
		}
	}
}

/// Borrowing iterator of a [`Chain`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
	next: Option<&'a Node<T>>,
	len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		self.next.map(|node| {
			self.next = node.next.as_deref();
			self.len -= 1;
			&node.data
		})
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator of a [`Chain`].
#[derive(Debug)]
pub struct IntoIter<T>(Chain<T>);

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.pop_front()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.0.len, Some(self.0.len))
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Chain<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		IntoIter(self)
	}
}

impl<'a, T> IntoIterator for &'a Chain<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

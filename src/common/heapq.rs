// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{cmp::Reverse, collections::{BinaryHeap, HashSet}, hash::Hash};


/// Min-heap: `pop` returns the smallest item.
#[derive(Clone, Debug)]
pub(crate) struct HeapQ<T>(BinaryHeap<Reverse<T>>);

impl<T: Ord> HeapQ<T> {
	pub(crate) fn new() -> Self {
		Self(BinaryHeap::new())
	}

	pub(crate) fn push(&mut self, item: T) {
		self.0.push(Reverse(item))
	}

	pub(crate) fn pop(&mut self) -> Option<T> {
		self.0.pop().map(|Reverse(item)| item)
	}

	pub(crate) fn len(&self) -> usize {
		self.0.len()
	}
}

impl<T: Ord> Default for HeapQ<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Ord> FromIterator<T> for HeapQ<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self(iter.into_iter().map(Reverse).collect())
	}
}


/// A [`HeapQ`] that holds each item at most once.
#[derive(Clone, Debug)]
pub(crate) struct SetHeapQ<T> {
	heap: HeapQ<T>,
	queued: HashSet<T>,
}

impl<T: Ord + Hash + Clone> SetHeapQ<T> {
	pub(crate) fn new() -> Self {
		Self { heap: HeapQ::new(), queued: HashSet::new() }
	}

	/// Returns whether the item was queued (`false` if it already was).
	pub(crate) fn push(&mut self, item: T) -> bool {
		if !self.queued.insert(item.clone()) { return false }
		self.heap.push(item);
		true
	}

	pub(crate) fn pop(&mut self) -> Option<T> {
		let item = self.heap.pop()?;
		self.queued.remove(&item);
		Some(item)
	}

	pub(crate) fn len(&self) -> usize {
		self.heap.len()
	}
}

impl<T: Ord + Hash + Clone> Default for SetHeapQ<T> {
	fn default() -> Self {
		Self::new()
	}
}


#[test]
fn tests() {
	let mut heap = [5, 1, 4].into_iter().collect::<HeapQ<_>>();
	heap.push(2);
	assert_eq!(heap.len(), 4);
	assert_eq!(std::iter::from_fn(|| heap.pop()).collect::<Vec<_>>(), [1, 2, 4, 5]);
	assert_eq!(heap.len(), 0);

	let mut set_heap = SetHeapQ::new();
	assert!(set_heap.push((3, 'c')));
	assert!(set_heap.push((1, 'a')));
	assert!(!set_heap.push((3, 'c')));
	assert_eq!(set_heap.len(), 2);
	assert_eq!(set_heap.pop(), Some((1, 'a')));
	assert!(set_heap.push((1, 'a')));
	assert_eq!(set_heap.pop(), Some((1, 'a')));
	assert_eq!(set_heap.pop(), Some((3, 'c')));
	assert_eq!(set_heap.pop(), None);
}

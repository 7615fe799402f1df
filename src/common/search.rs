// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{collections::{HashMap, HashSet, VecDeque, hash_map::Entry}, hash::Hash};
use super::heapq::HeapQ;


/// Breadth-first search from every node in `starts`; returns the number of
/// steps to the first node satisfying `is_goal`.
pub(crate) fn bfs<N, I>(
	starts: impl IntoIterator<Item = N>,
	mut successors: impl FnMut(&N) -> I,
	mut is_goal: impl FnMut(&N) -> bool,
) -> Option<usize>
where N: Eq + Hash + Clone, I: IntoIterator<Item = N> {
	let mut queue = starts.into_iter().map(|start| (start, 0)).collect::<VecDeque<_>>();
	let mut seen = queue.iter().map(|(start, _)| start.clone()).collect::<HashSet<_>>();
	while let Some((node, steps)) = queue.pop_front() {
		if is_goal(&node) { return Some(steps) }
		for next in successors(&node) {
			if seen.insert(next.clone()) { queue.push_back((next, steps + 1)) }
		}
	}
	None
}

/// Breadth-first flood-fill; the number of steps to every reachable node.
pub(crate) fn flood<N, I>(
	starts: impl IntoIterator<Item = N>,
	mut successors: impl FnMut(&N) -> I,
) -> HashMap<N, usize>
where N: Eq + Hash + Clone, I: IntoIterator<Item = N> {
	let mut queue = starts.into_iter().map(|start| (start, 0)).collect::<VecDeque<_>>();
	let mut steps = queue.iter().cloned().collect::<HashMap<_, _>>();
	while let Some((node, n)) = queue.pop_front() {
		for next in successors(&node) {
			if let Entry::Vacant(entry) = steps.entry(next.clone()) {
				entry.insert(n + 1);
				queue.push_back((next, n + 1));
			}
		}
	}
	steps
}


/// Dijkstra; returns the lowest total cost to a goal and the goal reached.
pub(crate) fn dijkstra<N, I>(
	starts: impl IntoIterator<Item = N>,
	mut successors: impl FnMut(&N) -> I,
	mut is_goal: impl FnMut(&N) -> bool,
) -> Option<(u64, N)>
where N: Ord + Hash + Clone, I: IntoIterator<Item = (N, u64)> {
	let mut best = HashMap::new();
	let mut queue = HeapQ::new();
	for start in starts {
		best.insert(start.clone(), 0);
		queue.push((0, start));
	}

	while let Some((cost, node)) = queue.pop() {
		if best.get(&node).map_or(false, |&b| cost > b) { continue }
		if is_goal(&node) { return Some((cost, node)) }
		for (next, step_cost) in successors(&node) {
			let next_cost = cost + step_cost;
			match best.entry(next.clone()) {
				Entry::Occupied(entry) if *entry.get() <= next_cost => continue,
				Entry::Occupied(mut entry) => { entry.insert(next_cost); }
				Entry::Vacant(entry) => { entry.insert(next_cost); }
			}
			queue.push((next_cost, next));
		}
	}
	None
}


/// Result of [`dijkstra_all`]: best costs, and for each node every
/// predecessor through which that cost is reached.
pub(crate) struct Explored<N> {
	costs: HashMap<N, u64>,
	preds: HashMap<N, Vec<N>>,
}

impl<N: Eq + Hash + Clone> Explored<N> {
	pub(crate) fn cost(&self, node: &N) -> Option<u64> {
		self.costs.get(node).copied()
	}

	/// Every node on some best path ending in one of `goals`.
	pub(crate) fn nodes_on_best_paths(&self, goals: impl IntoIterator<Item = N>) -> HashSet<N> {
		let mut stack = goals.into_iter()
			.filter(|goal| self.costs.contains_key(goal))
			.collect::<Vec<_>>();
		let mut nodes = HashSet::new();
		while let Some(node) = stack.pop() {
			if !nodes.insert(node.clone()) { continue }
			stack.extend(self.preds.get(&node).into_iter().flatten().cloned());
		}
		nodes
	}
}

pub(crate) fn dijkstra_all<N, I>(
	starts: impl IntoIterator<Item = N>,
	mut successors: impl FnMut(&N) -> I,
) -> Explored<N>
where N: Ord + Hash + Clone, I: IntoIterator<Item = (N, u64)> {
	let mut costs = HashMap::new();
	let mut preds = HashMap::<N, Vec<N>>::new();
	let mut queue = HeapQ::new();
	for start in starts {
		costs.insert(start.clone(), 0);
		queue.push((0, start));
	}

	while let Some((cost, node)) = queue.pop() {
		if costs.get(&node).map_or(false, |&b| cost > b) { continue }
		for (next, step_cost) in successors(&node) {
			let next_cost = cost + step_cost;
			match costs.entry(next.clone()) {
				Entry::Occupied(entry) if *entry.get() < next_cost => continue,
				Entry::Occupied(entry) if *entry.get() == next_cost => {
					preds.entry(next).or_default().push(node.clone());
					continue
				}
				Entry::Occupied(mut entry) => { entry.insert(next_cost); }
				Entry::Vacant(entry) => { entry.insert(next_cost); }
			}
			preds.insert(next.clone(), vec![node.clone()]);
			queue.push((next_cost, next));
		}
	}
	Explored { costs, preds }
}


#[cfg(test)]
mod tests {
	use super::*;

	// 0 -1-> 1 -1-> 3, 0 -2-> 2 -0-> 3, 3 -5-> 4
	fn edges(node: &u8) -> Vec<(u8, u64)> {
		match node {
			0 => vec![(1, 1), (2, 2)],
			1 => vec![(3, 1)],
			2 => vec![(3, 0)],
			3 => vec![(4, 5)],
			_ => vec![],
		}
	}

	#[test]
	fn shortest() {
		let neighbours = |n: &u8| edges(n).into_iter().map(|(m, _)| m).collect::<Vec<_>>();
		assert_eq!(bfs([0u8], neighbours, |&n| n == 4), Some(3));
		assert_eq!(bfs([4u8], neighbours, |&n| n == 0), None);
		assert_eq!(bfs([0u8, 3], neighbours, |&n| n == 4), Some(1));
		assert_eq!(bfs([2u8, 1], neighbours, |&n| n == 1), Some(0));
		assert_eq!(bfs([], neighbours, |_| true), None);
		assert_eq!(dijkstra([0u8], edges, |&n| n == 4), Some((7, 4)));
		assert_eq!(dijkstra([1u8, 2], edges, |&n| n == 3), Some((0, 3)));
		assert_eq!(dijkstra([4u8], edges, |&n| n == 0), None);
	}

	#[test]
	fn flooded() {
		let neighbours = |n: &u8| edges(n).into_iter().map(|(m, _)| m).collect::<Vec<_>>();
		assert_eq!(flood([0u8], neighbours), HashMap::from([(0, 0), (1, 1), (2, 1), (3, 2), (4, 3)]));
		assert_eq!(flood([2u8, 4], neighbours), HashMap::from([(2, 0), (4, 0), (3, 1)]));
	}

	#[test]
	fn all_best_paths() {
		let explored = dijkstra_all([0u8], edges);
		assert_eq!(explored.cost(&4), Some(7));
		assert_eq!(explored.cost(&9), None);
		assert_eq!(explored.nodes_on_best_paths([4]), HashSet::from([0, 1, 2, 3, 4]));
		assert_eq!(explored.nodes_on_best_paths([1]), HashSet::from([0, 1]));
	}
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;
use crate::common::{Input, grid::{Dir, Grid, Pos}, search};


const CRUCIBLE: RangeInclusive<usize> = 1..=3;
const ULTRA_CRUCIBLE: RangeInclusive<usize> = 4..=10;

fn parse(input: &Input) -> anyhow::Result<Grid<u8>> {
	Ok(Grid::try_parse(input.text, |c| c.to_digit(10).map(|d| d as u8))?)
}

/// Least heat loss from the top-left to the bottom-right block. Every move
/// turns left or right and then goes `moves` blocks straight; the nodes
/// are the block reached and the direction it was reached in.
fn least_heat_loss(grid: &Grid<u8>, moves: RangeInclusive<usize>) -> anyhow::Result<u64> {
	let end = grid.corner();
	let successors = |&(pos, dir): &(Pos, Dir)| {
		let mut next = Vec::with_capacity(2 * moves.end());
		for dir in [dir.left(), dir.right()] {
			let (mut pos, mut heat_loss) = (pos, 0);
			for blocks in 1..=*moves.end() {
				let Some(step) = grid.step(pos, dir) else { break };
				pos = step;
				heat_loss += u64::from(grid[pos]);
				if blocks >= *moves.start() { next.push(((pos, dir), heat_loss)) }
			}
		}
		next
	};
	search::dijkstra([([0, 0], Dir::East), ([0, 0], Dir::South)], successors, |&(pos, _)| pos == end)
		.map(|(heat_loss, (_, dir))| {
			log::debug!("Reached {end:?} going {dir:?}");
			heat_loss
		})
		.ok_or_else(|| anyhow::anyhow!("No way to {end:?}"))
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<u64> {
	least_heat_loss(&parse(input)?, CRUCIBLE)
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<u64> {
	least_heat_loss(&parse(input)?, ULTRA_CRUCIBLE)
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			2413432311323
			3215453535623
			3255245654254
			3446585845452
			4546657867536
			1438598798454
			4457876987766
			3637877979653
			4654967986887
			4564679986453
			1224686865563
			2546548887735
			4322674655533
		" },
		indoc::indoc! { "
			111111111111
			999999999991
			999999999991
			999999999991
			999999999991
		" },
	];
	assert_eq!(part1(&Input::sample(INPUTS[0])).unwrap(), 102);
	assert_eq!(part2(&Input::sample(INPUTS[0])).unwrap(), 94);
	assert_eq!(part2(&Input::sample(INPUTS[1])).unwrap(), 71);
	assert!(part2(&Input::sample("12\n34\n")).is_err());
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::common::{Input, grid::Grid, search};


const TILES: usize = 5;

fn parse(input: &Input) -> anyhow::Result<Grid<u8>> {
	Ok(Grid::try_parse(input.text, |c| match c {
		'1'..='9' => c.to_digit(10).map(|d| d as u8),
		_ => None,
	})?)
}

/// Lowest total risk from the top-left to the bottom-right corner; the
/// starting position's risk does not count.
fn lowest_total_risk(grid: &Grid<u8>) -> anyhow::Result<u64> {
	let goal = grid.corner();
	search::dijkstra(
		[[0, 0]],
		move |&pos| grid.neighbours(pos).map(move |(next, _)| (next, u64::from(grid[next]))),
		|&pos| pos == goal,
	)
		.map(|(risk, _)| risk)
		.ok_or_else(|| anyhow::anyhow!("No path to {goal:?}"))
}

/// The grid repeated `TILES` times in both directions, each repetition
/// right or down adding 1 to every risk and wrapping from 9 to 1.
fn tiled(grid: &Grid<u8>) -> Grid<u8> {
	let (width, height) = (grid.width(), grid.height());
	Grid::from_fn(width * TILES, height * TILES, |[x, y]| {
		let increase = (x / width + y / height) as u8;
		(grid[[x % width, y % height]] - 1 + increase) % 9 + 1
	})
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<u64> {
	lowest_total_risk(&parse(input)?)
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<u64> {
	lowest_total_risk(&tiled(&parse(input)?))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1163751742
		1381373672
		2136511328
		3694931569
		7463417111
		1319128137
		1359912421
		3125421639
		1293138521
		2311944581
	" };
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 40);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), 315);

	let grid = tiled(&parse(&Input::sample("8")).unwrap());
	assert_eq!((0..TILES).map(|x| grid[[x, 0]]).collect::<Vec<_>>(), [8, 9, 1, 2, 3]);
	assert_eq!(grid[[4, 4]], 7);
	assert!(parse(&Input::sample("120\n")).is_err());
}

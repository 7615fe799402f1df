// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;
use crate::common::{Input, grid::{Dir, Grid, Pos}, search};


const STEP_SCORE: u64 = 1;
const TURN_SCORE: u64 = 1000;

struct Maze {
	walls: Grid<bool>,
	start: Pos,
	end: Pos,
}

fn parse(input: &Input) -> anyhow::Result<Maze> {
	let tiles = Grid::try_parse(input.text, |c| matches!(c, '#' | '.' | 'S' | 'E').then_some(c))?;
	let find = |tile| tiles.find(|&c| c == tile).ok_or_else(|| anyhow::anyhow!("No {tile:?} in the maze"));
	let (start, end) = (find('S')?, find('E')?);
	let walls = Grid::from_fn(tiles.width(), tiles.height(), |pos| tiles[pos] == '#');
	Ok(Maze { walls, start, end })
}

/// Lowest score to the end tile, and every tile on a path with that score.
/// Nodes are a tile and the direction the reindeer faces there.
fn best_paths(maze: &Maze) -> anyhow::Result<(u64, HashSet<Pos>)> {
	let walls = &maze.walls;
	let explored = search::dijkstra_all([(maze.start, Dir::East)], |&(pos, dir): &(Pos, Dir)| {
		let forward = walls.step(pos, dir)
			.filter(|&next| !walls[next])
			.map(|next| ((next, dir), STEP_SCORE));
		[(dir.left(), TURN_SCORE), (dir.right(), TURN_SCORE)].into_iter()
			.map(move |(turned, score)| ((pos, turned), score))
			.chain(forward)
	});

	let ends = Dir::ALL.map(|dir| (maze.end, dir));
	let best = ends.iter()
		.filter_map(|end| explored.cost(end))
		.min()
		.ok_or_else(|| anyhow::anyhow!("The end is out of reach"))?;
	let best_ends = ends.into_iter().filter(|end| explored.cost(end) == Some(best));
	let tiles = explored.nodes_on_best_paths(best_ends).into_iter().map(|(pos, _)| pos).collect();
	Ok((best, tiles))
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<u64> {
	best_paths(&parse(input)?).map(|(score, _)| score)
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<usize> {
	best_paths(&parse(input)?).map(|(_, tiles)| tiles.len())
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		include_str!("../../data/2024/day_16_test.txt"),
		indoc::indoc! { "
			#################
			#...#...#...#..E#
			#.#.#.#.#.#.#.#.#
			#.#.#.#...#...#.#
			#.#.#.#.###.#.#.#
			#...#.#.#.....#.#
			#.#.#.#.#.#####.#
			#.#...#.#.#.....#
			#.#.#####.#.###.#
			#.#.#.......#...#
			#.#.###.#####.###
			#.#.#...#.....#.#
			#.#.#.#####.###.#
			#.#.#.........#.#
			#.#.#.#########.#
			#S#.............#
			#################
		" },
	];
	assert_eq!(part1(&Input::sample(INPUTS[0])).unwrap(), 7036);
	assert_eq!(part2(&Input::sample(INPUTS[0])).unwrap(), 45);
	assert_eq!(part1(&Input::sample(INPUTS[1])).unwrap(), 11048);
	assert_eq!(part2(&Input::sample(INPUTS[1])).unwrap(), 64);

	assert_eq!(part1(&Input::sample("#####\n#S.E#\n#####\n")).unwrap(), 2);
	assert_eq!(part2(&Input::sample("#####\n#S.E#\n#####\n")).unwrap(), 3);
	assert!(part1(&Input::sample("#####\n#S#E#\n#####\n")).is_err());
	assert!(part1(&Input::sample("#####\n#S..#\n#####\n")).is_err());
}

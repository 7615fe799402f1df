// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::common::{Input, grid::{Grid, Pos}, search};


struct Heightmap {
	heights: Grid<u8>,
	start: Pos,
	end: Pos,
}

fn parse(input: &Input) -> anyhow::Result<Heightmap> {
	let marked = Grid::try_parse(input.text, |c| match c {
		'a'..='z' | 'S' | 'E' => Some(c),
		_ => None,
	})?;
	let find = |mark| marked.find(|&c| c == mark).ok_or_else(|| anyhow::anyhow!("No {mark:?} on the map"));
	let (start, end) = (find('S')?, find('E')?);
	let heights = Grid::from_fn(marked.width(), marked.height(), |pos| match marked[pos] {
		'S' => 0,
		'E' => b'z' - b'a',
		c => c as u8 - b'a',
	});
	Ok(Heightmap { heights, start, end })
}

/// Fewest steps from any of `starts` to the end, climbing at most one up
/// per step.
fn fewest_steps(map: &Heightmap, starts: impl IntoIterator<Item = Pos>) -> anyhow::Result<usize> {
	let heights = &map.heights;
	search::bfs(
		starts,
		move |&pos| heights.neighbours(pos)
			.filter(move |&(next, _)| heights[next] <= heights[pos] + 1)
			.map(|(next, _)| next),
		|&pos| pos == map.end,
	).ok_or_else(|| anyhow::anyhow!("The end is out of reach"))
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<usize> {
	let map = parse(input)?;
	fewest_steps(&map, [map.start])
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<usize> {
	let map = parse(input)?;
	let starts = map.heights.iter().filter(|&(_, &h)| h == 0).map(|(pos, _)| pos).collect::<Vec<_>>();
	log::debug!("{} possible starts", starts.len());
	fewest_steps(&map, starts)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 31);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), 29);
	assert!(part1(&Input::sample("Sac\nbzE\n")).is_err());
	assert!(part1(&Input::sample("Sab\n")).is_err());
}

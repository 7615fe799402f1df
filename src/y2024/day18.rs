// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::common::{Input, grid::{Grid, Pos}, input::ParseError, search};


const SIZE: usize = 71;
const SIZE_SAMPLE: usize = 7;
const FALLEN: usize = 1024;
const FALLEN_SAMPLE: usize = 12;

struct Memory {
	/// When each byte falls, by index into `bytes`; `usize::MAX` if never.
	falls: Grid<usize>,
	bytes: Vec<Pos>,
}

impl Memory {
	fn parse(input: &Input) -> anyhow::Result<Self> {
		let size = if input.test { SIZE_SAMPLE } else { SIZE };
		let bytes = input.csv_int_multiline::<usize>(',')?
			.into_iter()
			.zip(input.numbered_lines(true).map(|(l, _)| l))
			.map(|(coords, l)| match coords[..] {
				[x, y] if x < size && y < size => Ok([x, y]),
				_ => Err(ParseError::format(l, format!("{coords:?} is not a position in memory"))),
			})
			.collect::<Result<Vec<_>, _>>()?;
		let mut falls = Grid::from_fn(size, size, |_| usize::MAX);
		for (time, &pos) in bytes.iter().enumerate().rev() {
			falls[pos] = time;
		}
		Ok(Self { falls, bytes })
	}

	/// Fewest steps from the top-left to the bottom-right corner once the
	/// first `fallen` bytes have fallen.
	fn fewest_steps(&self, fallen: usize) -> Option<usize> {
		let (falls, exit) = (&self.falls, self.falls.corner());
		if falls[[0, 0]] < fallen { return None }
		search::bfs(
			[[0, 0]],
			move |&pos| falls.neighbours(pos)
				.filter(move |&(next, _)| falls[next] >= fallen)
				.map(|(next, _)| next),
			|&pos| pos == exit,
		)
	}
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<usize> {
	let fallen = if input.test { FALLEN_SAMPLE } else { FALLEN };
	Memory::parse(input)?.fewest_steps(fallen)
		.ok_or_else(|| anyhow::anyhow!("The exit is cut off after {fallen} bytes"))
}


/// The first byte that cuts off the exit, by bisecting on how many have
/// fallen.
pub(crate) fn part2(input: &Input) -> anyhow::Result<String> {
	let memory = Memory::parse(input)?;
	let (mut open, mut cut_off) = (0, memory.bytes.len());
	anyhow::ensure!(memory.fewest_steps(open).is_some(), "The exit is cut off from the start");
	anyhow::ensure!(memory.fewest_steps(cut_off).is_none(), "The exit is never cut off");
	while cut_off - open > 1 {
		let fallen = open + (cut_off - open) / 2;
		match memory.fewest_steps(fallen) {
			Some(steps) => {
				log::debug!("{fallen} bytes: {steps} steps");
				open = fallen;
			}
			None => cut_off = fallen,
		}
	}
	let [x, y] = memory.bytes[cut_off - 1];
	Ok(format!("{x},{y}"))
}


#[test]
fn tests() {
	const INPUT: &str = include_str!("../../data/2024/day_18_test.txt");
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 22);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), "6,1");

	let memory = Memory::parse(&Input::sample(INPUT)).unwrap();
	assert_eq!(memory.fewest_steps(0), Some(12));
	assert!(part2(&Input::sample("1,0\n")).is_err());
	assert!(Memory::parse(&Input::sample("7,0\n")).is_err());
	assert!(Memory::parse(&Input::sample("1,2,3\n")).is_err());
}

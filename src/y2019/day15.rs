// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{collections::HashSet, iter};
use crate::{common::{Input, grid::{Dir, Grid}, search}, intcode::Vm};


type Loc = [isize; 2];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Status { Wall, Moved, Oxygen }

trait Droid {
	/// Tries to move one step; the droid stays put when it hits a wall.
	fn try_move(&mut self, dir: Dir) -> anyhow::Result<Status>;
}

/// The repair droid, steered by its Intcode program.
struct RemoteDroid(Vm);

impl Droid for RemoteDroid {
	fn try_move(&mut self, dir: Dir) -> anyhow::Result<Status> {
		anyhow::ensure!(!self.0.is_halted(), "The droid halted");
		let command = match dir { Dir::North => 1, Dir::South => 2, Dir::West => 3, Dir::East => 4 };
		let status = self.0.run_until_output(&mut iter::once(command))?
			.ok_or_else(|| anyhow::anyhow!("The droid halted instead of reporting"))?;
		match status {
			0 => Ok(Status::Wall),
			1 => Ok(Status::Moved),
			2 => Ok(Status::Oxygen),
			_ => anyhow::bail!("Unexpected status {status}"),
		}
	}
}

/// A droid driving over a drawn map: `D` where it starts, `O` the oxygen
/// system, `.` open and `#` (or blank) walls.
struct MapDroid {
	map: Grid<char>,
	loc: Loc,
}

impl MapDroid {
	fn parse(input: &Input) -> anyhow::Result<Self> {
		let map = Grid::try_parse(input.text, |c| matches!(c, '#' | ' ' | '.' | 'D' | 'O').then_some(c))?;
		let [x, y] = map.find(|&c| c == 'D').ok_or_else(|| anyhow::anyhow!("No droid on the map"))?;
		Ok(Self { map, loc: [x as isize, y as isize] })
	}

	fn cell(&self, [x, y]: Loc) -> Option<char> {
		let pos = [usize::try_from(x).ok()?, usize::try_from(y).ok()?];
		self.map.get(pos).copied()
	}
}

impl Droid for MapDroid {
	fn try_move(&mut self, dir: Dir) -> anyhow::Result<Status> {
		let next = dir.offset(self.loc);
		let status = match self.cell(next) {
			None | Some('#' | ' ') => return Ok(Status::Wall),
			Some('O') => Status::Oxygen,
			Some(_) => Status::Moved,
		};
		self.loc = next;
		Ok(status)
	}
}


/// Open locations relative to the droid's start, and the oxygen system.
#[derive(Default)]
struct Area {
	open: HashSet<Loc>,
	walls: HashSet<Loc>,
	oxygen: Option<Loc>,
}

impl Area {
	/// Visits every reachable location depth-first, backing up after each
	/// dead end.
	fn explore(droid: &mut impl Droid) -> anyhow::Result<Self> {
		let mut area = Self { open: HashSet::from([[0, 0]]), ..Self::default() };
		area.visit(droid, [0, 0])?;
		log::debug!("{} open, {} walls", area.open.len(), area.walls.len());
		Ok(area)
	}

	fn visit(&mut self, droid: &mut impl Droid, loc: Loc) -> anyhow::Result<()> {
		for dir in Dir::ALL {
			let next = dir.offset(loc);
			if self.open.contains(&next) || self.walls.contains(&next) { continue }
			match droid.try_move(dir)? {
				Status::Wall => { self.walls.insert(next); continue }
				Status::Oxygen => self.oxygen = Some(next),
				Status::Moved => (),
			}
			self.open.insert(next);
			self.visit(droid, next)?;
			anyhow::ensure!(droid.try_move(dir.inv())? != Status::Wall, "Cannot back up to {loc:?}");
		}
		Ok(())
	}

	fn oxygen(&self) -> anyhow::Result<Loc> {
		self.oxygen.ok_or_else(|| anyhow::anyhow!("No oxygen system found"))
	}

	fn open_neighbours(&self, loc: Loc) -> impl Iterator<Item = Loc> + '_ {
		Dir::ALL.into_iter().map(move |dir| dir.offset(loc)).filter(move |next| self.open.contains(next))
	}
}

fn explore(input: &Input) -> anyhow::Result<Area> {
	if input.test {
		Area::explore(&mut MapDroid::parse(input)?)
	} else {
		Area::explore(&mut RemoteDroid(Vm::parse(input.text)?))
	}
}


/// Fewest moves from the start to the oxygen system.
pub(crate) fn part1(input: &Input) -> anyhow::Result<usize> {
	let area = explore(input)?;
	let area = &area;
	let oxygen = area.oxygen()?;
	search::bfs([[0, 0]], move |&loc| area.open_neighbours(loc), |&loc| loc == oxygen)
		.ok_or_else(|| anyhow::anyhow!("The oxygen system is out of reach"))
}


/// Minutes for oxygen to spread from the system to every open location.
pub(crate) fn part2(input: &Input) -> anyhow::Result<usize> {
	let area = explore(input)?;
	let area = &area;
	let minutes = search::flood([area.oxygen()?], move |&loc| area.open_neighbours(loc));
	Ok(minutes.into_values().max().unwrap_or(0))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		 ##   
		#D.## 
		#.#..#
		#.O.# 
		 ###  
	" };
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 3);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), 4);

	let area = explore(&Input::sample(INPUT)).unwrap();
	assert_eq!((area.open.len(), area.oxygen), (8, Some([1, 2])));
	assert!(area.walls.contains(&[-1, 0]) && area.walls.contains(&[0, -1]));

	// Reports a wall to the north, then finds the system one step east,
	// backs up west and reports walls everywhere else.
	const REMOTE: &str = "3,100,104,0,3,100,104,2,3,100,104,0,3,100,104,0,3,100,104,0,3,100,104,1,3,100,104,0,3,100,104,0,99";
	let area = Area::explore(&mut RemoteDroid(Vm::parse(REMOTE).unwrap())).unwrap();
	assert_eq!(area.oxygen, Some([1, 0]));
	assert_eq!(area.open, HashSet::from([[0, 0], [1, 0]]));
	assert_eq!(part1(&Input::new(REMOTE)).unwrap(), 1);
	assert_eq!(part2(&Input::new(REMOTE)).unwrap(), 1);

	assert!(part1(&Input::new("3,100,104,0,99")).is_err());
	assert!(part1(&Input::new("3,100,104,7,99")).is_err());
	assert!(part1(&Input::sample("#D#
")).is_err());
	assert!(part1(&Input::sample("#.O
")).is_err());
}

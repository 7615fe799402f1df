// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Registry of solved puzzles, keyed by year and day.
//!
//! Each `yYYYY` module lists its days with [`year!`], which declares the
//! `dayDD` submodules and a `PUZZLES` table pointing at their `part1` and
//! `part2` functions.

use crate::common::{cli::Part, Input, NoSample};


pub(crate) type PartFn = fn(&Input<'_>) -> anyhow::Result<String>;

pub(crate) struct Puzzle {
	pub(crate) year: u16,
	pub(crate) day: u8,
	pub(crate) title: &'static str,
	pub(crate) part1: PartFn,
	pub(crate) part2: Option<PartFn>,
}

impl Puzzle {
	pub(crate) fn part(&self, part: Part) -> Option<PartFn> {
		match part {
			Part::One => Some(self.part1),
			Part::Two => self.part2,
		}
	}

	/// `None` when there is no such part, or when it has nothing to solve
	/// for the sample.
	pub(crate) fn solve(&self, part: Part, input: &Input) -> anyhow::Result<Option<String>> {
		let Some(solve) = self.part(part) else { return Ok(None) };
		match solve(input) {
			Err(err) if input.test && err.is::<NoSample>() => Ok(None),
			result => result.map(Some),
		}
	}
}

/// Declares day modules and the year's `PUZZLES` table. A day marked
/// `[part1_only]` has no second puzzle (day 25).
macro_rules! year {
	( @part2 $day:literal part1_only ) => { None };
	( @part2 $day:literal ) => { paste::paste! {
		Some((|input: &crate::common::Input<'_>|
			[<day $day>]::part2(input).map(|answer| answer.to_string())) as crate::puzzles::PartFn)
	} };
	( $year:literal: $( $day:literal => $title:literal $([$only:ident])? ),* $(,)? ) => { paste::paste! {
		$( mod [<day $day>]; )*

		pub(crate) const PUZZLES: &[crate::puzzles::Puzzle] = &[ $(
			crate::puzzles::Puzzle {
				year: $year,
				day: $day,
				title: $title,
				part1: |input: &crate::common::Input<'_>|
					[<day $day>]::part1(input).map(|answer| answer.to_string()),
				part2: year!(@part2 $day $($only)?),
			},
		)* ];
	} };
}

pub(crate) use year;


const YEARS: &[&[Puzzle]] = &[
	crate::y2015::PUZZLES,
	crate::y2019::PUZZLES,
	crate::y2020::PUZZLES,
	crate::y2021::PUZZLES,
	crate::y2022::PUZZLES,
	crate::y2023::PUZZLES,
	crate::y2024::PUZZLES,
];

pub(crate) fn all() -> impl Iterator<Item = &'static Puzzle> {
	YEARS.iter().flat_map(|puzzles| puzzles.iter())
}

#[derive(Debug, thiserror::Error)]
#[error("No solution for {year} day {day}; solved days of {year}: {solved}")]
pub(crate) struct NotSolved { year: u16, day: u8, solved: String }

pub(crate) fn find(year: u16, day: u8) -> Result<&'static Puzzle, NotSolved> {
	use itertools::Itertools as _;
	all().find(|p| p.year == year && p.day == day).ok_or_else(|| NotSolved {
		year,
		day,
		solved: Some(all().filter(|p| p.year == year).map(|p| p.day).join(", "))
			.filter(|s| !s.is_empty())
			.unwrap_or_else(|| "none".to_owned()),
	})
}


#[test]
fn tests() {
	assert_eq!(find(2019, 5).unwrap().title, "Sunny with a Chance of Asteroids");
	assert!(find(2020, 25).unwrap().part(Part::Two).is_none());
	assert!(find(2024, 17).unwrap().part(Part::Two).is_some());
	let err = find(2019, 3).err().unwrap().to_string();
	assert!(err.contains("solved days of 2019: 1, 2, 5"), "{err}");
	assert!(find(2017, 1).err().unwrap().to_string().ends_with("none"));
	use itertools::Itertools as _;
	assert!(all().map(|p| (p.year, p.day)).all_unique());
}

#[test]
fn samples() {
	use clap::Parser as _;
	for puzzle in all() {
		let (year, day) = (puzzle.year.to_string(), puzzle.day.to_string());
		let args = crate::common::cli::Args::try_parse_from(
			["advent", &year, &day, "-t", "--data-dir", "data"]).unwrap();
		for part in Part::ALL {
			let text = crate::common::input::read_input(&args.input_path(part)).unwrap();
			let answer = puzzle.solve(part, &Input::sample(&text));
			let answer = answer.unwrap_or_else(|err| panic!("{year} day {day} part {part}: {err:?}"));
			let skipped = matches!((puzzle.year, puzzle.day, part), (2019, 2 | 22, Part::Two) | (2020, 25, Part::Two));
			assert_eq!(answer.is_none(), skipped, "{year} day {day} part {part}");
		}
	}
	let program = Input::new("1,0,0,0,99");
	assert!(find(2019, 2).unwrap().solve(Part::Two, &program).is_err());
}

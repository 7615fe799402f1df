// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt, path::PathBuf};
use clap::Parser;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Part { One, Two }

impl Part {
	pub(crate) const ALL: [Part; 2] = [Part::One, Part::Two];

	fn num(self) -> u8 {
		match self { Part::One => 1, Part::Two => 2 }
	}
}

impl fmt::Display for Part {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.num().fmt(f)
	}
}


/// Solve an Advent of Code puzzle
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub(crate) struct Args {
	/// Puzzle year
	#[arg(value_parser = clap::value_parser!(u16).range(2015..=2024))]
	pub(crate) year: u16,

	/// Puzzle day
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	pub(crate) day: u8,

	/// Input file; defaults to `<DATA_DIR>/<YEAR>/day_<DAY>.txt`
	pub(crate) input: Option<PathBuf>,

	/// Only solve this part
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
	pub(crate) part: Option<u8>,

	/// Use the sample input and the sample's constants
	#[arg(short, long)]
	pub(crate) test: bool,

	/// Log more (repeat for debug and trace output)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub(crate) verbose: u8,

	/// Directory holding puzzle inputs, one subdirectory per year
	#[arg(long, env = "AOC_DATA_DIR", default_value = "data")]
	pub(crate) data_dir: PathBuf,
}

impl Args {
	pub(crate) fn runs_part(&self, part: Part) -> bool {
		self.part.map_or(true, |p| p == part.num())
	}

	/// An explicit input wins. Otherwise the data directory convention
	/// applies, where a part 2 sample may live in its own `_test_b` file.
	pub(crate) fn input_path(&self, part: Part) -> PathBuf {
		if let Some(input) = &self.input { return input.clone() }

		let dir = self.data_dir.join(self.year.to_string());
		let day = self.day;
		if !self.test { return dir.join(format!("day_{day:02}.txt")) }
		if part == Part::Two {
			let path = dir.join(format!("day_{day:02}_test_b.txt"));
			if path.exists() { return path }
		}
		dir.join(format!("day_{day:02}_test.txt"))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse() {
		let args = Args::try_parse_from(["advent", "2019", "7", "-t", "-vv", "--data-dir", "inputs"]).unwrap();
		assert_eq!((args.year, args.day, args.test, args.verbose), (2019, 7, true, 2));
		assert!(args.runs_part(Part::One) && args.runs_part(Part::Two));
		assert_eq!(args.input_path(Part::One), PathBuf::from("inputs/2019/day_07_test.txt"));

		let args = Args::try_parse_from(["advent", "2024", "18", "my.txt", "-p", "2", "--data-dir", "inputs"]).unwrap();
		assert!(!args.runs_part(Part::One) && args.runs_part(Part::Two));
		assert_eq!(args.input_path(Part::Two), PathBuf::from("my.txt"));

		let args = Args::try_parse_from(["advent", "2021", "15", "--data-dir", "inputs"]).unwrap();
		assert_eq!(args.input_path(Part::Two), PathBuf::from("inputs/2021/day_15.txt"));
	}

	#[test]
	fn part2_sample() {
		let dir = std::env::temp_dir().join(format!("advent-cli-{}", std::process::id()));
		std::fs::create_dir_all(dir.join("2019")).unwrap();
		std::fs::write(dir.join("2019/day_07_test_b.txt"), "99\n").unwrap();
		let data_dir = dir.to_str().unwrap();

		let args = Args::try_parse_from(["advent", "2019", "7", "-t", "--data-dir", data_dir]).unwrap();
		assert_eq!(args.input_path(Part::One), dir.join("2019/day_07_test.txt"));
		assert_eq!(args.input_path(Part::Two), dir.join("2019/day_07_test_b.txt"));
		let args = Args::try_parse_from(["advent", "2019", "9", "-t", "--data-dir", data_dir]).unwrap();
		assert_eq!(args.input_path(Part::Two), dir.join("2019/day_09_test.txt"));
		let args = Args::try_parse_from(["advent", "2019", "7", "--data-dir", data_dir]).unwrap();
		assert_eq!(args.input_path(Part::Two), dir.join("2019/day_07.txt"));

		std::fs::remove_dir_all(&dir).unwrap();
	}

	#[test]
	fn data_dir_from_env() {
		std::env::set_var("AOC_DATA_DIR", "from-env");
		let args = Args::try_parse_from(["advent", "2020", "8"]).unwrap();
		assert_eq!(args.data_dir, PathBuf::from("from-env"));
		assert_eq!(args.input_path(Part::One), PathBuf::from("from-env/2020/day_08.txt"));
		let args = Args::try_parse_from(["advent", "2020", "8", "--data-dir", "flag"]).unwrap();
		assert_eq!(args.data_dir, PathBuf::from("flag"));
	}

	#[test]
	fn reject() {
		assert!(Args::try_parse_from(["advent", "2014", "1"]).is_err());
		assert!(Args::try_parse_from(["advent", "2019", "26"]).is_err());
		assert!(Args::try_parse_from(["advent", "2019", "1", "-p", "3"]).is_err());
	}
}

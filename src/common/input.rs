// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Line and CSV readers over puzzle text.

use std::{error::Error, path::Path, str::FromStr};
use anyhow::Context as _;


type BoxedError = Box<dyn Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ParseError {
	#[error("Line {line}: cannot parse {text:?}")]
	Value { line: usize, text: String, #[source] source: BoxedError },
	#[error("Line {line}: {message}")]
	Format { line: usize, message: String },
	#[error("Unexpected end of input")]
	End,
}

impl ParseError {
	pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
		ParseError::Format { line, message: message.into() }
	}
}

pub(crate) fn parse_value<T>(line: usize, text: &str) -> Result<T, ParseError>
where T: FromStr, T::Err: Error + Send + Sync + 'static {
	text.parse().map_err(|e| ParseError::Value { line, text: text.to_owned(), source: Box::new(e) })
}


pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
	std::fs::read_to_string(path)
		.with_context(|| format!("Cannot read input {}", path.display()))
}


/// Returned by a part whose answer the published sample does not
/// exercise; the runner skips it.
#[derive(Debug, thiserror::Error)]
#[error("The sample has no answer for this part")]
pub(crate) struct NoSample;


/// Puzzle text plus whether it is a published sample, which some puzzles
/// solve with smaller constants.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Input<'a> {
	pub(crate) text: &'a str,
	pub(crate) test: bool,
}

impl<'a> Input<'a> {
	pub(crate) fn new(text: &'a str) -> Self {
		Self { text, test: false }
	}

	pub(crate) fn sample(text: &'a str) -> Self {
		Self { text, test: true }
	}

	/// Lines paired with their 1-based number.
	pub(crate) fn numbered_lines(&self, strip_empty: bool) -> impl Iterator<Item = (usize, &'a str)> {
		self.text.lines()
			.enumerate()
			.map(|(l, line)| (l + 1, line))
			.filter(move |(_, line)| !strip_empty || !line.is_empty())
	}

	pub(crate) fn lines(&self, strip_empty: bool) -> impl Iterator<Item = &'a str> {
		self.numbered_lines(strip_empty).map(|(_, line)| line)
	}

	/// Groups of lines separated by blank lines.
	pub(crate) fn multilines(&self) -> Vec<Vec<&'a str>> {
		let mut groups = vec![];
		let mut group = vec![];
		for line in self.lines(false) {
			if !line.is_empty() {
				group.push(line);
			} else if !group.is_empty() {
				groups.push(std::mem::take(&mut group));
			}
		}
		if !group.is_empty() { groups.push(group) }
		groups
	}

	pub(crate) fn multilines_joined(&self, sep: &str) -> Vec<String> {
		self.multilines().into_iter().map(|group| group.join(sep)).collect()
	}

	/// One value per non-empty line.
	pub(crate) fn list_int<T>(&self) -> Result<Vec<T>, ParseError>
	where T: FromStr, T::Err: Error + Send + Sync + 'static {
		self.numbered_lines(true)
			.map(|(l, line)| parse_value(l, line.trim()))
			.collect()
	}

	/// The first non-empty line as a `sep`-separated list.
	pub(crate) fn csv_int<T>(&self, sep: char) -> Result<Vec<T>, ParseError>
	where T: FromStr, T::Err: Error + Send + Sync + 'static {
		let (l, line) = self.numbered_lines(true).next().ok_or(ParseError::End)?;
		csv_line(l, line, sep)
	}

	pub(crate) fn csv_int_multiline<T>(&self, sep: char) -> Result<Vec<Vec<T>>, ParseError>
	where T: FromStr, T::Err: Error + Send + Sync + 'static {
		self.numbered_lines(true)
			.map(|(l, line)| csv_line(l, line, sep))
			.collect()
	}
}

fn csv_line<T>(l: usize, line: &str, sep: char) -> Result<Vec<T>, ParseError>
where T: FromStr, T::Err: Error + Send + Sync + 'static {
	line.trim().split(sep).map(|value| parse_value(l, value.trim())).collect()
}


#[cfg(test)]
mod tests {
	use super::*;

	const TEXT: &str = indoc::indoc! { "
		1000
		2000

		3000
		-4
	" };

	#[test]
	fn lines() {
		let input = Input::new(TEXT);
		assert_eq!(input.lines(true).count(), 4);
		assert_eq!(input.lines(false).count(), 5);
		assert_eq!(input.multilines(), [vec!["1000", "2000"], vec!["3000", "-4"]]);
		assert_eq!(input.multilines_joined("+"), ["1000+2000", "3000+-4"]);
		assert_eq!(Input::new("a\r\nb\r\n").lines(true).collect::<Vec<_>>(), ["a", "b"]);
	}

	#[test]
	fn ints() {
		let input = Input::new(TEXT);
		assert_eq!(input.list_int::<i32>().unwrap(), [1000, 2000, 3000, -4]);
		assert!(matches!(input.list_int::<u32>(), Err(ParseError::Value { line: 5, .. })));

		let input = Input::new("1,2, 3\n4,5,6\n");
		assert_eq!(input.csv_int::<u8>(',').unwrap(), [1, 2, 3]);
		assert_eq!(input.csv_int_multiline::<u8>(',').unwrap(), [[1, 2, 3], [4, 5, 6]]);
		assert!(matches!(Input::new("\n").csv_int::<u8>(','), Err(ParseError::End)));
		assert!(matches!(Input::new("1;x").csv_int::<u8>(';'), Err(ParseError::Value { line: 1, .. })));
	}
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::{Index, IndexMut};


/// `[x, y]`, with `y` growing southward.
pub(crate) type Pos = [usize; 2];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub(crate) enum Dir { North, East, South, West }

impl Dir {
	pub(crate) const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

	pub(crate) fn right(self) -> Self {
		use Dir::*;
		match self { North => East, East => South, South => West, West => North }
	}

	pub(crate) fn left(self) -> Self {
		self.right().inv()
	}

	pub(crate) fn inv(self) -> Self {
		use Dir::*;
		match self { North => South, East => West, South => North, West => East }
	}

	pub(crate) fn delta(self) -> [isize; 2] {
		use Dir::*;
		match self { North => [0, -1], East => [1, 0], South => [0, 1], West => [-1, 0] }
	}

	/// One step from an unbounded position.
	pub(crate) fn offset(self, [x, y]: [isize; 2]) -> [isize; 2] {
		let [dx, dy] = self.delta();
		[x + dx, y + dy]
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum GridError {
	#[error("Empty grid")]
	Empty,
	#[error("Line {line} has width {found}, expected {expected}")]
	Ragged { line: usize, expected: usize, found: usize },
	#[error("Line {line}, column {column}: unexpected {found:?}")]
	Cell { line: usize, column: usize, found: char },
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Grid<T> {
	cells: Vec<T>,
	width: usize,
	height: usize,
}

impl<T> Grid<T> {
	/// Parses non-empty lines of characters; `cell` rejects a character by
	/// returning `None`.
	pub(crate) fn try_parse(s: &str, mut cell: impl FnMut(char) -> Option<T>) -> Result<Self, GridError> {
		let mut cells = vec![];
		let mut width = None;
		let mut height = 0;
		for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
			let mut found = 0;
			for (c, chr) in line.chars().enumerate() {
				cells.push(cell(chr).ok_or(GridError::Cell { line: l + 1, column: c + 1, found: chr })?);
				found += 1;
			}
			match width {
				None => width = Some(found),
				Some(expected) if expected != found =>
					return Err(GridError::Ragged { line: l + 1, expected, found }),
				_ => (),
			}
			height += 1;
		}
		let width = width.filter(|&w| w > 0).ok_or(GridError::Empty)?;
		Ok(Self { cells, width, height })
	}

	pub(crate) fn from_fn(width: usize, height: usize, mut cell: impl FnMut(Pos) -> T) -> Self {
		let cells = (0..height)
			.flat_map(|y| (0..width).map(move |x| [x, y]))
			.map(&mut cell)
			.collect();
		Self { cells, width, height }
	}

	pub(crate) fn width(&self) -> usize {
		self.width
	}

	pub(crate) fn height(&self) -> usize {
		self.height
	}

	pub(crate) fn get(&self, [x, y]: Pos) -> Option<&T> {
		(x < self.width && y < self.height).then(|| &self.cells[y * self.width + x])
	}

	pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
		let width = self.width;
		(0..self.cells.len()).map(move |i| [i % width, i / width])
	}

	pub(crate) fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
		self.positions().zip(self.cells.iter())
	}

	pub(crate) fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Pos> {
		self.iter().find_map(|(pos, cell)| pred(cell).then_some(pos))
	}

	pub(crate) fn step(&self, [x, y]: Pos, dir: Dir) -> Option<Pos> {
		let [dx, dy] = dir.delta();
		let x = x.checked_add_signed(dx).filter(|&x| x < self.width)?;
		let y = y.checked_add_signed(dy).filter(|&y| y < self.height)?;
		Some([x, y])
	}

	/// In-bounds orthogonal neighbours and the direction towards them.
	pub(crate) fn neighbours(&self, pos: Pos) -> impl Iterator<Item = (Pos, Dir)> + '_ {
		Dir::ALL.into_iter().filter_map(move |dir| self.step(pos, dir).map(|p| (p, dir)))
	}

	pub(crate) fn corner(&self) -> Pos {
		[self.width - 1, self.height - 1]
	}
}

impl<T> Index<Pos> for Grid<T> {
	type Output = T;
	fn index(&self, [x, y]: Pos) -> &Self::Output {
		assert!(x < self.width, "x {x} out of bounds");
		&self.cells[y * self.width + x]
	}
}

impl<T> IndexMut<Pos> for Grid<T> {
	fn index_mut(&mut self, [x, y]: Pos) -> &mut Self::Output {
		assert!(x < self.width, "x {x} out of bounds");
		&mut self.cells[y * self.width + x]
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse() {
		let grid = Grid::try_parse("12\n34\n56\n", |c| c.to_digit(10)).unwrap();
		assert_eq!((grid.width(), grid.height(), grid.corner()), (2, 3, [1, 2]));
		assert_eq!(grid[[1, 1]], 4);
		assert_eq!(grid.get([2, 0]), None);
		assert_eq!(grid.find(|&d| d == 5), Some([0, 2]));
		assert!(matches!(Grid::try_parse("12\n3\n", |c| c.to_digit(10)),
			Err(GridError::Ragged { line: 2, expected: 2, found: 1 })));
		assert!(matches!(Grid::try_parse("1x\n", |c| c.to_digit(10)),
			Err(GridError::Cell { line: 1, column: 2, found: 'x' })));
		assert!(matches!(Grid::try_parse("\n", |c| c.to_digit(10)), Err(GridError::Empty)));
	}

	#[test]
	fn neighbours() {
		let grid = Grid::from_fn(3, 2, |[x, y]| x + 10 * y);
		assert_eq!(grid[[2, 1]], 12);
		assert_eq!(grid.neighbours([0, 0]).collect::<Vec<_>>(), [([1, 0], Dir::East), ([0, 1], Dir::South)]);
		assert_eq!(grid.neighbours([1, 1]).count(), 3);
		assert_eq!(grid.step([2, 1], Dir::East), None);
		assert_eq!(Dir::North.left(), Dir::West);
		assert_eq!(Dir::West.right(), Dir::North);
		assert_eq!(Dir::South.inv(), Dir::North);
		assert_eq!(Dir::West.offset([0, 0]), [-1, 0]);
		assert_eq!(Dir::South.offset([3, -2]), [3, -1]);
	}
}

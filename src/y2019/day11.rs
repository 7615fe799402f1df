// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{collections::HashMap, iter};
use itertools::Itertools as _;
use crate::{common::{Input, grid::Dir}, intcode::Vm};


/// Panel colors by position; `true` is white. Only painted panels (and the
/// starting panel) are present.
type Panels = HashMap<[isize; 2], bool>;

/// Runs the robot until its brain halts. Each cycle the brain reads the
/// current panel's color, then outputs the color to paint and whether to
/// turn right (`1`) or left (`0`) before moving one panel forward.
fn paint(program: &Vm, starting_white: bool) -> anyhow::Result<Panels> {
	let mut brain = program.clone();
	let mut panels = Panels::new();
	if starting_white { panels.insert([0, 0], true); }
	let (mut pos, mut dir) = ([0, 0], Dir::North);

	loop {
		let mut camera = iter::repeat(i64::from(panels.get(&pos).copied().unwrap_or(false)));
		let Some(color) = brain.run_until_output(&mut camera)? else { break };
		let turn = brain.run_until_output(&mut camera)?
			.ok_or_else(|| anyhow::anyhow!("Halted before turning at {pos:?}"))?;

		panels.insert(pos, match color {
			0 => false,
			1 => true,
			_ => anyhow::bail!("Unexpected color {color}"),
		});
		dir = match turn {
			0 => dir.left(),
			1 => dir.right(),
			_ => anyhow::bail!("Unexpected turn {turn}"),
		};
		pos = dir.offset(pos);
	}
	log::debug!("Painted {} panels, ended at {pos:?}", panels.len());
	Ok(panels)
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<usize> {
	Ok(paint(&Vm::parse(input.text)?, false)?.len())
}


/// The registration identifier, white panels as `#`.
pub(crate) fn part2(input: &Input) -> anyhow::Result<String> {
	let panels = paint(&Vm::parse(input.text)?, true)?;
	let white = panels.iter().filter(|&(_, &white)| white).map(|(&pos, _)| pos).collect::<Vec<_>>();
	let (Some((x0, x1)), Some((y0, y1))) = (
		white.iter().map(|&[x, _]| x).minmax().into_option(),
		white.iter().map(|&[_, y]| y).minmax().into_option(),
	) else { anyhow::bail!("Nothing painted white") };

	let mut image = String::new();
	for y in y0..=y1 {
		image.push('\n');
		image.extend((x0..=x1).map(|x| if panels.get(&[x, y]) == Some(&true) { '#' } else { '.' }));
	}
	Ok(image)
}


#[test]
fn tests() {
	// Four times: paint the inverse of the camera's color, then turn right.
	const SQUARE: &str = "3,23,1002,23,-1,23,1001,23,1,23,4,23,104,1,1001,22,-1,22,1005,22,0,99,4,0";
	assert_eq!(part1(&Input::sample(SQUARE)).unwrap(), 4);
	assert_eq!(part2(&Input::sample(SQUARE)).unwrap(), "\n.#\n##");

	let program = Vm::parse(SQUARE).unwrap();
	let panels = paint(&program, false).unwrap();
	assert!(panels.values().all(|&white| white));
	assert_eq!(panels.keys().copied().sorted().collect::<Vec<_>>(), [[0, 0], [0, 1], [1, 0], [1, 1]]);

	assert!(part1(&Input::sample("104,1,99")).is_err());
	assert!(part1(&Input::sample("104,2,104,0,99")).is_err());
	assert!(part1(&Input::sample("104,1,104,3,99")).is_err());
	assert!(part2(&Input::sample("104,0,104,0,99")).is_err());
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::common::{Input, input::{ParseError, parse_value}};


const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;
const FIRST_SIGNAL: usize = 20;
const NUM_SIGNALS: usize = 6;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Instr {
	Noop,
	Addx(i64),
}

fn parse(input: &Input) -> Result<Vec<Instr>, ParseError> {
	input.numbered_lines(true).map(|(l, line)| match line.trim() {
		"noop" => Ok(Instr::Noop),
		line => match line.strip_prefix("addx ") {
			Some(value) => parse_value(l, value).map(Instr::Addx),
			None => Err(ParseError::format(l, format!("bad instruction {line:?}"))),
		},
	}).collect()
}

/// The `X` register during each cycle, starting with the first.
fn x_during_cycles(program: &[Instr]) -> Vec<i64> {
	let mut x = 1;
	let mut values = Vec::with_capacity(2 * program.len());
	for instr in program {
		match *instr {
			Instr::Noop => values.push(x),
			Instr::Addx(value) => {
				values.extend([x, x]);
				x += value;
			}
		}
	}
	values
}


/// Sum of the signal strengths during the 20th cycle and every 40 after.
pub(crate) fn part1(input: &Input) -> anyhow::Result<i64> {
	let values = x_during_cycles(&parse(input)?);
	anyhow::ensure!(values.len() >= FIRST_SIGNAL + (NUM_SIGNALS - 1) * SCREEN_WIDTH,
		"Program only runs {} cycles", values.len());
	Ok(values.iter()
		.enumerate()
		.skip(FIRST_SIGNAL - 1)
		.step_by(SCREEN_WIDTH)
		.take(NUM_SIGNALS)
		.inspect(|(i, x)| log::debug!("{}: {x}", i + 1))
		.map(|(i, x)| (i + 1) as i64 * x)
		.sum())
}


/// The CRT image, one line per row, lit pixels as `#`.
pub(crate) fn part2(input: &Input) -> anyhow::Result<String> {
	let values = x_during_cycles(&parse(input)?);
	anyhow::ensure!(values.len() >= SCREEN_WIDTH * SCREEN_HEIGHT,
		"Program only runs {} cycles", values.len());
	let mut image = String::with_capacity((SCREEN_WIDTH + 1) * SCREEN_HEIGHT);
	for (i, x) in values.iter().take(SCREEN_WIDTH * SCREEN_HEIGHT).enumerate() {
		let column = (i % SCREEN_WIDTH) as i64;
		if column == 0 { image.push('\n') }
		image.push(if (x - column).abs() <= 1 { '#' } else { '.' });
	}
	Ok(image)
}


#[test]
fn tests() {
	const INPUT: &str = include_str!("../../data/2022/day_10_test.txt");
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 13140);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), indoc::indoc! { "

		##..##..##..##..##..##..##..##..##..##..
		###...###...###...###...###...###...###.
		####....####....####....####....####....
		#####.....#####.....#####.....#####.....
		######......######......######......####
		#######.......#######.......#######....." });

	let program = parse(&Input::sample("noop\naddx 3\naddx -5\n")).unwrap();
	assert_eq!(x_during_cycles(&program), [1, 1, 1, 4, 4]);
	assert!(part1(&Input::sample("noop\naddx 3\naddx -5\n")).is_err());
	assert!(parse(&Input::sample("addx\n")).is_err());
}

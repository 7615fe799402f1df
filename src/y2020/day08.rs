// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::common::Input;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Op { Acc, Jmp, Nop }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Instr {
	op: Op,
	arg: i64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Exit {
	/// About to run an instruction a second time.
	Loop { acc: i64 },
	/// Jumped to just past the last instruction.
	Completed { acc: i64 },
	/// Jumped anywhere else outside the program.
	OutOfBounds { ip: i64 },
}

/// Runs `program` until it exits; also returns which instructions ran.
fn run(program: &[Instr]) -> (Exit, Vec<bool>) {
	let mut ran = vec![false; program.len()];
	let (mut ip, mut acc) = (0_i64, 0);
	loop {
		let Some(i) = usize::try_from(ip).ok().filter(|&i| i <= program.len()) else {
			return (Exit::OutOfBounds { ip }, ran)
		};
		if i == program.len() { return (Exit::Completed { acc }, ran) }
		if std::mem::replace(&mut ran[i], true) { return (Exit::Loop { acc }, ran) }

		let Instr { op, arg } = program[i];
		log::trace!("{ip}: {acc}: {op:?} {arg:+}");
		match op {
			Op::Acc => { acc += arg; ip += 1 }
			Op::Jmp => ip += arg,
			Op::Nop => ip += 1,
		}
	}
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<i64> {
	match run(&parsing::program(input)?).0 {
		Exit::Loop { acc } => Ok(acc),
		exit => Err(anyhow::anyhow!("Program did not loop: {exit:?}")),
	}
}


/// Swaps one `jmp` or `nop` that the looping program ran, until the program
/// completes.
pub(crate) fn part2(input: &Input) -> anyhow::Result<i64> {
	let mut program = parsing::program(input)?;
	let (_, ran) = run(&program);
	for i in (0..program.len()).filter(|&i| ran[i]) {
		let orig = program[i].op;
		program[i].op = match orig {
			Op::Jmp => Op::Nop,
			Op::Nop => Op::Jmp,
			Op::Acc => continue,
		};
		match run(&program).0 {
			Exit::Completed { acc } => {
				log::debug!("Swapping {orig:?} at {i} completes");
				return Ok(acc)
			}
			exit => log::debug!("Swapping {orig:?} at {i}: {exit:?}"),
		}
		program[i].op = orig;
	}
	Err(anyhow::anyhow!("No single swap completes the program"))
}


mod parsing {
	use crate::common::{Input, input::{ParseError, parse_value}};
	use super::{Instr, Op};

	pub(super) fn program(input: &Input) -> Result<Vec<Instr>, ParseError> {
		input.numbered_lines(true).map(|(l, line)| {
			let (op, arg) = line.trim().split_once(' ')
				.ok_or_else(|| ParseError::format(l, "expected operation and argument"))?;
			let op = match op {
				"acc" => Op::Acc,
				"jmp" => Op::Jmp,
				"nop" => Op::Nop,
				_ => return Err(ParseError::format(l, format!("unknown operation {op:?}"))),
			};
			Ok(Instr { op, arg: parse_value(l, arg)? })
		}).collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		nop +0
		acc +1
		jmp +4
		acc +3
		jmp -3
		acc -99
		acc +1
		jmp -4
		acc +6
	" };
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 5);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), 8);

	let program = parsing::program(&Input::new("acc +2\njmp -3\n")).unwrap();
	assert_eq!(run(&program).0, Exit::OutOfBounds { ip: -2 });
	assert!(part1(&Input::new("acc +2\nnop +0\n")).is_err());
	assert!(part2(&Input::new("jmp +0\nacc +1\njmp -1\n")).is_err());
	assert!(part1(&Input::new("mul +2\n")).is_err());
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::common::Input;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Reg { A, B }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Instr {
	Hlf(Reg),
	Tpl(Reg),
	Inc(Reg),
	Jmp(isize),
	Jie(Reg, isize),
	Jio(Reg, isize),
}

struct Computer<'a> {
	program: &'a [Instr],
	regs: [u64; 2],
	ip: usize,
}

impl<'a> Computer<'a> {
	fn new(program: &'a [Instr], a: u64) -> Self {
		Self { program, regs: [a, 0], ip: 0 }
	}

	fn reg(&mut self, reg: Reg) -> &mut u64 {
		&mut self.regs[reg as usize]
	}

	/// Runs until the instruction pointer leaves the program.
	fn run(mut self) -> [u64; 2] {
		use Instr::*;
		while let Some(&instr) = self.program.get(self.ip) {
			log::trace!("{}: {instr:?} {:?}", self.ip, self.regs);
			let offset = match instr {
				Hlf(r) => { *self.reg(r) /= 2; 1 }
				Tpl(r) => { *self.reg(r) *= 3; 1 }
				Inc(r) => { *self.reg(r) += 1; 1 }
				Jmp(offset) => offset,
				Jie(r, offset) => if *self.reg(r) % 2 == 0 { offset } else { 1 },
				Jio(r, offset) => if *self.reg(r) == 1 { offset } else { 1 },
			};
			let Some(ip) = self.ip.checked_add_signed(offset) else { break };
			self.ip = ip;
		}
		self.regs
	}
}


/// The sample's answer is in register `a`, the real one's in `b`.
fn run(input: &Input, a: u64) -> anyhow::Result<u64> {
	let program = parsing::program(input)?;
	let answer = if input.test { Reg::A } else { Reg::B };
	Ok(Computer::new(&program, a).run()[answer as usize])
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<u64> {
	run(input, 0)
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<u64> {
	run(input, 1)
}


mod parsing {
	use std::str::FromStr;
	use crate::common::{Input, input::{ParseError, parse_value}};
	use super::{Instr, Reg};

	impl FromStr for Reg {
		type Err = ();
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s {
				"a" => Ok(Reg::A),
				"b" => Ok(Reg::B),
				_ => Err(()),
			}
		}
	}

	fn instr(l: usize, line: &str) -> Result<Instr, ParseError> {
		let (mnemonic, operands) = line.split_once(' ')
			.ok_or_else(|| ParseError::format(l, "missing operands"))?;
		let reg = |s: &str| s.parse::<Reg>()
			.map_err(|()| ParseError::format(l, format!("unknown register {s:?}")));
		let reg_offset = || {
			let (r, offset) = operands.split_once(", ")
				.ok_or_else(|| ParseError::format(l, "expected register and offset"))?;
			Ok::<_, ParseError>((reg(r)?, parse_value::<isize>(l, offset)?))
		};
		match mnemonic {
			"hlf" => Ok(Instr::Hlf(reg(operands)?)),
			"tpl" => Ok(Instr::Tpl(reg(operands)?)),
			"inc" => Ok(Instr::Inc(reg(operands)?)),
			"jmp" => Ok(Instr::Jmp(parse_value(l, operands)?)),
			"jie" => reg_offset().map(|(r, offset)| Instr::Jie(r, offset)),
			"jio" => reg_offset().map(|(r, offset)| Instr::Jio(r, offset)),
			_ => Err(ParseError::format(l, format!("illegal instruction {mnemonic:?}"))),
		}
	}

	pub(super) fn program(input: &Input) -> Result<Vec<Instr>, ParseError> {
		input.numbered_lines(true).map(|(l, line)| instr(l, line.trim())).collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		inc a
		jio a, +2
		tpl a
		inc a
	" };
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 2);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), 7);

	const COLLATZ: &str = indoc::indoc! { "
		jio a, +8
		inc b
		jie a, +4
		tpl a
		inc a
		jmp +2
		hlf a
		jmp -7
	" };
	assert_eq!(part2(&Input::new(COLLATZ)).unwrap(), 0);
	let program = parsing::program(&Input::new(COLLATZ)).unwrap();
	assert_eq!(Computer::new(&program, 3).run(), [1, 7]);

	assert!(part1(&Input::sample("dec a")).is_err());
	assert!(part1(&Input::sample("inc c")).is_err());
	assert!(part1(&Input::sample("jie a +2")).is_err());
}

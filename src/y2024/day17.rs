// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::common::{Input, heapq::SetHeapQ};


const MAX_STEPS: usize = 1_000_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Reg { A, B, C }

#[derive(Debug, thiserror::Error)]
enum Fault {
	#[error("Reserved combo operand 7 at {ip}")]
	ReservedOperand { ip: usize },
	#[error("Missing operand at {ip}")]
	MissingOperand { ip: usize },
	#[error("Still running after {} steps", MAX_STEPS)]
	Runaway,
}

#[derive(Clone, Debug)]
struct Computer<'a> {
	program: &'a [u8],
	regs: [u64; 3],
	ip: usize,
}

impl<'a> Computer<'a> {
	fn new(program: &'a [u8], regs: [u64; 3]) -> Self {
		Self { program, regs, ip: 0 }
	}

	fn reg(&mut self, reg: Reg) -> &mut u64 {
		&mut self.regs[reg as usize]
	}

	fn combo(&self, operand: u8) -> Result<u64, Fault> {
		match operand {
			0..=3 => Ok(operand.into()),
			4..=6 => Ok(self.regs[usize::from(operand - 4)]),
			_ => Err(Fault::ReservedOperand { ip: self.ip }),
		}
	}

	fn divide(&self, operand: u8) -> Result<u64, Fault> {
		let shift = u32::try_from(self.combo(operand)?).unwrap_or(u32::MAX);
		Ok(self.regs[Reg::A as usize].checked_shr(shift).unwrap_or(0))
	}

	/// Executes one instruction; `None` once halted.
	fn step(&mut self) -> Result<Option<Option<u8>>, Fault> {
		let Some(&opcode) = self.program.get(self.ip) else { return Ok(None) };
		let &operand = self.program.get(self.ip + 1)
			.ok_or(Fault::MissingOperand { ip: self.ip })?;
		let mut output = None;
		let mut next = self.ip + 2;
		match opcode {
			0 => *self.reg(Reg::A) = self.divide(operand)?,
			1 => *self.reg(Reg::B) ^= u64::from(operand),
			2 => *self.reg(Reg::B) = self.combo(operand)? % 8,
			3 => if self.regs[Reg::A as usize] != 0 { next = operand.into() },
			4 => *self.reg(Reg::B) ^= self.regs[Reg::C as usize],
			5 => output = Some((self.combo(operand)? % 8) as u8),
			6 => *self.reg(Reg::B) = self.divide(operand)?,
			_ => *self.reg(Reg::C) = self.divide(operand)?,
		}
		self.ip = next;
		Ok(Some(output))
	}

	fn run(mut self) -> Result<Vec<u8>, Fault> {
		let mut outputs = vec![];
		for _ in 0..MAX_STEPS {
			match self.step()? {
				None => return Ok(outputs),
				Some(output) => outputs.extend(output),
			}
		}
		Err(Fault::Runaway)
	}
}


struct Debugger {
	regs: [u64; 3],
	program: Vec<u8>,
}

impl Debugger {
	fn run(&self, a: u64) -> Result<Vec<u8>, Fault> {
		let [_, b, c] = self.regs;
		Computer::new(&self.program, [a, b, c]).run()
	}

	/// How many bits the program shifts out of `A` per loop, assuming it
	/// loops back to the start while `A` is not zero.
	fn shift(&self) -> anyhow::Result<u32> {
		anyhow::ensure!(self.program.ends_with(&[3, 0]), "Program does not loop back to its start");
		let shifts = self.program.chunks(2)
			.filter_map(|instr| match *instr {
				[0, operand @ 1..=3] => Some(u32::from(operand)),
				_ => None,
			})
			.collect::<Vec<_>>();
		match shifts[..] {
			[shift] => Ok(shift),
			_ => Err(anyhow::anyhow!("Program does not shift A by one constant amount")),
		}
	}

	/// The lowest `A` for which the program outputs itself. Builds `A` up
	/// from its highest bits, each time checking that the output matches
	/// the tail of the program; smaller candidates are tried first.
	fn lowest_quine(&self) -> anyhow::Result<u64> {
		let shift = self.shift()?;
		let mut candidates = SetHeapQ::new();
		candidates.push((self.program.len(), 0_u64));
		while let Some((remaining, a)) = candidates.pop() {
			if remaining == 0 { return Ok(a) }
			let tail = &self.program[remaining - 1..];
			for low in 0..1 << shift {
				let Some(next) = a.checked_shl(shift).map(|a| a | low) else { continue };
				if self.run(next)? == tail { candidates.push((remaining - 1, next)); }
			}
			log::trace!("{} candidates after {a}", candidates.len());
		}
		Err(anyhow::anyhow!("No value of A makes the program output itself"))
	}
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<String> {
	let debugger = parsing::debugger(input)?;
	let [a, _, _] = debugger.regs;
	Ok(debugger.run(a)?.into_iter().join(","))
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<u64> {
	parsing::debugger(input)?.lowest_quine()
}


mod parsing {
	use crate::common::{Input, input::{ParseError, parse_value}};
	use super::Debugger;

	pub(super) fn debugger(input: &Input) -> Result<Debugger, ParseError> {
		let mut lines = input.numbered_lines(true);
		let mut regs = [0; 3];
		for (reg, name) in regs.iter_mut().zip(["A", "B", "C"]) {
			let (l, line) = lines.next().ok_or(ParseError::End)?;
			let value = line.strip_prefix("Register ")
				.and_then(|line| line.strip_prefix(name))
				.and_then(|line| line.strip_prefix(": "))
				.ok_or_else(|| ParseError::format(l, format!("expected register {name}")))?;
			*reg = parse_value(l, value.trim())?;
		}
		let (l, line) = lines.next().ok_or(ParseError::End)?;
		let program = line.strip_prefix("Program: ")
			.ok_or_else(|| ParseError::format(l, "expected program"))?
			.trim()
			.split(',')
			.map(|value| parse_value::<u8>(l, value).and_then(|value| match value {
				0..=7 => Ok(value),
				_ => Err(ParseError::format(l, format!("{value} is not 3-bit"))),
			}))
			.collect::<Result<_, _>>()?;
		Ok(Debugger { regs, program })
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			Register A: 729
			Register B: 0
			Register C: 0

			Program: 0,1,5,4,3,0
		" },
		indoc::indoc! { "
			Register A: 2024
			Register B: 0
			Register C: 0

			Program: 0,3,5,4,3,0
		" },
	];
	assert_eq!(part1(&Input::sample(INPUTS[0])).unwrap(), "4,6,3,5,6,3,5,2,1,0");
	assert_eq!(part2(&Input::sample(INPUTS[1])).unwrap(), 117440);
	assert!(part2(&Input::sample(INPUTS[0])).is_err());

	let run = |regs, program: &[u8]| {
		let mut computer = Computer::new(program, regs);
		let mut outputs = vec![];
		while let Some(output) = computer.step().unwrap() { outputs.extend(output) }
		(computer.regs, outputs)
	};
	assert_eq!(run([0, 0, 9], &[2, 6]).0[1], 1);
	assert_eq!(run([10, 0, 0], &[5, 0, 5, 1, 5, 4]).1, [0, 1, 2]);
	assert_eq!(run([2024, 0, 0], &[0, 1, 5, 4, 3, 0]), ([0, 0, 0], vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]));
	assert_eq!(run([0, 29, 0], &[1, 7]).0[1], 26);
	assert_eq!(run([0, 2024, 43690], &[4, 0]).0[1], 44354);

	assert!(matches!(Computer::new(&[5, 7], [0; 3]).run(), Err(Fault::ReservedOperand { ip: 0 })));
	assert!(matches!(Computer::new(&[1], [0; 3]).run(), Err(Fault::MissingOperand { ip: 0 })));
	assert!(matches!(Computer::new(&[3, 0], [1, 0, 0]).run(), Err(Fault::Runaway)));
	assert!(part1(&Input::sample("Register A: 1\nRegister B: 0\n")).is_err());
	assert!(part1(&Input::sample("Register A: 1\nRegister B: 0\nRegister C: 0\nProgram: 0,8\n")).is_err());
}

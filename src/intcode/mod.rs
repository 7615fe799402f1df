// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! The “Intcode computer” of the 2019 puzzles (days 2, 5, 7, 9 and 23):
//! - position (`Pos`), immediate (`Imm`), and relative (`Rel`) parameter modes;
//! - extended memory beyond the base program;
//! - generic `Num` support, for arbitrary precision in day 9;
//! - a threaded runner wired up with channels (see `thread`).

mod num;
pub(crate) mod parsing;
pub(crate) mod thread;

use std::{collections::HashMap, ops::Index};
use log::trace;

pub(crate) use num::{BigNum, IntNum};
pub(crate) use parsing::ProgramError;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum ParMode { Pos, Imm, Rel }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum ArgPos { First, Second, Third }

impl<T> Index<ArgPos> for [T] {
	type Output = T;
	fn index(&self, index: ArgPos) -> &Self::Output {
		match index {
			ArgPos::First => &self[0],
			ArgPos::Second => &self[1],
			ArgPos::Third => &self[2],
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Op {
	Add([ParMode; 3]),
	Mul([ParMode; 3]),
	In(ParMode),
	Out(ParMode),
	JumpIf(bool, [ParMode; 2]),
	Lt([ParMode; 3]),
	Eq([ParMode; 3]),
	RelAdj(ParMode),
	Halt,
}

impl Op {
	fn len(&self) -> usize {
		use Op::*;
		match self {
			Add(_) | Mul(_) | Lt(_) | Eq(_) => 4,
			JumpIf(_, _) => 3,
			In(_) | Out(_) | RelAdj(_) => 2,
			Halt => 1,
		}
	}
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum Step<Num> {
	Continue,
	Output(Num),
	Halted,
}

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub(crate) enum Fault {
	#[error("Invalid instruction {int} at position {pos}")]
	Decode { pos: usize, int: String, #[source] source: parsing::OpError },
	#[error("Invalid address {addr} used at position {pos}")]
	Address { pos: usize, addr: String },
	#[error("Unexpected end of input at position {pos}")]
	Input { pos: usize },
}


/// Memory is the program followed by sparse extended memory; unwritten
/// cells read as zero.
#[derive(Clone, Debug)]
pub(crate) struct Vm<Num = i64> {
	memory: Vec<Num>,
	ext_memory: HashMap<usize, Num>,
	ip: usize,
	rel_base: i64,
}

impl<Num: IntNum> Vm<Num> {
	pub(crate) fn new(program: Vec<Num>) -> Self {
		Self { memory: program, ext_memory: HashMap::new(), ip: 0, rel_base: 0 }
	}

	pub(crate) fn parse(s: &str) -> Result<Self, ProgramError> {
		parsing::parse_program(s).map(Self::new)
	}

	/// The base program's memory (not the extension).
	pub(crate) fn memory(&self) -> &[Num] {
		&self.memory
	}

	pub(crate) fn read(&self, addr: usize) -> Num {
		match self.memory.get(addr) {
			Some(num) => num.clone(),
			None => self.ext_memory.get(&addr).cloned().unwrap_or_default(),
		}
	}

	pub(crate) fn write(&mut self, addr: usize, num: Num) {
		match self.memory.get_mut(addr) {
			Some(cell) => *cell = num,
			None => { self.ext_memory.insert(addr, num); }
		}
	}

	fn op(&self) -> Result<Op, Fault> {
		let int = self.read(self.ip);
		let decode_err = |source| Fault::Decode { pos: self.ip, int: int.to_string(), source };
		let code = int.to_i64().ok_or_else(|| decode_err(parsing::OpError::Op(None)))?;
		Op::try_from(code).map_err(decode_err)
	}

	fn as_addr(&self, addr: Option<i64>, raw: impl FnOnce() -> String) -> Result<usize, Fault> {
		addr.and_then(|addr| usize::try_from(addr).ok())
			.ok_or_else(|| Fault::Address { pos: self.ip, addr: raw() })
	}

	/// Address of the parameter at `ip + offset`.
	fn address(&self, offset: usize, par_mode: ParMode) -> Result<usize, Fault> {
		let par_pos = self.ip + offset;
		let par = self.read(par_pos);
		match par_mode {
			ParMode::Imm => Ok(par_pos),
			ParMode::Pos => self.as_addr(par.to_i64(), || par.to_string()),
			ParMode::Rel => self.as_addr(
				par.to_i64().and_then(|delta| self.rel_base.checked_add(delta)),
				|| format!("{}{:+}", self.rel_base, par)),
		}
	}

	fn load(&self, offset: usize, par_mode: ParMode) -> Result<Num, Fault> {
		Ok(self.read(self.address(offset, par_mode)?))
	}

	pub(crate) fn is_halted(&self) -> bool {
		matches!(self.op(), Ok(Op::Halt))
	}

	/// Executes one instruction. `input` is only called by an input
	/// instruction; when it returns `None` the instruction is not consumed.
	pub(crate) fn step(&mut self, input: impl FnOnce() -> Option<Num>) -> Result<Step<Num>, Fault> {
		use {ArgPos::*, Op::*};

		let op = self.op()?;
		trace!("{}: {op:?}", self.ip);
		match op {
			Add(par_modes) | Mul(par_modes) | Lt(par_modes) | Eq(par_modes) => {
				let arg0 = self.load(1, par_modes[First])?;
				let arg1 = self.load(2, par_modes[Second])?;
				let dest = self.address(3, par_modes[Third])?;
				let num = match op {
					Add(_) => arg0 + arg1,
					Mul(_) => arg0 * arg1,
					Lt(_) => Num::from(arg0 < arg1),
					Eq(_) => Num::from(arg0 == arg1),
					_ => unreachable!(),
				};
				self.write(dest, num);
			}
			In(par_mode) => {
				let dest = self.address(1, par_mode)?;
				let num = input().ok_or(Fault::Input { pos: self.ip })?;
				self.write(dest, num);
			}
			Out(par_mode) => {
				let num = self.load(1, par_mode)?;
				self.ip += op.len();
				return Ok(Step::Output(num))
			}
			JumpIf(flag, par_modes) => {
				if (self.load(1, par_modes[First])? != Num::default()) == flag {
					let dest = self.load(2, par_modes[Second])?;
					self.ip = self.as_addr(dest.to_i64(), || dest.to_string())?;
					return Ok(Step::Continue)
				}
			}
			RelAdj(par_mode) => {
				let delta = self.load(1, par_mode)?;
				self.rel_base = delta.to_i64()
					.and_then(|delta| self.rel_base.checked_add(delta))
					.ok_or_else(|| Fault::Address { pos: self.ip, addr: format!("{}{:+}", self.rel_base, delta) })?;
			}
			Halt => return Ok(Step::Halted),
		}
		self.ip += op.len();
		Ok(Step::Continue)
	}

	/// Runs until the next output (`Some`) or until halted (`None`).
	pub(crate) fn run_until_output(&mut self, input: &mut impl Iterator<Item = Num>) -> Result<Option<Num>, Fault> {
		loop {
			match self.step(|| input.next())? {
				Step::Continue => (),
				Step::Output(num) => return Ok(Some(num)),
				Step::Halted => return Ok(None),
			}
		}
	}

	/// Lazily yields outputs; stops after halting or after the first fault.
	pub(crate) fn execute<'a>(&'a mut self, input: impl IntoIterator<Item = Num> + 'a)
	-> impl Iterator<Item = Result<Num, Fault>> + 'a {
		let mut input = input.into_iter();
		let mut done = false;
		std::iter::from_fn(move || {
			if done { return None }
			let output = self.run_until_output(&mut input).transpose();
			done = !matches!(output, Some(Ok(_)));
			output
		})
	}

	/// Runs until halted, collecting all outputs.
	pub(crate) fn run(&mut self, input: impl IntoIterator<Item = Num>) -> Result<Vec<Num>, Fault> {
		self.execute(input).collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn run(program: &str, input: &[i64]) -> Result<Vec<i64>, Fault> {
		Vm::parse(program).unwrap().run(input.iter().copied())
	}

	#[test]
	fn add_mul() {
		let mut vm = Vm::<i64>::parse("1,1,1,4,99,5,6,0,99").unwrap();
		assert_eq!(vm.run([]), Ok(vec![]));
		assert_eq!(vm.memory(), [30, 1, 1, 4, 2, 5, 6, 0, 99]);
		assert!(vm.is_halted());

		let mut vm = Vm::<i64>::parse("1002,4,3,4,33").unwrap();
		assert_eq!(vm.run([]), Ok(vec![]));
		assert_eq!(vm.memory(), [1002, 4, 3, 4, 99]);
	}

	#[test]
	fn io_and_jumps() {
		assert_eq!(run("3,0,4,0,99", &[42]), Ok(vec![42]));
		assert_eq!(run("3,9,8,9,10,9,4,9,99,-1,8", &[8]), Ok(vec![1]));
		assert_eq!(run("3,3,1107,-1,8,3,4,3,99", &[9]), Ok(vec![0]));
		assert_eq!(run("3,12,6,12,15,1,13,14,13,4,13,99,-1,0,1,9", &[0]), Ok(vec![0]));
		assert_eq!(run("3,3,1105,-1,9,1101,0,0,12,4,12,99,1", &[5]), Ok(vec![1]));
	}

	#[test]
	fn relative_and_extended() {
		const QUINE: &str = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";
		let quine = QUINE.split(',').map(|i| i.parse().unwrap()).collect::<Vec<i64>>();
		assert_eq!(run(QUINE, &[]), Ok(quine));

		let mut vm = Vm::<i64>::parse("109,5,21101,3,4,1000,204,1000,99").unwrap();
		assert_eq!(vm.run([]), Ok(vec![7]));
		assert_eq!(vm.read(1005), 7);
		assert_eq!(vm.read(5000), 0);
	}

	#[test]
	fn faults() {
		assert!(matches!(run("3,0,99", &[]), Err(Fault::Input { pos: 0 })));
		assert!(matches!(run("4,-1,99", &[]), Err(Fault::Address { pos: 0, .. })));
		assert!(matches!(run("42", &[]),
			Err(Fault::Decode { pos: 0, source: parsing::OpError::Op(Some(42)), .. })));
		assert!(matches!(run("1101,1,1,0,99", &[]), Ok(_)));
		assert_eq!(run("199", &[]), Ok(vec![]));
		assert_eq!(run("104,7,1099", &[]), Ok(vec![7]));
		assert!(matches!(run("11101,1,1,0,99", &[]),
			Err(Fault::Decode { source: parsing::OpError::ImmWrite(ArgPos::Third), .. })));
		assert!(matches!(run("303,0,99", &[1]),
			Err(Fault::Decode { source: parsing::OpError::ParMode { mode: 3, arg: ArgPos::First }, .. })));
	}

	#[test]
	fn execute_lazily() {
		let mut vm = Vm::<i64>::parse("104,1,104,2,3,0,99").unwrap();
		let mut outputs = vm.execute([]);
		assert_eq!(outputs.next(), Some(Ok(1)));
		assert_eq!(outputs.next(), Some(Ok(2)));
		assert!(matches!(outputs.next(), Some(Err(Fault::Input { pos: 4 }))));
		assert_eq!(outputs.next(), None);
	}
}

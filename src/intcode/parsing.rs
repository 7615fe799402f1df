// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::mem;
use super::{ArgPos, IntNum, Op, ParMode};


const PAR_MODE_COEFFS: [i64; 3] = [100, 1000, 10000];

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub(crate) enum OpError {
	#[error("Unknown opcode {0:?}")]
	Op(Option<i64>),
	#[error("Unknown parameter mode {mode} for the {arg:?} argument")]
	ParMode { mode: i64, arg: ArgPos },
	#[error("Immediate mode for the written {0:?} argument")]
	ImmWrite(ArgPos),
}

impl TryFrom<i64> for Op {
	type Error = OpError;
	fn try_from(value: i64) -> Result<Self, Self::Error> {
		use {ArgPos::*, ParMode::*};

		if value < 0 { return Err(OpError::Op(Some(value))) }

		fn par_mode(value: i64, arg: ArgPos) -> Result<ParMode, OpError> {
			match value / PAR_MODE_COEFFS[arg] % 10 {
				0 => Ok(Pos),
				1 => Ok(Imm),
				2 => Ok(Rel),
				mode => Err(OpError::ParMode { mode, arg }),
			}
		}

		fn write_par_mode(par_mode: ParMode, arg: ArgPos) -> Result<ParMode, OpError> {
			match par_mode {
				Imm => Err(OpError::ImmWrite(arg)),
				par_mode => Ok(par_mode),
			}
		}

		let [m0, m1, m2] = [par_mode(value, First)?, par_mode(value, Second)?, par_mode(value, Third)?];
		let lls = || write_par_mode(m2, Third).map(|m2| [m0, m1, m2]);

		match value % 100 {
			1 => Ok(Op::Add(lls()?)),
			2 => Ok(Op::Mul(lls()?)),
			3 => Ok(Op::In(write_par_mode(m0, First)?)),
			4 => Ok(Op::Out(m0)),
			5 => Ok(Op::JumpIf(true, [m0, m1])),
			6 => Ok(Op::JumpIf(false, [m0, m1])),
			7 => Ok(Op::Lt(lls()?)),
			8 => Ok(Op::Eq(lls()?)),
			9 => Ok(Op::RelAdj(m0)),
			99 => Ok(Op::Halt),
			_ => Err(OpError::Op(Some(value))),
		}
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum ProgramError {
	#[error("Empty program")]
	Empty,
	#[error("Invalid int {int:?} at column {column}")]
	Int { column: usize, int: String },
}

/// Comma-separated ints; line breaks between ints are allowed.
pub(crate) fn parse_program<Num: IntNum>(s: &str) -> Result<Vec<Num>, ProgramError> {
	let s = s.trim();
	if s.is_empty() { return Err(ProgramError::Empty) }
	s.split(',')
		.scan(0, |c, int| Some((mem::replace(c, *c + int.len() + 1), int)))
		.map(|(c, int)| Num::parse(int.trim())
			.ok_or_else(|| ProgramError::Int { column: c + 1, int: int.to_owned() }))
		.collect()
}


#[test]
fn tests() {
	use ParMode::*;
	assert_eq!(Op::try_from(1002_i64), Ok(Op::Mul([Pos, Imm, Pos])));
	assert_eq!(Op::try_from(21101_i64), Ok(Op::Add([Imm, Imm, Rel])));
	assert_eq!(Op::try_from(204_i64), Ok(Op::Out(Rel)));
	assert_eq!(Op::try_from(1106_i64), Ok(Op::JumpIf(false, [Imm, Imm])));
	assert_eq!(Op::try_from(103_i64), Err(OpError::ImmWrite(ArgPos::First)));
	assert_eq!(Op::try_from(10_i64), Err(OpError::Op(Some(10))));
	assert_eq!(Op::try_from(99_i64), Ok(Op::Halt));
	assert_eq!(Op::try_from(199_i64), Ok(Op::Halt));
	assert_eq!(Op::try_from(21099_i64), Ok(Op::Halt));
	assert_eq!(Op::try_from(399_i64), Err(OpError::ParMode { mode: 3, arg: ArgPos::First }));
	assert_eq!(Op::try_from(-99_i64), Err(OpError::Op(Some(-99))));
	assert_eq!(parse_program::<i64>("1,0,\n0,3,99\n").unwrap(), [1, 0, 0, 3, 99]);
	assert!(matches!(parse_program::<i64>("1,x,3"), Err(ProgramError::Int { column: 3, .. })));
	assert!(matches!(parse_program::<i64>(" \n"), Err(ProgramError::Empty)));
}

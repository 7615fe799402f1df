// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::{common::Input, intcode::{BigNum, IntNum as _, Vm}};


/// Runs BOOST in the given mode. A working VM makes it output only the
/// keycode (or coordinates); anything else lists the failing opcodes. The
/// samples take no input and answer with all of their outputs.
fn boost(input: &Input, mode: i64) -> anyhow::Result<String> {
	let mut vm = Vm::<BigNum>::parse(input.text)?;
	if input.test {
		return Ok(vm.run([])?.into_iter().join(","))
	}
	let outputs = vm.run([BigNum::from_i64(mode)])?;
	match outputs.iter().exactly_one() {
		Ok(keycode) => Ok(keycode.to_string()),
		Err(_) => Err(anyhow::anyhow!("BOOST reports failing opcodes: {}", outputs.iter().join(", "))),
	}
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<String> {
	boost(input, 1)
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<String> {
	boost(input, 2)
}


#[test]
fn tests() {
	const QUINE: &str = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";
	assert_eq!(part1(&Input::sample(QUINE)).unwrap(), QUINE);
	assert_eq!(part1(&Input::sample("1102,34915192,34915192,7,4,7,99,0")).unwrap(), "1219070632396864");
	assert_eq!(part2(&Input::sample("104,1125899906842624,99")).unwrap(), "1125899906842624");
	assert_eq!(part1(&Input::sample("1102,9223372036854775807,2,7,4,7,99,0")).unwrap(), "18446744073709551614");

	const ECHO_MODE: &str = "3,0,4,0,99";
	assert_eq!(part2(&Input::new(ECHO_MODE)).unwrap(), "2");
	assert!(part1(&Input::new("3,0,104,203,4,0,99")).is_err());
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::{common::Input, intcode::Vm};


/// Runs the diagnostic program; every output but the last is a test result
/// that must be zero, the last one is the diagnostic code.
fn diagnose(input: &Input, system_id: i64) -> anyhow::Result<i64> {
	let outputs = Vm::parse(input.text)?.run([system_id])?;
	let Some((&code, tests)) = outputs.split_last() else {
		anyhow::bail!("No diagnostic code")
	};
	if let Some((i, result)) = tests.iter().find_position(|&&result| result != 0) {
		anyhow::bail!("Test {} failed with {result}", i + 1)
	}
	log::info!("{} tests passed", tests.len());
	Ok(code)
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<i64> {
	diagnose(input, 1)
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<i64> {
	diagnose(input, 5)
}


#[test]
fn tests() {
	const COMPARE_TO_8: &str = indoc::indoc! { "
		3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,
		1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,
		999,1105,1,46,1101,1000,1,20,4,20,1105,1,46,98,99
	" };
	let input = Input::sample(COMPARE_TO_8);
	assert_eq!(diagnose(&input, 7).unwrap(), 999);
	assert_eq!(diagnose(&input, 8).unwrap(), 1000);
	assert_eq!(diagnose(&input, 13).unwrap(), 1001);
	assert_eq!(part2(&input).unwrap(), 999);
	assert_eq!(part1(&Input::sample("3,0,4,0,99")).unwrap(), 1);
	assert_eq!(part1(&Input::sample("104,0,104,0,3,0,4,0,99")).unwrap(), 1);
	assert!(part1(&Input::sample("104,3,3,0,4,0,99")).is_err());
	assert!(part1(&Input::sample("3,0,99")).is_err());
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{common::{Input, NoSample}, intcode::Vm};


const TARGET: i64 = 19690720;

fn run_patched(program: &Vm, noun_verb: Option<(i64, i64)>) -> Option<i64> {
	let mut vm = program.clone();
	if let Some((noun, verb)) = noun_verb {
		vm.write(1, noun);
		vm.write(2, verb);
	}
	match vm.run([]) {
		Ok(_) => vm.memory().first().copied(),
		Err(fault) => {
			log::debug!("{noun_verb:?}: {fault}");
			None
		}
	}
}

fn find_noun_verb(program: &Vm, target: i64) -> Option<i64> {
	itertools::iproduct!(0..=99, 0..=99)
		.find(|&noun_verb| run_patched(program, Some(noun_verb)) == Some(target))
		.map(|(noun, verb)| 100 * noun + verb)
}


/// The sample runs unpatched.
pub(crate) fn part1(input: &Input) -> anyhow::Result<i64> {
	let program = Vm::parse(input.text)?;
	let patch = (!input.test).then_some((12, 2));
	run_patched(&program, patch).ok_or_else(|| anyhow::anyhow!("Program faulted"))
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<i64> {
	if input.test { return Err(NoSample.into()) }
	let program = Vm::parse(input.text)?;
	find_noun_verb(&program, TARGET)
		.ok_or_else(|| anyhow::anyhow!("No noun and verb produce {TARGET}"))
}


#[test]
fn tests() {
	assert_eq!(part1(&Input::sample("1,9,10,3,2,3,11,0,99,30,40,50")).unwrap(), 3500);
	assert_eq!(part1(&Input::sample("1,1,1,4,99,5,6,0,99")).unwrap(), 30);
	assert_eq!(part1(&Input::new("1,0,0,0,99,0,0,0,0,0,0,0,7,0")).unwrap(), 9);
	let program = Vm::parse("1,0,0,0,99").unwrap();
	assert_eq!(find_noun_verb(&program, 100), Some(4));
	assert_eq!(find_noun_verb(&program, 1000), None);
	assert!(part2(&Input::sample("1,0,0,0,99")).unwrap_err().is::<NoSample>());
}

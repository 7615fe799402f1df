// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{ops::RangeInclusive, sync::mpsc::channel, time::Duration};
use itertools::Itertools as _;
use crate::{common::Input, intcode::{Vm, thread::{INPUT_TIMEOUT, ThreadError, VmThread}}};


const NUM_AMPLIFIERS: usize = 5;

fn chain(program: &Vm, phase_settings: &[i64]) -> anyhow::Result<i64> {
	phase_settings.iter().try_fold(0, |signal, &phase_setting| {
		program.clone().run([phase_setting, signal])?
			.into_iter()
			.exactly_one()
			.map_err(|_| anyhow::anyhow!("Amplifier did not output exactly one signal"))
	})
}

/// Each amplifier runs on its own thread, its output feeding the next
/// amplifier's input and the last one's feeding back into the first.
fn feedback_loop(program: &Vm, phase_settings: &[i64], timeout: Duration) -> anyhow::Result<i64> {
	let (senders, receivers): (Vec<_>, Vec<_>) = (0..phase_settings.len()).map(|_| channel()).unzip();
	for (sender, &phase_setting) in senders.iter().zip(phase_settings) {
		sender.send(phase_setting)?;
	}
	senders[0].send(0)?;

	let threads = receivers.into_iter()
		.enumerate()
		.map(|(i, receiver)| {
			let output = senders[(i + 1) % senders.len()].clone();
			VmThread::spawn(i, program.clone(), receiver, output, timeout)
		})
		.collect::<Vec<_>>();
	drop(senders);

	// Join every amplifier before reporting the first failure.
	let joined = threads.into_iter().map(VmThread::join).collect::<Vec<_>>();
	for err in joined.iter().filter_map(|result| result.as_ref().err()) {
		log::debug!("{err}");
	}
	let inputs = joined.into_iter().collect::<Result<Vec<_>, _>>()?;
	Ok(inputs[0].try_recv()?)
}

fn highest_signal(
	input: &Input,
	phase_settings: RangeInclusive<i64>,
	run: impl Fn(&Vm, &[i64]) -> anyhow::Result<i64>,
) -> anyhow::Result<i64> {
	let program = Vm::parse(input.text)?;
	let mut highest = None;
	for phase_settings in phase_settings.permutations(NUM_AMPLIFIERS) {
		let signal = run(&program, &phase_settings)?;
		log::debug!("{phase_settings:?}: {signal}");
		highest = highest.max(Some(signal));
	}
	highest.ok_or_else(|| anyhow::anyhow!("No phase settings"))
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<i64> {
	highest_signal(input, 0..=4, chain)
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<i64> {
	highest_signal(input, 5..=9, |program, phase_settings|
		feedback_loop(program, phase_settings, INPUT_TIMEOUT))
}


#[test]
fn tests() {
	const INPUTS: ([&str; 3], [&str; 2]) = (
		[
			"3,15,3,16,1002,16,10,16,1,16,15,15,4,15,99,0,0",
			"3,23,3,24,1002,24,10,24,1002,23,-1,23,101,5,23,23,1,24,23,23,4,23,99,0,0",
			"3,31,3,32,1002,32,10,32,1001,31,-2,31,1007,31,0,33,1002,33,7,33,1,33,31,31,1,32,31,31,4,31,99,0,0,0",
		],
		[
			"3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,27,4,27,1001,28,-1,28,1005,28,6,99,0,0,5",
			"3,52,1001,52,-5,52,3,53,1,52,56,54,1007,54,5,55,1005,55,26,1001,54,-5,54,1105,1,12,1,53,54,53,1008,54,0,55,1001,55,1,55,2,53,55,53,4,53,1001,56,-1,56,1005,56,6,99,0,0,0,0,10",
		]
	);
	assert_eq!(part1(&Input::sample(INPUTS.0[0])).unwrap(), 43210);
	assert_eq!(part1(&Input::sample(INPUTS.0[1])).unwrap(), 54321);
	assert_eq!(part1(&Input::sample(INPUTS.0[2])).unwrap(), 65210);
	let program = Vm::parse(INPUTS.0[0]).unwrap();
	assert_eq!(chain(&program, &[4, 3, 2, 1, 0]).unwrap(), 43210);

	let timeout = Duration::from_secs(1);
	let program = Vm::parse(INPUTS.1[0]).unwrap();
	assert_eq!(feedback_loop(&program, &[9, 8, 7, 6, 5], timeout).unwrap(), 139629729);
	let program = Vm::parse(INPUTS.1[1]).unwrap();
	assert_eq!(feedback_loop(&program, &[9, 7, 8, 5, 6], timeout).unwrap(), 18216);
	assert_eq!(part2(&Input::sample(INPUTS.1[0])).unwrap(), 139629729);

	// Phase setting 5 faults at once; the others starve waiting for a signal.
	let program = Vm::parse("3,20,1008,20,5,21,1006,21,10,42,3,20,99").unwrap();
	let err = feedback_loop(&program, &[5, 6, 7, 8, 9], timeout).unwrap_err();
	assert!(matches!(err.downcast_ref(), Some(ThreadError::Fault { id: 0, .. })), "{err:?}");
	let err = feedback_loop(&program, &[6, 7, 8, 9, 5], timeout).unwrap_err();
	assert!(matches!(err.downcast_ref(), Some(ThreadError::Starved { id: 1, .. })), "{err:?}");
}

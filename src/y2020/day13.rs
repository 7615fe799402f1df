// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::common::{Input, input::{ParseError, parse_value}};


struct Notes {
	earliest: u64,
	/// Bus IDs by their offset in the schedule; `None` for `x`.
	buses: Vec<Option<u64>>,
}

fn parse(input: &Input) -> Result<Notes, ParseError> {
	let mut lines = input.numbered_lines(true);
	let (l, earliest) = lines.next().ok_or(ParseError::End)?;
	let earliest = parse_value::<u64>(l, earliest.trim())?;
	let (l, buses) = lines.next().ok_or(ParseError::End)?;
	let buses = buses.trim().split(',')
		.map(|bus| match bus {
			"x" => Ok(None),
			bus => parse_value::<u64>(l, bus).and_then(|id| match id {
				0 => Err(ParseError::format(l, "bus ID 0")),
				id => Ok(Some(id)),
			}),
		})
		.collect::<Result<Vec<_>, _>>()?;
	Ok(Notes { earliest, buses })
}


/// The first departing bus's ID times the wait for it.
pub(crate) fn part1(input: &Input) -> anyhow::Result<u64> {
	let Notes { earliest, buses } = parse(input)?;
	let (wait, id) = buses.into_iter()
		.flatten()
		.map(|id| ((id - earliest % id) % id, id))
		.min()
		.ok_or_else(|| anyhow::anyhow!("No buses in service"))?;
	log::debug!("Bus {id} departs at {}", earliest + wait);
	Ok(id * wait)
}


/// The earliest time at which every bus departs at its offset from it.
/// Sieves one bus at a time, stepping by the least common multiple of the
/// IDs so far.
pub(crate) fn part2(input: &Input) -> anyhow::Result<u64> {
	let Notes { buses, .. } = parse(input)?;
	let (mut time, mut step) = (0_u64, 1_u64);
	for (offset, id) in buses.into_iter().enumerate().filter_map(|(o, id)| Some((o as u64, id?))) {
		let mut tries = 0;
		while (time + offset) % id != 0 {
			anyhow::ensure!(tries < id, "No time fits bus {id} at offset {offset}");
			time += step;
			tries += 1;
		}
		step = num_integer::lcm(step, id);
		log::trace!("Bus {id} at offset {offset}: {time} (every {step})");
	}
	Ok(time)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		939
		7,13,x,x,59,x,31,19
	" };
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 295);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), 1068781);

	for (buses, time) in [
		("17,x,13,19", 3417),
		("67,7,59,61", 754018),
		("67,x,7,59,61", 779210),
		("67,7,x,59,61", 1261476),
		("1789,37,47,1889", 1202161486),
	] {
		assert_eq!(part2(&Input::sample(&format!("0\n{buses}\n"))).unwrap(), time);
	}
	assert!(part2(&Input::sample("0\n2,x,x,4\n")).is_err());
	assert!(part1(&Input::sample("939\nx,x\n")).is_err());
	assert!(part1(&Input::sample("939\n")).is_err());
}

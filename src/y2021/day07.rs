// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::common::Input;


fn positions(input: &Input) -> anyhow::Result<Vec<i64>> {
	let mut positions = input.csv_int::<i64>(',')?;
	positions.sort_unstable();
	Ok(positions)
}

/// Least fuel over every alignment position, each crab spending
/// `fuel(distance)`.
fn least_fuel(positions: &[i64], fuel: impl Fn(i64) -> i64) -> anyhow::Result<i64> {
	let (&min, &max) = positions.iter().minmax().into_option()
		.ok_or_else(|| anyhow::anyhow!("No crabs"))?;
	(min..=max)
		.map(|target| positions.iter().map(|p| fuel((p - target).abs())).sum::<i64>())
		.min()
		.ok_or_else(|| anyhow::anyhow!("No crabs"))
}


/// One fuel per step; the median is the best position.
pub(crate) fn part1(input: &Input) -> anyhow::Result<i64> {
	let positions = positions(input)?;
	let &median = positions.get(positions.len() / 2).ok_or_else(|| anyhow::anyhow!("No crabs"))?;
	log::debug!("Aligning at {median}");
	Ok(positions.iter().map(|p| (p - median).abs()).sum())
}


/// Each further step costs one more fuel than the last.
pub(crate) fn part2(input: &Input) -> anyhow::Result<i64> {
	least_fuel(&positions(input)?, |distance| distance * (distance + 1) / 2)
}


#[test]
fn tests() {
	const INPUT: &str = "16,1,2,0,4,2,7,1,2,14";
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 37);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), 168);
	let positions = positions(&Input::sample(INPUT)).unwrap();
	assert_eq!(least_fuel(&positions, |distance| distance).unwrap(), 37);
	assert!(least_fuel(&[], |distance| distance).is_err());
	assert!(part1(&Input::sample("\n")).is_err());
	assert!(part1(&Input::sample("1,x")).is_err());
}

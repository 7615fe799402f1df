// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::common::Input;


fn mass_fuel(mass: u64) -> u64 {
	(mass / 3).saturating_sub(2)
}

fn module_total_fuel(module_mass: u64) -> u64 {
	let mut total = 0;
	let mut fuel = mass_fuel(module_mass);
	while fuel > 0 {
		total += fuel;
		fuel = mass_fuel(fuel);
	}
	total
}

fn sum_fuel(input: &Input, fuel_per_module: fn(u64) -> u64) -> anyhow::Result<u64> {
	Ok(input.list_int()?.into_iter().map(fuel_per_module).sum())
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<u64> {
	sum_fuel(input, mass_fuel)
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<u64> {
	sum_fuel(input, module_total_fuel)
}


#[test]
fn tests() {
	assert_eq!(mass_fuel(12), 2);
	assert_eq!(mass_fuel(6), 0);
	assert_eq!(mass_fuel(1), 0);
	assert_eq!(module_total_fuel(14), 2);
	assert_eq!(module_total_fuel(1969), 966);
	assert_eq!(module_total_fuel(100756), 50346);
	let input = Input::sample("12\n14\n1969\n100756\n");
	assert_eq!(part1(&input).unwrap(), 2 + 2 + 654 + 33583);
	assert_eq!(part2(&input).unwrap(), 2 + 2 + 966 + 50346);
	assert!(part1(&Input::sample("12\nx\n")).is_err());
}

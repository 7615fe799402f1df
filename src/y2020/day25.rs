// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use num_modular::ModularPow as _;
use crate::common::Input;


const MODULUS: u64 = 20201227;
const SUBJECT: u64 = 7;

/// The loop size transforming `subject` into `public_key`, by brute force.
fn loop_size(subject: u64, public_key: u64) -> Option<u64> {
	std::iter::successors(Some(1), |value| Some(value * subject % MODULUS))
		.take(MODULUS as usize)
		.position(|value| value == public_key)
		.map(|loop_size| loop_size as u64)
}


pub(crate) fn part1(input: &Input) -> anyhow::Result<u64> {
	let [card, door]: [u64; 2] = input.list_int::<u64>()?.try_into()
		.map_err(|keys: Vec<u64>| anyhow::anyhow!("Expected 2 public keys, got {}", keys.len()))?;
	let card_loop_size = loop_size(SUBJECT, card)
		.ok_or_else(|| anyhow::anyhow!("No loop size for card key {card}"))?;
	log::debug!("Card loop size: {card_loop_size}");
	let key = door.powm(card_loop_size, &MODULUS);
	if log::log_enabled!(log::Level::Debug) {
		if let Some(door_loop_size) = loop_size(SUBJECT, door) {
			log::debug!("Door loop size: {door_loop_size}, key {}", card.powm(door_loop_size, &MODULUS));
		}
	}
	Ok(key)
}


#[test]
fn tests() {
	assert_eq!(loop_size(SUBJECT, 5764801), Some(8));
	assert_eq!(loop_size(SUBJECT, 17807724), Some(11));
	assert_eq!(part1(&Input::sample("5764801\n17807724\n")).unwrap(), 14897079);
	assert_eq!(part1(&Input::sample("17807724\n5764801\n")).unwrap(), 14897079);
	assert!(part1(&Input::sample("5764801\n")).is_err());
}

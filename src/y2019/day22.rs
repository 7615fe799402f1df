// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use num_modular::ModularCoreOps as _;
use crate::common::{Input, NoSample};


const NUM_CARDS: u64 = 10_007;
const NUM_CARDS_SAMPLE: u64 = 10;
const CARD: u64 = 2019;
const NUM_CARDS_HUGE: u64 = 119_315_717_514_047;
const NUM_SHUFFLES: u64 = 101_741_582_076_661;
const POSITION: u64 = 2020;


enum Technique {
	NewStack,
	Cut(i64),
	Increment(u64),
}

/// A shuffle as the linear map moving the card at position `x` to
/// position `a * x + b` (modulo the number of cards `n`).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Shuffle { a: u64, b: u64, n: u64 }

impl Shuffle {
	fn identity(n: u64) -> Self {
		Self { a: 1, b: 0, n }
	}

	fn from_technique(technique: &Technique, n: u64) -> Self {
		let neg = |x: i64| (-(x as i128)).rem_euclid(n as i128) as u64;
		match *technique {
			Technique::NewStack => Self { a: n - 1, b: n - 1, n },
			Technique::Cut(offset) => Self { a: 1, b: neg(offset), n },
			Technique::Increment(stride) => Self { a: stride % n, b: 0, n },
		}
	}

	fn from_techniques(techniques: &[Technique], n: u64) -> Self {
		techniques.iter()
			.map(|t| Self::from_technique(t, n))
			.fold(Self::identity(n), Self::then)
	}

	/// This shuffle followed by `other`.
	fn then(self, other: Self) -> Self {
		let n = &self.n;
		Self { a: other.a.mulm(self.a, n), b: other.a.mulm(self.b, n).addm(other.b, n), n: self.n }
	}

	fn repeat(self, mut times: u64) -> Self {
		let (mut result, mut square) = (Self::identity(self.n), self);
		while times > 0 {
			if times & 1 == 1 { result = result.then(square) }
			square = square.then(square);
			times >>= 1;
		}
		result
	}

	fn position_of(&self, card: u64) -> u64 {
		self.a.mulm(card, &self.n).addm(self.b, &self.n)
	}

	/// `None` if the shuffle loses cards (`a` shares a factor with `n`).
	fn card_at(&self, position: u64) -> Option<u64> {
		use num_integer::Integer as _;
		let (a, n) = (self.a as i128, self.n as i128);
		let egcd = a.extended_gcd(&n);
		if egcd.gcd != 1 { return None }
		let inv = egcd.x.rem_euclid(n) as u64;
		let offset = (position as i128 - self.b as i128).rem_euclid(n) as u64;
		Some(offset.mulm(inv, &self.n))
	}
}


fn parse(input: &Input) -> anyhow::Result<Vec<Technique>> {
	use anyhow::Context as _;
	input.numbered_lines(true)
		.map(|(l, line)| parsing::technique(line).with_context(|| format!("Line {l}")))
		.collect()
}


/// The sample shuffles ten cards and answers with the whole deck.
pub(crate) fn part1(input: &Input) -> anyhow::Result<String> {
	let techniques = parse(input)?;
	if input.test {
		let shuffle = Shuffle::from_techniques(&techniques, NUM_CARDS_SAMPLE);
		let deck = (0..NUM_CARDS_SAMPLE)
			.map(|position| shuffle.card_at(position).ok_or_else(|| anyhow::anyhow!("Shuffle loses cards")))
			.collect::<anyhow::Result<Vec<_>>>()?;
		return Ok(deck.into_iter().join(" "))
	}
	Ok(Shuffle::from_techniques(&techniques, NUM_CARDS).position_of(CARD).to_string())
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<u64> {
	if input.test { return Err(NoSample.into()) }
	Shuffle::from_techniques(&parse(input)?, NUM_CARDS_HUGE)
		.repeat(NUM_SHUFFLES)
		.card_at(POSITION)
		.ok_or_else(|| anyhow::anyhow!("Shuffle loses cards"))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Technique;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum TechniqueError {
		#[error("Unknown technique {0:?}")]
		Unknown(String),
		#[error("Invalid count")]
		Count(#[from] ParseIntError),
	}

	pub(super) fn technique(s: &str) -> Result<Technique, TechniqueError> {
		if s == "deal into new stack" {
			Ok(Technique::NewStack)
		} else if let Some(offset) = s.strip_prefix("cut ") {
			Ok(Technique::Cut(offset.parse()?))
		} else if let Some(stride) = s.strip_prefix("deal with increment ") {
			Ok(Technique::Increment(stride.parse()?))
		} else {
			Err(TechniqueError::Unknown(s.to_owned()))
		}
	}
}


#[test]
fn tests() {
	const INPUTS: [(&str, &str); 5] = [
		("deal with increment 3", "0 7 4 1 8 5 2 9 6 3"),
		(indoc::indoc! { "
			deal with increment 7
			deal into new stack
			deal into new stack
		" }, "0 3 6 9 2 5 8 1 4 7"),
		(indoc::indoc! { "
			cut 6
			deal with increment 7
			deal into new stack
		" }, "3 0 7 4 1 8 5 2 9 6"),
		(indoc::indoc! { "
			deal with increment 7
			deal with increment 9
			cut -2
		" }, "6 3 0 7 4 1 8 5 2 9"),
		(indoc::indoc! { "
			deal into new stack
			cut -2
			deal with increment 7
			cut 8
			cut -4
			deal with increment 7
			cut 3
			deal with increment 9
			deal with increment 3
			cut -1
		" }, "9 2 5 8 1 4 7 0 3 6"),
	];
	for (input, deck) in INPUTS {
		assert_eq!(part1(&Input::sample(input)).unwrap(), deck);
	}
	assert!(part2(&Input::sample(INPUTS[0].0)).unwrap_err().is::<NoSample>());
	assert!(part1(&Input::sample("deal with increment 2")).is_err());
	assert!(part1(&Input::sample("shuffle")).is_err());

	let techniques = parse(&Input::new(INPUTS[4].0)).unwrap();
	let shuffle = Shuffle::from_techniques(&techniques, NUM_CARDS);
	let repeated = (0..5).fold(Shuffle::identity(NUM_CARDS), |s, _| s.then(shuffle));
	assert_eq!(shuffle.repeat(5), repeated);
	let shuffle = Shuffle::from_techniques(&techniques, NUM_CARDS_HUGE).repeat(NUM_SHUFFLES);
	assert_eq!(shuffle.card_at(shuffle.position_of(POSITION)), Some(POSITION));
}

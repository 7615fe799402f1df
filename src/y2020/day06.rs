// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::common::Input;


/// Questions answered "yes", one bit per letter.
fn answers(person: &str) -> anyhow::Result<u32> {
	person.chars().try_fold(0, |answers, c| match c {
		'a'..='z' => Ok(answers | 1 << (c as u8 - b'a')),
		_ => anyhow::bail!("Unexpected question {c:?}"),
	})
}


/// Questions anyone in a group answered, summed over the groups.
pub(crate) fn part1(input: &Input) -> anyhow::Result<u32> {
	input.multilines_joined("").iter()
		.map(|group| answers(group).map(u32::count_ones))
		.sum()
}


/// Questions everyone in a group answered, summed over the groups.
pub(crate) fn part2(input: &Input) -> anyhow::Result<u32> {
	input.multilines().into_iter()
		.map(|group| group.into_iter()
			.try_fold(u32::MAX, |all, person| anyhow::Ok(all & answers(person)?))
			.map(u32::count_ones))
		.sum()
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		abc

		a
		b
		c

		ab
		ac

		a
		a
		a
		a

		b
	" };
	assert_eq!(part1(&Input::sample(INPUT)).unwrap(), 11);
	assert_eq!(part2(&Input::sample(INPUT)).unwrap(), 6);
	assert_eq!(answers("zab").unwrap(), 1 << 25 | 0b11);
	assert!(part1(&Input::sample("ab\nA\n")).is_err());
}

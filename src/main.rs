// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod common;
mod intcode;
mod puzzles;
mod y2015;
mod y2019;
mod y2020;
mod y2021;
mod y2022;
mod y2023;
mod y2024;

use std::process::ExitCode;
use anyhow::Context as _;
use clap::Parser as _;
use common::{cli::{Args, Part}, Input};


fn run(args: &Args) -> anyhow::Result<()> {
	let puzzle = puzzles::find(args.year, args.day)?;
	log::info!("{} day {}: {}", puzzle.year, puzzle.day, puzzle.title);

	for part in Part::ALL {
		if !args.runs_part(part) { continue }
		if puzzle.part(part).is_none() {
			log::warn!("Day {} has no part {part}", puzzle.day);
			continue
		}
		let path = args.input_path(part);
		log::debug!("Reading {}", path.display());
		let text = common::input::read_input(&path)?;
		let input = if args.test { Input::sample(&text) } else { Input::new(&text) };
		match puzzle.solve(part, &input).with_context(|| format!("Part {part} failed"))? {
			Some(answer) => println!("Part {part}: {answer}"),
			None => log::warn!("Part {part} has no answer for the sample; skipped"),
		}
	}
	Ok(())
}

fn main() -> ExitCode {
	let args = Args::parse();
	common::logging::init(args.verbose);
	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("Error: {err:?}");
			ExitCode::from(255)
		}
	}
}

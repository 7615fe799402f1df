// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::puzzles::year;

year! { 2020:
	06 => "Custom Customs",
	08 => "Handheld Halting",
	13 => "Shuttle Search",
	25 => "Combo Breaker" [part1_only],
}

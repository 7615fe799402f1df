// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::puzzles::year;

year! { 2019:
	01 => "The Tyranny of the Rocket Equation",
	02 => "1202 Program Alarm",
	05 => "Sunny with a Chance of Asteroids",
	07 => "Amplification Circuit",
	09 => "Sensor Boost",
	11 => "Space Police",
	15 => "Oxygen System",
	22 => "Slam Shuffle",
	23 => "Category Six",
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::puzzles::year;

year! { 2024:
	16 => "Reindeer Maze",
	17 => "Chronospatial Computer",
	18 => "RAM Run",
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::puzzles::year;

year! { 2022:
	10 => "Cathode-Ray Tube",
	12 => "Hill Climbing Algorithm",
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::puzzles::year;

year! { 2015:
	23 => "Opening the Turing Lock",
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::puzzles::year;

year! { 2023:
	17 => "Clumsy Crucible",
}

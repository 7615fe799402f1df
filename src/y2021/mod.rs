// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::puzzles::year;

year! { 2021:
	07 => "The Treachery of Whales",
	15 => "Chiton",
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Helpers shared by the puzzles: argument parsing, logging, input readers,
//! grids, heap queues and path searches.

pub(crate) mod cli;
pub(crate) mod grid;
pub(crate) mod heapq;
pub(crate) mod input;
pub(crate) mod logging;
pub(crate) mod search;

pub(crate) use input::{Input, NoSample};

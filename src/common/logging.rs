// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use log::LevelFilter;


pub(crate) fn level(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Plain messages on stdout, interleaved with the answers. `RUST_LOG`
/// overrides the level picked by `-v`.
pub(crate) fn init(verbosity: u8) {
	use std::io::Write as _;
	env_logger::Builder::new()
		.filter_level(level(verbosity))
		.parse_default_env()
		.format(|buf, record| writeln!(buf, "{}", record.args()))
		.target(env_logger::Target::Stdout)
		.init();
}


#[test]
fn tests() {
	assert_eq!(level(0), LevelFilter::Warn);
	assert_eq!(level(1), LevelFilter::Info);
	assert_eq!(level(2), LevelFilter::Debug);
	assert_eq!(level(7), LevelFilter::Trace);
}

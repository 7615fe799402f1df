// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::VecDeque;
use anyhow::Context as _;
use crate::{common::Input, intcode::{Step, Vm}};


const NUM_NICS: usize = 50;
const NAT: i64 = 255;
const NO_PACKET: i64 = -1;
const MAX_ROUNDS: usize = 10_000_000;


#[derive(Clone, Copy, Debug)]
struct Packet {
	dest: i64,
	xy: [i64; 2],
}

struct Nic {
	vm: Vm,
	/// Pending input: the address at boot, then delivered `x`, `y` pairs.
	queue: VecDeque<i64>,
	/// Output of a packet being sent.
	sending: Vec<i64>,
	/// Read [`NO_PACKET`] and has not sent or received since.
	waiting: bool,
}

impl Nic {
	fn boot(program: &Vm, address: usize) -> Self {
		Self {
			vm: program.clone(),
			queue: VecDeque::from([address as i64]),
			sending: Vec::with_capacity(3),
			waiting: false,
		}
	}

	fn deliver(&mut self, [x, y]: [i64; 2]) {
		self.queue.extend([x, y]);
		self.waiting = false;
	}

	fn is_idle(&self) -> bool {
		self.waiting && self.queue.is_empty() && self.sending.is_empty()
	}

	/// Executes one instruction; `None` unless it completes a packet.
	fn step(&mut self) -> anyhow::Result<Option<Packet>> {
		let mut polled_empty = false;
		let queue = &mut self.queue;
		let step = self.vm.step(|| Some(queue.pop_front().unwrap_or_else(|| {
			polled_empty = true;
			NO_PACKET
		})))?;
		match step {
			Step::Continue if polled_empty => self.waiting = true,
			Step::Continue => (),
			Step::Output(num) => {
				self.waiting = false;
				self.sending.push(num);
				if let [dest, x, y] = self.sending[..] {
					self.sending.clear();
					return Ok(Some(Packet { dest, xy: [x, y] }))
				}
			}
			Step::Halted => anyhow::bail!("Halted"),
		}
		Ok(None)
	}
}


/// Steps all NICs round-robin, one instruction each per round. Without a
/// NAT, answers the first `y` sent to address 255; with one, answers the
/// first `y` the NAT delivers to NIC 0 twice in a row.
fn run_network(program: &Vm, with_nat: bool) -> anyhow::Result<i64> {
	let mut nics = (0..NUM_NICS).map(|address| Nic::boot(program, address)).collect::<Vec<_>>();
	let mut nat_packet = None;
	let mut last_nat_y = None;

	for round in 0..MAX_ROUNDS {
		for i in 0..nics.len() {
			let Some(packet) = nics[i].step().with_context(|| format!("NIC {i}"))? else { continue };
			log::trace!("Round {round}: {i} -> {}: {:?}", packet.dest, packet.xy);
			if packet.dest == NAT {
				if !with_nat { return Ok(packet.xy[1]) }
				nat_packet = Some(packet);
				continue
			}
			let dest = usize::try_from(packet.dest).ok()
				.filter(|&dest| dest < nics.len())
				.ok_or_else(|| anyhow::anyhow!("NIC {i} sent to unknown address {}", packet.dest))?;
			nics[dest].deliver(packet.xy);
		}

		let Some(packet) = nat_packet else { continue };
		if !nics.iter().all(Nic::is_idle) { continue }
		log::debug!("Round {round}: NAT -> 0: {:?}", packet.xy);
		if last_nat_y == Some(packet.xy[1]) { return Ok(packet.xy[1]) }
		last_nat_y = Some(packet.xy[1]);
		nics[0].deliver(packet.xy);
	}
	anyhow::bail!("Network still busy after {MAX_ROUNDS} rounds")
}

pub(crate) fn part1(input: &Input) -> anyhow::Result<i64> {
	run_network(&Vm::parse(input.text)?, false)
}


pub(crate) fn part2(input: &Input) -> anyhow::Result<i64> {
	run_network(&Vm::parse(input.text)?, true)
}


#[test]
fn tests() {
	// Sends `(255, address, 42)` once, then keeps polling.
	const SEND_ONCE: &str = "3,100,104,255,4,100,104,42,3,101,1105,1,8";
	assert_eq!(part1(&Input::sample(SEND_ONCE)).unwrap(), 42);
	assert_eq!(part2(&Input::sample(SEND_ONCE)).unwrap(), 42);

	let mut nic = Nic::boot(&Vm::parse(SEND_ONCE).unwrap(), 7);
	let packets = (0..4).map(|_| nic.step().unwrap()).collect::<Vec<_>>();
	assert!(packets[..3].iter().all(Option::is_none));
	assert!(matches!(packets[3], Some(Packet { dest: NAT, xy: [7, 42] })));
	assert!(!nic.is_idle());
	nic.step().unwrap();
	assert!(nic.is_idle());
	nic.deliver([1, 2]);
	assert!(!nic.is_idle());

	assert!(part1(&Input::sample("104,3,104,0,104,0,99")).is_err());
	assert!(part1(&Input::sample("99")).is_err());
}

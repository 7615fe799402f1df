// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Runs a [`Vm`] on its own thread, reading input from and writing output
//! to channels. Reading input blocks for at most a timeout, after which the
//! VM is considered starved.

use std::{sync::mpsc::{Receiver, Sender}, thread::{self, JoinHandle}, time::Duration};
use log::{debug, trace};
use super::{Fault, IntNum, Step, Vm};


pub(crate) const INPUT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub(crate) enum ThreadError {
	#[error("VM {id} faulted")]
	Fault { id: usize, #[source] source: Fault },
	#[error("VM {id} got no more input at position {pos}")]
	Starved { id: usize, pos: usize },
	#[error("VM {id} panicked")]
	Panicked { id: usize },
}

pub(crate) struct VmThread<Num> {
	id: usize,
	handle: JoinHandle<Result<Receiver<Num>, ThreadError>>,
}

impl<Num: IntNum + Send + 'static> VmThread<Num> {
	pub(crate) fn spawn(
		id: usize,
		mut vm: Vm<Num>,
		input: Receiver<Num>,
		output: Sender<Num>,
		timeout: Duration,
	) -> Self {
		let handle = thread::spawn(move || loop {
			let mut starved = false;
			let step = vm.step(|| match input.recv_timeout(timeout) {
				Ok(num) => Some(num),
				Err(err) => {
					debug!("VM {id}: waiting for input failed: {err}");
					starved = true;
					None
				}
			});
			match step {
				Ok(Step::Continue) => (),
				Ok(Step::Output(num)) => {
					trace!("VM {id}: output {num}");
					if output.send(num).is_err() { debug!("VM {id}: output receiver is gone") }
				}
				Ok(Step::Halted) => {
					debug!("VM {id}: halted");
					return Ok(input)
				}
				Err(Fault::Input { pos }) if starved => return Err(ThreadError::Starved { id, pos }),
				Err(source) => return Err(ThreadError::Fault { id, source }),
			}
		});
		Self { id, handle }
	}

	/// Waits for the VM to halt and hands back its input channel; input sent
	/// after halting (e.g. the last output of a feedback loop) is still there
	/// to receive.
	pub(crate) fn join(self) -> Result<Receiver<Num>, ThreadError> {
		self.handle.join().unwrap_or(Err(ThreadError::Panicked { id: self.id }))
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::mpsc::channel;

	#[test]
	fn doubler() {
		let (in_tx, in_rx) = channel();
		let (out_tx, out_rx) = channel();
		let vm = Vm::<i64>::parse("3,9,1002,9,2,9,4,9,99,0").unwrap();
		let thread = VmThread::spawn(0, vm, in_rx, out_tx, INPUT_TIMEOUT);
		in_tx.send(21).unwrap();
		assert_eq!(out_rx.recv(), Ok(42));
		in_tx.send(7).unwrap();
		let input = thread.join().unwrap();
		assert_eq!(input.try_recv(), Ok(7));
	}

	#[test]
	fn starved() {
		let (_in_tx, in_rx) = channel::<i64>();
		let (out_tx, _out_rx) = channel();
		let vm = Vm::parse("104,5,3,0,99").unwrap();
		let thread = VmThread::spawn(3, vm, in_rx, out_tx, Duration::from_millis(20));
		assert!(matches!(thread.join(), Err(ThreadError::Starved { id: 3, pos: 2 })));
	}
}

//! # Instruction Trace Tests
//!
//! With `trace_instructions` on, both executors report each register, HI, or
//! LO write in the same `<mnemonic> <dest> <= <value>` form.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::common::builder::instruction::InstructionBuilder as B;
use mips_core::config::Config;
use mips_core::{ExecutionMode, Simulator};
use tracing::Level;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn traced_run(mode: ExecutionMode, prog: &[u32], cycles: u64) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .finish();

    let mut config = Config::default();
    config.general.mode = mode;
    config.general.trace_instructions = true;
    let mut sim = Simulator::new(config).unwrap();
    let _ = sim.load_program(prog).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(sim.run(cycles), cycles);
    });

    let bytes = capture.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn single_cycle_traces_written_destination() {
    let prog = [B::new().addiu(4, 0, 5).build(), B::new().mthi(4).build()];
    let log = traced_run(ExecutionMode::SingleCycle, &prog, 2);

    assert!(log.contains("SC  pc=0x00400000 addiu $4 <= 0x00000005"));
    assert!(log.contains("SC  pc=0x00400004 mthi HI <= 0x00000005"));
}

#[test]
fn both_executors_trace_the_same_write() {
    let prog = [B::new().addiu(4, 0, 5).build()];
    let single = traced_run(ExecutionMode::SingleCycle, &prog, 1);
    let piped = traced_run(ExecutionMode::Pipelined, &prog, 5);

    let write = "addiu $4 <= 0x00000005";
    assert!(single.contains(write));
    assert!(piped.contains(&format!("WB  pc=0x00400000 {write}")));
}

#[test]
fn memory_trace_names_access_width() {
    let prog = [B::new().sb(0, 0, 0).build(), B::new().lh(4, 0, 0).build()];
    let log = traced_run(ExecutionMode::Pipelined, &prog, 5);

    assert!(log.contains("store.byte [0x00000000]"));
    assert!(log.contains("load.half [0x00000000]"));
}

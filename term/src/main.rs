mod adapter;
mod definitions;
mod logger;

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use chip::{
    chip8::ChipSet,
    definitions::cpu,
    display::Display,
    memory::Memory,
    resources::Rom,
    runner::{Runner, RunnerConfig},
};

use adapter::{DisplayAdapter, KeyboardAdapter, TerminalGuard};
use logger::LogBuffer;

#[derive(Parser, Debug)]
#[command(
    name = "chip8-term",
    about = "Run a chip8 program inside of the terminal."
)]
struct Args {
    /// The program to load at 0x200.
    #[arg(value_name = "ROM")]
    rom: PathBuf,

    /// Instructions executed per second.
    #[arg(long, default_value_t = cpu::HERTZ)]
    hertz: u64,

    /// Seed for the random generator, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the state of the freshly loaded machine and exit.
    #[arg(long, default_value_t = false)]
    dump: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // the terminal surface owns the screen, so the records wait until it is gone
    let logs = (!args.dump).then(LogBuffer::default);
    logger::init(logs.as_ref());

    let res = run(&args);
    if let Some(logs) = logs {
        let _ = logs.drain_into(&mut io::stderr());
    }

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let rom = Rom::from_file(&args.rom)
        .with_context(|| format!("Unable to load {}", args.rom.display()))?;
    log::info!("loaded {} ({} bytes)", rom.get_name(), rom.get_data().len());

    let mut memory = Memory::with_rom(&rom)?;
    let mut display = Display::new();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let chip = ChipSet::new(&mut memory, &mut display, rng);

    if args.dump {
        println!("{}", chip);
        return Ok(());
    }

    let config = RunnerConfig {
        cpu_hertz: args.hertz,
        ..RunnerConfig::default()
    };

    let guard = TerminalGuard::enter().context("Unable to set up the terminal")?;
    let mut runner = Runner::new(
        chip,
        DisplayAdapter::new(io::stdout()),
        KeyboardAdapter::new(),
        config,
    );
    let res = runner.run().context("Terminal I/O failed");
    drop(guard);

    if let Some(fault) = runner.chipset().get_fault() {
        log::warn!("{} was halted: {}", rom.get_name(), fault);
    }
    res
}

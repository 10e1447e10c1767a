/*
 * Command line host of the soft6502 processor.
 */
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ansi_term::Colour;
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;

use soft6502_lib::Memory;
use soft6502_runner::{
    load_program, logger, parse_address, parse_hex, read_program, Session, SessionConfig,
    StopReason,
};

/// 6502 emulator
/// Loads a binary image in memory and runs it until BRK.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Binary image to run
    program: Option<PathBuf>,

    /// Inline program as hexadecimal bytes ("a9 01 69 02 00")
    #[arg(long, conflicts_with = "program")]
    hex: Option<String>,

    /// Load address of the program (0x0600, $0600 or decimal)
    #[arg(short, long, value_parser = parse_address)]
    origin: Option<u16>,

    /// Address of the first instruction, defaults to the origin
    #[arg(short, long, value_parser = parse_address)]
    start: Option<u16>,

    /// YAML session file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many cycles
    #[arg(short, long)]
    max_cycles: Option<u64>,

    /// Print every executed instruction
    #[arg(short, long)]
    trace: bool,

    /// Log the processor's events on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Ignore the D flag in ADC and SBC
    #[arg(long)]
    no_decimal: bool,

    /// Treat undocumented opcodes as unknown
    #[arg(long)]
    no_illegal: bool,
}

impl Cli {
    /// Command line values override the session file.
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };
        if let Some(program) = &self.program {
            config.program = Some(program.clone());
        }
        if let Some(origin) = self.origin {
            config.origin = origin;
            config.cpu.start_address = origin;
        }
        if let Some(start) = self.start {
            config.cpu.start_address = start;
        }
        if self.max_cycles.is_some() {
            config.max_cycles = self.max_cycles;
        }
        if self.no_decimal {
            config.cpu.decimal_mode = false;
        }
        if self.no_illegal {
            config.cpu.illegal_opcodes = false;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logger::init(LevelFilter::Debug)?;
    }
    let config = cli.session_config()?;
    let program = match (&cli.hex, &config.program) {
        (Some(hex), _) => parse_hex(hex)?,
        (None, Some(path)) => read_program(path)?,
        (None, None) => bail!("no program given, use a PROGRAM file, --hex or a config file"),
    };

    let mut memory = Memory::new();
    load_program(&mut memory, config.origin, &program)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let rmtint = interrupted.clone();
    ctrlc::set_handler(move || {
        rmtint.store(true, Ordering::SeqCst);
    })
    .context("cannot install the CTRL-C handler")?;

    let mut session = Session::new(memory, config.cpu, config.max_cycles);
    let report = session.run(&interrupted, |log_line| {
        if cli.trace {
            println!("{}", Colour::Fixed(240).paint(log_line.to_string()));
        }
    })?;

    let colour = match report.reason {
        StopReason::Halted => Colour::Green,
        StopReason::Interrupted | StopReason::CycleLimit => Colour::Yellow,
    };
    println!("{}", colour.paint(report.to_string()));

    Ok(())
}

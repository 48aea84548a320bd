//! Single-cycle MIPS simulator CLI.
//!
//! This binary is the outer driver for the datapath library. It performs:
//! 1. **Loading:** Reads an instruction image (hex text or raw little-endian
//!    words) and an optional initial data image.
//! 2. **Cycle loop:** Runs the simulator until the program ends, the cycle
//!    budget is exhausted, or a trap is raised.
//! 3. **Reporting:** Prints the stop reason, execution statistics, and (on
//!    request) the final register file.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsim_core::Config;
use mipsim_core::sim::loader;
use mipsim_core::sim::{Simulator, StopReason};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Single-cycle MIPS datapath simulator",
    long_about = "Run a MIPS-I subset instruction image through the single-cycle datapath.\n\nImages ending in .hex/.txt are hexadecimal text (one word per line, # comments); anything else is raw little-endian words.\n\nExamples:\n  sim run -f programs/sum.hex\n  sim run -f boot.bin --data init.hex --cycles 10000 --dump-regs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable per-cycle datapath tracing on stderr.
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an instruction image to completion.
    Run {
        /// Instruction image to execute.
        #[arg(short, long)]
        file: PathBuf,

        /// Initial data memory image.
        #[arg(long)]
        data: Option<PathBuf>,

        /// JSON configuration file (memory sizes, start PC, cycle budget).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured cycle budget.
        #[arg(long)]
        cycles: Option<u64>,

        /// Dump the register file after the run.
        #[arg(long)]
        dump_regs: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.trace {
        EnvFilter::new("mipsim_core=trace")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            file,
            data,
            config,
            cycles,
            dump_regs,
        } => cmd_run(&file, data.as_deref(), config.as_deref(), cycles, dump_regs),
    }
}

/// Runs the simulator: loads images, loops on `tick` until done, reports.
fn cmd_run(
    file: &Path,
    data: Option<&Path>,
    config_path: Option<&Path>,
    cycles: Option<u64>,
    dump_regs: bool,
) {
    let config = config_path.map_or_else(Config::default, load_config);

    let mut sim = Simulator::new(&config);

    let image = loader::load_image(file).unwrap_or_else(|e| fatal(&e.to_string()));
    sim.load_program(&image)
        .unwrap_or_else(|e| fatal(&e.to_string()));
    println!(
        "[*] {}: {} words, start pc {:#010x}",
        file.display(),
        image.len(),
        config.general.start_pc
    );

    if let Some(data_path) = data {
        let data_image = loader::load_image(data_path).unwrap_or_else(|e| fatal(&e.to_string()));
        sim.load_data(&data_image)
            .unwrap_or_else(|e| fatal(&e.to_string()));
        println!("[*] {}: {} data words", data_path.display(), data_image.len());
    }

    let budget = cycles.unwrap_or(config.general.max_cycles);
    match sim.run(budget) {
        Ok(StopReason::ProgramEnd) => {
            println!("\n[*] program complete at pc {:#010x}", sim.pc);
        }
        Ok(StopReason::CycleLimit) => {
            println!("\n[*] cycle budget ({budget}) exhausted at pc {:#010x}", sim.pc);
        }
        Err(trap) => {
            eprintln!("\n[!] FATAL TRAP: {trap}");
            eprintln!("{}", sim.regs.dump());
            process::exit(1);
        }
    }

    println!("{}", sim.stats.report());
    if dump_regs {
        println!("\n{}", sim.regs.dump());
    }
}

/// Reads and parses a JSON configuration file, exiting on failure.
fn load_config(path: &Path) -> Config {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| fatal(&format!("could not read config '{}': {e}", path.display())));
    Config::from_json(&text)
        .unwrap_or_else(|e| fatal(&format!("invalid config '{}': {e}", path.display())))
}

/// Prints a fatal error and exits with a failure code.
fn fatal(msg: &str) -> ! {
    eprintln!("\n[!] FATAL: {msg}");
    process::exit(1);
}

//! Command-line shell for the scheduling simulator.
//!
//! Reads process descriptors (one `id burst arrival` triple per line)
//! from a file or stdin, runs the selected discipline, and prints one
//! metrics row per process in input order.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cpu_sched::discipline::Algorithm;
use cpu_sched::models::Ticks;
use cpu_sched::{input, metrics};

/// Simulate CPU scheduling disciplines over a process workload.
#[derive(Parser, Debug)]
#[command(name = "cpu-sched", version)]
struct Args {
    /// Scheduling discipline: fcfs, rr, sjf, or psjf (alias srtf)
    #[arg(short, long)]
    algorithm: Algorithm,

    /// Time quantum in ticks (round-robin only)
    #[arg(short, long)]
    quantum: Option<Ticks>,

    /// Process file; reads stdin when omitted
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let processes = input::parse_processes(&text)?;
    let discipline = args.algorithm.build(args.quantum)?;
    log::info!(
        "running {} over {} processes",
        discipline.name(),
        processes.len()
    );

    let record = discipline.run(&processes);
    let rows = metrics::calculate(&processes, &record)?;

    println!("--- {} ---", discipline.name());
    println!("{:>5} {:>8} {:>8} {:>8} {:>8}", "ID", "T", "M", "R", "P");
    for row in &rows {
        println!(
            "{:>5} {:>8} {:>8} {:>8.2} {:>8.2}",
            row.id, row.completion, row.waiting, row.response_ratio, row.penalty_ratio
        );
    }
    Ok(())
}

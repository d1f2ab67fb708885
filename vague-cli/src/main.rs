//! Vague - run programs in the Vague esoteric language

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, EnvFilter};
use vague_runtime::{HaltReason, TerminalOutput, VMConfig, VM};

/// Run a Vague program.
#[derive(Parser, Debug)]
#[command(name = "vague", version)]
struct Args {
    /// File containing a Vague program.
    file: PathBuf,

    /// Stop after this many executed instructions.
    #[arg(long, short = 'l')]
    max_steps: Option<u64>,

    /// Log every executed instruction (implies trace-level logs for the interpreter).
    #[arg(long)]
    trace: bool,

    /// Match loop brackets once up front instead of scanning on every jump.
    #[arg(long)]
    cache_jumps: bool,

    /// Never style output, even in discouraged mode.
    #[arg(long)]
    plain: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print statistics to stderr after running the program.
    #[arg(long, short = 's')]
    stats: bool,
}

/// Initialize logging to stderr. `RUST_LOG` overrides the verbosity flags.
fn init_logging(args: &Args) {
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let default = if args.trace {
        format!("{level},vague_runtime=trace")
    } else {
        level.to_string()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_stats(steps: u64, halt_reason: &HaltReason, elapsed: Duration) {
    let steps_per_second = steps as f64 / elapsed.as_secs_f64();
    eprintln!("Execution time: {:?}", elapsed);
    eprintln!(
        "Instructions executed: {} ({}/s)",
        steps,
        match steps_per_second {
            n if n >= 1_000_000.0 => format!("{:.1}M", n / 1_000_000.0),
            n if n >= 1_000.0 => format!("{:.1}k", n / 1_000.0),
            n => format!("{:.1}", n),
        }
    );
    let reason = match halt_reason {
        HaltReason::End { ip } => format!("end instruction at {ip}"),
        HaltReason::EndOfProgram => "end of program".to_string(),
        HaltReason::StepLimit => "step limit".to_string(),
    };
    eprintln!("Halted: {reason}");
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let program = vague_lexer::load_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let config = VMConfig {
        max_steps: args.max_steps,
        trace: args.trace,
        cache_jumps: args.cache_jumps,
        allow_styling: !args.plain,
    };
    let mut vm = VM::new(program, TerminalOutput::stdout(), config);

    let start_time = Instant::now();
    let result = vm
        .run()
        .with_context(|| format!("Failed to run {}", args.file.display()))?;
    let elapsed = start_time.elapsed();

    if result.halt_reason == HaltReason::StepLimit {
        tracing::warn!(steps = result.steps, "step limit reached");
    }

    if args.stats {
        print_stats(result.steps, &result.halt_reason, elapsed);
    }

    Ok(())
}

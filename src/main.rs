use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use gdxsv_langmod::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};
use gdxsv_langmod::services::emit::DEFAULT_DISK;
use gdxsv_langmod::{compile, GenError};

/// Compile translation.csv into the gdxsv translation patch include.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Translation table (UTF-8 CSV)
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Generated include file (written as Shift_JIS-2004)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory relative paths are resolved against
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Disk the table is applied to
    #[arg(long, default_value_t = DEFAULT_DISK)]
    disk: u8,

    /// Pin lang_patch_id instead of deriving it from the clock
    #[arg(long)]
    run_id: Option<u64>,

    /// Treat lint warnings as errors
    #[arg(long)]
    strict: bool,

    /// Fail if the include file is missing or out of date; write nothing
    #[arg(long, conflicts_with = "dry_run")]
    check: bool,

    /// Generate but do not write
    #[arg(long)]
    dry_run: bool,

    /// Print a JSON report on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GenError> {
    let args = Args::parse();

    let cfg = Config {
        base_dir: args.base_dir,
        input: args.input,
        output: args.output,
        disk: args.disk,
        run_id: args.run_id,
        strict: args.strict,
        check: args.check,
        dry_run: args.dry_run,
    };

    let report = compile(&cfg)?;

    if args.json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}

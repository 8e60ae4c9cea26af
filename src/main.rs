use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use syncscript::cli::{handle_generate, GenerateArgs};

#[derive(Parser)]
#[command(
    name = "syncscript",
    version,
    about = "Generate human-readable rclone backup scripts",
    long_about = "syncscript reads a declarative list of backup jobs, checks it \
                  against the expected format and prints a shell script that \
                  runs the sync tool once per job."
)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v; logs go to stderr so stdout stays a clean script
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    handle_generate(&cli.generate, &mut stdout.lock())?;

    Ok(())
}

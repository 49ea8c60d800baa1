use clap::Parser;

mod cli;

use cli::launch::{launch_command, LaunchOptions};

#[derive(Parser)]
#[command(name = "launch-terminal")]
#[command(about = "Open a new terminal window and run a command in it")]
#[command(version)]
struct Cli {
    /// Terminal program to use instead of platform auto-detection
    /// (terminal, iterm, warp, wt, powershell, gnome-terminal, konsole, kitty, xterm)
    #[arg(long)]
    terminal: Option<String>,

    /// Bound the launch call itself (the window-creation round-trip), in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Skip checking that the command's first token exists on the search path
    #[arg(long)]
    no_validate: bool,

    /// Emit the launch result as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// The shell command line to run in the new window
    command: String,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (stderr, so --json output stays parseable)
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = launch_command(&LaunchOptions {
        command: cli.command,
        terminal: cli.terminal,
        timeout: cli.timeout,
        no_validate: cli.no_validate,
        json: cli.json,
    });
    std::process::exit(code);
}

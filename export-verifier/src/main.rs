use clap::Parser;
use export_verifier::{cli::Cli, errors::ScriptError};

fn main() -> Result<(), ScriptError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}

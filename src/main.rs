use clap::Parser;
use junit_monorepo::app::{handle_fatal_error, init_logging};
use junit_monorepo::cli::{execute_command, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = execute_command(cli.command, cli.verbose).await {
        handle_fatal_error(error, cli.verbose);
    }
}

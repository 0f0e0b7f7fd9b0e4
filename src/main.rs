use clap::Parser;
use convlint::cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    match convlint::run_command(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

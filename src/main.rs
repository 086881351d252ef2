mod cli;
mod input;
mod session;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), cli.quiet);

    let config = match session.read_config(cli.exponent, cli.capacity) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    let mut heap = match config.build() {
        Ok(heap) => heap,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = session.run(&mut heap) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = if cli.list_engines {
        commands::engines::run()
    } else {
        commands::render::run(
            cli.filename,
            cli.encoding,
            cli.output,
            cli.engine,
            cli.verbose,
        )
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

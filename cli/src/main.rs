pub mod commands;

use clap::Parser;
use commands::Commands;
use log::error;

/// Newton fractal basin renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

fn main() {
    basins::env::init();
    basins::logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::View(args) => commands::view::run(args),
    };

    if let Err(e) = result {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

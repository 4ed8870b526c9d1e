use calc::demo;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Run the calculator demo")]
    Demo,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) | None => {
            demo::run(&mut io::stdout().lock())?;
        }
    }

    Ok(())
}

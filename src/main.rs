use clap::Parser;
use gff_table::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_summary) => {
            // Summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            let error = anyhow::Error::new(error);
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

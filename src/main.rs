mod converter;
mod reader;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Opening catalogue file
    file: String,

    /// Path of the generated table (if not specified, same as the catalogue file with the extension changed)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalogue_path = PathBuf::from(cli.file);

    let openings = reader::parse_openings_file(&catalogue_path)
        .context("Unable to parse opening catalogue")?;

    let table_path = match cli.output {
        Some(output) => PathBuf::from(output),
        None => {
            let mut path = catalogue_path;
            path.set_extension("ts");
            path
        }
    };
    println!("Writing opening table to {}", table_path.to_string_lossy());

    converter::write_table(&openings, &table_path)?;

    Ok(())
}

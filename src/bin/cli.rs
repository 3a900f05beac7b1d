// src/bin/cli.rs
use recipe_explorer::cli;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}

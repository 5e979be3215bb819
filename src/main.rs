mod cache;
mod cells;
mod cli;
mod error;
#[cfg(test)]
mod fixtures;
mod fmt;
mod keywords;
mod loader;
mod logging;
mod models;
mod reports;
mod settings;
mod workbook;

use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let settings_file = cli
        .settings
        .map(PathBuf::from)
        .unwrap_or_else(settings::settings_path);
    let settings = settings::load_settings_from(&settings_file);
    logging::setup_logging(&settings.log_level);

    let result = match cli.command {
        Commands::Init => cli::init::run(&settings_file),
        Commands::Bills {
            file,
            company,
            cost_center,
            json,
        } => cli::bills::run(&file, company, cost_center, json, &settings),
        Commands::Cashflow { file, json } => cli::cashflow::run(&file, json),
        Commands::Income {
            file,
            sources,
            from_date,
            to_date,
            json,
        } => cli::income::run(&file, sources, from_date, to_date, json),
        Commands::Filters { file } => cli::filters::run(&file),
        Commands::Overview { file } => cli::overview::run(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

mod adapters;
mod cli;
mod config;
mod core;
#[cfg(test)]
mod testing;

use clap::Parser;

use cli::Cli;
use config::app_config::{AppConfig, FileConfig, Overrides};

fn main() {
    let args = Cli::parse();
    cli::output::init(args.verbosity());

    let result = FileConfig::load(args.config.as_deref()).and_then(|file| {
        let overrides = Overrides {
            gpg: args.gpg.clone(),
            editor: args.editor.clone(),
        };
        let config = AppConfig::resolve(overrides, file, args.mode());
        cli::commands::edit::execute(&args.file, &config)
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

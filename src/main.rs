use clap::Parser;

mod app;
mod catalog;
mod chat;
mod cli;
mod commands;
mod config;
mod core;
mod display;
mod input;
mod prompt;
mod providers;
mod session;
mod utils;

use crate::app::Application;
use crate::cli::Args;
use crate::commands::create_command_dispatcher;
use crate::config::Config;
use crate::providers::huggingface::HuggingFaceProvider;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.list_models {
        for model in catalog::CATALOG {
            println!("{:<50} {}", model.id, model.label);
        }
        return;
    }

    if let Err(e) = run(args).await {
        display::display_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), crate::core::error::ChatError> {
    let config = Config::load()?;

    let endpoint = args.endpoint.clone().or_else(|| config.endpoint.clone());
    let provider = Box::new(HuggingFaceProvider::new(endpoint)?);
    let dispatcher = create_command_dispatcher();

    let mut application = Application::new(args, &config, provider, dispatcher)?;
    application.run().await
}

use crate::providers::{MAX_LENGTH_RANGE, TEMPERATURE_RANGE};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal chat client for hosted text-generation models")]
pub struct Args {
    /// One-shot message to send (omit together with --chat to read stdin)
    pub query: Option<String>,

    /// Start an interactive chat session
    #[arg(short, long)]
    pub chat: bool,

    /// Model identifier from the catalog (see --list-models)
    #[arg(short, long)]
    pub model: Option<String>,

    /// HuggingFace API token (overrides the config file)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Inference endpoint base URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Output length bound (50-500)
    #[arg(long, value_parser = parse_max_length)]
    pub max_length: Option<u32>,

    /// Sampling temperature (0.1-2.0)
    #[arg(long, value_parser = parse_temperature)]
    pub temperature: Option<f64>,

    /// Print the model catalog and exit
    #[arg(long)]
    pub list_models: bool,
}

fn parse_max_length(s: &str) -> Result<u32, String> {
    let value: u32 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    if MAX_LENGTH_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "must be between {} and {}",
            MAX_LENGTH_RANGE.start(),
            MAX_LENGTH_RANGE.end()
        ))
    }
}

fn parse_temperature(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    if TEMPERATURE_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "must be between {} and {}",
            TEMPERATURE_RANGE.start(),
            TEMPERATURE_RANGE.end()
        ))
    }
}

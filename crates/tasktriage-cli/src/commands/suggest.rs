//! Suggestion engine command.
//!
//! Reads a JSON request (tasks + context + optional preferences/workload)
//! from a file or stdin and prints the engine's response as JSON.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use chrono::Utc;
use tasktriage_core::{Config, SuggestRequest, SuggestionEngine};

pub fn run(file: Option<PathBuf>, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let request: SuggestRequest = serde_json::from_str(&raw)?;

    let config = Config::load_or_default();
    let engine = SuggestionEngine::from_config(&config);
    let response = engine.suggest(&request, Utc::now());

    let output = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");
    Ok(())
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bonza CLI entrypoint.
//!
//! Reads a word list (one word per line), places the words, cuts the grid into chunks and prints
//! both. `RUST_LOG=bonza=debug` shows placement attempts and segmentation details.

use std::error::Error;

use bonza::config::GeneratorConfig;
use bonza::layout::{build_chunk_layout, place_words_with_retries, Placement};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <words-file> [--seed <u64>] [--average <n>] [--attempts <n>] [--layout-out <path>] [--chunks-out <path>] [--config <json>]\n  {program} --schema\n\n<words-file> holds one word per line; blank lines are ignored.\n--average is the target chunk size (default 4), --attempts the placement retry budget (default 50).\n--config reads the same settings from a JSON file; flags override it.\n--schema prints the JSON schemas of the layout and chunk files."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    words_file: Option<String>,
    seed: Option<u64>,
    average_count: Option<usize>,
    max_attempts: Option<usize>,
    layout_out: Option<String>,
    chunks_out: Option<String>,
    config: Option<String>,
    schema: bool,
}

fn parse_value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    slot: &Option<T>,
) -> Result<T, ()> {
    if slot.is_some() {
        return Err(());
    }
    let raw = args.next().ok_or(())?;
    raw.parse().map_err(|_| ())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => options.seed = Some(parse_value(&mut args, &options.seed)?),
            "--average" => {
                let average = parse_value(&mut args, &options.average_count)?;
                if average == 0 {
                    return Err(());
                }
                options.average_count = Some(average);
            }
            "--attempts" => {
                let attempts = parse_value(&mut args, &options.max_attempts)?;
                if attempts == 0 {
                    return Err(());
                }
                options.max_attempts = Some(attempts);
            }
            "--layout-out" => options.layout_out = Some(parse_value(&mut args, &options.layout_out)?),
            "--chunks-out" => options.chunks_out = Some(parse_value(&mut args, &options.chunks_out)?),
            "--config" => options.config = Some(parse_value(&mut args, &options.config)?),
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.words_file.is_some() {
                    return Err(());
                }
                options.words_file = Some(arg);
            }
        }
    }

    if options.schema != options.words_file.is_none() {
        return Err(());
    }

    Ok(options)
}

fn resolve_config(options: &CliOptions) -> Result<GeneratorConfig, Box<dyn Error>> {
    let mut config = match &options.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = Some(seed);
    }
    if let Some(average_count) = options.average_count {
        config.average_count = average_count;
    }
    if let Some(max_attempts) = options.max_attempts {
        config.max_attempts = max_attempts;
    }
    Ok(config.validate()?)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "bonza".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.schema {
            let schemas = serde_json::json!({
                "layout": bonza::store::layout_json_schema(),
                "chunks": bonza::store::chunks_json_schema(),
            });
            println!("{}", serde_json::to_string_pretty(&schemas)?);
            return Ok(());
        }

        let config = resolve_config(&options)?;
        let words_file = options.words_file.as_deref().unwrap_or_default();
        let words = bonza::format::read_word_file(words_file)?;
        log::info!(target: "bonza", "read {} words from {words_file}", words.len());

        let mut rng = config.random_source();
        let layout = match place_words_with_retries(&words, &mut rng, config.max_attempts)? {
            Placement::Placed(layout) => layout,
            Placement::Stuck(stuck) => {
                return Err(format!(
                    "could not place every word in {} attempts; still pending: {}",
                    config.max_attempts,
                    stuck.pending.join(", ")
                )
                .into());
            }
        };
        let chunks = build_chunk_layout(&layout, config.average_count, &mut rng)?;

        println!("{}", bonza::render::render_layout_text(&layout)?);
        println!();
        println!("{}", bonza::render::render_chunk_summary(&chunks));

        if let Some(path) = &options.layout_out {
            bonza::store::save_layout(path, &layout)?;
        }
        if let Some(path) = &options.chunks_out {
            bonza::store::save_chunks(path, &chunks)?;
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("bonza: {err}");
        std::process::exit(1);
    }
}

use anyhow::{Context, Result};
use linemark_config::GrammarConfig;
use linemark_engine::{Grammar, parse_text};
use std::{
    env,
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

const DUMP_GRAMMAR: &str = "--dump-grammar";

/// Loads the grammar from the given file, the default config file, or
/// falls back to the built-in tables.
fn load_grammar(path: Option<PathBuf>) -> GrammarConfig {
    match path {
        Some(path) => match GrammarConfig::load_from_path(&path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                eprintln!("Error: Grammar file '{}' not found", path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => match GrammarConfig::load() {
            Ok(Some(config)) => {
                log::info!(
                    "Using grammar from {}",
                    GrammarConfig::config_path().display()
                );
                config
            }
            Ok(None) => GrammarConfig::default(),
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                process::exit(1);
            }
        },
    }
}

fn render(grammar: &Grammar, input: &str, out: &mut impl Write) -> Result<()> {
    let doc = parse_text(grammar, input)?;
    for line in &doc.lines {
        writeln!(out, r#"<div class="{}">{}</div>"#, line.line_type(), line.markup)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();

    let grammar_path = match args.len() {
        1 => None,
        2 if args[1] == DUMP_GRAMMAR => {
            print!("{}", GrammarConfig::builtin().to_toml()?);
            return Ok(());
        }
        2 => Some(PathBuf::from(&args[1])),
        _ => {
            eprintln!("Usage: {} [grammar.toml | {DUMP_GRAMMAR}] < input.md", args[0]);
            process::exit(1);
        }
    };

    let grammar = match load_grammar(grammar_path).compile() {
        Ok(grammar) => grammar,
        Err(e) => {
            eprintln!("Error: Invalid grammar: {e}");
            process::exit(1);
        }
    };

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let stdout = io::stdout();
    render(&grammar, &input, &mut stdout.lock())
}

//! Command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu
//! cargo run
//!
//! # Non-interactive
//! cargo run -- --choice 4 --output-dir pages/
//! echo 4 | cargo run
//! ```

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::Input;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pokedex_page::app;
use pokedex_page::config::{self, Config};
use pokedex_page::domain::catalog::SpeciesChoice;

/// Render a Pokémon from PokeAPI into a static HTML page.
#[derive(Parser)]
#[command(name = "pokedex-page")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Menu option (1-4); prompts when omitted
    #[arg(short, long)]
    choice: Option<String>,

    /// Directory for the generated page (overrides OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    init_tracing(&config);
    config.print_summary();

    let input = match cli.choice {
        Some(choice) => choice,
        None => prompt_choice()?,
    };

    let choice = match SpeciesChoice::parse(&input) {
        Ok(choice) => choice,
        Err(e) => {
            println!("{}", e.to_string().red());
            return Ok(());
        }
    };

    println!(
        "{}",
        format!("Downloading data for {}...", choice.label()).bright_blue()
    );

    let path = app::generate(&config, choice).await?;

    println!(
        "{} {}",
        "File generated:".green().bold(),
        path.display().to_string().cyan()
    );

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn prompt_choice() -> Result<String> {
    println!("{}", "Choose a Pokémon:".bright_white().bold());
    for choice in SpeciesChoice::ALL {
        println!("  {}", choice);
    }

    if io::stdin().is_terminal() {
        let input = Input::<String>::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .unwrap_or_else(|e| {
                debug!("Prompt closed: {}", e);
                String::new()
            });
        return Ok(input);
    }

    print!("> ");
    io::stdout().flush()?;
    Ok(read_answer(&mut io::stdin().lock()))
}

/// Reads one answer line. End of input and read failures yield an empty
/// answer, which the menu then rejects.
fn read_answer<R: BufRead>(reader: &mut R) -> String {
    let mut line = String::new();
    if let Err(e) = reader.read_line(&mut line) {
        debug!("Could not read answer: {}", e);
        line.clear();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_page::InputError;

    #[test]
    fn test_read_answer_takes_first_line() {
        let mut input = "2\n4\n".as_bytes();

        let answer = read_answer(&mut input);

        assert_eq!(answer, "2\n");
        assert_eq!(SpeciesChoice::parse(&answer).unwrap(), SpeciesChoice::Charmander);
    }

    #[test]
    fn test_read_answer_without_newline() {
        let mut input = "3".as_bytes();
        assert_eq!(SpeciesChoice::parse(&read_answer(&mut input)).unwrap(), SpeciesChoice::Squirtle);
    }

    #[test]
    fn test_read_answer_non_numeric() {
        let mut input = "abc\n".as_bytes();

        let result = SpeciesChoice::parse(&read_answer(&mut input));

        assert_eq!(result, Err(InputError::NotANumber("abc".to_string())));
    }

    #[test]
    fn test_read_answer_at_end_of_input() {
        let mut input = "".as_bytes();

        let answer = read_answer(&mut input);

        assert_eq!(answer, "");
        assert!(matches!(
            SpeciesChoice::parse(&answer),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_read_answer_invalid_utf8() {
        let mut input: &[u8] = &[0xff, 0xfe, b'\n'];

        let answer = read_answer(&mut input);

        assert!(SpeciesChoice::parse(&answer).is_err());
    }
}

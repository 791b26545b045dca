use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cityweather_core::{Config, OpenWeatherSource, Reporter};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::{debug, info};

const GREETING: &str = "Hello! Enter the city in chat and get forecast! ";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather and 24h forecast for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Print the weather report for a city.
    Report {
        /// City name; several words are joined with a space, e.g. `New York`.
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Answer one city per line until an empty line, Esc or Ctrl-C.
    Chat,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Report { city } => {
                let reporter = build_reporter()?;
                print_reply(&reporter.report(&city_from_words(&city)).await);
                Ok(())
            }
            Command::Chat => chat().await,
        }
    }
}

fn build_reporter() -> Result<Reporter<OpenWeatherSource>> {
    let config = Config::load()?;
    let source = OpenWeatherSource::new(config.source_config()?)
        .context("Failed to set up the OpenWeather client")?;
    debug!(base_url = %config.base_url, "Reporter ready");
    Ok(Reporter::new(source))
}

fn configure() -> Result<()> {
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save_to(&path)?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn chat() -> Result<()> {
    let reporter = build_reporter()?;
    println!("{GREETING}");

    loop {
        let input = match Text::new("City:").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city"),
        };

        let city = input.trim();
        if city.is_empty() {
            break;
        }

        print_reply(&reporter.report(city).await);
    }

    info!("Chat session finished");
    Ok(())
}

fn city_from_words(words: &[String]) -> String {
    words.join(" ")
}

/// Reports already end with a line break, failure messages don't.
fn print_reply(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

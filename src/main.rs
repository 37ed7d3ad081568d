use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use log::info;

use passforge::charset::CharacterClass;
use passforge::clipboard::{self, SystemClipboard};
use passforge::config::{self, UserSettings};
use passforge::generator::{self, GenerationSettings, Password};
use passforge::strength::{self, StrengthTier};
use passforge::{Error, Result};

const METER_WIDTH: usize = 20;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file to use instead of the one in the config directory
    #[arg(long, global = true, env = "PASSFORGE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new password (the default)
    Generate(GenerateArgs),

    /// Rate the strength of a password
    Score {
        /// The password to rate, `-` reads it from stdin
        #[arg(required = true)]
        password: String,
    },
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Number of characters
    #[arg(short, long, value_parser = parse_length)]
    length: Option<usize>,

    /// Include lowercase letters (a-z)
    #[arg(long, overrides_with = "no_lowercase")]
    lowercase: bool,
    #[arg(long, overrides_with = "lowercase")]
    no_lowercase: bool,

    /// Include uppercase letters (A-Z)
    #[arg(long, overrides_with = "no_uppercase")]
    uppercase: bool,
    #[arg(long, overrides_with = "uppercase")]
    no_uppercase: bool,

    /// Include numbers (0-9)
    #[arg(long, overrides_with = "no_numbers")]
    numbers: bool,
    #[arg(long, overrides_with = "numbers")]
    no_numbers: bool,

    /// Include symbols (!@#$%^&*)
    #[arg(long, overrides_with = "no_symbols")]
    symbols: bool,
    #[arg(long, overrides_with = "symbols")]
    no_symbols: bool,

    /// Copy the password to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Only print the password
    #[arg(short, long)]
    quiet: bool,
}

impl GenerateArgs {
    fn toggle(&self, class: CharacterClass) -> Option<bool> {
        let (on, off) = match class {
            CharacterClass::Lowercase => (self.lowercase, self.no_lowercase),
            CharacterClass::Uppercase => (self.uppercase, self.no_uppercase),
            CharacterClass::Digits => (self.numbers, self.no_numbers),
            CharacterClass::Symbols => (self.symbols, self.no_symbols),
        };
        match (on, off) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Command line flags take precedence over the configured defaults.
    fn apply(&self, mut settings: GenerationSettings) -> GenerationSettings {
        if let Some(length) = self.length {
            settings.length = length;
        }
        for class in CharacterClass::ALL {
            if let Some(included) = self.toggle(class) {
                settings.set(class, included);
            }
        }
        settings
    }
}

fn parse_length(s: &str) -> std::result::Result<usize, String> {
    let length: i64 = s.parse().map_err(|_| format!("{s} isn't a number"))?;
    config::validate_length(length).map_err(|err| err.to_string())
}

fn meter_bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) * METER_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(METER_WIDTH - filled))
}

fn render_meter(password: &str) -> String {
    let score = strength::score(password);
    let tier = StrengthTier::from_score(score);
    let bar = console::style(meter_bar(score)).color256(tier.color().ansi256());

    format!("Password Strength: {} ({}/100) [{}]", tier.label(), score, bar)
}

fn copy_to_clipboard(password: &Password, clear_after: u64) -> Result<()> {
    let mut target = SystemClipboard::new()?;
    clipboard::copy_password(&mut target, password)?;
    println!("Password copied to clipboard");

    if clear_after > 0 {
        println!("The clipboard will be cleared in {clear_after} seconds");
        clipboard::clear_after(&mut target, Duration::from_secs(clear_after))?;
    }
    Ok(())
}

fn generate(args: &GenerateArgs, user_settings: &UserSettings) -> Result<()> {
    let settings = args.apply(user_settings.generation);
    let password = generator::generate(&settings);

    println!("{password}");
    if !args.quiet {
        println!("{}", render_meter(password.as_str()));
    }

    if args.copy {
        if let Err(err) = copy_to_clipboard(&password, user_settings.clear_clipboard_after) {
            eprintln!("Failed to copy password, please try again or copy manually.");
            return Err(err);
        }
    }
    Ok(())
}

fn score(password: &str) -> Result<()> {
    let password = if password == "-" {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        line.trim_end_matches(['\n', '\r']).to_string()
    } else {
        password.to_string()
    };

    let score = strength::score(&password);
    println!("Score: {score}/100");
    println!("Label: {}", strength::label_for(score));
    println!("Color: {}", strength::color_tier_for(score));
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);

    let settings = config::read_config(cli.config.as_deref(), &home, &xdg_config_home)?;
    let user_settings = UserSettings::from_config(&settings)?;
    info!("using settings {:?}", user_settings);

    match cli.command {
        Some(Command::Generate(args)) => generate(&args, &user_settings),
        Some(Command::Score { password }) => score(&password),
        None => generate(&GenerateArgs::default(), &user_settings),
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        match err {
            Error::ConfigError(err) => eprintln!("Error reading settings: {err}"),
            err => eprintln!("Error: {err}"),
        }
        process::exit(1);
    }
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod main_tests;

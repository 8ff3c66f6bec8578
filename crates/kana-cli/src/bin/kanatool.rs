use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kana_cli::commands::convert_ops::{self, Conversion};
use kana_cli::commands::{config_ops, CliError};
use kana_cli::trace_init::init_tracing;
use kana_core::settings::settings;
use kana_core::Script;

#[derive(Parser)]
#[command(name = "kanatool", about = "Romaji to kana conversion tool")]
struct Cli {
    /// Custom romaji table (TOML)
    #[arg(long, global = true)]
    romaji: Option<String>,
    /// Custom settings file (TOML)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for JSON trace output (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// Suppress the conversion notice regardless of settings
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert romaji to hiragana
    Hiragana {
        /// Romaji text (reads stdin when omitted)
        text: Option<String>,
    },
    /// Convert romaji to katakana
    Katakana {
        /// Romaji text (reads stdin when omitted)
        text: Option<String>,
    },
    /// Convert hiragana to katakana, leaving everything else as is
    Kata {
        /// Hiragana text (reads stdin when omitted)
        text: Option<String>,
    },
    /// Export default romaji mappings as TOML
    RomajiExport,
    /// Validate a custom romaji TOML file
    RomajiValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Some(dir) = &cli.log_dir {
        init_tracing(dir);
    }
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    config_ops::load_custom(cli.romaji.as_deref(), cli.settings.as_deref())?;
    let notice = !cli.quiet && settings().notice.show_conversion_notice;

    let (text, conversion) = match cli.command {
        Command::Hiragana { text } => (text, Conversion::Romaji(Script::Hiragana)),
        Command::Katakana { text } => (text, Conversion::Romaji(Script::Katakana)),
        Command::Kata { text } => (text, Conversion::HiraganaToKatakana),
        Command::RomajiExport => return config_ops::romaji_export(&mut io::stdout().lock()),
        Command::RomajiValidate { file } => {
            println!("{}", config_ops::romaji_validate(&file)?);
            return Ok(());
        }
        Command::SettingsExport => return config_ops::settings_export(&mut io::stdout().lock()),
        Command::SettingsValidate { file } => {
            println!("{}", config_ops::settings_validate(&file)?);
            return Ok(());
        }
    };

    convert_ops::run(
        text,
        conversion,
        notice,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

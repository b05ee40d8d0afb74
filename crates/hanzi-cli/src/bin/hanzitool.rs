use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hanzi_cli::commands::{config_ops, convert_ops};
use hanzi_core::ConversionMode;

#[derive(Parser)]
#[command(name = "hanzitool", about = "Chinese-to-pinyin normalization for speech synthesis")]
struct Cli {
    /// Settings TOML replacing the built-in defaults
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to pinyin
    Convert {
        /// Text to convert
        text: String,
        /// compact | spaced | compact-pronunciation | spaced-pronunciation
        #[arg(short, long)]
        mode: Option<ConversionMode>,
        /// Syllable override TOML ([syllables] table)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Pronunciation map TOML ([mappings] table)
        #[arg(long)]
        pronunciation: Option<PathBuf>,
    },
    /// Show character statistics and converter availability
    Info {
        /// Text to inspect
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a file line by line
    Batch {
        /// Input text file
        input_file: PathBuf,
        /// Output text file
        output_file: PathBuf,
        #[arg(short, long)]
        mode: Option<ConversionMode>,
        #[arg(long)]
        table: Option<PathBuf>,
        #[arg(long)]
        pronunciation: Option<PathBuf>,
    },
    /// Print the built-in pronunciation map TOML
    PronunciationExport,
    /// Validate a pronunciation map TOML file
    PronunciationValidate {
        file: PathBuf,
    },
    /// Print the built-in settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        file: PathBuf,
    },
}

fn main() {
    hanzi_cli::init_tracing();
    let cli = Cli::parse();

    if let Some(ref path) = cli.settings {
        if let Err(e) = config_ops::install_settings(path) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Command::Convert {
            text,
            mode,
            table,
            pronunciation,
        } => convert_ops::convert_cmd(&text, mode, table.as_deref(), pronunciation.as_deref()),
        Command::Info { text, json } => convert_ops::info_cmd(&text, json),
        Command::Batch {
            input_file,
            output_file,
            mode,
            table,
            pronunciation,
        } => convert_ops::batch_cmd(
            &input_file,
            &output_file,
            mode,
            table.as_deref(),
            pronunciation.as_deref(),
        ),
        Command::PronunciationExport => config_ops::pronunciation_export(),
        Command::PronunciationValidate { file } => config_ops::pronunciation_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use klavye_cli::commands::simulate_ops::{SimulateOptions, Timing};
use klavye_cli::commands::{config_ops, dict_ops, import_ops, simulate_ops, user_data_ops};
use klavye_engine::Layout;

#[derive(Parser)]
#[command(name = "klavyetool", about = "Klavye text-entry engine tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the keypad digit sequence of each word
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Look up the words stored under a keypad digit sequence
    Lookup {
        /// Digit sequence (2-9)
        sequence: String,
        /// User data file to merge in (optional)
        #[arg(long)]
        user_data: Option<PathBuf>,
        /// Word list to import first (repeatable)
        #[arg(long = "words")]
        word_files: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show dictionary statistics
    Stats {
        /// User data file to merge in (optional)
        #[arg(long)]
        user_data: Option<PathBuf>,
        /// Word list to import first (repeatable)
        #[arg(long = "words")]
        word_files: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the importable tokens of a text file, one per line
    Clean {
        /// Input text file
        file: String,
    },
    /// Import word lists and report what was added
    Import {
        /// Input text files
        #[arg(required = true)]
        files: Vec<String>,
        /// User data file (required with --learn)
        #[arg(long)]
        user_data: Option<PathBuf>,
        /// Store the words as learned words in the user data file
        #[arg(long)]
        learn: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Drive a session with a key script or typed text
    Simulate {
        /// Keyboard layout: numeric, compact or standard
        #[arg(long, default_value = "numeric")]
        layout: Layout,
        /// Type this text instead of giving keys
        #[arg(long, conflicts_with = "keys")]
        text: Option<String>,
        /// Milliseconds between events
        #[arg(long, default_value = "100")]
        step_ms: u64,
        /// Milliseconds added by <wait> (default: the multi-tap window)
        #[arg(long)]
        wait_ms: Option<u64>,
        /// User data file to merge in (optional)
        #[arg(long)]
        user_data: Option<PathBuf>,
        /// Word list to import first (repeatable)
        #[arg(long = "words")]
        word_files: Vec<String>,
        /// Save learned data back to --user-data
        #[arg(long, requires = "user_data")]
        save: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Key ids and control tokens (<space>, <enter>, <bs>, <sel:N>, <wait>, ...)
        keys: Vec<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Manage learned words
    UserData {
        /// User data file (default: ~/.local/share/klavye/user_data.kld)
        #[arg(long)]
        file: Option<String>,
        #[command(subcommand)]
        action: UserDataAction,
    },
}

#[derive(Subcommand)]
enum UserDataAction {
    /// List learned words with their frequencies
    List {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Learn words as if they had been typed
    Learn {
        /// Words to learn
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Forget all learned words
    Clear,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { words, json } => dict_ops::encode(&words, json),
        Command::Lookup {
            sequence,
            user_data,
            word_files,
            json,
        } => dict_ops::lookup(&sequence, user_data.as_deref(), &word_files, json),
        Command::Stats {
            user_data,
            word_files,
            json,
        } => dict_ops::stats(user_data.as_deref(), &word_files, json),
        Command::Clean { file } => import_ops::clean(&file),
        Command::Import {
            files,
            user_data,
            learn,
            json,
        } => import_ops::import(&files, user_data.as_deref(), learn, json),
        Command::Simulate {
            layout,
            text,
            step_ms,
            wait_ms,
            user_data,
            word_files,
            save,
            json,
            keys,
        } => {
            let wait_ms = wait_ms
                .unwrap_or_else(|| klavye_core::settings::settings().session.multitap_window_ms);
            simulate_ops::simulate(&SimulateOptions {
                layout,
                keys: &keys,
                text: text.as_deref(),
                timing: Timing { step_ms, wait_ms },
                user_data: user_data.as_deref(),
                word_files: &word_files,
                save,
                json,
            });
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::UserData { file, action } => {
            let path_str = file.unwrap_or_else(user_data_ops::default_user_data_path);
            let path = Path::new(&path_str);
            match action {
                UserDataAction::List { json } => user_data_ops::user_data_list(path, json),
                UserDataAction::Learn { words } => user_data_ops::user_data_learn(path, &words),
                UserDataAction::Clear => user_data_ops::user_data_clear(path),
            }
        }
    }
}

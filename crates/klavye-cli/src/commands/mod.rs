use std::path::Path;
use std::sync::Arc;

use klavye_engine::KlavyeEngine;

/// Unwrap a result or print the error to stderr and exit 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod dict_ops;
pub mod import_ops;
pub mod simulate_ops;
pub mod user_data_ops;

/// Engine seeded with the built-in vocabulary, the user data at `user_data`
/// (if given) and every word list in `word_files`.
pub fn open_engine(user_data: Option<&Path>, word_files: &[String]) -> Arc<KlavyeEngine> {
    let engine = match user_data {
        Some(path) => die!(
            KlavyeEngine::open(path),
            "Error opening user data {}: {}",
            path.display()
        ),
        None => KlavyeEngine::new(),
    };
    for file in word_files {
        let tokens = import_ops::read_tokens(file);
        let report = engine.import_tokens(&tokens);
        eprintln!(
            "{file}: {} imported, {} duplicates, {} rejected",
            report.inserted, report.duplicates, report.rejected
        );
    }
    engine
}

fn print_json<T: serde::Serialize>(value: &T) {
    let out = die!(serde_json::to_string_pretty(value), "Error: {}");
    println!("{out}");
}

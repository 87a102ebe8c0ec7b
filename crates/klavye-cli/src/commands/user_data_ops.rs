use std::path::Path;

use klavye_core::dict::{normalize, Origin};

use super::open_engine;

pub fn default_user_data_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    format!("{home}/.local/share/klavye/user_data.kld")
}

pub fn user_data_list(path: &Path, json: bool) {
    let engine = open_engine(Some(path), &[]);
    let dict = engine.dictionary();
    let words = engine.learned_words();
    if json {
        let rows: Vec<(String, u32)> = words
            .into_iter()
            .map(|w| {
                let f = dict.frequency(&w);
                (w, f)
            })
            .collect();
        super::print_json(&rows);
        return;
    }
    if words.is_empty() {
        println!("(empty)");
        return;
    }
    for word in &words {
        println!("{word}\t{}", dict.frequency(word));
    }
    println!("---");
    println!("{} learned words", words.len());
}

/// Forget every learned word and restore built-in frequencies.
pub fn user_data_clear(path: &Path) {
    let engine = open_engine(Some(path), &[]);
    let count = engine.learned_words().len();
    engine.clear_learned_words();
    die!(
        engine.save_user_data(path),
        "Error saving {}: {}",
        path.display()
    );
    println!("Cleared {count} learned words");
}

/// Record `words` as learned, as if they had been typed.
pub fn user_data_learn(path: &Path, words: &[String]) {
    let engine = open_engine(Some(path), &[]);
    let dict = engine.dictionary();
    for raw in words {
        let Some(word) = normalize(raw) else {
            println!("Rejected: {raw}");
            continue;
        };
        dict.insert(&word, Origin::Learned);
        dict.bump_frequency(&word);
        println!("Learned: {word} ({})", dict.frequency(&word));
    }
    die!(
        engine.save_user_data(path),
        "Error saving {}: {}",
        path.display()
    );
}

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;

use klavye_core::dict::{normalize, DictStats, Dictionary, ImportReport, Origin, MIN_WORD_LENGTH};
use klavye_core::unicode::{is_alphabet_letter, lowercase};

/// Split free text into importable tokens.
///
/// Text is lowercased with Turkish rules, anything outside the alphabet
/// becomes a word break, and tokens shorter than the dictionary minimum are
/// dropped. Each token appears once, in first-seen order.
pub fn clean_tokens(text: &str) -> Vec<String> {
    let cleaned: String = lowercase(text)
        .chars()
        .map(|c| if is_alphabet_letter(c) { c } else { ' ' })
        .collect();
    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_WORD_LENGTH)
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

pub fn read_tokens(file: &str) -> Vec<String> {
    let text = die!(fs::read_to_string(file), "Error reading {file}: {}");
    clean_tokens(&text)
}

/// Print the cleaned tokens of `file`, one per line.
pub fn clean(file: &str) {
    for token in read_tokens(file) {
        println!("{token}");
    }
}

/// Record `tokens` as learned words in `dict`.
pub fn learn_tokens(dict: &Dictionary, tokens: &[String]) -> ImportReport {
    let mut report = ImportReport::default();
    for token in tokens {
        let Some(word) = normalize(token) else {
            report.rejected += 1;
            continue;
        };
        if dict.insert(&word, Origin::Learned) {
            report.inserted += 1;
        } else {
            report.duplicates += 1;
        }
    }
    report
}

#[derive(Serialize)]
struct ImportSummary {
    tokens: usize,
    report: ImportReport,
    stats: DictStats,
}

/// Import word lists into the seeded vocabulary and report the outcome.
///
/// With `learn`, tokens are recorded as learned words in the user data at
/// `user_data` instead, which persists them.
pub fn import(files: &[String], user_data: Option<&Path>, learn: bool, json: bool) {
    let engine = super::open_engine(user_data, &[]);
    let tokens: Vec<String> = files.iter().flat_map(|f| read_tokens(f)).collect();

    let report = if learn {
        let Some(path) = user_data else {
            eprintln!("Error: --learn needs a user data file");
            std::process::exit(1);
        };
        let report = learn_tokens(engine.dictionary(), &tokens);
        die!(
            engine.save_user_data(path),
            "Error saving {}: {}",
            path.display()
        );
        report
    } else {
        engine.import_tokens(&tokens)
    };

    let summary = ImportSummary {
        tokens: tokens.len(),
        report,
        stats: engine.stats(),
    };
    if json {
        super::print_json(&summary);
    } else {
        println!(
            "{} tokens: {} inserted, {} duplicates, {} rejected",
            summary.tokens, report.inserted, report.duplicates, report.rejected
        );
        println!(
            "dictionary: {} built-in, {} learned",
            summary.stats.builtin_words, summary.stats.learned_words
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_tokens_turkish_lowercase() {
        assert_eq!(clean_tokens("İstanbul IŞIK"), vec!["istanbul", "ışık"]);
    }

    #[test]
    fn test_clean_tokens_breaks_on_non_letters() {
        assert_eq!(
            clean_tokens("elma,armut;kiraz-2024 w3c"),
            vec!["elma", "armut", "kiraz"]
        );
    }

    #[test]
    fn test_clean_tokens_drops_short_and_duplicates() {
        assert_eq!(
            clean_tokens("a ev Ev ev. o gel"),
            vec!["ev", "gel"]
        );
    }

    #[test]
    fn test_clean_tokens_empty() {
        assert!(clean_tokens("  123 ... !").is_empty());
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_learn_tokens_counts_rejected_apart_from_duplicates() {
        let dict = Dictionary::new();
        dict.insert("ev", Origin::Learned);
        let report = learn_tokens(&dict, &strings(&["ev", "kitap", "x", "wxq", "kitap"]));
        assert_eq!(report.inserted, 1);
        assert_eq!(report.duplicates, 2);
        assert_eq!(report.rejected, 2);
        assert_eq!(dict.learned_words(), vec!["ev", "kitap"]);
    }

    #[test]
    fn test_learned_tokens_survive_save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.kld");

        let engine = klavye_engine::KlavyeEngine::new();
        let report = learn_tokens(engine.dictionary(), &strings(&["zımbalık", "Papağan", "q"]));
        assert_eq!((report.inserted, report.rejected), (2, 1));
        engine.save_user_data(&path).unwrap();

        let reopened = klavye_engine::KlavyeEngine::open(&path).unwrap();
        assert_eq!(reopened.learned_words(), vec!["zımbalık", "papağan"]);
    }
}

use std::path::Path;

use serde::Serialize;

use klavye_engine::encode_word;

#[derive(Serialize)]
struct Encoded<'a> {
    word: &'a str,
    sequence: String,
}

pub fn encode(words: &[String], json: bool) {
    let rows: Vec<Encoded> = words
        .iter()
        .map(|w| Encoded {
            word: w,
            sequence: encode_word(w),
        })
        .collect();
    if json {
        super::print_json(&rows);
        return;
    }
    for row in &rows {
        println!("{}\t{}", row.word, row.sequence);
    }
}

#[derive(Serialize)]
struct Lookup<'a> {
    sequence: &'a str,
    words: Vec<(String, u32)>,
}

/// Words stored under a keypad digit sequence, best first.
pub fn lookup(sequence: &str, user_data: Option<&Path>, word_files: &[String], json: bool) {
    if !sequence.chars().all(|c| ('2'..='9').contains(&c)) {
        eprintln!("Error: {sequence:?} is not a keypad sequence (digits 2-9)");
        std::process::exit(1);
    }
    let engine = super::open_engine(user_data, word_files);
    let dict = engine.dictionary();
    let words: Vec<(String, u32)> = engine
        .lookup(sequence)
        .into_iter()
        .map(|w| {
            let f = dict.frequency(&w);
            (w, f)
        })
        .collect();

    if json {
        super::print_json(&Lookup { sequence, words });
        return;
    }
    if words.is_empty() {
        println!("(no words)");
        return;
    }
    for (word, frequency) in &words {
        println!("{word}\t{frequency}");
    }
}

pub fn stats(user_data: Option<&Path>, word_files: &[String], json: bool) {
    let engine = super::open_engine(user_data, word_files);
    let s = engine.stats();
    if json {
        super::print_json(&s);
        return;
    }
    println!("built-in words:      {}", s.builtin_words);
    println!("learned words:       {}", s.learned_words);
    println!("key sequences:       {}", s.sequences);
    println!("tracked frequencies: {}", s.tracked_frequencies);
}

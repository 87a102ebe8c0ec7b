use super::*;

#[test]
fn insert_and_exact_lookup() {
    let dict = make_dict(&["ev", "eve"]);
    assert_eq!(dict.exact_lookup("38"), vec!["ev"]);
    assert_eq!(dict.exact_lookup("383"), vec!["eve"]);
    assert!(dict.exact_lookup("999").is_empty());
}

#[test]
fn insert_normalizes() {
    let dict = Dictionary::new();
    assert!(dict.insert("IĞDIR", Origin::Builtin));
    assert!(dict.contains("ığdır"));
    assert!(dict.insert("Kalem!", Origin::Builtin));
    assert!(dict.contains("kalem"));
    assert!(!dict.insert("kalem", Origin::Builtin));
}

#[test]
fn insert_rejects_invalid_words() {
    let dict = Dictionary::new();
    assert!(!dict.insert("a", Origin::Builtin));
    assert!(!dict.insert("", Origin::Builtin));
    assert!(!dict.insert("42", Origin::Builtin));
    assert!(!dict.insert("café", Origin::Builtin));
    assert_eq!(dict.stats().builtin_words, 0);
}

#[test]
fn insert_does_not_bump_existing_frequency() {
    let dict = make_dict(&["elma"]);
    dict.bump_frequency("elma");
    dict.bump_frequency("elma");
    assert_eq!(dict.frequency("elma"), 3);
    dict.insert("elma", Origin::Builtin);
    dict.insert("elma", Origin::Learned);
    assert_eq!(dict.frequency("elma"), 3);
}

#[test]
fn bump_creates_counter() {
    let dict = Dictionary::new();
    assert_eq!(dict.frequency("yeni"), 0);
    dict.bump_frequency("yeni");
    assert_eq!(dict.frequency("yeni"), 1);
}

#[test]
fn bump_strips_punctuation() {
    let dict = make_dict(&["ev"]);
    let tracked = dict.stats().tracked_frequencies;
    let before = dict.frequency("ev");
    dict.bump_frequency("Ev!");
    assert_eq!(dict.frequency("ev"), before + 1);
    assert_eq!(dict.frequency("ev!"), 0);
    assert_eq!(dict.stats().tracked_frequencies, tracked);
}

#[test]
fn exact_lookup_ranks_by_frequency_then_order() {
    // "ağ", "ah" and "ai" all encode to "24".
    let dict = make_dict(&["ağ", "ah", "ai"]);
    assert_eq!(dict.exact_lookup("24"), vec!["ağ", "ah", "ai"]);
    dict.bump_frequency("ai");
    assert_eq!(dict.exact_lookup("24"), vec!["ai", "ağ", "ah"]);
}

#[test]
fn exact_lookup_merges_stores_without_duplicates() {
    let dict = make_dict(&["ev"]);
    dict.insert("ev", Origin::Learned);
    dict.insert("fu", Origin::Learned);
    assert_eq!(dict.exact_lookup("38"), vec!["ev", "fu"]);
}

#[test]
fn prefix_lookup() {
    let dict = make_dict(&["gel", "gelmek", "geldi", "git"]);
    dict.bump_frequency("geldi");
    assert_eq!(dict.prefix_lookup("gel"), vec!["geldi", "gel", "gelmek"]);
    assert_eq!(dict.prefix_lookup("GEL"), vec!["geldi", "gel", "gelmek"]);
    assert_eq!(dict.prefix_lookup("gi"), vec!["git"]);
    assert!(dict.prefix_lookup("g").is_empty());
    assert!(dict.prefix_lookup("").is_empty());
    assert!(dict.prefix_lookup("xyz").is_empty());
}

#[test]
fn prefix_lookup_includes_learned() {
    let dict = make_dict(&["kalem"]);
    dict.insert("kalemlik", Origin::Learned);
    assert_eq!(dict.prefix_lookup("kal"), vec!["kalem", "kalemlik"]);
}

#[test]
fn words_with_prefix_keeps_the_best_ranked() {
    let dict = make_dict(&["gela", "gelb", "gelc", "gelz"]);
    dict.bump_frequency("gelz");
    let view = dict.view();
    assert_eq!(view.words_with_prefix("gel", 2), vec!["gelz", "gela"]);
    assert_eq!(view.words_with_prefix("gel", 0), Vec::<String>::new());
}

#[test]
fn import_collapses_duplicates() {
    let dict = Dictionary::new();
    let report = dict.import(["elma", "elma", "armut"]);
    assert_eq!(
        report,
        ImportReport {
            inserted: 2,
            duplicates: 1,
            rejected: 0
        }
    );
    assert_eq!(dict.frequency("elma"), 1);
    assert_eq!(dict.frequency("armut"), 1);
    assert_eq!(dict.exact_lookup(&encode("elma")), vec!["elma"]);
    assert_eq!(dict.stats().builtin_words, 2);
}

#[test]
fn import_counts_rejected() {
    let dict = Dictionary::new();
    let report = dict.import(vec!["x".to_string(), "naïve".to_string(), "kitap".to_string()]);
    assert_eq!(report.rejected, 2);
    assert_eq!(report.inserted, 1);
}

#[test]
fn reset_clears_learned_and_restores_baseline() {
    let dict = Dictionary::with_seed();
    let base = dict.frequency("merhaba");
    dict.bump_frequency("merhaba");
    dict.insert("kalemlik", Origin::Learned);
    dict.import(["armut"]);
    dict.bump_frequency("armut");

    dict.reset();
    assert_eq!(dict.frequency("merhaba"), base);
    assert_eq!(dict.frequency("armut"), 1);
    assert!(!dict.contains("kalemlik"));
    assert!(dict.contains("armut"));
    assert!(dict.learned_words().is_empty());
}

#[test]
fn reset_is_idempotent() {
    let dict = Dictionary::with_seed();
    dict.insert("kalemlik", Origin::Learned);
    dict.bump_frequency("evet");
    dict.reset();
    let first = dict.user_data();
    dict.reset();
    assert_eq!(dict.user_data(), first);
}

#[test]
fn seed_contains_merhaba_on_top() {
    let dict = Dictionary::with_seed();
    let words = dict.exact_lookup("6374222");
    assert_eq!(words.first().map(String::as_str), Some("merhaba"));
    assert!(dict.frequency("merhaba") > 1);
}

#[test]
fn seed_words_are_valid() {
    for &(word, _) in SEED_WORDS {
        assert_eq!(normalize(word).as_deref(), Some(word), "{word}");
    }
    let dict = Dictionary::with_seed();
    assert_eq!(dict.stats().builtin_words, SEED_WORDS.len());
}

#[test]
fn learned_words_in_insertion_order() {
    let dict = Dictionary::new();
    dict.insert("zeytin", Origin::Learned);
    dict.insert("armut", Origin::Learned);
    assert_eq!(dict.learned_words(), vec!["zeytin", "armut"]);
}

#[test]
fn shared_between_threads() {
    use std::sync::Arc;
    use std::thread;

    let dict = Arc::new(Dictionary::new());
    let writer = {
        let dict = Arc::clone(&dict);
        thread::spawn(move || dict.import(["elma", "armut", "kiraz"]))
    };
    let _ = dict.exact_lookup("3562");
    let report = writer.join().unwrap();
    assert_eq!(report.inserted, 3);
    assert_eq!(dict.exact_lookup("3562"), vec!["elma"]);
}

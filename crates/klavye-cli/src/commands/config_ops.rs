use std::fs;

pub fn settings_export() {
    print!("{}", klavye_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        klavye_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: session.multitap_window_ms={}, candidates.max_results={}, learning.auto_learn={}",
        s.session.multitap_window_ms, s.candidates.max_results, s.learning.auto_learn
    );
}

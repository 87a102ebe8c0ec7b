//! Scripted key sequences driven through a real session.
//!
//! A script is a list of tokens: key ids of the chosen layout (prefix `^` for
//! a shifted press) and bracketed control keys such as `<space>`, `<enter>`,
//! `<bs>`, `<shift>`, `<cycle>`, `<cancel>`, `<commit>`, `<blur>`, `<sel:N>`
//! and `<wait>` / `<wait:MS>`.

use std::path::Path;

use serde::Serialize;

use klavye_core::encoder::digit_for;
use klavye_engine::{KeyEvent, KlavyeEngine, KlavyeEvent, KlavyeKeyResponse, Layout};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key {key:?} on the {layout} layout")]
    UnknownKey { key: String, layout: Layout },
    #[error("bad control token {0:?}")]
    BadToken(String),
    #[error("{ch:?} cannot be typed on the {layout} layout")]
    Untypeable { ch: char, layout: Layout },
}

/// Clock settings for a script.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    /// Time between consecutive events.
    pub step_ms: u64,
    /// Pause inserted by a bare `<wait>`.
    pub wait_ms: u64,
}

/// Turn script tokens into timestamped key events.
pub fn parse_script(
    layout: Layout,
    tokens: &[String],
    timing: Timing,
) -> Result<Vec<(String, KeyEvent)>, ScriptError> {
    let mut now = 0u64;
    let mut events = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(inner) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
            let event = match inner {
                "space" => KeyEvent::Space,
                "enter" => KeyEvent::Enter,
                "bs" | "backspace" => KeyEvent::Backspace,
                "shift" => KeyEvent::Shift,
                "cycle" | "tab" => KeyEvent::CycleCandidate,
                "cancel" | "esc" => KeyEvent::Cancel,
                "commit" => KeyEvent::Commit,
                "blur" => KeyEvent::Blur,
                "wait" => {
                    now += timing.wait_ms;
                    continue;
                }
                _ => {
                    if let Some(ms) = inner.strip_prefix("wait:") {
                        now += parse_number(token, ms)?;
                        continue;
                    }
                    match inner.strip_prefix("sel:") {
                        Some(i) => KeyEvent::SelectCandidate(parse_number(token, i)? as usize),
                        None => return Err(ScriptError::BadToken(token.clone())),
                    }
                }
            };
            events.push((token.clone(), event));
        } else {
            let (key, shifted) = match token.strip_prefix('^') {
                Some(key) => (key, true),
                None => (token.as_str(), false),
            };
            if layout.role(&key.into()).is_none() {
                return Err(ScriptError::UnknownKey {
                    key: key.to_string(),
                    layout,
                });
            }
            let event = if shifted {
                KeyEvent::shifted_press(layout, key, now)
            } else {
                KeyEvent::press(layout, key, now)
            };
            events.push((token.clone(), event));
        }
        now += timing.step_ms;
    }
    Ok(events)
}

fn parse_number(token: &str, digits: &str) -> Result<u64, ScriptError> {
    digits
        .parse()
        .map_err(|_| ScriptError::BadToken(token.to_string()))
}

/// Script that types `text` on `layout`.
///
/// On the keypad every letter is one press of its digit; elsewhere letters
/// are multi-tapped, with a `<wait>` between two characters on the same key.
/// Spaces become `<space>`.
pub fn text_to_script(layout: Layout, text: &str) -> Result<Vec<String>, ScriptError> {
    let mut tokens = Vec::new();
    let mut last_key: Option<String> = None;
    for ch in text.chars() {
        if ch == ' ' {
            tokens.push("<space>".to_string());
            last_key = None;
            continue;
        }
        let shift = if ch.is_uppercase() { "^" } else { "" };
        if layout == Layout::Numeric {
            if let Some(digit) = digit_for(ch) {
                tokens.push(format!("{shift}{digit}"));
                last_key = None;
                continue;
            }
        }
        let (key, taps) = layout
            .taps_for(ch)
            .ok_or(ScriptError::Untypeable { ch, layout })?;
        let key = key.to_string();
        if last_key.as_deref() == Some(key.as_str()) {
            tokens.push("<wait>".to_string());
        }
        tokens.push(format!("{shift}{key}"));
        for _ in 1..taps {
            tokens.push(key.clone());
        }
        last_key = Some(key);
    }
    Ok(tokens)
}

#[derive(Debug, Serialize)]
pub struct Step {
    pub token: String,
    pub response: KlavyeKeyResponse,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub steps: Vec<Step>,
    /// Everything committed to the text field, in order.
    pub committed: String,
    /// Text still being composed at the end.
    pub composing: String,
    pub save_requested: bool,
}

/// Feed `events` to a fresh session of `engine`.
pub fn run_script(engine: &KlavyeEngine, events: Vec<(String, KeyEvent)>) -> SimulationReport {
    let session = engine.create_session();
    let mut committed = String::new();
    let mut save_requested = false;
    let steps = events
        .into_iter()
        .map(|(token, event)| {
            let response = session.handle_key(event);
            for e in &response.events {
                match e {
                    KlavyeEvent::Commit { text } => committed.push_str(text),
                    KlavyeEvent::SaveUserData => save_requested = true,
                    _ => {}
                }
            }
            Step { token, response }
        })
        .collect();
    SimulationReport {
        steps,
        committed,
        composing: session.composed_string(),
        save_requested,
    }
}

pub struct SimulateOptions<'a> {
    pub layout: Layout,
    pub keys: &'a [String],
    pub text: Option<&'a str>,
    pub timing: Timing,
    pub user_data: Option<&'a Path>,
    pub word_files: &'a [String],
    pub save: bool,
    pub json: bool,
}

pub fn simulate(opts: &SimulateOptions) {
    let tokens = match opts.text {
        Some(text) => die!(text_to_script(opts.layout, text), "Error: {}"),
        None => opts.keys.to_vec(),
    };
    let events = die!(
        parse_script(opts.layout, &tokens, opts.timing),
        "Error: {}"
    );
    let engine = super::open_engine(opts.user_data, opts.word_files);
    let report = run_script(&engine, events);

    if opts.save && report.save_requested {
        if let Some(path) = opts.user_data {
            die!(
                engine.save_user_data(path),
                "Error saving {}: {}",
                path.display()
            );
        }
    }

    if opts.json {
        super::print_json(&report);
        return;
    }
    for step in &report.steps {
        let events: Vec<String> = step.response.events.iter().map(describe).collect();
        let mark = if step.response.consumed { ' ' } else { '!' };
        println!("{mark}{:<10} {}", step.token, events.join("  "));
    }
    println!("---");
    println!("committed: {:?}", report.committed);
    println!("composing: {:?}", report.composing);
}

fn describe(event: &KlavyeEvent) -> String {
    match event {
        KlavyeEvent::Commit { text } => format!("commit {text:?}"),
        KlavyeEvent::SetMarkedText { text } => format!("mark {text:?}"),
        KlavyeEvent::ClearMarkedText => "unmark".to_string(),
        KlavyeEvent::ShowCandidates {
            surfaces,
            highlighted,
        } => {
            let items: Vec<String> = surfaces
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    if Some(i as u32) == *highlighted {
                        format!("[{s}]")
                    } else {
                        s.clone()
                    }
                })
                .collect();
            format!("candidates {}", items.join(","))
        }
        KlavyeEvent::HideCandidates => "hide".to_string(),
        KlavyeEvent::WordCommitted { word } => format!("word {word:?}"),
        KlavyeEvent::SaveUserData => "save".to_string(),
    }
}

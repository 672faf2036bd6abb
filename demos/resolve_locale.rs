//! Print the locale resolution chain outcome for this machine.
//!
//! Run with `cargo run --example resolve_locale`.

use anyhow::Result;
use teabreak_notes::config::{self, AppState};
use teabreak_notes::i18n::{self, LanguageSignal, PreferenceSource, SystemLanguage};

fn main() -> Result<()> {
    let app_state = AppState::load_or_default();

    println!(
        "state file        : {}",
        config::app_state_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string())
    );
    println!("stored preference : {:?}", app_state.preferred_locale());
    println!("system language   : {:?}", SystemLanguage.system_language());

    let language = i18n::resolve_language(&app_state, &SystemLanguage);
    println!("resolved          : {} ({})", language.code(), language.display_name());

    Ok(())
}

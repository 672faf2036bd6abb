//! # Tea Break Notes — desktop reader
//!
//! A bilingual (Chinese/English) desktop reader for the Tea Break Notes
//! blog. The UI shell — header, navigation, footer, pages — is fully
//! localized and switches language live; the preference persists across
//! sessions. Post code blocks are syntax highlighted in the background.
//!
//! ## Architecture
//!
//! - **Locale store** (`i18n`): process-wide language state over the
//!   compile-time-embedded catalog, with a closed translation key set
//! - **Locale resolver** (`i18n::resolver`): one-shot startup resolution —
//!   persisted preference, then system language, then the default
//! - **Config** (`config`): persisted app state under the platform data dir
//! - **Content** (`content`): bundled, already-structured post documents
//! - **Highlight** (`highlight`): worker thread tokenizing code blocks,
//!   cancelled cooperatively when a view goes away
//! - **Frontend** (`frontend`): the eframe/egui shell
//!
//! ## Example
//!
//! ```ignore
//! use teabreak_notes::{config::AppState, content::Site, i18n};
//!
//! let app_state = AppState::load_or_default();
//! let language = i18n::resolve_language(&app_state, &i18n::SystemLanguage);
//! i18n::set_language(language);
//! let site = Site::bundled()?;
//! ```

rust_i18n::i18n!("locales");

pub mod config;
pub mod content;
pub mod error;
pub mod frontend;
pub mod highlight;
pub mod i18n;

// Re-export commonly used types
pub use config::{AppState, UiPreferences};
pub use content::{Post, Segment, Site};
pub use error::{NotesError, Result};
pub use frontend::NotesApp;
pub use highlight::{HighlightSession, Highlighter};
pub use i18n::{Language, TranslationKey};

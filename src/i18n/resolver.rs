//! Startup locale resolution
//!
//! Determines the initial language exactly once, before any UI reads the
//! store. Resolution is an ordered strategy chain — persisted preference,
//! then the system language signal, then the fixed default — where each
//! strategy yields an optional language and the first hit wins.
//!
//! The resolver is total: provider failures surface as `None` and fall
//! through to the next strategy, so it always produces a valid [`Language`].

use super::Language;

/// Read-only source of a persisted language preference.
///
/// Implemented by the app state; tests substitute fixed fakes.
pub trait PreferenceSource {
    /// The stored plain language tag, if any. Read failures are reported as
    /// absence, never as errors.
    fn preferred_locale(&self) -> Option<String>;
}

/// Read-only source of the host's reported language.
pub trait LanguageSignal {
    /// A language tag such as `"zh-CN"` or `"en_US.UTF-8"`, if known.
    fn system_language(&self) -> Option<String>;
}

/// Language signal backed by `sys-locale`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLanguage;

impl LanguageSignal for SystemLanguage {
    fn system_language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Resolve the startup language.
///
/// Precedence: valid stored preference, then the system signal's primary
/// subtag, then [`Language::default`].
pub fn resolve_language(prefs: &dyn PreferenceSource, signal: &dyn LanguageSignal) -> Language {
    stored_preference(prefs)
        .or_else(|| signal_language(signal))
        .unwrap_or_default()
}

fn stored_preference(prefs: &dyn PreferenceSource) -> Option<Language> {
    let tag = prefs.preferred_locale()?;
    let lang = Language::from_code(tag.trim());
    if lang.is_none() {
        tracing::debug!("Ignoring unsupported stored locale tag: {:?}", tag);
    }
    lang
}

fn signal_language(signal: &dyn LanguageSignal) -> Option<Language> {
    let raw = signal.system_language()?;
    // "zh-CN", "zh_CN.UTF-8" and plain "zh" all reduce to the primary subtag
    let primary = raw.split(['-', '_', '.']).next().unwrap_or_default();
    Language::from_code(primary)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePrefs(Option<&'static str>);

    impl PreferenceSource for FakePrefs {
        fn preferred_locale(&self) -> Option<String> {
            self.0.map(String::from)
        }
    }

    struct FakeSignal(Option<&'static str>);

    impl LanguageSignal for FakeSignal {
        fn system_language(&self) -> Option<String> {
            self.0.map(String::from)
        }
    }

    #[test]
    fn stored_preference_beats_system_signal() {
        let lang = resolve_language(&FakePrefs(Some("en")), &FakeSignal(Some("zh-CN")));
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn signal_primary_subtag_selects_chinese() {
        let lang = resolve_language(&FakePrefs(None), &FakeSignal(Some("zh-CN")));
        assert_eq!(lang, Language::Chinese);

        let lang = resolve_language(&FakePrefs(None), &FakeSignal(Some("zh_CN.UTF-8")));
        assert_eq!(lang, Language::Chinese);
    }

    #[test]
    fn unsupported_signal_falls_back_to_default() {
        let lang = resolve_language(&FakePrefs(None), &FakeSignal(Some("fr-FR")));
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn nothing_available_uses_default() {
        let lang = resolve_language(&FakePrefs(None), &FakeSignal(None));
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn invalid_stored_tag_falls_through_to_signal() {
        let lang = resolve_language(&FakePrefs(Some("klingon")), &FakeSignal(Some("zh-TW")));
        assert_eq!(lang, Language::Chinese);
    }

    #[test]
    fn stored_tag_is_trimmed() {
        let lang = resolve_language(&FakePrefs(Some(" zh ")), &FakeSignal(None));
        assert_eq!(lang, Language::Chinese);
    }

    #[test]
    fn empty_strings_are_not_preferences() {
        let lang = resolve_language(&FakePrefs(Some("")), &FakeSignal(Some("")));
        assert_eq!(lang, Language::English);
    }
}

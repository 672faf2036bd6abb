//! Internationalization (i18n) support
//!
//! Provides the process-wide language store and the closed set of
//! translation keys. The catalog itself lives in `locales/*.yml` and is
//! embedded at compile time; the `i18n!` macro is initialized at the crate
//! root (lib.rs).
//!
//! Reading is unrestricted ([`current_language`], [`tr`]); writing goes
//! through the single mutator [`set_language`]. Startup resolution lives in
//! [`resolver`].

pub mod resolver;

pub use resolver::{resolve_language, LanguageSignal, PreferenceSource, SystemLanguage};

use rust_i18n::t;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get the plain locale tag for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Get the display name for this language (in its native script)
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get all available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }

    /// Parse a language from its locale tag
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "zh" => Some(Language::Chinese),
            _ => None,
        }
    }

    /// The language the header toggle switches to from this one
    pub fn other(&self) -> Language {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

/// Canonical translation keys for every localized UI string.
///
/// UI code passes these values to [`tr`]; keys are never assembled from
/// strings at runtime. Both locale tables must define every key — see the
/// completeness test below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationKey {
    SiteTitle,
    HeaderBlog,
    HeaderResume,
    FooterBuiltWith,
    FooterCreatedBy,
    HomeLatestPosts,
    HomeMore,
    HomeHeadTitle,
    BlogListHeadTitle,
    PostBack,
    NotFoundTitle,
    NotFoundMessage,
    NotFoundHeadTitle,
    CcText,
    CcLicenseName,
    CcSuffix,
    LangLabel,
    PrefTitle,
    PrefAppearance,
    PrefLanguage,
    PrefDarkMode,
    PrefFontScale,
    DialogApply,
    DialogCancel,
}

impl TranslationKey {
    /// Every canonical key, for exhaustive catalog checks
    pub const ALL: &'static [TranslationKey] = &[
        TranslationKey::SiteTitle,
        TranslationKey::HeaderBlog,
        TranslationKey::HeaderResume,
        TranslationKey::FooterBuiltWith,
        TranslationKey::FooterCreatedBy,
        TranslationKey::HomeLatestPosts,
        TranslationKey::HomeMore,
        TranslationKey::HomeHeadTitle,
        TranslationKey::BlogListHeadTitle,
        TranslationKey::PostBack,
        TranslationKey::NotFoundTitle,
        TranslationKey::NotFoundMessage,
        TranslationKey::NotFoundHeadTitle,
        TranslationKey::CcText,
        TranslationKey::CcLicenseName,
        TranslationKey::CcSuffix,
        TranslationKey::LangLabel,
        TranslationKey::PrefTitle,
        TranslationKey::PrefAppearance,
        TranslationKey::PrefLanguage,
        TranslationKey::PrefDarkMode,
        TranslationKey::PrefFontScale,
        TranslationKey::DialogApply,
        TranslationKey::DialogCancel,
    ];

    /// The dotted catalog key
    pub fn key(&self) -> &'static str {
        match self {
            TranslationKey::SiteTitle => "site.title",
            TranslationKey::HeaderBlog => "header.blog",
            TranslationKey::HeaderResume => "header.resume",
            TranslationKey::FooterBuiltWith => "footer.builtWith",
            TranslationKey::FooterCreatedBy => "footer.createdBy",
            TranslationKey::HomeLatestPosts => "home.latestPosts",
            TranslationKey::HomeMore => "home.more",
            TranslationKey::HomeHeadTitle => "home.headTitle",
            TranslationKey::BlogListHeadTitle => "blogList.headTitle",
            TranslationKey::PostBack => "post.back",
            TranslationKey::NotFoundTitle => "notFound.title",
            TranslationKey::NotFoundMessage => "notFound.message",
            TranslationKey::NotFoundHeadTitle => "notFound.headTitle",
            TranslationKey::CcText => "cc.text",
            TranslationKey::CcLicenseName => "cc.licenseName",
            TranslationKey::CcSuffix => "cc.suffix",
            TranslationKey::LangLabel => "lang.label",
            TranslationKey::PrefTitle => "pref.title",
            TranslationKey::PrefAppearance => "pref.appearance",
            TranslationKey::PrefLanguage => "pref.language",
            TranslationKey::PrefDarkMode => "pref.darkMode",
            TranslationKey::PrefFontScale => "pref.fontScale",
            TranslationKey::DialogApply => "dialog.apply",
            TranslationKey::DialogCancel => "dialog.cancel",
        }
    }
}

/// Set the current language
///
/// Pure state change; persistence and window-title reflection are composed
/// on top by the app's write entry point.
pub fn set_language(lang: Language) {
    rust_i18n::set_locale(lang.code());
}

/// Get the current language
pub fn current_language() -> Language {
    let locale = rust_i18n::locale();
    Language::from_code(&locale).unwrap_or_default()
}

/// Look up `key` under the current language.
///
/// A missing catalog entry is a construction defect, not a runtime
/// condition: debug builds panic so the gap is caught during development
/// instead of shipping the raw key.
pub fn tr(key: TranslationKey) -> String {
    let text = t!(key.key()).to_string();
    debug_assert!(
        text != key.key(),
        "missing translation for '{}' in locale '{}'",
        key.key(),
        &*rust_i18n::locale(),
    );
    text
}

/// Look up `key` under an explicit language, independent of the store.
///
/// Used for labels that must render in a language other than the active one
/// (the header toggle) and by the catalog completeness test.
pub fn tr_for(lang: Language, key: TranslationKey) -> String {
    t!(key.key(), locale = lang.code()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn catalog_is_complete_for_every_language() {
        for &lang in Language::all() {
            for &key in TranslationKey::ALL {
                let text = tr_for(lang, key);
                assert!(
                    !text.is_empty() && text != key.key(),
                    "locale '{}' is missing '{}'",
                    lang.code(),
                    key.key()
                );
            }
        }
    }

    #[test]
    fn code_round_trips() {
        for &lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("zh-CN"), None);
    }

    #[test]
    fn other_flips_between_both_languages() {
        assert_eq!(Language::English.other(), Language::Chinese);
        assert_eq!(Language::Chinese.other(), Language::English);
    }

    #[test]
    #[serial]
    fn set_then_get() {
        for &lang in Language::all() {
            set_language(lang);
            assert_eq!(current_language(), lang);
        }
        set_language(Language::English);
    }

    #[test]
    #[serial]
    fn set_language_is_idempotent() {
        set_language(Language::Chinese);
        let once = (current_language(), tr(TranslationKey::SiteTitle));
        set_language(Language::Chinese);
        let twice = (current_language(), tr(TranslationKey::SiteTitle));
        assert_eq!(once, twice);
        set_language(Language::English);
    }

    #[test]
    fn translations_differ_between_languages() {
        assert_ne!(
            tr_for(Language::English, TranslationKey::SiteTitle),
            tr_for(Language::Chinese, TranslationKey::SiteTitle)
        );
    }
}

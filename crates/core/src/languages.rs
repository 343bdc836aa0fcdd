//! Summary languages offered to the user.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

/// Language used when the user has not picked one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Fixed catalog, labels in native script. Auto mode sits on top of this list
/// as the summary job's flag, not as a catalog entry.
pub const LANGUAGES: &[Language] = &[
    Language { code: "en", label: "English" },
    Language { code: "es", label: "Español" },
    Language { code: "fr", label: "Français" },
    Language { code: "de", label: "Deutsch" },
    Language { code: "zh", label: "中文" },
    Language { code: "ar", label: "العربية" },
    Language { code: "ru", label: "Русский" },
    Language { code: "ja", label: "日本語" },
];

pub fn find(code: &str) -> Option<Language> {
    LANGUAGES.iter().copied().find(|l| l.code == code)
}

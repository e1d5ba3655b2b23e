//! Supported UI languages and the current-language state

use log::debug;

use crate::error::Error;

/// Supported languages. The discriminant is the value persisted in the
/// settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Language {
    #[default]
    English = 0,
    Persian = 1,
}

impl Language {
    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Persian]
    }

    /// Convert a persisted integer value, `None` for anything unknown
    pub fn from_i32(value: i32) -> Option<Language> {
        match value {
            0 => Some(Language::English),
            1 => Some(Language::Persian),
            _ => None,
        }
    }

    /// Persisted integer value
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Persian => "fa",
        }
    }

    /// Persian is laid out right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Persian)
    }

    /// The other language
    pub fn toggled(self) -> Language {
        match self {
            Language::English => Language::Persian,
            Language::Persian => Language::English,
        }
    }
}

impl TryFrom<i32> for Language {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Language::from_i32(value).ok_or(Error::UnknownLanguage(value))
    }
}

impl From<Language> for i32 {
    fn from(lang: Language) -> i32 {
        lang.as_i32()
    }
}

/// Current UI language. Starts out as English.
#[derive(Debug, Clone, Default)]
pub struct LanguageState {
    current: Language,
}

impl LanguageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Language {
        self.current
    }

    pub fn set(&mut self, lang: Language) {
        if self.current != lang {
            debug!("Language changed: {} -> {}", self.current.code(), lang.code());
        }
        self.current = lang;
    }

    /// Set from a raw integer value; anything but 0 or 1 is ignored.
    pub fn set_raw(&mut self, value: i32) {
        match Language::try_from(value) {
            Ok(lang) => self.set(lang),
            Err(e) => debug!("Ignoring language change: {}", e),
        }
    }

    pub fn toggle(&mut self) {
        self.set(self.current.toggled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(LanguageState::new().get(), Language::English);
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_set_and_get() {
        let mut state = LanguageState::new();
        state.set(Language::Persian);
        assert_eq!(state.get(), Language::Persian);
        state.set(Language::English);
        assert_eq!(state.get(), Language::English);
    }

    #[test]
    fn test_set_raw_ignores_unknown_values() {
        let mut state = LanguageState::new();
        state.set_raw(1);
        assert_eq!(state.get(), Language::Persian);

        for bogus in [-1, 2, 7, i32::MAX, i32::MIN] {
            state.set_raw(bogus);
            assert_eq!(state.get(), Language::Persian);
        }

        state.set_raw(0);
        assert_eq!(state.get(), Language::English);
        state.set_raw(42);
        assert_eq!(state.get(), Language::English);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Language::try_from(0).unwrap(), Language::English);
        assert_eq!(Language::try_from(1).unwrap(), Language::Persian);
        assert!(matches!(
            Language::try_from(3),
            Err(Error::UnknownLanguage(3))
        ));
        assert_eq!(i32::from(Language::Persian), 1);
    }

    #[test]
    fn test_toggle_and_direction() {
        let mut state = LanguageState::new();
        state.toggle();
        assert_eq!(state.get(), Language::Persian);
        assert!(state.get().is_rtl());
        state.toggle();
        assert_eq!(state.get(), Language::English);
        assert!(!state.get().is_rtl());
    }

    #[test]
    fn test_codes() {
        let codes: Vec<&str> = Language::all().iter().map(|lang| lang.code()).collect();
        assert_eq!(codes, vec!["en", "fa"]);
    }
}

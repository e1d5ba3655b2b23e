//! Localization context: current language, string lookup and fonts

use std::fmt::Display;

use crate::font::{FontFactory, FontProvider};
use crate::language::{Language, LanguageState};
use crate::strings::{self, StringId};

/// Extended Arabic-Indic digits used in Persian text
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

const RIGHT_TO_LEFT_EMBEDDING: char = '\u{202B}';
const POP_DIRECTIONAL_FORMATTING: char = '\u{202C}';

/// Everything the UI needs to render localized labels.
///
/// Owned by the UI layer and handed to whatever renders text.
pub struct Locale<F: FontFactory> {
    state: LanguageState,
    fonts: FontProvider<F>,
}

impl<F: FontFactory> Locale<F> {
    pub fn new(factory: F) -> Self {
        Self {
            state: LanguageState::new(),
            fonts: FontProvider::new(factory),
        }
    }

    /// Create the fonts and reset the language to English
    pub fn initialize(&mut self) {
        self.fonts.initialize();
        self.state.set(Language::English);
    }

    /// Localized text for a raw id, empty for unknown ids
    pub fn get_string(&self, id: u32) -> &'static str {
        strings::lookup(id, self.state.get())
    }

    pub fn text(&self, id: StringId) -> &'static str {
        self.get_string(id.id())
    }

    pub fn current(&self) -> Language {
        self.state.get()
    }

    pub fn set_current(&mut self, lang: Language) {
        self.state.set(lang);
    }

    /// Set from a persisted integer; unknown values are ignored
    pub fn set_current_raw(&mut self, value: i32) {
        self.state.set_raw(value);
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
    }

    pub fn state(&self) -> &LanguageState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut LanguageState {
        &mut self.state
    }

    /// Font for the current language
    pub fn get_font(&self) -> Option<F::Handle> {
        self.fonts.font_for(self.state.get())
    }

    pub fn update_fonts(&mut self) {
        self.fonts.update_fonts();
    }

    pub fn free(&mut self) {
        self.fonts.free();
    }

    pub fn fonts(&self) -> &FontProvider<F> {
        &self.fonts
    }

    /// Render a number with the current language's digits
    pub fn format_number(&self, number: impl Display) -> String {
        let text = number.to_string();
        match self.state.get() {
            Language::Persian => text
                .chars()
                .map(|c| c.to_digit(10).map_or(c, |digit| PERSIAN_DIGITS[digit as usize]))
                .collect(),
            Language::English => text,
        }
    }

    /// Wrap mixed-direction text so it lays out right-to-left in Persian
    pub fn format_mixed_text(&self, text: &str) -> String {
        if self.state.get().is_rtl() {
            format!("{RIGHT_TO_LEFT_EMBEDDING}{text}{POP_DIRECTIONAL_FORMATTING}")
        } else {
            text.to_string()
        }
    }
}

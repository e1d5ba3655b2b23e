//! Per-language fonts
//!
//! [`FontProvider`] owns one font handle per language. Handle creation is
//! delegated to a [`FontFactory`] so the provider itself stays platform-neutral.

use log::{info, warn};

use crate::language::Language;

pub const ENGLISH_FAMILY: &str = "Arial";
pub const PERSIAN_FAMILY: &str = "Vazir";
/// Used when Vazir is not installed
pub const PERSIAN_FALLBACK_FAMILY: &str = "Tahoma";

pub const DEFAULT_POINT_SIZE: i32 = 12;
pub const FW_NORMAL: i32 = 400;

/// Parameters for creating one font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: &'static str,
    pub point_size: i32,
    pub weight: i32,
    pub italic: bool,
}

impl FontSpec {
    /// Regular weight, upright, default size
    pub fn regular(family: &'static str) -> Self {
        Self {
            family,
            point_size: DEFAULT_POINT_SIZE,
            weight: FW_NORMAL,
            italic: false,
        }
    }
}

/// Creates and releases native font handles
pub trait FontFactory {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    /// `None` when the font cannot be created (e.g. family not installed)
    fn create(&mut self, spec: &FontSpec) -> Option<Self::Handle>;

    fn release(&mut self, handle: Self::Handle);
}

/// The English and Persian font pair
pub struct FontProvider<F: FontFactory> {
    factory: F,
    english: Option<F::Handle>,
    persian: Option<F::Handle>,
}

impl<F: FontFactory> FontProvider<F> {
    /// Create an empty provider; call [`initialize`](Self::initialize) to create fonts
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            english: None,
            persian: None,
        }
    }

    /// Create both fonts, releasing any held handles first
    pub fn initialize(&mut self) {
        self.free();
        self.create_fonts();
    }

    /// Recreate both fonts, e.g. after the system font table changed
    pub fn update_fonts(&mut self) {
        info!("Recreating language fonts");
        self.free();
        self.create_fonts();
    }

    /// Release both fonts. Safe to call repeatedly.
    pub fn free(&mut self) {
        if let Some(font) = self.english.take() {
            self.factory.release(font);
        }
        if let Some(font) = self.persian.take() {
            self.factory.release(font);
        }
    }

    /// Font for `lang`, or the English font if that one is unset
    pub fn font_for(&self, lang: Language) -> Option<F::Handle> {
        match lang {
            Language::Persian => self.persian.or(self.english),
            Language::English => self.english,
        }
    }

    pub fn english(&self) -> Option<F::Handle> {
        self.english
    }

    pub fn persian(&self) -> Option<F::Handle> {
        self.persian
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    fn create_fonts(&mut self) {
        self.english = self.factory.create(&FontSpec::regular(ENGLISH_FAMILY));
        if self.english.is_none() {
            warn!("Could not create {} font", ENGLISH_FAMILY);
        }

        self.persian = self
            .factory
            .create(&FontSpec::regular(PERSIAN_FAMILY))
            .or_else(|| {
                info!(
                    "{} font unavailable, using {}",
                    PERSIAN_FAMILY, PERSIAN_FALLBACK_FAMILY
                );
                self.factory
                    .create(&FontSpec::regular(PERSIAN_FALLBACK_FAMILY))
            });
        if self.persian.is_none() {
            warn!("Could not create a Persian font");
        }
    }
}

impl<F: FontFactory> Drop for FontProvider<F> {
    fn drop(&mut self) {
        self.free();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingFactory;
    use super::*;

    #[test]
    fn test_initialize_creates_both_fonts() {
        let factory = RecordingFactory::all_installed();
        let log = factory.log.clone();
        let mut fonts = FontProvider::new(factory);
        assert_eq!(fonts.font_for(Language::English), None);

        fonts.initialize();

        let english = fonts.font_for(Language::English).unwrap();
        let persian = fonts.font_for(Language::Persian).unwrap();
        assert_ne!(english, persian);
        assert_eq!(log.borrow().family_of(english), Some(ENGLISH_FAMILY));
        assert_eq!(log.borrow().family_of(persian), Some(PERSIAN_FAMILY));
    }

    #[test]
    fn test_persian_falls_back_to_tahoma() {
        let factory = RecordingFactory::with_families(&[ENGLISH_FAMILY, PERSIAN_FALLBACK_FAMILY]);
        let log = factory.log.clone();
        let mut fonts = FontProvider::new(factory);
        fonts.initialize();

        let persian = fonts.persian().unwrap();
        assert_eq!(log.borrow().family_of(persian), Some(PERSIAN_FALLBACK_FAMILY));
    }

    #[test]
    fn test_update_fonts_keeps_tahoma_fallback() {
        let factory = RecordingFactory::with_families(&[ENGLISH_FAMILY, PERSIAN_FALLBACK_FAMILY]);
        let log = factory.log.clone();
        let mut fonts = FontProvider::new(factory);
        fonts.initialize();
        fonts.update_fonts();

        let persian = fonts.persian().unwrap();
        assert_eq!(log.borrow().family_of(persian), Some(PERSIAN_FALLBACK_FAMILY));
        let english = fonts.english().unwrap();
        assert_eq!(log.borrow().family_of(english), Some(ENGLISH_FAMILY));
        assert_eq!(log.borrow().live(), vec![english, persian]);
    }

    #[test]
    fn test_missing_persian_uses_english_font() {
        let mut fonts = FontProvider::new(RecordingFactory::with_families(&[ENGLISH_FAMILY]));
        fonts.initialize();

        assert_eq!(fonts.persian(), None);
        assert_eq!(fonts.font_for(Language::Persian), fonts.english());
        assert!(fonts.font_for(Language::Persian).is_some());
    }

    #[test]
    fn test_free_is_idempotent() {
        let factory = RecordingFactory::all_installed();
        let log = factory.log.clone();
        let mut fonts = FontProvider::new(factory);
        fonts.initialize();

        fonts.free();
        assert_eq!(fonts.english(), None);
        assert_eq!(fonts.persian(), None);
        assert_eq!(log.borrow().released.len(), 2);

        // RecordingFactory panics on a double release
        fonts.free();
        assert_eq!(log.borrow().released.len(), 2);
        assert!(log.borrow().live().is_empty());
    }

    #[test]
    fn test_update_fonts_releases_before_recreating() {
        let factory = RecordingFactory::all_installed();
        let log = factory.log.clone();
        let mut fonts = FontProvider::new(factory);
        fonts.initialize();
        let old = (fonts.english().unwrap(), fonts.persian().unwrap());

        fonts.update_fonts();

        assert_eq!(log.borrow().released, vec![old.0, old.1]);
        assert_eq!(log.borrow().live().len(), 2);
        assert_ne!(fonts.english(), Some(old.0));
        assert_ne!(fonts.persian(), Some(old.1));
    }

    #[test]
    fn test_reinitialize_does_not_leak() {
        let factory = RecordingFactory::all_installed();
        let log = factory.log.clone();
        let mut fonts = FontProvider::new(factory);
        fonts.initialize();
        fonts.initialize();
        assert_eq!(log.borrow().live().len(), 2);
    }

    #[test]
    fn test_drop_releases_fonts() {
        let factory = RecordingFactory::all_installed();
        let log = factory.log.clone();
        {
            let mut fonts = FontProvider::new(factory);
            fonts.initialize();
        }
        assert!(log.borrow().live().is_empty());
        assert_eq!(log.borrow().released.len(), 2);
    }
}

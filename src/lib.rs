//! n01 language support
//!
//! English/Persian string table, current-language state, per-language fonts
//! and the language option dialog. Platform pieces (GDI fonts, INI profile,
//! the dialog window) are only built on Windows.

pub mod dialog;
pub mod error;
pub mod font;
pub mod language;
pub mod locale;
pub mod settings;
pub mod strings;

#[cfg(windows)]
pub mod dialog_window;
#[cfg(windows)]
pub mod gdi;
#[cfg(windows)]
pub mod window;

pub use error::{Error, Result};
pub use language::{Language, LanguageState};
pub use locale::Locale;
pub use strings::StringId;

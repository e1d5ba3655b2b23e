//! Crate error type

use std::path::PathBuf;

/// Errors from the fallible plumbing around the language subsystem.
///
/// Lookups and the language setter never fail; these only surface from
/// conversions and from the platform layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown language value {0}")]
    UnknownLanguage(i32),

    #[error("failed to write [{section}] {key} to {}", .path.display())]
    ProfileWrite {
        path: PathBuf,
        section: String,
        key: String,
    },

    #[error("win32 call failed: {0}")]
    Win32(String),

    #[error("tray setup failed: {0}")]
    Tray(String),
}

#[cfg(windows)]
impl From<windows::core::Error> for Error {
    fn from(e: windows::core::Error) -> Self {
        Error::Win32(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

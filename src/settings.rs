//! Persisting the current language to the settings profile

use std::collections::HashMap;

use log::debug;

use crate::error::Result;
use crate::language::{Language, LanguageState};

pub const SECTION: &str = "Language";
pub const KEY: &str = "Current";

/// Integer key/value settings grouped in sections, INI style
pub trait ProfileStore {
    /// Stored value, or `default` when the key is missing or not a number
    fn get_int(&self, section: &str, key: &str, default: i32) -> i32;

    fn put_int(&mut self, section: &str, key: &str, value: i32) -> Result<()>;
}

/// Restore the saved language. Missing or unknown values leave `state` as is.
pub fn load_language<S: ProfileStore + ?Sized>(store: &S, state: &mut LanguageState) {
    let value = store.get_int(SECTION, KEY, Language::English.as_i32());
    debug!("Loaded [{}] {} = {}", SECTION, KEY, value);
    state.set_raw(value);
}

/// Save the current language
pub fn save_language<S: ProfileStore + ?Sized>(store: &mut S, state: &LanguageState) -> Result<()> {
    store.put_int(SECTION, KEY, state.get().as_i32())
}

/// In-memory profile
#[derive(Debug, Default, Clone)]
pub struct MemoryProfile {
    values: HashMap<(String, String), i32>,
}

impl MemoryProfile {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryProfile {
    fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.values
            .get(&(section.to_string(), key.to_string()))
            .copied()
            .unwrap_or(default)
    }

    fn put_int(&mut self, section: &str, key: &str, value: i32) -> Result<()> {
        self.values
            .insert((section.to_string(), key.to_string()), value);
        Ok(())
    }
}

#[cfg(windows)]
pub use ini::IniFile;

#[cfg(windows)]
mod ini {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use std::path::{Path, PathBuf};

    use windows::core::PCWSTR;
    use windows::Win32::System::WindowsProgramming::{
        GetPrivateProfileIntW, WritePrivateProfileStringW,
    };

    use super::ProfileStore;
    use crate::error::{Error, Result};

    /// Convert a Rust string to a wide string (null-terminated UTF-16)
    fn to_wide(s: impl AsRef<OsStr>) -> Vec<u16> {
        s.as_ref()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect()
    }

    /// INI file accessed through the Win32 private-profile API
    #[derive(Debug, Clone)]
    pub struct IniFile {
        path: PathBuf,
    }

    impl IniFile {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `name` in the directory of the running executable
        pub fn beside_exe(name: &str) -> Self {
            let dir = std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_default();
            Self::new(dir.join(name))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl ProfileStore for IniFile {
        fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
            let section = to_wide(section);
            let key = to_wide(key);
            let path = to_wide(&self.path);
            unsafe {
                GetPrivateProfileIntW(
                    PCWSTR(section.as_ptr()),
                    PCWSTR(key.as_ptr()),
                    default,
                    PCWSTR(path.as_ptr()),
                ) as i32
            }
        }

        fn put_int(&mut self, section: &str, key: &str, value: i32) -> Result<()> {
            let section_w = to_wide(section);
            let key_w = to_wide(key);
            let value_w = to_wide(value.to_string());
            let path = to_wide(&self.path);
            unsafe {
                WritePrivateProfileStringW(
                    PCWSTR(section_w.as_ptr()),
                    PCWSTR(key_w.as_ptr()),
                    PCWSTR(value_w.as_ptr()),
                    PCWSTR(path.as_ptr()),
                )
            }
            .map_err(|_| Error::ProfileWrite {
                path: self.path.clone(),
                section: section.to_string(),
                key: key.to_string(),
            })
        }
    }

}

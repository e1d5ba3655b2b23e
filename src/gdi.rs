//! GDI font factory

use windows::{
    core::PCWSTR,
    Win32::Foundation::LPARAM,
    Win32::Graphics::Gdi::{
        CreateFontW, DeleteObject, EnumFontFamiliesExW, GetDC, GetDeviceCaps, ReleaseDC,
        CLEARTYPE_QUALITY, CLIP_DEFAULT_PRECIS, DEFAULT_CHARSET, DEFAULT_PITCH, FF_DONTCARE,
        HFONT, LOGFONTW, LOGPIXELSY, OUT_DEFAULT_PRECIS, TEXTMETRICW,
    },
};

use crate::font::{FontFactory, FontSpec};

const DEFAULT_DPI: i32 = 96;

/// Creates `HFONT`s sized for the screen DPI. Families that are not
/// installed fail instead of being silently substituted by GDI.
#[derive(Debug, Clone)]
pub struct GdiFontFactory {
    dpi: i32,
}

impl GdiFontFactory {
    pub fn new() -> Self {
        Self { dpi: screen_dpi() }
    }

    /// Logical height for a point size
    fn height(&self, point_size: i32) -> i32 {
        -((point_size * self.dpi + 36) / 72)
    }
}

impl Default for GdiFontFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FontFactory for GdiFontFactory {
    type Handle = HFONT;

    fn create(&mut self, spec: &FontSpec) -> Option<HFONT> {
        if !is_family_installed(spec.family) {
            return None;
        }

        let face = to_wide(spec.family);
        let font = unsafe {
            CreateFontW(
                self.height(spec.point_size),
                0,
                0,
                0,
                spec.weight,
                spec.italic as u32,
                0,
                0,
                DEFAULT_CHARSET.0 as u32,
                OUT_DEFAULT_PRECIS.0 as u32,
                CLIP_DEFAULT_PRECIS.0 as u32,
                CLEARTYPE_QUALITY.0 as u32,
                (DEFAULT_PITCH.0 | FF_DONTCARE.0) as u32,
                PCWSTR(face.as_ptr()),
            )
        };

        if font.0.is_null() {
            None
        } else {
            Some(font)
        }
    }

    fn release(&mut self, handle: HFONT) {
        unsafe {
            let _ = DeleteObject(handle);
        }
    }
}

fn screen_dpi() -> i32 {
    unsafe {
        let hdc = GetDC(None);
        if hdc.0.is_null() {
            return DEFAULT_DPI;
        }
        let dpi = GetDeviceCaps(hdc, LOGPIXELSY);
        ReleaseDC(None, hdc);
        if dpi > 0 {
            dpi
        } else {
            DEFAULT_DPI
        }
    }
}

/// Check whether a font family is installed
pub fn is_family_installed(family: &str) -> bool {
    unsafe extern "system" fn enum_proc(
        _font: *const LOGFONTW,
        _metrics: *const TEXTMETRICW,
        _font_type: u32,
        lparam: LPARAM,
    ) -> i32 {
        let found = &mut *(lparam.0 as *mut bool);
        *found = true;
        // stop at the first match
        0
    }

    let mut logfont = LOGFONTW {
        lfCharSet: DEFAULT_CHARSET,
        ..Default::default()
    };
    let name: Vec<u16> = family.encode_utf16().collect();
    let len = name.len().min(logfont.lfFaceName.len() - 1);
    logfont.lfFaceName[..len].copy_from_slice(&name[..len]);

    let mut found = false;
    unsafe {
        let hdc = GetDC(None);
        if hdc.0.is_null() {
            return false;
        }
        EnumFontFamiliesExW(
            hdc,
            &logfont,
            Some(enum_proc),
            LPARAM(&mut found as *mut bool as isize),
            0,
        );
        ReleaseDC(None, hdc);
    }
    found
}

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontProvider, ENGLISH_FAMILY};
    use crate::language::Language;

    #[test]
    fn test_unknown_family_is_not_installed() {
        assert!(!is_family_installed("No Such Font Family 0xDEADBEEF"));
    }

    #[test]
    fn test_provider_with_gdi_fonts() {
        let mut fonts = FontProvider::new(GdiFontFactory::new());
        fonts.initialize();
        if is_family_installed(ENGLISH_FAMILY) {
            assert!(fonts.font_for(Language::English).is_some());
            assert!(fonts.font_for(Language::Persian).is_some());
        }
        fonts.free();
        assert_eq!(fonts.english(), None);
        fonts.free();
    }
}

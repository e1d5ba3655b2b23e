//! Window and dialog control helpers

use windows::{
    core::PCWSTR,
    Win32::Foundation::{HWND, LPARAM, WPARAM},
    Win32::Graphics::Gdi::HFONT,
    Win32::UI::Controls::CheckRadioButton,
    Win32::UI::WindowsAndMessaging::{
        GetWindowTextW, IsWindow, SendDlgItemMessageW, SetDlgItemTextW, SetForegroundWindow,
        SetWindowTextW, ShowWindow, SW_SHOW, WM_SETFONT,
    },
};

/// Convert a Rust string to a wide string (null-terminated UTF-16)
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Check if a window handle is still valid
pub fn is_window_valid(hwnd: HWND) -> bool {
    !hwnd.0.is_null() && unsafe { IsWindow(hwnd).as_bool() }
}

/// Get the window text (title) of a window
pub fn get_window_text(hwnd: HWND) -> String {
    unsafe {
        let mut buffer = [0u16; 256];
        let len = GetWindowTextW(hwnd, &mut buffer);
        if len > 0 {
            String::from_utf16_lossy(&buffer[..len as usize])
        } else {
            String::new()
        }
    }
}

/// Set the window text (title) of a window
pub fn set_window_text(hwnd: HWND, text: &str) {
    let text = to_wide(text);
    unsafe {
        let _ = SetWindowTextW(hwnd, PCWSTR(text.as_ptr()));
    }
}

/// Set the text of a dialog control
pub fn set_item_text(hwnd: HWND, id: i32, text: &str) {
    let text = to_wide(text);
    unsafe {
        let _ = SetDlgItemTextW(hwnd, id, PCWSTR(text.as_ptr()));
    }
}

/// Check `checked` within the radio group `first..=last`
pub fn check_radio(hwnd: HWND, first: i32, last: i32, checked: i32) {
    unsafe {
        let _ = CheckRadioButton(hwnd, first, last, checked);
    }
}

/// Set a control's font and redraw it
pub fn set_item_font(hwnd: HWND, id: i32, font: HFONT) {
    unsafe {
        SendDlgItemMessageW(hwnd, id, WM_SETFONT, WPARAM(font.0 as usize), LPARAM(1));
    }
}

/// Show a window and bring it to the foreground
pub fn bring_to_front(hwnd: HWND) {
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = SetForegroundWindow(hwnd);
    }
}

//! Language option window hosting the dialog logic

use std::cell::RefCell;
use std::ffi::c_void;
use std::rc::Rc;
use std::sync::atomic::{AtomicPtr, Ordering};

use log::{debug, warn};
use once_cell::sync::OnceCell;
use windows::{
    core::{w, PCWSTR},
    Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    Win32::Graphics::Gdi::{GetStockObject, GetSysColorBrush, COLOR_BTNFACE, DEFAULT_GUI_FONT, HFONT},
    Win32::System::LibraryLoader::GetModuleHandleW,
    Win32::UI::WindowsAndMessaging::*,
};

use crate::dialog::{self, ControlId, DialogEvent, DialogView, Notification};
use crate::error::{Error, Result};
use crate::gdi::GdiFontFactory;
use crate::locale::Locale;
use crate::window;

/// Locale context shared between the tray host and the dialog window
pub type SharedLocale = Rc<RefCell<Locale<GdiFontFactory>>>;

const DIALOG_WINDOW_CLASS: PCWSTR = w!("N01LanguageOption");
const WINDOW_WIDTH: i32 = 320;
const WINDOW_HEIGHT: i32 = 190;
const MARGIN: i32 = 20;
const RADIO_HEIGHT: i32 = 24;
const PREVIEW_HEIGHT: i32 = 48;

static DIALOG_HWND: AtomicPtr<c_void> = AtomicPtr::new(std::ptr::null_mut());
static CLASS_ATOM: OnceCell<u16> = OnceCell::new();

/// Open the language option window, or bring the open one to the front
pub fn show(locale: &SharedLocale) -> Result<HWND> {
    let existing = HWND(DIALOG_HWND.load(Ordering::Relaxed));
    if window::is_window_valid(existing) {
        window::bring_to_front(existing);
        return Ok(existing);
    }

    register_window_class()?;

    // WM_NCCREATE takes its own reference, released in WM_NCDESTROY
    let param = Rc::as_ptr(locale) as *const c_void;
    let hwnd = unsafe {
        let hinstance = GetModuleHandleW(None)?;
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            DIALOG_WINDOW_CLASS,
            PCWSTR::null(),
            WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            None,
            None,
            hinstance,
            Some(param),
        )?
    };

    DIALOG_HWND.store(hwnd.0, Ordering::Relaxed);
    window::bring_to_front(hwnd);
    debug!("Language option window opened");
    Ok(hwnd)
}

/// Close the language option window if it is open
pub fn close() {
    let hwnd = HWND(DIALOG_HWND.load(Ordering::Relaxed));
    if window::is_window_valid(hwnd) {
        unsafe {
            let _ = DestroyWindow(hwnd);
        }
    }
}

/// Check if the language option window is open
pub fn is_open() -> bool {
    window::is_window_valid(HWND(DIALOG_HWND.load(Ordering::Relaxed)))
}

fn register_window_class() -> Result<u16> {
    CLASS_ATOM
        .get_or_try_init(|| unsafe {
            let hinstance = GetModuleHandleW(None)?;

            let wc = WNDCLASSEXW {
                cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
                style: CS_HREDRAW | CS_VREDRAW,
                lpfnWndProc: Some(window_proc),
                hInstance: hinstance.into(),
                hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
                hbrBackground: GetSysColorBrush(COLOR_BTNFACE),
                lpszClassName: DIALOG_WINDOW_CLASS,
                ..Default::default()
            };

            match RegisterClassExW(&wc) {
                0 => Err(Error::from(windows::core::Error::from_win32())),
                atom => Ok(atom),
            }
        })
        .copied()
}

fn create_controls(hwnd: HWND) {
    let width = WINDOW_WIDTH - 2 * MARGIN;
    let radio = WS_CHILD | WS_VISIBLE | WS_TABSTOP | WINDOW_STYLE(BS_AUTORADIOBUTTON as u32);
    let controls = [
        (ControlId::RadioEnglish, w!("BUTTON"), radio | WS_GROUP, MARGIN, RADIO_HEIGHT),
        (ControlId::RadioPersian, w!("BUTTON"), radio, MARGIN + RADIO_HEIGHT + 6, RADIO_HEIGHT),
        (
            ControlId::FontPreview,
            w!("STATIC"),
            WS_CHILD | WS_VISIBLE | WINDOW_STYLE(SS_LEFT.0),
            MARGIN + 2 * RADIO_HEIGHT + 24,
            PREVIEW_HEIGHT,
        ),
    ];

    let gui_font = HFONT(unsafe { GetStockObject(DEFAULT_GUI_FONT) }.0);
    for (control, class, style, y, height) in controls {
        let created = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                class,
                PCWSTR::null(),
                style,
                MARGIN,
                y,
                width,
                height,
                hwnd,
                HMENU(control.id() as isize as *mut c_void),
                None,
                None,
            )
        };
        match created {
            Ok(_) => window::set_item_font(hwnd, control.id(), gui_font),
            Err(e) => warn!("Failed to create {:?}: {}", control, e),
        }
    }
}

/// Renders dialog updates into the native controls
struct Win32View {
    hwnd: HWND,
}

impl DialogView<HFONT> for Win32View {
    fn set_title(&mut self, text: &str) {
        window::set_window_text(self.hwnd, text);
    }

    fn set_item_text(&mut self, control: ControlId, text: &str) {
        window::set_item_text(self.hwnd, control.id(), text);
    }

    fn check_radio(&mut self, control: ControlId) {
        window::check_radio(
            self.hwnd,
            ControlId::RadioEnglish.id(),
            ControlId::RadioPersian.id(),
            control.id(),
        );
    }

    fn set_item_font(&mut self, control: ControlId, font: HFONT) {
        window::set_item_font(self.hwnd, control.id(), font);
    }

    fn reset_item_font(&mut self, control: ControlId) {
        let gui_font = HFONT(unsafe { GetStockObject(DEFAULT_GUI_FONT) }.0);
        window::set_item_font(self.hwnd, control.id(), gui_font);
    }
}

/// Run `event` through the dialog logic with the window's locale
unsafe fn dispatch(hwnd: HWND, event: DialogEvent) -> bool {
    let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const RefCell<Locale<GdiFontFactory>>;
    if ptr.is_null() {
        return false;
    }
    let Ok(mut locale) = (*ptr).try_borrow_mut() else {
        warn!("Locale busy, dropping {:?}", event);
        return false;
    };

    let mut view = Win32View { hwnd };
    dialog::handle_event(&mut *locale, &mut view, event)
}

unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_NCCREATE => {
            let create = &*(lparam.0 as *const CREATESTRUCTW);
            let ptr = create.lpCreateParams as *const RefCell<Locale<GdiFontFactory>>;
            if !ptr.is_null() {
                Rc::increment_strong_count(ptr);
            }
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, ptr as isize);
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        WM_CREATE => {
            create_controls(hwnd);
            dispatch(hwnd, DialogEvent::Init);
            LRESULT(0)
        }
        WM_COMMAND => {
            // LOWORD = control id, HIWORD = notification code
            let id = (wparam.0 & 0xFFFF) as i32;
            let code = ((wparam.0 >> 16) & 0xFFFF) as u32;
            let handled = match ControlId::from_id(id) {
                Some(control) => dispatch(
                    hwnd,
                    DialogEvent::Command {
                        control,
                        notification: Notification::from_code(code),
                    },
                ),
                None => false,
            };
            if handled {
                LRESULT(0)
            } else {
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }
        }
        WM_FONTCHANGE => {
            dispatch(hwnd, DialogEvent::FontsChanged);
            LRESULT(0)
        }
        WM_CLOSE => {
            let _ = DestroyWindow(hwnd);
            LRESULT(0)
        }
        WM_NCDESTROY => {
            let ptr = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0)
                as *const RefCell<Locale<GdiFontFactory>>;
            if !ptr.is_null() {
                drop(Rc::from_raw(ptr));
            }
            let _ = DIALOG_HWND.compare_exchange(
                hwnd.0,
                std::ptr::null_mut(),
                Ordering::Relaxed,
                Ordering::Relaxed,
            );
            debug!("Language option window closed");
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

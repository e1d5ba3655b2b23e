#![cfg_attr(windows, windows_subsystem = "windows")]

//! n01 language tray host
//!
//! Restores the saved language at launch, renders the tray menu from the
//! string table, opens the language option window and saves the language
//! on exit.

#[cfg(windows)]
mod icon;

#[cfg(windows)]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = app::run() {
        log::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::error!("n01_language hosts a Win32 window and only runs on Windows");
    std::process::exit(1);
}

#[cfg(windows)]
mod app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::thread;
    use std::time::Duration;

    use log::{info, warn};
    use muda::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
    use tray_icon::{TrayIconBuilder, TrayIconEvent};
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, PeekMessageW, TranslateMessage, MSG, PM_REMOVE,
    };

    use n01_language::dialog_window::{self, SharedLocale};
    use n01_language::gdi::GdiFontFactory;
    use n01_language::settings::{self, IniFile};
    use n01_language::{Error, Locale, Result, StringId};

    use crate::icon;

    const VERSION: &str = env!("BUILD_VERSION");
    const INI_FILE_NAME: &str = "n01.ini";
    const SLEEP_INTERVAL: Duration = Duration::from_millis(10);

    /// Menu items whose labels come from the string table
    struct TrayMenu {
        language_item: MenuItem,
        exit_item: MenuItem,
    }

    impl TrayMenu {
        fn render(&self, locale: &Locale<GdiFontFactory>) {
            self.language_item
                .set_text(format!("{}...", locale.text(StringId::Language)));
            self.exit_item.set_text(locale.text(StringId::Exit));
        }
    }

    fn tray_error(e: impl std::fmt::Display) -> Error {
        Error::Tray(e.to_string())
    }

    /// Pump Windows messages (tray menu and the option window)
    fn pump_messages() {
        unsafe {
            let mut msg = MSG::default();
            while PeekMessageW(&mut msg, HWND::default(), 0, 0, PM_REMOVE).as_bool() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
    }

    pub fn run() -> Result<()> {
        let mut ini = IniFile::beside_exe(INI_FILE_NAME);
        let locale: SharedLocale = Rc::new(RefCell::new(Locale::new(GdiFontFactory::new())));
        {
            let mut locale = locale.borrow_mut();
            locale.initialize();
            settings::load_language(&ini, locale.state_mut());
            info!(
                "Language {} restored from {}",
                locale.current().code(),
                ini.path().display()
            );
        }

        let menu = Menu::new();
        let version_item = MenuItem::new(VERSION, false, None);
        let separator = PredefinedMenuItem::separator();
        let tray_menu = TrayMenu {
            language_item: MenuItem::with_id("language", "", true, None),
            exit_item: MenuItem::with_id("exit", "", true, None),
        };
        menu.append(&version_item).map_err(tray_error)?;
        menu.append(&separator).map_err(tray_error)?;
        menu.append(&tray_menu.language_item).map_err(tray_error)?;
        menu.append(&tray_menu.exit_item).map_err(tray_error)?;

        tray_menu.render(&locale.borrow());
        let mut rendered = locale.borrow().current();

        let _tray_icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip("n01")
            .with_icon(icon::load_icon().map_err(tray_error)?)
            .build()
            .map_err(tray_error)?;

        let menu_channel = MenuEvent::receiver();
        let _tray_channel = TrayIconEvent::receiver();

        loop {
            pump_messages();

            // Relabel after the option window switched language
            if let Ok(locale) = locale.try_borrow() {
                if locale.current() != rendered {
                    rendered = locale.current();
                    tray_menu.render(&locale);
                    info!("Language switched to {}", rendered.code());
                }
            }

            if let Ok(event) = menu_channel.try_recv() {
                match event.id.0.as_str() {
                    "language" => {
                        if let Err(e) = dialog_window::show(&locale) {
                            warn!("Failed to open language options: {}", e);
                        }
                    }
                    "exit" => break,
                    _ => {}
                }
            }

            thread::sleep(SLEEP_INTERVAL);
        }

        // The window's preview still references our fonts
        dialog_window::close();

        let mut locale = locale.borrow_mut();
        if let Err(e) = settings::save_language(&mut ini, locale.state()) {
            warn!("Failed to save language: {}", e);
        }
        locale.free();
        Ok(())
    }
}

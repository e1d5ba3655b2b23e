//! Language option dialog logic
//!
//! The dialog shows two radio buttons (English, Persian) and a preview label
//! rendered in the selected language's font. Events are routed by control id
//! and notification kind; rendering goes through [`DialogView`] so the same
//! handler drives the Win32 window and the tests.

use log::debug;

use crate::font::FontFactory;
use crate::language::Language;
use crate::locale::Locale;
use crate::strings::StringId;

pub const PREVIEW_ENGLISH: &str = "Sample English Text - Arial Font";
pub const PREVIEW_PERSIAN: &str = "نمونه متن فارسی - Vazir Font";

/// Dialog controls. The discriminant is the native control id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ControlId {
    RadioEnglish = 1001,
    RadioPersian = 1002,
    FontPreview = 1003,
}

impl ControlId {
    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn from_id(id: i32) -> Option<ControlId> {
        match id {
            1001 => Some(ControlId::RadioEnglish),
            1002 => Some(ControlId::RadioPersian),
            1003 => Some(ControlId::FontPreview),
            _ => None,
        }
    }

    /// Radio button for `lang`
    pub fn radio_for(lang: Language) -> ControlId {
        match lang {
            Language::English => ControlId::RadioEnglish,
            Language::Persian => ControlId::RadioPersian,
        }
    }
}

/// Button notification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Clicked,
    Other(u32),
}

impl Notification {
    /// From the high word of a `WM_COMMAND` wparam
    pub fn from_code(code: u32) -> Notification {
        match code {
            0 => Notification::Clicked,
            other => Notification::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// Controls exist and should be filled in
    Init,
    Command {
        control: ControlId,
        notification: Notification,
    },
    /// Installed fonts changed
    FontsChanged,
}

/// What the dialog handler can do to the window
pub trait DialogView<H> {
    fn set_title(&mut self, text: &str);
    fn set_item_text(&mut self, control: ControlId, text: &str);
    /// Check `control` and uncheck the other radio button
    fn check_radio(&mut self, control: ControlId);
    fn set_item_font(&mut self, control: ControlId, font: H);
    /// Put `control` back on the system default font
    fn reset_item_font(&mut self, control: ControlId);
}

/// Fixed preview sentence for `lang`
pub fn preview_text(lang: Language) -> &'static str {
    match lang {
        Language::English => PREVIEW_ENGLISH,
        Language::Persian => PREVIEW_PERSIAN,
    }
}

/// Handle one dialog event. Returns whether the event was consumed.
///
/// No persistence happens here; saving is done by the host at exit.
pub fn handle_event<F, V>(locale: &mut Locale<F>, view: &mut V, event: DialogEvent) -> bool
where
    F: FontFactory,
    V: DialogView<F::Handle>,
{
    match event {
        DialogEvent::Init => {
            view.set_title(locale.text(StringId::Language));
            view.set_item_text(ControlId::RadioEnglish, locale.text(StringId::EnglishName));
            view.set_item_text(ControlId::RadioPersian, locale.text(StringId::PersianName));
            view.check_radio(ControlId::radio_for(locale.current()));
            refresh_preview(locale, view);
            true
        }
        DialogEvent::Command {
            control: ControlId::RadioEnglish,
            notification: Notification::Clicked,
        } => {
            select(locale, view, Language::English);
            true
        }
        DialogEvent::Command {
            control: ControlId::RadioPersian,
            notification: Notification::Clicked,
        } => {
            select(locale, view, Language::Persian);
            true
        }
        DialogEvent::Command { .. } => false,
        DialogEvent::FontsChanged => {
            locale.update_fonts();
            apply_preview_font(locale, view);
            true
        }
    }
}

fn select<F, V>(locale: &mut Locale<F>, view: &mut V, lang: Language)
where
    F: FontFactory,
    V: DialogView<F::Handle>,
{
    debug!("Language option selected: {}", lang.code());
    locale.set_current(lang);
    refresh_preview(locale, view);
}

fn refresh_preview<F, V>(locale: &Locale<F>, view: &mut V)
where
    F: FontFactory,
    V: DialogView<F::Handle>,
{
    view.set_item_text(ControlId::FontPreview, preview_text(locale.current()));
    apply_preview_font(locale, view);
}

fn apply_preview_font<F, V>(locale: &Locale<F>, view: &mut V)
where
    F: FontFactory,
    V: DialogView<F::Handle>,
{
    // The previous handle may already be released, never leave it selected
    match locale.get_font() {
        Some(font) => view.set_item_font(ControlId::FontPreview, font),
        None => view.reset_item_font(ControlId::FontPreview),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::font::testing::RecordingFactory;
    use crate::font::{ENGLISH_FAMILY, PERSIAN_FAMILY};

    #[derive(Default)]
    struct RecordingView {
        title: String,
        texts: HashMap<ControlId, String>,
        checked: Option<ControlId>,
        fonts: HashMap<ControlId, u32>,
        default_font: Vec<ControlId>,
    }

    impl DialogView<u32> for RecordingView {
        fn set_title(&mut self, text: &str) {
            self.title = text.to_string();
        }

        fn set_item_text(&mut self, control: ControlId, text: &str) {
            self.texts.insert(control, text.to_string());
        }

        fn check_radio(&mut self, control: ControlId) {
            self.checked = Some(control);
        }

        fn set_item_font(&mut self, control: ControlId, font: u32) {
            self.fonts.insert(control, font);
        }

        fn reset_item_font(&mut self, control: ControlId) {
            self.fonts.remove(&control);
            self.default_font.push(control);
        }
    }

    fn setup() -> (Locale<RecordingFactory>, RecordingView) {
        let mut locale = Locale::new(RecordingFactory::all_installed());
        locale.initialize();
        (locale, RecordingView::default())
    }

    fn click(control: ControlId) -> DialogEvent {
        DialogEvent::Command {
            control,
            notification: Notification::Clicked,
        }
    }

    fn preview_family(locale: &Locale<RecordingFactory>, view: &RecordingView) -> Option<&'static str> {
        let font = view.fonts[&ControlId::FontPreview];
        locale.fonts().factory().log.borrow().family_of(font)
    }

    #[test]
    fn test_init_in_english() {
        let (mut locale, mut view) = setup();
        assert!(handle_event(&mut locale, &mut view, DialogEvent::Init));

        assert_eq!(view.title, "Language");
        assert_eq!(view.texts[&ControlId::RadioEnglish], "English");
        assert_eq!(view.texts[&ControlId::RadioPersian], "Persian");
        assert_eq!(view.checked, Some(ControlId::RadioEnglish));
        assert_eq!(view.texts[&ControlId::FontPreview], PREVIEW_ENGLISH);
        assert_eq!(preview_family(&locale, &view), Some(ENGLISH_FAMILY));
    }

    #[test]
    fn test_init_in_persian() {
        let (mut locale, mut view) = setup();
        locale.set_current(Language::Persian);
        handle_event(&mut locale, &mut view, DialogEvent::Init);

        assert_eq!(view.title, "زبان");
        assert_eq!(view.texts[&ControlId::RadioEnglish], "انگلیسی");
        assert_eq!(view.texts[&ControlId::RadioPersian], "فارسی");
        assert_eq!(view.checked, Some(ControlId::RadioPersian));
        assert_eq!(view.texts[&ControlId::FontPreview], PREVIEW_PERSIAN);
        assert_eq!(preview_family(&locale, &view), Some(PERSIAN_FAMILY));
    }

    #[test]
    fn test_radio_clicks_switch_language() {
        let (mut locale, mut view) = setup();
        handle_event(&mut locale, &mut view, DialogEvent::Init);

        assert!(handle_event(&mut locale, &mut view, click(ControlId::RadioPersian)));
        assert_eq!(locale.current(), Language::Persian);
        assert_eq!(view.texts[&ControlId::FontPreview], PREVIEW_PERSIAN);
        assert_eq!(preview_family(&locale, &view), Some(PERSIAN_FAMILY));

        assert!(handle_event(&mut locale, &mut view, click(ControlId::RadioEnglish)));
        assert_eq!(locale.current(), Language::English);
        assert_eq!(view.texts[&ControlId::FontPreview], PREVIEW_ENGLISH);
        assert_eq!(preview_family(&locale, &view), Some(ENGLISH_FAMILY));

        // title is only rendered on init
        assert_eq!(view.title, "Language");
    }

    #[test]
    fn test_unrelated_commands_are_ignored() {
        let (mut locale, mut view) = setup();
        let focus = DialogEvent::Command {
            control: ControlId::RadioPersian,
            notification: Notification::from_code(6),
        };
        assert!(!handle_event(&mut locale, &mut view, focus));
        assert!(!handle_event(&mut locale, &mut view, click(ControlId::FontPreview)));
        assert_eq!(locale.current(), Language::English);
        assert!(view.texts.is_empty());
    }

    #[test]
    fn test_fonts_changed_reapplies_preview_font() {
        let (mut locale, mut view) = setup();
        handle_event(&mut locale, &mut view, DialogEvent::Init);
        let before = view.fonts[&ControlId::FontPreview];

        assert!(handle_event(&mut locale, &mut view, DialogEvent::FontsChanged));

        let after = view.fonts[&ControlId::FontPreview];
        assert_ne!(before, after);
        assert_eq!(locale.get_font(), Some(after));
        assert!(locale.fonts().factory().log.borrow().released.contains(&before));
    }

    #[test]
    fn test_fonts_changed_without_fonts_resets_preview() {
        let (mut locale, mut view) = setup();
        handle_event(&mut locale, &mut view, DialogEvent::Init);
        let before = view.fonts[&ControlId::FontPreview];

        locale.fonts().factory().installed.borrow_mut().clear();
        assert!(handle_event(&mut locale, &mut view, DialogEvent::FontsChanged));

        assert_eq!(locale.get_font(), None);
        assert!(locale.fonts().factory().log.borrow().released.contains(&before));
        assert!(!view.fonts.contains_key(&ControlId::FontPreview));
        assert_eq!(view.default_font, vec![ControlId::FontPreview]);
    }

    #[test]
    fn test_control_ids() {
        for control in [ControlId::RadioEnglish, ControlId::RadioPersian, ControlId::FontPreview] {
            assert_eq!(ControlId::from_id(control.id()), Some(control));
        }
        assert_eq!(ControlId::from_id(0), None);
        assert_eq!(Notification::from_code(0), Notification::Clicked);
    }
}

//! String table for every UI label in the game, English and Persian
//!
//! Ids are stable and contiguous from 0. The table is a fixed-length array so
//! the end of the table is just a bounds check.

use crate::language::Language;

/// Number of entries in [`STRING_TABLE`]
pub const STRING_COUNT: usize = 49;

/// One localized label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringEntry {
    pub english: &'static str,
    pub persian: Option<&'static str>,
}

impl StringEntry {
    pub const fn new(english: &'static str, persian: &'static str) -> Self {
        Self {
            english,
            persian: Some(persian),
        }
    }

    pub const fn english_only(english: &'static str) -> Self {
        Self {
            english,
            persian: None,
        }
    }

    /// Text for `lang`, English when the Persian text is missing
    pub fn text(&self, lang: Language) -> &'static str {
        match (lang, self.persian) {
            (Language::Persian, Some(persian)) => persian,
            _ => self.english,
        }
    }
}

/// Typed ids for [`STRING_TABLE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum StringId {
    Player1 = 0,
    Player2 = 1,
    Score = 2,
    ToGo = 3,
    Round = 4,
    Darts = 5,
    Finish = 6,
    Game = 7,
    Set = 8,
    Leg = 9,
    Average = 10,
    Total = 11,
    HighOff = 12,
    OneEighties = 13,
    Tons = 14,
    First9 = 15,
    CheckOut = 16,
    Arrange = 17,
    Options = 18,
    Language = 19,
    EnglishName = 20,
    PersianName = 21,
    Font = 22,
    Ok = 23,
    Cancel = 24,
    Apply = 25,
    Close = 26,
    Save = 27,
    Load = 28,
    NewGame = 29,
    Exit = 30,
    Help = 31,
    About = 32,
    View = 33,
    Tools = 34,
    File = 35,
    Edit = 36,
    GameHistory = 37,
    Statistics = 38,
    Computer = 39,
    Level = 40,
    StartScore = 41,
    RoundLimit = 42,
    LegLimit = 43,
    BestOf = 44,
    FirstMark = 45,
    Win = 46,
    Lose = 47,
    Tie = 48,
}

impl StringId {
    /// All ids in table order
    pub const ALL: [StringId; STRING_COUNT] = [
        StringId::Player1,
        StringId::Player2,
        StringId::Score,
        StringId::ToGo,
        StringId::Round,
        StringId::Darts,
        StringId::Finish,
        StringId::Game,
        StringId::Set,
        StringId::Leg,
        StringId::Average,
        StringId::Total,
        StringId::HighOff,
        StringId::OneEighties,
        StringId::Tons,
        StringId::First9,
        StringId::CheckOut,
        StringId::Arrange,
        StringId::Options,
        StringId::Language,
        StringId::EnglishName,
        StringId::PersianName,
        StringId::Font,
        StringId::Ok,
        StringId::Cancel,
        StringId::Apply,
        StringId::Close,
        StringId::Save,
        StringId::Load,
        StringId::NewGame,
        StringId::Exit,
        StringId::Help,
        StringId::About,
        StringId::View,
        StringId::Tools,
        StringId::File,
        StringId::Edit,
        StringId::GameHistory,
        StringId::Statistics,
        StringId::Computer,
        StringId::Level,
        StringId::StartScore,
        StringId::RoundLimit,
        StringId::LegLimit,
        StringId::BestOf,
        StringId::FirstMark,
        StringId::Win,
        StringId::Lose,
        StringId::Tie,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<StringId> {
        Self::ALL.get(id as usize).copied()
    }
}

impl From<StringId> for u32 {
    fn from(id: StringId) -> u32 {
        id.id()
    }
}

pub static STRING_TABLE: [StringEntry; STRING_COUNT] = [
    StringEntry::new("Player 1", "بازیکن ۱"),
    StringEntry::new("Player 2", "بازیکن ۲"),
    StringEntry::new("Score", "امتیاز"),
    StringEntry::new("To Go", "باقیمانده"),
    StringEntry::new("Round", "دور"),
    StringEntry::new("Darts", "پرتاب"),
    StringEntry::new("Finish", "پایان"),
    StringEntry::new("Game", "بازی"),
    StringEntry::new("Set", "ست"),
    StringEntry::new("Leg", "لگ"),
    StringEntry::new("Average", "میانگین"),
    StringEntry::new("Total", "کل"),
    StringEntry::new("High Off", "بالاترین پایان"),
    StringEntry::new("180s", "۱۸۰ها"),
    StringEntry::new("Tons", "صدها"),
    StringEntry::new("First 9", "۹ اول"),
    StringEntry::new("Check Out", "پایان بازی"),
    StringEntry::new("Arrange", "ترتیب"),
    StringEntry::new("Options", "تنظیمات"),
    StringEntry::new("Language", "زبان"),
    StringEntry::new("English", "انگلیسی"),
    StringEntry::new("Persian", "فارسی"),
    StringEntry::new("Font", "فونت"),
    StringEntry::new("OK", "تأیید"),
    StringEntry::new("Cancel", "لغو"),
    StringEntry::new("Apply", "اعمال"),
    StringEntry::new("Close", "بستن"),
    StringEntry::new("Save", "ذخیره"),
    StringEntry::new("Load", "بارگذاری"),
    StringEntry::new("New Game", "بازی جدید"),
    StringEntry::new("Exit", "خروج"),
    StringEntry::new("Help", "راهنما"),
    StringEntry::new("About", "درباره"),
    StringEntry::new("View", "نمایش"),
    StringEntry::new("Tools", "ابزارها"),
    StringEntry::new("File", "فایل"),
    StringEntry::new("Edit", "ویرایش"),
    StringEntry::new("Game History", "تاریخچه بازی"),
    StringEntry::new("Statistics", "آمار"),
    StringEntry::new("Computer", "کامپیوتر"),
    StringEntry::new("Level", "سطح"),
    StringEntry::new("Start Score", "امتیاز شروع"),
    StringEntry::new("Round Limit", "محدودیت دور"),
    StringEntry::new("Leg Limit", "محدودیت لگ"),
    StringEntry::new("Best of", "بهترین از"),
    StringEntry::new("First Mark", "اولین نشان"),
    StringEntry::new("Win", "برد"),
    StringEntry::new("Lose", "باخت"),
    StringEntry::new("Tie", "مساوی"),
];

/// Look up `id` in `table`. Out-of-range ids give an empty string.
pub fn lookup_in(table: &[StringEntry], id: u32, lang: Language) -> &'static str {
    usize::try_from(id)
        .ok()
        .and_then(|index| table.get(index))
        .map_or("", |entry| entry.text(lang))
}

/// Look up `id` in the game's string table
pub fn lookup(id: u32, lang: Language) -> &'static str {
    lookup_in(&STRING_TABLE, id, lang)
}

pub mod dates {
    use crate::constants::constants::{MAX_DAY, MAX_YEAR, MIN_YEAR};
    use chrono::NaiveDate;
    use std::fmt;

    /// Lowercase month names and their three letter abbreviations.
    pub const MONTHS: [(&str, u8); 23] = [
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("may", 5),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
    ];

    pub const MONTH_NAMES: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    fn lookup(key: &str) -> Option<u8> {
        MONTHS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, number)| *number)
    }

    /// Month number for a full or abbreviated month name, case-insensitive.
    /// Falls back to the first three letters, so "Sept" resolves too.
    pub fn month_number(name: &str) -> Option<u8> {
        let lower = name.trim().to_lowercase();
        lookup(&lower).or_else(|| {
            let prefix: String = lower.chars().take(3).collect();
            lookup(&prefix)
        })
    }

    /// Full lowercase name of a month number.
    pub fn month_name(month: u8) -> Option<&'static str> {
        MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
    }

    /// A year/month/day triple with each field in range.
    ///
    /// Fields are bounds-checked independently: February 31st is representable.
    /// Use [`CalendarDate::to_naive_date`] to find out whether the day exists.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CalendarDate {
        year: u16,
        month: u8,
        day: u8,
    }

    impl CalendarDate {
        pub fn new(year: u32, month: u32, day: u32) -> Option<Self> {
            let year = u16::try_from(year).ok()?;
            let month = u8::try_from(month).ok()?;
            let day = u8::try_from(day).ok()?;

            let valid = (MIN_YEAR..=MAX_YEAR).contains(&year)
                && (1..=12).contains(&month)
                && (1..=MAX_DAY).contains(&day);

            valid.then_some(Self { year, month, day })
        }

        pub fn year(&self) -> u16 {
            self.year
        }

        pub fn month(&self) -> u8 {
            self.month
        }

        pub fn day(&self) -> u8 {
            self.day
        }

        pub fn month_name(&self) -> &'static str {
            MONTH_NAMES[usize::from(self.month - 1)]
        }

        pub fn to_naive_date(&self) -> Option<NaiveDate> {
            NaiveDate::from_ymd_opt(
                i32::from(self.year),
                u32::from(self.month),
                u32::from(self.day),
            )
        }
    }

    impl fmt::Display for CalendarDate {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}-{}-{}", self.year, self.month, self.day)
        }
    }

}

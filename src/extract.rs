pub mod extract {
    //! Recovers the event date from a loosely formatted description.
    //!
    //! Patterns are tried in priority order, each against its first occurrence
    //! in the text only. A syntactic match whose fields fail validation falls
    //! through to the next pattern.

    use crate::dates::dates::{month_number, CalendarDate};
    use crate::errors::errors::DateError;
    use once_cell::sync::Lazy;
    use regex::{Captures, Regex};
    use tracing::{debug, trace};

    const WEEKDAYS_RE: &str = "Saturday|Sunday|Monday|Tuesday|Wednesday|Thursday|Friday";
    const WEEKDAY_ABBREVS_RE: &str = "Sat|Sun|Mon|Tue|Wed|Thu|Fri";
    const MONTH_NAMES_RE: &str =
        "January|February|March|April|May|June|July|August|September|October|November|December";
    const MONTH_ABBREVS_RE: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";
    const ORDINAL: &str = "(?:st|nd|rd|th)?";

    /// Fields in (year, month, day) order, not yet range checked.
    type Fields = (u32, u32, u32);

    pub struct DatePattern {
        pub name: &'static str,
        regex: Regex,
        fields: fn(&Captures) -> Option<Fields>,
    }

    impl DatePattern {
        fn new(name: &'static str, pattern: String, fields: fn(&Captures) -> Option<Fields>) -> Self {
            let regex = Regex::new(&format!("(?i){}", pattern))
                .unwrap_or_else(|err| panic!("date pattern {} does not compile: {}", name, err));
            Self {
                name,
                regex,
                fields,
            }
        }

        /// Date from the first occurrence of this pattern, if it matches and validates.
        pub fn find(&self, text: &str) -> Option<CalendarDate> {
            let caps = self.regex.captures(text)?;
            let matched = caps.get(0).map_or("", |m| m.as_str());
            let (year, month, day) = match (self.fields)(&caps) {
                Some(fields) => fields,
                None => {
                    debug!(target: "dates", "{} matched {:?} but fields did not map", self.name, matched);
                    return None;
                }
            };
            let date = CalendarDate::new(year, month, day);
            if date.is_none() {
                debug!(
                    target: "dates",
                    "{} matched {:?} with out of range fields {}-{}-{}",
                    self.name, matched, year, month, day
                );
            }
            date
        }
    }

    fn number(caps: &Captures, group: usize) -> Option<u32> {
        caps.get(group)?.as_str().parse().ok()
    }

    fn month(caps: &Captures, group: usize) -> Option<u32> {
        month_number(caps.get(group)?.as_str()).map(u32::from)
    }

    // Weekday? Month Day Year
    fn weekday_month_day_year(caps: &Captures) -> Option<Fields> {
        Some((number(caps, 4)?, month(caps, 2)?, number(caps, 3)?))
    }

    fn month_day_year(caps: &Captures) -> Option<Fields> {
        Some((number(caps, 3)?, month(caps, 1)?, number(caps, 2)?))
    }

    fn day_month_year(caps: &Captures) -> Option<Fields> {
        Some((number(caps, 3)?, month(caps, 2)?, number(caps, 1)?))
    }

    fn iso(caps: &Captures) -> Option<Fields> {
        Some((number(caps, 1)?, number(caps, 2)?, number(caps, 3)?))
    }

    // Always day first, even when the first number could be a month.
    fn dotted(caps: &Captures) -> Option<Fields> {
        Some((number(caps, 3)?, number(caps, 2)?, number(caps, 1)?))
    }

    // Always month first (US order).
    fn slashed(caps: &Captures) -> Option<Fields> {
        Some((number(caps, 3)?, number(caps, 1)?, number(caps, 2)?))
    }

    pub static DATE_PATTERNS: Lazy<Vec<DatePattern>> = Lazy::new(|| {
        vec![
            DatePattern::new(
                "weekday month day year",
                format!(
                    r"\b({})\s+,?\s*({})\s+(\d{{1,2}}){}\s*,?\s*(\d{{4}})\b",
                    WEEKDAYS_RE, MONTH_NAMES_RE, ORDINAL
                ),
                weekday_month_day_year,
            ),
            DatePattern::new(
                "weekday abbrev month abbrev day year",
                format!(
                    r"\b({})\s*,?\s*({})\s+(\d{{1,2}}){}\s*,?\s*(\d{{4}})\b",
                    WEEKDAY_ABBREVS_RE, MONTH_ABBREVS_RE, ORDINAL
                ),
                weekday_month_day_year,
            ),
            DatePattern::new(
                "month day year",
                format!(
                    r"\b({})\s+(\d{{1,2}}){}\s*,?\s*(\d{{4}})\b",
                    MONTH_NAMES_RE, ORDINAL
                ),
                month_day_year,
            ),
            DatePattern::new(
                "month abbrev day year",
                format!(
                    r"\b({})\s+(\d{{1,2}}){}\s*,?\s*(\d{{4}})\b",
                    MONTH_ABBREVS_RE, ORDINAL
                ),
                month_day_year,
            ),
            DatePattern::new(
                "day month year",
                format!(r"\b(\d{{1,2}}){}\s+({})\s+(\d{{4}})\b", ORDINAL, MONTH_NAMES_RE),
                day_month_year,
            ),
            DatePattern::new(
                "day month abbrev year",
                format!(r"\b(\d{{1,2}}){}\s+({})\s+(\d{{4}})\b", ORDINAL, MONTH_ABBREVS_RE),
                day_month_year,
            ),
            DatePattern::new("iso", r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b".to_string(), iso),
            DatePattern::new("dotted", r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b".to_string(), dotted),
            DatePattern::new("slashed", r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b".to_string(), slashed),
        ]
    });

    /// Collapses the text onto one line; pipes and commas become spaces too.
    pub fn normalize(text: &str) -> String {
        text.trim()
            .chars()
            .map(|c| match c {
                '|' | ',' | '\n' | '\r' => ' ',
                c => c,
            })
            .collect()
    }

    /// First valid date in `text`, by pattern priority.
    pub fn find_date(text: &str) -> Option<CalendarDate> {
        let text = normalize(text);
        DATE_PATTERNS.iter().find_map(|pattern| {
            let date = pattern.find(&text)?;
            trace!(target: "dates", "{} produced {}", pattern.name, date);
            Some(date)
        })
    }

    /// Like [`find_date`], failing with an error naming `source`.
    pub fn extract_date(text: &str, source: &str) -> Result<CalendarDate, DateError> {
        find_date(text).ok_or_else(|| DateError::NoDateFound(source.to_string()))
    }

}

pub mod matcher {
    use crate::dates::dates::CalendarDate;
    use regex::Regex;
    use tracing::trace;

    const ORDINAL: &str = "(?:st|nd|rd|th)?";

    /// Matches the full name or three letter abbreviation of the date's month,
    /// e.g. `apr(?:il)?`.
    fn month_name_pattern(date: &CalendarDate) -> String {
        let name = date.month_name();
        let (abbrev, rest) = name.split_at(3);
        if rest.is_empty() {
            abbrev.to_string()
        } else {
            format!("{}(?:{})?", abbrev, rest)
        }
    }

    /// Probe grammars, one per textual encoding of `date`.
    pub fn probe_patterns(date: &CalendarDate) -> Vec<String> {
        let month_name = month_name_pattern(date);
        let (year, month, day) = (date.year(), date.month(), date.day());

        vec![
            format!(r"{}\s+{}{}\s*,?\s*{}", month_name, day, ORDINAL, year),
            format!(r"{}\s+{}{}\s+,?\s*{}", month_name, day, ORDINAL, year),
            format!(r"\b{}{}\s+{}\s+{}", day, ORDINAL, month_name, year),
            format!(r"\b{}\s*[-/]\s*{:02}\s*[-/]\s*{:02}", year, month, day),
            format!(r"\b{:02}\s*[./]\s*{:02}\s*[./]\s*{}", day, month, year),
            format!(r"\b{:02}\s*[./]\s*{:02}\s*[./]\s*{}", month, day, year),
            format!(r"\b{}\s*[./]\s*{}\s*[./]\s*{}", day, month, year),
            format!(r"\b{}\s*/\s*{}\s*/\s*{}", month, day, year),
            format!(r"\b{:02}\s*/\s*{:02}\s*/\s*{}", month, day, year),
        ]
    }

    /// Compiled probes for one target date, built once and reused across texts.
    pub struct DateProbes {
        probes: Vec<Regex>,
    }

    impl DateProbes {
        pub fn new(date: &CalendarDate) -> Self {
            let probes = probe_patterns(date)
                .iter()
                .map(|pattern| {
                    Regex::new(&format!("(?i){}", pattern))
                        .unwrap_or_else(|err| panic!("probe {} does not compile: {}", pattern, err))
                })
                .collect();
            Self { probes }
        }

        /// Whether `text` mentions the date in any common encoding.
        pub fn matches(&self, text: &str) -> bool {
            let hit = self.probes.iter().find(|probe| probe.is_match(text));
            if let Some(probe) = hit {
                trace!(target: "dates", "probe {} matched {:?}", probe.as_str(), text);
            }
            hit.is_some()
        }
    }

    /// One-off check of `text` against `date`; prefer [`DateProbes`] for many texts.
    pub fn date_matches(date: &CalendarDate, text: &str) -> bool {
        DateProbes::new(date).matches(text)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn date(year: u32, month: u32, day: u32) -> CalendarDate {
            CalendarDate::new(year, month, day).unwrap()
        }

        #[test]
        fn matches_search_result_text() {
            let target = date(2026, 4, 11);
            assert!(date_matches(&target, "Tickets for Sat Apr 11 2026 show"));
            assert!(!date_matches(&target, "Tickets for Sat Apr 12 2026 show"));
        }

        #[test]
        fn matches_every_encoding() {
            let target = date(2026, 4, 11);
            let texts = [
                "April 11th, 2026",
                "Apr 11 , 2026",
                "11th April 2026",
                "11 apr 2026",
                "2026-04-11",
                "2026/04/11",
                "11.04.2026",
                "11/04/2026",
                "04.11.2026",
                "11.4.2026",
                "4/11/2026",
                "04/11/2026",
                "4 / 11 / 2026",
            ];
            for text in texts {
                assert!(date_matches(&target, text), "{}", text);
            }
        }

        #[test]
        fn every_probe_accepts_its_own_rendering() {
            for (y, m, d) in [(2000, 1, 1), (2026, 5, 3), (2031, 9, 30), (2100, 12, 31)] {
                let target = date(y, m, d);
                let name = target.month_name();
                let texts = [
                    format!("{} {}, {}", name, d, y),
                    format!("{} {} , {}", &name[..3], d, y),
                    format!("{}th {} {}", d, name, y),
                    format!("{}-{:02}-{:02}", y, m, d),
                    format!("{:02}.{:02}.{}", d, m, y),
                    format!("{:02}.{:02}.{}", m, d, y),
                    format!("{}.{}.{}", d, m, y),
                    format!("{}/{}/{}", m, d, y),
                    format!("{:02}/{:02}/{}", m, d, y),
                ];
                for text in &texts {
                    assert!(date_matches(&target, text), "{}", text);
                }
            }
        }

        #[test]
        fn is_case_insensitive() {
            let target = date(2026, 4, 11);
            assert!(date_matches(&target, "SATURDAY APRIL 11TH 2026"));
            assert!(date_matches(&target, "sat apr 11 2026"));
        }

        #[test]
        fn other_months_and_years_do_not_match() {
            let target = date(2026, 4, 11);
            assert!(!date_matches(&target, "Mar 11, 2026"));
            assert!(!date_matches(&target, "April 11, 2027"));
            assert!(!date_matches(&target, "2026-04-12"));
            assert!(!date_matches(&target, "21 April 2026"));
            assert!(!date_matches(&target, "Buy tickets now"));
            assert!(!date_matches(&target, ""));
        }

        #[test]
        fn may_has_no_long_form_suffix() {
            let target = date(2026, 5, 3);
            assert_eq!(month_name_pattern(&target), "may");
            assert!(date_matches(&target, "Sun May 3rd, 2026"));
        }

        #[test]
        fn compiled_probes_are_reusable() {
            let probes = DateProbes::new(&date(2026, 4, 11));
            assert!(probes.matches("Tickets for Sat Apr 11 2026 show"));
            assert!(!probes.matches("Tickets for Sat Apr 12 2026 show"));
            assert!(probes.matches("Doors 11.04.2026"));
            assert!(!probes.matches("Doors 12.04.2026"));
        }

        #[test]
        fn builds_nine_probes() {
            let patterns = probe_patterns(&date(2026, 4, 11));
            assert_eq!(patterns.len(), 9);
            assert_eq!(patterns[3], r"\b2026\s*[-/]\s*04\s*[-/]\s*11");
            assert!(patterns[0].starts_with("apr(?:il)?"));
        }
    }
}

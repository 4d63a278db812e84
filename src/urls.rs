pub mod urls {
    use std::collections::HashSet;
    use tracing::trace;
    use url::Url;

    /// How links from a site are reduced to one canonical URL per event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SiteRule {
        /// `https://dice.fm/event/<slug>`
        Dice,
        /// `https://ra.co/events/<id>`
        ResidentAdvisor,
        Verbatim,
    }

    impl SiteRule {
        pub fn for_site(site: &str) -> Self {
            match site {
                "dice.fm" => SiteRule::Dice,
                "ra.co" => SiteRule::ResidentAdvisor,
                _ => SiteRule::Verbatim,
            }
        }

        pub fn canonicalize(&self, link: &str) -> Option<String> {
            match self {
                SiteRule::Verbatim => Some(link.to_string()),
                SiteRule::Dice => {
                    let url = Url::parse(link).ok()?;
                    let path = url.path().trim_end_matches('/');
                    let slug = path.strip_prefix("/event/")?.split('/').next()?;
                    if slug.is_empty() {
                        return None;
                    }
                    Some(rebuild(&url, "dice.fm", &format!("/event/{}", slug)))
                }
                SiteRule::ResidentAdvisor => {
                    let url = Url::parse(link).ok()?;
                    let mut parts = url.path().trim_matches('/').split('/');
                    if parts.next()? != "events" {
                        return None;
                    }
                    let id = parts.next()?;
                    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
                        return None;
                    }
                    Some(rebuild(&url, "ra.co", &format!("/events/{}", id)))
                }
            }
        }
    }

    fn rebuild(url: &Url, default_host: &str, path: &str) -> String {
        let host = url.host_str().unwrap_or(default_host);
        format!("{}://{}{}", url.scheme(), host, path)
    }

    /// Canonical links for `site`, first occurrence order, duplicates removed.
    pub fn normalize_and_dedupe(site: &str, links: &[String]) -> Vec<String> {
        let rule = SiteRule::for_site(site);
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for link in links.iter().filter(|link| !link.is_empty()) {
            let Some(canonical) = rule.canonicalize(link) else {
                trace!("dropping {} for {}", link, site);
                continue;
            };
            if seen.insert(canonical.clone()) {
                out.push(canonical);
            }
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn links(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn dice_keeps_only_event_slugs() {
            let input = links(&[
                "https://dice.fm/event/abc123-indie-night-11th-apr?lng=en",
                "https://dice.fm/event/abc123-indie-night-11th-apr/",
                "https://dice.fm/venue/venue-x",
                "https://dice.fm/event/",
                "",
            ]);
            assert_eq!(
                normalize_and_dedupe("dice.fm", &input),
                vec!["https://dice.fm/event/abc123-indie-night-11th-apr"]
            );
        }

        #[test]
        fn ra_keeps_numeric_event_ids() {
            let input = links(&[
                "https://ra.co/events/2012345?utm=x",
                "https://ra.co/events/2012345/tickets",
                "https://ra.co/events/uk/london",
                "https://ra.co/clubs/1234",
                "https://ra.co/events/2099999",
            ]);
            assert_eq!(
                normalize_and_dedupe("ra.co", &input),
                vec!["https://ra.co/events/2012345", "https://ra.co/events/2099999"]
            );
        }

        #[test]
        fn other_sites_are_deduped_verbatim() {
            let input = links(&[
                "https://www.seetickets.com/event/a?x=1",
                "https://www.seetickets.com/event/a?x=1",
                "not a url",
            ]);
            assert_eq!(
                normalize_and_dedupe("seetickets.com", &input),
                vec!["https://www.seetickets.com/event/a?x=1", "not a url"]
            );
        }

        #[test]
        fn unparseable_links_are_dropped_for_canonical_sites() {
            assert!(normalize_and_dedupe("dice.fm", &links(&["/event/abc"])).is_empty());
        }
    }
}

pub mod sites {
    use crate::constants::constants::DISABLED_SITE_PREFIX;
    use crate::errors::errors::AppError;
    use std::fs;
    use tracing::debug;

    /// Enabled site domains, one per line. Lines starting with `-` are disabled.
    pub fn parse_sites(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(DISABLED_SITE_PREFIX))
            .map(String::from)
            .collect()
    }

    pub fn load_sites(path: &str) -> Result<Vec<String>, AppError> {
        let text = fs::read_to_string(path).map_err(|err| AppError::Io(path.to_string(), err))?;
        let sites = parse_sites(&text);
        debug!("loaded {} sites from {}", sites.len(), path);
        Ok(sites)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn skips_blank_and_disabled_lines() {
            let text = "dice.fm\n\n  -eventbrite.com\nra.co  \n-  skiddle.com\n   \nseetickets.com\n";
            assert_eq!(parse_sites(text), vec!["dice.fm", "ra.co", "seetickets.com"]);
        }

        #[test]
        fn empty_file_has_no_sites() {
            assert!(parse_sites("").is_empty());
        }

        #[test]
        fn missing_file_is_an_io_error() {
            assert!(matches!(load_sites("no/such/sites.txt"), Err(AppError::Io(..))));
        }
    }
}

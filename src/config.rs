pub mod config {
    use crate::constants::constants::{API_KEY_VAR, DEFAULT_INPUT_FILE, DEFAULT_SITES_FILE, SITES_VAR};
    use crate::errors::errors::AppError;
    use clap::Parser;
    use std::env;

    /// Find ticket listings for the event described in FILE.
    #[derive(Parser, Debug)]
    #[command(name = "searchy", version)]
    pub struct Args {
        /// Event description file
        #[arg(default_value = DEFAULT_INPUT_FILE)]
        pub file: String,

        /// Open every matched URL in Google Chrome
        #[arg(long)]
        pub open: bool,

        /// Site list, one domain per line; lines starting with '-' are skipped
        #[arg(long, env = SITES_VAR, default_value = DEFAULT_SITES_FILE)]
        pub sites: String,
    }

    pub struct Config {
        pub api_key: String,
        pub file: String,
        pub sites_file: String,
        pub open: bool,
    }

    impl Config {
        pub fn from_args(args: Args) -> Result<Self, AppError> {
            let api_key = env::var(API_KEY_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .ok_or(AppError::MissingApiKey)?;

            Ok(Config {
                api_key,
                file: args.file,
                sites_file: args.sites,
                open: args.open,
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn defaults() {
            let args = Args::try_parse_from(["searchy"]).unwrap();
            assert_eq!(args.file, DEFAULT_INPUT_FILE);
            assert!(!args.open);
        }

        #[test]
        fn file_and_open_flag() {
            let args = Args::try_parse_from(["searchy", "--open", "event.txt"]).unwrap();
            assert_eq!(args.file, "event.txt");
            assert!(args.open);
        }

        #[test]
        fn sites_override() {
            let args = Args::try_parse_from(["searchy", "--sites", "my-sites.txt"]).unwrap();
            assert_eq!(args.sites, "my-sites.txt");
        }
    }
}

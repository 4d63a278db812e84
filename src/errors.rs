pub mod errors {
    use quick_error::quick_error;
    use std::io;

    quick_error! {
        #[derive(Debug)]
        pub enum DateError {
            NoDateFound(file: String) {
                display("No date found in {}", file)
            }
        }
    }

    quick_error! {
        #[derive(Debug)]
        pub enum SearchError {
            Http(err: reqwest::Error) {
                from()
                display("{}", err)
                source(err)
            }
            Status(code: u16, body: String) {
                display("HTTP {}: {}", code, body)
            }
        }
    }

    quick_error! {
        #[derive(Debug)]
        pub enum AppError {
            MissingApiKey {
                display("SERPER_API_KEY not set. Add it to .env or set the environment variable.")
            }
            InputNotFound(path: String) {
                display("File '{}' not found.", path)
            }
            EmptyInput(path: String) {
                display("'{}' is empty or has no content.", path)
            }
            Io(path: String, err: io::Error) {
                display("Could not read '{}': {}", path, err)
                source(err)
            }
            Date(err: DateError) {
                from()
                display("{}", err)
                source(err)
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn no_date_names_the_file() {
            let err = DateError::NoDateFound("event.txt".to_string());
            assert_eq!(err.to_string(), "No date found in event.txt");
        }

        #[test]
        fn date_error_converts_into_app_error() {
            let err: AppError = DateError::NoDateFound("a.txt".to_string()).into();
            assert!(matches!(err, AppError::Date(_)));
            assert_eq!(err.to_string(), "No date found in a.txt");
        }
    }
}

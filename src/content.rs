pub mod content {
    use crate::constants::constants::{CONTENT_LINES, MIN_CONTENT_CHARS};
    use crate::errors::errors::AppError;
    use std::fs;
    use std::io::ErrorKind;
    use tracing::debug;

    pub fn read_event_file(path: &str) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::InputNotFound(path.to_string()),
            _ => AppError::Io(path.to_string(), err),
        })
    }

    /// Search query text for an event description.
    ///
    /// Uses the first line, or the first three lines joined when the first
    /// line alone is too short to identify the event.
    pub fn build_search_content(text: &str) -> Option<String> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let mut content = lines.first().copied().unwrap_or_default().to_string();

        if content.chars().count() < MIN_CONTENT_CHARS && lines.len() >= CONTENT_LINES {
            content = lines[..CONTENT_LINES].join(" ").trim().to_string();
        }

        debug!("search content: {:?}", content);
        match content.is_empty() {
            true => None,
            false => Some(content),
        }
    }

}

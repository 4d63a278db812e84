pub mod browser {
    use std::env;
    use std::path::PathBuf;
    use tracing::{debug, warn};

    /// How a matched URL gets shown on this platform.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Launch {
        /// Open with a named application or executable path.
        App(String),
        /// The system default browser.
        Default,
    }

    const MACOS_CHROME: &str = "Google Chrome";

    fn windows_chrome() -> Option<PathBuf> {
        let local = env::var("LOCALAPPDATA").ok().filter(|s| !s.is_empty())?;
        let chrome: PathBuf = [local.as_str(), "Google", "Chrome", "Application", "chrome.exe"]
            .iter()
            .collect();
        chrome.is_file().then_some(chrome)
    }

    /// Chrome on macOS and Windows, falling back to the default browser on
    /// Windows when Chrome is not installed. `None` elsewhere.
    pub fn launch_for(os: &str, chrome: Option<PathBuf>) -> Option<Launch> {
        match os {
            "macos" => Some(Launch::App(MACOS_CHROME.to_string())),
            "windows" => Some(match chrome {
                Some(path) => Launch::App(path.to_string_lossy().into_owned()),
                None => Launch::Default,
            }),
            _ => None,
        }
    }

    pub fn open_in_chrome(url: &str) {
        let chrome = match env::consts::OS {
            "windows" => windows_chrome(),
            _ => None,
        };
        let Some(launch) = launch_for(env::consts::OS, chrome) else {
            debug!("opening a browser is not supported on {}", env::consts::OS);
            return;
        };

        let result = match &launch {
            Launch::App(app) => open::with(url, app),
            Launch::Default => open::that(url),
        };
        match result {
            Ok(()) => debug!("opened {} via {:?}", url, launch),
            Err(err) => warn!("could not open {}: {}", url, err),
        }
    }

}

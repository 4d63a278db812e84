pub mod constants {
    pub const API_URL: &str = "https://google.serper.dev/search";
    pub const API_KEY_VAR: &str = "SERPER_API_KEY";
    pub const SITES_VAR: &str = "SEARCHY_SITES";

    pub const DEFAULT_INPUT_FILE: &str = "searchy.txt";
    pub const DEFAULT_SITES_FILE: &str = "sites.txt";
    pub const DISABLED_SITE_PREFIX: char = '-';

    pub const MIN_YEAR: u16 = 2000;
    pub const MAX_YEAR: u16 = 2100;
    pub const MAX_DAY: u8 = 31;

    // A first line shorter than this gets the next two lines appended to the query.
    pub const MIN_CONTENT_CHARS: usize = 40;
    pub const CONTENT_LINES: usize = 3;
}

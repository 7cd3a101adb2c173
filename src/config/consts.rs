// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://researchmap.jp/public/FAQ-1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("faq_scrape/", env!("CARGO_PKG_VERSION"));

// Export
pub const DEFAULT_OUT_DIR: &str = "";
pub const DEFAULT_FILE: &str = "researchmap_faq";

// Header labels
pub const LABELS_JA: [&str; 2] = ["質問", "回答"];
pub const LABELS_EN: [&str; 2] = ["question", "answer"];

//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground truth
//! lives in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page into small record structs.
//! - **Selection rules** (which nodes count, how they pair up).
//!
//! ## What does **not** live here
//! - **Export formatting or file handling** (`file`, `csv`, `xlsx`).
//! - **Deciding what to do with an empty result**; that is the runner's call.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → specs::faq::fetch()
//!                         ↘ core::net::fetch_page + specs::faq::parse_doc
//!           runner → file::write_export
//! ```
//!
//! ## Testing notes
//! - `parse_doc` functions are testable **offline** against inline markup or
//!   fixtures under `tests/fixtures/`.
pub mod faq;

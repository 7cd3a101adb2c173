// src/specs/faq.rs
//! Scraping *spec* for definition-list FAQ pages.
//!
//! Purpose:
//! - Parse the **remote HTML** and pair each `<dd>` (answer) with the most recent
//!   unpaired `<dt>` (question), in document order.
//!
//! Pairing rules:
//! - A `<dt>` replaces any pending question that was never answered.
//! - A `<dd>` with no pending question is skipped.
//! - A `<dt>` whose text is empty clears the pending question and arms nothing.
//!
//! Responsibilities:
//! - Networking via `core::net::fetch_page`.
//! - DOM walking via `core::html` helpers.
//!
//! Non-Responsibilities:
//! - **No export rules.** The runner decides whether and where to write.

use scraper::Html;
use tracing::{debug, info, trace};

use crate::config::options::{ScrapeOptions, Whitespace};
use crate::core::{html, net};
use crate::data::FaqRecord;
use crate::error::Result;

/// Pending-question state while walking `dt`/`dd` nodes.
#[derive(Debug, Default, PartialEq, Eq)]
enum Pairing {
    #[default]
    AwaitingTerm,
    AwaitingDefinition(String),
}

impl Pairing {
    fn on_term(&mut self, text: String) {
        if let Pairing::AwaitingDefinition(dropped) = self {
            trace!(question = %dropped, "unanswered question dropped");
        }
        *self = if text.is_empty() {
            Pairing::AwaitingTerm
        } else {
            Pairing::AwaitingDefinition(text)
        };
    }

    fn on_definition(&mut self, text: String) -> Option<FaqRecord> {
        match std::mem::take(self) {
            Pairing::AwaitingDefinition(question) => Some(FaqRecord { question, answer: text }),
            Pairing::AwaitingTerm => {
                trace!(answer = %text, "answer without question skipped");
                None
            }
        }
    }
}

/// Fetch the configured page and extract its FAQ records.
pub fn fetch(opts: &ScrapeOptions) -> Result<Vec<FaqRecord>> {
    let page = net::fetch_page(opts)?;
    info!(url = %page.url, status = page.status, encoding = page.encoding.name(), "page fetched");
    Ok(parse_doc(&page.text, opts.whitespace))
}

/// Extract question/answer records from `doc`. Never fails; odd markup just yields fewer rows.
pub fn parse_doc(doc: &str, mode: Whitespace) -> Vec<FaqRecord> {
    let dom = Html::parse_document(doc);
    let mut state = Pairing::default();
    let mut out = Vec::new();

    for el in html::elements(&dom) {
        match el.value().name() {
            "dt" => state.on_term(html::element_text(el, mode)),
            "dd" => out.extend(state.on_definition(html::element_text(el, mode))),
            _ => {}
        }
    }

    debug!(records = out.len(), "faq pairs extracted");
    out
}

// src/core/encoding.rs
// Decode response bodies whose declared charset can't be trusted.
// Order: BOM, then a byte-level guess (chardetng, TLD-hinted). The header charset is
// only compared against the guess for diagnostics.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::debug;

/// Decode `bytes` into text, returning the encoding actually used.
///
/// * `declared` – charset label from the `Content-Type` header, if any
/// * `tld` – top-level domain of the page host (e.g. `"jp"`), a hint for legacy CJK pages
pub fn decode_body(
    bytes: &[u8],
    declared: Option<&str>,
    tld: Option<&str>,
) -> (String, &'static Encoding) {
    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        debug!(encoding = enc.name(), "byte-order mark found");
        let (text, _) = enc.decode_without_bom_handling(&bytes[bom_len..]);
        return (text.into_owned(), enc);
    }

    let guessed = guess(bytes, tld);

    match declared.map(|label| (label, Encoding::for_label(label.trim().as_bytes()))) {
        Some((_, Some(enc))) if enc == guessed => {}
        Some((label, Some(enc))) => debug!(
            declared = label,
            declared_encoding = enc.name(),
            guessed = guessed.name(),
            "declared charset disagrees with content, using guess"
        ),
        Some((label, None)) => debug!(declared = label, "unknown charset label ignored"),
        None => {}
    }

    let (text, had_errors) = guessed.decode_without_bom_handling(bytes);
    if had_errors {
        debug!(encoding = guessed.name(), "malformed sequences replaced");
    }
    (text.into_owned(), guessed)
}

fn guess(bytes: &[u8], tld: Option<&str>) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    // chardetng wants a bare lowercase label
    let tld = tld
        .map(str::to_ascii_lowercase)
        .filter(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_lowercase()));
    detector.guess(tld.as_deref().map(str::as_bytes), true)
}

/// Pull the `charset=` parameter out of a `Content-Type` value.
pub fn declared_charset(content_type: &str) -> Option<&str> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|value| !value.is_empty())
}

/// Last label of a host name (`researchmap.jp` → `jp`).
pub fn host_tld(host: &str) -> Option<&str> {
    host.rsplit('.').next().filter(|t| !t.is_empty())
}

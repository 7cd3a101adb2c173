use criterion::{Criterion, black_box, criterion_group, criterion_main};

use faq_scrape::config::options::Whitespace;
use faq_scrape::specs::faq::parse_doc;

fn synthetic_page(pairs: usize) -> String {
    let mut doc = String::from("<html><body><nav><a href=\"/\">top</a></nav><dl>");
    for i in 0..pairs {
        doc.push_str(&format!(
            "<dt> Question {i}?</dt><dd><p>Answer {i} with <a href=\"#\">a link</a> and &amp; entity.</p></dd>"
        ));
        if i % 10 == 0 {
            doc.push_str("<dd>orphan note</dd>");
        }
    }
    doc.push_str("</dl></body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page(500);

    c.bench_function("faq_trim", |b| {
        b.iter(|| {
            let rows = parse_doc(black_box(&doc), Whitespace::Trim);
            black_box(rows.len())
        })
    });

    c.bench_function("faq_collapse", |b| {
        b.iter(|| {
            let rows = parse_doc(black_box(&doc), Whitespace::Collapse);
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);

// src/data.rs

/// One question/answer pair, in the order it was found on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqRecord {
    pub question: String,
    pub answer: String,
}

impl FaqRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { question: question.into(), answer: answer.into() }
    }
}

/// Tabular shape handed to the exporters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Header row from `labels`, then one row per record.
    pub fn from_records(labels: [&str; 2], records: &[FaqRecord]) -> Self {
        let headers = labels.iter().map(|s| s.to_string()).collect();
        let rows = records
            .iter()
            .map(|r| vec![r.question.clone(), r.answer.clone()])
            .collect();
        Self { headers: Some(headers), rows }
    }
}

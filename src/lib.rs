pub mod error;
pub mod hierarchy;
pub mod normalizer;
pub mod parser;
pub mod record;
pub mod renderer;
pub mod source;

use error::ImportError;
use record::Record;

/// The processed record collection, ready to render, plus the diagnostics
/// collected on the way in.
#[derive(Debug)]
pub struct Import {
    pub records: Vec<Record>,
    pub skipped: Vec<ImportError>,
}

impl Import {
    /// Report lines in collection order; restartable, borrows the records.
    pub fn report_lines(&self) -> impl Iterator<Item = String> + '_ {
        renderer::render_lines(&self.records)
    }

    pub fn report(&self) -> String {
        renderer::render(&self.records)
    }
}

/// Runs parse → normalize → aggregate, in that order, over one collection.
pub fn import<'a, I>(lines: I) -> Import
where
    I: IntoIterator<Item = &'a str>,
{
    let parser::Parsed { mut records, skipped } = parser::parse_records(lines);
    normalizer::normalize(&mut records);
    hierarchy::assign_child_counts(&mut records);
    Import { records, skipped }
}

/// Whole pipeline over a complete input text. Skipped-line diagnostics are
/// discarded here; use [`import`] when they matter.
pub fn report(input: &str) -> String {
    import(input.lines()).report()
}

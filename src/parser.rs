use winnow::ascii::till_line_ending;
use winnow::combinator::{opt, preceded};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::error::ImportError;
use crate::record::Record;

#[derive(Debug, Default)]
pub struct Parsed {
    pub records: Vec<Record>,
    pub skipped: Vec<ImportError>,
}

/// Parses raw input lines in order. A line with fewer than 7 fields yields
/// a diagnostic instead of a record and never aborts the import.
pub fn parse_records<'a, I>(lines: I) -> Parsed
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parsed = Parsed::default();
    for line in lines {
        match parse_record(line) {
            Ok(record) => parsed.records.push(record),
            Err(diagnostic) => parsed.skipped.push(diagnostic),
        }
    }
    parsed
}

fn parse_record(line: &str) -> Result<Record, ImportError> {
    let mut input = line;
    record_line(&mut input).map_err(|_| ImportError::MalformedRecord {
        line: line.to_string(),
        found: line.split(';').count(),
    })
}

fn record_line(input: &mut &str) -> winnow::Result<Record> {
    let kind = field.parse_next(input)?;
    let name = preceded(";", field).parse_next(input)?;
    let schema = preceded(";", field).parse_next(input)?;
    let parent_name = preceded(";", field).parse_next(input)?;
    let parent_kind = preceded(";", field).parse_next(input)?;
    let data_type = preceded(";", field).parse_next(input)?;
    let is_nullable = preceded(";", field).parse_next(input)?;
    // fields beyond the seventh are ignored
    opt(preceded(";", till_line_ending)).parse_next(input)?;

    Ok(Record {
        kind: kind.to_string(),
        name: name.to_string(),
        schema: schema.to_string(),
        parent_name: parent_name.to_string(),
        parent_kind: parent_kind.to_string(),
        data_type: data_type.to_string(),
        is_nullable: is_nullable.to_string(),
        child_count: 0,
    })
}

fn field<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    take_while(0.., |c: char| c != ';').parse_next(input)
}

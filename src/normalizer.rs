use crate::record::Record;

/// Cleans every record in place: the five identifying fields are trimmed,
/// stripped of interior spaces and line breaks, and `kind` is upper-cased.
/// `data_type` and `is_nullable` are never touched. Safe to run twice.
pub fn normalize(records: &mut [Record]) {
    for record in records.iter_mut() {
        if record.identity().trim().is_empty() {
            continue;
        }
        record.kind = clean(&record.kind).to_uppercase();
        record.name = clean(&record.name);
        record.schema = clean(&record.schema);
        record.parent_name = clean(&record.parent_name);
        record.parent_kind = clean(&record.parent_kind);
    }
}

// Interior tabs survive; trim handles the edges.
fn clean(field: &str) -> String {
    field
        .trim()
        .chars()
        .filter(|&c| c != ' ' && c != '\r' && c != '\n')
        .collect()
}

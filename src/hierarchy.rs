use std::collections::HashMap;

use crate::record::Record;

/// Writes `child_count` on every record: how many records in the whole
/// collection declare it as their parent. Records nothing points at keep
/// the default 0. Nothing is removed or reordered.
pub fn assign_child_counts(records: &mut [Record]) {
    let mut counts: HashMap<(String, String), usize> = HashMap::new();
    for record in records.iter() {
        let parent = (record.parent_kind.clone(), record.parent_name.clone());
        *counts.entry(parent).or_insert(0) += 1;
    }

    for record in records.iter_mut() {
        if let Some(&count) = counts.get(&(record.kind.clone(), record.name.clone())) {
            record.child_count = count;
        }
    }
}

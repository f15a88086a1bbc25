use crate::record::{COLUMN, DATABASE, Record, TABLE};

/// Renders the report lazily: for every DATABASE record (in collection
/// order) a header line, then one line per TABLE child, then one line per
/// COLUMN grandchild, indented with one tab per level. The iterator only
/// borrows the records, so it can be rebuilt any number of times with
/// identical output.
pub fn render_lines<'a>(records: &'a [Record]) -> impl Iterator<Item = String> + 'a {
    records
        .iter()
        .filter(|r| r.kind == DATABASE)
        .flat_map(move |database| {
            let header = std::iter::once(format!(
                "Database '{}' ({} tables)",
                database.name,
                children_of(records, database).count()
            ));
            let tables = children_of(records, database)
                .filter(|r| r.kind == TABLE)
                .flat_map(move |table| {
                    let header = std::iter::once(format!(
                        "\tTable '{}.{}' ({} columns)",
                        table.schema,
                        table.name,
                        children_of(records, table).count()
                    ));
                    let columns = children_of(records, table)
                        .filter(|r| r.kind == COLUMN)
                        .map(|column| {
                            format!(
                                "\t\tColumn '{}' with {} data type {}",
                                column.name,
                                column.data_type,
                                nullability(column)
                            )
                        });
                    header.chain(columns)
                });
            header.chain(tables)
        })
}

pub fn render(records: &[Record]) -> String {
    render_lines(records).collect::<Vec<_>>().join("\n")
}

// Live scan. Counts and iteration both come from here so headers can never
// disagree with the children actually rendered.
fn children_of<'a>(
    records: &'a [Record],
    parent: &'a Record,
) -> impl Iterator<Item = &'a Record> + 'a {
    records.iter().filter(move |r| parent.is_parent_of(r))
}

fn nullability(column: &Record) -> &'static str {
    if column.is_nullable == "1" {
        "accepts nulls"
    } else {
        "with no nulls"
    }
}

pub const DATABASE: &str = "DATABASE";
pub const TABLE: &str = "TABLE";
pub const COLUMN: &str = "COLUMN";

/// One imported database object: a database, a table, a column, or any
/// other kind the input declares. Parsed from a single input line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub kind: String,
    pub name: String,
    pub schema: String,
    pub parent_name: String,
    pub parent_kind: String,
    pub data_type: String,
    pub is_nullable: String,
    pub child_count: usize,
}

impl Record {
    /// Concatenation of the identifying fields. Normalization skips a
    /// record whose identity is blank.
    pub fn identity(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.kind, self.name, self.schema, self.parent_name, self.parent_kind
        )
    }

    pub fn is_parent_of(&self, child: &Record) -> bool {
        child.parent_kind == self.kind && child.parent_name == self.name
    }
}

//! Schema model element types
//!
//! A `Table` is built fresh from one parsed `CREATE TABLE` statement, mutated
//! in place while column types and defaults are translated, and discarded
//! after emission. It carries no identity beyond a single translation call.

/// One table definition, dialect-neutral.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Bare table name. Schema qualifiers are dropped during parsing.
    pub name: String,
    /// Columns in declaration order; order is significant for output.
    pub columns: Vec<Column>,
    /// Primary key column names, in declaration order, de-duplicated
    /// case-insensitively.
    pub primary_key: Vec<String>,
    /// Table-level unique constraints.
    pub unique_constraints: Vec<UniqueConstraint>,
    /// Clauses the parser could not classify (FOREIGN KEY, CHECK, vendor
    /// constraints). Preserved verbatim; the translator only re-quotes the
    /// identifiers for the target dialect.
    pub extra_clauses: Vec<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up a column by name, case-insensitively.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Record a primary key column. Duplicate names (inline marker plus a
    /// table-level PRIMARY KEY clause naming the same column) are merged, not
    /// an error. The column itself is flagged and forced NOT NULL.
    pub fn add_primary_key_column(&mut self, name: &str) {
        if !self
            .primary_key
            .iter()
            .any(|k| k.eq_ignore_ascii_case(name))
        {
            self.primary_key.push(name.to_string());
        }
        if let Some(col) = self.column_mut(name) {
            col.is_primary_key = true;
            col.nullable = false;
        }
    }

    /// The primary key column, if the table has a single-column primary key
    /// on an auto-increment column. This is the case that gets inline
    /// AUTO_INCREMENT / SERIAL / IDENTITY treatment during emission.
    pub fn single_auto_increment_pk(&self) -> Option<&Column> {
        if self.primary_key.len() != 1 {
            return None;
        }
        self.column(&self.primary_key[0])
            .filter(|c| c.is_auto_increment)
    }
}

/// A table-level unique constraint.
#[derive(Debug, Clone)]
pub struct UniqueConstraint {
    pub name: Option<String>,
    /// Column names in declaration order.
    pub columns: Vec<String>,
}

/// One column definition.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    /// Verbatim source type token, e.g. `varchar(255)` or `enum('a','b')`.
    /// Overwritten with the translated token during translation.
    pub raw_type: String,
    /// Lower-cased head of the type token, e.g. `varchar`, `tinyint`,
    /// `timestamp with time zone`.
    pub base_type: String,
    /// Single parenthesized size parameter, e.g. the 255 of `varchar(255)`.
    pub length: Option<u32>,
    /// Precision/scale for decimal-family types, e.g. `decimal(10,2)`.
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    /// Literal members of an `enum(...)`/`set(...)` list, unquoted.
    pub literals: Vec<String>,
    /// Default true; forced false by NOT NULL or primary key membership.
    pub nullable: bool,
    /// Raw default literal as written, quotes preserved.
    pub default_value: Option<String>,
    pub is_primary_key: bool,
    /// True for AUTO_INCREMENT, AUTOINCREMENT, IDENTITY(1,1) or a
    /// SERIAL/BIGSERIAL source type, regardless of source spelling.
    pub is_auto_increment: bool,
    /// Trailing COMMENT '...' text. Recorded but never re-emitted.
    pub comment: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            raw_type: String::new(),
            base_type: String::new(),
            length: None,
            precision: None,
            scale: None,
            literals: Vec::new(),
            nullable: true,
            default_value: None,
            is_primary_key: false,
            is_auto_increment: false,
            comment: None,
        }
    }
}

/// Capability boundary to the collaborators that talk to a live database.
///
/// The translator core never calls this; it exists so that callers which list
/// existing tables or fetch live column metadata can hand the result to the
/// same `Column` shape this crate consumes.
pub trait ColumnMetadataSource {
    fn list_columns(&self, table: &str) -> Vec<Column>;
}

//! DDL rendering
//!
//! Renders a [`Table`] whose column types have already been translated into
//! target-dialect DDL text. Output lines are CRLF-separated; the tab
//! indentation is cosmetic.

mod defaults;

pub use defaults::format_default;

use crate::dialect::Dialect;
use crate::model::Table;

/// Engine/charset appended when targeting MySQL/MariaDB. Never inferred from
/// the source statement.
const MYSQL_TABLE_SUFFIX: &str = " ENGINE=InnoDB DEFAULT CHARSET=utf8mb4";

/// Render a table as target-dialect DDL. Never fails; a table with no
/// columns renders an empty body (callers are expected not to build one).
pub fn emit(table: &Table, dialect: Dialect) -> String {
    let mut lines: Vec<String> = Vec::new();
    let auto_pk = table
        .single_auto_increment_pk()
        .map(|c| c.name.clone());

    for column in &table.columns {
        let mut parts: Vec<String> = vec![dialect.quote(&column.name)];
        let is_auto_pk = auto_pk.as_deref() == Some(column.name.as_str());

        if is_auto_pk {
            match dialect {
                Dialect::MySql | Dialect::MariaDb => {
                    parts.push(column.raw_type.clone());
                    parts.push("AUTO_INCREMENT".to_string());
                    parts.push("PRIMARY KEY".to_string());
                }
                Dialect::Postgres => {
                    parts.push(force_serial(&column.raw_type));
                    parts.push("PRIMARY KEY".to_string());
                }
                Dialect::Sqlite => {
                    parts.push("INTEGER".to_string());
                    parts.push("PRIMARY KEY AUTOINCREMENT".to_string());
                }
                Dialect::SqlServer => {
                    parts.push(column.raw_type.clone());
                    parts.push("IDENTITY(1,1)".to_string());
                    parts.push("PRIMARY KEY".to_string());
                }
            }
        } else {
            parts.push(column.raw_type.clone());
        }

        parts.push(if column.nullable { "NULL" } else { "NOT NULL" }.to_string());
        if let Some(default) = &column.default_value {
            parts.push(format!("DEFAULT {default}"));
        }
        lines.push(parts.join(" "));
    }

    // Composite or non-auto-increment keys become a trailing clause.
    if auto_pk.is_none() && !table.primary_key.is_empty() {
        lines.push(format!(
            "PRIMARY KEY ({})",
            quote_list(&table.primary_key, dialect)
        ));
    }

    for constraint in &table.unique_constraints {
        let columns = quote_list(&constraint.columns, dialect);
        match dialect {
            Dialect::MySql | Dialect::MariaDb => match &constraint.name {
                Some(name) => lines.push(format!(
                    "UNIQUE KEY {} ({})",
                    dialect.quote(name),
                    columns
                )),
                None => lines.push(format!("UNIQUE KEY ({columns})")),
            },
            Dialect::Postgres => match &constraint.name {
                Some(name) => lines.push(format!(
                    "CONSTRAINT {} UNIQUE ({})",
                    dialect.quote(name),
                    columns
                )),
                None => lines.push(format!("UNIQUE ({columns})")),
            },
            Dialect::Sqlite => lines.push(format!("UNIQUE ({columns})")),
            // UNIQUE constraints are not emitted for SQL Server.
            Dialect::SqlServer => {}
        }
    }

    lines.extend(table.extra_clauses.iter().cloned());

    let suffix = if dialect.is_mysql_family() {
        MYSQL_TABLE_SUFFIX
    } else {
        ""
    };

    let body = lines
        .iter()
        .map(|l| format!("\t{l}"))
        .collect::<Vec<_>>()
        .join(",\r\n");
    format!(
        "CREATE TABLE {} (\r\n{}\r\n){};",
        dialect.quote(&table.name),
        body,
        suffix
    )
}

/// Force a serial type for a PostgreSQL auto-increment key, keeping the
/// integer width.
fn force_serial(type_token: &str) -> String {
    let upper = type_token.to_uppercase();
    if upper == "BIGSERIAL" || upper.starts_with("BIGINT") {
        "BIGSERIAL".to_string()
    } else {
        "SERIAL".to_string()
    }
}

fn quote_list(names: &[String], dialect: Dialect) -> String {
    names
        .iter()
        .map(|n| dialect.quote(n))
        .collect::<Vec<_>>()
        .join(", ")
}

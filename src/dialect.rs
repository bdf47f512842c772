//! SQL dialect tags and their identifier-quoting rules.
//!
//! `Dialect` is the closed set of engines the translator understands. MySQL
//! and MariaDB are distinct tags sharing a single rule set; everywhere the
//! rules matter the two are treated identically.

use std::fmt;
use std::str::FromStr;

use sqlparser::dialect::{MsSqlDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect};
use sqlparser::tokenizer::{TokenWithSpan, Tokenizer, TokenizerError};

use crate::error::TranslateError;

/// A supported SQL engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    MySql,
    MariaDb,
    Postgres,
    Sqlite,
    SqlServer,
}

impl Dialect {
    /// All supported dialects, in a stable order.
    pub const ALL: [Dialect; 5] = [
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Postgres,
        Dialect::Sqlite,
        Dialect::SqlServer,
    ];

    /// Canonical lowercase name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::MariaDb => "mariadb",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::SqlServer => "sqlserver",
        }
    }

    /// MySQL and MariaDB share one rule set.
    pub fn is_mysql_family(&self) -> bool {
        matches!(self, Dialect::MySql | Dialect::MariaDb)
    }

    /// Opening identifier quote character.
    pub fn quote_open(&self) -> char {
        match self {
            Dialect::MySql | Dialect::MariaDb => '`',
            Dialect::Postgres | Dialect::Sqlite => '"',
            Dialect::SqlServer => '[',
        }
    }

    /// Closing identifier quote character.
    pub fn quote_close(&self) -> char {
        match self {
            Dialect::MySql | Dialect::MariaDb => '`',
            Dialect::Postgres | Dialect::Sqlite => '"',
            Dialect::SqlServer => ']',
        }
    }

    /// Wrap a bare identifier in this dialect's quote characters.
    pub fn quote(&self, ident: &str) -> String {
        format!("{}{}{}", self.quote_open(), ident, self.quote_close())
    }

    /// Strip this dialect's quote characters from an identifier.
    pub fn unquote(&self, ident: &str) -> String {
        let open = self.quote_open();
        let close = self.quote_close();
        ident
            .trim()
            .trim_matches(|c| c == open || c == close)
            .to_string()
    }

    /// Tokenize `sql` with the sqlparser dialect matching this tag.
    ///
    /// Quoted identifiers come back as single `Word` tokens with their quote
    /// style attached, and string literals as single tokens, so downstream
    /// clause splitting never has to re-discover quoting rules.
    pub fn tokenize(&self, sql: &str) -> Result<Vec<TokenWithSpan>, TokenizerError> {
        match self {
            Dialect::MySql | Dialect::MariaDb => {
                Tokenizer::new(&MySqlDialect {}, sql).tokenize_with_location()
            }
            Dialect::Postgres => {
                Tokenizer::new(&PostgreSqlDialect {}, sql).tokenize_with_location()
            }
            Dialect::Sqlite => Tokenizer::new(&SQLiteDialect {}, sql).tokenize_with_location(),
            Dialect::SqlServer => Tokenizer::new(&MsSqlDialect {}, sql).tokenize_with_location(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "mariadb" => Ok(Dialect::MariaDb),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "sqlserver" | "mssql" | "tsql" => Ok(Dialect::SqlServer),
            other => Err(TranslateError::UnsupportedDialect {
                name: other.to_string(),
            }),
        }
    }
}

/// Rewrite identifier quoting in a SQL fragment from one dialect to another.
///
/// Used for clauses the parser passes through verbatim (FOREIGN KEY, CHECK,
/// vendor-specific constraints) and for DROP TABLE preamble names: the text is
/// untouched except that `from`-style quote characters become `to`-style ones.
/// Quote characters inside single-quoted string literals are left alone.
pub fn requote_identifiers(text: &str, from: Dialect, to: Dialect) -> String {
    if from.quote_open() == to.quote_open() && from.quote_close() == to.quote_close() {
        return text.to_string();
    }

    let symmetric = from.quote_open() == from.quote_close();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut in_ident = false;
    for c in text.chars() {
        if c == '\'' {
            in_string = !in_string;
            out.push(c);
        } else if !in_string && symmetric && c == from.quote_open() {
            // Backtick and double-quote open and close with the same
            // character; alternate so bracket targets pair up correctly.
            out.push(if in_ident {
                to.quote_close()
            } else {
                to.quote_open()
            });
            in_ident = !in_ident;
        } else if !in_string && c == from.quote_open() {
            out.push(to.quote_open());
        } else if !in_string && c == from.quote_close() {
            out.push(to.quote_close());
        } else {
            out.push(c);
        }
    }
    out
}

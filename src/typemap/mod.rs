//! Type catalog: canonical type keys and per-dialect spellings.
//!
//! Every source type resolves to a canonical key (aliases collapse here:
//! `integer` and `int4` are `int`, `nvarchar` is `varchar`, `datetimeoffset`
//! is `timestamp with time zone`, ...). Three directional tables spell each
//! canonical key for MySQL, PostgreSQL and SQLite; the SQL Server table is the
//! MySQL table augmented with `NVARCHAR`-family overrides. An ordered list of
//! special-case rules runs before the flat lookup.
//!
//! Translation is total. An unrecognized base type is not an error: the
//! source token passes through upper-cased.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::dialect::Dialect;
use crate::model::Column;

/// Result of translating one column type.
#[derive(Debug, Clone)]
pub struct TypeTranslation {
    /// Target-dialect type token, parameters included.
    pub type_token: String,
    /// Whether the target column auto-increments (set for SERIAL/BIGSERIAL
    /// sources on top of any explicit increment keyword).
    pub auto_increment: bool,
    /// False when the catalog had no entry and the source token passed
    /// through verbatim.
    pub recognized: bool,
}

type SpellingTable = HashMap<&'static str, &'static str>;

static TO_MYSQL: LazyLock<SpellingTable> = LazyLock::new(|| {
    HashMap::from([
        ("tinyint", "TINYINT"),
        ("tinyint(1)", "TINYINT(1)"),
        ("smallint", "SMALLINT"),
        ("mediumint", "MEDIUMINT"),
        ("int", "INT"),
        ("bigint", "BIGINT"),
        ("float", "FLOAT"),
        ("double", "DOUBLE"),
        ("decimal", "DECIMAL"),
        ("char", "CHAR"),
        ("varchar", "VARCHAR"),
        ("tinytext", "TINYTEXT"),
        ("text", "TEXT"),
        ("mediumtext", "MEDIUMTEXT"),
        ("longtext", "LONGTEXT"),
        ("date", "DATE"),
        ("time", "TIME"),
        ("datetime", "DATETIME"),
        ("timestamp", "TIMESTAMP"),
        ("timestamp with time zone", "TIMESTAMP"),
        ("year", "YEAR"),
        ("json", "JSON"),
        ("jsonb", "JSON"),
        ("uuid", "CHAR(36)"),
        ("blob", "BLOB"),
        ("serial", "INT"),
        ("bigserial", "BIGINT"),
        ("enum", "ENUM"),
        ("set", "SET"),
    ])
});

static TO_POSTGRES: LazyLock<SpellingTable> = LazyLock::new(|| {
    HashMap::from([
        ("tinyint", "SMALLINT"),
        ("tinyint(1)", "BOOLEAN"),
        ("smallint", "SMALLINT"),
        ("mediumint", "INTEGER"),
        ("int", "INTEGER"),
        ("bigint", "BIGINT"),
        ("float", "REAL"),
        ("double", "DOUBLE PRECISION"),
        ("decimal", "NUMERIC"),
        ("char", "CHAR"),
        ("varchar", "VARCHAR"),
        ("tinytext", "TEXT"),
        ("text", "TEXT"),
        ("mediumtext", "TEXT"),
        ("longtext", "TEXT"),
        ("date", "DATE"),
        ("time", "TIME"),
        ("datetime", "TIMESTAMP"),
        ("timestamp", "TIMESTAMP"),
        ("timestamp with time zone", "TIMESTAMP WITH TIME ZONE"),
        ("year", "SMALLINT"),
        ("json", "JSON"),
        ("jsonb", "JSONB"),
        ("uuid", "UUID"),
        ("blob", "BYTEA"),
        ("serial", "SERIAL"),
        ("bigserial", "BIGSERIAL"),
    ])
});

static TO_SQLITE: LazyLock<SpellingTable> = LazyLock::new(|| {
    HashMap::from([
        ("tinyint", "INTEGER"),
        ("tinyint(1)", "INTEGER"),
        ("smallint", "INTEGER"),
        ("mediumint", "INTEGER"),
        ("int", "INTEGER"),
        ("bigint", "INTEGER"),
        ("float", "REAL"),
        ("double", "REAL"),
        ("decimal", "REAL"),
        ("char", "CHAR"),
        ("varchar", "VARCHAR"),
        ("tinytext", "TEXT"),
        ("text", "TEXT"),
        ("mediumtext", "TEXT"),
        ("longtext", "TEXT"),
        ("date", "DATE"),
        ("time", "TIME"),
        ("datetime", "DATETIME"),
        ("timestamp", "TIMESTAMP"),
        ("timestamp with time zone", "TIMESTAMP"),
        ("year", "INTEGER"),
        ("json", "TEXT"),
        ("jsonb", "TEXT"),
        ("uuid", "TEXT"),
        ("blob", "BLOB"),
        ("serial", "INTEGER"),
        ("bigserial", "INTEGER"),
    ])
});

/// SQL Server spellings: the MySQL table as a base, augmented. The overrides
/// are the national-character string family plus the types whose T-SQL
/// spelling differs.
static TO_SQLSERVER: LazyLock<SpellingTable> = LazyLock::new(|| {
    let mut table = TO_MYSQL.clone();
    for (key, spelling) in [
        ("mediumint", "INT"),
        ("float", "REAL"),
        ("double", "FLOAT"),
        ("char", "NCHAR"),
        ("varchar", "NVARCHAR"),
        ("tinytext", "NVARCHAR(MAX)"),
        ("text", "NVARCHAR(MAX)"),
        ("mediumtext", "NVARCHAR(MAX)"),
        ("longtext", "NVARCHAR(MAX)"),
        ("datetime", "DATETIME2"),
        ("timestamp", "DATETIME2"),
        ("timestamp with time zone", "DATETIMEOFFSET"),
        ("year", "SMALLINT"),
        ("json", "NVARCHAR(MAX)"),
        ("jsonb", "NVARCHAR(MAX)"),
        ("uuid", "UNIQUEIDENTIFIER"),
        ("blob", "VARBINARY(MAX)"),
    ] {
        table.insert(key, spelling);
    }
    table
});

fn spelling_table(dialect: Dialect) -> &'static SpellingTable {
    match dialect {
        Dialect::MySql | Dialect::MariaDb => &TO_MYSQL,
        Dialect::Postgres => &TO_POSTGRES,
        Dialect::Sqlite => &TO_SQLITE,
        Dialect::SqlServer => &TO_SQLSERVER,
    }
}

/// Resolve a source base type to its canonical key. `None` means the catalog
/// does not know the type and the caller should fall back to pass-through.
pub fn canonical_key(source: Dialect, base_type: &str, length: Option<u32>) -> Option<&'static str> {
    let key = match base_type {
        "tinyint" if length == Some(1) => "tinyint(1)",
        "tinyint" => "tinyint",
        "bool" | "boolean" => "tinyint(1)",
        // SQL Server BIT is its boolean; MySQL BIT is a bit field and falls
        // through to pass-through.
        "bit" if source == Dialect::SqlServer => "tinyint(1)",
        "smallint" | "int2" => "smallint",
        "mediumint" => "mediumint",
        "int" | "integer" | "int4" => "int",
        "bigint" | "int8" => "bigint",
        "float" | "float4" | "real" => "float",
        "double" | "double precision" | "float8" => "double",
        "decimal" | "numeric" | "dec" | "fixed" => "decimal",
        "char" | "nchar" | "character" | "bpchar" => "char",
        "varchar" | "nvarchar" | "character varying" | "varchar2" => "varchar",
        "tinytext" => "tinytext",
        "text" | "ntext" | "clob" => "text",
        "mediumtext" => "mediumtext",
        "longtext" => "longtext",
        "date" => "date",
        "time" | "timetz" | "time with time zone" | "time without time zone" => "time",
        "datetime" | "datetime2" | "smalldatetime" => "datetime",
        "timestamp" | "timestamp without time zone" => "timestamp",
        "timestamptz" | "timestamp with time zone" | "datetimeoffset" => {
            "timestamp with time zone"
        }
        "year" => "year",
        "json" => "json",
        "jsonb" => "jsonb",
        "uuid" | "uniqueidentifier" | "guid" => "uuid",
        "blob" | "bytea" | "binary" | "varbinary" | "image" | "tinyblob" | "mediumblob"
        | "longblob" => "blob",
        "enum" => "enum",
        "set" => "set",
        "serial" | "serial4" | "smallserial" | "serial2" => "serial",
        "bigserial" | "serial8" => "bigserial",
        _ => return None,
    };
    Some(key)
}

/// Translate one column's type between dialects.
///
/// The ordered special-case rules run first; the flat spelling table decides
/// everything they do not; an unknown type falls back to the source token
/// upper-cased. This function never fails.
pub fn translate_column(column: &Column, from: Dialect, to: Dialect) -> TypeTranslation {
    let Some(canonical) = canonical_key(from, &column.base_type, column.length) else {
        return TypeTranslation {
            type_token: column.raw_type.to_uppercase(),
            auto_increment: column.is_auto_increment,
            recognized: false,
        };
    };

    // Rule: enum/set keep their literal list only on a MySQL-family target;
    // everywhere else they become a sized text type. The +2 reserves room for
    // quote characters in round-tripped data.
    if canonical == "enum" || canonical == "set" {
        if to.is_mysql_family() {
            return TypeTranslation {
                type_token: column.raw_type.clone(),
                auto_increment: column.is_auto_increment,
                recognized: true,
            };
        }
        let width = column
            .literals
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u32
            + 2;
        let token = match to {
            Dialect::Postgres => format!("CHARACTER VARYING({width})"),
            _ => format!("NVARCHAR({width})"),
        };
        return TypeTranslation {
            type_token: token,
            auto_increment: column.is_auto_increment,
            recognized: true,
        };
    }

    // Rule: SERIAL/BIGSERIAL carry the increment with the type.
    let serial_source = canonical == "serial" || canonical == "bigserial";
    let auto_increment = column.is_auto_increment || serial_source;

    // Rule: an auto-increment integer targeting PostgreSQL becomes
    // SERIAL/BIGSERIAL; the explicit increment keyword is dropped at emission.
    if to == Dialect::Postgres
        && auto_increment
        && matches!(
            canonical,
            "tinyint" | "smallint" | "mediumint" | "int" | "bigint" | "serial" | "bigserial"
        )
    {
        let token = if canonical == "bigint" || canonical == "bigserial" {
            "BIGSERIAL"
        } else {
            "SERIAL"
        };
        return TypeTranslation {
            type_token: token.to_string(),
            auto_increment: true,
            recognized: true,
        };
    }

    // Rule: SQLite has no fixed-precision numeric type; precision is lost.
    if canonical == "decimal" && to == Dialect::Sqlite {
        return TypeTranslation {
            type_token: "REAL".to_string(),
            auto_increment,
            recognized: true,
        };
    }

    let token = spelling_table(to)
        .get(canonical)
        .copied()
        .unwrap_or(canonical);
    TypeTranslation {
        type_token: render_with_params(token, canonical, column),
        auto_increment,
        recognized: true,
    }
}

/// Re-attach size parameters where the target type keeps them. Tokens that
/// already carry parameters (NVARCHAR(MAX), TINYINT(1), CHAR(36)) are final.
fn render_with_params(token: &str, canonical: &str, column: &Column) -> String {
    if token.contains('(') {
        return token.to_string();
    }
    match canonical {
        "char" | "varchar" => match column.length {
            Some(n) => format!("{token}({n})"),
            None => token.to_string(),
        },
        "decimal" => match (column.precision, column.scale) {
            (Some(p), Some(s)) => format!("{token}({p},{s})"),
            (Some(p), None) => format!("{token}({p})"),
            _ => token.to_string(),
        },
        _ => token.to_string(),
    }
}

/// Parse a standalone type token (`varchar(255)`, `enum('a','b')`,
/// `timestamp with time zone`) into the pieces `translate_column` needs.
/// Backs the single-type conversion entry point.
pub fn parse_type_token(token: &str) -> Column {
    let mut column = Column::new("");
    column.raw_type = token.trim().to_string();

    let trimmed = column.raw_type.clone();
    let (head, params, tail) = match (trimmed.find('('), trimmed.rfind(')')) {
        (Some(open), Some(close)) if close > open => (
            trimmed[..open].trim().to_string(),
            Some(trimmed[open + 1..close].to_string()),
            trimmed[close + 1..].trim().to_string(),
        ),
        _ => (trimmed.clone(), None, String::new()),
    };

    let mut base = head.to_lowercase();
    base = base.split_whitespace().collect::<Vec<_>>().join(" ");
    let tail = tail.to_lowercase();
    if tail.contains("with time zone") {
        base.push_str(" with time zone");
    } else if tail.contains("without time zone") {
        base.push_str(" without time zone");
    }
    column.base_type = base;

    if let Some(params) = params {
        if params.contains('\'') {
            column.literals = split_quoted_literals(&params);
        } else {
            let nums: Vec<u32> = params
                .split(',')
                .filter_map(|p| p.trim().parse::<u32>().ok())
                .collect();
            let decimal_family = matches!(
                column.base_type.as_str(),
                "decimal" | "numeric" | "dec" | "fixed"
            );
            if nums.len() >= 2 {
                column.precision = Some(nums[0]);
                column.scale = Some(nums[1]);
            } else if nums.len() == 1 {
                if decimal_family {
                    column.precision = Some(nums[0]);
                } else {
                    column.length = Some(nums[0]);
                }
            }
        }
    }
    column
}

/// Split `'a','b,c','d''e'` into its member literals, honoring doubled-quote
/// escapes and embedded commas.
fn split_quoted_literals(params: &str) -> Vec<String> {
    let mut literals = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut chars = params.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    current.push('\'');
                } else {
                    in_string = false;
                    literals.push(std::mem::take(&mut current));
                }
            } else {
                current.push(c);
            }
        } else if c == '\'' {
            in_string = true;
        }
        // Everything between literals (commas, spaces) is separator noise.
    }
    literals
}

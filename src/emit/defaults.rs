//! Default-value normalization against the translated column type.
//!
//! A default written for one engine rarely survives verbatim: booleans flip
//! between TRUE/FALSE and 1/0, numeric literals shed their quoting and
//! wrapping parentheses, and text literals get the target's quoting. The
//! rules run in a fixed order; the first that applies wins.

use crate::dialect::Dialect;

/// Normalize a raw default literal for the translated column type.
///
/// Returns `None` when the DEFAULT clause should be omitted entirely: a NULL
/// default, a function default on SQLite, or a literal with nothing usable
/// left after normalization.
pub fn format_default(raw: &str, target_type: &str, dialect: Dialect) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("null") {
        return None;
    }

    let stripped = strip_wrapping(raw);

    if is_function_default(&stripped) {
        // SQLite gets no function defaults; everywhere else they pass through
        // as written.
        return match dialect {
            Dialect::Sqlite => None,
            _ => Some(raw.to_string()),
        };
    }

    match classify_type(target_type) {
        TypeClass::Boolean => format_boolean(&stripped, dialect),
        TypeClass::Integer => {
            let digits = keep_digits(&stripped, false);
            if digits.is_empty() {
                None
            } else {
                Some(digits)
            }
        }
        TypeClass::Float => {
            let digits = keep_digits(&stripped, true);
            if digits.is_empty() {
                None
            } else {
                Some(digits)
            }
        }
        TypeClass::Text => {
            let inner = unquote_literal(&stripped);
            Some(format!("'{}'", inner.replace('\'', "\\'")))
        }
    }
}

enum TypeClass {
    Boolean,
    Integer,
    Float,
    Text,
}

fn classify_type(target_type: &str) -> TypeClass {
    let lower = target_type.to_lowercase();
    let head: String = lower
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if lower == "tinyint(1)" || head == "boolean" || head == "bool" || head == "bit" {
        return TypeClass::Boolean;
    }
    match head.as_str() {
        "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "serial"
        | "bigserial" | "year" | "identity" => TypeClass::Integer,
        "float" | "double" | "real" | "decimal" | "numeric" => TypeClass::Float,
        _ => TypeClass::Text,
    }
}

/// Strip wrapping parentheses (SQL Server loves `((0))`) and whitespace.
fn strip_wrapping(raw: &str) -> String {
    let mut s = raw.trim();
    while s.starts_with('(') && s.ends_with(')') && s.len() >= 2 {
        s = s[1..s.len() - 1].trim();
    }
    s.to_string()
}

fn is_function_default(value: &str) -> bool {
    let lower = value.to_lowercase();
    if matches!(
        lower.as_str(),
        "current_timestamp" | "current_date" | "current_time" | "localtimestamp" | "localtime"
    ) {
        return true;
    }
    // name(...) shape: getdate(), now(), nextval('seq').
    if let Some(open) = lower.find('(') {
        return lower.ends_with(')')
            && open > 0
            && lower[..open]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
    }
    false
}

fn format_boolean(value: &str, dialect: Dialect) -> Option<String> {
    let normalized = unquote_literal(value).to_lowercase();
    let truthy = match normalized.as_str() {
        "true" | "1" => true,
        "false" | "0" => false,
        _ => return Some(value.to_string()),
    };
    let spelled = match dialect {
        Dialect::Postgres | Dialect::SqlServer => {
            if truthy {
                "TRUE"
            } else {
                "FALSE"
            }
        }
        Dialect::MySql | Dialect::MariaDb | Dialect::Sqlite => {
            if truthy {
                "1"
            } else {
                "0"
            }
        }
    };
    Some(spelled.to_string())
}

/// Keep digits (and the decimal point for floats); a leading minus survives.
fn keep_digits(value: &str, keep_point: bool) -> String {
    let trimmed = unquote_literal(value);
    let negative = trimmed.trim_start().starts_with('-');
    let digits: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || (keep_point && *c == '.'))
        .collect();
    if digits.is_empty() {
        digits
    } else if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Remove surrounding single quotes (and an N prefix), un-doubling any
/// embedded escaped quotes.
fn unquote_literal(value: &str) -> String {
    let mut s = value.trim();
    if (s.starts_with('N') || s.starts_with('n')) && s[1..].starts_with('\'') {
        s = &s[1..];
    }
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        s[1..s.len() - 1].replace("''", "'")
    } else {
        s.to_string()
    }
}

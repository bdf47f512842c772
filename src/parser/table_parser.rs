//! Token-based CREATE TABLE parsing
//!
//! Turns one `CREATE TABLE` statement into a dialect-neutral [`Table`].
//!
//! ## Supported Syntax
//!
//! ```sql
//! CREATE TABLE [IF NOT EXISTS] [schema.]name (
//!     col TYPE[(params)] [NOT NULL|NULL] [DEFAULT literal] [PRIMARY KEY]
//!         [UNIQUE] [AUTO_INCREMENT|AUTOINCREMENT|IDENTITY(1,1)]
//!         [ON UPDATE expr] [COMMENT 'text'],
//!     PRIMARY KEY (a, b),
//!     [CONSTRAINT name] UNIQUE [KEY|INDEX] [name] (a, b),
//!     <anything else is preserved verbatim>
//! ) [trailing table options are ignored]
//! ```
//!
//! Clause boundaries are found by walking the token stream at parenthesis
//! depth one; a quoted literal is a single token, so commas inside
//! `enum('a,b','c')` or `decimal(10,2)` never split a clause.

use std::sync::LazyLock;

use regex::Regex;
use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Token, TokenWithSpan};

use super::token_parser_base::TokenParser;
use crate::dialect::Dialect;
use crate::error::TranslateError;
use crate::model::{Column, Table, UniqueConstraint};

static CREATE_TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bCREATE\s+TABLE\b").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Parse one CREATE TABLE statement into a [`Table`].
///
/// Fails with [`TranslateError::ParseError`] when the input has no
/// `CREATE TABLE ... ( ... )` shape the dialect's tokenizer recognizes.
pub fn parse_create_table(ddl: &str, dialect: Dialect) -> Result<Table, TranslateError> {
    if !CREATE_TABLE_RE.is_match(ddl) {
        return Err(TranslateError::parse(dialect, ddl));
    }

    // Collapse whitespace runs up front; every later reconstruction works on
    // single-spaced text.
    let normalized = WHITESPACE_RE.replace_all(ddl.trim(), " ");
    let mut parser =
        TokenParser::new(&normalized, dialect).ok_or_else(|| TranslateError::parse(dialect, ddl))?;

    seek_create_table(&mut parser).ok_or_else(|| TranslateError::parse(dialect, ddl))?;
    let name = parse_table_name(&mut parser).ok_or_else(|| TranslateError::parse(dialect, ddl))?;

    parser.skip_whitespace();
    if !parser.check_token(&Token::LParen) {
        return Err(TranslateError::parse(dialect, ddl));
    }
    parser.advance();

    let clauses = split_body_clauses(&mut parser).ok_or_else(|| TranslateError::parse(dialect, ddl))?;

    let mut table = Table::new(name);
    let mut table_pk: Vec<String> = Vec::new();

    for clause in clauses {
        let mut cp = TokenParser::from_tokens(clause, dialect);
        cp.skip_whitespace();
        if cp.is_at_end() {
            continue;
        }
        match classify_clause(&mut cp, dialect)? {
            Clause::PrimaryKey(columns) => table_pk.extend(columns),
            Clause::Unique(constraint) => table.unique_constraints.push(constraint),
            Clause::Passthrough(text) => table.extra_clauses.push(text),
            Clause::ColumnDef { column, inline_unique } => {
                if inline_unique {
                    table.unique_constraints.push(UniqueConstraint {
                        name: None,
                        columns: vec![column.name.clone()],
                    });
                }
                table.columns.push(column);
            }
        }
    }

    // Inline PRIMARY KEY markers first, then the table-level clause; the two
    // merge and duplicates de-duplicate.
    let inline_pk: Vec<String> = table
        .columns
        .iter()
        .filter(|c| c.is_primary_key)
        .map(|c| c.name.clone())
        .collect();
    for name in inline_pk {
        table.add_primary_key_column(&name);
    }
    for name in table_pk {
        if table.column(&name).is_none() {
            return Err(TranslateError::parse(
                dialect,
                &format!("PRIMARY KEY references unknown column {name}"),
            ));
        }
        table.add_primary_key_column(&name);
    }
    for constraint in &table.unique_constraints {
        for name in &constraint.columns {
            if table.column(name).is_none() {
                return Err(TranslateError::parse(
                    dialect,
                    &format!("UNIQUE constraint references unknown column {name}"),
                ));
            }
        }
    }

    Ok(table)
}

/// Advance to the CREATE of the first `CREATE TABLE` pair.
fn seek_create_table(parser: &mut TokenParser) -> Option<()> {
    loop {
        parser.skip_whitespace();
        if parser.is_at_end() {
            return None;
        }
        if parser.check_keyword(Keyword::CREATE) {
            if let Some(Token::Word(w)) = parser.peek_meaningful(1) {
                if w.keyword == Keyword::TABLE {
                    parser.advance();
                    parser.skip_whitespace();
                    parser.advance();
                    return Some(());
                }
            }
        }
        parser.advance();
    }
}

/// Parse `[IF NOT EXISTS] [schema.]name`, returning the bare table name.
/// Schema qualifiers are dropped, not preserved.
fn parse_table_name(parser: &mut TokenParser) -> Option<String> {
    parser.skip_whitespace();
    if parser.check_keyword(Keyword::IF) {
        parser.advance();
        parser.skip_whitespace();
        parser.expect_keyword(Keyword::NOT)?;
        parser.skip_whitespace();
        parser.expect_keyword(Keyword::EXISTS)?;
        parser.skip_whitespace();
    }

    let first = parser.parse_identifier()?;
    parser.skip_whitespace();
    if parser.check_token(&Token::Period) {
        parser.advance();
        parser.skip_whitespace();
        let second = parser.parse_identifier()?;
        Some(second)
    } else {
        Some(first)
    }
}

/// Split the parenthesized table body into clauses at depth-one commas.
/// The cursor must be just past the opening parenthesis; afterwards it is
/// past the matching close. Returns `None` on unbalanced parentheses.
fn split_body_clauses(parser: &mut TokenParser) -> Option<Vec<Vec<TokenWithSpan>>> {
    let mut clauses = Vec::new();
    let mut current: Vec<TokenWithSpan> = Vec::new();
    let mut depth = 1u32;

    while let Some(t) = parser.current_token().cloned() {
        match &t.token {
            Token::LParen => {
                depth += 1;
                current.push(t);
            }
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    parser.advance();
                    if !is_blank(&current) {
                        clauses.push(current);
                    }
                    return Some(clauses);
                }
                current.push(t);
            }
            Token::Comma if depth == 1 => {
                if !is_blank(&current) {
                    clauses.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
            _ => current.push(t),
        }
        parser.advance();
    }
    None
}

fn is_blank(tokens: &[TokenWithSpan]) -> bool {
    tokens
        .iter()
        .all(|t| matches!(t.token, Token::Whitespace(_)))
}

enum Clause {
    PrimaryKey(Vec<String>),
    Unique(UniqueConstraint),
    Passthrough(String),
    ColumnDef { column: Column, inline_unique: bool },
}

fn classify_clause(cp: &mut TokenParser, dialect: Dialect) -> Result<Clause, TranslateError> {
    let full_text = cp.render_range(0, cp.tokens().len());

    // CONSTRAINT <name> PRIMARY KEY (...) | CONSTRAINT <name> UNIQUE (...)
    if cp.check_keyword(Keyword::CONSTRAINT) {
        cp.advance();
        cp.skip_whitespace();
        let name = cp.parse_identifier();
        cp.skip_whitespace();
        if cp.check_keyword(Keyword::PRIMARY) {
            return parse_primary_key_clause(cp, dialect, &full_text);
        }
        if cp.check_keyword(Keyword::UNIQUE) {
            return parse_unique_clause(cp, dialect, name, &full_text);
        }
        return Ok(Clause::Passthrough(full_text));
    }

    if cp.check_keyword(Keyword::PRIMARY) {
        return parse_primary_key_clause(cp, dialect, &full_text);
    }
    if cp.check_keyword(Keyword::UNIQUE) {
        return parse_unique_clause(cp, dialect, None, &full_text);
    }

    // FOREIGN KEY, CHECK, secondary indexes and vendor clauses are out of
    // scope for translation and pass through with quoting normalized later.
    if cp.check_keyword(Keyword::FOREIGN)
        || cp.check_keyword(Keyword::CHECK)
        || cp.check_keyword(Keyword::KEY)
        || cp.check_keyword(Keyword::INDEX)
        || cp.check_word_ci("FULLTEXT")
        || cp.check_word_ci("SPATIAL")
        || cp.check_word_ci("EXCLUDE")
    {
        return Ok(Clause::Passthrough(full_text));
    }

    let (column, inline_unique) = parse_column_clause(cp, dialect, &full_text)?;
    Ok(Clause::ColumnDef { column, inline_unique })
}

fn parse_primary_key_clause(
    cp: &mut TokenParser,
    dialect: Dialect,
    full_text: &str,
) -> Result<Clause, TranslateError> {
    cp.expect_keyword(Keyword::PRIMARY)
        .ok_or_else(|| TranslateError::parse(dialect, full_text))?;
    cp.skip_whitespace();
    cp.expect_keyword(Keyword::KEY)
        .ok_or_else(|| TranslateError::parse(dialect, full_text))?;
    let columns = parse_column_name_list(cp)
        .ok_or_else(|| TranslateError::parse(dialect, full_text))?;
    Ok(Clause::PrimaryKey(columns))
}

fn parse_unique_clause(
    cp: &mut TokenParser,
    dialect: Dialect,
    name: Option<String>,
    full_text: &str,
) -> Result<Clause, TranslateError> {
    cp.expect_keyword(Keyword::UNIQUE)
        .ok_or_else(|| TranslateError::parse(dialect, full_text))?;
    cp.skip_whitespace();
    // MySQL spells these UNIQUE KEY / UNIQUE INDEX.
    if cp.check_keyword(Keyword::KEY) || cp.check_keyword(Keyword::INDEX) {
        cp.advance();
        cp.skip_whitespace();
    }
    // Optional constraint name before the column list.
    let mut name = name;
    if !cp.check_token(&Token::LParen) {
        if let Some(ident) = cp.parse_identifier() {
            name.get_or_insert(ident);
        }
    }
    let columns = parse_column_name_list(cp)
        .ok_or_else(|| TranslateError::parse(dialect, full_text))?;
    Ok(Clause::Unique(UniqueConstraint { name, columns }))
}

/// Parse `(a, b, c)`, tolerating ASC/DESC markers after each name.
fn parse_column_name_list(cp: &mut TokenParser) -> Option<Vec<String>> {
    cp.skip_whitespace();
    if !cp.check_token(&Token::LParen) {
        return None;
    }
    cp.advance();

    let mut names = Vec::new();
    loop {
        cp.skip_whitespace();
        if cp.check_token(&Token::RParen) {
            cp.advance();
            break;
        }
        if cp.check_token(&Token::Comma) {
            cp.advance();
            continue;
        }
        if cp.check_word_ci("ASC") || cp.check_word_ci("DESC") {
            cp.advance();
            continue;
        }
        match cp.parse_identifier() {
            Some(name) => names.push(name),
            None => return None,
        }
    }
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

/// Parse one column definition clause.
fn parse_column_clause(
    cp: &mut TokenParser,
    dialect: Dialect,
    full_text: &str,
) -> Result<(Column, bool), TranslateError> {
    let name = cp
        .parse_identifier()
        .ok_or_else(|| TranslateError::parse(dialect, full_text))?;
    let mut column = Column::new(name);

    cp.skip_whitespace();
    let type_start = cp.pos();
    let head = cp
        .parse_identifier()
        .ok_or_else(|| TranslateError::parse(dialect, full_text))?;
    let mut base = head.to_lowercase();

    // Two-word type heads.
    if base == "double" && cp.peek_word_ci("PRECISION") {
        cp.skip_whitespace();
        cp.advance();
        base = "double precision".to_string();
    } else if base == "character" && cp.peek_word_ci("VARYING") {
        cp.skip_whitespace();
        cp.advance();
        base = "character varying".to_string();
    }

    // Parenthesized parameters: numbers, or a literal list for enum/set.
    let mut nums: Vec<u32> = Vec::new();
    cp.skip_whitespace();
    if cp.check_token(&Token::LParen) {
        cp.advance();
        let mut depth = 1u32;
        while let Some(t) = cp.current_token() {
            match &t.token {
                Token::LParen => depth += 1,
                Token::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        cp.advance();
                        break;
                    }
                }
                Token::SingleQuotedString(s) | Token::NationalStringLiteral(s) => {
                    column.literals.push(s.clone());
                }
                Token::Number(n, _) => {
                    if let Ok(v) = n.parse::<u32>() {
                        nums.push(v);
                    }
                }
                _ => {}
            }
            cp.advance();
        }
    }

    // Time-zone suffix: TIMESTAMP [(n)] WITH|WITHOUT TIME ZONE.
    if matches!(base.as_str(), "timestamp" | "time" | "datetime") {
        let with = if cp.peek_word_ci("WITH") {
            Some(true)
        } else if cp.peek_word_ci("WITHOUT") {
            Some(false)
        } else {
            None
        };
        if let Some(with) = with {
            let mark = cp.pos();
            cp.skip_whitespace();
            cp.advance();
            cp.skip_whitespace();
            if cp.expect_word_ci("TIME").is_some() {
                cp.skip_whitespace();
                if cp.expect_word_ci("ZONE").is_some() {
                    base = format!(
                        "{} {} time zone",
                        base,
                        if with { "with" } else { "without" }
                    );
                } else {
                    // Not a time-zone suffix after all; leave the type as-is.
                    cp.set_pos(mark);
                }
            } else {
                cp.set_pos(mark);
            }
        }
    }

    column.raw_type = cp.render_range(type_start, cp.pos());
    column.base_type = base;

    let decimal_family = matches!(
        column.base_type.as_str(),
        "decimal" | "numeric" | "dec" | "fixed"
    );
    if column.literals.is_empty() {
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

    let inline_unique = parse_column_modifiers(cp, &mut column);

    // The increment flag only means something on integer-family columns.
    if column.is_auto_increment && !is_integer_family(&column.base_type) {
        column.is_auto_increment = false;
    }

    Ok((column, inline_unique))
}

fn is_integer_family(base_type: &str) -> bool {
    matches!(
        base_type,
        "tinyint"
            | "smallint"
            | "mediumint"
            | "int"
            | "integer"
            | "bigint"
            | "int2"
            | "int4"
            | "int8"
            | "serial"
            | "bigserial"
            | "smallserial"
    )
}

/// Scan the remainder of a column clause for modifiers, in any order.
/// Returns whether an inline UNIQUE marker was seen.
fn parse_column_modifiers(cp: &mut TokenParser, column: &mut Column) -> bool {
    let mut inline_unique = false;
    loop {
        cp.skip_whitespace();
        if cp.is_at_end() {
            break;
        }

        if cp.check_keyword(Keyword::NOT) {
            cp.advance();
            cp.skip_whitespace();
            if cp.expect_keyword(Keyword::NULL).is_some() {
                column.nullable = false;
            }
            continue;
        }
        if cp.check_keyword(Keyword::NULL) {
            cp.advance();
            column.nullable = true;
            continue;
        }
        if cp.check_keyword(Keyword::DEFAULT) {
            cp.advance();
            column.default_value = parse_default_literal(cp);
            continue;
        }
        if cp.check_keyword(Keyword::PRIMARY) {
            cp.advance();
            cp.skip_whitespace();
            let _ = cp.expect_keyword(Keyword::KEY);
            column.is_primary_key = true;
            column.nullable = false;
            continue;
        }
        if cp.check_keyword(Keyword::UNIQUE) {
            cp.advance();
            inline_unique = true;
            continue;
        }
        if cp.check_word_ci("AUTO_INCREMENT") || cp.check_word_ci("AUTOINCREMENT") {
            cp.advance();
            column.is_auto_increment = true;
            continue;
        }
        if cp.check_keyword(Keyword::IDENTITY) {
            cp.advance();
            cp.skip_whitespace();
            cp.skip_parenthesized();
            column.is_auto_increment = true;
            continue;
        }
        // ON UPDATE CURRENT_TIMESTAMP: recognized, then dropped. Trigger
        // emulation is out of scope.
        if cp.check_keyword(Keyword::ON) {
            cp.advance();
            cp.skip_whitespace();
            if cp.expect_keyword(Keyword::UPDATE).is_some() {
                let _ = parse_default_literal(cp);
            }
            continue;
        }
        if cp.check_keyword(Keyword::COMMENT) {
            cp.advance();
            cp.skip_whitespace();
            if let Some(t) = cp.current_token() {
                if let Token::SingleQuotedString(s) = &t.token {
                    column.comment = Some(s.clone());
                    cp.advance();
                }
            }
            continue;
        }
        // MySQL column noise: per-column charset/collation and integer
        // display modifiers carry nothing portable.
        if cp.check_keyword(Keyword::COLLATE) {
            cp.advance();
            cp.skip_whitespace();
            let _ = cp.parse_identifier();
            continue;
        }
        if cp.check_keyword(Keyword::CHARACTER) {
            cp.advance();
            cp.skip_whitespace();
            if cp.expect_keyword(Keyword::SET).is_some() {
                cp.skip_whitespace();
                let _ = cp.parse_identifier();
            }
            continue;
        }
        if cp.check_word_ci("CHARSET") {
            cp.advance();
            cp.skip_whitespace();
            let _ = cp.parse_identifier();
            continue;
        }
        if cp.check_word_ci("UNSIGNED") || cp.check_word_ci("ZEROFILL") {
            cp.advance();
            continue;
        }
        // CONSTRAINT <name> names whatever comes next (usually DEFAULT).
        if cp.check_keyword(Keyword::CONSTRAINT) {
            cp.advance();
            cp.skip_whitespace();
            let _ = cp.parse_identifier();
            continue;
        }
        // Inline CHECK / REFERENCES: consumed so later modifiers still parse.
        if cp.check_keyword(Keyword::CHECK) {
            cp.advance();
            cp.skip_whitespace();
            cp.skip_parenthesized();
            continue;
        }
        if cp.check_keyword(Keyword::REFERENCES) {
            cp.advance();
            cp.skip_whitespace();
            let _ = cp.parse_identifier();
            cp.skip_whitespace();
            if cp.check_token(&Token::Period) {
                cp.advance();
                cp.skip_whitespace();
                let _ = cp.parse_identifier();
                cp.skip_whitespace();
            }
            cp.skip_parenthesized();
            continue;
        }

        // Unknown token; stop scanning rather than loop forever.
        break;
    }
    inline_unique
}

/// Parse a DEFAULT literal: a quoted string, a (possibly signed) number, a
/// parenthesized expression, or a bare/parenthesized function call.
fn parse_default_literal(cp: &mut TokenParser) -> Option<String> {
    cp.skip_whitespace();
    let token = cp.current_token()?.token.clone();
    match token {
        Token::LParen => {
            let start = cp.pos();
            cp.skip_parenthesized();
            Some(cp.render_range(start, cp.pos()))
        }
        Token::SingleQuotedString(s) => {
            cp.advance();
            Some(format!("'{}'", s.replace('\'', "''")))
        }
        Token::NationalStringLiteral(s) => {
            cp.advance();
            Some(format!("N'{}'", s.replace('\'', "''")))
        }
        Token::Number(n, _) => {
            cp.advance();
            Some(n)
        }
        Token::Minus => {
            cp.advance();
            cp.skip_whitespace();
            if let Some(t) = cp.current_token() {
                if let Token::Number(n, _) = &t.token {
                    let value = format!("-{}", n);
                    cp.advance();
                    return Some(value);
                }
            }
            None
        }
        Token::Word(w) => {
            let name = w.value.clone();
            cp.advance();
            cp.skip_whitespace();
            if cp.check_token(&Token::LParen) {
                let start = cp.pos();
                cp.skip_parenthesized();
                let args = cp.render_range(start, cp.pos());
                Some(format!("{}{}", name, args))
            } else {
                Some(name)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str, dialect: Dialect) -> Table {
        parse_create_table(sql, dialect).unwrap()
    }

    #[test]
    fn test_simple_table() {
        let table = parse(
            "CREATE TABLE `users` (`id` int NOT NULL, `email` varchar(255))",
            Dialect::MySql,
        );
        assert_eq!(table.name, "users");
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].name, "id");
        assert_eq!(table.columns[0].base_type, "int");
        assert!(!table.columns[0].nullable);
        assert_eq!(table.columns[1].base_type, "varchar");
        assert_eq!(table.columns[1].length, Some(255));
        assert!(table.columns[1].nullable);
    }

    #[test]
    fn test_if_not_exists_and_schema_qualifier() {
        let table = parse(
            "CREATE TABLE IF NOT EXISTS \"app\".\"users\" (\"id\" integer)",
            Dialect::Postgres,
        );
        assert_eq!(table.name, "users");
    }

    #[test]
    fn test_missing_create_table_is_parse_error() {
        let err = parse_create_table("SELECT * FROM users", Dialect::MySql).unwrap_err();
        assert!(matches!(err, TranslateError::ParseError { .. }));
    }

    #[test]
    fn test_decimal_precision_scale() {
        let table = parse(
            "CREATE TABLE t (price decimal(10,2) NOT NULL)",
            Dialect::MySql,
        );
        let col = &table.columns[0];
        assert_eq!(col.base_type, "decimal");
        assert_eq!(col.precision, Some(10));
        assert_eq!(col.scale, Some(2));
        assert_eq!(col.length, None);
    }

    #[test]
    fn test_enum_literals_with_embedded_commas() {
        let table = parse(
            "CREATE TABLE t (kind enum('a,b','c') NOT NULL, other int)",
            Dialect::MySql,
        );
        assert_eq!(table.columns.len(), 2);
        let col = &table.columns[0];
        assert_eq!(col.base_type, "enum");
        assert_eq!(col.literals, vec!["a,b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_default_string_with_comma_does_not_split_clause() {
        let table = parse(
            "CREATE TABLE t (greeting varchar(40) DEFAULT 'hello, world', n int)",
            Dialect::MySql,
        );
        assert_eq!(table.columns.len(), 2);
        assert_eq!(
            table.columns[0].default_value,
            Some("'hello, world'".to_string())
        );
    }

    #[test]
    fn test_inline_primary_key_auto_increment() {
        let table = parse(
            "CREATE TABLE t (id int AUTO_INCREMENT PRIMARY KEY, name varchar(50))",
            Dialect::MySql,
        );
        assert_eq!(table.primary_key, vec!["id".to_string()]);
        let id = table.column("id").unwrap();
        assert!(id.is_auto_increment);
        assert!(id.is_primary_key);
        assert!(!id.nullable);
    }

    #[test]
    fn test_table_level_primary_key() {
        let table = parse(
            "CREATE TABLE t (tenant_id int, item_id int, PRIMARY KEY (tenant_id, item_id))",
            Dialect::MySql,
        );
        assert_eq!(
            table.primary_key,
            vec!["tenant_id".to_string(), "item_id".to_string()]
        );
        assert!(!table.column("tenant_id").unwrap().nullable);
    }

    #[test]
    fn test_inline_and_table_level_pk_merge() {
        let table = parse(
            "CREATE TABLE t (id int PRIMARY KEY, PRIMARY KEY (id))",
            Dialect::MySql,
        );
        assert_eq!(table.primary_key, vec!["id".to_string()]);
    }

    #[test]
    fn test_pk_unknown_column_is_error() {
        let err = parse_create_table(
            "CREATE TABLE t (id int, PRIMARY KEY (nope))",
            Dialect::MySql,
        )
        .unwrap_err();
        assert!(matches!(err, TranslateError::ParseError { .. }));
    }

    #[test]
    fn test_unique_key_named() {
        let table = parse(
            "CREATE TABLE t (a int, b int, UNIQUE KEY uq_ab (a, b))",
            Dialect::MySql,
        );
        assert_eq!(table.unique_constraints.len(), 1);
        let uq = &table.unique_constraints[0];
        assert_eq!(uq.name.as_deref(), Some("uq_ab"));
        assert_eq!(uq.columns, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_constraint_named_unique() {
        let table = parse(
            "CREATE TABLE t (a int, CONSTRAINT uq_a UNIQUE (a))",
            Dialect::Postgres,
        );
        let uq = &table.unique_constraints[0];
        assert_eq!(uq.name.as_deref(), Some("uq_a"));
        assert_eq!(uq.columns, vec!["a".to_string()]);
    }

    #[test]
    fn test_inline_unique_becomes_table_constraint() {
        let table = parse("CREATE TABLE t (email varchar(100) UNIQUE)", Dialect::MySql);
        assert_eq!(table.unique_constraints.len(), 1);
        assert_eq!(table.unique_constraints[0].columns, vec!["email".to_string()]);
        assert!(table.unique_constraints[0].name.is_none());
    }

    #[test]
    fn test_foreign_key_clause_passes_through() {
        let table = parse(
            "CREATE TABLE t (user_id int, FOREIGN KEY (`user_id`) REFERENCES `users` (`id`))",
            Dialect::MySql,
        );
        assert_eq!(table.extra_clauses.len(), 1);
        assert_eq!(
            table.extra_clauses[0],
            "FOREIGN KEY (`user_id`) REFERENCES `users` (`id`)"
        );
    }

    #[test]
    fn test_mysql_key_clause_passes_through() {
        let table = parse(
            "CREATE TABLE t (a int, KEY idx_a (a))",
            Dialect::MySql,
        );
        assert_eq!(table.extra_clauses, vec!["KEY idx_a (a)".to_string()]);
    }

    #[test]
    fn test_identity_marks_auto_increment() {
        let table = parse(
            "CREATE TABLE [t] ([id] INT IDENTITY(1,1) NOT NULL PRIMARY KEY)",
            Dialect::SqlServer,
        );
        let id = table.column("id").unwrap();
        assert!(id.is_auto_increment);
        assert_eq!(table.primary_key, vec!["id".to_string()]);
    }

    #[test]
    fn test_sqlite_autoincrement() {
        let table = parse(
            "CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT)",
            Dialect::Sqlite,
        );
        assert!(table.column("id").unwrap().is_auto_increment);
    }

    #[test]
    fn test_timestamp_with_time_zone_head() {
        let table = parse(
            "CREATE TABLE t (created timestamp with time zone DEFAULT now())",
            Dialect::Postgres,
        );
        let col = &table.columns[0];
        assert_eq!(col.base_type, "timestamp with time zone");
        assert_eq!(col.default_value, Some("now()".to_string()));
    }

    #[test]
    fn test_double_precision_head() {
        let table = parse("CREATE TABLE t (x double precision)", Dialect::Postgres);
        assert_eq!(table.columns[0].base_type, "double precision");
    }

    #[test]
    fn test_on_update_current_timestamp_discarded() {
        let table = parse(
            "CREATE TABLE t (updated timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP)",
            Dialect::MySql,
        );
        let col = &table.columns[0];
        assert!(!col.nullable);
        assert_eq!(col.default_value, Some("CURRENT_TIMESTAMP".to_string()));
    }

    #[test]
    fn test_comment_recorded() {
        let table = parse(
            "CREATE TABLE t (id int COMMENT 'surrogate key')",
            Dialect::MySql,
        );
        assert_eq!(
            table.column("id").unwrap().comment.as_deref(),
            Some("surrogate key")
        );
    }

    #[test]
    fn test_unsigned_and_charset_noise_dropped() {
        let table = parse(
            "CREATE TABLE t (n int unsigned NOT NULL, s varchar(10) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NULL)",
            Dialect::MySql,
        );
        assert_eq!(table.columns[0].base_type, "int");
        assert!(!table.columns[0].nullable);
        assert!(table.columns[1].nullable);
    }

    #[test]
    fn test_negative_default() {
        let table = parse("CREATE TABLE t (offset_v int DEFAULT -1)", Dialect::MySql);
        assert_eq!(table.columns[0].default_value, Some("-1".to_string()));
    }

    #[test]
    fn test_parenthesized_default() {
        let table = parse(
            "CREATE TABLE [t] ([n] INT DEFAULT ((0)) NOT NULL)",
            Dialect::SqlServer,
        );
        assert_eq!(table.columns[0].default_value, Some("((0))".to_string()));
        assert!(!table.columns[0].nullable);
    }

    #[test]
    fn test_trailing_table_options_ignored() {
        let table = parse(
            "CREATE TABLE `t` (`id` int) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4",
            Dialect::MySql,
        );
        assert_eq!(table.columns.len(), 1);
    }

    #[test]
    fn test_auto_increment_only_sticks_to_integer_columns() {
        let table = parse(
            "CREATE TABLE t (code varchar(10) AUTO_INCREMENT, id int AUTO_INCREMENT)",
            Dialect::MySql,
        );
        assert!(!table.column("code").unwrap().is_auto_increment);
        assert!(table.column("id").unwrap().is_auto_increment);
    }

    #[test]
    fn test_raw_type_preserved() {
        let table = parse("CREATE TABLE t (v varchar(255))", Dialect::MySql);
        assert_eq!(table.columns[0].raw_type, "varchar(255)");
    }
}

//! Translation orchestration
//!
//! The pipeline per statement: peel DROP TABLE preambles, parse, translate
//! each column's type through the catalog, normalize defaults against the
//! translated types, re-quote pass-through clauses, emit. Statements in a
//! script are independent; one failure never blocks the rest.

use rayon::prelude::*;

use crate::dialect::{requote_identifiers, Dialect};
use crate::emit;
use crate::error::TranslateError;
use crate::parser;
use crate::typemap;

/// Below this many statements, sequential processing is faster than the
/// rayon fan-out.
const PARALLEL_THRESHOLD: usize = 8;

/// Translates CREATE TABLE statements from one dialect to another.
#[derive(Debug, Clone, Copy)]
pub struct DialectTranslator {
    source: Dialect,
    target: Dialect,
}

/// Result of translating a multi-statement script.
#[derive(Debug)]
pub struct ScriptOutput {
    /// Translated statements, joined with blank CRLF lines, in input order.
    pub sql: String,
    /// How many statements translated successfully.
    pub translated: usize,
    /// Unrecognized-type pass-through notices.
    pub warnings: Vec<String>,
    /// Statements that failed to parse. The rest of the script is unaffected.
    pub failures: Vec<StatementFailure>,
}

/// One statement that could not be translated.
#[derive(Debug)]
pub struct StatementFailure {
    /// Zero-based position among the script's detected statements.
    pub index: usize,
    pub error: TranslateError,
}

impl DialectTranslator {
    pub fn new(source: Dialect, target: Dialect) -> Self {
        Self { source, target }
    }

    /// Translate one statement (optionally preceded by DROP TABLE IF EXISTS
    /// statements and comment lines).
    ///
    /// The identity pair is a no-op: the input comes back unchanged without
    /// being parsed.
    pub fn translate(&self, ddl: &str) -> Result<String, TranslateError> {
        self.translate_statement(ddl).map(|(sql, _)| sql)
    }

    fn translate_statement(&self, ddl: &str) -> Result<(String, Vec<String>), TranslateError> {
        if self.source == self.target {
            return Ok((ddl.to_string(), Vec::new()));
        }

        let (drops, create_sql) = parser::split_preamble(ddl);
        let mut table = parser::parse_create_table(&create_sql, self.source)?;

        let mut warnings = Vec::new();
        for column in &mut table.columns {
            let translated = typemap::translate_column(column, self.source, self.target);
            if !translated.recognized {
                warnings.push(format!(
                    "table {}: column {} has no mapping for '{}'; passing through as {}",
                    table.name, column.name, column.raw_type, translated.type_token
                ));
            }
            column.raw_type = translated.type_token;
            column.is_auto_increment = translated.auto_increment;

            if let Some(raw) = column.default_value.take() {
                column.default_value = emit::format_default(&raw, &column.raw_type, self.target);
            }
        }

        for clause in &mut table.extra_clauses {
            *clause = requote_identifiers(clause, self.source, self.target);
        }

        // The extracted drops come back as advisory comment lines; they are
        // never re-emitted as executable statements.
        let mut out = String::new();
        for name in &drops {
            out.push_str(&format!(
                "-- DROP TABLE IF EXISTS {};\r\n",
                self.requote_table_name(name)
            ));
        }
        out.push_str(&emit::emit(&table, self.target));
        Ok((out, warnings))
    }

    fn requote_table_name(&self, name: &str) -> String {
        if name.contains(self.source.quote_open()) {
            requote_identifiers(name, self.source, self.target)
        } else {
            name.split('.')
                .map(|part| self.target.quote(part))
                .collect::<Vec<_>>()
                .join(".")
        }
    }

    /// Translate every CREATE TABLE statement in a script.
    ///
    /// Statements are detected, split, and translated independently (in
    /// parallel for larger scripts); failures are reported per statement.
    pub fn translate_script(&self, script: &str) -> ScriptOutput {
        let chunks = parser::split_statements(script);

        let results: Vec<Result<(String, Vec<String>), TranslateError>> =
            if chunks.len() >= PARALLEL_THRESHOLD {
                chunks
                    .par_iter()
                    .map(|chunk| self.translate_statement(chunk))
                    .collect()
            } else {
                chunks
                    .iter()
                    .map(|chunk| self.translate_statement(chunk))
                    .collect()
            };

        let mut parts = Vec::new();
        let mut warnings = Vec::new();
        let mut failures = Vec::new();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok((sql, mut stmt_warnings)) => {
                    parts.push(sql);
                    warnings.append(&mut stmt_warnings);
                }
                Err(error) => failures.push(StatementFailure { index, error }),
            }
        }

        ScriptOutput {
            translated: parts.len(),
            sql: parts.join("\r\n\r\n"),
            warnings,
            failures,
        }
    }
}

/// Translate one statement between dialects.
pub fn translate(ddl: &str, source: Dialect, target: Dialect) -> Result<String, TranslateError> {
    DialectTranslator::new(source, target).translate(ddl)
}

/// Translate a multi-statement script between dialects.
pub fn translate_script(script: &str, source: Dialect, target: Dialect) -> ScriptOutput {
    DialectTranslator::new(source, target).translate_script(script)
}

/// Translate a single column type token between dialects.
///
/// Total: an unknown type comes back upper-cased rather than failing. Used by
/// callers that map entities to columns and only need the type spelling.
pub fn convert_type(type_token: &str, source: Dialect, target: Dialect) -> String {
    if source == target {
        return type_token.to_string();
    }
    let column = typemap::parse_type_token(type_token);
    typemap::translate_column(&column, source, target).type_token
}

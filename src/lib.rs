//! schemashift: CREATE TABLE translation between SQL dialects
//!
//! This library takes a table definition written for one engine and rewrites
//! it, as faithfully as the target allows, for another: MySQL/MariaDB,
//! PostgreSQL, SQLite, or SQL Server. It translates types through a canonical
//! catalog, normalizes default literals, and re-renders keys, constraints and
//! identifier quoting in the target's syntax. It never touches a live
//! connection; input is DDL text, output is DDL text.

pub mod dialect;
pub mod emit;
pub mod error;
pub mod model;
pub mod parser;
pub mod translate;
pub mod typemap;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

pub use dialect::Dialect;
pub use error::TranslateError;
pub use translate::{
    convert_type, translate, translate_script, DialectTranslator, ScriptOutput, StatementFailure,
};

/// Options for translating a DDL script file
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Path to the input .sql script
    pub input_path: PathBuf,
    /// Output path (defaults to `<input stem>.<target>.sql` next to the input)
    pub output_path: Option<PathBuf>,
    /// Dialect the script was written for
    pub source: Dialect,
    /// Dialect to produce
    pub target: Dialect,
    /// Enable verbose output
    pub verbose: bool,
}

/// Translate a DDL script file and write the result.
///
/// Warnings and per-statement failures go to stderr; a failed statement does
/// not stop the rest of the script from translating.
pub fn translate_file(options: TranslateOptions) -> Result<PathBuf> {
    if options.verbose {
        println!(
            "Translating {} ({} -> {})",
            options.input_path.display(),
            options.source,
            options.target
        );
    }

    let script =
        fs::read_to_string(&options.input_path).map_err(|source| TranslateError::ReadError {
            path: options.input_path.clone(),
            source,
        })?;

    let output = translate_script(&script, options.source, options.target);

    if options.verbose {
        println!("Translated {} statement(s)", output.translated);
    }
    for warning in &output.warnings {
        eprintln!("warning: {warning}");
    }
    for failure in &output.failures {
        eprintln!("error: statement {}: {}", failure.index + 1, failure.error);
    }

    let output_path = options.output_path.unwrap_or_else(|| {
        options
            .input_path
            .with_extension(format!("{}.sql", options.target))
    });

    fs::write(&output_path, &output.sql).map_err(|source| TranslateError::WriteError {
        path: output_path.clone(),
        source,
    })?;

    if options.verbose {
        println!("Wrote {}", output_path.display());
    }

    Ok(output_path)
}

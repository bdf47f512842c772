//! Statement-level scanning ahead of token parsing
//!
//! A dump is cut into per-table chunks before any token work happens: each
//! chunk is one `CREATE TABLE` statement together with the `DROP TABLE IF
//! EXISTS` statements and `--` comment lines immediately preceding it. Chunks
//! translate independently; a failure in one never blocks the rest.

use std::sync::LazyLock;

use regex::Regex;

static CREATE_TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bCREATE\s+TABLE\b").unwrap());

static DROP_TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^\s*DROP\s+TABLE\s+IF\s+EXISTS\s+(.+?)\s*;").unwrap());

/// Split a script into independent chunks, one per `CREATE TABLE` statement.
///
/// Statements are cut at top-level semicolons, respecting single-quoted
/// strings and `--` line comments. Statements that are not a `CREATE TABLE`
/// (drops, comments) attach to the next chunk as its preamble. Trailing
/// material with no `CREATE TABLE` in it is dropped: the pipeline runs once
/// per detected table definition.
pub fn split_statements(script: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut pending = String::new();

    for stmt in split_on_semicolons(script) {
        pending.push_str(&stmt);
        if CREATE_TABLE_RE.is_match(strip_comment_lines(&stmt).as_str()) {
            chunks.push(std::mem::take(&mut pending));
        }
    }
    chunks
}

/// Peel `DROP TABLE IF EXISTS <name>;` statements and comment lines off the
/// front of a chunk. Returns the dropped table names (raw, quoting intact)
/// and the remaining statement text.
pub fn split_preamble(chunk: &str) -> (Vec<String>, String) {
    let mut rest = strip_comment_lines(chunk);
    let mut drops = Vec::new();

    while let Some(caps) = DROP_TABLE_RE.captures(&rest) {
        drops.push(caps[1].trim().to_string());
        let end = caps.get(0).unwrap().end();
        rest = rest[end..].to_string();
    }

    (drops, rest.trim().to_string())
}

/// Remove `--` comment lines, keeping everything else line-for-line.
fn strip_comment_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split on semicolons that sit outside single-quoted strings and outside
/// `--` line comments. The semicolon stays with its statement.
fn split_on_semicolons(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut in_comment = false;
    let mut prev = '\0';

    for c in script.chars() {
        current.push(c);
        if in_comment {
            if c == '\n' {
                in_comment = false;
            }
        } else if in_string {
            if c == '\'' {
                in_string = false;
            }
        } else if c == '\'' {
            in_string = true;
        } else if c == '-' && prev == '-' {
            in_comment = true;
        } else if c == ';' {
            statements.push(std::mem::take(&mut current));
        }
        prev = c;
    }
    if !current.trim().is_empty() {
        statements.push(current);
    }
    statements
}

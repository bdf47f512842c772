//! End-to-end translation properties
//!
//! Each test drives the public API the way a migration tool would: raw DDL
//! text in, raw DDL text out.

use pretty_assertions::assert_eq;
use schemashift::{convert_type, translate, translate_script, Dialect, TranslateError};

const MYSQL_USERS: &str = "CREATE TABLE `users` (\n\
    `id` int NOT NULL AUTO_INCREMENT,\n\
    `email` varchar(255) NOT NULL,\n\
    `is_active` tinyint(1) NOT NULL DEFAULT 1,\n\
    `status` enum('open','closed') DEFAULT 'open',\n\
    `balance` decimal(10,2) DEFAULT '0.00',\n\
    `created_at` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP,\n\
    PRIMARY KEY (`id`),\n\
    UNIQUE KEY `uq_email` (`email`)\n\
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;";

#[test]
fn identity_pair_is_idempotent_for_every_dialect() {
    for dialect in Dialect::ALL {
        assert_eq!(translate(MYSQL_USERS, dialect, dialect).unwrap(), MYSQL_USERS);
    }
}

#[test]
fn quoting_is_consistent_per_target() {
    let quote_chars = ['`', '"', '[', ']'];
    for target in [Dialect::Postgres, Dialect::Sqlite, Dialect::SqlServer] {
        let out = translate(MYSQL_USERS, Dialect::MySql, target).unwrap();
        // No source backticks survive.
        assert!(!out.contains('`'), "{target}: {out}");
        // Identifiers use the target's quote characters.
        assert!(out.contains(&target.quote("users")), "{target}: {out}");
        assert!(out.contains(&target.quote("email")), "{target}: {out}");
        // And no other dialect's quote characters appear around identifiers.
        for c in quote_chars {
            if c != target.quote_open() && c != target.quote_close() {
                assert!(!out.contains(c), "{target} leaked {c}: {out}");
            }
        }
    }
}

#[test]
fn boolean_round_trip_mysql_to_postgres() {
    let ddl = "CREATE TABLE t (flag TINYINT(1) NOT NULL DEFAULT 1);";
    let out = translate(ddl, Dialect::MySql, Dialect::Postgres).unwrap();
    assert!(out.contains("\"flag\" BOOLEAN NOT NULL DEFAULT TRUE"), "{out}");
}

#[test]
fn boolean_round_trip_mysql_to_sqlite() {
    let ddl = "CREATE TABLE t (flag TINYINT(1) NOT NULL DEFAULT 1);";
    let out = translate(ddl, Dialect::MySql, Dialect::Sqlite).unwrap();
    assert!(out.contains("\"flag\" INTEGER NOT NULL DEFAULT 1"), "{out}");
}

#[test]
fn auto_increment_pk_to_postgres_is_serial() {
    let ddl = "CREATE TABLE t (id INT AUTO_INCREMENT PRIMARY KEY);";
    let out = translate(ddl, Dialect::MySql, Dialect::Postgres).unwrap();
    assert!(out.contains("\"id\" SERIAL PRIMARY KEY"), "{out}");
    assert!(!out.contains("AUTO_INCREMENT"), "{out}");
}

#[test]
fn auto_increment_pk_to_sqlite_is_integer_autoincrement() {
    let ddl = "CREATE TABLE t (id INT AUTO_INCREMENT PRIMARY KEY);";
    let out = translate(ddl, Dialect::MySql, Dialect::Sqlite).unwrap();
    assert!(
        out.contains("\"id\" INTEGER PRIMARY KEY AUTOINCREMENT"),
        "{out}"
    );
}

#[test]
fn auto_increment_pk_to_sqlserver_is_identity() {
    let ddl = "CREATE TABLE t (id INT AUTO_INCREMENT PRIMARY KEY);";
    let out = translate(ddl, Dialect::MySql, Dialect::SqlServer).unwrap();
    assert!(out.contains("[id] INT IDENTITY(1,1) PRIMARY KEY"), "{out}");
}

#[test]
fn serial_to_mysql_becomes_auto_increment() {
    let ddl = "CREATE TABLE \"t\" (\"id\" serial PRIMARY KEY);";
    let out = translate(ddl, Dialect::Postgres, Dialect::MySql).unwrap();
    assert!(out.contains("`id` INT AUTO_INCREMENT PRIMARY KEY"), "{out}");
    assert!(!out.to_uppercase().contains("SERIAL"), "{out}");
}

#[test]
fn enum_sizes_to_longest_literal_plus_two() {
    let ddl = "CREATE TABLE t (status ENUM('open','closed'));";
    let out = translate(ddl, Dialect::MySql, Dialect::Sqlite).unwrap();
    assert!(out.contains("\"status\" NVARCHAR(8)"), "{out}");
}

#[test]
fn unrecognized_type_passes_through_uppercased_everywhere() {
    let ddl = "CREATE TABLE t (shape GEOMETRY);";
    for target in [Dialect::Postgres, Dialect::Sqlite, Dialect::SqlServer, Dialect::MariaDb] {
        let out = translate(ddl, Dialect::MySql, target).unwrap();
        assert!(out.contains("GEOMETRY"), "{target}: {out}");
    }
}

#[test]
fn input_without_create_table_is_a_parse_error_for_every_dialect() {
    for dialect in Dialect::ALL {
        let result = schemashift::parser::parse_create_table("INSERT INTO t VALUES (1);", dialect);
        assert!(
            matches!(result, Err(TranslateError::ParseError { .. })),
            "{dialect}"
        );
    }
    // Through the translator the same input fails on every non-identity pair;
    // the identity pair short-circuits before parsing.
    let err = translate("INSERT INTO t VALUES (1);", Dialect::MySql, Dialect::Postgres);
    assert!(matches!(err, Err(TranslateError::ParseError { .. })));
}

#[test]
fn composite_primary_key_preserves_order_in_every_target() {
    let ddl = "CREATE TABLE t (tenant_id int NOT NULL, item_id int NOT NULL, PRIMARY KEY (tenant_id, item_id));";
    for target in [Dialect::MariaDb, Dialect::Postgres, Dialect::Sqlite, Dialect::SqlServer] {
        let out = translate(ddl, Dialect::MySql, target).unwrap();
        let expected = format!(
            "PRIMARY KEY ({}, {})",
            target.quote("tenant_id"),
            target.quote("item_id")
        );
        assert!(out.contains(&expected), "{target}: {out}");
    }
}

#[test]
fn full_mysql_to_postgres_table() {
    let out = translate(MYSQL_USERS, Dialect::MySql, Dialect::Postgres).unwrap();
    assert_eq!(
        out,
        "CREATE TABLE \"users\" (\r\n\
         \t\"id\" SERIAL PRIMARY KEY NOT NULL,\r\n\
         \t\"email\" VARCHAR(255) NOT NULL,\r\n\
         \t\"is_active\" BOOLEAN NOT NULL DEFAULT TRUE,\r\n\
         \t\"status\" CHARACTER VARYING(8) NULL DEFAULT 'open',\r\n\
         \t\"balance\" NUMERIC(10,2) NULL DEFAULT 0.00,\r\n\
         \t\"created_at\" TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,\r\n\
         \tCONSTRAINT \"uq_email\" UNIQUE (\"email\")\r\n\
         );"
    );
}

#[test]
fn full_mysql_to_sqlite_table_drops_function_default() {
    let out = translate(MYSQL_USERS, Dialect::MySql, Dialect::Sqlite).unwrap();
    assert!(out.contains("\"created_at\" TIMESTAMP NOT NULL\r\n") || out.contains("\"created_at\" TIMESTAMP NOT NULL,"), "{out}");
    assert!(!out.contains("CURRENT_TIMESTAMP"), "{out}");
}

#[test]
fn mysql_suffix_only_when_targeting_mysql_family() {
    let pg = "CREATE TABLE \"t\" (\"id\" integer NOT NULL);";
    let to_mysql = translate(pg, Dialect::Postgres, Dialect::MySql).unwrap();
    assert!(to_mysql.ends_with(") ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"), "{to_mysql}");

    let to_sqlite = translate(MYSQL_USERS, Dialect::MySql, Dialect::Sqlite).unwrap();
    assert!(!to_sqlite.contains("ENGINE="), "{to_sqlite}");
}

#[test]
fn drop_preamble_is_commented_and_requoted() {
    let ddl = "DROP TABLE IF EXISTS `users`;\nCREATE TABLE `users` (`id` int NOT NULL);";
    let out = translate(ddl, Dialect::MySql, Dialect::SqlServer).unwrap();
    assert!(out.starts_with("-- DROP TABLE IF EXISTS [users];\r\n"), "{out}");
}

#[test]
fn multi_statement_script_translates_independently() {
    let script = "DROP TABLE IF EXISTS `a`;\n\
        CREATE TABLE `a` (`id` int AUTO_INCREMENT PRIMARY KEY);\n\
        CREATE TABLE `broken` (;\n\
        CREATE TABLE `b` (`n` decimal(8,3) NOT NULL DEFAULT '1.5');";
    let out = translate_script(script, Dialect::MySql, Dialect::Postgres);

    assert_eq!(out.translated, 2);
    assert_eq!(out.failures.len(), 1);
    assert_eq!(out.failures[0].index, 1);
    assert!(out.sql.contains("-- DROP TABLE IF EXISTS \"a\";"));
    assert!(out.sql.contains("\"id\" SERIAL PRIMARY KEY"));
    assert!(out.sql.contains("\"n\" NUMERIC(8,3) NOT NULL DEFAULT 1.5"));
}

#[test]
fn convert_type_standalone_entry_point() {
    assert_eq!(
        convert_type("varchar(255)", Dialect::MySql, Dialect::SqlServer),
        "NVARCHAR(255)"
    );
    assert_eq!(
        convert_type("enum('yes','no')", Dialect::MySql, Dialect::Postgres),
        "CHARACTER VARYING(5)"
    );
    assert_eq!(
        convert_type("timestamptz", Dialect::Postgres, Dialect::MySql),
        "TIMESTAMP"
    );
    assert_eq!(
        convert_type("GEOGRAPHY", Dialect::SqlServer, Dialect::Postgres),
        "GEOGRAPHY"
    );
}

#[test]
fn foreign_key_clause_survives_with_target_quoting() {
    let ddl = "CREATE TABLE `orders` (\n\
        `id` int AUTO_INCREMENT PRIMARY KEY,\n\
        `user_id` int NOT NULL,\n\
        FOREIGN KEY (`user_id`) REFERENCES `users` (`id`)\n\
        );";
    let out = translate(ddl, Dialect::MySql, Dialect::Postgres).unwrap();
    assert!(
        out.contains("FOREIGN KEY (\"user_id\") REFERENCES \"users\" (\"id\")"),
        "{out}"
    );
}

#[test]
fn schema_qualified_names_reduce_to_bare_table_name() {
    let ddl = "CREATE TABLE [app].[users] ([id] INT NOT NULL);";
    let out = translate(ddl, Dialect::SqlServer, Dialect::Postgres).unwrap();
    assert!(out.starts_with("CREATE TABLE \"users\" ("), "{out}");
    assert!(!out.contains("app"), "{out}");
}

#[test]
fn sqlserver_identity_to_mysql() {
    let ddl = "CREATE TABLE [t] ([id] INT IDENTITY(1,1) NOT NULL PRIMARY KEY, [name] NVARCHAR(50) NULL);";
    let out = translate(ddl, Dialect::SqlServer, Dialect::MySql).unwrap();
    assert!(out.contains("`id` INT AUTO_INCREMENT PRIMARY KEY NOT NULL"), "{out}");
    assert!(out.contains("`name` VARCHAR(50) NULL"), "{out}");
}

#[test]
fn jsonb_forward_only() {
    let ddl = "CREATE TABLE \"t\" (\"doc\" jsonb, \"note\" text);";
    let out = translate(ddl, Dialect::Postgres, Dialect::MySql).unwrap();
    assert!(out.contains("`doc` JSON"), "{out}");
    // Plain text stays text; nothing infers json on the way back.
    assert!(out.contains("`note` TEXT"), "{out}");
}

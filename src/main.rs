use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use schemashift::{convert_type, translate_file, Dialect, TranslateOptions};

#[derive(Parser)]
#[command(name = "schemashift")]
#[command(author, version, about = "Translate CREATE TABLE DDL between SQL dialects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a DDL script between dialects
    Translate {
        /// Path to the input .sql script
        #[arg(short, long)]
        input: PathBuf,

        /// Source dialect (mysql, mariadb, postgres, sqlite, sqlserver)
        #[arg(short, long)]
        from: String,

        /// Target dialect
        #[arg(short, long)]
        to: String,

        /// Output path (defaults to <input stem>.<target>.sql)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Translate a single column type token
    ConvertType {
        /// Type token, e.g. "varchar(255)" or "enum('a','b')"
        type_token: String,

        /// Source dialect
        #[arg(short, long)]
        from: String,

        /// Target dialect
        #[arg(short, long)]
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            input,
            from,
            to,
            output,
            verbose,
        } => {
            let options = TranslateOptions {
                input_path: input,
                output_path: output,
                source: from.parse::<Dialect>()?,
                target: to.parse::<Dialect>()?,
                verbose,
            };

            translate_file(options)?;
        }
        Commands::ConvertType {
            type_token,
            from,
            to,
        } => {
            println!(
                "{}",
                convert_type(&type_token, from.parse::<Dialect>()?, to.parse::<Dialect>()?)
            );
        }
    }

    Ok(())
}

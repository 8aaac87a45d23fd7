use clap::{Parser, Subcommand, ValueEnum};

pub mod commands;
pub mod output;

#[derive(Parser)]
#[command(
    name = "doclint",
    version,
    about = "Javadoc comment checker for Java sources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Include only files matching this glob
    #[arg(long, global = true)]
    pub include: Vec<String>,

    /// Exclude files matching this glob
    #[arg(long, global = true)]
    pub exclude: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the doc comments of every Java file in a project
    Check {
        /// Project path (default: current directory)
        #[arg(default_value = ".")]
        path: String,
        /// Path to config file (default: .doclint/config.toml or doclint.toml)
        #[arg(long)]
        config: Option<String>,
        /// Minimum number of real comment characters
        #[arg(long)]
        min_length: Option<usize>,
        /// Do not resolve @link, @see and @value references
        #[arg(long)]
        no_check_references: bool,
        /// Report overriding methods without @Override
        #[arg(long)]
        require_override: bool,
    },

    /// Resolve a type name as it would be seen from inside a source file
    Resolve {
        /// Type name, e.g. `List`, `Map.Entry` or `String[]`
        name: String,
        /// Java file providing the package, imports and enclosing type
        #[arg(long)]
        file: String,
        /// Project root used to build the symbol table
        #[arg(long, default_value = ".")]
        root: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Compact,
}

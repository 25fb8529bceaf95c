//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use jdl_core::domain::DatabaseType;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "jdl",
    bin_name = "jdl",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Check and render JHipster domain models",
    long_about = "jdl loads entity and enumeration models, checks their field types \
                  and validations against a database family, and renders them as JDL.",
    after_help = "EXAMPLES:\n\
        \x20 jdl render models/library.toml\n\
        \x20 jdl render models/library.toml --database postgresql -o library.jdl\n\
        \x20 jdl check models/ --database cassandra\n\
        \x20 jdl types --database cassandra --format list\n\
        \x20 jdl completions bash > /usr/share/bash-completion/completions/jdl",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a model document as JDL.
    #[command(
        visible_alias = "r",
        about = "Render a model as JDL",
        after_help = "EXAMPLES:\n\
            \x20 jdl render library.toml\n\
            \x20 jdl render library.json --database mysql\n\
            \x20 jdl render library.toml -o out/library.jdl --force"
    )]
    Render(RenderArgs),

    /// Check models against a database family.
    #[command(
        visible_alias = "c",
        about = "Check models against a database",
        after_help = "EXAMPLES:\n\
            \x20 jdl check library.toml\n\
            \x20 jdl check models/ --database cassandra\n\
            \x20 jdl --output-format json check models/"
    )]
    Check(CheckArgs),

    /// List the field types a database accepts.
    #[command(
        visible_alias = "ls",
        about = "List field types and their validations",
        after_help = "EXAMPLES:\n\
            \x20 jdl types\n\
            \x20 jdl types --database cassandra --format list\n\
            \x20 jdl types --format json"
    )]
    Types(TypesArgs),

    /// Initialise a jdl configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 jdl init                  # default location\n\
            \x20 jdl init --force          # overwrite an existing file\n\
            \x20 jdl -c ./jdl.toml init    # explicit location"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 jdl completions bash > ~/.local/share/bash-completion/completions/jdl\n\
            \x20 jdl completions zsh  > ~/.zfunc/_jdl\n\
            \x20 jdl completions fish > ~/.config/fish/completions/jdl.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the jdl configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 jdl config get defaults.database\n\
            \x20 jdl config list\n\
            \x20 jdl config path"
    )]
    Config(ConfigCommands),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `jdl render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Model document (`.toml` or `.json`).
    #[arg(value_name = "MODEL", help = "Model document to render")]
    pub model: PathBuf,

    /// Check the model against this database before rendering.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Check against a database before rendering"
    )]
    pub database: Option<Database>,

    /// Write to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file without asking.
    #[arg(long = "force", help = "Overwrite existing output file")]
    pub force: bool,

    /// Answer yes to the overwrite prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts")]
    pub yes: bool,

    /// Omit the generated-by header from exported files.
    #[arg(long = "no-header", help = "Do not write the generated-by header")]
    pub no_header: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `jdl check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// A model document or a directory of them.
    #[arg(value_name = "PATH", help = "Model document or directory")]
    pub path: PathBuf,

    /// Database family (default: `defaults.database` from the config).
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Database family to check against"
    )]
    pub database: Option<Database>,
}

// ── types ─────────────────────────────────────────────────────────────────────

/// Arguments for `jdl types`.
#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Database family (default: `defaults.database` from the config).
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Database family"
    )]
    pub database: Option<Database>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: TypesFormat,
}

/// Output format for the `types` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypesFormat {
    /// Type names with their validations.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `jdl init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `jdl completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `jdl config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Database families accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Database {
    Sql,
    Mysql,
    Mariadb,
    /// Also accepted as `postgres`.
    #[value(alias = "postgres")]
    Postgresql,
    Oracle,
    Mssql,
    /// Also accepted as `mongo`.
    #[value(alias = "mongo")]
    Mongodb,
    Cassandra,
}

impl From<Database> for DatabaseType {
    fn from(db: Database) -> Self {
        match db {
            Database::Sql => Self::Sql,
            Database::Mysql => Self::Mysql,
            Database::Mariadb => Self::Mariadb,
            Database::Postgresql => Self::Postgresql,
            Database::Oracle => Self::Oracle,
            Database::Mssql => Self::Mssql,
            Database::Mongodb => Self::Mongodb,
            Database::Cassandra => Self::Cassandra,
        }
    }
}

impl std::fmt::Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DatabaseType::from(*self))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_color_flag_needs_no_value() {
        let cli = Cli::parse_from(["jdl", "--no-color", "types"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn database_display_matches_domain() {
        assert_eq!(Database::Sql.to_string(), "sql");
        assert_eq!(Database::Postgresql.to_string(), "postgresql");
        assert_eq!(Database::Cassandra.to_string(), "cassandra");
    }

    #[test]
    fn parse_render_command() {
        let cli = Cli::parse_from([
            "jdl",
            "render",
            "library.toml",
            "--database",
            "mysql",
            "-o",
            "out.jdl",
            "--force",
        ]);
        let Commands::Render(args) = cli.command else {
            panic!("expected Render command");
        };
        assert_eq!(args.model, PathBuf::from("library.toml"));
        assert_eq!(args.database, Some(Database::Mysql));
        assert_eq!(args.output, Some(PathBuf::from("out.jdl")));
        assert!(args.force);
        assert!(!args.no_header);
    }

    #[test]
    fn database_aliases() {
        let cli = Cli::parse_from(["jdl", "check", "m.toml", "-d", "postgres"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.database, Some(Database::Postgresql));
        } else {
            panic!("expected Check command");
        }

        let cli = Cli::parse_from(["jdl", "types", "-d", "mongo"]);
        if let Commands::Types(args) = cli.command {
            assert_eq!(args.database, Some(Database::Mongodb));
            assert_eq!(args.format, TypesFormat::Table);
        } else {
            panic!("expected Types command");
        }
    }

    #[test]
    fn unknown_database_is_rejected() {
        assert!(Cli::try_parse_from(["jdl", "types", "--database", "redis"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["jdl", "--quiet", "--verbose", "types"]);
        assert!(result.is_err());
    }
}

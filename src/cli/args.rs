use clap::{Parser, Subcommand};

/// CLI entry point for sqlfacade
#[derive(Parser, Debug)]
#[command(
    name = "sqlfacade",
    version,
    about = "MySQL-dialect ODBC proxy for PostgreSQL, Snowflake, SQLite and H2"
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Environment (loads config/{env}.toml)
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a connection string to its backend and effective target
    Resolve {
        /// Connection URL (proxy form or double-encoded form)
        #[arg(long)]
        url: String,
    },

    /// Rewrite a statement for a target dialect
    Rewrite {
        /// Target dialect (mysql, postgres, snowflake, sqlite, h2)
        #[arg(long)]
        dialect: String,

        /// Statement to rewrite (read from stdin when omitted)
        #[arg(long)]
        sql: Option<String>,

        /// Translate as a procedure-call statement instead
        #[arg(long)]
        call: bool,
    },

    /// List supported backends
    Dialects,

    /// Check the rewrite catalog invariants
    Verify,

    /// Open a proxied connection and probe it
    Test {
        /// Connection URL
        #[arg(long)]
        url: Option<String>,

        /// Backend user name
        #[arg(long)]
        username: Option<String>,

        /// Backend password
        #[arg(long)]
        password: Option<String>,
    },

    /// Generate configuration file
    Config {
        /// Output path for config file
        #[arg(long, default_value = "config.toml")]
        output: String,

        /// Create environment-specific config
        #[arg(long)]
        env: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_help() {
        let result = Cli::try_parse_from(["sqlfacade", "--help"]);
        assert!(result.is_err()); // Help exits with error
    }

    #[test]
    fn test_cli_version() {
        let result = Cli::try_parse_from(["sqlfacade", "--version"]);
        assert!(result.is_err()); // Version exits with error
    }

    #[test]
    fn test_resolve_command() {
        let cli = Cli::try_parse_from([
            "sqlfacade",
            "resolve",
            "--url",
            "proxy:postgresql://localhost:5432/postgres",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve { url } => {
                assert_eq!(url, "proxy:postgresql://localhost:5432/postgres");
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_rewrite_command_defaults() {
        let cli = Cli::try_parse_from(["sqlfacade", "rewrite", "--dialect", "postgres"]).unwrap();
        match cli.command {
            Commands::Rewrite { dialect, sql, call } => {
                assert_eq!(dialect, "postgres");
                assert_eq!(sql, None);
                assert!(!call);
            }
            _ => panic!("Expected Rewrite command"),
        }
    }

    #[test]
    fn test_rewrite_command_with_flags() {
        let cli = Cli::try_parse_from([
            "sqlfacade",
            "rewrite",
            "--dialect",
            "snowflake",
            "--sql",
            "show databases",
            "--call",
        ])
        .unwrap();
        match cli.command {
            Commands::Rewrite { dialect, sql, call } => {
                assert_eq!(dialect, "snowflake");
                assert_eq!(sql, Some("show databases".to_string()));
                assert!(call);
            }
            _ => panic!("Expected Rewrite command"),
        }
    }

    #[test]
    fn test_test_command() {
        let cli = Cli::try_parse_from([
            "sqlfacade",
            "test",
            "--url",
            "sqlite:/tmp/test.db",
            "--username",
            "scott",
        ])
        .unwrap();
        match cli.command {
            Commands::Test { url, username, password } => {
                assert_eq!(url, Some("sqlite:/tmp/test.db".to_string()));
                assert_eq!(username, Some("scott".to_string()));
                assert_eq!(password, None);
            }
            _ => panic!("Expected Test command"),
        }
    }

    #[test]
    fn test_config_command_defaults() {
        let cli = Cli::try_parse_from(["sqlfacade", "config"]).unwrap();
        match cli.command {
            Commands::Config { output, env } => {
                assert_eq!(output, "config.toml");
                assert_eq!(env, None);
            }
            _ => panic!("Expected Config command"),
        }
    }
}

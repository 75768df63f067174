// src/config.rs
use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId};
use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the Notion integration secret.
pub const SECRET_ENV_VAR: &str = "NOTION_SECRET";

/// Environment variable holding the moments database id.
pub const DATABASE_ENV_VAR: &str = "NOTION_DATABASE_ID";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Directory the moment files are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Database URL or ID; overrides NOTION_DATABASE_ID
    #[arg(short, long)]
    pub database_id: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub api_key: ApiKey,
    pub database_id: DatabaseId,
    pub output_dir: PathBuf,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves the configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Resolves the configuration, reading variables through `lookup`.
    pub fn resolve_with<F>(cli: CommandLineInput, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key_str = lookup(SECRET_ENV_VAR).filter(|v| !v.is_empty()).ok_or_else(|| {
            AppError::MissingConfiguration(format!("{} environment variable not set", SECRET_ENV_VAR))
        })?;
        let api_key = ApiKey::new(api_key_str)?;

        let raw_database_id = cli
            .database_id
            .or_else(|| lookup(DATABASE_ENV_VAR))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::MissingConfiguration(format!(
                    "{} environment variable not set and --database-id not given",
                    DATABASE_ENV_VAR
                ))
            })?;
        let database_id = DatabaseId::parse(&raw_database_id)?;

        Ok(PipelineConfig {
            api_key,
            database_id,
            output_dir: PathBuf::from(cli.output_dir),
            verbose: cli.verbose,
        })
    }
}

//! Runtime configuration for the CLI.
//!
//! Flags win over environment variables; `.env` files are only read in
//! debug builds (see `main.rs`).

use std::env;

use crate::error::CliError;

pub const API_URL_VAR: &str = "REMI_API_URL";
pub const USER_ID_VAR: &str = "REMI_USER_ID";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api_url: String,
    pub user_id: String,
}

impl CliConfig {
    pub fn resolve(api_url: Option<String>, user: Option<String>) -> Result<Self, CliError> {
        let api_url = flag_or_env(api_url, API_URL_VAR).ok_or_else(|| {
            CliError::Config(format!(
                "no reminder service URL; pass --api-url or set {API_URL_VAR}"
            ))
        })?;
        let user_id = flag_or_env(user, USER_ID_VAR).ok_or_else(|| {
            CliError::Config(format!("no user id; pass --user or set {USER_ID_VAR}"))
        })?;
        Ok(Self { api_url, user_id })
    }
}

fn flag_or_env(flag: Option<String>, var: &str) -> Option<String> {
    normalize(flag).or_else(|| normalize(env::var(var).ok()))
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable and parses it into `T`
///
/// Falls back to `default` when the variable is unset. A value that is set
/// but cannot be parsed is logged and also falls back to `default`.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to parse {env_var}={raw:?} ({e:?}), using default");
            default
        }
    }
}

/// Reads an environment variable and parses it into `T`
///
/// Returns `None` when the variable is unset, empty or cannot be parsed. A
/// value that cannot be parsed is logged.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let raw = env::var(env_var).ok()?;
    if raw.trim().is_empty() {
        return None;
    }
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Failed to parse {env_var}={raw:?} ({e:?}), ignoring it");
            None
        }
    }
}

/// Reads a boolean flag from the environment
///
/// Accepts `1`, `true`, `yes` and `on` (case insensitive) as true; anything
/// else, including an unset variable, yields `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

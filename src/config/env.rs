//! Environment overrides.
//!
//! `IDK_*` variables win over the config file.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(env_lookup, "IDK_BACKEND_URL") {
        config.backend.base_url = url;
    }
    if let Some(timeout) = non_empty(env_lookup, "IDK_API_TIMEOUT_SECS") {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid IDK_API_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        // Zero would mean "no timeout" to reqwest callers; clamp instead.
        config.backend.timeout_secs = parsed.max(1);
    }
    if env_lookup("NO_COLOR").is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

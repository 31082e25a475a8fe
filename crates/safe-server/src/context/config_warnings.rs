use safe_config::{SafeConfig, ServerConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SafeConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SafeConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.store.is_configured() && has_env_prefix(&env_keys, "SAFEUSE_STORE") {
        warnings.push(
            "Store config appears default while SAFEUSE_STORE* env vars exist. Use double underscores (example: SAFEUSE_STORE__URL)."
                .to_string(),
        );
    }

    if !config.llm.is_configured() && has_env_prefix(&env_keys, "SAFEUSE_LLM") {
        warnings.push(
            "LLM config appears default while SAFEUSE_LLM* env vars exist. Use double underscores (example: SAFEUSE_LLM__API_KEY)."
                .to_string(),
        );
    }

    if config.server == ServerConfig::default() && has_env_prefix(&env_keys, "SAFEUSE_SERVER") {
        warnings.push(
            "Server config appears default while SAFEUSE_SERVER* env vars exist. Use double underscores (example: SAFEUSE_SERVER__PORT)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

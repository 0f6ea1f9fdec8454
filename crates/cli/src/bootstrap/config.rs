use captive_portal_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)
        .map_err(|e| anyhow::anyhow!("Config load error: {}", e))?;

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Config validation error: {}", e))?;

    Ok(config)
}

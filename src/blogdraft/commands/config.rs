use crate::commands::{BlogPaths, CmdMessage, CmdResult};
use crate::config::{BlogConfig, CONFIG_KEYS};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `config.json`. Bad keys and values come back as error
/// messages; only I/O and parse failures are `Err`.
pub fn run(paths: &BlogPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = BlogConfig::load(dir)?;

    let message = match &action {
        ConfigAction::ShowAll => None,
        ConfigAction::ShowKey(key) => Some(match config.get(key) {
            Some(value) => CmdMessage::info(format!("{} = {}", key, value)),
            None => unknown_key(key),
        }),
        ConfigAction::Set(key, value) => Some(match config.set(key, value) {
            Ok(()) => {
                config.save(dir)?;
                let stored = config.get(key).unwrap_or_else(|| value.clone());
                CmdMessage::success(format!("{} set to {}", key, stored))
            }
            Err(_) if config.get(key).is_none() => unknown_key(key),
            Err(e) => CmdMessage::error(e),
        }),
    };

    let mut result = CmdResult::default().with_config(config);
    result.messages.extend(message);
    Ok(result)
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

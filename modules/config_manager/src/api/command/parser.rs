//! Token parsing for config commands

use crate::contract::ConfigError;

/// A parsed operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Restore bundled defaults and restart
    Reset,
    /// Re-read the persisted document and restart
    Reload,
    /// Run a validation pass
    Check,
    /// Read one setting
    Get { key: String },
    /// Write one setting
    Set { key: String, value: String },
}

pub fn usage(label: &str) -> String {
    format!("Usage: /{} config <key> [value]", label)
}

/// Parse the tokens following the command label
pub fn parse<S: AsRef<str>>(args: &[S], label: &str) -> Result<ConfigCommand, ConfigError> {
    if args.len() < 2 {
        return Err(ConfigError::Usage {
            message: usage(label),
        });
    }

    let top = args[0].as_ref();
    if !top.eq_ignore_ascii_case("config") && !top.eq_ignore_ascii_case("conf") {
        return Err(ConfigError::Usage {
            message: format!("Invalid argument: {}", top),
        });
    }

    let sub = args[1].as_ref();
    match sub.to_lowercase().as_str() {
        "reset" => return Ok(ConfigCommand::Reset),
        "reload" => return Ok(ConfigCommand::Reload),
        "check" => return Ok(ConfigCommand::Check),
        _ => {}
    }

    match args {
        [_, _] => Ok(ConfigCommand::Get {
            key: sub.to_string(),
        }),
        [_, _, value] => Ok(ConfigCommand::Set {
            key: sub.to_string(),
            value: value.as_ref().to_string(),
        }),
        _ => Err(ConfigError::Usage {
            message: format!("Too many arguments. {}", usage(label)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = "elytraOnSpawn";

    fn usage_message(result: Result<ConfigCommand, ConfigError>) -> String {
        match result {
            Err(ConfigError::Usage { message }) => message,
            other => panic!("Expected usage error, got {:?}", other),
        }
    }

    #[test]
    fn test_requires_two_tokens() {
        assert_eq!(
            usage_message(parse(&["config"], LABEL)),
            "Usage: /elytraOnSpawn config <key> [value]"
        );
        assert!(parse::<&str>(&[], LABEL).is_err());
    }

    #[test]
    fn test_top_level_token() {
        assert_eq!(parse(&["CONF", "check"], LABEL).unwrap(), ConfigCommand::Check);
        assert_eq!(parse(&["Config", "RESET"], LABEL).unwrap(), ConfigCommand::Reset);
        assert_eq!(
            usage_message(parse(&["settings", "check"], LABEL)),
            "Invalid argument: settings"
        );
    }

    #[test]
    fn test_key_forms() {
        assert_eq!(
            parse(&["config", "World"], LABEL).unwrap(),
            ConfigCommand::Get {
                key: "World".into()
            }
        );
        assert_eq!(
            parse(&["config", "spawnRadius", "12"], LABEL).unwrap(),
            ConfigCommand::Set {
                key: "spawnRadius".into(),
                value: "12".into()
            }
        );
        assert!(usage_message(parse(&["config", "world", "a", "b"], LABEL))
            .starts_with("Too many arguments."));
    }

    #[test]
    fn test_keywords_win_over_keys() {
        assert_eq!(parse(&["config", "reload"], LABEL).unwrap(), ConfigCommand::Reload);
        assert_eq!(
            parse(&["config", "check", "extra"], LABEL).unwrap(),
            ConfigCommand::Check
        );
    }
}

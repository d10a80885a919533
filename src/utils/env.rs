use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// HangarEnv allows us to mock environment variables while
/// running tests. That way we can run our tests in parallel,
/// and our local development environment will not have unintended
/// side effects on our tests.
#[derive(Debug, Clone)]
pub struct HangarEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for HangarEnv {
    fn default() -> HangarEnv {
        HangarEnv::new()
    }
}

impl HangarEnv {
    /// creates a new environment variable store
    pub fn new() -> HangarEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        HangarEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: HangarEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => Ok(mock_store.get(&key_str).map(|v| v.to_owned())),
            None => match env::var(&key_str) {
                Ok(data) => Ok(Some(data)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(env::VarError::NotUnicode(_)) => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "The value of the environment variable \"{}\" is not valid Unicode.",
                        &key_str
                    ),
                )),
            },
        }?;

        if let Some(result) = &result {
            tracing::debug!("read {}", self.get_debug_value(key, result));
        } else {
            tracing::trace!("could not find ${}", &key_str);
        }

        Ok(result)
    }

    fn get_debug_value(&self, key: HangarEnvKey, value: &str) -> String {
        let value = if let HangarEnvKey::ApiKey = key {
            hangar_config::mask_key(value)
        } else {
            value.to_string()
        };

        format!("environment variable ${} = {}", key, value)
    }

    /// sets a value in the mock store
    #[cfg(test)]
    pub(crate) fn insert(&mut self, key: HangarEnvKey, value: &str) {
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.into());
        }
    }
}

/// HangarEnvKey defines all of the environment variables
/// that are respected by hangar. Each environment variable is prefixed
/// with `HANGAR_` and the suffix is the name of the key defined here,
/// converted from CamelCase to SHOUTY_SNAKE_CASE.
/// For example, `HangarEnvKey::ConfigHome.to_string()` becomes `HANGAR_CONFIG_HOME`
#[derive(Debug, Copy, Clone)]
pub enum HangarEnvKey {
    ConfigHome,
    ApiKey,
    ApiUrl,
}

impl fmt::Display for HangarEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{:?}", self).to_shouty_snake_case();
        write!(fmt, "HANGAR_{}", &dbg)
    }
}

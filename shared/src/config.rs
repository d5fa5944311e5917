use std::env;

const DEFAULT_TABLE_NAME: &str = "notes";

/// Settings read from the Lambda environment at cold start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    /// Trust the `X-User-Id` header when no authorizer identity is present (local development only)
    pub allow_user_header: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table_name = lookup("TABLE_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        let allow_user_header = lookup("ALLOW_USER_HEADER")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            table_name,
            allow_user_header,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            allow_user_header: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.table_name, "notes");
        assert!(!config.allow_user_header);
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("TABLE_NAME", "dev-notes"),
            ("ALLOW_USER_HEADER", "TRUE"),
        ]));
        assert_eq!(config.table_name, "dev-notes");
        assert!(config.allow_user_header);
    }

    #[test]
    fn test_blank_table_name_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("TABLE_NAME", "  "), ("ALLOW_USER_HEADER", "no")]));
        assert_eq!(config.table_name, "notes");
        assert!(!config.allow_user_header);
    }
}

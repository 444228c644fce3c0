use std::env;
use std::path::PathBuf;

/// Service configuration, read from the environment.
///
/// - `PSYMETRIC_CATALOG`: optional path to a catalog JSON file.
/// - `PSYMETRIC_BUILTIN_INSTRUMENTS`: `true`/`false`, default `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub catalog: Option<PathBuf>,
    pub builtin_instruments: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            builtin_instruments: true,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let catalog = lookup("PSYMETRIC_CATALOG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let builtin_instruments = match lookup("PSYMETRIC_BUILTIN_INSTRUMENTS") {
            None => true,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => eyre::bail!("PSYMETRIC_BUILTIN_INSTRUMENTS: expected true or false, got '{other}'"),
            },
        };

        Ok(Self {
            catalog,
            builtin_instruments,
        })
    }
}

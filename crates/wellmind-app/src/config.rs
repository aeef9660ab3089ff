use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Overrides the local data directory regardless of what the config says.
pub const DATA_DIR_ENV: &str = "WELLMIND_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellmindConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub storage: StorageConfig,
    pub created_at: jiff::Timestamp,
}

/// Where assessment history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageConfig {
    Local {
        data_dir: PathBuf,
    },
    S3 {
        bucket: String,
        region: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        profile_name: Option<String>,
    },
}

impl WellmindConfig {
    /// Config used when none has been written yet: local storage in the
    /// platform data directory.
    pub fn default_local() -> eyre::Result<Self> {
        Ok(Self {
            config_version: CURRENT_VERSION,
            storage: StorageConfig::Local {
                data_dir: default_data_dir()?,
            },
            created_at: jiff::Timestamp::now(),
        })
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("wellmind"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("wellmind"))
}

pub fn load_config(path: &Path) -> eyre::Result<WellmindConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    // Versions too large for a u32 are treated as newer than any build.
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v).unwrap_or(u32::MAX),
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: WellmindConfig = serde_json::from_value(migrated)?;
    Ok(apply_env_overrides(config))
}

/// Load the config at `path`, or fall back to [`WellmindConfig::default_local`]
/// when no config has been written.
pub fn load_or_default(path: &Path) -> eyre::Result<WellmindConfig> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::info!(path = %path.display(), "no config found, using local defaults");
        Ok(apply_env_overrides(WellmindConfig::default_local()?))
    }
}

fn apply_env_overrides(mut config: WellmindConfig) -> WellmindConfig {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV)
        && let StorageConfig::Local { data_dir } = &mut config.storage
    {
        *data_dir = PathBuf::from(dir);
    }
    config
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Wellmind."
        ));
    }

    // v0 → v1: top-level `data_dir` moved into a tagged `storage` section
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if !obj.contains_key("storage") {
            let data_dir = match obj.remove("data_dir") {
                Some(dir) => dir,
                None => serde_json::Value::String(default_data_dir()?.display().to_string()),
            };
            obj.insert(
                "storage".to_string(),
                serde_json::json!({ "type": "local", "data_dir": data_dir }),
            );
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added storage section)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(path: &Path, config: &WellmindConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

use crate::opts::TranslateOpts;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use std::{env, fs};

pub const CONFIG_ENV_VAR: &str = "IXIA_OC_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TranslateConfig {
    /// Traffic items that have ingress tracking enabled
    pub ingress_tracked_flows: BTreeSet<String>,

    /// Log every translated device as JSON
    pub debug: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Failed to read config file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}'")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl TranslateConfig {
    pub fn try_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::try_from_str(&content).map_err(|source| ConfigLoadError::Toml {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn try_from_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load_merge_with_opts(opts: TranslateOpts) -> Result<Self, ConfigLoadError> {
        let mut cfg = if let Some(cfg_path) = &opts.config_file {
            Self::try_from_file(cfg_path)?
        } else if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
            Self::try_from_file(Path::new(&env_path))?
        } else {
            Self::default()
        };

        cfg.ingress_tracked_flows.extend(opts.ingress_tracked_flow);
        if opts.debug {
            cfg.debug = true;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::{fs::File, io::Write};

    const CONFIG: &str = r#"
ingress-tracked-flows = ['traffic1', 'traffic2']
debug = false
"#;

    fn set(flows: &[&str]) -> BTreeSet<String> {
        flows.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(
            TranslateConfig::try_from_str("").unwrap(),
            TranslateConfig::default()
        );
    }

    #[test]
    fn wrong_value_type() {
        assert!(TranslateConfig::try_from_str("debug = 'yes'").is_err());
    }

    // Both the file and environment variable paths are exercised in one test
    // since the environment is process wide.
    #[test]
    fn translate_cfg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my_config.toml");
        {
            let mut f = File::create(&path).unwrap();
            f.write_all(CONFIG.as_bytes()).unwrap();
            f.flush().unwrap();
        }

        let cfg = TranslateConfig::load_merge_with_opts(TranslateOpts {
            config_file: Some(path.to_path_buf()),
            ..Default::default()
        })
        .unwrap();

        env::set_var(CONFIG_ENV_VAR, &path);
        let env_cfg = TranslateConfig::load_merge_with_opts(Default::default()).unwrap();
        let merged = TranslateConfig::load_merge_with_opts(TranslateOpts {
            ingress_tracked_flow: vec!["traffic2".to_owned(), "traffic3".to_owned()],
            debug: true,
            ..Default::default()
        })
        .unwrap();
        env::remove_var(CONFIG_ENV_VAR);
        assert_eq!(cfg, env_cfg);

        assert_eq!(
            cfg,
            TranslateConfig {
                ingress_tracked_flows: set(&["traffic1", "traffic2"]),
                debug: false,
            }
        );
        assert_eq!(
            merged,
            TranslateConfig {
                ingress_tracked_flows: set(&["traffic1", "traffic2", "traffic3"]),
                debug: true,
            }
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TranslateConfig::load_merge_with_opts(TranslateOpts {
            config_file: Some(dir.path().join("nope.toml")),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io { .. }));
    }
}

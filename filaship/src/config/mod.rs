mod error;

use std::path::{Path, PathBuf};

use filaship_base::consts;
use filaship_cli::config::LogConfig;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::error::Error;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// The compose file written by `init` and started by `up` when no file is
    /// given and none of the usual names exists in the working directory.
    #[serde(default = "default_compose_file")]
    pub compose_file: PathBuf,

    /// The `version` written into newly created compose files.
    #[serde(default = "default_compose_version")]
    pub compose_version: String,

    /// The program whose `compose` subcommand starts the stack.
    #[serde(default = "default_orchestrator_program")]
    pub orchestrator_program: String,

    /// The project network services join when an existing file declares
    /// none, and the suggested name for new projects.
    #[serde(default = "default_project_name")]
    pub default_project_name: String,

    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compose_file: default_compose_file(),
            compose_version: default_compose_version(),
            orchestrator_program: default_orchestrator_program(),
            default_project_name: default_project_name(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Returns the first configuration file that exists among the default
    /// location and the fallback directories.
    pub fn search_config_file_path() -> Option<PathBuf> {
        std::iter::once(Self::default_path())
            .chain(filaship_base::fallback_project_config_directories().into_iter().map(
                |mut path| {
                    path.push(filaship_base::CLI_CONFIG_NAME);
                    path
                },
            ))
            .find(|path| path.try_exists().unwrap_or(false))
    }

    #[inline]
    pub fn default_path() -> PathBuf {
        [filaship_base::PROJECT_CONFIG_DIR.to_path_buf(), PathBuf::from(filaship_base::CLI_CONFIG_NAME)]
            .into_iter()
            .collect()
    }

    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let path =
                path.as_ref().try_resolve().map(|path| path.to_path_buf()).with_context(|_| {
                    error::ResolveFilePathSnafu { file_path: path.as_ref().to_path_buf() }
                })?;
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.log.file_path = match config.log.file_path.map(|path| {
            path.try_resolve()
                .map(|path| path.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
        }) {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => return Err(err),
            None => None,
        };

        Ok(config)
    }

    /// Renders the default configuration as YAML.
    pub fn template_basic() -> Result<String, Error> {
        serde_yaml::to_string(&Self::default()).context(error::SerializeConfigSnafu)
    }
}

fn default_compose_file() -> PathBuf { PathBuf::from(consts::COMPOSE_FILE_NAMES[0]) }

fn default_compose_version() -> String { consts::DEFAULT_COMPOSE_VERSION.to_string() }

fn default_orchestrator_program() -> String { consts::DEFAULT_ORCHESTRATOR_PROGRAM.to_string() }

fn default_project_name() -> String { consts::DEFAULT_PROJECT_NAME.to_string() }

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_template_basic_round_trips() {
        let template = Config::template_basic().unwrap();

        assert!(template.contains("composeFile: docker-compose.yml"));
        assert!(template.contains("orchestratorProgram: docker"));

        let config: Config = serde_yaml::from_str(&template).unwrap();
        assert_eq!(config.compose_version, "3.8");
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"orchestratorProgram: podman\ndefaultProjectName: shop\n").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.orchestrator_program, "podman");
        assert_eq!(config.default_project_name, "shop");
        assert_eq!(config.compose_file, PathBuf::from("docker-compose.yml"));
        assert_eq!(config.compose_version, "3.8");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("config.yaml"));

        assert!(matches!(result, Err(Error::OpenConfig { .. } | Error::ResolveFilePath { .. })));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"composeVersion: [3.8\n").unwrap();

        assert!(matches!(Config::load(file.path()), Err(Error::ParseConfig { .. })));
    }
}

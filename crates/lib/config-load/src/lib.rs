//! Configuration discovery and loading.

use std::path::{Path, PathBuf};

use config_core::Config;

/// The environment variable holding an explicit config file path.
pub const ENV_VAR: &str = "MAIL_SEGMENT_CONFIG";

/// A loaded configuration and the file it came from.
#[derive(Debug)]
pub struct Loaded {
    /// The parsed configuration.
    pub config: Config,

    /// The file the configuration was read from.
    pub path: PathBuf,
}

/// Errors returned while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// None of the candidate files exist.
    #[error("no config file found in paths: {paths:?}")]
    NotFound {
        /// The paths that were tried.
        paths: Vec<PathBuf>,
    },

    /// A config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A config file was read but is not valid.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying YAML error.
        #[source]
        source: config_yaml::ParseError,
    },
}

/// Load the first existing file among `paths`.
///
/// Missing files are skipped; any other read error stops the search.
pub async fn from_paths<P>(paths: &[P]) -> Result<Loaded, LoadError>
where
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(LoadError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = config_yaml::parse_str(&contents).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        return Ok(Loaded {
            config,
            path: path.to_path_buf(),
        });
    }

    Err(LoadError::NotFound {
        paths: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
    })
}

/// Load configuration from the explicit path, or from the default locations.
pub async fn with(explicit: Option<PathBuf>) -> Result<Loaded, LoadError> {
    let paths: Vec<PathBuf> = config_paths::resolve(explicit).collect();
    from_paths(&paths).await
}

/// Load configuration from the path in [`ENV_VAR`], or from the default locations.
#[cfg(feature = "env")]
pub async fn with_default_env_var() -> Result<Loaded, WithDefaultEnvVarError> {
    let explicit = envfury::maybe(ENV_VAR).map_err(WithDefaultEnvVarError::Env)?;
    Ok(with(explicit).await?)
}

/// Errors returned by [`with_default_env_var`].
#[cfg(feature = "env")]
#[derive(Debug, thiserror::Error)]
pub enum WithDefaultEnvVarError {
    /// The env var is set but unusable.
    #[error("config path env var read: {0}")]
    Env(#[source] envfury::Error<envfury::ValueError<<PathBuf as std::str::FromStr>::Err>>),

    /// Loading failed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

//! Loading [`WriterConfig`] from `astwriter.toml`.

use std::path::{Path, PathBuf};

use astwriter::WriterConfig;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// File picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "astwriter.toml";

/// Result type for config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(astw::config_io),
        help("check the path given to --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(
        code(astw::config_parse),
        help("known keys are `indent` (\"tab\" or {{ spaces = N }}) and `indent_prefix`")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: toml::de::Error,
    },
}

/// A parsed `astwriter.toml`.
#[derive(Debug)]
pub struct WriterToml {
    path: PathBuf,
    config: WriterConfig,
}

impl WriterToml {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.clone(),
                source,
            })
        })?;
        let config = Self::parse(&content, &path.display().to_string())?;
        Ok(Self { path, config })
    }

    pub fn parse(content: &str, filename: &str) -> Result<WriterConfig> {
        toml::from_str(content).map_err(|source: toml::de::Error| {
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span: source.span().map(SourceSpan::from),
                filename: filename.to_string(),
                source,
            })
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_config(self) -> WriterConfig {
        self.config
    }
}

/// Reads `path`, or the default file when it exists, or falls back to
/// [`WriterConfig::default`].
pub fn load(path: Option<&Path>) -> Result<WriterConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
        None => return Ok(WriterConfig::default()),
    };
    let file = WriterToml::open(path)?;
    tracing::debug!(path = %file.path().display(), "loaded writer config");
    Ok(file.into_config())
}

#[cfg(test)]
mod tests {
    use astwriter::Indent;

    use super::*;

    #[test]
    fn test_parse_tab_indent() {
        let config = WriterToml::parse("indent = \"tab\"\nindent_prefix = \"// \"\n", "a.toml").unwrap();
        assert_eq!(config.indent, Indent::Tab);
        assert_eq!(config.indent_prefix.as_deref(), Some("// "));
    }

    #[test]
    fn test_parse_space_indent() {
        let config = WriterToml::parse("indent = { spaces = 2 }\n", "a.toml").unwrap();
        assert_eq!(config.indent, Indent::Spaces(2));
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = WriterToml::parse("", "a.toml").unwrap();
        assert_eq!(config, WriterConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let error = WriterToml::parse("width = 80\n", "a.toml").unwrap_err();
        assert!(matches!(*error, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let error = WriterToml::open("/nonexistent/astwriter.toml").unwrap_err();
        assert!(matches!(*error, ConfigError::Io { .. }));
    }
}

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::de::DeserializeOwned;

use boxsculpt::config::EditorConfig;

// -------------------------------------------------------------------------------------------------

/// Read and parse a JSON file, describing it as `description` in errors and logs.
pub fn read_json_file<V: DeserializeOwned>(
    description: &str,
    path: &Path,
) -> Result<V, anyhow::Error> {
    let file = File::open(path).with_context(|| {
        format!(
            "could not open {description} file {path}",
            path = path.to_string_lossy()
        )
    })?;
    let value = serde_json::from_reader(BufReader::new(file)).with_context(|| {
        format!(
            "syntax error in {description} file {path}",
            path = path.to_string_lossy()
        )
    })?;
    log::trace!(
        "Loaded {description} from {path}",
        path = path.to_string_lossy()
    );
    Ok(value)
}

// -------------------------------------------------------------------------------------------------

/// [`clap::Args`] argument group struct for args that affect what [`EditorConfig`] is used.
#[derive(Clone, Debug, clap::Args)]
pub struct ConfigArgs {
    /// JSON file containing editor settings. Settings it does not mention keep their
    /// default values.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub(crate) config_file: Option<PathBuf>,

    #[expect(clippy::doc_markdown, reason = "will be displayed in --help")]
    /// Override the value of a setting, instead of taking it from the file or defaults.
    ///
    /// The value is specified as a key-value pair where the key is an unquoted string, the
    /// separator is “=”, and the value is a JSON value; for example: -Smin_thickness=0.5
    #[arg(long = "set", short = 'S', value_parser = parse_configure, value_name="NAME=JSON")]
    pub(crate) set: Vec<(String, serde_json::Value)>,
}

impl ConfigArgs {
    /// Constructs the [`EditorConfig`] these args specify, and checks that it is valid.
    pub fn build_config(self) -> Result<EditorConfig, anyhow::Error> {
        let Self {
            config_file,
            set: to_override,
        } = self;

        let mut config: EditorConfig = match config_file {
            Some(path) => read_json_file("editor settings", &path)?,
            None => EditorConfig::default(),
        };

        if !to_override.is_empty() {
            let serde_json::Value::Object(mut current_settings) =
                serde_json::to_value(&config).context("could not serialize settings")?
            else {
                anyhow::bail!("editor settings should appear as a json object");
            };
            for (key, value) in to_override {
                current_settings.insert(key, value);
            }
            config = serde_json::from_value(serde_json::Value::Object(current_settings))
                .context("--set did not produce valid settings")?;
        }

        config.validate().context("invalid editor settings")?;
        Ok(config)
    }
}

fn parse_configure(arg: &str) -> Result<(String, serde_json::Value), anyhow::Error> {
    let (key, value) = arg.split_once('=').ok_or_else(|| anyhow::anyhow!("missing '='"))?;
    let value = serde_json::from_str(value)?;
    Ok((key.to_owned(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    fn args(config_file: Option<PathBuf>, set: &[&str]) -> ConfigArgs {
        ConfigArgs {
            config_file,
            set: set.iter().map(|s| parse_configure(s).unwrap()).collect(),
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(
            args(None, &[]).build_config().unwrap(),
            EditorConfig::default()
        );
    }

    #[test]
    fn file_then_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"grid_size": [10, 10, 10], "step": 0.5}}"#).unwrap();

        let config = args(
            Some(file.path().to_owned()),
            &["step=2", "confine_translation=true"],
        )
        .build_config()
        .unwrap();

        let mut expected = EditorConfig::default();
        expected.grid_size = [10.0, 10.0, 10.0];
        expected.step = 2.0;
        expected.confine_translation = true;
        assert_eq!(config, expected);
    }

    #[test]
    fn invalid_override() {
        let error = args(None, &["stpe=2"]).build_config().unwrap_err();
        assert_eq!(error.to_string(), "--set did not produce valid settings");

        let error = args(None, &["step=-2"]).build_config().unwrap_err();
        assert_eq!(error.to_string(), "invalid editor settings");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = args(Some(dir.path().join("nonexistent.json")), &[])
            .build_config()
            .unwrap_err();
        assert!(
            error.to_string().starts_with("could not open editor settings file"),
            "{error}"
        );
    }

    #[test]
    fn parse_configure_syntax() {
        assert_eq!(
            parse_configure("step=0.5").unwrap(),
            (String::from("step"), serde_json::json!(0.5))
        );
        assert!(parse_configure("step").is_err());
        assert!(parse_configure("step=x").is_err());
    }
}

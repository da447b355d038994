use {
    std::{fs::read_to_string, path::PathBuf},
    tracing::warn,
    serde::Deserialize,
    thiserror::Error,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub frequency: FrequencyConfig,
    pub sentiment: Option<SentimentConfig>,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CorpusConfig {
    pub path: PathBuf,
    pub text_column: String,
    pub delimiter: char,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FrequencyConfig {
    pub threshold: u64,
    max_ranked_terms: usize,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SentimentConfig {
    lexicon_path: Option<PathBuf>,
    pub ascii_only: bool,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PipelineConfig {
    max_in_flight: usize,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LoggingConfig {
    level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            frequency: FrequencyConfig::default(),
            sentiment: None,
            pipeline: PipelineConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/tweets.csv"),
            text_column: "text".to_owned(),
            delimiter: ',',
        }
    }
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            threshold: 40,
            max_ranked_terms: 200,
        }
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            ascii_only: true,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_in_flight: 256,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Reads `./config.toml`, then `/config/config.toml`. The caller decides
    /// what to do when neither is usable, since logging may not be set up yet.
    pub fn read() -> Result<Self, ConfigError> {
        let source = read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn sentiment(&self) -> SentimentConfig {
        self.sentiment.as_ref().cloned().unwrap_or_default()
    }
}

impl FrequencyConfig {
    /// `None` means the ranked list is not truncated.
    pub fn max_ranked_terms(&self) -> Option<usize> {
        if self.max_ranked_terms == 0 {
            None
        } else {
            Some(self.max_ranked_terms)
        }
    }
}

impl SentimentConfig {
    pub fn lexicon_path(&self) -> Option<&PathBuf> {
        self.lexicon_path.as_ref()
    }
}

impl PipelineConfig {
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.max(1)
    }
}

impl LoggingConfig {
    pub fn level(&self) -> tracing::Level {
        self.level.parse().unwrap_or_else(|_| {
            warn!("unknown log level \"{}\", falling back to info", self.level);
            tracing::Level::INFO
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();

        assert_eq!(config.corpus.text_column, "text");
        assert_eq!(config.corpus.delimiter, ',');
        assert_eq!(config.frequency.threshold, 40);
        assert_eq!(config.frequency.max_ranked_terms(), Some(200));
        assert!(config.sentiment().lexicon_path().is_none());
        assert!(config.sentiment().ascii_only);
        assert_eq!(config.pipeline.max_in_flight(), 256);
        assert_eq!(config.logging.level(), tracing::Level::INFO);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::parse(r#"
[corpus]
path = "data/nintendo.csv"

[frequency]
max_ranked_terms = 0

[sentiment]
lexicon_path = "data/lexicon.txt"

[pipeline]
max_in_flight = 0

[logging]
level = "debug"
"#).unwrap();

        assert_eq!(config.corpus.path, PathBuf::from("data/nintendo.csv"));
        assert_eq!(config.corpus.text_column, "text");
        assert_eq!(config.frequency.threshold, 40);
        assert_eq!(config.frequency.max_ranked_terms(), None);
        assert_eq!(config.sentiment().lexicon_path(), Some(&PathBuf::from("data/lexicon.txt")));
        assert!(config.sentiment().ascii_only);
        assert_eq!(config.pipeline.max_in_flight(), 1);
        assert_eq!(config.logging.level(), tracing::Level::DEBUG);
    }

    #[test]
    fn invalid_toml_is_reported() {
        assert!(matches!(Config::parse("[corpus\npath = 1"), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::parse("[frequency]\nthreshold = \"many\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_errors_describe_their_cause() {
        let err = Config::parse("[corpus\npath = 1").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config: "));

        let err = ConfigError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "no config.toml"));
        assert_eq!(err.to_string(), "failed to read config: no config.toml");
    }
}

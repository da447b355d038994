use {
    std::{fs::File, io::Read, path::PathBuf},
    tracing::{info, debug},
    thiserror::Error,
    crate::{
        config::CorpusConfig,
        models::Post,
    },
};

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to open corpus file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse corpus: {0}")]
    Csv(#[from] csv::Error),
    #[error("corpus has no \"{0}\" column")]
    MissingColumn(String),
    #[error("delimiter must be a single-byte character, got {0:?}")]
    InvalidDelimiter(char),
}

/// The ordered, read-only collection of posts every stage works from.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    posts: Vec<Post>,
}

impl Corpus {
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            posts: texts.into_iter()
                .enumerate()
                .map(|(index, text)| Post::new(index, text))
                .collect(),
        }
    }

    pub fn load(config: &CorpusConfig) -> Result<Self, CorpusError> {
        info!("loading corpus from {}", config.path.display());

        let file = File::open(&config.path).map_err(|source| CorpusError::Open {
            path: config.path.clone(),
            source,
        })?;

        Self::from_reader(file, config)
    }

    /// Reads a delimited file with a header row. Rows that lack the text field
    /// become empty posts, and invalid UTF-8 is replaced rather than rejected.
    pub fn from_reader<R: Read>(reader: R, config: &CorpusConfig) -> Result<Self, CorpusError> {
        if !config.delimiter.is_ascii() {
            return Err(CorpusError::InvalidDelimiter(config.delimiter));
        }
        let delimiter = config.delimiter as u8;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let text_column = reader.byte_headers()?
            .iter()
            .position(|header| column_name(header) == config.text_column)
            .ok_or_else(|| CorpusError::MissingColumn(config.text_column.clone()))?;

        let mut posts = Vec::new();
        for record in reader.byte_records() {
            let record = record?;
            let index = posts.len();

            let text = match record.get(text_column) {
                Some(field) => String::from_utf8_lossy(field).into_owned(),
                None => {
                    debug!("row {} has no text field, treating it as empty", index);
                    String::new()
                },
            };

            posts.push(Post::new(index, text));
        }

        Ok(Self { posts })
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn column_name(header: &[u8]) -> String {
    String::from_utf8_lossy(header)
        .trim_start_matches('\u{feff}')
        .trim()
        .to_owned()
}

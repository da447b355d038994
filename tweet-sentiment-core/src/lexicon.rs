use {
    std::{
        collections::HashMap,
        fs::File,
        io::{BufRead, BufReader},
        path::{Path, PathBuf},
    },
    tracing::info,
    thiserror::Error,
    unicode_segmentation::UnicodeSegmentation,
    crate::sentiment::{Category, CategoryCounts, CategoryScorer, UnknownCategory},
};

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to open lexicon {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read lexicon: {0}")]
    Read(#[from] std::io::Error),
    #[error("line {line}: expected \"word<TAB>category<TAB>0|1\", got {content:?}")]
    MalformedLine {
        line: usize,
        content: String,
    },
    #[error("line {line}: {source}")]
    UnknownCategory {
        line: usize,
        source: UnknownCategory,
    },
}

/// Word to affect-category table, read from the word-level association file
/// format: one `word<TAB>category<TAB>flag` line per pair, flag `1` meaning
/// the word is associated with the category.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, Vec<Category>>,
}

impl Lexicon {
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::Open {
            path: path.to_owned(),
            source,
        })?;

        let lexicon = Self::from_reader(BufReader::new(file))?;
        info!("loaded lexicon with {} words from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut lexicon = Self::default();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let number = number + 1;

            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            let (word, category, flag) = match fields.as_slice() {
                [word, category, flag] if !word.is_empty() => (*word, *category, *flag),
                _ => return Err(LexiconError::MalformedLine { line: number, content: line.clone() }),
            };

            let category: Category = category.parse()
                .map_err(|source| LexiconError::UnknownCategory { line: number, source })?;

            match flag {
                "1" => lexicon.associate(word, category),
                "0" => {},
                _ => return Err(LexiconError::MalformedLine { line: number, content: line.clone() }),
            }
        }

        Ok(lexicon)
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [Category])>,
    {
        let mut lexicon = Self::default();
        for (word, categories) in entries {
            for category in categories {
                lexicon.associate(word, *category);
            }
        }
        lexicon
    }

    fn associate(&mut self, word: &str, category: Category) {
        let categories = self.words.entry(word.to_lowercase()).or_default();
        if !categories.contains(&category) {
            categories.push(category);
            categories.sort();
        }
    }

    pub fn categories(&self, word: &str) -> &[Category] {
        self.words.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of words with at least one category.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl CategoryScorer for Lexicon {
    fn score(&self, text: &str) -> CategoryCounts {
        let mut counts = CategoryCounts::new();

        for word in text.unicode_words() {
            for category in self.categories(&word.to_lowercase()) {
                counts.add(*category, 1);
            }
        }

        counts
    }
}

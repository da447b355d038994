use {
    std::{fs::{self, File}, io::{BufWriter, Write}, path::{Path, PathBuf}},
    anyhow::{Context, Result},
    serde::Serialize,
    tracing::info,
    tweet_sentiment_core::{
        frequency::TermCount,
        sentiment::{Category, CategoryCounts, CategoryScores},
    },
};

pub const FREQUENT_TERMS: &str = "frequent_terms.json";
pub const RANKED_TERMS: &str = "ranked_terms.json";
pub const RANKED_TERMS_CSV: &str = "ranked_terms.csv";
pub const CATEGORY_SCORES: &str = "category_scores.json";
pub const DOCUMENT_SCORES: &str = "document_scores.csv";

/// Writes the views consumed by the chart and word cloud renderers.
pub struct Report {
    directory: PathBuf,
}

impl Report {
    pub fn create(directory: &Path) -> Result<Self> {
        fs::create_dir_all(directory)
            .with_context(|| format!("failed to create output directory {}", directory.display()))?;

        Ok(Self {
            directory: directory.to_owned(),
        })
    }

    pub fn write_frequent_terms(&self, terms: &[TermCount]) -> Result<()> {
        self.write_json(FREQUENT_TERMS, terms)
    }

    pub fn write_ranked_terms(&self, terms: &[TermCount]) -> Result<()> {
        self.write_json(RANKED_TERMS, terms)?;

        let path = self.path(RANKED_TERMS_CSV);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        for term in terms {
            writer.serialize(term)?;
        }
        writer.flush()?;

        info!("wrote {}", path.display());
        Ok(())
    }

    pub fn write_category_scores(&self, scores: &CategoryScores) -> Result<()> {
        self.write_json(CATEGORY_SCORES, scores)
    }

    pub fn write_document_scores(&self, documents: &[CategoryCounts]) -> Result<()> {
        let path = self.path(DOCUMENT_SCORES);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;

        let mut header = vec!["document".to_owned()];
        header.extend(Category::ALL.iter().map(|category| category.label().to_owned()));
        writer.write_record(&header)?;

        for (index, counts) in documents.iter().enumerate() {
            let mut row = vec![index.to_string()];
            row.extend(Category::ALL.iter().map(|category| counts.get(*category).to_string()));
            writer.write_record(&row)?;
        }
        writer.flush()?;

        info!("wrote {}", path.display());
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.path(name);
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writer.flush()?;

        info!("wrote {}", path.display());
        Ok(())
    }

    fn path(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_directory(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tweet-sentiment-{}-{}", name, std::process::id()))
    }

    #[test]
    fn writes_ranked_terms_as_json_and_csv() {
        let directory = output_directory("ranked");
        let report = Report::create(&directory).unwrap();

        let terms = vec![
            TermCount { term: "switch".to_owned(), count: 45 },
            TermCount { term: "mario".to_owned(), count: 12 },
        ];
        report.write_ranked_terms(&terms).unwrap();

        let json: Vec<TermCount> = serde_json::from_str(&fs::read_to_string(directory.join(RANKED_TERMS)).unwrap()).unwrap();
        assert_eq!(json, terms);
        assert_eq!(
            fs::read_to_string(directory.join(RANKED_TERMS_CSV)).unwrap(),
            "term,count\nswitch,45\nmario,12\n",
        );

        fs::remove_dir_all(directory).unwrap();
    }

    #[test]
    fn writes_one_row_per_document() {
        let directory = output_directory("documents");
        let report = Report::create(&directory).unwrap();

        let mut first = CategoryCounts::new();
        first.add(Category::Joy, 2);
        report.write_document_scores(&[first, CategoryCounts::new()]).unwrap();

        let csv = fs::read_to_string(directory.join(DOCUMENT_SCORES)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "document,anger,anticipation,disgust,fear,joy,negative,positive,sadness,surprise,trust");
        assert_eq!(lines[1], "0,0,0,0,0,2,0,0,0,0,0");
        assert_eq!(lines[2], "1,0,0,0,0,0,0,0,0,0,0");

        fs::remove_dir_all(directory).unwrap();
    }
}

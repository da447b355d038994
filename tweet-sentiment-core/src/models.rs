/// One post as ingested from the corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedPost {
    pub index: usize,
    pub text: String,
    pub sanitized: String,
}

/// A post with every derived form attached. Built once by the pipeline and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    index: usize,
    text: String,
    sanitized: String,
    tokens: Vec<String>,
}

impl Post {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    pub fn sanitized(self, sanitized: String) -> SanitizedPost {
        SanitizedPost {
            index: self.index,
            text: self.text,
            sanitized,
        }
    }
}

impl SanitizedPost {
    pub fn tokenized(self, tokens: Vec<String>) -> Document {
        Document {
            index: self.index,
            text: self.text,
            sanitized: self.sanitized,
            tokens,
        }
    }
}

impl Document {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

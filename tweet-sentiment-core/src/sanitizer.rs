use {
    std::borrow::Cow,
    once_cell::sync::Lazy,
    regex::Regex,
};

// A rule set whose replacements never shrink the text could otherwise loop.
const MAX_PASSES: usize = 16;

static URL: Lazy<RewriteRule> = Lazy::new(|| RewriteRule::builtin("url", r"\s?(?:https?|ftp)://\S+", ""));
static MARKUP: Lazy<RewriteRule> = Lazy::new(|| RewriteRule::builtin("markup", r"<[^>]*>", ""));
// A tag has to start a word. The whitespace before it is kept, a run of tags
// goes in one match.
static TAG: Lazy<RewriteRule> = Lazy::new(|| RewriteRule::builtin("tag", r"(^|\s)(?:[@#]\w+\s*)+", "$1"));

/// A single regex rewrite applied to the whole text.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    pub fn new(name: &'static str, pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    fn builtin(name: &'static str, pattern: &str, replacement: &str) -> Self {
        Self::new(name, pattern, replacement).expect("built-in sanitizer pattern must compile")
    }

    /// URLs with the scheme `http`, `https` or `ftp`, plus one leading whitespace character.
    pub fn url() -> Self {
        URL.clone()
    }

    /// Anything enclosed in angle brackets, such as `<U+1F600>` emoji placeholders.
    pub fn markup() -> Self {
        MARKUP.clone()
    }

    /// `@mention` and `#hashtag` words, with the whitespace that follows them.
    /// Only tags at the start of the text or after whitespace count, so
    /// `support@example.com` and `(@user)` are left alone.
    pub fn tag() -> Self {
        TAG.clone()
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

/// Strips structural noise from raw post text by running an ordered list of
/// rewrite rules. The list is re-run until the text stops changing, so the
/// result is always a fixed point of the sanitizer.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    rules: Vec<RewriteRule>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(vec![
            RewriteRule::url(),
            RewriteRule::markup(),
            RewriteRule::tag(),
        ])
    }
}

impl Sanitizer {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn sanitize(&self, text: &str) -> String {
        let mut current = match self.apply_once(text) {
            Some(rewritten) => rewritten,
            None => return text.to_owned(),
        };

        for _ in 1..MAX_PASSES {
            match self.apply_once(&current) {
                Some(next) if next != current => current = next,
                _ => break,
            }
        }

        current
    }

    /// Runs every rule once, returning `None` if no rule matched.
    fn apply_once(&self, text: &str) -> Option<String> {
        let mut rewritten: Option<String> = None;

        for rule in &self.rules {
            let current = rewritten.as_deref().unwrap_or(text);
            let next = match rule.apply(current) {
                Cow::Owned(next) => next,
                Cow::Borrowed(_) => continue,
            };
            rewritten = Some(next);
        }

        rewritten
    }
}

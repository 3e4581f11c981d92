//! Candidate words for the generated heading

/// Words used when no pool is configured.
pub const DEFAULT_HERO_WORDS: [&str; 3] = ["Quick", "Fast", "Speedy"];

/// Fixed, ordered set of heading words. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroWordPool {
    words: Vec<String>,
}

impl HeroWordPool {
    /// Build a pool from `words`. Returns `None` when `words` is empty.
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Option<Self> {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Pick one word uniformly at random.
    pub fn choose(&self, rng: &mut fastrand::Rng) -> &str {
        &self.words[rng.usize(..self.words.len())]
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl Default for HeroWordPool {
    fn default() -> Self {
        Self {
            words: DEFAULT_HERO_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

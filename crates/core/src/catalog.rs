use crate::{Card, ConfigError, Pattern, ScoredPattern};

/// Ordered set of enabled patterns. Order decides ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl PatternCatalog {
    pub fn standard() -> Self {
        Self {
            patterns: Pattern::STANDARD.to_vec(),
        }
    }

    pub fn from_patterns(patterns: Vec<Pattern>) -> Result<Self, ConfigError> {
        if patterns.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { patterns })
    }

    /// Builds the catalog for a level. With an allow-list, only the listed
    /// ids are enabled, in the order given; ids outside the standard set
    /// (e.g. `SuitSet4`) are accepted when they parse.
    pub fn with_allowed(allowed: Option<&[String]>) -> Result<Self, ConfigError> {
        let Some(ids) = allowed else {
            return Ok(Self::standard());
        };
        let mut patterns = Vec::with_capacity(ids.len());
        for id in ids {
            let pattern =
                Pattern::from_id(id).ok_or_else(|| ConfigError::UnknownPattern(id.clone()))?;
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
        Self::from_patterns(patterns)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.patterns.contains(pattern)
    }

    pub fn ids(&self) -> Vec<String> {
        self.patterns.iter().map(Pattern::id).collect()
    }

    pub fn detect_patterns(&self, cards: &[Card]) -> Vec<Pattern> {
        self.patterns
            .iter()
            .copied()
            .filter(|pattern| pattern.validate(cards))
            .collect()
    }

    pub fn detect_scored(&self, cards: &[Card]) -> Vec<ScoredPattern> {
        self.detect_patterns(cards)
            .into_iter()
            .map(|pattern| ScoredPattern {
                pattern,
                score: pattern.calculate_score(cards),
            })
            .collect()
    }

    pub fn best_pattern(&self, cards: &[Card]) -> Option<ScoredPattern> {
        highest_score(self.detect_scored(cards).iter())
    }
}

/// Highest score wins; on ties the earliest candidate is kept.
pub(crate) fn highest_score<'a>(
    candidates: impl Iterator<Item = &'a ScoredPattern>,
) -> Option<ScoredPattern> {
    let mut best: Option<ScoredPattern> = None;
    for candidate in candidates {
        if best.map(|b| candidate.score > b.score).unwrap_or(true) {
            best = Some(*candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn allow_list_filters_and_orders() {
        let ids = vec!["Flush".to_string(), "Pair".to_string(), "Pair".to_string()];
        let catalog = PatternCatalog::with_allowed(Some(ids.as_slice())).unwrap();
        assert_eq!(catalog.patterns(), &[Pattern::Flush, Pattern::Pair]);
    }

    #[test]
    fn rejects_unknown_and_empty_allow_lists() {
        let ids = vec!["Straight".to_string()];
        assert_eq!(
            PatternCatalog::with_allowed(Some(ids.as_slice())),
            Err(ConfigError::UnknownPattern("Straight".to_string()))
        );
        assert_eq!(
            PatternCatalog::with_allowed(Some(&[][..])),
            Err(ConfigError::EmptyCatalog)
        );
    }

    #[test]
    fn ties_keep_catalog_order() {
        // SuitedRun3 and SuitedRun4 both validate a four-card run; the 3 variant
        // earns 40 + 10 and the 4 variant 60, so the later one wins outright.
        let cards = [
            Card::standard(Suit::Spades, Rank::Two),
            Card::standard(Suit::Spades, Rank::Three),
            Card::standard(Suit::Spades, Rank::Four),
            Card::standard(Suit::Spades, Rank::Five),
        ];
        let catalog = PatternCatalog::standard();
        let best = catalog.best_pattern(&cards).unwrap();
        assert_eq!(best.pattern, Pattern::SuitedRun { min_len: 4 });

        let tied = [
            ScoredPattern {
                pattern: Pattern::SuitSet { min_len: 3 },
                score: 20,
            },
            ScoredPattern {
                pattern: Pattern::ColorSet { min_len: 3 },
                score: 20,
            },
        ];
        assert_eq!(
            highest_score(tied.iter()).map(|s| s.pattern),
            Some(Pattern::SuitSet { min_len: 3 })
        );
    }
}

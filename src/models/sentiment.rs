use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😔",
            Sentiment::Neutral => "😐",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#10b981",
            Sentiment::Negative => "#ef4444",
            Sentiment::Neutral => "#6b7280",
        }
    }

    pub fn bg_color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#d1fae5",
            Sentiment::Negative => "#fee2e2",
            Sentiment::Neutral => "#f3f4f6",
        }
    }

    /// Clase CSS del badge
    pub fn badge_class(&self) -> String {
        format!("sentiment-badge sentiment-{}", self.as_str())
    }
}

/// Items que llevan una etiqueta de sentimiento
pub trait HasSentiment {
    fn sentiment(&self) -> Sentiment;
}

/// Conteo por sentimiento de la página visible
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    pub fn of<T: HasSentiment>(items: &[T]) -> Self {
        items.iter().fold(Self::default(), |mut tally, item| {
            match item.sentiment() {
                Sentiment::Positive => tally.positive += 1,
                Sentiment::Negative => tally.negative += 1,
                Sentiment::Neutral => tally.neutral += 1,
            }
            tally
        })
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl HasSentiment for Sentiment {
        fn sentiment(&self) -> Sentiment {
            *self
        }
    }

    #[test]
    fn wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Sentiment::Negative).unwrap(), "\"negative\"");
        let parsed: Sentiment = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(parsed, Sentiment::Neutral);
        assert!(serde_json::from_str::<Sentiment>("\"mixed\"").is_err());
    }

    #[test]
    fn tally_counts_each_label() {
        let items = [
            Sentiment::Positive,
            Sentiment::Neutral,
            Sentiment::Positive,
            Sentiment::Negative,
        ];
        let tally = SentimentTally::of(&items);
        assert_eq!(tally.count(Sentiment::Positive), 2);
        assert_eq!(tally.negative, 1);
        assert_eq!(tally.neutral, 1);
        assert_eq!(tally.total(), items.len());
    }
}

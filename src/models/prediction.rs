use serde::{Deserialize, Serialize};

use crate::models::sentiment::{HasSentiment, Sentiment};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PredictionRequest {
    pub text: String,
}

/// Resultado de /predict
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Prediction {
    pub text: String,
    pub sentiment: Sentiment,
}

impl HasSentiment for Prediction {
    fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}

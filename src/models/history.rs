use serde::{Deserialize, Serialize};

use crate::models::page::PageResult;
use crate::models::sentiment::{HasSentiment, Sentiment};

/// Predicción guardada por el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HistoryItem {
    pub id: i64,
    pub text: String,
    pub sentiment: Sentiment,
    pub timestamp: String,
}

impl HasSentiment for HistoryItem {
    fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HistoryResponse {
    pub history: Vec<HistoryItem>,
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    #[serde(default)]
    pub count: u32,
}

impl From<HistoryResponse> for PageResult<HistoryItem> {
    fn from(response: HistoryResponse) -> Self {
        PageResult::new(
            response.history,
            response.page,
            response.pages,
            response.total,
        )
    }
}

pub mod auth;
pub mod history;
pub mod news;
pub mod page;
pub mod prediction;
pub mod sentiment;

pub use auth::{AuthResponse, ErrorBody, HealthResponse, Identity, LoginRequest, ProfileResponse, RegisterRequest};
pub use history::{HistoryItem, HistoryResponse};
pub use news::{NewsItem, NewsResponse};
pub use page::PageResult;
pub use prediction::{Prediction, PredictionRequest};
pub use sentiment::{HasSentiment, Sentiment, SentimentTally};

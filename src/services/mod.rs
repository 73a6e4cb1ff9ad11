pub mod api_client;
pub mod error;
pub mod gateways;
pub mod page_sources;

pub use api_client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use gateways::{AuthGateway, PageSource, Predictor};
pub use page_sources::{HistorySource, NewsSource};

// Fuentes paginadas concretas para PagedListController

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;

use crate::models::{HistoryItem, NewsItem, PageResult};
use crate::services::api_client::ApiClient;
use crate::services::error::{ApiError, ApiResult};
use crate::services::gateways::PageSource;
use crate::state::session_store::SessionStore;

/// GET /news, sin autenticación
#[derive(Clone)]
pub struct NewsSource {
    client: ApiClient,
}

impl NewsSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl PageSource<NewsItem> for NewsSource {
    fn fetch_page(&self, page: u32, page_size: u32) -> LocalBoxFuture<'static, ApiResult<PageResult<NewsItem>>> {
        let client = self.client.clone();
        async move { client.news(page, page_size).await.map(PageResult::from) }.boxed_local()
    }
}

/// GET /history con el token vigente en el momento del fetch
#[derive(Clone)]
pub struct HistorySource {
    client: ApiClient,
    session: SessionStore,
}

impl HistorySource {
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }
}

impl PageSource<HistoryItem> for HistorySource {
    fn fetch_page(&self, page: u32, page_size: u32) -> LocalBoxFuture<'static, ApiResult<PageResult<HistoryItem>>> {
        let Some(token) = self.session.token() else {
            log::warn!("⚠️ [HISTORY] Fetch sin token");
            return future::ready(Err(ApiError::not_authenticated())).boxed_local();
        };
        let client = self.client.clone();
        async move {
            client
                .history(&token, page, page_size)
                .await
                .map(PageResult::from)
        }
        .boxed_local()
    }
}

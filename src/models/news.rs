use serde::{Deserialize, Serialize};

use crate::models::page::PageResult;
use crate::models::sentiment::{HasSentiment, Sentiment};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewsItem {
    pub article_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl HasSentiment for NewsItem {
    fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}

/// Sobre de /news
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewsResponse {
    pub news: Vec<NewsItem>,
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    #[serde(default)]
    pub count: u32,
}

impl From<NewsResponse> for PageResult<NewsItem> {
    fn from(response: NewsResponse) -> Self {
        PageResult::new(response.news, response.page, response.pages, response.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_envelope_into_page_result() {
        let json = r#"{
            "news": [{
                "article_id": "a1",
                "title": "Markets rally",
                "description": null,
                "link": "https://news.example/a1",
                "pubDate": "2024-01-05 09:30:00",
                "sentiment": "positive",
                "image_url": null
            }],
            "page": 2, "pages": 5, "total": 41, "count": 1
        }"#;
        let response: NewsResponse = serde_json::from_str(json).unwrap();
        let page: PageResult<NewsItem> = response.into();
        assert_eq!(page.page_number, 2);
        assert_eq!(page.page_count, 5);
        assert_eq!(page.total_count, 41);
        assert_eq!(page.items[0].pub_date, "2024-01-05 09:30:00");
        assert_eq!(page.items[0].image_url, None);
    }
}

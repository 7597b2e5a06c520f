use gloo::net::http::Request;
use serde::de::DeserializeOwned;

use quizzo_core::{Category, CategoryId, CategorySource, Clue, GameError, Result};
use quizzo_protocol::{CategoryDetail, CategoryStub};

/// Category source backed by the trivia provider's HTTP API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HttpCategorySource {
    base_url: String,
}

impl HttpCategorySource {
    pub(crate) const DEFAULT_BASE_URL: &'static str = "https://jservice.io";

    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| GameError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(GameError::Network(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| GameError::MalformedResponse(err.to_string()))
    }
}

impl CategorySource for HttpCategorySource {
    async fn category_pool(&self, pool_size: usize) -> Result<Vec<CategoryId>> {
        let stubs: Vec<CategoryStub> = self
            .get_json(&format!("api/categories?count={}", pool_size))
            .await?;
        Ok(stubs.into_iter().map(|stub| stub.id).collect())
    }

    async fn category(&self, id: CategoryId) -> Result<Category> {
        let detail: CategoryDetail = self.get_json(&format!("api/category?id={}", id)).await?;
        let clues = detail
            .clues
            .into_iter()
            .map(|entry| Clue::new(entry.question, entry.answer))
            .collect();
        Ok(Category::new(detail.title, clues))
    }
}

//! Explore California API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Method, Response};
use serde::{Deserialize, Serialize};

/// API Client for the tour rating endpoints
pub struct ExploreCaliClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

/// Rating as sent to and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub score: Option<i32>,
    pub comment: Option<String>,
    pub customer_id: i32,
}

#[derive(Debug, Deserialize)]
struct AverageResponse {
    #[serde(rename = "average:")]
    average: Option<f64>,
}

/// Page selection for listing ratings
#[derive(Debug, Default, Clone)]
pub struct PageOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl PageOptions {
    /// Query string including the leading `?`, or empty
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(size) = self.size {
            params.push(format!("size={}", size));
        }
        if let Some(sort) = &self.sort {
            params.push(format!("sort={}", urlencoding::encode(sort)));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

impl ExploreCaliClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn ratings_url(&self, tour_id: i32) -> String {
        format!("{}/tours/{}/ratings", self.base_url, tour_id)
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request
            .send()
            .await
            .context("Failed to connect to Explore California API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(resp)
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Rate a tour
    pub async fn create_rating(&self, tour_id: i32, rating: &Rating) -> Result<()> {
        self.send(Method::POST, &self.ratings_url(tour_id), Some(rating))
            .await?;
        Ok(())
    }

    /// List one page of a tour's ratings
    pub async fn list_ratings(&self, tour_id: i32, page: &PageOptions) -> Result<Vec<Rating>> {
        let url = format!("{}{}", self.ratings_url(tour_id), page.query_string());
        let resp = self.send::<()>(Method::GET, &url, None).await?;

        resp.json().await.context("Failed to parse response")
    }

    /// Average score of a tour
    pub async fn average(&self, tour_id: i32) -> Result<Option<f64>> {
        let url = format!("{}/average", self.ratings_url(tour_id));
        let resp = self.send::<()>(Method::GET, &url, None).await?;

        let average: AverageResponse = resp.json().await.context("Failed to parse response")?;
        Ok(average.average)
    }

    /// Update a rating with PUT (nulls keep the stored value) or PATCH
    /// (nulls clear it)
    pub async fn update_rating(
        &self,
        tour_id: i32,
        rating: &Rating,
        patch: bool,
    ) -> Result<Rating> {
        let method = if patch { Method::PATCH } else { Method::PUT };
        let resp = self
            .send(method, &self.ratings_url(tour_id), Some(rating))
            .await?;

        resp.json().await.context("Failed to parse response")
    }

    /// Delete a customer's rating of a tour
    pub async fn delete_rating(&self, tour_id: i32, customer_id: i32) -> Result<()> {
        let url = format!("{}/{}", self.ratings_url(tour_id), customer_id);
        self.send::<()>(Method::DELETE, &url, None).await?;
        Ok(())
    }
}

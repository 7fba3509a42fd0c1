//! Reqwest-backed review source adapter.
//!
//! This adapter owns transport details only: locating the review service,
//! building per-product URLs, timeout and HTTP error mapping, and JSON
//! decoding into domain reviews.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header};
use tracing::debug;

use super::dto::{CreatedReviewDto, ReviewDto};
use crate::domain::ports::{ReviewSource, ReviewSourceError, ServiceLocator};
use crate::domain::{ProductId, Review, ReviewId, ReviewReceipt, TRACE_ID_HEADER, TraceId};

/// Review source that talks to a remote review service over HTTP.
///
/// The base URL is resolved through the [`ServiceLocator`] on every call, so
/// consecutive requests may reach different instances.
pub struct HttpReviewSource {
    client: Client,
    locator: Arc<dyn ServiceLocator>,
    service_name: String,
}

impl HttpReviewSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        locator: Arc<dyn ServiceLocator>,
        service_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            locator,
            service_name: service_name.into(),
        })
    }

    async fn reviews_url(&self, product_id: ProductId) -> Result<Url, ReviewSourceError> {
        let base = self
            .locator
            .resolve(&self.service_name)
            .await
            .map_err(|error| ReviewSourceError::unavailable(error.to_string()))?;
        let url = reviews_url(&base, product_id)?;
        debug!(service = %self.service_name, %url, "resolved review endpoint");
        Ok(url)
    }

    fn with_trace(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match TraceId::current() {
            Some(trace_id) => request.header(TRACE_ID_HEADER, trace_id.to_string()),
            None => request,
        }
    }
}

#[async_trait]
impl ReviewSource for HttpReviewSource {
    async fn reviews_for(&self, product_id: ProductId) -> Result<Vec<Review>, ReviewSourceError> {
        let url = self.reviews_url(product_id).await?;
        let response = self
            .with_trace(self.client.get(url))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_reviews(body.as_ref(), product_id)
    }

    async fn add_review(&self, review: &Review) -> Result<ReviewReceipt, ReviewSourceError> {
        let product_id = review.product_id();
        let url = self.reviews_url(product_id).await?;
        let response = self
            .with_trace(self.client.post(url))
            .header(header::ACCEPT, "application/json")
            .json(&ReviewDto::from_domain(review))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let review_id = parse_review_id(body.as_ref(), location.as_deref())?;
        Ok(ReviewReceipt {
            product_id,
            review_id,
        })
    }
}

fn reviews_url(base: &Url, product_id: ProductId) -> Result<Url, ReviewSourceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| {
            ReviewSourceError::unavailable(format!("review service address {base} has no path"))
        })?
        .pop_if_empty()
        .push(&product_id.to_string())
        .push("reviews");
    Ok(url)
}

fn parse_reviews(body: &[u8], product_id: ProductId) -> Result<Vec<Review>, ReviewSourceError> {
    let decoded: Vec<ReviewDto> = serde_json::from_slice(body).map_err(|error| {
        ReviewSourceError::decode(format!("invalid review list payload: {error}"))
    })?;
    Ok(decoded
        .into_iter()
        .map(|dto| dto.into_domain(product_id))
        .collect())
}

fn parse_review_id(body: &[u8], location: Option<&str>) -> Result<ReviewId, ReviewSourceError> {
    serde_json::from_slice::<CreatedReviewDto>(body)
        .ok()
        .and_then(CreatedReviewDto::into_review_id)
        .or_else(|| location.and_then(review_id_from_location))
        .ok_or_else(|| {
            ReviewSourceError::decode("review service response carried no review id")
        })
}

fn review_id_from_location(location: &str) -> Option<ReviewId> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.trim().is_empty())
        .map(ReviewId::new)
}

fn map_transport_error(error: reqwest::Error) -> ReviewSourceError {
    if error.is_timeout() {
        ReviewSourceError::timeout(error.to_string())
    } else {
        ReviewSourceError::unavailable(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ReviewSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ReviewSourceError::timeout(message)
        }
        _ if status.is_server_error() => ReviewSourceError::unavailable(message),
        _ => ReviewSourceError::rejected(status.as_u16(), body_preview),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
#[path = "http_source_tests.rs"]
mod tests;

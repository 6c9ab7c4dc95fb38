use std::time::Duration;

use futures::StreamExt;
use likes_protocol::{endpoints, ErrorBody, FrameDecoder, HealthResponse, StreamFrame};
use likes_types::{ErrorCode, Like, LikeQuery, LikesQuery, LikesSummary};
use reqwest::Response;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Client for a running likes server.
#[derive(Clone, Debug)]
pub struct LikesClient {
    http: reqwest::Client,
    base_url: String,
}

impl LikesClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:10000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// A client whose requests, including whole streams, give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http(http, base_url))
    }

    fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let response = self.http.get(self.url(endpoints::HEALTH)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn get_like(&self, query: &LikeQuery) -> ClientResult<Like> {
        Ok(self.post(endpoints::GET_LIKE, query).await?.json().await?)
    }

    pub async fn get_likes_summary(&self, query: &LikesQuery) -> ClientResult<LikesSummary> {
        Ok(self.post(endpoints::GET_LIKES_SUMMARY, query).await?.json().await?)
    }

    /// Collect every streamed like.
    pub async fn list_likes(&self, query: &LikesQuery) -> ClientResult<Vec<Like>> {
        let mut likes = Vec::new();
        self.list_likes_each(query, |like| likes.push(like)).await?;
        Ok(likes)
    }

    /// Hand each like to `on_like` as soon as its frame arrives. Returns the
    /// number of likes received.
    pub async fn list_likes_each<F>(&self, query: &LikesQuery, mut on_like: F) -> ClientResult<usize>
    where
        F: FnMut(Like),
    {
        let response = self.post(endpoints::LIST_LIKES, query).await?;
        let mut body = response.bytes_stream();
        let mut decoder = FrameDecoder::new();
        let mut received = 0;
        while let Some(chunk) = body.next().await {
            for frame in decoder.push(&chunk?)? {
                match frame {
                    StreamFrame::Like(like) => {
                        received += 1;
                        on_like(like);
                    }
                    StreamFrame::Error(e) => return Err(ClientError::Remote(e)),
                }
            }
        }
        decoder.finish()?;
        debug!(received, "list_likes stream closed");
        Ok(received)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> ClientResult<Response> {
        let response = self.http.post(self.url(path)).json(query).send().await?;
        check(response).await
    }
}

/// Turn a non-success status into [`ClientError::Remote`].
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let bytes = response.bytes().await?;
    let body = serde_json::from_slice::<ErrorBody>(&bytes)
        .unwrap_or_else(|_| ErrorBody::new(ErrorCode::Internal, format!("HTTP {status}")));
    Err(ClientError::Remote(body))
}

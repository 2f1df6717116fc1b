use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::error::{AppError, AppResult};

use super::ProfileApi;
use super::match_logs;
use super::models::{MatchLog, MatchLogFilter, Profile, ProfileUpdate, ResourceId};
use super::profiles;

#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl ProfileClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|err| AppError::Config(format!("invalid base url `{base_url}`: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "base url `{base_url}` cannot carry a path"
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| AppError::Config(format!("unable to build http client: {err}")))?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn list_match_logs(
        &self,
        limit: u32,
        offset: u32,
        filter: &MatchLogFilter,
    ) -> AppResult<Vec<MatchLog>> {
        let endpoint = match_logs::list_endpoint();
        let query = match_logs::list_query(limit, offset, filter);
        let response: ListResponse<MatchLog> = self.get_json(&endpoint, Some(&query)).await?;
        Ok(response.into_items())
    }

    /// Pages through the match-log listing until a short or empty page.
    pub async fn list_all_match_logs(&self, filter: &MatchLogFilter) -> AppResult<Vec<MatchLog>> {
        let limit = match_logs::PAGE_SIZE;
        let mut offset = 0;
        let mut all = Vec::new();

        loop {
            let page = self.list_match_logs(limit, offset, filter).await?;
            let fetched = page.len();
            all.extend(page);
            info!(fetched, total = all.len(), "fetched match log page");

            if fetched < limit as usize {
                break;
            }
            offset += limit;
        }

        Ok(all)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &[String],
        query: Option<&[(String, String)]>,
    ) -> AppResult<T> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, "GET");
        let mut request = self.http.get(url).bearer_auth(&self.api_key);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        self.parse_json_response(response).await
    }

    async fn patch_json<B: Serialize>(
        &self,
        endpoint: &[String],
        body: &B,
    ) -> AppResult<reqwest::Response> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, "PATCH");
        let response = self
            .http
            .patch(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        Ok(response)
    }

    fn endpoint_url(&self, segments: &[String]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("base url `{}` cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn parse_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

impl ProfileApi for ProfileClient {
    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        let endpoint = profiles::list_endpoint();
        let response: ListResponse<Profile> = self.get_json(&endpoint, None).await?;
        Ok(response.into_items())
    }

    async fn set_active(&self, id: &ResourceId, active: bool) -> AppResult<()> {
        let endpoint = profiles::toggle_endpoint(id);
        let response = self
            .patch_json(&endpoint, &ProfileUpdate { active })
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "profile {id} no longer exists: {}",
                error_details(&body)
            )));
        }

        Err(map_api_error(status, &body))
    }
}

/// Listings arrive either as a bare array or wrapped in an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListResponse<T> {
    Bare(Vec<T>),
    Profiles { profiles: Vec<T> },
    Data { data: Vec<T> },
}

impl<T> ListResponse<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items)
            | ListResponse::Profiles { profiles: items }
            | ListResponse::Data { data: items } => items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = error_details(body);

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AppError::Auth(format!(
            "api key rejected ({status}): {message}. check FACE_RECOGNITION_API_KEY or run `facesync auth login`"
        ));
    }

    AppError::Server(format!("request failed ({status}): {message}"))
}

fn error_details(body: &str) -> String {
    parse_api_error_message(body).unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            "no error details in response body".to_string()
        } else {
            body.to_string()
        }
    })
}

fn parse_api_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).ok()?;
    let parts = [parsed.error, parsed.message]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>();

    if parts.is_empty() {
        return None;
    }

    Some(parts.join(": "))
}

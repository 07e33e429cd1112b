//! Slack Web API client implementing [`ChatApi`].
//!
//! Every method posts to `{base_url}/{method}` with the bot token. A body with `ok != true`
//! becomes [`FlipbotError::Api`]; HTTP 429 is reported with its retry-after and not retried.

use async_trait::async_trait;
use flipbot_core::{ChatApi, FileUpload, FlipbotError, HandlerError, Member, Result};
use reqwest::header::{AUTHORIZATION, RETRY_AFTER};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::config::BotConfig;

/// Page size for users.list.
const USERS_PAGE_LIMIT: u32 = 200;

fn http_error(e: reqwest::Error) -> FlipbotError {
    FlipbotError::Http(e.to_string())
}

/// Slack Web API over reqwest. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SlackApiClient {
    client: reqwest::Client,
    base_url: String,
    bot_token: String,
    app_token: Option<String>,
}

impl SlackApiClient {
    pub fn new(
        base_url: impl Into<String>,
        bot_token: impl Into<String>,
        app_token: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            app_token,
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(
            config.slack_api_url(),
            config.bot_token(),
            config.app_token().map(str::to_string),
        )
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Checks status and the `ok` flag, returning the JSON body.
    async fn read_response(method: &str, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(30);
            return Err(FlipbotError::Slack(format!(
                "{} rate limited, retry after {}s",
                method, retry_after
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FlipbotError::Http(format!("{} {}: {}", method, status, body)));
        }

        let body: Value = response.json().await.map_err(http_error)?;
        if body.get("ok").and_then(Value::as_bool) != Some(true) {
            let error = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            return Err(FlipbotError::api(method, error));
        }
        Ok(body)
    }

    /// JSON-bodied Web API call with the bot token.
    #[instrument(skip(self, payload))]
    pub async fn api_call(&self, method: &str, payload: &Value) -> Result<Value> {
        debug!(method = %method, "Slack API call");
        let response = self
            .client
            .post(self.method_url(method))
            .header(AUTHORIZATION, Self::bearer(&self.bot_token))
            .json(payload)
            .send()
            .await
            .map_err(http_error)?;
        Self::read_response(method, response).await
    }

    /// Form-encoded Web API call with the bot token, for read methods that do not take JSON.
    #[instrument(skip(self, params))]
    pub async fn api_form(&self, method: &str, params: &[(&str, String)]) -> Result<Value> {
        debug!(method = %method, "Slack API call (form)");
        let response = self
            .client
            .post(self.method_url(method))
            .header(AUTHORIZATION, Self::bearer(&self.bot_token))
            .form(params)
            .send()
            .await
            .map_err(http_error)?;
        Self::read_response(method, response).await
    }

    /// Calls auth.test and returns the bot's own user id.
    pub async fn auth_test(&self) -> Result<String> {
        let body = self.api_call("auth.test", &json!({})).await?;
        body.get("user_id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FlipbotError::api("auth.test", "missing user_id"))
    }

    /// Calls apps.connections.open with the app token and returns the websocket URL.
    pub async fn open_connection(&self) -> Result<String> {
        let app_token = self
            .app_token
            .as_deref()
            .ok_or_else(|| FlipbotError::Config("SLACK_APP_TOKEN is required for Socket Mode".into()))?;
        let method = "apps.connections.open";
        let response = self
            .client
            .post(self.method_url(method))
            .header(AUTHORIZATION, Self::bearer(app_token))
            .send()
            .await
            .map_err(http_error)?;
        let body = Self::read_response(method, response).await?;
        body.get("url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FlipbotError::api(method, "missing url"))
    }
}

#[async_trait]
impl ChatApi for SlackApiClient {
    async fn post_message(&self, channel: &str, text: &str) -> Result<String> {
        let body = self
            .api_call("chat.postMessage", &json!({ "channel": channel, "text": text }))
            .await?;
        Ok(body
            .get("ts")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    async fn add_reaction(&self, channel: &str, ts: &str, name: &str) -> Result<()> {
        self.api_call(
            "reactions.add",
            &json!({ "channel": channel, "timestamp": ts, "name": name }),
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn download_file(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, Self::bearer(&self.bot_token))
            .send()
            .await
            .map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(HandlerError::DownloadFailed {
                status: status.as_u16(),
            }
            .into());
        }
        let bytes = response.bytes().await.map_err(http_error)?;
        Ok(bytes.to_vec())
    }

    #[instrument(skip(self, upload), fields(channel = %upload.channel, filename = %upload.filename))]
    async fn upload_file(&self, upload: &FileUpload) -> Result<()> {
        let ticket = self
            .api_form(
                "files.getUploadURLExternal",
                &[
                    ("filename", upload.filename.clone()),
                    ("length", upload.bytes.len().to_string()),
                ],
            )
            .await?;
        let upload_url = ticket
            .get("upload_url")
            .and_then(Value::as_str)
            .ok_or_else(|| FlipbotError::api("files.getUploadURLExternal", "missing upload_url"))?;
        let file_id = ticket
            .get("file_id")
            .and_then(Value::as_str)
            .ok_or_else(|| FlipbotError::api("files.getUploadURLExternal", "missing file_id"))?;

        let response = self
            .client
            .post(upload_url)
            .header(AUTHORIZATION, Self::bearer(&self.bot_token))
            .body(upload.bytes.clone())
            .send()
            .await
            .map_err(http_error)?;
        if !response.status().is_success() {
            return Err(FlipbotError::Http(format!(
                "file upload failed with status {}",
                response.status()
            )));
        }

        let title = upload.title.as_deref().unwrap_or(&upload.filename);
        let mut payload = json!({
            "files": [{ "id": file_id, "title": title }],
            "channel_id": upload.channel,
        });
        if let Some(ref comment) = upload.initial_comment {
            payload["initial_comment"] = json!(comment);
        }
        self.api_call("files.completeUploadExternal", &payload).await?;
        Ok(())
    }

    async fn list_members(&self) -> Result<Vec<Member>> {
        let mut members = Vec::new();
        let mut cursor = String::new();
        loop {
            let mut params = vec![("limit", USERS_PAGE_LIMIT.to_string())];
            if !cursor.is_empty() {
                params.push(("cursor", cursor.clone()));
            }
            let page = self.api_form("users.list", &params).await?;

            if let Some(list) = page.get("members").and_then(Value::as_array) {
                members.extend(list.iter().filter_map(|m| {
                    Some(Member {
                        id: m.get("id")?.as_str()?.to_string(),
                        name: m.get("name")?.as_str()?.to_string(),
                    })
                }));
            }

            cursor = page
                .pointer("/response_metadata/next_cursor")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            if cursor.is_empty() {
                break;
            }
        }
        debug!(count = members.len(), "users.list done");
        Ok(members)
    }
}


// HTTP behaviour is covered in tests/slack_api_test.rs

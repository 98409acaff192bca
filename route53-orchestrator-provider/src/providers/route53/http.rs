//! Route 53 HTTP request methods (signing transport + response handling)

use async_trait::async_trait;
use chrono::Utc;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError, RequestExecutor};
use crate::types::{ApiRequest, ApiResponse, Credentials, HttpMethod};
use crate::utils::log_sanitizer::{redact_secret, truncate_for_log};
use crate::xml::XmlNode;

use super::decode;
use super::sign::canonical_query_string;
use super::{Route53Client, SigV4Executor};

#[async_trait]
impl RequestExecutor for SigV4Executor {
    async fn execute(
        &self,
        request: &ApiRequest,
        credentials: &Credentials,
    ) -> Result<ApiResponse> {
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

        // 1. Signature
        let authorization = Self::sign(request, credentials, &amz_date);

        // 2. URL (query encoded exactly as signed)
        let query = canonical_query_string(&request.query);
        let url = if query.is_empty() {
            format!("https://{}{}", request.host, request.path)
        } else {
            format!("https://{}{}?{query}", request.host, request.path)
        };

        log::debug!(
            "[{}] Signing as {}",
            crate::PROVIDER_NAME,
            redact_secret(&credentials.access_key_id)
        );

        // 3. Request
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .header("X-Amz-Date", &amz_date)
        .header("Authorization", authorization);

        if let Some(token) = &credentials.session_token {
            builder = builder.header("X-Amz-Security-Token", token);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        HttpUtils::execute_request_with_retry(
            builder,
            crate::PROVIDER_NAME,
            request.method.as_str(),
            &url,
            self.max_retries,
        )
        .await
    }
}

impl Route53Client {
    /// Build, execute and parse one API call.
    ///
    /// Non-2xx responses are decoded as Route 53 error documents and mapped through
    /// [`ProviderErrorMapper`].
    pub(crate) async fn call(
        &self,
        method: HttpMethod,
        resource: &str,
        query: Vec<(String, String)>,
        body: Option<String>,
        ctx: ErrorContext,
    ) -> Result<XmlNode> {
        let request = self.config.request(method, resource, query, body);
        let response = self.executor.execute(&request, &self.credentials).await?;

        if !response.is_success() {
            return Err(self.response_error(&response, ctx));
        }

        self.parser.parse(&response.body)
    }

    fn response_error(&self, response: &ApiResponse, ctx: ErrorContext) -> crate::ProviderError {
        if let Ok(root) = self.parser.parse(&response.body)
            && let Some(raw) = decode::error_response(&root)
        {
            log::error!(
                "API error: {} - {}",
                raw.code.as_deref().unwrap_or("-"),
                raw.message
            );
            return self.map_error(raw, ctx);
        }

        // 无法解析为结构化错误
        self.unknown_error(RawApiError::with_code(
            format!("HTTP {}", response.status),
            truncate_for_log(&response.body),
        ))
    }
}

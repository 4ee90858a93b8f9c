//! Reqwest-backed adapter for the upstream employee REST service.
//!
//! This adapter owns transport details only: URL building, request bodies,
//! the client timeout, HTTP status classification and envelope decoding.
//! Which of those classes matter to callers is decided in the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{CreateEmployeeBody, DeleteEmployeeBody, EmployeeDto, EnvelopeDto};
use crate::domain::ports::{EmployeeUpstream, EmployeeUpstreamError};
use crate::domain::{CreationRequest, Employee, EmployeeId};

/// Upstream adapter issuing one HTTP request per port call.
pub struct HttpEmployeeUpstream {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeUpstream {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// `base_url` is the employee collection, e.g.
    /// `http://localhost:8112/api/v1/employee`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn record_url(&self, id: &EmployeeId) -> Result<Url, EmployeeUpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                EmployeeUpstreamError::rejected(format!(
                    "base url {} cannot carry an id segment",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(id.as_ref());
        Ok(url)
    }

    async fn execute<T>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, EmployeeUpstreamError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let envelope = decode_envelope::<T>(body.as_ref())?;
        debug!(
            status = status.as_u16(),
            upstream_status = envelope.status.as_deref().unwrap_or_default(),
            "employee upstream responded"
        );
        Ok(envelope.data)
    }
}

#[async_trait]
impl EmployeeUpstream for HttpEmployeeUpstream {
    async fn fetch_all(&self) -> Result<Vec<Employee>, EmployeeUpstreamError> {
        let records: Option<Vec<EmployeeDto>> =
            self.execute(self.client.get(self.base_url.clone())).await?;
        records
            .unwrap_or_default()
            .into_iter()
            .map(into_employee)
            .collect()
    }

    async fn fetch_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeUpstreamError> {
        let url = self.record_url(id)?;
        let record: Option<EmployeeDto> = self.execute(self.client.get(url)).await?;
        record.map(into_employee).transpose()
    }

    async fn submit(&self, request: &CreationRequest) -> Result<Employee, EmployeeUpstreamError> {
        let body = CreateEmployeeBody::from(request);
        let record: Option<EmployeeDto> = self
            .execute(self.client.post(self.base_url.clone()).json(&body))
            .await?;
        let record = record.ok_or_else(|| {
            EmployeeUpstreamError::decode("create response carried no employee record")
        })?;
        into_employee(record)
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, EmployeeUpstreamError> {
        let body = DeleteEmployeeBody { name };
        let deleted: Option<bool> = self
            .execute(self.client.delete(self.base_url.clone()).json(&body))
            .await?;
        Ok(deleted.unwrap_or(false))
    }
}

fn into_employee(record: EmployeeDto) -> Result<Employee, EmployeeUpstreamError> {
    record.into_domain().map_err(EmployeeUpstreamError::decode)
}

fn decode_envelope<T>(body: &[u8]) -> Result<EnvelopeDto<T>, EmployeeUpstreamError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        EmployeeUpstreamError::decode(format!(
            "invalid employee envelope: {error}; body: {}",
            body_preview(body)
        ))
    })
}

fn map_transport_error(error: reqwest::Error) -> EmployeeUpstreamError {
    if error.is_timeout() {
        EmployeeUpstreamError::timeout(error.to_string())
    } else {
        EmployeeUpstreamError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> EmployeeUpstreamError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => EmployeeUpstreamError::rate_limited(message),
        StatusCode::NOT_FOUND => EmployeeUpstreamError::not_found(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            EmployeeUpstreamError::timeout(message)
        }
        _ if status.is_client_error() => EmployeeUpstreamError::rejected(message),
        _ => EmployeeUpstreamError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
        format!("{preview}...")
    } else {
        compact
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network helpers; wire behaviour is exercised in
    //! `tests/upstream_http_client.rs`.

    use super::*;
    use rstest::rstest;

    fn adapter(base: &str) -> HttpEmployeeUpstream {
        HttpEmployeeUpstream::new(Url::parse(base).expect("valid url"), Duration::from_secs(1))
            .expect("client builds")
    }

    #[rstest]
    #[case::plain("http://upstream/api/v1/employee", "http://upstream/api/v1/employee/42")]
    #[case::trailing_slash(
        "http://upstream/api/v1/employee/",
        "http://upstream/api/v1/employee/42"
    )]
    fn record_url_appends_one_segment(#[case] base: &str, #[case] expected: &str) {
        let id = EmployeeId::new("42").expect("id");
        let url = adapter(base).record_url(&id).expect("url");
        assert_eq!(url.as_str(), expected);
    }

    #[test]
    fn record_url_escapes_the_id() {
        let id = EmployeeId::new("a/b c").expect("id");
        let url = adapter("http://upstream/employee")
            .record_url(&id)
            .expect("url");
        assert_eq!(url.as_str(), "http://upstream/employee/a%2Fb%20c");
    }

    #[rstest]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS, "rate_limited")]
    #[case::not_found(StatusCode::NOT_FOUND, "not_found")]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "timeout")]
    #[case::bad_request(StatusCode::BAD_REQUEST, "rejected")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "transport")]
    #[case::unavailable(StatusCode::SERVICE_UNAVAILABLE, "transport")]
    fn maps_http_statuses_to_port_errors(#[case] status: StatusCode, #[case] expected: &str) {
        let error = map_status_error(status, b"{\"status\":\"failed\"}");
        let kind = match error {
            EmployeeUpstreamError::RateLimited { .. } => "rate_limited",
            EmployeeUpstreamError::NotFound { .. } => "not_found",
            EmployeeUpstreamError::Timeout { .. } => "timeout",
            EmployeeUpstreamError::Rejected { .. } => "rejected",
            EmployeeUpstreamError::Transport { .. } => "transport",
            EmployeeUpstreamError::Decode { .. } => "decode",
        };
        assert_eq!(kind, expected);
    }

    #[test]
    fn status_messages_carry_a_compacted_preview() {
        let error = map_status_error(StatusCode::BAD_GATEWAY, b"upstream\n   is   down");
        assert_eq!(
            error,
            EmployeeUpstreamError::transport("status 502: upstream is down")
        );
    }

    #[test]
    fn empty_bodies_report_the_status_only() {
        let error = map_status_error(StatusCode::TOO_MANY_REQUESTS, b"");
        assert_eq!(error, EmployeeUpstreamError::rate_limited("status 429"));
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn non_envelope_bodies_are_decode_errors() {
        let error = decode_envelope::<Vec<EmployeeDto>>(b"<html>oops</html>")
            .expect_err("not JSON");
        assert!(matches!(error, EmployeeUpstreamError::Decode { .. }));
    }
}

//! Typed client for the air quality REST API

use std::sync::Arc;

use async_trait::async_trait;

use airwatch_model::{ErrorBody, NewWard, Reading, Ward};

use crate::io::{HttpClient, HttpResponse};
use crate::{AirwatchError, Result};

/// The four operations the backend exposes.
///
/// Controllers depend on this trait so tests can drive them with a mock
/// instead of a live server.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait AirQualityApi: Send + Sync {
    /// GET /api/data
    async fn list_readings(&self) -> Result<Vec<Reading>>;

    /// GET /api/wards
    async fn list_wards(&self) -> Result<Vec<Ward>>;

    /// POST /api/wards, returning the created ward with its assigned id
    async fn create_ward(&self, ward: &NewWard) -> Result<Ward>;

    /// DELETE /api/wards/{id}
    async fn delete_ward(&self, id: &str) -> Result<()>;
}

/// Production API client speaking HTTP/JSON against a base URL
pub struct RestClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into();
        tracing::debug!("Created RestClient for {}", base_url);
        Self { base_url, http }
    }

    pub fn from_config(config: &crate::Config, http: Arc<dyn HttpClient>) -> Self {
        Self::new(config.base_url.clone(), http)
    }

    /// Map a non-2xx response to an API error, parsing the optional
    /// `{message}` body when the server provides one.
    fn check_status(response: &HttpResponse) -> Result<()> {
        if (200..300).contains(&response.status) {
            return Ok(());
        }
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| "request failed".to_string());
        Err(AirwatchError::Api {
            status: response.status,
            message,
        })
    }
}

#[async_trait]
impl AirQualityApi for RestClient {
    async fn list_readings(&self) -> Result<Vec<Reading>> {
        let url = format!("{}/api/data", self.base_url);
        let response = self.http.get(&url).await?;
        Self::check_status(&response)?;
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn list_wards(&self) -> Result<Vec<Ward>> {
        let url = format!("{}/api/wards", self.base_url);
        let response = self.http.get(&url).await?;
        Self::check_status(&response)?;
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn create_ward(&self, ward: &NewWard) -> Result<Ward> {
        let url = format!("{}/api/wards", self.base_url);
        let body = serde_json::to_string(ward)?;
        let response = self.http.post_json(&url, &body).await?;
        Self::check_status(&response)?;
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn delete_ward(&self, id: &str) -> Result<()> {
        let url = format!("{}/api/wards/{}", self.base_url, id);
        let response = self.http.delete(&url).await?;
        Self::check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MockHttpClient;
    use airwatch_model::{Facility, FacilityType};

    const BASE: &str = "http://localhost:3000";

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn list_readings_hits_data_endpoint() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://localhost:3000/api/data")
            .returning(|_| {
                Box::pin(async {
                    Ok(ok(r#"[{"airQuality": 87.0, "timestamp": "2024-03-01T10:15:00Z"}]"#))
                })
            });

        let client = RestClient::new(BASE, Arc::new(mock));
        let readings = client.list_readings().await.unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].air_quality, 87.0);
    }

    #[tokio::test]
    async fn list_readings_propagates_http_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Box::pin(async { Err(AirwatchError::Http("connection refused".to_string())) })
        });

        let client = RestClient::new(BASE, Arc::new(mock));
        let err = client.list_readings().await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn list_readings_rejects_invalid_json() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_| Box::pin(async { Ok(ok("not json")) }));

        let client = RestClient::new(BASE, Arc::new(mock));
        let err = client.list_readings().await.unwrap_err();
        assert!(matches!(err, AirwatchError::Json(_)));
    }

    #[tokio::test]
    async fn list_wards_hits_wards_endpoint() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://localhost:3000/api/wards")
            .returning(|_| {
                Box::pin(async { Ok(ok(r#"[{"_id": "1", "name": "Ward A"}]"#)) })
            });

        let client = RestClient::new(BASE, Arc::new(mock));
        let wards = client.list_wards().await.unwrap();
        assert_eq!(wards[0].id, "1");
    }

    #[tokio::test]
    async fn create_ward_posts_exact_payload() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .withf(|url, body| {
                let sent: serde_json::Value = serde_json::from_str(body).unwrap();
                url == "http://localhost:3000/api/wards"
                    && sent["name"] == "Ward A"
                    && sent["link"] == ""
                    && sent["facilities"][0]["type"] == "Hospital"
                    && sent["facilities"][0]["name"] == "City Hospital"
            })
            .returning(|_, _| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 201,
                        body: r#"{"_id": "1", "name": "Ward A", "link": "", "facilities": [
                            {"type": "Hospital", "name": "City Hospital", "link": ""}
                        ]}"#
                        .to_string(),
                    })
                })
            });

        let client = RestClient::new(BASE, Arc::new(mock));
        let created = client
            .create_ward(&NewWard {
                name: "Ward A".to_string(),
                link: String::new(),
                facilities: vec![Facility {
                    facility_type: FacilityType::Hospital,
                    name: "City Hospital".to_string(),
                    link: String::new(),
                }],
            })
            .await
            .unwrap();
        assert_eq!(created.id, "1");
    }

    #[tokio::test]
    async fn create_ward_surfaces_server_message_on_failure() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 422,
                    body: r#"{"message": "name already taken"}"#.to_string(),
                })
            })
        });

        let client = RestClient::new(BASE, Arc::new(mock));
        let err = client
            .create_ward(&NewWard {
                name: "Ward A".to_string(),
                link: String::new(),
                facilities: vec![],
            })
            .await
            .unwrap_err();
        match err {
            AirwatchError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "name already taken");
            }
            other => panic!("expected AirwatchError::Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_ward_defaults_message_on_unparseable_error_body() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 500,
                    body: "<html>oops</html>".to_string(),
                })
            })
        });

        let client = RestClient::new(BASE, Arc::new(mock));
        let err = client
            .create_ward(&NewWard {
                name: "Ward A".to_string(),
                link: String::new(),
                facilities: vec![],
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("request failed"));
    }

    #[tokio::test]
    async fn delete_ward_targets_id_path() {
        let mut mock = MockHttpClient::new();
        mock.expect_delete()
            .withf(|url| url == "http://localhost:3000/api/wards/65f1")
            .returning(|_| Box::pin(async { Ok(ok("")) }));

        let client = RestClient::new(BASE, Arc::new(mock));
        client.delete_ward("65f1").await.unwrap();
    }

    #[tokio::test]
    async fn from_config_uses_configured_base_url() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://localhost:9999/api/data")
            .returning(|_| Box::pin(async { Ok(ok("[]")) }));

        let config = crate::Config {
            base_url: "http://localhost:9999".to_string(),
            ..crate::Config::default()
        };
        let client = RestClient::from_config(&config, Arc::new(mock));
        assert!(client.list_readings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_ward_errors_on_non_2xx() {
        let mut mock = MockHttpClient::new();
        mock.expect_delete().returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 404,
                    body: String::new(),
                })
            })
        });

        let client = RestClient::new(BASE, Arc::new(mock));
        let err = client.delete_ward("missing").await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}

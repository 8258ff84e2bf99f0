use super::{FetchError, FetchResult, SunTimes, SunTimesProvider};
use crate::console::console;
use crate::coordinates::Coordinates;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.sunrise-sunset.org";

const STATUS_OK: &str = "OK";

#[derive(Debug, Clone)]
pub struct SunriseSunsetConfig {
    pub base_url: String,
    /// Whole-request timeout. `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

impl Default for SunriseSunsetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

/// Client for the api.sunrise-sunset.org JSON endpoint.
pub struct SunriseSunsetClient {
    client: reqwest::Client,
    config: SunriseSunsetConfig,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Option<Value>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResults {
    sunrise: String,
    sunset: String,
}

impl SunriseSunsetClient {
    pub fn new(config: SunriseSunsetConfig) -> FetchResult<Self> {
        let mut client_builder = reqwest::Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build().map_err(|e| {
            FetchError::connectivity(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/json", self.config.base_url.trim_end_matches('/'))
    }

    fn query(coordinates: Coordinates, date: Option<NaiveDate>) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("lat", coordinates.latitude.to_string()),
            ("lng", coordinates.longitude.to_string()),
            ("formatted", "0".to_string()),
        ];
        if let Some(date) = date {
            query.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        query
    }
}

#[async_trait]
impl SunTimesProvider for SunriseSunsetClient {
    async fn fetch(
        &self,
        coordinates: Coordinates,
        date: Option<NaiveDate>,
    ) -> FetchResult<SunTimes> {
        let url = self.endpoint();
        console().verbose(&format!(
            "Requesting sun times for {} from {}",
            coordinates, url
        ));

        let response = self
            .client
            .get(&url)
            .query(&Self::query(coordinates, date))
            .send()
            .await
            .map_err(|e| FetchError::connectivity(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            FetchError::connectivity(format!("Failed to read response body: {}", e))
        })?;
        console().debug(&format!("API responded {}: {}", status.as_u16(), body));

        if status != reqwest::StatusCode::OK {
            return Err(FetchError::data(format!(
                "API returned HTTP {}",
                status.as_u16()
            )));
        }

        parse_sun_times(&body)
    }

    fn provider_name(&self) -> &'static str {
        "sunrise-sunset.org"
    }
}

/// Extracts sunrise and sunset from a `formatted=0` response body.
pub(crate) fn parse_sun_times(body: &str) -> FetchResult<SunTimes> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::data(format!("response is not valid JSON: {}", e)))?;

    if let Some(status) = response.status.as_deref()
        && status != STATUS_OK
    {
        return Err(FetchError::data(format!("API reported status {}", status)));
    }

    let results = response
        .results
        .ok_or_else(|| FetchError::data("response has no results"))?;
    let results: ApiResults = serde_json::from_value(results)
        .map_err(|e| FetchError::data(format!("malformed results: {}", e)))?;

    Ok(SunTimes::new(
        parse_timestamp("sunrise", &results.sunrise)?,
        parse_timestamp("sunset", &results.sunset)?,
    ))
}

fn parse_timestamp(field: &str, value: &str) -> FetchResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|e| {
            FetchError::data(format!(
                "{} '{}' is not an ISO-8601 timestamp: {}",
                field, value, e
            ))
        })
}

#[cfg(test)]
#[path = "sunrise_sunset_tests.rs"]
mod tests;

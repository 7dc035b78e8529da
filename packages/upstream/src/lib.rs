// ABOUTME: Outbound HTTP client for third-party services
// ABOUTME: Astronaut roster fetch and fixed-URL status echo, timeout-bounded

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Upstream call errors. All of them map to "upstream unavailable" for the
/// caller; nothing here is retried.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upstream returned an unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to build upstream client: {0}")]
    Client(reqwest::Error),
}

/// People currently in space, reshaped from the astronaut API payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Astronauts {
    pub count: usize,
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AstrosPayload {
    people: Vec<Person>,
}

#[derive(Debug, Deserialize)]
struct Person {
    name: String,
}

/// Shared outbound client. Built once at startup; every request carries an
/// explicit timeout so a dead upstream cannot hang a handler.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    astros_url: String,
}

impl UpstreamClient {
    pub fn new(astros_url: String, timeout: Duration) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self { http, astros_url })
    }

    /// GET a URL and report the numeric status code.
    pub async fn status_of(&self, url: &str) -> Result<u16, UpstreamError> {
        debug!("Probing upstream: {}", url);

        let response = self.http.get(url).send().await?;
        Ok(response.status().as_u16())
    }

    /// Fetch the astronaut roster and reshape it into a count plus names.
    pub async fn astronauts(&self) -> Result<Astronauts, UpstreamError> {
        debug!("Fetching astronaut roster: {}", self.astros_url);

        let body = self.http.get(&self.astros_url).send().await?.text().await?;
        let astronauts = parse_astros(&body)?;

        info!("Upstream reports {} people in space", astronauts.count);
        Ok(astronauts)
    }
}

fn parse_astros(body: &str) -> Result<Astronauts, serde_json::Error> {
    let payload: AstrosPayload = serde_json::from_str(body)?;
    let names = payload.people.into_iter().map(|p| p.name).collect::<Vec<_>>();
    Ok(Astronauts {
        count: names.len(),
        names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_astros_counts_people() {
        let body = r#"{
            "message": "success",
            "number": 3,
            "people": [
                {"name": "Oleg Kononenko", "craft": "ISS"},
                {"name": "Nikolai Chub", "craft": "ISS"},
                {"name": "Tracy Dyson", "craft": "ISS"}
            ]
        }"#;

        let astronauts = parse_astros(body).unwrap();
        assert_eq!(astronauts.count, 3);
        assert_eq!(
            astronauts.names,
            vec!["Oleg Kononenko", "Nikolai Chub", "Tracy Dyson"]
        );
    }

    #[test]
    fn test_parse_astros_empty_roster() {
        let astronauts = parse_astros(r#"{"people": []}"#).unwrap();
        assert_eq!(astronauts.count, 0);
        assert!(astronauts.names.is_empty());
    }

    #[test]
    fn test_parse_astros_rejects_non_json() {
        assert!(parse_astros("<html>not json</html>").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_a_request_error() {
        let client = UpstreamClient::new(
            // Reserved TEST-NET-1 address, nothing listens there
            "http://192.0.2.1:9/astros.json".to_string(),
            Duration::from_millis(200),
        )
        .unwrap();

        let err = client.astronauts().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Request(_)));
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::sparql;
use super::{Implementation, StoreError, TripleStore};
use crate::model::{Node, Triple, TriplePattern};

/// SynBioHub SPARQL endpoint client.
///
/// Queries go to `{server}/sparql` as authenticated GET requests; the
/// session token comes from [`SynBioHubClient::login`]. A spoofed URL lets a
/// staging instance answer queries against the production graph name.
pub struct SynBioHubClient {
    server: String,
    spoofed_url: Option<String>,
    token: Option<String>,
    client: Client,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl SynBioHubClient {
    /// Creates a client for the given SynBioHub server URL.
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into().trim_end_matches('/').to_string(),
            spoofed_url: None,
            token: None,
            client: Client::new(),
        }
    }

    /// Sets the graph URL to spoof (query a staging server as if it were
    /// the production instance).
    pub fn with_spoofed_url(mut self, url: impl Into<String>) -> Self {
        self.spoofed_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// The server this client talks to.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Authenticate and store the session token.
    pub async fn login(&mut self, user: &str, password: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .post(format!("{}/login", self.server))
            .header("Accept", "text/plain")
            .json(&LoginRequest {
                email: user,
                password,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::LoginFailed(format!("{} - {}", status, message)));
        }

        let token = response.text().await?;
        if token.is_empty() {
            return Err(StoreError::LoginFailed("empty session token".to_string()));
        }
        self.token = Some(token);
        Ok(())
    }

    /// True once `login` has succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    async fn execute(&self, query: &str) -> Result<sparql::SparqlResults, StoreError> {
        let token = self.token.as_ref().ok_or(StoreError::NotAuthenticated)?;
        debug!("Query is {}", query);

        let graph = self.spoofed_url.as_deref().unwrap_or(&self.server);
        let response = self
            .client
            .get(format!("{}/sparql", self.server))
            .header("Accept", "application/json")
            .header("X-authorization", token)
            .query(&[("query", query), ("default-graph-uri", graph)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl TripleStore for SynBioHubClient {
    async fn query(&self, pattern: &TriplePattern) -> Result<Vec<Triple>, StoreError> {
        let query = sparql::render(pattern)?;
        let results = self.execute(&query).await?;
        results.into_triples(pattern)
    }

    async fn implementations(
        &self,
        object: &Node,
        media: Option<&Node>,
    ) -> Result<Vec<Implementation>, StoreError> {
        let query = sparql::render_implementations(object, media);
        let results = self.execute(&query).await?;

        let mut implementations = Vec::with_capacity(results.results.bindings.len());
        for row in results.results.bindings {
            let uri = row
                .get("s")
                .map(|v| Node::new(v.value.clone()))
                .ok_or_else(|| {
                    StoreError::ParseError("result row is missing binding for ?s".to_string())
                })?;
            let title = row.get("title").map(|v| v.value.clone()).ok_or_else(|| {
                StoreError::ParseError("result row is missing binding for ?title".to_string())
            })?;
            implementations.push(Implementation { uri, title });
        }
        Ok(implementations)
    }
}

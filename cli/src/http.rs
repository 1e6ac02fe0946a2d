//! The host side of the host-does-IO split: executes `HttpRequest` values
//! built by the core over real HTTP with ureq.

use items_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

/// Blocking HTTP executor wrapping a single ureq agent.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data for the core's parse methods to interpret;
/// only genuine round-trip failures become `ApiError::Transport`.
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

//! Front page download using ureq (simple blocking HTTP)

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;

pub fn build_agent(config: &ScraperConfig) -> ureq::Agent {
    ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .user_agent(config.user_agent.as_str())
            .http_status_as_error(false)
            .build(),
    )
}

/// GET `config.url` and return the body as text.
///
/// Any non-2xx status is a [`ScrapeError::Http`]; nothing is extracted from
/// error pages.
pub fn fetch_page(config: &ScraperConfig) -> Result<String, ScrapeError> {
    let url = url::Url::parse(&config.url).map_err(|e| ScrapeError::InvalidUrl {
        url: config.url.clone(),
        message: e.to_string(),
    })?;

    let agent = build_agent(config);
    let started = Instant::now();

    let resp = agent.get(url.as_str()).call().map_err(|e| ScrapeError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp
        .into_body()
        .read_to_string()
        .map_err(|e| ScrapeError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    info!(
        url = %url,
        bytes = body.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fetched front page"
    );
    Ok(body)
}

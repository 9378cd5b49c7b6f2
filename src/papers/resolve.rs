use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::types::{FoundPaper, ResolutionOutcome};

/// Classification of a single candidate probe. `Miss` and `Fault` share
/// control flow (advance to the next candidate) but log differently.
enum ProbeOutcome {
    /// Success status with a PDF content type. Payload present only when
    /// direct delivery is enabled.
    Pdf(Option<Vec<u8>>),
    /// Fetch completed but the response is not the document we want.
    Miss { status: u16, content_type: String },
    /// Transport-level failure: timeout, DNS, connection reset.
    Fault(reqwest::Error),
}

/// Probes candidate URLs in order until one resolves to a real PDF.
pub struct PaperResolver {
    client: reqwest::Client,
    send_direct: bool,
}

impl PaperResolver {
    pub fn new(fetch_timeout: Duration, send_direct: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(fetch_timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            send_direct,
        })
    }

    /// Probe each candidate once, in order, and stop at the first match.
    ///
    /// Misses and transport faults are swallowed here at debug level; the
    /// caller only ever sees `Found` or `Exhausted`. Exhaustion carries the
    /// full attempted list — trimming it for display is the caller's call.
    pub async fn resolve(&self, candidates: &[String]) -> ResolutionOutcome {
        for url in candidates {
            match self.probe(url).await {
                ProbeOutcome::Pdf(payload) => {
                    let filename =
                        url.rsplit('/').next().unwrap_or(url).to_string();
                    debug!(url = %url, filename = %filename, "candidate matched");
                    return ResolutionOutcome::Found(FoundPaper {
                        url: url.clone(),
                        filename,
                        payload,
                    });
                }
                ProbeOutcome::Miss {
                    status,
                    content_type,
                } => {
                    debug!(url = %url, status, content_type = %content_type, "candidate is not a PDF");
                }
                ProbeOutcome::Fault(e) => {
                    debug!(url = %url, error = %e, "candidate fetch failed");
                }
            }
        }
        ResolutionOutcome::Exhausted {
            attempted: candidates.to_vec(),
        }
    }

    /// One timeout-bounded GET; no retry of the same candidate.
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let resp = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => return ProbeOutcome::Fault(e),
        };

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if !status.is_success() || !content_type.starts_with("application/pdf") {
            return ProbeOutcome::Miss {
                status: status.as_u16(),
                content_type,
            };
        }

        if !self.send_direct {
            // Redirect-link-only mode: the headers were enough, skip the body.
            return ProbeOutcome::Pdf(None);
        }

        match resp.bytes().await {
            Ok(body) => ProbeOutcome::Pdf(Some(body.to_vec())),
            Err(e) => ProbeOutcome::Fault(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::papers::patterns::candidate_urls;
    use crate::papers::types::Paper;

    fn resolver(send_direct: bool) -> PaperResolver {
        PaperResolver::new(Duration::from_secs(5), send_direct).unwrap()
    }

    #[tokio::test]
    async fn first_match_short_circuits_even_without_paper_selector() {
        let mut server = mockito::Server::new_async().await;
        let hit = server
            .mock("GET", "/2014_1.pdf")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body("%PDF-1.4")
            .create_async()
            .await;
        let never = server
            .mock("GET", "/2014_1_English.pdf")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body("%PDF-1.4")
            .expect(0)
            .create_async()
            .await;

        let candidates = candidate_urls(&server.url(), "2014", None);
        assert_eq!(candidates[0], format!("{}/2014_1.pdf", server.url()));

        match resolver(false).resolve(&candidates).await {
            ResolutionOutcome::Found(found) => {
                assert_eq!(found.url, candidates[0]);
                assert_eq!(found.filename, "2014_1.pdf");
                assert!(found.payload.is_none());
            }
            other => panic!("expected Found, got {other:?}"),
        }

        hit.assert_async().await;
        never.assert_async().await;
    }

    #[tokio::test]
    async fn exact_paper_request_terminates_on_first_success() {
        let mut server = mockito::Server::new_async().await;
        let _miss = server
            .mock("GET", "/2019_1.pdf")
            .with_status(404)
            .create_async()
            .await;
        let hit = server
            .mock("GET", "/2019_1_English.pdf")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body("%PDF-1.4")
            .create_async()
            .await;
        let never = server
            .mock("GET", "/2019_1_Hindi.pdf")
            .expect(0)
            .create_async()
            .await;

        let candidates = candidate_urls(&server.url(), "2019", Some(Paper::One));
        match resolver(false).resolve(&candidates).await {
            ResolutionOutcome::Found(found) => {
                assert_eq!(found.filename, "2019_1_English.pdf");
            }
            other => panic!("expected Found, got {other:?}"),
        }

        hit.assert_async().await;
        never.assert_async().await;
    }

    #[tokio::test]
    async fn non_pdf_content_type_is_a_miss() {
        let mut server = mockito::Server::new_async().await;
        let _html = server
            .mock("GET", "/2016_2.pdf")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<html>soft 404</html>")
            .create_async()
            .await;

        let candidates = candidate_urls(&server.url(), "2016", Some(Paper::Two));
        match resolver(false).resolve(&candidates).await {
            ResolutionOutcome::Exhausted { attempted } => {
                assert_eq!(attempted, candidates);
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn exhaustion_reports_full_attempted_list() {
        // No mocks registered: every candidate gets a non-success status.
        let server = mockito::Server::new_async().await;

        let candidates = candidate_urls(&server.url(), "2011", None);
        match resolver(false).resolve(&candidates).await {
            ResolutionOutcome::Exhausted { attempted } => {
                assert_eq!(attempted.len(), 8);
                assert_eq!(attempted, candidates);
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_fault_advances_to_next_candidate() {
        let mut server = mockito::Server::new_async().await;
        let hit = server
            .mock("GET", "/2018_1.pdf")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body("%PDF-1.4")
            .create_async()
            .await;

        // Nothing listens on port 9; connection is refused immediately.
        let candidates = vec![
            "http://127.0.0.1:9/2018_1.pdf".to_string(),
            format!("{}/2018_1.pdf", server.url()),
        ];
        match resolver(false).resolve(&candidates).await {
            ResolutionOutcome::Found(found) => {
                assert_eq!(found.url, candidates[1]);
            }
            other => panic!("expected Found, got {other:?}"),
        }
        hit.assert_async().await;
    }

    #[tokio::test]
    async fn direct_delivery_carries_payload_bytes() {
        let mut server = mockito::Server::new_async().await;
        let body = b"%PDF-1.4 fake paper".to_vec();
        let _hit = server
            .mock("GET", "/2015_2.pdf")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body(body.clone())
            .create_async()
            .await;

        let candidates = candidate_urls(&server.url(), "2015", Some(Paper::Two));
        match resolver(true).resolve(&candidates).await {
            ResolutionOutcome::Found(found) => {
                assert_eq!(found.payload.as_deref(), Some(body.as_slice()));
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }
}

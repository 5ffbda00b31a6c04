//! `check`: list versions changed since the last seen one

use std::io::{Read, Write};
use std::sync::Arc;

use eyre::WrapErr;
use netbox_resource_client::HttpClient;
use netbox_resource_core::{Checker, validate_input};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{read_input, write_json};
use crate::config::Config;

/// Run `check`, writing the ordered version list to `stdout`
pub async fn run(
    config: &Config,
    stdin: impl Read,
    stdout: impl Write,
    cancel: &CancellationToken,
) -> eyre::Result<()> {
    let input = read_input(stdin).wrap_err("input validation failed")?;
    let reference = validate_input(&input).wrap_err("input validation failed")?;
    debug!(source = ?input.source, "check input accepted");

    let http = config
        .http
        .build_client()
        .wrap_err("failed to build HTTP client")?;
    let client = HttpClient::with_client(&input.source.url, &input.source.token, http)
        .wrap_err("invalid NetBox source")?;

    let versions = Checker::new(Arc::new(client))
        .check(&input.source.filter, reference, cancel)
        .await
        .wrap_err("netbox query failed")?;

    write_json(stdout, &versions)
}

#[cfg(test)]
mod tests {
    use netbox_resource_core::ResolveError;

    use super::*;

    fn resolve_error(err: &eyre::Report) -> Option<&ResolveError> {
        err.chain().find_map(|e| e.downcast_ref::<ResolveError>())
    }

    #[tokio::test]
    async fn test_missing_url() {
        let mut stdout = Vec::new();
        let stdin = r#"{"source": {"url": "", "token": "your-api-token"}}"#;

        let err = run(&Config::default(), stdin.as_bytes(), &mut stdout, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(resolve_error(&err), Some(ResolveError::MissingUrl)));
        assert!(stdout.is_empty());
    }

    #[tokio::test]
    async fn test_empty_stdin_rejected() {
        let mut stdout = Vec::new();

        let err = run(&Config::default(), "".as_bytes(), &mut stdout, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(resolve_error(&err), Some(ResolveError::MissingUrl)));
    }

    #[tokio::test]
    async fn test_malformed_reference() {
        let mut stdout = Vec::new();
        let stdin = r#"{
            "source": {"url": "https://netbox.example.local"},
            "version": {"last_updated": "2023-10-01"}
        }"#;

        let err = run(&Config::default(), stdin.as_bytes(), &mut stdout, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(
            resolve_error(&err),
            Some(ResolveError::InvalidReference { .. })
        ));
    }

    #[tokio::test]
    async fn test_cancelled_before_query() {
        let mut stdout = Vec::new();
        let stdin = r#"{"source": {"url": "https://netbox.example.local", "token": "t"}}"#;
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = run(&Config::default(), stdin.as_bytes(), &mut stdout, &cancel)
            .await
            .unwrap_err();

        assert!(resolve_error(&err).is_some_and(ResolveError::is_cancelled));
        assert!(stdout.is_empty());
    }

    #[tokio::test]
    async fn test_first_check_with_null_version() {
        let mut stdout = Vec::new();
        let stdin = r#"{"source": {"url": "https://netbox.example.local", "filter": null}, "version": null}"#;
        let cancel = CancellationToken::new();
        cancel.cancel();

        // Decoding and validation pass; the run stops at the first query.
        let err = run(&Config::default(), stdin.as_bytes(), &mut stdout, &cancel)
            .await
            .unwrap_err();

        assert!(resolve_error(&err).is_some_and(ResolveError::is_cancelled));
    }
}

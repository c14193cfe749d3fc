//! Tests for the conformance runner

#[cfg(test)]
mod tests {
    use crate::{
        asserter::ErrorKind,
        runner::{CheckError, ConformanceRunner, Endpoint, ResponseSource, check_document},
    };
    use std::path::Path;

    /// Helper function to write a response document into a temp directory
    fn write_source(dir: &Path, name: &str, endpoint: Endpoint, json: &str) -> ResponseSource {
        let path = dir.join(name);
        std::fs::write(&path, json).unwrap();
        ResponseSource { endpoint, path }
    }

    #[test]
    fn test_check_document_dispatches_by_endpoint() {
        assert!(check_document(Endpoint::Metadata, r#"{"metadata": {}}"#).is_ok());
        assert!(
            check_document(
                Endpoint::Submit,
                r#"{"transaction_identifier": {"hash": "0x1"}}"#
            )
            .is_ok()
        );
        assert!(
            check_document(
                Endpoint::PublicKey,
                r#"{"hex_bytes": "02ff", "curve_type": "secp256k1"}"#
            )
            .is_ok()
        );
        assert!(check_document(Endpoint::Derive, r#"{"address": "addr1"}"#).is_ok());
    }

    #[test]
    fn test_check_document_reports_assertion_failures() {
        let err = check_document(Endpoint::Metadata, "{}").unwrap_err();
        match err {
            CheckError::Assertion { endpoint, source } => {
                assert_eq!(endpoint, Endpoint::Metadata);
                assert_eq!(source.kind(), ErrorKind::NilOrEmpty);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = check_document(Endpoint::Signatures, "[]").unwrap_err();
        assert!(matches!(err, CheckError::Assertion { .. }));

        let err = check_document(Endpoint::PublicKey, "null").unwrap_err();
        assert!(err.to_string().contains("public key cannot be nil"));
    }

    #[test]
    fn test_check_document_reports_decode_failures() {
        let err = check_document(Endpoint::Payloads, "not json").unwrap_err();
        assert!(matches!(
            err,
            CheckError::Decode {
                endpoint: Endpoint::Payloads,
                ..
            }
        ));
    }

    #[test]
    fn test_endpoint_names() {
        let endpoint: Endpoint = serde_json::from_str(r#""signing_payload""#).unwrap();
        assert_eq!(endpoint, Endpoint::SigningPayload);
        assert_eq!(endpoint.to_string(), "signing_payload");
    }

    #[tokio::test]
    async fn test_run_keeps_source_order() {
        let dir = tempfile::tempdir().unwrap();
        let sources = vec![
            write_source(dir.path(), "metadata.json", Endpoint::Metadata, r#"{"metadata": {}}"#),
            write_source(
                dir.path(),
                "combine.json",
                Endpoint::Signatures,
                r#"[{
                    "signing_payload": {"address": "a", "hex_bytes": "00", "signature_type": "ecdsa"},
                    "public_key": {"hex_bytes": "02", "curve_type": "secp256k1"},
                    "signature_type": "ed25519",
                    "hex_bytes": "ff"
                }]"#,
            ),
            write_source(
                dir.path(),
                "submit.json",
                Endpoint::Submit,
                r#"{"transaction_identifier": {"hash": "0xabc"}}"#,
            ),
        ];

        let report = ConformanceRunner::new(sources).run().await;

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert!(report.outcomes[0].result.is_ok());
        assert!(report.outcomes[2].result.is_ok());
        match &report.outcomes[1].result {
            Err(CheckError::Assertion { source, .. }) => {
                assert_eq!(source.kind(), ErrorKind::Mismatch);
                assert_eq!(source.index(), Some(0));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sources = vec![
            ResponseSource {
                endpoint: Endpoint::Derive,
                path: dir.path().join("absent.json"),
            },
            write_source(dir.path(), "derive.json", Endpoint::Derive, r#"{"address": "x"}"#),
        ];

        let report = ConformanceRunner::new(sources).run().await;

        assert_eq!(report.failed(), 1);
        assert!(matches!(report.outcomes[0].result, Err(CheckError::Io { .. })));
        assert!(report.outcomes[1].result.is_ok());
    }

    #[tokio::test]
    async fn test_default_config_fixtures_pass() {
        let config = crate::Config::load("config/default.toml").unwrap();
        assert!(!config.responses.is_empty());

        let report = ConformanceRunner::new(config.responses).run().await;
        assert!(report.is_success(), "{:?}", report.outcomes);
    }

    #[tokio::test]
    async fn test_empty_run_is_success() {
        let report = ConformanceRunner::new(Vec::new()).run().await;
        assert!(report.is_success());
        assert_eq!(report.passed(), 0);
    }
}

//! Tests for `ClientConfig`.

use url::Url;

use super::{ClientConfig, ConfigError, field};

mod construction {
    use super::*;

    #[test]
    fn valid_inputs_build_account_base_url() {
        let config = ClientConfig::new("contoso", "web", "pat").unwrap();

        assert_eq!(config.base_url().as_str(), "https://dev.azure.com/contoso/");
        assert_eq!(config.account(), "contoso");
        assert_eq!(config.project(), "web");
        assert_eq!(config.api_version(), ClientConfig::DEFAULT_API_VERSION);
        assert_eq!(config.user_agent(), None);
    }

    #[test]
    fn base_url_path_ends_with_slash() {
        let config = ClientConfig::new("contoso", "web", "pat").unwrap();

        assert!(config.base_url().path().ends_with('/'));
    }

    #[test]
    fn empty_account_is_rejected() {
        let err = ClientConfig::new("", "web", "pat").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: field::ACCOUNT
            }
        ));
        assert_eq!(
            err.to_string(),
            "Missing valid account in client configuration"
        );
    }

    #[test]
    fn empty_project_is_rejected() {
        let err = ClientConfig::new("contoso", "", "pat").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: field::PROJECT
            }
        ));
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = ClientConfig::new("contoso", "web", "").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: field::TOKEN
            }
        ));
    }

    #[test]
    fn first_empty_field_is_reported() {
        let err = ClientConfig::new("", "", "").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: field::ACCOUNT
            }
        ));
    }

    #[test]
    fn account_is_escaped_in_base_url() {
        let config = ClientConfig::new("my org", "web", "pat").unwrap();

        assert_eq!(config.base_url().as_str(), "https://dev.azure.com/my%20org/");
    }
}

mod builders {
    use super::*;

    #[test]
    fn with_host_keeps_account_segment() {
        let config = ClientConfig::new("DefaultCollection", "web", "pat")
            .unwrap()
            .with_host("https://tfs.example.com/tfs/")
            .unwrap();

        assert_eq!(
            config.base_url().as_str(),
            "https://tfs.example.com/tfs/DefaultCollection/"
        );
    }

    #[test]
    fn with_host_rejects_relative_url() {
        let err = ClientConfig::new("contoso", "web", "pat")
            .unwrap()
            .with_host("not a url")
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn with_host_rejects_cannot_be_base_url() {
        let err = ClientConfig::new("contoso", "web", "pat")
            .unwrap()
            .with_host("mailto:ops@example.com")
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn with_base_url_is_verbatim() {
        let base = Url::parse("http://localhost:8080/collection").unwrap();
        let config = ClientConfig::new("contoso", "web", "pat")
            .unwrap()
            .with_base_url(base.clone());

        assert_eq!(config.base_url(), &base);
    }

    #[test]
    fn empty_user_agent_disables_header() {
        let config = ClientConfig::new("contoso", "web", "pat")
            .unwrap()
            .with_user_agent("azdo/1.0")
            .unwrap()
            .with_user_agent("")
            .unwrap();

        assert_eq!(config.user_agent(), None);
    }

    #[test]
    fn api_version_is_configurable() {
        let config = ClientConfig::new("contoso", "web", "pat")
            .unwrap()
            .with_api_version("7.1")
            .unwrap();

        assert_eq!(config.api_version(), "7.1");
    }

    #[test]
    fn invalid_user_agent_is_rejected_when_set() {
        let err = ClientConfig::new("contoso", "web", "pat")
            .unwrap()
            .with_user_agent("bad\nagent")
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidUserAgent { .. }));
    }

    #[test]
    fn non_ascii_user_agent_is_rejected_when_set() {
        let err = ClientConfig::new("contoso", "web", "pat")
            .unwrap()
            .with_user_agent("azdo-café")
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidUserAgent { .. }));
    }

    #[test]
    fn blank_api_version_is_rejected() {
        for blank in ["", "  "] {
            let err = ClientConfig::new("contoso", "web", "pat")
                .unwrap()
                .with_api_version(blank)
                .unwrap_err();

            assert!(matches!(
                err,
                ConfigError::MissingField {
                    field: field::API_VERSION
                }
            ));
        }
    }
}

#[test]
fn debug_output_redacts_token() {
    let config = ClientConfig::new("contoso", "web", "super-secret-pat").unwrap();

    let debug = format!("{config:?}");

    assert!(!debug.contains("super-secret-pat"));
    assert!(debug.contains("[REDACTED]"));
}

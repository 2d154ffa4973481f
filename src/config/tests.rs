#[cfg(test)]
mod config_tests {
    mod client_kind_tests {
        use crate::config::enums::client_kind::ClientKind;

        #[test]
        fn test_client_kind_display() {
            assert_eq!(ClientKind::qbittorrent.to_string(), "qbittorrent");
            assert_eq!(ClientKind::transmission.to_string(), "transmission");
        }

        #[test]
        fn test_client_kind_deserialization() {
            let kind: ClientKind = serde_json::from_str("\"transmission\"").unwrap();
            assert_eq!(kind, ClientKind::transmission);
            assert!(serde_json::from_str::<ClientKind>("\"deluge\"").is_err());
        }
    }

    mod configuration_tests {
        use std::time::Duration;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_defaults() {
            let config = Configuration::default();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.lang, "zh");
            assert!(!config.compatibility_mode);
            assert!(!config.use_category_as_tracker);
            assert!(config.rewrite_tracker.is_empty());
            assert_eq!(config.listen_address(), "0.0.0.0:9200");
            assert_eq!(config.max_download_speed_bytes(), 0);
        }

        #[test]
        fn test_load_minimal() {
            let toml = r#"
                [[clients]]
                name = "QB1"
                kind = "qbittorrent"
                url = "http://127.0.0.1:8080"
            "#;
            let config = Configuration::load(toml.as_bytes()).unwrap();
            assert_eq!(config.clients.len(), 1);
            assert_eq!(config.clients[0].username, "");
            assert_eq!(config.clients[0].request_timeout(), Duration::from_secs(30));
            assert_eq!(config.lang, "zh");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_load_full() {
            let toml = r#"
                log_level = "debug"
                listen = ":9300"
                lang = "en"
                compatibility_mode = true
                use_category_as_tracker = true
                max_download_speed = "1Gbps"
                max_upload_speed = "100Mbps"

                [rewrite_tracker]
                "tracker.example" = "MyTracker"

                [[clients]]
                name = "TR1"
                kind = "transmission"
                url = "http://nas.local:9091"
                username = "admin"
                password = "secret"
                timeout = 5
            "#;
            let config = Configuration::load(toml.as_bytes()).unwrap();
            assert!(config.validate().is_ok());
            assert_eq!(config.listen_address(), "0.0.0.0:9300");
            assert!(config.compatibility_mode);
            assert_eq!(config.rewrite_tracker.get("tracker.example").map(String::as_str), Some("MyTracker"));
            assert_eq!(config.max_download_speed_bytes(), 1024 * 1024 * 1024);
            assert_eq!(config.max_upload_speed_bytes(), 100 * 1024 * 1024);
            assert_eq!(config.clients[0].request_timeout(), Duration::from_secs(5));
        }

        #[test]
        fn test_listen_address_normalization() {
            let mut config = Configuration::default();
            config.listen = String::from("9200");
            assert_eq!(config.listen_address(), "0.0.0.0:9200");
            config.listen = String::from("127.0.0.1:9100");
            assert_eq!(config.listen_address(), "127.0.0.1:9100");
            config.listen = String::from("  ");
            assert_eq!(config.listen_address(), "0.0.0.0:9200");
        }

        #[test]
        fn test_invalid_bandwidth_reads_as_zero() {
            let mut config = Configuration::default();
            config.max_upload_speed = Some(String::from("fast"));
            assert_eq!(config.max_upload_speed_bytes(), 0);
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validation_rejects_duplicate_names() {
            let mut config = Configuration::init();
            config.clients[1].name = config.clients[0].name.clone();
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validation_rejects_bad_url() {
            let mut config = Configuration::init();
            config.clients[0].url = String::from("ftp://127.0.0.1");
            assert!(config.validate().is_err());
            config.clients[0].url = String::from("localhost:8080/");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validation_rejects_unknown_log_level() {
            let mut config = Configuration::default();
            config.log_level = String::from("verbose");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_init_round_trips_through_toml() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.clients.len(), 2);
            assert!(loaded.validate().is_ok());
        }

        #[test]
        fn test_unknown_client_kind_fails_to_parse() {
            let toml = r#"
                [[clients]]
                name = "D1"
                kind = "deluge"
                url = "http://127.0.0.1:8112"
            "#;
            assert!(Configuration::load(toml.as_bytes()).is_err());
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("duplicate client name 'QB1'"));
            assert!(error.to_string().contains("duplicate client name 'QB1'"));
        }
    }
}

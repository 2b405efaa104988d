pub mod collect;
pub mod domain;
pub mod export;
pub mod ingest;
pub mod ranking;

pub mod config {
    #[derive(Debug, Clone)]
    pub struct Settings {
        pub supen_base_url: Option<String>,
        pub supen_timeout_secs: Option<u64>,
        pub supen_accept_invalid_certs: Option<bool>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                supen_base_url: std::env::var("SUPEN_BASE_URL")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                supen_timeout_secs: std::env::var("SUPEN_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok()),
                supen_accept_invalid_certs: std::env::var("SUPEN_ACCEPT_INVALID_CERTS")
                    .ok()
                    .and_then(|s| parse_bool(&s)),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }
    }

    fn parse_bool(s: &str) -> Option<bool> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::parse_bool;

        #[test]
        fn parses_common_bool_spellings() {
            assert_eq!(parse_bool("true"), Some(true));
            assert_eq!(parse_bool(" NO "), Some(false));
            assert_eq!(parse_bool("1"), Some(true));
            assert_eq!(parse_bool("maybe"), None);
        }
    }
}

pub mod analysis;
pub mod domain;
pub mod ingest;

pub mod config {
    #[derive(Debug, Clone)]
    pub struct Settings {
        pub fpl_base_url: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                fpl_base_url: std::env::var("FPL_BASE_URL").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }
    }
}

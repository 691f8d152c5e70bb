use crate::scoring::{ScoringMode, DEFAULT_TIMEOUT_SECS};

/// Runtime configuration for the backend server.
///
/// All values are read from environment variables with sensible defaults
/// for local development:
///
/// | Variable               | Default                 | Purpose                            |
/// |------------------------|-------------------------|------------------------------------|
/// | `HOST`                 | `127.0.0.1`             | Address the HTTP server binds to   |
/// | `PORT`                 | `3000`                  | Port the HTTP server listens on    |
/// | `SCORING_API_URL`      | `http://localhost:5000` | Base URL of the scoring service    |
/// | `SCORING_MODE`         | `remote_only`           | Behavior when the scorer is down   |
/// | `SCORING_TIMEOUT_SECS` | `30`                    | Hard cap per scoring request       |
/// | `CORS_ORIGIN`          | `http://localhost:8080` | Allowed origin for browser clients |
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub scoring_api_url: String,
    pub scoring_mode: ScoringMode,
    pub scoring_timeout_secs: u64,
    pub cors_origin: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Panics if `PORT`, `SCORING_MODE`, or `SCORING_TIMEOUT_SECS` are
    /// present but malformed, since the server cannot meaningfully start
    /// with them.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("PORT must be a valid u16");

        let scoring_api_url =
            std::env::var("SCORING_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

        let scoring_mode = std::env::var("SCORING_MODE")
            .map(|raw| {
                ScoringMode::parse(&raw)
                    .expect("SCORING_MODE must be remote_only or remote_with_local_fallback")
            })
            .unwrap_or(ScoringMode::RemoteOnly);

        let scoring_timeout_secs = std::env::var("SCORING_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("SCORING_TIMEOUT_SECS must be a valid number of seconds");

        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self {
            host,
            port,
            scoring_api_url,
            scoring_mode,
            scoring_timeout_secs,
            cors_origin,
        }
    }

    /// The socket address string the server should bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

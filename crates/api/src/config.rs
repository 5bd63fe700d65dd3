use std::path::{Path, PathBuf};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables (the admin credential pair above all).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served statically; synthesized audio lands under
    /// `<public_dir>/studio-audio`.
    pub public_dir: PathBuf,
    /// Directory holding the `{!key}` page templates.
    pub templates_dir: PathBuf,
    /// Shared admin username.
    pub admin_username: String,
    /// Shared admin password.
    pub admin_password: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default       |
    /// |------------------------|---------------|
    /// | `HOST`                 | `0.0.0.0`     |
    /// | `PORT`                 | `3000`        |
    /// | `CORS_ORIGINS`         | *(empty)*     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`          |
    /// | `PUBLIC_DIR`           | `public`      |
    /// | `TEMPLATES_DIR`        | `templates`   |
    /// | `ADMIN_USERNAME`       | `admin`       |
    /// | `ADMIN_PASSWORD`       | `computer`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_dir = PathBuf::from(std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".into()));
        let templates_dir =
            PathBuf::from(std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".into()));

        let admin_username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());
        let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "computer".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_dir,
            templates_dir,
            admin_username,
            admin_password,
        }
    }

    /// Directory where synthesized audio files are written.
    pub fn audio_dir(&self) -> PathBuf {
        self.public_dir.join("studio-audio")
    }

    /// Resolve a stored public audio path (e.g. `/studio-audio/x.wav`) to
    /// its location on disk.
    pub fn public_path_on_disk(&self, public_path: &str) -> PathBuf {
        self.public_dir
            .join(Path::new(public_path.trim_start_matches('/')))
    }
}

use std::env;

#[derive(Clone)]
pub struct Config {
    /// Directory holding `posts.json` and `profile.json`.
    /// When unset, the built-in sample content is served.
    pub content_dir: Option<String>,
    /// Root directory for static assets served under /images
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            content_dir: env::var("CONTENT_DIR").ok(),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }
}

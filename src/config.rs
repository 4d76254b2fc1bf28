use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// HS256 signing secret for session tokens. If unset, a random
    /// per-process secret is generated (tokens won't survive a restart).
    pub const AUTH_TOKEN_SECRET: &str = "AUTH_TOKEN_SECRET";
    /// Session token lifetime in hours.
    pub const TOKEN_TTL_HOURS: &str = "TOKEN_TTL_HOURS";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const DATABASE_URL: &str = "./.db/notes.db";
    pub const TOKEN_TTL_HOURS: i64 = 24;
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub token_secret: String,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        let token_secret = env::var(env_vars::AUTH_TOKEN_SECRET)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                log::warn!(
                    "{} not set - generating a random secret; issued tokens will not survive a restart",
                    env_vars::AUTH_TOKEN_SECRET
                );
                let mut buf = [0u8; 32];
                rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut buf);
                hex::encode(buf)
            });

        Self {
            port: env::var(env_vars::PORT)
                .unwrap_or_else(|_| defaults::PORT.to_string())
                .parse()
                .expect("PORT must be a valid number"),
            database_url: env::var(env_vars::DATABASE_URL)
                .unwrap_or_else(|_| defaults::DATABASE_URL.to_string()),
            token_secret,
            token_ttl_hours: env::var(env_vars::TOKEN_TTL_HOURS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults::TOKEN_TTL_HOURS),
        }
    }
}

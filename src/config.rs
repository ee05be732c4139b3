use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
}

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "notekeeper";

/// Get the HTTP port
pub fn port() -> u16 {
    env::var(env_vars::PORT)
        .unwrap_or_else(|_| defaults::PORT.to_string())
        .parse()
        .expect("PORT must be a valid number")
}

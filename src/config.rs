use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Shared secret a superadmin must present to create an admin account.
    pub secret_code: String,
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Production toggles Secure + SameSite=None on the session cookie.
    pub production: bool,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;
        let secret_code = env_required("PORTAL_SECRET_CODE")?;

        let host: IpAddr = env_or("PORTAL_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_HOST: {e}"))?;

        let port: u16 = env_or("PORTAL_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_PORT: {e}"))?;

        let allowed_origins: Vec<String> = env_or("PORTAL_ALLOWED_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let production = env_or("PORTAL_ENV", "development") == "production";

        let log_level = env_or("PORTAL_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("PORTAL_SMTP_HOST").ok(),
            std::env::var("PORTAL_SMTP_PORT").ok(),
            std::env::var("PORTAL_SMTP_USER").ok(),
            std::env::var("PORTAL_SMTP_PASS").ok(),
            std::env::var("PORTAL_SMTP_FROM").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid PORTAL_SMTP_PORT: {e}"))?,
                user,
                pass,
                from,
            }),
            _ => None,
        };

        Ok(Config {
            database_url,
            jwt_secret,
            secret_code,
            host,
            port,
            allowed_origins,
            production,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

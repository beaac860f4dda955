/**
 * Server Configuration
 *
 * `ServerConfig` is read once at startup from the environment (after
 * `dotenv` has loaded `.env`). Every value has a development default
 * except `JWT_SECRET`, which production mode requires.
 *
 * # Variables
 *
 * | Variable                   | Default                          |
 * |----------------------------|----------------------------------|
 * | `PORT`                     | `5000`                           |
 * | `APP_ENV`                  | `development` (`production`)     |
 * | `DATABASE_URL`             | unset, in-memory store           |
 * | `DATABASE_MAX_CONNECTIONS` | `5`                              |
 * | `JWT_SECRET`               | development secret               |
 * | `TOKEN_TTL_DAYS`           | `30`                             |
 * | `BCRYPT_COST`              | `bcrypt::DEFAULT_COST`           |
 */

use std::str::FromStr;
use std::time::Duration;

use crate::shared::ConfigError;

const DEV_JWT_SECRET: &str = "connectx-development-secret";
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
const BCRYPT_COSTS: std::ops::RangeInclusive<u32> = 4..=31;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Production mode hides error detail from clients
    pub production: bool,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            production: false,
            database_url: None,
            max_connections: 5,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl: Duration::from_secs(30 * SECONDS_PER_DAY),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let production = get("APP_ENV").is_some_and(|env| env.eq_ignore_ascii_case("production"));

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None if production => return Err(ConfigError::MissingValue("JWT_SECRET")),
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                defaults.jwt_secret
            }
        };

        let ttl_days: Option<u64> = parse(&get, "TOKEN_TTL_DAYS")?;
        let token_ttl = match ttl_days {
            Some(days) => days
                .checked_mul(SECONDS_PER_DAY)
                .map(Duration::from_secs)
                .ok_or_else(|| invalid(&get, "TOKEN_TTL_DAYS"))?,
            None => defaults.token_ttl,
        };

        let bcrypt_cost = parse(&get, "BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost);
        if !BCRYPT_COSTS.contains(&bcrypt_cost) {
            return Err(invalid(&get, "BCRYPT_COST"));
        }

        Ok(Self {
            port: parse(&get, "PORT")?.unwrap_or(defaults.port),
            production,
            database_url: get("DATABASE_URL"),
            max_connections: parse(&get, "DATABASE_MAX_CONNECTIONS")?.unwrap_or(defaults.max_connections),
            jwt_secret,
            token_ttl,
            bcrypt_cost,
        })
    }
}

fn parse<T: FromStr>(get: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    get(key)
        .map(|value| {
            value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key, value })
        })
        .transpose()
}

fn invalid(get: &impl Fn(&str) -> Option<String>, key: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: get(key).unwrap_or_default(),
    }
}

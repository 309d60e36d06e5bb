//! Service constants for the NeuronLab SDK.

/// Environment variable holding the outbound proxy used for both `http` and `https`.
pub const PROXY_ENV_VAR: &str = "SERASA_API_PROXY";

/// Environment variable holding the bearer token.
pub const AUTH_TOKEN_ENV_VAR: &str = "NEURONLAB_AUTH_TOKEN";

/// Environment variable holding the service base URL.
pub const URL_ENV_VAR: &str = "NEURONLAB_URL";

/// Environment variable overriding the attempt limit.
pub const MAX_TRIES_ENV_VAR: &str = "NEURONLAB_MAX_TRIES";

/// Environment variable overriding the request timeout (seconds).
pub const TIMEOUT_ENV_VAR: &str = "NEURONLAB_TIMEOUT_SECS";

/// Default number of attempts per request (first try included).
pub const DEFAULT_MAX_TRIES: u32 = 5;

/// Backoff multiplier in seconds: retries wait 0.2s, 0.4s, 0.8s, ...
pub const DEFAULT_BACKOFF_FACTOR: f64 = 0.2;

/// Upper bound on a single backoff sleep, in milliseconds.
pub const MAX_BACKOFF_MS: u64 = 120_000;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

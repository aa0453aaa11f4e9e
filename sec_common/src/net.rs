//! Shared networking constants and helpers used by the requesters.

/// Host the backend is expected to listen on.
pub const BACKEND_HOST: &str = "localhost";
/// TCP port of the backend HTTP service.
pub const BACKEND_PORT: u16 = 8080;
/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "SEC_API_BASE_URL";

/// Helper to format an HTTP base URL like "http://host:port".
pub fn base_url(host: &str, port: u16) -> String {
    format!("http://{}:{}", host, port)
}

/// Base URL of the local backend, `http://localhost:8080`.
pub fn default_base_url() -> String {
    base_url(BACKEND_HOST, BACKEND_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(default_base_url(), "http://localhost:8080");
    }

    #[test]
    fn base_url_keeps_host_verbatim() {
        assert_eq!(base_url("127.0.0.1", 9000), "http://127.0.0.1:9000");
    }
}

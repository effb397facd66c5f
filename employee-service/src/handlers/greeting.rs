use service_core::observability::ist_now;

pub const PING_RESPONSE: &str = "pong ping pong";
pub const HELLO_RESPONSE: &str = "hello";

/// GET /ping
pub async fn ping() -> &'static str {
    tracing::info!(ist = %ist_now(), "Received GET request to /ping");
    tracing::info!(ist = %ist_now(), response = PING_RESPONSE, "Responding to /ping");
    PING_RESPONSE
}

/// GET /
pub async fn hello() -> &'static str {
    tracing::info!(ist = %ist_now(), "Received GET request to /");
    tracing::info!(ist = %ist_now(), response = HELLO_RESPONSE, "Responding to /");
    HELLO_RESPONSE
}

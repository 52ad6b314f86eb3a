/**
 * Home Handler
 *
 * GET /. Learns the visitor's identity from the identify stage only; no
 * storage access.
 */
use crate::backend::middleware::CurrentUser;

/// Greeting shown to anonymous visitors
pub const ANONYMOUS_GREETING: &str = "User is not logged in";

/// Home page handler
pub async fn home(CurrentUser(user): CurrentUser) -> String {
    match user {
        Some(user) => format!("Hello {}", user.username),
        None => ANONYMOUS_GREETING.to_string(),
    }
}

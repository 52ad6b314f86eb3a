/**
 * Client Address Extractor
 *
 * Peer IP of the connection, recorded on new sessions. Available when the
 * server is started with `into_make_service_with_connect_info`; otherwise
 * the address is `"unknown"`.
 */

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

/// Placeholder used when the peer address is not known
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Client IP address as text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientAddr(pub String);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());
        Ok(ClientAddr(ip))
    }
}

use std::sync::Arc;

use dl_auth::{JwtValidator, TokenIssuer};
use sqlx::SqlitePool;

/// Shared state handed to every handler.
///
/// The token components are built once at startup from injected
/// configuration; handlers never read config themselves.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
}

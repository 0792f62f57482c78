//! Connection-acquisition contract for the surrounding pipeline.
//!
//! The mapping engine holds no connections of its own. Pipeline stages
//! that apply translated rows acquire database handles through this
//! trait; the pooling strategy behind it is the implementation's
//! business. The engine shares nothing mutable with implementations
//! beyond the request key.

use async_trait::async_trait;

use crate::error::Result;

/// Options handed to [`ConnectionHelper::init`] once, before first use.
#[derive(Debug, Clone, Default)]
pub struct ConnectionHelperRequest {
    /// Connection profile for the backing database (DSN or URL form).
    pub connection_profile: String,

    /// Statements to run on every fresh connection before it is handed
    /// out.
    pub init_statements: Vec<String>,

    /// Upper bound on concurrently open connections.
    pub max_connections: usize,
}

/// Acquire live database connections by request key.
///
/// A request key identifies a shard or logical database instance. The
/// helper is configured once via [`init`](ConnectionHelper::init) and is
/// then safe to call from any number of pipeline workers.
#[async_trait]
pub trait ConnectionHelper: Send + Sync {
    /// Connection handle type produced by this helper.
    type Connection;

    /// Configure the helper. Idempotent: a second call on an already
    /// initialized helper is a no-op.
    fn init(&self, request: ConnectionHelperRequest) -> Result<()>;

    /// Acquire a live connection for the given request key.
    ///
    /// # Errors
    ///
    /// [`SchemaMapError::Connection`](crate::SchemaMapError::Connection)
    /// when no connection can be produced; propagated to the caller
    /// unchanged, never retried here.
    async fn connection(&self, request_key: &str) -> Result<Self::Connection>;

    /// Whether [`init`](ConnectionHelper::init) has completed.
    fn is_initialized(&self) -> bool;
}

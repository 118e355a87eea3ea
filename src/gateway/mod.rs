mod http;
mod memory;

pub use http::HttpGateway;
pub use memory::MemoryGateway;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// The remote read/write capability the stores are built on. One
/// networked implementation and one in-memory implementation exist;
/// which one a store gets is decided at construction time.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// `GET <endpoint>`, parsed from JSON. Non-success responses fail
    /// with [`crate::AppError::Api`].
    async fn load<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T>;

    /// `POST <endpoint>` with a JSON body, returning the created
    /// resource as the backend echoes it.
    async fn create<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T>;
}

//! Adapters - implementations of port interfaces.
//!
//! - `ReqwestTransport` - production HTTP transport with Basic auth
//! - `InMemoryTransactionStore` - in-process store for tests and examples
//! - `MockTransport` - scripted transport for client tests

mod in_memory_store;
mod mock_transport;
mod reqwest_transport;

pub use in_memory_store::InMemoryTransactionStore;
pub use mock_transport::{MockTransport, RecordedRequest};
pub use reqwest_transport::ReqwestTransport;

//! Ports - interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! SDK and the outside world; adapters implement them.
//!
//! - `HttpTransport` - authenticated request/response to the gateway
//! - `TransactionStore` - find-or-create and update for tracked transactions

mod http_transport;
mod transaction_store;

pub use http_transport::{HttpTransport, TransportError, TransportResponse};
pub use transaction_store::{StoreError, TransactionStore};

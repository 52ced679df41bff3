//! Collaborator abstraction trait definition

mod config_store;
mod rpc_transport;

pub use config_store::{ConfigSnapshot, ConfigStore, ConfigSubscribers, ConfigSubscription};
pub use rpc_transport::RpcTransport;

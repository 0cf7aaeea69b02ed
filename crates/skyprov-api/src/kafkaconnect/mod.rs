// Kafka Connect (MSK Connect) service client.

mod client;
pub mod types;

pub use client::KafkaConnectClient;
pub use types::*;

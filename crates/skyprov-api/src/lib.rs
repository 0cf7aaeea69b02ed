// skyprov-api: transport, SDK configuration and service clients

pub mod error;
pub mod kafkaconnect;
pub mod sdk_config;
pub mod transport;

pub use error::Error;
pub use kafkaconnect::KafkaConnectClient;
pub use sdk_config::{ClientConfig, ConfigValue, ENDPOINT_KEY, SDK_CONFIG_KEY, SdkConfig};
pub use transport::{TlsMode, TransportConfig};

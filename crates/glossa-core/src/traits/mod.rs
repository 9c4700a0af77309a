pub mod remote_client;

pub use remote_client::RemoteEmbeddingClient;

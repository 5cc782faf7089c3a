// Adapters layer: concrete implementations for external systems (storage backends, http transport).

pub mod http;
pub mod storage;

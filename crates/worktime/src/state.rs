//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses a repository trait object for storage
//! abstraction and supports different backends via feature flags.

use std::sync::Arc;

use worktime_core::storage::TimerRepository;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository trait
/// object for table store access. Handlers hold no other shared state.
#[derive(Clone)]
pub struct AppState {
    pub timer_repo: Arc<dyn TimerRepository>,
}

impl AppState {
    fn build(timer_repo: Arc<dyn TimerRepository>) -> Self {
        Self { timer_repo }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for development and testing without external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            Ok(Self::build(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// Uses the AWS SDK default credential chain; the table name comes
        /// from configuration.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let repo = DynamoDbRepository::new(client, config.table_name.clone());

            Ok(Self::build(Arc::new(repo)))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

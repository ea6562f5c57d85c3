//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository
//! trait using `aws-sdk-dynamodb`. The table uses a composite primary key:
//! `PK` is the fixed `WORKTIME` partition, `SK` is the record's row key.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;

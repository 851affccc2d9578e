//! `dbupload-http` is an async HTTP client for a form-POST database upload API.
//!
//! The backend exposes three plain-text endpoints under one origin; replies
//! signal the outcome with literal `Success` / `Failure` markers. The crate
//! wraps them with ergonomic methods:
//! - [`UploadClient::create_user`]
//! - [`UploadClient::upload_key_values`]
//! - [`UploadClient::upload_statement`]

mod classify;
mod client;
mod config;
mod encode;
mod error;
mod statement;

pub use client::UploadClient;
pub use config::DataSourceConfig;
pub use statement::SqlStatement;

pub(crate) use error::UploadError;

pub(crate) type Result<T> = std::result::Result<T, UploadError>;

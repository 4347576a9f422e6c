//! Runtime module
//!
//! Task handles for remote calls made on behalf of a single request.

pub mod async_task;

pub use async_task::AsyncTask;

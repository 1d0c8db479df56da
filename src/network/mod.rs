pub mod client;
pub mod worker;

pub use client::{Backend, BackendError, HttpBackend};
pub use worker::ChatWorker;

#[cfg(test)]
pub(crate) use client::testing;

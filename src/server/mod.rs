//! Accept loop and the worker pool it feeds.

pub mod listener;
pub mod pool;

pub use pool::WorkerPool;

//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint handed to
//! [`Pool::new`](crate::pool::Pool::new) by the (external) registry.
//! Validation runs at construction time, so a successfully built config
//! is guaranteed internally consistent.

mod pool_config;

pub use pool_config::PoolConfig;

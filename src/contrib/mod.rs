//! Contributed grammar fragments built on the core combinators.

pub mod ipv4;

pub use ipv4::{ipv4, is_ipv4};

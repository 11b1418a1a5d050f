pub mod metrics;
#[cfg(test)]
mod tests;

pub use metrics::{render, NetworkMetrics};
pub use prometheus::Registry;

pub mod distribution;
pub mod growth;
pub mod stats;
pub mod trend;

//! Snapshot source adapters.

mod stub;

pub use stub::StubSource;

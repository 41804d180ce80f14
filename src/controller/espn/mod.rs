pub mod client;
pub mod document;
pub mod processing;

pub use client::*;
pub use document::*;
pub use processing::*;

//! Generation endpoint integration.
//!
//! The UI never talks HTTP directly. It sends commands into a
//! [`GenerationPipeline`] worker thread and polls the resulting events once
//! per frame.

pub mod client;
pub mod config;
pub mod pipeline;

pub use client::EndpointClient;
pub use config::GenerationConfig;
pub use pipeline::{GenerationCommand, GenerationEvent, GenerationPipeline};

pub mod config;
pub mod extraction_pipeline;
pub mod models;
pub mod processing;
pub mod utils;
pub mod validation;

pub use config::EngineConfig;
pub use extraction_pipeline::ExtractionPipeline;

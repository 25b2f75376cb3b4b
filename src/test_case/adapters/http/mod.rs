//! HTTP adapter for the external Gherkin generator.

mod generator;

pub use generator::HttpGherkinGenerator;

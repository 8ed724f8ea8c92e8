//! # Corpus Pipeline
//!
//! Runs the four stages in order:
//! load -> tokenize -> build vocab -> encode.

mod corpus_pipeline;

#[doc(inline)]
pub use corpus_pipeline::{CorpusPipeline, CorpusPipelineOptions};

//! Test generation pipeline: read source, prompt the model, extract the
//! fenced code and write the sibling `.test.js` file.

pub mod extractor;
pub mod generator;
pub mod input;
pub mod writer;

pub use generator::TestGenerator;
pub use input::{resolve_input, SourceFile};

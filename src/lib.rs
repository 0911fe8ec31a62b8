//! iatest - Generate Jest unit tests for JavaScript files
//!
//! Reads a JavaScript source file, asks a chat-completion provider (Groq or
//! OpenAI, chosen by which API key is available) to write tests for it, and
//! stores the fenced code from the answer as a sibling `.test.js` file.

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod util;

//! Agrimater TTS server: a thin HTTP relay in front of OpenAI's speech API.
//!
//! The service accepts text, forwards it to the synthesis provider, stages the
//! resulting audio in a request-scoped temporary file and streams the bytes
//! back to the caller.

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;

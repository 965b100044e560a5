//! Lektio - Automated ESL Lesson Feedback Pipeline
//!
//! A Rust implementation of an upload-triggered workflow that transcribes
//! classroom videos with cloud speech-to-text, analyzes the transcript with
//! a generative model, and saves a coaching report to object storage.

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod generate;
pub mod pipeline;
pub mod storage;
pub mod transcribe;

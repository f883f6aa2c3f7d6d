//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `speech` - OpenAI-compatible text-to-speech endpoint
//! - `voices` - Voice to WPM listing

pub mod api;
pub mod speech;
pub mod voices;

//! Content generation adapter for the Owly studio backend.
//!
//! Wraps the external AI calls the application makes (chat-completion text
//! drafting, text-to-speech synthesis, and realtime ephemeral client-secret
//! creation) behind [`StudioClient`]. Everything runs over
//! [`reqwest`] with a client-wide timeout so a stuck upstream surfaces as
//! [`OpenAiError::TimedOut`] instead of hanging the request.

pub mod client;

pub use client::{OpenAiConfig, OpenAiError, StudioClient};

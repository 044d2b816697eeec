//! AI-assisted task suggestion for a topic.
//!
//! A topic is turned into a fixed prompt, sent once to an external text
//! generator, and the free-text reply is parsed into at most five task
//! titles. When the generator fails or returns nothing usable, a
//! deterministic list built from the topic is substituted instead. The
//! module follows hexagonal architecture:
//!
//! - Prompt, parsing, and fallback rules in [`domain`]
//! - The text generator contract in [`ports`]
//! - The Gemini HTTP client and a scripted test double in [`adapters`]
//! - Orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

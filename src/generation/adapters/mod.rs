//! Adapter implementations of the text generator port.

mod gemini;
mod scripted;

pub use gemini::GeminiTextGenerator;
pub use scripted::{ScriptedReply, ScriptedTextGenerator};

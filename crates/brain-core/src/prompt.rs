//! System prompt fingerprinting.
//!
//! Composed system prompts embed caller-supplied company data, so logs carry
//! a digest instead of the prompt text.

use sha2::{Digest, Sha256};

/// Lower-case hex SHA-256 of a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    Sha256::digest(prompt.as_bytes())
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

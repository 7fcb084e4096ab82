//! Role types for completion messages.

use serde::{Deserialize, Serialize};

/// Speaker of a message sent to the completion provider.
///
/// # Examples
///
/// ```
/// use storyreel_core::Role;
///
/// assert_eq!(Role::System.as_str(), "system");
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Framing instructions ("You are a helpful storyteller AI.")
    #[display("system")]
    System,
    /// The prompt itself
    #[display("user")]
    User,
    /// Model output
    #[display("assistant")]
    Assistant,
}

impl Role {
    /// Wire name used by chat-completion APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

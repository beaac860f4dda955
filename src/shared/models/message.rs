//! Message Data Structure
//!
//! Direct messages between two users. Messages are grouped into
//! conversations by the unordered pair of participants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserProfile;

/// A direct message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message ID
    pub id: Uuid,
    /// Sender user ID
    pub sender: Uuid,
    /// Recipient user ID, never equal to `sender`
    pub recipient: Uuid,
    /// Message body
    pub content: String,
    /// Whether the recipient has opened the conversation since it arrived
    #[serde(default)]
    pub read: bool,
    /// Creation time; conversations are ordered by it
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new unread message
    pub fn new(sender: Uuid, recipient: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            recipient,
            content,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Key of the conversation this message belongs to
    pub fn conversation_key(&self) -> ConversationKey {
        ConversationKey::new(self.sender, self.recipient)
    }

    /// The participant that is not `user`
    pub fn counterpart(&self, user: Uuid) -> Uuid {
        if self.sender == user {
            self.recipient
        } else {
            self.sender
        }
    }
}

/// Unordered pair of conversation participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationKey(Uuid, Uuid);

impl ConversationKey {
    pub fn new(a: Uuid, b: Uuid) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// One entry of the caller's conversation list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    /// The other participant
    pub with: UserProfile,
    /// Most recent message in either direction
    pub last_message: Message,
    /// Messages addressed to the caller that are still unread
    pub unread_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_key_is_unordered() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(ConversationKey::new(a, b), ConversationKey::new(b, a));
        assert_ne!(ConversationKey::new(a, b), ConversationKey::new(a, Uuid::new_v4()));
    }

    #[test]
    fn test_messages_in_both_directions_share_a_key() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let ab = Message::new(a, b, "hi".into());
        let ba = Message::new(b, a, "hey".into());
        assert_eq!(ab.conversation_key(), ba.conversation_key());
        assert_eq!(ab.counterpart(a), b);
        assert_eq!(ba.counterpart(a), b);
    }
}

//! Connection Data Structure
//!
//! A connection between two users. The requester and recipient roles matter
//! only while the connection is pending; once accepted it is symmetric.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserProfile;

/// Status of a connection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Waiting for the recipient to accept
    #[default]
    Pending,
    /// Accepted by the recipient
    Accepted,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Pending => "pending",
            ConnectionStatus::Accepted => "accepted",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(ConnectionStatus::Pending),
            "accepted" => Some(ConnectionStatus::Accepted),
            _ => None,
        }
    }
}

/// A connection between two users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Unique connection ID (the "request id" while pending)
    pub id: Uuid,
    /// User who sent the request
    pub requester: Uuid,
    /// User who received the request
    pub recipient: Uuid,
    /// Current status
    #[serde(default)]
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Connection {
    /// Create a new pending request
    pub fn request(requester: Uuid, recipient: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            requester,
            recipient,
            status: ConnectionStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this connection links `a` and `b`, in either direction
    pub fn links(&self, a: Uuid, b: Uuid) -> bool {
        (self.requester == a && self.recipient == b) || (self.requester == b && self.recipient == a)
    }

    /// The other side of the connection, if `user` is part of it
    pub fn counterpart(&self, user: Uuid) -> Option<Uuid> {
        if self.requester == user {
            Some(self.recipient)
        } else if self.recipient == user {
            Some(self.requester)
        } else {
            None
        }
    }
}

/// A pending request addressed to the caller, with the requester's profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequest {
    pub connection: Connection,
    pub requester: UserProfile,
}

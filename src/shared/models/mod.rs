//! Resource records returned by the API.
//!
//! Each record type lives in its own file; they are re-exported here so
//! callers can write `shared::models::Post`.

pub mod connection;
pub mod message;
pub mod opportunity;
pub mod post;
pub mod user;

pub use connection::{Connection, ConnectionStatus, PendingRequest};
pub use message::{ConversationKey, ConversationSummary, Message};
pub use opportunity::{Opportunity, OpportunityKind};
pub use post::{Comment, Post};
pub use user::UserProfile;

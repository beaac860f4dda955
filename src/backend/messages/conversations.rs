//! Grouping of a user's messages into conversation summaries.

use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::models::Message;

/// Latest message and unread count for one counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub with: Uuid,
    pub last_message: Message,
    pub unread_count: u32,
}

/// Group `messages` (all involving `user`) by counterpart.
///
/// Unread counts only include messages addressed to `user`. Threads are
/// ordered by their last message, newest first.
pub fn group_threads(user: Uuid, messages: Vec<Message>) -> Vec<Thread> {
    let mut threads: HashMap<Uuid, Thread> = HashMap::new();

    for message in messages {
        let with = message.counterpart(user);
        let unread = u32::from(message.recipient == user && !message.read);

        match threads.get_mut(&with) {
            Some(thread) => {
                thread.unread_count += unread;
                if message.created_at >= thread.last_message.created_at {
                    thread.last_message = message;
                }
            }
            None => {
                threads.insert(
                    with,
                    Thread {
                        with,
                        last_message: message,
                        unread_count: unread,
                    },
                );
            }
        }
    }

    let mut threads: Vec<Thread> = threads.into_values().collect();
    threads.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));
    threads
}

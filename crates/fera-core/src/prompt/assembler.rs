//! Request assembly.
//!
//! Produces the ordered, role-tagged payload sent to the completion backend.
//! Independent of any client library: the output is plain [`Message`]s.

use fera_types::chat::Turn;
use fera_types::llm::Message;

/// Assemble the message list for one completion call.
///
/// Layout, in order:
/// 1. `instructions` as a single system message
/// 2. every turn of `history`, oldest first, with its own role
/// 3. `new_input` as the final user message
///
/// Pure: the same inputs always produce the same output.
pub fn assemble<'a, I>(instructions: &str, history: I, new_input: &str) -> Vec<Message>
where
    I: IntoIterator<Item = &'a Turn>,
{
    let history = history.into_iter();
    let mut messages = Vec::with_capacity(history.size_hint().0 + 2);

    messages.push(Message::system(instructions));
    messages.extend(history.map(Turn::to_message));
    messages.push(Message::user(new_input));

    messages
}

//! Scripted AI assistant: every message gets one canned reply after a delay.

use rand::Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const GREETING: &str = "Hi! I'm your AI assistant. Ask me anything about your code!";

pub const CANNED_REPLIES: [&str; 5] = [
    "I can help you debug that issue. Let me analyze the code...",
    "Here's a suggestion: Consider using async/await for better error handling.",
    "I found a potential optimization in your loop. Would you like me to explain?",
    "That function looks good! You might want to add type hints for better clarity.",
    "Let me help you refactor that. Here's a cleaner approach...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct MockAssistant {
    messages: Vec<ChatMessage>,
    input: String,
    reply_delay: Duration,
    /// One deadline per unanswered message, oldest first.
    pending: VecDeque<Instant>,
}

impl MockAssistant {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: vec![ChatMessage {
                speaker: Speaker::Assistant,
                text: GREETING.to_string(),
            }],
            input: String::new(),
            reply_delay,
            pending: VecDeque::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Shows the "Thinking..." bubble.
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Send whatever is in the input buffer and clear it, blank or not.
    pub fn submit(&mut self, now: Instant) -> bool {
        let text = std::mem::take(&mut self.input);
        self.send(&text, now)
    }

    /// Post a user message. Blank text is ignored.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: text.to_string(),
        });
        self.pending.push_back(now + self.reply_delay);
        true
    }

    /// Deliver every reply whose delay has elapsed. Returns `true` if any was.
    pub fn poll<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        let mut delivered = false;
        while self.pending.front().is_some_and(|due| *due <= now) {
            self.pending.pop_front();
            let reply = CANNED_REPLIES[rng.gen_range(0..CANNED_REPLIES.len())];
            self.messages.push(ChatMessage {
                speaker: Speaker::Assistant,
                text: reply.to_string(),
            });
            delivered = true;
        }
        delivered
    }

    /// Drop every reply that has not been delivered yet.
    pub fn cancel(&mut self) {
        self.pending.clear();
    }
}

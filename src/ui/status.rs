//! Transient message line.

use std::time::{Duration, Instant};

pub const SHORT_TTL: Duration = Duration::from_secs(3);
pub const LONG_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    expires_at: Instant,
}

/// At most one message at a time; a newer one replaces the older one.
#[derive(Debug, Default)]
pub struct StatusLine {
    current: Option<StatusMessage>,
}

impl StatusLine {
    pub fn show(&mut self, text: impl Into<String>, level: StatusLevel, ttl: Duration) {
        self.show_at(text, level, ttl, Instant::now());
    }

    pub fn show_at(
        &mut self,
        text: impl Into<String>,
        level: StatusLevel,
        ttl: Duration,
        now: Instant,
    ) {
        self.current = Some(StatusMessage {
            text: text.into(),
            level,
            expires_at: now + ttl,
        });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drop the message once its deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|message| now >= message.expires_at)
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}

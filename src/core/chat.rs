//! Chat session handler.
//!
//! Wraps the match engine with reply formatting, a specialist
//! suggestion derived from the matched entry's tags, and a bounded
//! in-memory history.

use crate::core::config::ChatConfig;
use crate::core::error::{MediBotError, Result};
use crate::core::matcher::MatchEngine;
use crate::core::types::{ChatReply, ChatRole, ChatTurn, MatchResult, ReplyMeta};
use chrono::Utc;
use std::collections::VecDeque;

/// One conversation with the bot
#[derive(Debug, Clone)]
pub struct ChatSession {
    history: VecDeque<ChatTurn>,
    history_limit: usize,
    fallback_reply: String,
    specialty_route: String,
}

impl ChatSession {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            history: VecDeque::new(),
            history_limit: config.history_limit.max(1),
            fallback_reply: config.fallback_reply.clone(),
            specialty_route: config.specialty_route.clone(),
        }
    }

    /// Answer one user message.
    ///
    /// Both the user's message and the reply are appended to the
    /// history, which is then trimmed to the most recent turns.
    pub fn respond(&mut self, engine: &MatchEngine, message: &str) -> Result<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(MediBotError::InvalidQuery("Missing message".to_string()));
        }

        self.push(ChatRole::User, message);

        let (reply, meta) = match engine.best_answer(message) {
            Some(result) => {
                let meta = self.meta_for(&result);
                (result.answer, meta)
            }
            None => (self.fallback_reply.clone(), ReplyMeta::default()),
        };

        self.push(ChatRole::Bot, &reply);

        Ok(ChatReply {
            reply,
            meta,
            history: self.history(),
        })
    }

    /// Turns in chronological order
    pub fn history(&self) -> Vec<ChatTurn> {
        self.history.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    fn push(&mut self, role: ChatRole, message: &str) {
        self.history.push_back(ChatTurn {
            role,
            message: message.to_string(),
            at: Utc::now(),
        });
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }

    fn meta_for(&self, result: &MatchResult) -> ReplyMeta {
        let suggested_specialty = result
            .tags
            .iter()
            .map(|t| t.trim())
            .find(|t| !t.is_empty())
            .map(str::to_string);
        let redirect_url = suggested_specialty
            .as_deref()
            .map(|specialty| redirect_url(&self.specialty_route, specialty));

        ReplyMeta {
            score: Some(result.score),
            matched_question: result.matched_question.clone(),
            tags: result.tags.clone(),
            suggested_specialty,
            redirect_url,
        }
    }
}

/// Doctor-search link for a specialty
pub fn redirect_url(route: &str, specialty: &str) -> String {
    format!("{}?specialty={}", route, urlencoding::encode(specialty))
}

//! Client-held interrogation session for one suspect.
//!
//! `Idle → Open → Exchanging → Closed`, with reopening resetting to a fresh
//! `Open`. The session is the only place turn ordering is enforced: a new
//! user turn cannot be queued while a reply is pending, which serializes
//! generation calls within one suspect session. Nothing here is persisted:
//! a session dies with its holder, and suspects keep no cross-session memory.

use casefile_common::{CaseFileError, ChatMessage, Result};

use crate::dialogue::OPENING_LINE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Open,
    Exchanging,
    Closed,
}

#[derive(Debug, Clone)]
pub struct DialogueSession {
    suspect_id: String,
    state: SessionState,
    turns: Vec<ChatMessage>,
    awaiting_reply: bool,
}

impl DialogueSession {
    pub fn new(suspect_id: impl Into<String>) -> Self {
        Self {
            suspect_id: suspect_id.into(),
            state: SessionState::Idle,
            turns: Vec::new(),
            awaiting_reply: false,
        }
    }

    pub fn suspect_id(&self) -> &str {
        &self.suspect_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.turns
    }

    /// Open (or reopen) the session. Any prior transcript is discarded and
    /// the canned greeting becomes the first suspect turn.
    pub fn open(&mut self) -> Result<()> {
        match self.state {
            SessionState::Idle | SessionState::Closed => {
                self.turns.clear();
                self.turns.push(ChatMessage::assistant(OPENING_LINE));
                self.awaiting_reply = false;
                self.state = SessionState::Open;
                Ok(())
            }
            SessionState::Open | SessionState::Exchanging => Err(CaseFileError::InvalidRequest(
                format!("session for {} is already open", self.suspect_id),
            )),
        }
    }

    /// Queue a user turn and return the transcript to send for generation.
    /// Rejected while a reply is pending, so turns within the session stay
    /// strictly ordered.
    pub fn push_user(&mut self, text: impl Into<String>) -> Result<&[ChatMessage]> {
        match self.state {
            SessionState::Open | SessionState::Exchanging if !self.awaiting_reply => {
                self.turns.push(ChatMessage::user(text));
                self.awaiting_reply = true;
                self.state = SessionState::Exchanging;
                Ok(&self.turns)
            }
            SessionState::Open | SessionState::Exchanging => Err(CaseFileError::InvalidRequest(
                format!("a reply is still pending for {}", self.suspect_id),
            )),
            _ => Err(CaseFileError::InvalidRequest(format!(
                "session for {} is not open",
                self.suspect_id
            ))),
        }
    }

    /// Record the suspect's reply to the pending user turn.
    pub fn push_suspect(&mut self, text: impl Into<String>) -> Result<()> {
        if self.state != SessionState::Exchanging || !self.awaiting_reply {
            return Err(CaseFileError::InvalidRequest(format!(
                "no reply is pending for {}",
                self.suspect_id
            )));
        }
        self.turns.push(ChatMessage::assistant(text));
        self.awaiting_reply = false;
        Ok(())
    }

    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casefile_common::ChatRole;

    #[test]
    fn test_session_lifecycle() {
        let mut session = DialogueSession::new("s1");
        assert_eq!(session.state(), SessionState::Idle);

        session.open().unwrap();
        assert_eq!(session.state(), SessionState::Open);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].content, OPENING_LINE);

        let transcript = session.push_user("Where were you?").unwrap();
        assert_eq!(transcript.len(), 2);
        session.push_suspect("In my office.").unwrap();
        assert_eq!(session.state(), SessionState::Exchanging);

        session.close();
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_user_turns_are_serialized() {
        let mut session = DialogueSession::new("s1");
        session.open().unwrap();
        session.push_user("First question.").unwrap();

        let err = session.push_user("Second question.").unwrap_err();
        assert!(matches!(err, CaseFileError::InvalidRequest(_)));

        session.push_suspect("An answer.").unwrap();
        session.push_user("Second question.").unwrap();
    }

    #[test]
    fn test_reply_requires_pending_user_turn() {
        let mut session = DialogueSession::new("s1");
        session.open().unwrap();
        let err = session.push_suspect("Unprompted.").unwrap_err();
        assert!(matches!(err, CaseFileError::InvalidRequest(_)));
    }

    #[test]
    fn test_reopen_discards_transcript() {
        let mut session = DialogueSession::new("s1");
        session.open().unwrap();
        session.push_user("A question.").unwrap();
        session.push_suspect("An answer.").unwrap();
        session.close();

        session.open().unwrap();
        assert_eq!(session.state(), SessionState::Open);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, ChatRole::Assistant);
    }

    #[test]
    fn test_open_twice_is_rejected() {
        let mut session = DialogueSession::new("s1");
        session.open().unwrap();
        assert!(session.open().is_err());
    }
}

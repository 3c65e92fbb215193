//! Application state management
//!
//! Central state for the Redraft UI: the draft being replied to, the tone
//! selection, the generated reply, and the single outstanding request.

use crate::generation::{GenerationCommand, GenerationEvent};
use crate::reply::{ReplyRequest, Tone};
use crossbeam_channel::{Receiver, Sender as ChannelSender};
use tracing::{debug, error};
use uuid::Uuid;

/// Blocking alert shown for empty input.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter the original email content.";

/// Confirmation shown after a successful clipboard copy.
pub const COPIED_NOTICE: &str = "Copied to clipboard!";

/// Fixed fallback shown in the output field when a request fails.
pub const GENERATION_FAILED_MESSAGE: &str = "❌ Failed to generate reply. Please try again.";

/// Central application state
pub struct AppState {
    /// The email being replied to
    pub email_content: String,

    /// Optional tone selection
    pub tone: Option<Tone>,

    /// The generated reply, or the fixed failure message
    pub reply_text: String,

    /// Whether a request is outstanding
    pub is_generating: bool,

    /// Id of the outstanding request, if any
    pub active_request: Option<Uuid>,

    /// Round-trip time of the last completed request
    pub last_elapsed_ms: Option<u64>,

    /// Modal notice text, shown until dismissed
    pub notice: Option<String>,

    /// Channel to send generation commands
    pub command_tx: Option<ChannelSender<GenerationCommand>>,

    /// Channel to receive generation events
    pub event_rx: Option<Receiver<GenerationEvent>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new application state
    pub fn new() -> Self {
        Self {
            email_content: String::new(),
            tone: None,
            reply_text: String::new(),
            is_generating: false,
            active_request: None,
            last_elapsed_ms: None,
            notice: None,
            command_tx: None,
            event_rx: None,
        }
    }

    /// Wire up the generation pipeline channels
    pub fn connect_pipeline(
        &mut self,
        command_tx: ChannelSender<GenerationCommand>,
        event_rx: Receiver<GenerationEvent>,
    ) {
        self.command_tx = Some(command_tx);
        self.event_rx = Some(event_rx);
    }

    /// Submit the current draft to the generation endpoint
    ///
    /// Empty or whitespace-only input raises the validation notice and sends
    /// nothing. Otherwise exactly one command goes out, tagged with a fresh
    /// request id, and the UI enters its busy state.
    pub fn generate(&mut self) {
        if self.email_content.trim().is_empty() {
            self.notice = Some(EMPTY_INPUT_NOTICE.to_string());
            return;
        }

        self.is_generating = true;
        self.reply_text.clear();

        if let Some(tx) = &self.command_tx {
            let request = ReplyRequest::new(self.email_content.clone(), self.tone);
            let request_id = Uuid::new_v4();
            let _ = tx.send(GenerationCommand::Generate {
                request,
                request_id,
            });
            self.active_request = Some(request_id);
        }
    }

    /// Reset the form to its initial empty state
    ///
    /// Idempotent. Deliberately leaves the busy flag alone; an in-flight
    /// request still settles.
    pub fn clear(&mut self) {
        self.email_content.clear();
        self.tone = None;
        self.reply_text.clear();
    }

    /// Whether there is a reply to copy
    pub fn can_copy(&self) -> bool {
        !self.reply_text.is_empty()
    }

    /// Copy the current reply to the host clipboard
    pub fn copy_reply(&mut self, ctx: &egui::Context) {
        if !self.can_copy() {
            return;
        }
        ctx.copy_text(self.reply_text.clone());
        self.notice = Some(COPIED_NOTICE.to_string());
    }

    /// Dismiss the current modal notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Process incoming events from the generation pipeline
    pub fn poll_events(&mut self) {
        let Some(rx) = &self.event_rx else {
            return;
        };

        while let Ok(event) = rx.try_recv() {
            match event {
                GenerationEvent::Complete {
                    reply,
                    request_id,
                    elapsed_ms,
                } => {
                    if self.active_request != Some(request_id) {
                        debug!("Ignoring stale completion for request {}", request_id);
                        continue;
                    }
                    self.reply_text = reply;
                    self.is_generating = false;
                    self.active_request = None;
                    self.last_elapsed_ms = Some(elapsed_ms);
                }
                GenerationEvent::Error { error, request_id } => {
                    error!("Error generating email reply: {}", error);
                    if request_id.is_some() && request_id != self.active_request {
                        debug!("Ignoring stale error for request {:?}", request_id);
                        continue;
                    }
                    self.reply_text = GENERATION_FAILED_MESSAGE.to_string();
                    self.is_generating = false;
                    self.active_request = None;
                }
                GenerationEvent::Shutdown => {
                    debug!("Generation pipeline shut down");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    fn connected_state() -> (
        AppState,
        Receiver<GenerationCommand>,
        ChannelSender<GenerationEvent>,
    ) {
        let (command_tx, command_rx) = bounded(10);
        let (event_tx, event_rx) = bounded(10);
        let mut state = AppState::new();
        state.connect_pipeline(command_tx, event_rx);
        (state, command_rx, event_tx)
    }

    #[test]
    fn generate_sends_exactly_one_command_with_draft_and_tone() {
        let (mut state, command_rx, _event_tx) = connected_state();
        state.email_content = "Hi, can we move the meeting?".to_string();
        state.tone = Some(Tone::Professional);

        state.generate();

        let command = command_rx.try_recv().unwrap();
        match command {
            GenerationCommand::Generate {
                request,
                request_id,
            } => {
                assert_eq!(request.email_content, "Hi, can we move the meeting?");
                assert_eq!(request.tone, "professional");
                assert_eq!(state.active_request, Some(request_id));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(command_rx.try_recv().is_err(), "only one command expected");
        assert!(state.is_generating);
        assert!(state.reply_text.is_empty());
    }

    #[test]
    fn generate_sends_empty_tone_when_unset() {
        let (mut state, command_rx, _event_tx) = connected_state();
        state.email_content = "Hello".to_string();

        state.generate();

        match command_rx.try_recv().unwrap() {
            GenerationCommand::Generate { request, .. } => assert_eq!(request.tone, ""),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn whitespace_only_input_raises_notice_and_sends_nothing() {
        let (mut state, command_rx, _event_tx) = connected_state();
        state.email_content = "   \n\t ".to_string();

        state.generate();

        assert_eq!(state.notice.as_deref(), Some(EMPTY_INPUT_NOTICE));
        assert!(!state.is_generating);
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn completion_settles_reply_and_clears_busy() {
        let (mut state, command_rx, event_tx) = connected_state();
        state.email_content = "Hello".to_string();
        state.generate();

        let request_id = match command_rx.try_recv().unwrap() {
            GenerationCommand::Generate { request_id, .. } => request_id,
            other => panic!("unexpected command: {:?}", other),
        };

        event_tx
            .send(GenerationEvent::Complete {
                reply: "Thanks for reaching out!".to_string(),
                request_id,
                elapsed_ms: 120,
            })
            .unwrap();
        state.poll_events();

        assert_eq!(state.reply_text, "Thanks for reaching out!");
        assert!(!state.is_generating);
        assert_eq!(state.active_request, None);
        assert_eq!(state.last_elapsed_ms, Some(120));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let (mut state, _command_rx, event_tx) = connected_state();
        state.email_content = "Hello".to_string();
        state.generate();

        event_tx
            .send(GenerationEvent::Complete {
                reply: "old reply".to_string(),
                request_id: Uuid::new_v4(),
                elapsed_ms: 5,
            })
            .unwrap();
        state.poll_events();

        assert!(state.is_generating, "unrelated completion must not settle");
        assert!(state.reply_text.is_empty());
    }

    #[test]
    fn error_shows_fixed_message_and_clears_busy() {
        let (mut state, command_rx, event_tx) = connected_state();
        state.email_content = "Hello".to_string();
        state.generate();

        let request_id = match command_rx.try_recv().unwrap() {
            GenerationCommand::Generate { request_id, .. } => request_id,
            other => panic!("unexpected command: {:?}", other),
        };

        event_tx
            .send(GenerationEvent::Error {
                error: "connection refused".to_string(),
                request_id: Some(request_id),
            })
            .unwrap();
        state.poll_events();

        assert_eq!(state.reply_text, GENERATION_FAILED_MESSAGE);
        assert!(!state.is_generating);
    }

    #[test]
    fn clear_resets_form_but_not_busy_flag() {
        let (mut state, _command_rx, _event_tx) = connected_state();
        state.email_content = "Hello".to_string();
        state.tone = Some(Tone::Friendly);
        state.generate();
        state.reply_text = "something".to_string();

        state.clear();

        assert!(state.email_content.is_empty());
        assert_eq!(state.tone, None);
        assert!(state.reply_text.is_empty());
        assert!(state.is_generating, "clear must not touch the busy flag");

        // Idempotent
        state.clear();
        assert!(state.email_content.is_empty());
    }

    #[test]
    fn copy_is_disabled_without_a_reply() {
        let state = AppState::new();
        assert!(!state.can_copy());
    }

    #[test]
    fn copy_enabled_once_reply_present() {
        let mut state = AppState::new();
        state.reply_text = "See you then.".to_string();
        assert!(state.can_copy());
    }
}

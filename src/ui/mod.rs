//! Browser-side chat state, expressed as a pure reducer.
//!
//! [`UiState`] is never mutated in place: every [`UiEvent`] produces a new
//! state, and [`UiState::view`] derives everything the page shows from it.
//! `public/app.js` implements the same transitions for the browser.

pub mod client;

pub use client::{ChatClient, ClientError};

pub const ERROR_PREFIX: &str = "Error: ";
pub const EMPTY_TRANSCRIPT: &str = "No response yet. Ask me something!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub input: String,
    pub response: String,
    pub loading: bool,
    pub show_chat: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    InputChanged(String),
    ToggleChat,
    OpenChat,
    SubmitStarted,
    ReplyReceived(String),
    RequestFailed(String),
}

impl UiState {
    pub fn reduce(self, event: UiEvent) -> UiState {
        match event {
            UiEvent::InputChanged(input) => UiState { input, ..self },
            UiEvent::ToggleChat => UiState {
                show_chat: !self.show_chat,
                ..self
            },
            UiEvent::OpenChat => UiState {
                show_chat: true,
                ..self
            },
            UiEvent::SubmitStarted if self.outgoing_message().is_none() => self,
            UiEvent::SubmitStarted => UiState {
                loading: true,
                ..self
            },
            UiEvent::ReplyReceived(response) => UiState {
                input: String::new(),
                response,
                loading: false,
                ..self
            },
            UiEvent::RequestFailed(reason) => UiState {
                response: format!("{ERROR_PREFIX}{reason}"),
                loading: false,
                ..self
            },
        }
    }

    /// The text a submit would send, or `None` while loading or when the input is blank.
    pub fn outgoing_message(&self) -> Option<&str> {
        if self.loading || self.input.trim().is_empty() {
            None
        } else {
            Some(self.input.as_str())
        }
    }

    pub fn view(&self) -> View {
        let toggle_label = if self.show_chat { "Close Chat" } else { "Try AI" };

        let screen = if self.show_chat {
            Screen::Chat(ChatPanel {
                transcript: (!self.response.is_empty()).then(|| self.response.clone()),
                input: self.input.clone(),
                controls_disabled: self.loading,
                submit_label: if self.loading { "Sending..." } else { "Send" },
            })
        } else {
            Screen::Landing
        };

        View {
            toggle_label,
            screen,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub toggle_label: &'static str,
    pub screen: Screen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Chat(ChatPanel),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPanel {
    /// `None` renders [`EMPTY_TRANSCRIPT`].
    pub transcript: Option<String>,
    pub input: String,
    pub controls_disabled: bool,
    pub submit_label: &'static str,
}

impl ChatPanel {
    pub fn transcript_text(&self) -> &str {
        self.transcript.as_deref().unwrap_or(EMPTY_TRANSCRIPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> UiState {
        UiState::default()
            .reduce(UiEvent::OpenChat)
            .reduce(UiEvent::InputChanged(text.to_string()))
    }

    #[test]
    fn blank_input_does_not_start_a_request() {
        let state = typed("   ");
        assert_eq!(state.outgoing_message(), None);

        let after = state.clone().reduce(UiEvent::SubmitStarted);
        assert_eq!(after, state);
        assert!(!after.loading);
    }

    #[test]
    fn submit_is_ignored_while_loading() {
        let state = typed("hello").reduce(UiEvent::SubmitStarted);
        assert!(state.loading);
        assert_eq!(state.outgoing_message(), None);
        assert_eq!(state.clone().reduce(UiEvent::SubmitStarted), state);
    }

    #[test]
    fn reply_clears_input_and_loading() {
        let state = typed("What is 2+2?")
            .reduce(UiEvent::SubmitStarted)
            .reduce(UiEvent::ReplyReceived("4".to_string()));

        assert_eq!(state.response, "4");
        assert!(state.input.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn failure_keeps_input_and_prefixes_reason() {
        let state = typed("hello")
            .reduce(UiEvent::SubmitStarted)
            .reduce(UiEvent::RequestFailed("Failed to process request".to_string()));

        assert_eq!(state.response, "Error: Failed to process request");
        assert_eq!(state.input, "hello");
        assert!(!state.loading);
    }

    #[test]
    fn toggle_switches_between_landing_and_chat() {
        let landing = UiState::default();
        assert_eq!(landing.view().screen, Screen::Landing);
        assert_eq!(landing.view().toggle_label, "Try AI");

        let chat = landing.reduce(UiEvent::ToggleChat);
        assert!(matches!(chat.view().screen, Screen::Chat(_)));
        assert_eq!(chat.view().toggle_label, "Close Chat");

        assert!(!chat.reduce(UiEvent::ToggleChat).show_chat);
    }

    #[test]
    fn chat_panel_reflects_loading() {
        let idle = typed("hi");
        let Screen::Chat(panel) = idle.view().screen else {
            panic!("expected chat screen");
        };
        assert_eq!(panel.transcript_text(), EMPTY_TRANSCRIPT);
        assert_eq!(panel.submit_label, "Send");
        assert!(!panel.controls_disabled);

        let busy = idle.reduce(UiEvent::SubmitStarted);
        let Screen::Chat(panel) = busy.view().screen else {
            panic!("expected chat screen");
        };
        assert_eq!(panel.submit_label, "Sending...");
        assert!(panel.controls_disabled);
    }
}

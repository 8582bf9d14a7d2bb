//! Session controller: drives one user exchange at a time.
//!
//! Each call to [`SessionController::generate_response`] assembles a request
//! from the fixed instructions, the current history window, and the new input;
//! records the user turn; awaits the backend; and records the reply. The
//! call-to-action policy is evaluated against the interaction counter.

use fera_types::config::FunnelConfig;
use fera_types::error::FunnelError;
use fera_types::llm::CompletionRequest;
use fera_types::mentorship::CallToAction;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::llm::BoxLlmProvider;
use crate::prompt::{InstructionBuilder, assemble};

use super::state::SessionState;
use super::trigger::CallToActionPolicy;

/// Owns the state of one conversation and the backend it talks to.
///
/// Methods that mutate the conversation take `&mut self`, so one session is
/// driven by one caller at a time. Separate conversations need separate
/// controllers.
pub struct SessionController {
    provider: BoxLlmProvider,
    instructions: String,
    model: String,
    temperature: f64,
    max_tokens: Option<u32>,
    policy: CallToActionPolicy,
    call_to_action: CallToAction,
    state: SessionState,
}

impl SessionController {
    /// Create a controller whose instructions are rendered from
    /// `config.mentorship`.
    ///
    /// Fails with [`FunnelError::Configuration`] if the config is invalid.
    pub fn new(config: &FunnelConfig, provider: BoxLlmProvider) -> Result<Self, FunnelError> {
        let instructions = InstructionBuilder::build(&config.mentorship);
        Self::with_instructions(config, provider, instructions)
    }

    /// Create a controller with a caller-supplied instruction block.
    pub fn with_instructions(
        config: &FunnelConfig,
        provider: BoxLlmProvider,
        instructions: impl Into<String>,
    ) -> Result<Self, FunnelError> {
        config.validate()?;

        let state = SessionState::new(config.session.history_window);
        info!(
            session_id = %state.id(),
            provider = provider.name(),
            model = %config.backend.model,
            history_window = config.session.history_window,
            cta_threshold = config.session.cta_threshold,
            "Session started"
        );

        Ok(Self {
            provider,
            instructions: instructions.into(),
            model: config.backend.model.clone(),
            temperature: config.backend.temperature,
            max_tokens: config.backend.max_tokens,
            policy: CallToActionPolicy::new(config.session.cta_threshold),
            call_to_action: config.call_to_action.clone(),
            state,
        })
    }

    /// Produce the assistant reply for one user message.
    ///
    /// Blank input is rejected with [`FunnelError::Validation`] and changes
    /// nothing. Otherwise the user turn is recorded and counted before the
    /// backend is called; if the backend fails, the error is returned as
    /// [`FunnelError::Backend`] and the user turn stays in history without a
    /// reply.
    pub async fn generate_response(&mut self, user_input: &str) -> Result<String, FunnelError> {
        if user_input.trim().is_empty() {
            return Err(FunnelError::Validation("message must not be empty".to_string()));
        }

        let request = self.build_request(user_input);
        self.state.record_user_turn(user_input);

        let span = info_span!(
            "gen_ai.chat",
            session.id = %self.state.id(),
            session.interaction = self.state.interaction_count(),
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );

        let response = match self.provider.complete(&request).instrument(span).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    session_id = %self.state.id(),
                    interaction = self.state.interaction_count(),
                    error = %e,
                    "Backend call failed"
                );
                return Err(FunnelError::Backend(e));
            }
        };

        debug!(
            model = %response.model,
            stop_reason = %response.stop_reason,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Completion received"
        );

        self.state
            .record_assistant_turn(&response.content, response.usage);

        if self.state.interaction_count() == self.policy.threshold() {
            info!(
                session_id = %self.state.id(),
                interaction_count = self.state.interaction_count(),
                "Call-to-action threshold reached"
            );
        }

        Ok(response.content)
    }

    fn build_request(&self, user_input: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: assemble(&self.instructions, self.state.history().as_sequence(), user_input),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        }
    }

    /// User turns accepted so far (including ones whose backend call failed).
    pub fn interaction_count(&self) -> u32 {
        self.state.interaction_count()
    }

    /// Whether the call-to-action should be shown now.
    ///
    /// True on every turn from the threshold onward.
    pub fn should_show_call_to_action(&self) -> bool {
        self.policy.should_trigger(self.state.interaction_count())
    }

    pub fn call_to_action(&self) -> &CallToAction {
        &self.call_to_action
    }

    pub fn policy(&self) -> CallToActionPolicy {
        self.policy
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::mock::ScriptedProvider;
    use fera_types::chat::{Turn, TurnRole};
    use fera_types::llm::{LlmError, Message, MessageRole};

    fn config(window: usize, threshold: u32) -> FunnelConfig {
        let mut config = FunnelConfig::default();
        config.session.history_window = window;
        config.session.cta_threshold = threshold;
        config
    }

    fn controller(window: usize, threshold: u32) -> (SessionController, ScriptedProvider) {
        let mock = ScriptedProvider::new("scripted");
        let controller = SessionController::with_instructions(
            &config(window, threshold),
            BoxLlmProvider::new(mock.clone()),
            "RULES",
        )
        .unwrap();
        (controller, mock)
    }

    fn history_texts(controller: &SessionController) -> Vec<String> {
        controller
            .state()
            .history()
            .as_sequence()
            .map(|t| t.text().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_first_exchange() {
        let (mut controller, mock) = controller(5, 5);
        mock.push_reply("Prazer, Ana!");

        let reply = controller.generate_response("Meu nome é Ana").await.unwrap();

        assert_eq!(reply, "Prazer, Ana!");
        assert_eq!(controller.interaction_count(), 1);
        assert_eq!(history_texts(&controller), vec!["Meu nome é Ana", "Prazer, Ana!"]);

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].messages,
            vec![Message::system("RULES"), Message::user("Meu nome é Ana")]
        );
        assert_eq!(requests[0].model, "gpt-4o-mini");
        assert_eq!(requests[0].temperature, Some(0.7));
    }

    #[tokio::test]
    async fn test_request_uses_window_before_new_input() {
        let (mut controller, mock) = controller(5, 5);
        controller.generate_response("U1").await.unwrap();
        controller.generate_response("U2").await.unwrap();

        let second = &mock.requests()[1];
        let contents: Vec<&str> = second.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["RULES", "U1", "reply 1", "U2"]);
        let users = second
            .messages
            .iter()
            .filter(|m| m.role == MessageRole::User && m.content == "U2")
            .count();
        assert_eq!(users, 1);
    }

    #[tokio::test]
    async fn test_window_evicts_oldest_exchange() {
        let (mut controller, mock) = controller(1, 5);
        controller.generate_response("U1").await.unwrap();
        controller.generate_response("U2").await.unwrap();
        controller.generate_response("U3").await.unwrap();

        assert_eq!(history_texts(&controller), vec!["U3", "reply 3"]);
        let third = &mock.requests()[2];
        let contents: Vec<&str> = third.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["RULES", "U2", "reply 2", "U3"]);
    }

    #[tokio::test]
    async fn test_call_to_action_from_fifth_turn_on() {
        let (mut controller, _mock) = controller(5, 5);
        for turn in 1..=4 {
            controller.generate_response(&format!("U{turn}")).await.unwrap();
            assert!(!controller.should_show_call_to_action(), "turn {turn}");
        }

        controller.generate_response("U5").await.unwrap();
        assert!(controller.should_show_call_to_action());

        controller.generate_response("U6").await.unwrap();
        assert!(controller.should_show_call_to_action());
        assert_eq!(controller.interaction_count(), 6);
    }

    #[tokio::test]
    async fn test_counter_increments_by_one_per_turn() {
        let (mut controller, mock) = controller(2, 3);
        mock.push_reply("ok");
        mock.push_error(LlmError::Network("reset".to_string()));

        let mut previous = controller.interaction_count();
        for input in ["a", "b", "c", "d"] {
            let _ = controller.generate_response(input).await;
            assert_eq!(controller.interaction_count(), previous + 1);
            previous = controller.interaction_count();
        }
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_user_turn() {
        let (mut controller, mock) = controller(5, 5);
        mock.push_error(LlmError::AuthenticationFailed);

        let err = controller.generate_response("Olá").await.unwrap_err();

        assert!(matches!(err, FunnelError::Backend(LlmError::AuthenticationFailed)));
        assert!(err.is_recoverable());
        assert_eq!(controller.interaction_count(), 1);
        let history = controller.state().history();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(Turn::role), Some(TurnRole::User));
        assert!(controller.state().last_usage().is_none());
    }

    #[tokio::test]
    async fn test_session_usable_after_backend_failure() {
        let (mut controller, mock) = controller(5, 5);
        mock.push_error(LlmError::Network("timeout".to_string()));
        mock.push_reply("voltei");

        assert!(controller.generate_response("primeira").await.is_err());
        let reply = controller.generate_response("segunda").await.unwrap();
        assert_eq!(reply, "voltei");

        let contents: Vec<String> = mock.requests()[1]
            .messages
            .iter()
            .map(|m| m.content.clone())
            .collect();
        assert_eq!(contents, vec!["RULES", "primeira", "segunda"]);
    }

    #[tokio::test]
    async fn test_unanswered_turns_fill_window_and_count_toward_cta() {
        let (mut controller, mock) = controller(1, 2);
        mock.push_error(LlmError::Network("reset".to_string()));
        mock.push_error(LlmError::Network("reset".to_string()));

        assert!(controller.generate_response("a").await.is_err());
        assert!(controller.generate_response("b").await.is_err());

        assert_eq!(history_texts(&controller), vec!["a", "b"]);
        assert_eq!(controller.interaction_count(), 2);
        assert!(controller.should_show_call_to_action());

        let reply = controller.generate_response("c").await.unwrap();
        assert_eq!(reply, "reply 3");
        assert_eq!(
            mock.requests()[2].messages,
            vec![
                Message::system("RULES"),
                Message::user("a"),
                Message::user("b"),
                Message::user("c"),
            ]
        );
        assert_eq!(history_texts(&controller), vec!["c", "reply 3"]);
    }

    #[tokio::test]
    async fn test_blank_input_rejected_without_state_change() {
        let (mut controller, mock) = controller(5, 5);

        for input in ["", "   ", "\n\t"] {
            let err = controller.generate_response(input).await.unwrap_err();
            assert!(matches!(err, FunnelError::Validation(_)));
        }

        assert_eq!(controller.interaction_count(), 0);
        assert!(controller.state().history().is_empty());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_usage_accumulates() {
        let (mut controller, _mock) = controller(5, 5);
        controller.generate_response("a").await.unwrap();
        controller.generate_response("b").await.unwrap();

        let total = controller.state().total_usage();
        assert_eq!(total.input_tokens, 20);
        assert_eq!(total.output_tokens, 10);
    }

    #[test]
    fn test_new_renders_mentorship_instructions() {
        let controller = SessionController::new(
            &FunnelConfig::default(),
            BoxLlmProvider::new(ScriptedProvider::new("scripted")),
        )
        .unwrap();

        assert!(controller.instructions().starts_with("<persona>"));
        assert!(controller.instructions().contains("FERA Mentor"));
        assert_eq!(controller.model(), "gpt-4o-mini");
        assert_eq!(controller.provider_name(), "scripted");
        assert_eq!(controller.policy().threshold(), 5);
        assert!(!controller.should_show_call_to_action());
        assert!(controller.call_to_action().url.contains("whatsapp"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = FunnelConfig::default();
        config.backend.model = String::new();

        let result = SessionController::new(
            &config,
            BoxLlmProvider::new(ScriptedProvider::new("scripted")),
        );
        assert!(matches!(result, Err(FunnelError::Configuration(_))));
    }
}

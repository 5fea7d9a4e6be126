//! PDF Chat - состояние страницы и переходы
//!
//! Чистые функции без DOM и сигналов. Каждый переход меняет состояние и
//! возвращает список эффектов, которые выполняет `PdfChatVm`.
//! Доступность ввода (`controls`) вычисляется из состояния и ничего не хранит.

use super::progress::{ProgressStep, UploadProgress};
use crate::shared::api_utils::ApiError;
use chrono::{DateTime, Utc};
use contracts::domain::a001_pdf_chat::aggregate::{ChatAuthor, ChatMessage, SelectedFile};
use contracts::shared::pdf_chat_api::AskResponse;
use std::ops::ControlFlow;

pub const ANSWER_FALLBACK: &str = "Sorry, I couldn't find an answer.";
pub const ANSWER_ERROR: &str = "Error: Could not get a response from the server.";
pub const PLACEHOLDER_ENABLED: &str = "Ask a question about your document...";
pub const PLACEHOLDER_DISABLED: &str = "Upload a document first...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
}

/// Откуда пришёл файл. PDF-тип проверяется только для перетаскивания.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrigin {
    Picker,
    Drop,
}

/// Итог запроса `/upload_pdf/` для текущего файла
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Processed { message: Option<String> },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    /// Запустить тикер имитации прогресса для загрузки `ticket`
    StartUploadTicker { ticket: u64 },
    /// Отправить вопрос; ответ применяется, только если `epoch` не устарел
    AskQuestion { epoch: u64, question: String },
    ResetFilePicker,
    ScrollToBottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    /// Прогресс дошёл до 100%, пора отправлять файл
    Completed,
    /// Загрузка отменена или заменена, тикер нужно остановить
    Stale,
}

impl TickResult {
    /// Решение для цикла тикера: `Break(true)` значит "отправить файл",
    /// `Break(false)` значит "остановиться без запроса".
    pub fn control_flow(self) -> ControlFlow<bool> {
        match self {
            TickResult::Continue => ControlFlow::Continue(()),
            TickResult::Completed => ControlFlow::Break(true),
            TickResult::Stale => ControlFlow::Break(false),
        }
    }
}

/// Состояние полей ввода, производное от `PdfChatState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatControls {
    pub input_disabled: bool,
    pub send_disabled: bool,
    pub samples_disabled: bool,
    pub placeholder: &'static str,
}

/// Файл принимается из диалога выбора всегда, из drag-and-drop только PDF
pub fn accepts_file(file: &SelectedFile, origin: FileOrigin) -> bool {
    match origin {
        FileOrigin::Picker => true,
        FileOrigin::Drop => file.is_pdf(),
    }
}

#[derive(Debug, Clone)]
pub struct PdfChatState {
    selected_file: Option<SelectedFile>,
    upload_status: UploadStatus,
    upload_ticket: u64,
    progress: UploadProgress,
    last_upload: Option<UploadOutcome>,
    messages: Vec<ChatMessage>,
    next_seq: u64,
    conversation_epoch: u64,
    draft: String,
    typing: bool,
}

impl PdfChatState {
    pub fn new(max_increment: f64) -> Self {
        Self {
            selected_file: None,
            upload_status: UploadStatus::Idle,
            upload_ticket: 0,
            progress: UploadProgress::new(max_increment),
            last_upload: None,
            messages: Vec::new(),
            next_seq: 0,
            conversation_epoch: 0,
            draft: String::new(),
            typing: false,
        }
    }

    // ------------------------------------------------------------------
    // Чтение
    // ------------------------------------------------------------------

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn upload_status(&self) -> UploadStatus {
        self.upload_status
    }

    pub fn upload_ticket(&self) -> u64 {
        self.upload_ticket
    }

    pub fn progress(&self) -> &UploadProgress {
        &self.progress
    }

    pub fn last_upload(&self) -> Option<&UploadOutcome> {
        self.last_upload.as_ref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn conversation_epoch(&self) -> u64 {
        self.conversation_epoch
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_status == UploadStatus::Uploading
    }

    /// Файл выбран и загрузка не идёт
    pub fn chat_enabled(&self) -> bool {
        self.selected_file.is_some() && !self.is_uploading()
    }

    pub fn send_enabled(&self) -> bool {
        self.chat_enabled() && !self.draft.trim().is_empty()
    }

    pub fn controls(&self) -> ChatControls {
        let enabled = self.chat_enabled();
        ChatControls {
            input_disabled: !enabled,
            send_disabled: !self.send_enabled(),
            samples_disabled: !enabled,
            placeholder: if enabled {
                PLACEHOLDER_ENABLED
            } else {
                PLACEHOLDER_DISABLED
            },
        }
    }

    pub fn welcome_visible(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn drop_zone_visible(&self) -> bool {
        self.selected_file.is_none()
    }

    pub fn progress_visible(&self) -> bool {
        self.is_uploading()
    }

    /// Короткая подпись под именем файла.
    ///
    /// Ошибка загрузки пользователю не показывается, она только пишется в лог.
    pub fn upload_status_label(&self) -> Option<&'static str> {
        if self.selected_file.is_none() {
            return None;
        }
        if self.is_uploading() {
            return Some("Uploading...");
        }
        match self.last_upload {
            Some(UploadOutcome::Processed { .. }) => Some("Ready"),
            Some(UploadOutcome::Failed { .. }) | None => None,
        }
    }

    // ------------------------------------------------------------------
    // Переходы
    // ------------------------------------------------------------------

    /// Выбор файла. Отклонённый файл не меняет состояние.
    pub fn select_file(&mut self, file: SelectedFile, origin: FileOrigin) -> Vec<ChatEffect> {
        if !accepts_file(&file, origin) {
            return Vec::new();
        }
        self.selected_file = Some(file);
        self.upload_ticket += 1;
        self.upload_status = UploadStatus::Uploading;
        self.progress.reset();
        self.last_upload = None;
        vec![ChatEffect::StartUploadTicker {
            ticket: self.upload_ticket,
        }]
    }

    /// Один тик имитации прогресса
    pub fn tick_upload(&mut self, ticket: u64, increment: f64) -> TickResult {
        if ticket != self.upload_ticket || !self.is_uploading() || self.progress.is_complete() {
            return TickResult::Stale;
        }
        match self.progress.advance(increment) {
            ProgressStep::Advanced(_) => TickResult::Continue,
            ProgressStep::Completed => TickResult::Completed,
        }
    }

    /// Сетевой запрос загрузки завершён (успешно или нет).
    ///
    /// Чат включается в обоих случаях: доступность зависит только от
    /// наличия файла и отсутствия активной загрузки.
    pub fn finish_upload(&mut self, ticket: u64, outcome: UploadOutcome) -> bool {
        if ticket != self.upload_ticket || !self.is_uploading() {
            return false;
        }
        self.upload_status = UploadStatus::Idle;
        self.last_upload = Some(outcome);
        true
    }

    pub fn remove_file(&mut self) -> Vec<ChatEffect> {
        self.selected_file = None;
        self.upload_status = UploadStatus::Idle;
        self.upload_ticket += 1;
        self.progress.reset();
        self.last_upload = None;
        self.messages.clear();
        self.conversation_epoch += 1;
        self.typing = false;
        vec![ChatEffect::ResetFilePicker]
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Подставить пример вопроса в поле ввода (без отправки)
    pub fn apply_sample_question(&mut self, question: &str) -> bool {
        if !self.chat_enabled() {
            return false;
        }
        self.draft = question.to_string();
        true
    }

    /// Отправка вопроса из поля ввода
    pub fn submit_question(&mut self, now: DateTime<Utc>) -> Vec<ChatEffect> {
        let question = self.draft.trim().to_string();
        if question.is_empty() || !self.chat_enabled() {
            return Vec::new();
        }
        self.push_message(ChatAuthor::User, question.clone(), now);
        self.draft.clear();
        self.typing = true;
        vec![
            ChatEffect::ScrollToBottom,
            ChatEffect::AskQuestion {
                epoch: self.conversation_epoch,
                question,
            },
        ]
    }

    /// Ответ (или ошибка) на вопрос, заданный в разговоре `epoch`
    pub fn receive_answer(
        &mut self,
        epoch: u64,
        result: Result<AskResponse, ApiError>,
        now: DateTime<Utc>,
    ) -> Vec<ChatEffect> {
        if epoch != self.conversation_epoch {
            return Vec::new();
        }
        let text = match &result {
            Ok(response) => response.answer_text().unwrap_or(ANSWER_FALLBACK),
            Err(_) => ANSWER_ERROR,
        };
        self.push_message(ChatAuthor::Assistant, text, now);
        self.typing = false;
        vec![ChatEffect::ScrollToBottom]
    }

    fn push_message(&mut self, author: ChatAuthor, content: impl Into<String>, now: DateTime<Utc>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let message = match author {
            ChatAuthor::User => ChatMessage::user(seq, content, now),
            ChatAuthor::Assistant => ChatMessage::assistant(seq, content, now),
        };
        self.messages.push(message);
    }
}

impl Default for PdfChatState {
    fn default() -> Self {
        Self::new(super::progress::DEFAULT_MAX_INCREMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::decode_response;
    use proptest::prelude::*;

    fn notes_pdf() -> SelectedFile {
        SelectedFile::new("notes.pdf", 500_000, "application/pdf")
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    /// Прогнать тикер до конца и завершить загрузку
    fn complete_upload(state: &mut PdfChatState, outcome: UploadOutcome) {
        let ticket = state.upload_ticket();
        loop {
            match state.tick_upload(ticket, 15.0) {
                TickResult::Continue => continue,
                TickResult::Completed => break,
                TickResult::Stale => panic!("ticker went stale"),
            }
        }
        assert!(state.finish_upload(ticket, outcome));
    }

    fn ready_state() -> PdfChatState {
        let mut state = PdfChatState::default();
        state.select_file(notes_pdf(), FileOrigin::Picker);
        complete_upload(&mut state, UploadOutcome::Processed { message: None });
        state
    }

    #[test]
    fn test_initial_state_is_disabled() {
        let state = PdfChatState::default();
        assert!(!state.chat_enabled());
        assert!(state.welcome_visible());
        assert!(state.drop_zone_visible());
        let controls = state.controls();
        assert!(controls.input_disabled);
        assert!(controls.send_disabled);
        assert!(controls.samples_disabled);
        assert_eq!(controls.placeholder, PLACEHOLDER_DISABLED);
    }

    #[test]
    fn test_select_file_starts_upload() {
        let mut state = PdfChatState::default();
        let effects = state.select_file(notes_pdf(), FileOrigin::Picker);

        assert_eq!(effects, vec![ChatEffect::StartUploadTicker { ticket: 1 }]);
        assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("notes.pdf"));
        assert!(!state.drop_zone_visible());
        assert!(state.progress_visible());
        assert_eq!(state.upload_status(), UploadStatus::Uploading);
        assert!(!state.chat_enabled());
        assert_eq!(state.upload_status_label(), Some("Uploading..."));
    }

    #[test]
    fn test_upload_completion_enables_chat() {
        let state = ready_state();
        assert!(state.chat_enabled());
        assert!(!state.progress_visible());
        assert_eq!(state.controls().placeholder, PLACEHOLDER_ENABLED);
        assert!(!state.controls().input_disabled);
        // Поле пустое - отправка ещё недоступна
        assert!(state.controls().send_disabled);
        assert_eq!(state.upload_status_label(), Some("Ready"));
    }

    #[test]
    fn test_failed_upload_still_enables_chat() {
        let mut state = PdfChatState::default();
        state.select_file(notes_pdf(), FileOrigin::Picker);
        complete_upload(
            &mut state,
            UploadOutcome::Failed {
                reason: "request failed".into(),
            },
        );
        assert!(state.chat_enabled());
        assert!(!state.progress_visible());
        assert_eq!(state.upload_status_label(), None);
        assert!(matches!(state.last_upload(), Some(UploadOutcome::Failed { .. })));
        assert!(state.messages().is_empty());
    }

    #[test]
    fn test_drop_accepts_only_pdf() {
        let mut state = PdfChatState::default();
        let text_file = SelectedFile::new("notes.txt", 10, "text/plain");

        assert!(state.select_file(text_file.clone(), FileOrigin::Drop).is_empty());
        assert!(state.selected_file().is_none());
        assert_eq!(state.upload_ticket(), 0);

        assert!(!state.select_file(notes_pdf(), FileOrigin::Drop).is_empty());
        assert!(state.selected_file().is_some());
    }

    #[test]
    fn test_picker_does_not_check_type() {
        let mut state = PdfChatState::default();
        let text_file = SelectedFile::new("notes.txt", 10, "text/plain");
        assert!(!state.select_file(text_file, FileOrigin::Picker).is_empty());
        assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("notes.txt"));
    }

    #[test]
    fn test_progress_is_monotonic_and_ends_at_hundred() {
        let mut state = PdfChatState::default();
        state.select_file(notes_pdf(), FileOrigin::Picker);
        let ticket = state.upload_ticket();

        let increments = [3.0, 0.0, 14.99, 7.5, 15.0, 15.0, 11.2, 9.9, 15.0, 15.0, 15.0];
        let mut previous = state.progress().value();
        let mut completed = false;
        for increment in increments {
            match state.tick_upload(ticket, increment) {
                TickResult::Continue => {
                    assert!(state.progress().value() >= previous);
                    assert!(state.progress().value() < 100.0);
                }
                TickResult::Completed => {
                    completed = true;
                    break;
                }
                TickResult::Stale => panic!("unexpected stale tick"),
            }
            previous = state.progress().value();
        }
        assert!(completed);
        assert_eq!(state.progress().value(), 100.0);
        // Пока запрос в полёте, новые тики ничего не меняют
        assert_eq!(state.tick_upload(ticket, 10.0), TickResult::Stale);
        assert!(state.is_uploading());
    }

    #[test]
    fn test_ticker_sends_upload_only_after_completion() {
        assert_eq!(TickResult::Continue.control_flow(), ControlFlow::Continue(()));
        assert_eq!(TickResult::Completed.control_flow(), ControlFlow::Break(true));
        assert_eq!(TickResult::Stale.control_flow(), ControlFlow::Break(false));

        // Полный прогон: цикл прерывается ровно на 100% и просит отправить файл
        let mut state = PdfChatState::default();
        state.select_file(notes_pdf(), FileOrigin::Picker);
        let ticket = state.upload_ticket();
        let mut ticks = 0;
        let send = loop {
            ticks += 1;
            if let ControlFlow::Break(send) = state.tick_upload(ticket, 15.0).control_flow() {
                break send;
            }
        };
        assert!(send);
        assert_eq!(ticks, 7);
        assert_eq!(state.progress().value(), 100.0);
    }

    #[test]
    fn test_ticker_stops_without_upload_after_removal() {
        let mut state = PdfChatState::default();
        state.select_file(notes_pdf(), FileOrigin::Picker);
        let ticket = state.upload_ticket();
        assert_eq!(
            state.tick_upload(ticket, 10.0).control_flow(),
            ControlFlow::Continue(())
        );

        state.remove_file();
        assert_eq!(
            state.tick_upload(ticket, 10.0).control_flow(),
            ControlFlow::Break(false)
        );
    }

    #[test]
    fn test_remove_file_resets_everything() {
        let mut state = ready_state();
        state.set_draft("What is the thesis?");
        let effects = state.submit_question(now());
        assert_eq!(effects.len(), 2);
        assert!(!state.welcome_visible());

        let effects = state.remove_file();
        assert_eq!(effects, vec![ChatEffect::ResetFilePicker]);
        assert!(state.selected_file().is_none());
        assert!(state.messages().is_empty());
        assert!(state.welcome_visible());
        assert!(state.drop_zone_visible());
        assert!(!state.progress_visible());
        assert!(!state.is_typing());
        assert!(!state.chat_enabled());
        assert_eq!(state.progress().value(), 0.0);
    }

    #[test]
    fn test_remove_during_upload_stops_ticker() {
        let mut state = PdfChatState::default();
        state.select_file(notes_pdf(), FileOrigin::Picker);
        let ticket = state.upload_ticket();
        assert_eq!(state.tick_upload(ticket, 5.0), TickResult::Continue);

        state.remove_file();
        assert_eq!(state.tick_upload(ticket, 5.0), TickResult::Stale);
        assert!(!state.finish_upload(ticket, UploadOutcome::Processed { message: None }));
        assert_eq!(state.upload_status(), UploadStatus::Idle);
    }

    #[test]
    fn test_replaced_file_ignores_old_completion() {
        let mut state = PdfChatState::default();
        state.select_file(notes_pdf(), FileOrigin::Picker);
        let old_ticket = state.upload_ticket();

        state.select_file(SelectedFile::new("thesis.pdf", 10, "application/pdf"), FileOrigin::Picker);
        assert!(!state.finish_upload(old_ticket, UploadOutcome::Processed { message: None }));
        assert!(state.is_uploading());
        assert!(!state.chat_enabled());
        assert_eq!(state.tick_upload(old_ticket, 5.0), TickResult::Stale);
    }

    #[test]
    fn test_send_question_flow() {
        let mut state = ready_state();
        state.set_draft("  What is the thesis?  ");
        assert!(!state.controls().send_disabled);

        let effects = state.submit_question(now());
        assert_eq!(
            effects,
            vec![
                ChatEffect::ScrollToBottom,
                ChatEffect::AskQuestion {
                    epoch: state.conversation_epoch(),
                    question: "What is the thesis?".into(),
                },
            ]
        );
        assert_eq!(state.messages().len(), 1);
        assert!(state.messages()[0].is_user());
        assert_eq!(state.messages()[0].content, "What is the thesis?");
        assert_eq!(state.draft(), "");
        assert!(state.controls().send_disabled);
        assert!(state.is_typing());

        let epoch = state.conversation_epoch();
        let answer = AskResponse {
            answer: Some("The thesis is that Rust is fun.".into()),
        };
        let effects = state.receive_answer(epoch, Ok(answer), now());
        assert_eq!(effects, vec![ChatEffect::ScrollToBottom]);
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[1].author, ChatAuthor::Assistant);
        assert_eq!(state.messages()[1].content, "The thesis is that Rust is fun.");
        assert!(!state.is_typing());
    }

    #[test]
    fn test_missing_answer_uses_fallback() {
        let mut state = ready_state();
        state.set_draft("Hello?");
        state.submit_question(now());
        let epoch = state.conversation_epoch();
        state.receive_answer(epoch, Ok(AskResponse::default()), now());
        assert_eq!(state.messages()[1].content, ANSWER_FALLBACK);
    }

    #[test]
    fn test_error_status_json_body_uses_fallback() {
        let mut state = ready_state();
        state.set_draft("Hello?");
        state.submit_question(now());
        let epoch = state.conversation_epoch();
        // 422 от сервера с JSON-телом без `answer`
        let result = decode_response::<AskResponse>(422, r#"{"detail":"field required"}"#);
        state.receive_answer(epoch, result, now());
        assert_eq!(state.messages()[1].content, ANSWER_FALLBACK);
        assert!(!state.is_typing());
    }

    #[test]
    fn test_failed_request_uses_error_message() {
        let mut state = ready_state();
        state.set_draft("Hello?");
        state.submit_question(now());
        let epoch = state.conversation_epoch();
        state.receive_answer(
            epoch,
            Err(ApiError::Transport("Failed to fetch".into())),
            now(),
        );
        assert_eq!(state.messages()[1].content, ANSWER_ERROR);
        assert!(!state.is_typing());
    }

    #[test]
    fn test_blank_input_is_never_sent() {
        let mut state = ready_state();
        for blank in ["", "   ", "\n\t "] {
            state.set_draft(blank);
            assert!(state.controls().send_disabled);
            assert!(state.submit_question(now()).is_empty());
        }
        assert!(state.messages().is_empty());
        assert!(!state.is_typing());
    }

    #[test]
    fn test_cannot_send_while_uploading() {
        let mut state = PdfChatState::default();
        state.select_file(notes_pdf(), FileOrigin::Picker);
        state.set_draft("Too early");
        assert!(state.submit_question(now()).is_empty());
        assert!(state.messages().is_empty());
    }

    #[test]
    fn test_answer_after_removal_is_dropped() {
        let mut state = ready_state();
        state.set_draft("What is the thesis?");
        state.submit_question(now());
        let epoch = state.conversation_epoch();

        state.remove_file();
        let effects = state.receive_answer(
            epoch,
            Ok(AskResponse {
                answer: Some("late".into()),
            }),
            now(),
        );
        assert!(effects.is_empty());
        assert!(state.messages().is_empty());
    }

    #[test]
    fn test_sample_question_only_when_enabled() {
        let mut state = PdfChatState::default();
        assert!(!state.apply_sample_question("Summarize this document"));
        assert_eq!(state.draft(), "");

        let mut state = ready_state();
        assert!(state.apply_sample_question("Summarize this document"));
        assert_eq!(state.draft(), "Summarize this document");
        // Пример только подставляется, не отправляется
        assert!(state.messages().is_empty());
    }

    #[test]
    fn test_message_seq_is_unique_within_same_millisecond() {
        let mut state = ready_state();
        let at = now();
        state.set_draft("one");
        state.submit_question(at);
        let epoch = state.conversation_epoch();
        state.receive_answer(epoch, Ok(AskResponse::default()), at);

        let messages = state.messages();
        assert_eq!(messages[0].id, messages[1].id);
        assert_ne!(messages[0].seq, messages[1].seq);
    }

    #[test]
    fn test_controls_are_idempotent() {
        let state = ready_state();
        assert_eq!(state.controls(), state.controls());
    }

    #[derive(Debug, Clone)]
    enum Event {
        Pick(bool),
        Drop(bool),
        Tick(f64),
        Finish(bool),
        FinishStale,
        Remove,
        Draft(String),
        Submit,
        Answer,
    }

    fn event_strategy() -> impl Strategy<Value = Event> {
        prop_oneof![
            any::<bool>().prop_map(Event::Pick),
            any::<bool>().prop_map(Event::Drop),
            (0.0f64..30.0).prop_map(Event::Tick),
            any::<bool>().prop_map(Event::Finish),
            Just(Event::FinishStale),
            Just(Event::Remove),
            "[ a-z?]{0,8}".prop_map(Event::Draft),
            Just(Event::Submit),
            Just(Event::Answer),
        ]
    }

    fn file(is_pdf: bool) -> SelectedFile {
        if is_pdf {
            notes_pdf()
        } else {
            SelectedFile::new("notes.txt", 10, "text/plain")
        }
    }

    proptest! {
        #[test]
        fn prop_chat_enabled_iff_selected_and_idle(
            events in proptest::collection::vec(event_strategy(), 0..60)
        ) {
            let mut state = PdfChatState::default();
            let mut pending_epochs = Vec::new();

            for event in events {
                let ticket = state.upload_ticket();
                let previous_progress = state.progress().value();
                match event {
                    Event::Pick(is_pdf) => { state.select_file(file(is_pdf), FileOrigin::Picker); }
                    Event::Drop(is_pdf) => { state.select_file(file(is_pdf), FileOrigin::Drop); }
                    Event::Tick(increment) => {
                        if state.tick_upload(ticket, increment) != TickResult::Stale {
                            prop_assert!(state.progress().value() >= previous_progress);
                        }
                        prop_assert!(state.progress().value() <= 100.0);
                    }
                    Event::Finish(ok) => {
                        let outcome = if ok {
                            UploadOutcome::Processed { message: None }
                        } else {
                            UploadOutcome::Failed { reason: "offline".into() }
                        };
                        state.finish_upload(ticket, outcome);
                    }
                    Event::FinishStale => {
                        let before = state.upload_status();
                        state.finish_upload(ticket.wrapping_sub(1), UploadOutcome::Processed { message: None });
                        prop_assert_eq!(state.upload_status(), before);
                    }
                    Event::Remove => {
                        state.remove_file();
                        prop_assert!(state.messages().is_empty());
                        prop_assert!(state.welcome_visible());
                    }
                    Event::Draft(text) => state.set_draft(text),
                    Event::Submit => {
                        let blank = state.draft().trim().is_empty();
                        let before = state.messages().len();
                        for effect in state.submit_question(Utc::now()) {
                            if let ChatEffect::AskQuestion { epoch, .. } = effect {
                                pending_epochs.push(epoch);
                            }
                        }
                        if blank {
                            prop_assert_eq!(state.messages().len(), before);
                        }
                    }
                    Event::Answer => {
                        if !pending_epochs.is_empty() {
                            let epoch = pending_epochs.remove(0);
                            state.receive_answer(epoch, Ok(AskResponse::default()), Utc::now());
                        }
                    }
                }

                let expected = state.selected_file().is_some()
                    && state.upload_status() == UploadStatus::Idle;
                prop_assert_eq!(state.chat_enabled(), expected);
                prop_assert_eq!(state.controls().input_disabled, !expected);
                if state.selected_file().is_none() {
                    prop_assert!(state.messages().is_empty());
                }
            }
        }
    }
}

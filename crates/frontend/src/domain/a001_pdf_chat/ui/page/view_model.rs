//! PDF Chat - View Model
//!
//! Держит `PdfChatState` в сигнале и выполняет эффекты, которые возвращают
//! переходы: таймер прогресса, сетевые запросы, сброс input и прокрутку.

use super::model::{ask_question, upload_pdf};
use super::progress::{drive_ticks, RandomIncrements};
use super::state::{accepts_file, ChatEffect, FileOrigin, PdfChatState, TickResult, UploadOutcome};
use crate::shared::config::ClientConfig;
use chrono::Utc;
use contracts::domain::a001_pdf_chat::aggregate::SelectedFile;
use contracts::shared::pdf_chat_api::{ASK_PATH, UPLOAD_PDF_PATH};
use leptos::prelude::*;
use std::ops::ControlFlow;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy)]
pub struct PdfChatVm {
    pub state: RwSignal<PdfChatState>,
    pub drag_active: RwSignal<bool>,
    pub file_input_ref: NodeRef<leptos::html::Input>,
    pub messages_ref: NodeRef<leptos::html::Div>,
    /// Выбранный файл браузера; в состоянии хранятся только его метаданные
    file_handle: StoredValue<Option<web_sys::File>, LocalStorage>,
    config: StoredValue<ClientConfig>,
}

impl PdfChatVm {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            state: RwSignal::new(PdfChatState::new(config.upload.max_increment)),
            drag_active: RwSignal::new(false),
            file_input_ref: NodeRef::new(),
            messages_ref: NodeRef::new(),
            file_handle: StoredValue::new_local(None),
            config: StoredValue::new(config),
        }
    }

    // ------------------------------------------------------------------
    // Файл
    // ------------------------------------------------------------------

    pub fn select_file(&self, file: web_sys::File, origin: FileOrigin) {
        let meta = SelectedFile::new(file.name(), file.size() as u64, file.type_());
        if !accepts_file(&meta, origin) {
            log::debug!("Ignoring dropped file {} ({})", meta.name, meta.mime_type);
            return;
        }
        self.file_handle.set_value(Some(file));
        let effects = self
            .state
            .try_update(|s| s.select_file(meta, origin))
            .unwrap_or_default();
        self.run_effects(effects);
    }

    pub fn on_file_input_change(&self, ev: web_sys::Event) {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            self.select_file(file, FileOrigin::Picker);
        }
    }

    pub fn on_drop(&self, ev: web_sys::DragEvent) {
        ev.prevent_default();
        ev.stop_propagation();
        self.drag_active.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            self.select_file(file, FileOrigin::Drop);
        }
    }

    pub fn set_drag_active(&self, ev: web_sys::DragEvent, active: bool) {
        ev.prevent_default();
        ev.stop_propagation();
        self.drag_active.set(active);
    }

    pub fn open_picker(&self) {
        if let Some(input) = self.file_input_ref.get_untracked() {
            input.click();
        }
    }

    /// Клик по зоне перетаскивания открывает выбор файла, только пока файла нет
    pub fn on_drop_zone_click(&self) {
        if self.state.with_untracked(|s| s.selected_file().is_none()) {
            self.open_picker();
        }
    }

    pub fn remove_file(&self) {
        self.file_handle.set_value(None);
        let effects = self.state.try_update(|s| s.remove_file()).unwrap_or_default();
        self.run_effects(effects);
    }

    // ------------------------------------------------------------------
    // Чат
    // ------------------------------------------------------------------

    pub fn set_draft(&self, text: String) {
        self.state.update(|s| s.set_draft(text));
    }

    pub fn use_sample_question(&self, question: &str) {
        self.state.update(|s| {
            s.apply_sample_question(question);
        });
    }

    pub fn submit(&self) {
        let effects = self
            .state
            .try_update(|s| s.submit_question(Utc::now()))
            .unwrap_or_default();
        self.run_effects(effects);
    }

    // ------------------------------------------------------------------
    // Эффекты
    // ------------------------------------------------------------------

    fn run_effects(&self, effects: Vec<ChatEffect>) {
        for effect in effects {
            match effect {
                ChatEffect::StartUploadTicker { ticket } => self.start_upload_ticker(ticket),
                ChatEffect::AskQuestion { epoch, question } => self.ask(epoch, question),
                ChatEffect::ResetFilePicker => {
                    if let Some(input) = self.file_input_ref.get_untracked() {
                        input.set_value("");
                    }
                }
                ChatEffect::ScrollToBottom => self.scroll_to_bottom(),
            }
        }
    }

    fn start_upload_ticker(&self, ticket: u64) {
        let vm = *self;
        let (interval_ms, max_increment) = self
            .config
            .with_value(|c| (c.upload.tick_interval_ms, c.upload.max_increment));

        leptos::task::spawn_local(async move {
            let completed = drive_ticks(interval_ms, max_increment, RandomIncrements, |increment| {
                vm.state
                    .try_update(|s| s.tick_upload(ticket, increment))
                    .map_or(ControlFlow::Break(false), TickResult::control_flow)
            })
            .await;

            if completed {
                vm.send_upload(ticket).await;
            }
        });
    }

    async fn send_upload(self, ticket: u64) {
        let outcome = match self.file_handle.get_value() {
            Some(file) => {
                let url = self.config.with_value(|c| c.endpoint_url(UPLOAD_PDF_PATH));
                match upload_pdf(&url, &file).await {
                    Ok(response) => {
                        log::info!(
                            "PDF uploaded: {}",
                            response.message.as_deref().unwrap_or("no message")
                        );
                        UploadOutcome::Processed {
                            message: response.message,
                        }
                    }
                    Err(e) => {
                        log::error!("Error uploading file. Make sure the server is running. ({})", e);
                        UploadOutcome::Failed {
                            reason: e.to_string(),
                        }
                    }
                }
            }
            None => UploadOutcome::Failed {
                reason: "no file selected".to_string(),
            },
        };

        let applied = self
            .state
            .try_update(|s| s.finish_upload(ticket, outcome))
            .unwrap_or(false);
        if !applied {
            log::debug!("Upload #{} finished after it was replaced or removed", ticket);
        }
    }

    fn ask(&self, epoch: u64, question: String) {
        let vm = *self;
        let url = self.config.with_value(|c| c.endpoint_url(ASK_PATH));
        log::debug!("Asking question: {}", question);

        leptos::task::spawn_local(async move {
            let result = ask_question(&url, &question).await;
            if let Err(e) = &result {
                log::warn!("Ask request failed: {}", e);
            }
            let effects = vm
                .state
                .try_update(|s| s.receive_answer(epoch, result, Utc::now()))
                .unwrap_or_default();
            vm.run_effects(effects);
        });
    }

    fn scroll_to_bottom(&self) {
        if let Some(container) = self.messages_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    }
}

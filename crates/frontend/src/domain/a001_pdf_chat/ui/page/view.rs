//! PDF Chat - View Component

use super::view_model::PdfChatVm;
use crate::shared::config::ClientConfig;
use crate::shared::format::format_file_size;
use crate::shared::html::message_paragraph_html;
use crate::shared::icons::icon;
use contracts::domain::a001_pdf_chat::aggregate::ChatMessage;
use leptos::prelude::*;
use thaw::*;

const SAMPLE_QUESTIONS: [&str; 3] = [
    "Summarize this document",
    "What are the key findings?",
    "Explain the main concepts",
];

#[component]
#[allow(non_snake_case)]
pub fn PdfChatPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let vm = PdfChatVm::new(config);

    view! {
        <div class="pdf-chat">
            <UploadPanel vm=vm />
            <ChatPanel vm=vm />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn UploadPanel(vm: PdfChatVm) -> impl IntoView {
    let file_name = move || {
        vm.state
            .with(|s| s.selected_file().map(|f| f.name.clone()))
            .unwrap_or_default()
    };
    let file_size = move || {
        vm.state
            .with(|s| s.selected_file().map(|f| format_file_size(f.size)))
            .unwrap_or_default()
    };

    view! {
        <section class="upload-panel">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="margin-bottom: 16px;"
            >
                <h2 class="upload-panel__title">"Your document"</h2>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.open_picker()
                >
                    {icon("upload")}
                    " Upload PDF"
                </Button>
            </Flex>

            <input
                type="file"
                accept=".pdf,application/pdf"
                style="display: none;"
                node_ref=vm.file_input_ref
                on:change=move |ev| vm.on_file_input_change(ev)
            />

            // Drop zone - скрыта, пока файл выбран
            <div
                class=move || {
                    let mut class = String::from("drag-drop-area");
                    if vm.drag_active.get() {
                        class.push_str(" drag-active");
                    }
                    if !vm.state.with(|s| s.drop_zone_visible()) {
                        class.push_str(" hidden");
                    }
                    class
                }
                on:click=move |_| vm.on_drop_zone_click()
                on:dragenter=move |ev: web_sys::DragEvent| vm.set_drag_active(ev, true)
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                }
                on:dragleave=move |ev: web_sys::DragEvent| vm.set_drag_active(ev, false)
                on:drop=move |ev: web_sys::DragEvent| vm.on_drop(ev)
            >
                {icon("upload")}
                <p class="drag-drop-area__title">"Drop your PDF here"</p>
                <p class="drag-drop-area__hint">"or click to browse"</p>
            </div>

            <Show when=move || vm.state.with(|s| s.selected_file().is_some())>
                <div class="file-chip">
                    {icon("document")}
                    <div class="file-chip__info">
                        <span class="file-chip__name">{file_name}</span>
                        <span class="file-chip__size">{file_size}</span>
                        {move || {
                            vm.state
                                .with(|s| s.upload_status_label())
                                .map(|label| view! { <span class="file-chip__status">{label}</span> })
                        }}
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.remove_file()
                    >
                        {icon("close")}
                    </Button>
                </div>
            </Show>

            <Show when=move || vm.state.with(|s| s.progress_visible())>
                <div class="upload-progress">
                    <div class="upload-progress__track">
                        <div
                            class="upload-progress__bar"
                            style=move || format!("width: {}%;", vm.state.with(|s| s.progress().value()))
                        ></div>
                    </div>
                    <span class="upload-progress__percent">
                        {move || vm.state.with(|s| s.progress().percent_label())}
                    </span>
                </div>
            </Show>
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn ChatPanel(vm: PdfChatVm) -> impl IntoView {
    view! {
        <section class="chat-panel">
            <div class="chat-messages" node_ref=vm.messages_ref>
                <Show when=move || vm.state.with(|s| s.welcome_visible())>
                    <WelcomeMessage vm=vm />
                </Show>

                <For
                    each=move || vm.state.with(|s| s.messages().to_vec())
                    key=|msg| msg.seq
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>

                <Show when=move || vm.state.with(|s| s.is_typing())>
                    <TypingIndicator />
                </Show>
            </div>

            <ChatComposer vm=vm />
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn WelcomeMessage(vm: PdfChatVm) -> impl IntoView {
    view! {
        <div class="welcome-message">
            <h3 class="welcome-message__title">"Ask anything about your PDF"</h3>
            <p class="welcome-message__text">
                "Upload a document, wait for it to be processed, then ask questions about its content."
            </p>
            <div class="sample-questions">
                {SAMPLE_QUESTIONS
                    .into_iter()
                    .map(|question| {
                        view! {
                            <button
                                class="sample-question-btn"
                                data-question=question
                                disabled=move || vm.state.with(|s| s.controls().samples_disabled)
                                on:click=move |_| vm.use_sample_question(question)
                            >
                                {question}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Сообщение чата. Текст экранируется перед вставкой через `inner_html`.
#[component]
#[allow(non_snake_case)]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let body = message_paragraph_html(&message.content);
    let test_id = message.test_id();

    if message.is_user() {
        view! {
            <div class="chat-message user-message" data-testid=test_id>
                <div class="user-message-bubble" inner_html=body></div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="chat-message ai-message" data-testid=test_id>
                <div class="ai-avatar-small">{icon("assistant")}</div>
                <div class="ai-message-bubble" inner_html=body></div>
            </div>
        }
        .into_any()
    }
}

#[component]
#[allow(non_snake_case)]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="chat-message ai-message typing-indicator">
            <div class="ai-avatar-small">{icon("assistant")}</div>
            <div class="ai-message-bubble">
                <span class="typing-dot"></span>
                <span class="typing-dot"></span>
                <span class="typing-dot"></span>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ChatComposer(vm: PdfChatVm) -> impl IntoView {
    view! {
        <div class="chat-input-area">
            <textarea
                class="chat-input"
                rows="1"
                prop:value=move || vm.state.with(|s| s.draft().to_string())
                placeholder=move || vm.state.with(|s| s.controls().placeholder)
                disabled=move || vm.state.with(|s| s.controls().input_disabled)
                on:input=move |ev| vm.set_draft(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    // Enter - отправить, Shift+Enter - перенос строки
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        vm.submit();
                    }
                }
            ></textarea>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || vm.state.with(|s| s.controls().send_disabled))
                on_click=move |_| vm.submit()
            >
                {icon("send")}
            </Button>
        </div>
    }
}

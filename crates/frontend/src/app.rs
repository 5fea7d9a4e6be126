use crate::domain::a001_pdf_chat::ui::page::PdfChatPage;
use crate::shared::config::{load_config, ClientConfig};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        ClientConfig::default()
    });
    log::info!("PDF chat server: {}", config.server.base_url);

    // Provide the client configuration to the whole app via context.
    provide_context(config);

    view! {
        <ConfigProvider>
            <PdfChatPage />
        </ConfigProvider>
    }
}

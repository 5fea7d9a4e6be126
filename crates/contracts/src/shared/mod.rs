pub mod pdf_chat_api;

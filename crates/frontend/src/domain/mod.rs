pub mod a001_pdf_chat;

//! Контракт внешнего сервера вопросов-ответов по PDF
//!
//! Оба запроса отправляются как `multipart/form-data`, ответы приходят в JSON.

use serde::{Deserialize, Serialize};

/// `POST` — загрузка PDF, поле формы [`UPLOAD_FILE_FIELD`]
pub const UPLOAD_PDF_PATH: &str = "/upload_pdf/";
/// `POST` — вопрос по документу, поле формы [`ASK_QUESTION_FIELD`]
pub const ASK_PATH: &str = "/ask/";

pub const UPLOAD_FILE_FIELD: &str = "file";
pub const ASK_QUESTION_FIELD: &str = "question";

/// Ответ на загрузку PDF. Клиенту важен только сам факт разбора JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPdfResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Ответ на вопрос
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

impl AskResponse {
    /// Текст ответа; пустая строка считается отсутствующим ответом
    pub fn answer_text(&self) -> Option<&str> {
        self.answer.as_deref().filter(|a| !a.is_empty())
    }
}

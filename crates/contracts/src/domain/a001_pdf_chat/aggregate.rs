use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// MIME-тип, который принимается при перетаскивании файла
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Автор сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatAuthor {
    User,
    Assistant,
}

impl ChatAuthor {
    /// Короткая метка для `data-testid` (`user` / `ai`)
    pub fn test_tag(&self) -> &'static str {
        match self {
            ChatAuthor::User => "user",
            ChatAuthor::Assistant => "ai",
        }
    }
}

/// Сообщение чата
///
/// `id` строится из времени создания в миллисекундах и может совпасть у двух
/// сообщений, созданных в одну миллисекунду. Для ключей списка используется `seq`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub seq: u64,
    pub content: String,
    pub author: ChatAuthor,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(
        seq: u64,
        author: ChatAuthor,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: created_at.timestamp_millis().to_string(),
            seq,
            content: content.into(),
            author,
            created_at,
        }
    }

    /// Создать сообщение пользователя
    pub fn user(seq: u64, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(seq, ChatAuthor::User, content, created_at)
    }

    /// Создать сообщение ассистента
    pub fn assistant(seq: u64, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(seq, ChatAuthor::Assistant, content, created_at)
    }

    pub fn is_user(&self) -> bool {
        self.author == ChatAuthor::User
    }

    pub fn test_id(&self) -> String {
        format!("message-{}-{}", self.author.test_tag(), self.id)
    }
}

/// Выбранный пользователем файл (только метаданные, сам blob живёт в браузере)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME_TYPE
    }
}

//! Контракты PDF-чата: общие типы для фронтенда и внешнего сервера.

pub mod domain;
pub mod shared;

//! PDF Chat - Model (API functions)

use crate::shared::api_utils::{decode_response, ApiError};
use contracts::shared::pdf_chat_api::{
    AskResponse, UploadPdfResponse, ASK_QUESTION_FIELD, UPLOAD_FILE_FIELD,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::FormData;

/// Загрузить PDF на сервер
pub async fn upload_pdf(url: &str, file: &web_sys::File) -> Result<UploadPdfResponse, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form.append_with_blob_and_filename(UPLOAD_FILE_FIELD, file, &file.name())
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;

    post_form(url, form).await
}

/// Задать вопрос по загруженному документу
pub async fn ask_question(url: &str, question: &str) -> Result<AskResponse, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form.append_with_str(ASK_QUESTION_FIELD, question)
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;

    post_form(url, form).await
}

/// POST multipart-формы и разбор JSON-ответа (при любом HTTP-статусе)
async fn post_form<T: DeserializeOwned>(url: &str, form: FormData) -> Result<T, ApiError> {
    let response = Request::post(url)
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_response(status, &text)
}

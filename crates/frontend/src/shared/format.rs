//! Форматирование размеров файлов

const FILE_SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Размер файла в человекочитаемом виде: два знака после запятой, без хвостовых нулей
///
/// # Примеры
///
/// ```
/// use pdf_chat_frontend::shared::format::format_file_size;
///
/// assert_eq!(format_file_size(500_000), "488.28 KB");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < FILE_SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_decimals(value), FILE_SIZE_UNITS[unit])
}

/// Округляет до двух знаков и убирает незначащие нули ("1.50" -> "1.5", "2.00" -> "2")
fn trim_decimals(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

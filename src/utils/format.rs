use chrono::{DateTime, NaiveDateTime};

/// Formatea fechas del backend como "Jan 5, 2024, 02:03 PM".
/// Acepta RFC 3339, RFC 2822 y "YYYY-MM-DD HH:MM:SS"; si no reconoce el
/// formato devuelve el texto original.
pub fn format_date(raw: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y, %I:%M %p";

    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format(DISPLAY).to_string();
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return date.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, pattern) {
            return date.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}

/// Recorta texto largo para tablas
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

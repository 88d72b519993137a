//! Форматирование дат и сумм для журнала и редакторов.

use chrono::Utc;

/// Сегодняшняя дата в формате YYYY-MM-DD — значение по умолчанию
/// для даты нового документа
pub fn today_iso() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// ISO-дата в виде DD.MM.YYYY
/// Example: "2025-03-14" или "2025-03-14T10:02:26Z" -> "14.03.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Денежная сумма: два знака после точки, пробел между тысячами
///
/// # Примеры
///
/// ```ignore
/// let formatted = format_money(1234567.89);
/// assert_eq!(formatted, "1 234 567.89");
/// ```
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d),
        None => (formatted.as_str(), ""),
    };

    // Пробелы каждые три цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let grouped: String = result.chars().rev().collect();

    format!("{}.{}", grouped, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-14"), "14.03.2025");
        assert_eq!(format_date("2025-03-14T10:02:26.123Z"), "14.03.2025");
        assert_eq!(format_date("invalid"), "invalid");
    }
}

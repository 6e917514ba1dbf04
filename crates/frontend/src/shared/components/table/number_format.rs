//! Утилиты форматирования чисел для таблиц и экспорта

/// Разделитель тысяч (кип в отчётах пишется как `15,000`)
pub const THOUSANDS_SEPARATOR: char = ',';

/// Форматирует число с разделителем тысяч и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    // "-0" после округления не показываем
    let sign = if digits.chars().all(|c| c == '0')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежная сумма: целые без дробной части, остальные с 2 знаками
///
/// ```
/// use frontend::shared::components::table::number_format::format_amount;
/// assert_eq!(format_amount(2000.0), "2,000");
/// assert_eq!(format_amount(1234.5), "1,234.50");
/// ```
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number_with_decimals(value, 0)
    } else {
        format_number_with_decimals(value, 2)
    }
}

use crate::error::ValidationError;

/// Имя валидно, если начинается с латинской буквы. Остальные символы не проверяются
pub fn name_is_valid(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Телефон валиден, если он не пустой и не состоит целиком из букв.
/// Буква - Unicode-свойство Alphabetic: оно шире категорий L* и включает,
/// например, римские цифры (`Nl`), так что "ⅻ" тоже отклоняется
pub fn phone_is_valid(phone: &str) -> bool {
    !phone.is_empty() && !phone.chars().all(char::is_alphabetic)
}

/// Проверяет запись целиком. Имя проверяется первым, наружу уходит одна ошибка
pub fn validate_name_and_phone(name: &str, phone: &str) -> Result<(), ValidationError> {
    if !name_is_valid(name) {
        return Err(ValidationError::InvalidName);
    }
    if !phone_is_valid(phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

use thiserror::Error;

/// Ошибки команд. `Display` - готовый текст для пользователя
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Имя или телефон не прошли проверку
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Не хватает аргументов команды
    #[error("Wrong number of parameters, please check your input")]
    Arity,

    /// Неизвестная команда
    #[error("Invalid command, please check your input")]
    InvalidCommand,

    /// `add` для уже существующего имени
    #[error(
        "{name} already is in contacts. If you want to make changes to the record, \
         use 'change [name] [phone]' command instead"
    )]
    Duplicate {
        /// имя, которое уже есть в книге
        name: String,
    },

    /// Записи с таким именем нет
    #[error("Sorry, there's no such record, enter another name or check your spelling")]
    NotFound,
}

/// Ошибки валидации записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Имя пустое или начинается не с латинской буквы
    #[error("Please enter a proper name")]
    InvalidName,

    /// Телефон пустой или состоит только из букв
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Приглашение интерактивного цикла (без перевода строки)
pub const PROMPT: &str = "Please enter your command here >>> ";

/// Фразы выхода. Сравниваются с вводом как есть, до приведения к нижнему регистру
pub const QUIT_COMMANDS: [&str; 3] = ["good bye", "close", "exit"];

/// Ответ на фразу выхода
pub const FAREWELL: &str = "Good bye!";

/// Ответ на `hello`
pub const GREETING: &str = "How can I help you?";

/// Записи, с которыми стартует книга по умолчанию
pub const SEED_CONTACTS: [(&str, &str); 3] = [
    ("John", "123-456-7890"),
    ("Alice", "987-654-3210"),
    ("Bob", "555-555-5555"),
];

use std::fmt;

use crate::error::ContactError;

/// Разобранная команда одной строки ввода
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello...`
    Greet,
    /// `show all`
    ListAll,
    /// `phone <name>`
    Lookup {
        /// имя в капитализированном виде
        name: String,
    },
    /// `add <name> <phone>`
    Add {
        /// имя в капитализированном виде
        name: String,
        /// телефон как введён
        phone: String,
    },
    /// `change <name> <phone>`
    Change {
        /// имя в капитализированном виде
        name: String,
        /// телефон как введён
        phone: String,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Greet => write!(f, "hello"),
            Command::ListAll => write!(f, "show all"),
            Command::Lookup { name } => write!(f, "phone {name}"),
            Command::Add { name, phone } => write!(f, "add {name} {phone}"),
            Command::Change { name, phone } => write!(f, "change {name} {phone}"),
        }
    }
}

/// Парсит строку, уже приведённую к нижнему регистру.
/// Ключевые слова сравниваются по префиксу (кроме `show all`), побеждает первое совпадение:
/// "hello", "show all", "phone alice", "add alice 123", "change alice 456"
pub fn parse_command(line: &str) -> Result<Command, ContactError> {
    match line {
        l if l.starts_with("hello") => Ok(Command::Greet),
        "show all" => Ok(Command::ListAll),
        l if l.starts_with("phone") => {
            let name = l.split_whitespace().nth(1).ok_or(ContactError::Arity)?;
            Ok(Command::Lookup {
                name: capitalize(name),
            })
        }
        l if l.starts_with("add") => {
            let (name, phone) = parse_name_and_phone(l)?;
            Ok(Command::Add { name, phone })
        }
        l if l.starts_with("change") => {
            let (name, phone) = parse_name_and_phone(l)?;
            Ok(Command::Change { name, phone })
        }
        _ => Err(ContactError::InvalidCommand),
    }
}

// "<cmd> <name> <phone> [лишнее игнорируется]"
fn parse_name_and_phone(line: &str) -> Result<(String, String), ContactError> {
    let mut parts = line.split_whitespace().skip(1);
    let name = parts.next().ok_or(ContactError::Arity)?;
    let phone = parts.next().ok_or(ContactError::Arity)?;

    Ok((capitalize(name), phone.to_string()))
}

/// Первый символ в заглавный, остальные в нижний: "aLiCe" -> "Alice".
/// Если заглавная форма первого символа длиннее одного символа ("ß" -> "SS"),
/// в верхнем регистре остаётся только её первый символ: "ßob" -> "Ssob"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut out = String::with_capacity(s.len());
    out.extend(upper.next());
    out.extend(upper.flat_map(char::to_lowercase));
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

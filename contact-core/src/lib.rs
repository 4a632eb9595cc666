//! # contact-core
//!
//! Типы и логика телефонной книги для `contact-book`.
//!
//! Этот крейт содержит:
//!
//! - [`protocol`] — парсинг текстовых команд (`hello`, `show all`, `phone`, `add`, `change`)
//! - [`handlers`] — выполнение команд над книгой
//! - [`store`] — сама книга (имя -> телефон)
//! - [`validator`] — проверка имени и телефона
//! - [`table`] — вывод списка контактов таблицей
//! - [`error`] — типы ошибок
//!
//! ## Быстрый пример: команда над книгой
//!
//! ```rust
//! use contact_core::{execute, parse_command, ContactStore};
//!
//! let mut store = ContactStore::with_seed();
//!
//! let cmd = parse_command("add carol 111-1111").unwrap();
//! assert_eq!(execute(&mut store, &cmd).unwrap(), "Carol's phone has been added to contacts");
//!
//! let cmd = parse_command("phone carol").unwrap();
//! assert_eq!(execute(&mut store, &cmd).unwrap(), "Carol's phone is 111-1111");
//! ```
//!
//! ## Пример: ошибки - это текст для пользователя
//!
//! ```rust
//! use contact_core::{parse_command, ContactError};
//!
//! let err = parse_command("phone").unwrap_err();
//! assert_eq!(err, ContactError::Arity);
//! assert_eq!(err.to_string(), "Wrong number of parameters, please check your input");
//! ```
//!
//! ## Пример: таблица контактов
//!
//! ```rust
//! use contact_core::{handlers, ContactStore};
//!
//! let store = ContactStore::with_seed();
//! assert_eq!(
//!     handlers::list_all(&store),
//!     " Name        Phone\nAlice 987-654-3210\n  Bob 555-555-5555\n John 123-456-7890"
//! );
//! ```
//!
//! ## Дизайн
//!
//! Без runtime и без логирования: только чистые функции над [`ContactStore`],
//! который передаётся явно. Ввод-вывод и цикл живут в бинарнике.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Текстовый протокол команд.
pub mod protocol;

/// Обработчики команд.
pub mod handlers;

/// Телефонная книга.
pub mod store;

/// Проверка записей.
pub mod validator;

/// Табличный вывод.
pub mod table;

/// Ошибки `contact-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::{FAREWELL, GREETING, PROMPT, QUIT_COMMANDS, SEED_CONTACTS};

// --- Re-exports (публичный фасад API) ---

pub use crate::error::{ContactError, ValidationError};
pub use crate::handlers::{Outcome, execute};
pub use crate::protocol::{Command, parse_command};
pub use crate::store::ContactStore;

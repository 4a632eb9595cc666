use std::fmt;

use contact_core::ContactStore;

use crate::cli::Args;

/// Откуда берутся стартовые контакты
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContactsSource {
    /// встроенные John / Alice / Bob
    Builtin,
    Empty,
}

impl ContactsSource {
    pub(crate) fn from_args(args: &Args) -> Self {
        if args.empty {
            ContactsSource::Empty
        } else {
            ContactsSource::Builtin
        }
    }
}

impl fmt::Display for ContactsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactsSource::Builtin => write!(f, "builtin"),
            ContactsSource::Empty => write!(f, "empty"),
        }
    }
}

/// Собирает книгу из выбранного источника. Книга живёт только в памяти процесса
pub(crate) fn load_store(source: ContactsSource) -> ContactStore {
    match source {
        ContactsSource::Builtin => ContactStore::with_seed(),
        ContactsSource::Empty => ContactStore::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_follows_args() {
        let args = Args { empty: false };
        assert_eq!(ContactsSource::from_args(&args), ContactsSource::Builtin);

        let args = Args { empty: true };
        assert_eq!(ContactsSource::from_args(&args), ContactsSource::Empty);
    }

    #[test]
    fn builtin_and_empty_stores() {
        assert_eq!(load_store(ContactsSource::Builtin), ContactStore::with_seed());
        assert!(load_store(ContactsSource::Empty).is_empty());
    }

    #[test]
    fn source_display() {
        assert_eq!(ContactsSource::Builtin.to_string(), "builtin");
        assert_eq!(ContactsSource::Empty.to_string(), "empty");
    }
}

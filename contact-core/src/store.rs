use std::collections::BTreeMap;

use crate::constants::SEED_CONTACTS;
use crate::error::ContactError;
use crate::protocol::capitalize;

/// Телефонная книга: имя -> телефон.
///
/// Ключи хранятся в капитализированном виде, любое имя на входе нормализуется
/// через [`capitalize`], поэтому "alice" и "ALICE" - одна запись.
/// `BTreeMap` держит записи отсортированными по имени.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: BTreeMap<String, String>,
}

impl ContactStore {
    /// Пустая книга
    pub fn new() -> Self {
        Self::default()
    }

    /// Книга с тремя стартовыми записями
    pub fn with_seed() -> Self {
        let mut store = Self::new();
        for (name, phone) in SEED_CONTACTS {
            store.set(name, phone);
        }
        store
    }

    /// Телефон по имени
    pub fn get(&self, name: &str) -> Result<&str, ContactError> {
        self.contacts
            .get(&capitalize(name))
            .map(String::as_str)
            .ok_or(ContactError::NotFound)
    }

    /// Есть ли запись с таким именем
    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(&capitalize(name))
    }

    /// Вставка или перезапись без проверок. Валидация - забота вызывающего
    pub fn set(&mut self, name: &str, phone: impl Into<String>) {
        self.contacts.insert(capitalize(name), phone.into());
    }

    /// Все записи, отсортированные по имени
    pub fn list_all(&self) -> Vec<(&str, &str)> {
        self.contacts
            .iter()
            .map(|(name, phone)| (name.as_str(), phone.as_str()))
            .collect()
    }

    /// Количество записей
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Книга пуста
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_records() {
        let store = ContactStore::with_seed();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("John"), Ok("123-456-7890"));
        assert_eq!(store.get("Alice"), Ok("987-654-3210"));
        assert_eq!(store.get("Bob"), Ok("555-555-5555"));
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = ContactStore::with_seed();
        assert_eq!(store.get("Dave"), Err(ContactError::NotFound));
        assert!(!store.contains("Dave"));
    }

    #[test]
    fn keys_are_case_normalized() {
        let mut store = ContactStore::new();
        store.set("alice", "1");

        assert!(store.contains("ALICE"));
        assert!(store.contains("aLiCe"));
        assert_eq!(store.get("Alice"), Ok("1"));
        assert_eq!(store.list_all(), vec![("Alice", "1")]);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut store = ContactStore::with_seed();
        store.set("bob", "000");

        assert_eq!(store.len(), 3);
        assert_eq!(store.get("Bob"), Ok("000"));
    }

    #[test]
    fn list_all_is_sorted_regardless_of_insertion_order() {
        let mut store = ContactStore::new();
        for name in ["zed", "mike", "anna", "bob"] {
            store.set(name, "1");
        }

        let names: Vec<&str> = store.list_all().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Anna", "Bob", "Mike", "Zed"]);
    }

    #[test]
    fn new_store_is_empty() {
        let store = ContactStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }
}

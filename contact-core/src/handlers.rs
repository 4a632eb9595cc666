use crate::constants::GREETING;
use crate::error::ContactError;
use crate::protocol::{Command, capitalize};
use crate::store::ContactStore;
use crate::table::render_contacts;
use crate::validator::validate_name_and_phone;

/// Результат любой команды: текст ответа или ошибка с текстом для пользователя
pub type Outcome = Result<String, ContactError>;

/// Выполняет команду над книгой.
/// При любой ошибке книга не меняется
pub fn execute(store: &mut ContactStore, cmd: &Command) -> Outcome {
    match cmd {
        Command::Greet => Ok(greet()),
        Command::ListAll => Ok(list_all(store)),
        Command::Lookup { name } => lookup(store, name),
        Command::Add { name, phone } => add(store, name, phone),
        Command::Change { name, phone } => change(store, name, phone),
    }
}

/// `hello`
pub fn greet() -> String {
    GREETING.to_string()
}

/// `show all`
pub fn list_all(store: &ContactStore) -> String {
    render_contacts(&store.list_all())
}

/// `phone <name>`
pub fn lookup(store: &ContactStore, name: &str) -> Outcome {
    let name = capitalize(name);
    let phone = store.get(&name)?;
    Ok(format!("{name}'s phone is {phone}"))
}

/// `add <name> <phone>`: только для новых имён
pub fn add(store: &mut ContactStore, name: &str, phone: &str) -> Outcome {
    let name = capitalize(name);
    validate_name_and_phone(&name, phone)?;

    if store.contains(&name) {
        return Err(ContactError::Duplicate { name });
    }

    store.set(&name, phone);
    Ok(format!("{name}'s phone has been added to contacts"))
}

/// `change <name> <phone>`: только для существующих имён
pub fn change(store: &mut ContactStore, name: &str, phone: &str) -> Outcome {
    let name = capitalize(name);
    validate_name_and_phone(&name, phone)?;

    if !store.contains(&name) {
        return Err(ContactError::NotFound);
    }

    store.set(&name, phone);
    Ok(format!("{name}'s phone has been changed in contacts"))
}

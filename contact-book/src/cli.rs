use clap::Parser;

/// Contact Book - интерактивная телефонная книга в памяти процесса.
///
/// Команды читаются по строке со stdin: hello, show all, phone <name>,
/// add <name> <phone>, change <name> <phone>. Выход: good bye / close / exit.
#[derive(Parser, Debug, Clone)]
#[command(name = "contact-book", version, about)]
pub(crate) struct Args {
    /// Стартовать с пустой книгой вместо трёх встроенных записей
    #[arg(long)]
    pub(crate) empty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_builtin_seed() {
        let args = Args::try_parse_from(["contact-book"]).unwrap();
        assert!(!args.empty);
    }

    #[test]
    fn empty_flag_is_parsed() {
        let args = Args::try_parse_from(["contact-book", "--empty"]).unwrap();
        assert!(args.empty);
    }

    #[test]
    fn file_arguments_are_rejected() {
        let res = Args::try_parse_from(["contact-book", "--contacts-file", "x.txt"]);
        assert!(res.is_err());

        let res = Args::try_parse_from(["contact-book", "contacts.txt"]);
        assert!(res.is_err());
    }
}

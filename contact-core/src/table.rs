const NAME_HEADER: &str = "Name";
const PHONE_HEADER: &str = "Phone";

/// Рендерит записи двумя колонками с заголовком `Name Phone`.
/// Колонки выровнены по правому краю, ширина - по самому длинному значению.
/// Для пустого списка остаётся только заголовок. Без завершающего перевода строки
pub fn render_contacts(rows: &[(&str, &str)]) -> String {
    let name_w = column_width(NAME_HEADER, rows.iter().map(|(name, _)| *name));
    let phone_w = column_width(PHONE_HEADER, rows.iter().map(|(_, phone)| *phone));

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!("{NAME_HEADER:>name_w$} {PHONE_HEADER:>phone_w$}"));
    for (name, phone) in rows {
        lines.push(format!("{name:>name_w$} {phone:>phone_w$}"));
    }

    lines.join("\n")
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .fold(header.chars().count(), usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_to_the_right() {
        let got = render_contacts(&[
            ("Alice", "987-654-3210"),
            ("Bob", "555-555-5555"),
            ("John", "123-456-7890"),
        ]);

        let want = [
            " Name        Phone",
            "Alice 987-654-3210",
            "  Bob 555-555-5555",
            " John 123-456-7890",
        ]
        .join("\n");
        assert_eq!(got, want);
    }

    #[test]
    fn header_wider_than_values() {
        let got = render_contacts(&[("Al", "1")]);
        assert_eq!(got, "Name Phone\n  Al     1");
    }

    #[test]
    fn empty_list_renders_header_only() {
        assert_eq!(render_contacts(&[]), "Name Phone");
    }
}

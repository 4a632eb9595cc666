use std::io::{BufRead, Write};

use contact_core::{ContactStore, FAREWELL, PROMPT, QUIT_COMMANDS, execute, parse_command};
use log::{debug, info};

/// Что делать циклу после строки
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReplControl {
    /// напечатать ответ и ждать следующую команду
    Reply(String),
    Exit,
}

/// Интерактивный цикл: приглашение -> строка -> ответ, до фразы выхода или EOF.
/// Ошибки команд печатаются как обычный ответ, наружу уходят только ошибки ввода-вывода
pub(crate) fn run_repl<R: BufRead, W: Write>(
    store: &mut ContactStore,
    mut input: R,
    mut out: W,
) -> std::io::Result<()> {
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        let n = input.read_line(&mut line)?;
        if n == 0 {
            info!("end of input; stopping");
            break;
        }

        let line = line.trim_end_matches(&['\r', '\n'][..]);

        match handle_line(store, line) {
            ReplControl::Reply(text) => writeln!(out, "{text}")?,
            ReplControl::Exit => {
                writeln!(out, "{FAREWELL}")?;
                break;
            }
        }
    }

    out.flush()
}

/// Одна строка ввода. Фраза выхода сравнивается как есть, остальное - в нижнем регистре
pub(crate) fn handle_line(store: &mut ContactStore, line: &str) -> ReplControl {
    if QUIT_COMMANDS.contains(&line) {
        info!("quit phrase {line:?}");
        return ReplControl::Exit;
    }

    let outcome = parse_command(&line.to_lowercase()).and_then(|cmd| {
        debug!("command: {cmd}");
        execute(store, &cmd)
    });

    match outcome {
        Ok(text) => ReplControl::Reply(text),
        Err(e) => {
            debug!("rejected {line:?}: {e:?}");
            ReplControl::Reply(e.to_string())
        }
    }
}

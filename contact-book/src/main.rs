//! Точка входа `contact-book`.
//!
//! Жизненный цикл:
//! - парсинг CLI и выбор стартовых контактов (встроенные или пусто)
//! - сборка книги в памяти, без файлов и без сохранения
//! - интерактивный цикл на stdin/stdout до фразы выхода или EOF

mod cli;
mod config;
mod repl;

use anyhow::Context;
use clap::Parser;
use log::info;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug, пишутся в stderr
    env_logger::init();

    let args = cli::Args::parse();

    let source = config::ContactsSource::from_args(&args);
    let mut store = config::load_store(source);

    info!(
        "Starting contact-book: source={}, contacts={}",
        source,
        store.len()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run_repl(&mut store, stdin.lock(), stdout.lock()).context("interactive loop failed")?;

    info!("contact-book stopped");
    Ok(())
}

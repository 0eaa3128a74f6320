use env_logger::fmt::{Color, Formatter};
use log::{Level, Record};
use std::io::{self, Write};

/// Installs the shared log formatter. `RUST_LOG` still controls filtering and
/// defaults to `info`.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(format)
        .init();
}

// env_logger does not expose these bits of the default formatter for
// customization, but at least we have copy and paste :^)
pub fn format(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let level = record.level();
    let mut level_style = buf.style();
    match level {
        Level::Trace => level_style.set_color(Color::White),
        Level::Debug => level_style.set_color(Color::Blue),
        Level::Info => level_style.set_color(Color::Green),
        Level::Warn => level_style.set_color(Color::Yellow),
        Level::Error => level_style.set_color(Color::Red).set_bold(true),
    };
    write!(buf, "{:>5} ", level_style.value(level))?;
    write!(buf, "{}: ", buf.timestamp())?;

    let mut module_style = buf.style();
    module_style.set_color(Color::Yellow);
    if let Some(module_path) = record.module_path() {
        write!(buf, "{}: ", module_style.value(module_path))?;
    }

    writeln!(buf, "{}", record.args())
}

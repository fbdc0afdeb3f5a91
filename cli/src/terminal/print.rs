use std::fmt::Display;

use crate::terminal::colors;
use carlot_core::sink::PRINT_TARGET;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 12;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ CARLOT v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let pad: usize = side_padding(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(pad).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
}

/// Fill needed on each side to center `text` on a [`TOTAL_WIDTH`] terminal line.
fn side_padding(text: &str) -> usize {
    TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(text)) / 2
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let whitespace: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.chars().count()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.to_string().color(colors::ACCENT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_padding_uses_display_width() {
        assert_eq!(side_padding("⟦ CARLOT ⟧"), (TOTAL_WIDTH - UnicodeWidthStr::width("⟦ CARLOT ⟧")) / 2);
        // Wide glyphs take two columns each.
        assert_eq!(side_padding("車車"), (TOTAL_WIDTH - 4) / 2);
        assert_eq!(side_padding(&"x".repeat(TOTAL_WIDTH + 10)), 0);
    }
}

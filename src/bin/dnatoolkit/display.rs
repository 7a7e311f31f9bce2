//! Terminal rendering of sequences.

use clap::builder::styling::{AnsiColor, Style};

fn base_style(base: char) -> Option<Style> {
    let color = match base {
        'A' => AnsiColor::BrightGreen,
        'C' => AnsiColor::BrightBlue,
        'G' => AnsiColor::BrightYellow,
        'T' | 'U' => AnsiColor::BrightRed,
        _ => return None,
    };
    Some(color.on_default())
}

/// Paints each base of a DNA or RNA string. Other characters pass through.
pub fn paint(sequence: &str, enabled: bool) -> String {
    if !enabled {
        return sequence.to_string();
    }
    let mut out = String::with_capacity(sequence.len() * 10);
    for c in sequence.chars() {
        match base_style(c) {
            Some(style) => {
                out.push_str(&style.render().to_string());
                out.push(c);
                out.push_str(&style.render_reset().to_string());
            }
            None => out.push(c),
        }
    }
    out
}

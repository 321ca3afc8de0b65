//! Formatting utilities for terminal output

use crate::core::{Alphabet, Code, Feedback};
use colored::{Color, Colorize};

/// Format feedback as peg glyphs: ● black, ○ white, · empty
#[must_use]
pub fn feedback_pegs(feedback: Feedback, code_length: usize) -> String {
    let black = feedback.black() as usize;
    let white = feedback.white() as usize;
    let empty = code_length.saturating_sub(black + white);

    let mut result = String::with_capacity(code_length * 3);
    result.extend(std::iter::repeat_n('●', black));
    result.extend(std::iter::repeat_n('○', white));
    result.extend(std::iter::repeat_n('·', empty));
    result
}

/// Terminal colour for a symbol
///
/// Colour names map to themselves; anything else cycles through a palette.
fn symbol_color(name: &str, index: usize) -> Color {
    const CYCLE: [Color; 6] = [
        Color::BrightBlue,
        Color::BrightGreen,
        Color::BrightRed,
        Color::BrightYellow,
        Color::BrightMagenta,
        Color::BrightCyan,
    ];

    match name {
        "blue" => Color::Blue,
        "green" => Color::Green,
        "red" => Color::Red,
        "white" => Color::White,
        "black" => Color::BrightBlack,
        "pink" => Color::BrightMagenta,
        "yellow" => Color::Yellow,
        "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "orange" => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        _ => CYCLE[index % CYCLE.len()],
    }
}

/// Format a code with each symbol in its own colour
#[must_use]
pub fn colored_code(code: &Code, alphabet: &Alphabet) -> String {
    let separator = if alphabet.is_compact() { "" } else { " " };
    code.symbols()
        .iter()
        .map(|&s| {
            let name = alphabet.name(s);
            name.color(symbol_color(name, s.index())).bold().to_string()
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width]
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to `max_entropy`
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_no_match() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 4), "····");
    }

    #[test]
    fn pegs_solved() {
        assert_eq!(feedback_pegs(Feedback::solved(4), 4), "●●●●");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(feedback_pegs(Feedback::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn colored_code_keeps_names() {
        let alphabet = Alphabet::default();
        let code = alphabet.parse_code("red green blue pink", 4).unwrap();
        let text = colored_code(&code, &alphabet);
        for name in ["red", "green", "blue", "pink"] {
            assert!(text.contains(name));
        }
    }

    #[test]
    fn unknown_names_cycle() {
        assert_eq!(symbol_color("a", 0), Color::BrightBlue);
        assert_eq!(symbol_color("g", 6), Color::BrightBlue);
        assert_eq!(symbol_color("red", 0), Color::Red);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}

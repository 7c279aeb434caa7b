//! Form layout.

use super::form::{Field, Form};
use crate::terminal::{
    DIM, INNER_WIDTH, RESET, REVERSE, box_bottom, box_line, box_rule, box_top, strength_bar, wrap,
};
use passgen::{CharClass, label};

const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 10;
/// Characters of output per row.
pub const OUTPUT_WIDTH: usize = INNER_WIDTH - LABEL_WIDTH;
/// Output rows visible at once; longer output scrolls with PgUp/PgDn.
pub const OUTPUT_LINES: usize = 6;
const HELP: &str = "↑↓ move  Space toggle  g gen  c copy  q quit";

/// Build the screen for the current form state.
pub fn render(form: &Form) -> Vec<String> {
    let mut lines = vec![box_top("Password Generator"), box_line("")];

    let length = format!("[{:<9}]", form.length_text);
    lines.push(box_line(&format!(
        "{} Length: {}",
        cursor(form, Field::Length),
        focused(form, Field::Length, &length)
    )));
    lines.push(box_line(""));

    for class in CharClass::ALL {
        let field = Field::Class(class);
        let mark = if form.classes.get(class) { "[x]" } else { "[ ]" };
        lines.push(box_line(&format!(
            "{} {}",
            cursor(form, field),
            focused(form, field, &format!("{mark} {}", class.name()))
        )));
    }
    lines.push(box_line(""));

    lines.push(box_line(&format!(
        "{} {}   {} {}",
        cursor(form, Field::Generate),
        focused(form, Field::Generate, "< Generate >"),
        cursor(form, Field::Copy),
        focused(form, Field::Copy, "< Copy >"),
    )));

    lines.push(box_rule());
    output_rows(form, &mut lines);
    match form.scored {
        Some(scored) => {
            lines.push(box_line(&format!(
                "Strength: {} {:>3}/100 {}",
                strength_bar(scored.score, BAR_WIDTH),
                scored.score,
                label(scored.score)
            )));
            if let Some(bits) = scored.bits {
                lines.push(box_line(&format!("          ~{bits:.0} bits of entropy")));
            }
        }
        None => lines.push(box_line(&format!("Strength: {}", strength_bar(0, BAR_WIDTH)))),
    }

    lines.push(box_rule());
    lines.push(box_line(form.status.as_deref().unwrap_or(HELP)));
    lines.push(box_bottom());
    lines
}

fn output_rows(form: &Form, lines: &mut Vec<String>) {
    let rows = wrap(&form.output, OUTPUT_WIDTH);
    if rows.is_empty() {
        lines.push(box_line("Output:"));
        return;
    }

    let first = form.output_scroll.min(rows.len().saturating_sub(OUTPUT_LINES));
    let shown = &rows[first..rows.len().min(first + OUTPUT_LINES)];
    for (i, row) in shown.iter().enumerate() {
        let tag = if i == 0 { "Output:" } else { "" };
        lines.push(box_line(&format!("{tag:<LABEL_WIDTH$}{row}")));
    }
    if rows.len() > OUTPUT_LINES {
        lines.push(box_line(&format!(
            "{:LABEL_WIDTH$}{DIM}rows {}-{} of {}  PgUp/PgDn{RESET}",
            "",
            first + 1,
            first + shown.len(),
            rows.len()
        )));
    }
}

fn cursor(form: &Form, field: Field) -> &'static str {
    if form.focus == field { "›" } else { " " }
}

fn focused(form: &Form, field: Field, text: &str) -> String {
    if form.focus == field {
        format!("{REVERSE}{text}{RESET}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::settings::Settings;
    use crate::terminal::{BOX_WIDTH, console_width};

    fn plain(lines: &[String]) -> String {
        lines.join("\n")
    }

    #[test]
    fn every_line_fits_the_box() {
        let mut form = Form::new(&Settings::default());
        form.length_text = "200".to_string();
        form.generate(&mut StdRng::seed_from_u64(1));
        for line in render(&form) {
            assert_eq!(console_width(&line), BOX_WIDTH, "{line:?}");
        }
    }

    #[test]
    fn long_output_wraps_without_losing_characters() {
        let mut form = Form::new(&Settings::default());
        form.length_text = "64".to_string();
        form.generate(&mut StdRng::seed_from_u64(4));
        assert_eq!(form.output.len(), 64);

        let lines = render(&form);
        for line in &lines {
            assert_eq!(console_width(line), BOX_WIDTH, "{line:?}");
        }
        let screen = plain(&lines);
        for row in wrap(&form.output, OUTPUT_WIDTH) {
            assert!(screen.contains(&row), "missing {row:?}");
        }
        assert!(!screen.contains("PgUp/PgDn"));
    }

    #[test]
    fn output_past_the_visible_rows_scrolls() {
        let mut form = Form::new(&Settings::default());
        form.length_text = "300".to_string();
        form.generate(&mut StdRng::seed_from_u64(4));
        let rows = wrap(&form.output, OUTPUT_WIDTH);
        assert_eq!(rows.len(), 8);

        let screen = plain(&render(&form));
        assert!(screen.contains(&rows[0]));
        assert!(!screen.contains(&rows[7]));
        assert!(screen.contains("rows 1-6 of 8"));

        form.output_scroll = usize::MAX;
        let screen = plain(&render(&form));
        assert!(screen.contains(&rows[7]));
        assert!(screen.contains("rows 3-8 of 8"));
    }

    #[test]
    fn shows_toggles_and_focus() {
        let mut form = Form::new(&Settings::default());
        form.classes.numbers = false;
        form.focus = Field::Class(CharClass::Symbols);
        let screen = plain(&render(&form));
        assert!(screen.contains("[x] Uppercase"));
        assert!(screen.contains("[ ] Numbers"));
        assert!(screen.contains(&format!("› {REVERSE}[x] Symbols{RESET}")));
        assert!(screen.contains(HELP));
    }

    #[test]
    fn shows_output_score_and_status() {
        let mut form = Form::new(&Settings::default());
        form.generate(&mut StdRng::seed_from_u64(2));
        form.status = Some("Copied to clipboard".to_string());
        let screen = plain(&render(&form));
        assert!(screen.contains(&form.output));
        assert!(screen.contains(&format!("{:>3}/100", form.scored.unwrap().score)));
        assert!(screen.contains("bits of entropy"));
        assert!(screen.contains("Copied to clipboard"));
        assert!(!screen.contains(HELP));
    }

    #[test]
    fn message_output_has_no_entropy_line() {
        let mut form = Form::new(&Settings::default());
        form.classes = passgen::CharClasses::NONE;
        form.generate(&mut StdRng::seed_from_u64(2));
        let screen = plain(&render(&form));
        assert!(screen.contains("Select at least one option"));
        assert!(screen.contains("  0/100 Weak"));
        assert!(!screen.contains("bits of entropy"));
    }
}

//! Form state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use zeroize::Zeroize;

use super::render::{OUTPUT_LINES, OUTPUT_WIDTH};
use crate::cli::parse_length;
use crate::clipboard::ClipboardError;
use crate::settings::Settings;
use passgen::{
    CharClass, CharClasses, DEFAULT_LENGTH, GenerationRequest, entropy_bits, estimate, generate,
};

/// Longest text the length field accepts.
pub const MAX_LENGTH_DIGITS: usize = 9;
/// Longest password the form generates; larger lengths are clamped.
pub const MAX_FORM_LENGTH: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Class(CharClass),
    Generate,
    Copy,
}

impl Field {
    /// Focus order.
    pub const ORDER: [Field; 7] = [
        Field::Length,
        Field::Class(CharClass::Upper),
        Field::Class(CharClass::Lower),
        Field::Class(CharClass::Numbers),
        Field::Class(CharClass::Symbols),
        Field::Generate,
        Field::Copy,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Field {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Field {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Generate,
    Copy,
    Quit,
}

/// Result of the last Generate press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub score: u8,
    /// `None` when no password was produced.
    pub bits: Option<f64>,
}

#[derive(Debug)]
pub struct Form {
    pub length_text: String,
    pub classes: CharClasses,
    pub focus: Field,
    /// Text in the output field: a password or the no-class message.
    pub output: String,
    /// First visible output row.
    pub output_scroll: usize,
    pub scored: Option<Scored>,
    pub status: Option<String>,
}

impl Form {
    pub fn new(settings: &Settings) -> Self {
        Self {
            length_text: settings.length.to_string(),
            classes: settings.classes(),
            focus: Field::Length,
            output: String::new(),
            output_scroll: 0,
            scored: None,
            status: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::PageDown => {
                self.output_scroll = (self.output_scroll + OUTPUT_LINES).min(self.last_scroll());
                Action::None
            }
            KeyCode::PageUp => {
                self.output_scroll = self.output_scroll.saturating_sub(OUTPUT_LINES);
                Action::None
            }
            KeyCode::Char(' ') => self.activate(),
            KeyCode::Enter => match self.focus {
                Field::Copy => Action::Copy,
                _ => Action::Generate,
            },
            KeyCode::Char('g') => Action::Generate,
            KeyCode::Char('c') => Action::Copy,
            KeyCode::Char(d) if d.is_ascii_digit() && self.focus == Field::Length => {
                if self.length_text.len() < MAX_LENGTH_DIGITS {
                    self.length_text.push(d);
                }
                Action::None
            }
            KeyCode::Backspace if self.focus == Field::Length => {
                self.length_text.pop();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn activate(&mut self) -> Action {
        match self.focus {
            Field::Length => Action::None,
            Field::Class(class) => {
                self.classes.toggle(class);
                Action::None
            }
            Field::Generate => Action::Generate,
            Field::Copy => Action::Copy,
        }
    }

    /// Length the next Generate will use; the field shows it afterwards.
    pub fn length(&self) -> usize {
        self.requested_length().min(MAX_FORM_LENGTH)
    }

    fn requested_length(&self) -> usize {
        parse_length(&self.length_text).unwrap_or(DEFAULT_LENGTH)
    }

    fn last_scroll(&self) -> usize {
        self.output
            .chars()
            .count()
            .div_ceil(OUTPUT_WIDTH)
            .saturating_sub(OUTPUT_LINES)
    }

    pub fn generate<R: Rng>(&mut self, rng: &mut R) {
        let capped = self.requested_length() > MAX_FORM_LENGTH;
        let request = GenerationRequest {
            length: self.length(),
            classes: self.classes,
        };
        self.length_text = request.length.to_string();
        self.output.zeroize();
        self.output_scroll = 0;
        self.status = capped.then(|| format!("Length capped at {MAX_FORM_LENGTH}"));

        match generate(&request, rng) {
            Ok(pass) => {
                self.scored = Some(Scored {
                    score: estimate(&pass),
                    bits: Some(entropy_bits(request.length, request.classes.pool_size())),
                });
                self.output = pass;
            }
            Err(e) => {
                self.scored = Some(Scored { score: 0, bits: None });
                self.output = e.to_string();
            }
        }
    }

    /// Send the displayed output through `copy` and record the outcome.
    pub fn copy_with<F>(&mut self, copy: F)
    where
        F: FnOnce(&str) -> Result<(), ClipboardError>,
    {
        if self.output.is_empty() {
            self.status = Some("Nothing to copy yet".to_string());
            return;
        }
        self.status = Some(match copy(&self.output) {
            Ok(()) => "Copied to clipboard".to_string(),
            Err(e) => e.to_string(),
        });
    }

    /// Length and toggles to remember for next time.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings {
            length: self.length(),
            ..Settings::default()
        };
        settings.set_classes(self.classes);
        settings
    }
}

impl Drop for Form {
    fn drop(&mut self) {
        self.output.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form() -> Form {
        Form::new(&Settings::default())
    }

    #[test]
    fn starts_on_length_with_saved_values() {
        let settings = Settings {
            length: 20,
            numbers: false,
            ..Settings::default()
        };
        let form = Form::new(&settings);
        assert_eq!(form.focus, Field::Length);
        assert_eq!(form.length_text, "20");
        assert!(!form.classes.numbers);
        assert!(form.output.is_empty());
        assert_eq!(form.scored, None);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = form();
        assert_eq!(form.handle_key(key(KeyCode::Up)), Action::None);
        assert_eq!(form.focus, Field::Copy);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, Field::Length);
        for _ in 0..Field::ORDER.len() {
            form.handle_key(key(KeyCode::Down));
        }
        assert_eq!(form.focus, Field::Length);
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, Field::Copy);
    }

    #[test]
    fn space_toggles_the_focused_class() {
        let mut form = form();
        form.handle_key(key(KeyCode::Down));
        form.handle_key(key(KeyCode::Down));
        assert_eq!(form.focus, Field::Class(CharClass::Lower));
        assert_eq!(form.handle_key(key(KeyCode::Char(' '))), Action::None);
        assert!(!form.classes.lower);
        form.handle_key(key(KeyCode::Char(' ')));
        assert!(form.classes.lower);
    }

    #[test]
    fn buttons_activate() {
        let mut form = form();
        form.focus = Field::Generate;
        assert_eq!(form.handle_key(key(KeyCode::Char(' '))), Action::Generate);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), Action::Generate);
        form.focus = Field::Copy;
        assert_eq!(form.handle_key(key(KeyCode::Char(' '))), Action::Copy);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), Action::Copy);
        form.focus = Field::Class(CharClass::Upper);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), Action::Generate);
    }

    #[test]
    fn shortcuts_and_quit() {
        let mut form = form();
        assert_eq!(form.handle_key(key(KeyCode::Char('g'))), Action::Generate);
        assert_eq!(form.handle_key(key(KeyCode::Char('c'))), Action::Copy);
        assert_eq!(form.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            form.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn length_editing() {
        let mut form = form();
        form.handle_key(key(KeyCode::Backspace));
        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.length_text, "");
        form.handle_key(key(KeyCode::Char('3')));
        form.handle_key(key(KeyCode::Char('x')));
        form.handle_key(key(KeyCode::Char('2')));
        assert_eq!(form.length_text, "32");
        for _ in 0..20 {
            form.handle_key(key(KeyCode::Char('9')));
        }
        assert_eq!(form.length_text.len(), MAX_LENGTH_DIGITS);

        // Digits are ignored away from the length field.
        form.length_text = "8".to_string();
        form.focus = Field::Generate;
        form.handle_key(key(KeyCode::Char('5')));
        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.length_text, "8");
    }

    #[test]
    fn generate_fills_output_and_score() {
        let mut form = form();
        form.length_text = "16".to_string();
        form.generate(&mut StdRng::seed_from_u64(3));
        assert_eq!(form.output.len(), 16);
        let scored = form.scored.unwrap();
        assert_eq!(scored.score, estimate(&form.output));
        assert!(scored.bits.unwrap() > 100.0);
    }

    #[test]
    fn generate_coerces_unusable_length() {
        let mut form = form();
        for text in ["", "0", "000"] {
            form.length_text = text.to_string();
            form.generate(&mut StdRng::seed_from_u64(3));
            assert_eq!(form.output.len(), 12);
            assert_eq!(form.length_text, "12");
        }
    }

    #[test]
    fn generate_without_classes_shows_message() {
        let mut form = form();
        form.classes = CharClasses::NONE;
        form.generate(&mut StdRng::seed_from_u64(3));
        assert_eq!(form.output, "Select at least one option");
        assert_eq!(form.scored, Some(Scored { score: 0, bits: None }));
    }

    #[test]
    fn copy_sends_displayed_text() {
        let mut form = form();
        form.copy_with(|_| panic!("nothing to copy"));
        assert_eq!(form.status.as_deref(), Some("Nothing to copy yet"));

        form.generate(&mut StdRng::seed_from_u64(5));
        let shown = form.output.clone();
        let mut sent = String::new();
        form.copy_with(|text| {
            sent = text.to_string();
            Ok(())
        });
        assert_eq!(sent, shown);
        assert_eq!(form.status.as_deref(), Some("Copied to clipboard"));
    }

    #[test]
    fn copy_failure_lands_in_status() {
        let mut form = form();
        form.generate(&mut StdRng::seed_from_u64(5));
        form.copy_with(|_| Err(ClipboardError::Unavailable("no display".into())));
        assert_eq!(form.status.as_deref(), Some("clipboard unavailable: no display"));
        assert_eq!(form.output.len(), 12);
    }

    #[test]
    fn huge_length_is_capped() {
        let mut form = form();
        form.length_text = "999999999".to_string();
        assert_eq!(form.length(), MAX_FORM_LENGTH);
        form.generate(&mut StdRng::seed_from_u64(6));
        assert_eq!(form.output.len(), MAX_FORM_LENGTH);
        assert_eq!(form.length_text, "4096");
        assert_eq!(form.status.as_deref(), Some("Length capped at 4096"));
        assert_eq!(form.settings().length, MAX_FORM_LENGTH);

        // The cap message goes away once the length is back in range.
        form.generate(&mut StdRng::seed_from_u64(6));
        assert_eq!(form.status, None);
    }

    #[test]
    fn page_keys_scroll_within_the_output() {
        let mut form = form();
        form.handle_key(key(KeyCode::PageDown));
        assert_eq!(form.output_scroll, 0);

        // 300 characters make 8 rows, two more than fit.
        form.length_text = "300".to_string();
        form.generate(&mut StdRng::seed_from_u64(2));
        form.handle_key(key(KeyCode::PageDown));
        assert_eq!(form.output_scroll, 2);
        form.handle_key(key(KeyCode::PageDown));
        assert_eq!(form.output_scroll, 2);
        form.handle_key(key(KeyCode::PageUp));
        assert_eq!(form.output_scroll, 0);

        form.handle_key(key(KeyCode::PageDown));
        form.generate(&mut StdRng::seed_from_u64(3));
        assert_eq!(form.output_scroll, 0);
    }

    #[test]
    fn generate_clears_status() {
        let mut form = form();
        form.status = Some("Copied to clipboard".to_string());
        form.generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(form.status, None);
    }

    #[test]
    fn settings_reflect_form() {
        let mut form = form();
        form.length_text = "24".to_string();
        form.classes.symbols = false;
        let settings = form.settings();
        assert_eq!(settings.length, 24);
        assert!(!settings.symbols);
        assert!(settings.upper);
    }
}

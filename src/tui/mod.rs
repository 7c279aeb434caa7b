//! Interactive form.
//!
//! A length field, four class checkboxes, Generate and Copy, and the output
//! with its strength bar. The screen is redrawn after every key press.

mod form;
mod render;

use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use rand::Rng;
use tracing::warn;

use crate::clipboard::Clipboard;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, draw};
use form::{Action, Form};
use passgen::rng;
use render::render;

/// Run the form until the user quits, then remember its length and toggles.
pub fn run(seed: Option<u64>) -> Result<()> {
    let saved = Settings::load_from_file().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load saved settings, using defaults");
        Settings::default()
    });

    let mut form = Form::new(&saved);
    let mut rng = rng::from_seed(seed);
    let mut clipboard = Clipboard::new();

    let mut guard = RawModeGuard::new().context("failed to set up the terminal")?;
    let result = event_loop(&mut form, &mut rng, &mut clipboard);
    guard.disable();
    result?;

    let settings = form.settings();
    if settings != saved
        && let Err(e) = settings.save_to_file()
    {
        warn!(error = %e, "failed to save settings");
    }
    Ok(())
}

fn event_loop<R: Rng>(form: &mut Form, rng: &mut R, clipboard: &mut Clipboard) -> Result<()> {
    let mut out = io::stdout();
    loop {
        draw(&mut out, &render(form)).context("failed to draw the form")?;

        let Event::Key(key) = event::read().context("failed to read terminal input")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match form.handle_key(key) {
            Action::Quit => return Ok(()),
            Action::Generate => form.generate(rng),
            Action::Copy => form.copy_with(|text| clipboard.copy(text)),
            Action::None => {}
        }
    }
}

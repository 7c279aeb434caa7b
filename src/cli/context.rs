//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use rand::Rng;
use tracing::{debug, warn};
use zeroize::Zeroize;

use super::{Cli, coerce_length, prompts};
use crate::clipboard::Clipboard;
use crate::settings::Settings;
use passgen::{NO_CLASS_SELECTED, generate_batch, rng};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Clipboard,
    pub flags: Cli,
}

impl Context {
    pub fn new(flags: Cli) -> Self {
        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                warn!(error = %e, "failed to load saved settings, using defaults");
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Self {
            settings,
            clipboard: Clipboard::new(),
            flags,
        }
    }

    pub fn run(&mut self) {
        self.apply_flags();
        self.persist();
        let mut rng = rng::from_seed(self.flags.seed);
        self.generate_output(&mut rng);
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(ref len) = self.flags.length {
            self.settings.length = coerce_length(len);
        }

        let mut classes = self.settings.classes();
        let Cli {
            upper,
            lower,
            numbers,
            symbols,
            ..
        } = self.flags;
        classes.upper = upper.unwrap_or(classes.upper);
        classes.lower = lower.unwrap_or(classes.lower);
        classes.numbers = numbers.unwrap_or(classes.numbers);
        classes.symbols = symbols.unwrap_or(classes.symbols);
        self.settings.set_classes(classes);

        debug!(settings = ?self.settings, "resolved settings");
    }

    fn persist(&self) {
        if self.flags.save
            && let Err(e) = self.settings.save_to_file()
        {
            warn!(error = %e, "failed to save settings");
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output<R: Rng>(&mut self, rng: &mut R) {
        let request = self.settings.request();
        let quiet = self.flags.quiet;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        let mut passwords = match generate_batch(&request, self.flags.number, rng) {
            Ok(passwords) => passwords,
            Err(e) => {
                debug!(error = %e, "no character class selected");
                let _ = writeln!(out, "{NO_CLASS_SELECTED}");
                if !quiet {
                    let _ = writeln!(out, "{}", prompts::NO_PASSWORD_STRENGTH);
                }
                return;
            }
        };

        let pool_size = request.classes.pool_size();
        let copied = self.flags.clipboard && self.copy_all(&passwords);

        for pass in &passwords {
            if !copied {
                let _ = writeln!(out, "{pass}");
            }
            if !quiet {
                let _ = writeln!(out, "{}", prompts::strength_line(pass, pool_size));
            }
        }
        let _ = out.flush();

        if copied {
            prompts::clipboard_copied(quiet);
        }

        for pass in &mut passwords {
            pass.zeroize();
        }
    }

    /// Copy every password, one per line. Returns false when the caller
    /// should print them instead.
    fn copy_all(&mut self, passwords: &[String]) -> bool {
        let mut joined = passwords.join("\n");
        let result = self.clipboard.copy(&joined);
        joined.zeroize();

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "printing to terminal instead");
                false
            }
        }
    }
}

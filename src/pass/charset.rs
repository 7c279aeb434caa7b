//! Character set building for password generation.

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?/";

/// One of the four selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Pool order. Fixed so a seeded source always maps to the same output.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn charset(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Numbers => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "Uppercase",
            CharClass::Lower => "Lowercase",
            CharClass::Numbers => "Numbers",
            CharClass::Symbols => "Symbols",
        }
    }
}

/// The four class toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub const ALL: CharClasses = CharClasses {
        upper: true,
        lower: true,
        numbers: true,
        symbols: true,
    };

    pub const NONE: CharClasses = CharClasses {
        upper: false,
        lower: false,
        numbers: false,
        symbols: false,
    };

    pub fn get(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        let slot = match class {
            CharClass::Upper => &mut self.upper,
            CharClass::Lower => &mut self.lower,
            CharClass::Numbers => &mut self.numbers,
            CharClass::Symbols => &mut self.symbols,
        };
        *slot = enabled;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.get(class));
    }

    pub fn is_empty(&self) -> bool {
        !(self.upper || self.lower || self.numbers || self.symbols)
    }

    /// Enabled classes, in pool order.
    pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.get(*c))
    }

    /// Build the character pool from the enabled classes.
    pub fn pool(&self) -> Vec<u8> {
        let mut chars = Vec::with_capacity(self.pool_size());
        for class in self.enabled() {
            chars.extend_from_slice(class.charset());
        }
        chars
    }

    /// Number of characters in the pool (for entropy calculation).
    pub fn pool_size(&self) -> usize {
        self.enabled().map(|c| c.charset().len()).sum()
    }
}

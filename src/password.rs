use rand::Rng;
use serde::{Deserialize, Serialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}:;,.<>?/";

/// Shortest password the generator will produce
pub const MIN_LENGTH: usize = 1;
/// Longest password the generator will produce (matches the slider range)
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 14;

/// One of the character sets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes, in pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Stable identifier, used for widget ids.
    pub fn id(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Numbers => "Numbers (0-9)",
            CharacterClass::Symbols => "Symbols (!@#...)",
        }
    }
}

/// Length and character classes for a generated password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GeneratorOptions {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_enabled(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Lowercase => &mut self.include_lowercase,
            CharacterClass::Uppercase => &mut self.include_uppercase,
            CharacterClass::Numbers => &mut self.include_numbers,
            CharacterClass::Symbols => &mut self.include_symbols,
        };
        *flag = enabled;
    }

    /// Validate and clamp the length to the allowed range
    pub fn set_length(&mut self, length: usize) {
        self.length = clamp_length(length);
    }

    /// Returns a copy with the length clamped, for options read from disk.
    pub fn normalized(mut self) -> Self {
        self.length = clamp_length(self.length);
        self
    }

    /// Characters a password may be drawn from.
    ///
    /// If every class is disabled we fall back to the alphanumeric set
    /// rather than producing an empty password.
    pub fn pool(&self) -> Vec<char> {
        let mut pool: Vec<char> = CharacterClass::ALL
            .iter()
            .filter(|class| self.is_enabled(**class))
            .flat_map(|class| class.charset().chars())
            .collect();

        if pool.is_empty() {
            pool.extend(LOWERCASE.chars());
            pool.extend(UPPERCASE.chars());
            pool.extend(NUMBERS.chars());
        }
        pool
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Generates a password of exactly `options.length` characters, each drawn
/// uniformly from the pool of enabled classes.
pub fn generate_password(options: &GeneratorOptions) -> String {
    let mut rng = rand::rng();
    generate_password_with_rng(options, &mut rng)
}

pub fn generate_password_with_rng<R: Rng>(options: &GeneratorOptions, rng: &mut R) -> String {
    let chars = options.pool();

    (0..options.length)
        .map(|_| {
            let idx = rng.random_range(0..chars.len());
            chars[idx]
        })
        .collect()
}

/// Rough strength rating for a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Okay,
    Strong,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        if bits < 60.0 {
            Strength::Weak
        } else if bits <= 100.0 {
            Strength::Okay
        } else {
            Strength::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Okay => "Okay",
            Strength::Strong => "Strong",
        }
    }
}

/// Entropy in bits of a password generated with these options:
/// `length * log2(pool size)`.
pub fn estimate_entropy(options: &GeneratorOptions) -> f64 {
    let pool_size = options.pool().len() as f64;
    options.length as f64 * pool_size.log2()
}

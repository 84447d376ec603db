//! The password generator component.
//!
//! Holds the options, the current password and the copy-icon state. Every
//! setter that changes the options regenerates the password. Copying flips
//! the icon to a check mark and arms a reset deadline; `tick` reverts the
//! icon once the most recent deadline has passed.

use std::time::{Duration, Instant};
use zeroize::Zeroize;

use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::logging::{DiagnosticSink, TracingSink};
use crate::password::{CharacterClass, GeneratorOptions, generate_password};
use crate::settings::{DEFAULT_COPY_RESET_MILLIS, MAX_COPY_RESET_MILLIS};

/// Reported to the diagnostic sink when the clipboard rejects a write.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy password:";

/// Caps the reset delay so `now + delay` cannot overflow.
fn cap_reset_delay(delay: Duration) -> Duration {
    delay.min(Duration::from_millis(MAX_COPY_RESET_MILLIS))
}

/// Icon shown on the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyIcon {
    #[default]
    Copy,
    Check,
}

impl CopyIcon {
    pub fn icon_name(self) -> &'static str {
        match self {
            CopyIcon::Copy => "copy",
            CopyIcon::Check => "check",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            CopyIcon::Copy => "🗐",
            CopyIcon::Check => "✔",
        }
    }
}

pub struct PasswordGenerator<C = SystemClipboard, D = TracingSink> {
    options: GeneratorOptions,
    password: String,
    copy_icon: CopyIcon,
    // Pending icon reset; replaced on each successful copy
    reset_deadline: Option<Instant>,
    reset_delay: Duration,
    clipboard: C,
    diagnostics: D,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(
            GeneratorOptions::default(),
            Duration::from_millis(DEFAULT_COPY_RESET_MILLIS),
            SystemClipboard,
            TracingSink,
        )
    }
}

impl<C: ClipboardWriter, D: DiagnosticSink> PasswordGenerator<C, D> {
    /// Creates the component and generates the first password.
    pub fn new(options: GeneratorOptions, reset_delay: Duration, clipboard: C, diagnostics: D) -> Self {
        let options = options.normalized();
        let password = generate_password(&options);
        Self {
            options,
            password,
            copy_icon: CopyIcon::Copy,
            reset_deadline: None,
            reset_delay: cap_reset_delay(reset_delay),
            clipboard,
            diagnostics,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn length(&self) -> usize {
        self.options.length
    }

    pub fn copy_icon(&self) -> CopyIcon {
        self.copy_icon
    }

    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_deadline
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Applies to copies made after this call. Capped at the settings maximum.
    pub fn set_reset_delay(&mut self, delay: Duration) {
        self.reset_delay = cap_reset_delay(delay);
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Sets the length (clamped) and regenerates if it changed.
    pub fn set_length(&mut self, length: usize) {
        let before = self.options.length;
        self.options.set_length(length);
        if self.options.length != before {
            self.regenerate();
        }
    }

    /// Toggles a character class and regenerates if it changed.
    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        if self.options.is_enabled(class) != enabled {
            self.options.set_enabled(class, enabled);
            self.regenerate();
        }
    }

    pub fn set_options(&mut self, options: GeneratorOptions) {
        let options = options.normalized();
        if options != self.options {
            self.options = options;
            self.regenerate();
        }
    }

    /// Replaces the password with a fresh one for the current options.
    pub fn regenerate(&mut self) {
        let mut old = std::mem::replace(&mut self.password, generate_password(&self.options));
        old.zeroize();
        tracing::debug!(length = self.options.length, "Regenerated password");
    }

    pub fn copy_to_clipboard(&mut self) {
        self.copy_to_clipboard_at(Instant::now());
    }

    /// Writes the current password to the clipboard.
    ///
    /// On success the icon becomes a check mark until `now + reset_delay`,
    /// replacing any earlier deadline. On failure the error goes to the
    /// diagnostic sink and the icon is left alone.
    pub fn copy_to_clipboard_at(&mut self, now: Instant) {
        match self.clipboard.write_text(&self.password) {
            Ok(()) => {
                self.copy_icon = CopyIcon::Check;
                self.reset_deadline = Some(now + self.reset_delay);
                tracing::info!("Password copied to clipboard");
            }
            Err(err) => self.diagnostics.report(COPY_FAILED_MESSAGE, &err),
        }
    }

    /// Reverts the icon if the reset deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.reset_deadline {
            if now >= deadline {
                self.copy_icon = CopyIcon::Copy;
                self.reset_deadline = None;
            }
        }
    }

    /// Time left until the icon resets, if a reset is pending.
    pub fn time_until_reset(&self, now: Instant) -> Option<Duration> {
        self.reset_deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl<C, D> Drop for PasswordGenerator<C, D> {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

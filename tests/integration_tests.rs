//! Integration tests for the QuickGen generator component.
//!
//! These tests drive the component the way the UI does:
//! - Initial generation
//! - Length and character class changes
//! - Copying and the check-icon reset
//! - Clipboard failures
//! - Persisted defaults

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use quickgen::clipboard::ClipboardWriter;
use quickgen::logging::DiagnosticSink;
use quickgen::settings::AppSettings;
use quickgen::{CharacterClass, CopyIcon, Error, GeneratorOptions, PasswordGenerator, Result};

/// Clipboard double whose writes stay visible after the generator takes ownership
#[derive(Clone, Default)]
struct SharedClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    reject: Rc<Cell<bool>>,
}

impl ClipboardWriter for SharedClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.reject.get() {
            return Err(Error::ClipboardWrite(arboard::Error::ClipboardNotSupported));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct SharedSink {
    reports: Rc<RefCell<Vec<(&'static str, String)>>>,
}

impl DiagnosticSink for SharedSink {
    fn report(&mut self, message: &'static str, error: &Error) {
        self.reports.borrow_mut().push((message, error.to_string()));
    }
}

fn mount(
    clipboard: SharedClipboard,
    sink: SharedSink,
) -> PasswordGenerator<SharedClipboard, SharedSink> {
    let settings = AppSettings::default();
    PasswordGenerator::new(settings.generator.clone(), settings.copy_reset_delay(), clipboard, sink)
}

// ============================================================================
// Test Module: Generation
// ============================================================================

mod generation_tests {
    use super::*;

    #[test]
    fn test_generates_password_on_mount() {
        let g = mount(SharedClipboard::default(), SharedSink::default());
        assert!(!g.password().is_empty());
        assert_eq!(g.password().len(), 14);
    }

    #[test]
    fn test_slider_change_updates_length() {
        let mut g = mount(SharedClipboard::default(), SharedSink::default());
        g.set_length(20);
        assert_eq!(g.password().len(), 20);
    }

    #[test]
    fn test_only_lowercase_when_other_classes_disabled() {
        let mut g = mount(SharedClipboard::default(), SharedSink::default());

        g.set_class(CharacterClass::Uppercase, false);
        g.set_class(CharacterClass::Numbers, false);
        g.set_class(CharacterClass::Symbols, false);
        g.set_class(CharacterClass::Lowercase, true);

        for _ in 0..20 {
            assert!(!g.password().is_empty());
            assert!(g.password().chars().all(|c| c.is_ascii_lowercase()));
            g.regenerate();
        }
    }

    #[test]
    fn test_all_classes_disabled_falls_back_to_alphanumeric() {
        let mut g = mount(SharedClipboard::default(), SharedSink::default());
        for class in CharacterClass::ALL {
            g.set_class(class, false);
        }
        assert_eq!(g.password().len(), 14);
        assert!(g.password().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_every_length_is_exact() {
        let mut g = mount(SharedClipboard::default(), SharedSink::default());
        for len in 1..=128 {
            g.set_length(len);
            assert_eq!(g.password().len(), len);
        }
    }

    #[test]
    fn test_option_changes_produce_new_password_object() {
        let mut g = mount(SharedClipboard::default(), SharedSink::default());
        g.set_options(GeneratorOptions {
            length: 64,
            ..Default::default()
        });
        let first = g.password().to_string();
        g.set_class(CharacterClass::Symbols, false);
        // 64 draws from 62 chars; a collision with the previous value is not realistic
        assert_ne!(g.password(), first);
        assert!(g.password().chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

// ============================================================================
// Test Module: Clipboard
// ============================================================================

mod clipboard_tests {
    use super::*;

    #[test]
    fn test_copy_writes_displayed_password() {
        let clipboard = SharedClipboard::default();
        let mut g = mount(clipboard.clone(), SharedSink::default());

        g.copy_to_clipboard();

        assert_eq!(*clipboard.writes.borrow(), vec![g.password().to_string()]);
    }

    #[test]
    fn test_copy_after_regenerate_writes_new_password() {
        let clipboard = SharedClipboard::default();
        let mut g = mount(clipboard.clone(), SharedSink::default());

        g.set_length(40);
        g.copy_to_clipboard();

        let writes = clipboard.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].len(), 40);
        assert_eq!(writes[0], g.password());
    }

    #[test]
    fn test_icon_switches_to_check_and_back() {
        let mut g = mount(SharedClipboard::default(), SharedSink::default());
        let clicked = Instant::now();

        g.copy_to_clipboard_at(clicked);
        assert_eq!(g.copy_icon().icon_name(), "check");

        g.tick(clicked + Duration::from_millis(2100));
        assert_eq!(g.copy_icon().icon_name(), "copy");
    }

    #[test]
    fn test_icon_resets_in_real_time() {
        let mut g = mount(SharedClipboard::default(), SharedSink::default());
        g.set_reset_delay(Duration::from_millis(100));

        g.copy_to_clipboard();
        assert_eq!(g.copy_icon(), CopyIcon::Check);

        std::thread::sleep(Duration::from_millis(150));
        g.tick(Instant::now());
        assert_eq!(g.copy_icon(), CopyIcon::Copy);
    }

    #[test]
    fn test_overlapping_copies_keep_check_until_last_deadline() {
        let mut g = mount(SharedClipboard::default(), SharedSink::default());
        let first = Instant::now();

        g.copy_to_clipboard_at(first);
        g.copy_to_clipboard_at(first + Duration::from_millis(1900));

        // The first copy's reset must not fire
        g.tick(first + Duration::from_millis(2000));
        assert_eq!(g.copy_icon(), CopyIcon::Check);

        g.tick(first + Duration::from_millis(3900));
        assert_eq!(g.copy_icon(), CopyIcon::Copy);
    }

    #[test]
    fn test_failed_copy_logs_error() {
        let sink = SharedSink::default();
        let clipboard = SharedClipboard::default();
        clipboard.reject.set(true);
        let mut g = mount(clipboard.clone(), sink.clone());

        g.copy_to_clipboard();

        let reports = sink.reports.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, "Failed to copy password:");
        assert!(!reports[0].1.is_empty());
        assert!(clipboard.writes.borrow().is_empty());
        assert_eq!(g.copy_icon(), CopyIcon::Copy);
    }

    #[test]
    fn test_failed_copy_keeps_pending_reset() {
        let sink = SharedSink::default();
        let clipboard = SharedClipboard::default();
        let mut g = mount(clipboard.clone(), sink.clone());
        let now = Instant::now();

        g.copy_to_clipboard_at(now);
        let deadline = g.reset_deadline();

        clipboard.reject.set(true);
        g.copy_to_clipboard_at(now + Duration::from_millis(1500));

        assert_eq!(sink.reports.borrow().len(), 1);
        assert_eq!(g.copy_icon(), CopyIcon::Check);
        assert_eq!(g.reset_deadline(), deadline);

        g.tick(now + Duration::from_millis(2000));
        assert_eq!(g.copy_icon(), CopyIcon::Copy);
    }
}

// ============================================================================
// Test Module: Settings
// ============================================================================

mod settings_tests {
    use super::*;

    #[test]
    fn test_saved_defaults_drive_new_component() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.generator.length = 18;
        settings.generator.include_uppercase = false;
        settings.generator.include_symbols = false;
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        let g = PasswordGenerator::new(
            loaded.generator.clone(),
            loaded.copy_reset_delay(),
            SharedClipboard::default(),
            SharedSink::default(),
        );
        assert_eq!(g.password().len(), 18);
        assert!(
            g.password()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }
}

use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use std::time::Instant;

use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::generator::PasswordGenerator;
use crate::logging::{DiagnosticSink, TracingSink};
use crate::password::{CharacterClass, MAX_LENGTH, MIN_LENGTH, Strength, estimate_entropy};
use crate::settings::AppSettings;

/// The main eframe app struct
pub struct QuickGenApp<C = SystemClipboard, D = TracingSink> {
    pub generator: PasswordGenerator<C, D>,
    pub settings: AppSettings,
    // Result of the last "Save as defaults" click
    pub status_msg: Option<(String, Color32)>,
}

impl Default for QuickGenApp {
    fn default() -> Self {
        Self::from_settings(AppSettings::default())
    }
}

impl QuickGenApp {
    pub fn from_settings(settings: AppSettings) -> Self {
        Self::with_parts(settings, SystemClipboard, TracingSink)
    }
}

impl<C: ClipboardWriter, D: DiagnosticSink> QuickGenApp<C, D> {
    pub fn with_parts(settings: AppSettings, clipboard: C, diagnostics: D) -> Self {
        let generator = PasswordGenerator::new(
            settings.generator.clone(),
            settings.copy_reset_delay(),
            clipboard,
            diagnostics,
        );
        Self {
            generator,
            settings,
            status_msg: None,
        }
    }

    /// Store the current generator options as the startup defaults
    pub fn save_defaults(&mut self) {
        self.settings.generator = self.generator.options().clone();
        self.status_msg = Some(match self.settings.save() {
            Ok(()) => ("Defaults saved".into(), Color32::GREEN),
            Err(err) => {
                tracing::warn!(error = %err, "Could not save settings");
                (format!("Could not save defaults: {err}"), Color32::RED)
            }
        });
    }

    fn show_generator_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new("Password Generator")
                    .size(22.0)
                    .color(Color32::WHITE),
            );
        });
        ui.separator();

        // Widgets edit local copies; the setters regenerate only on change
        let mut length = self.generator.length();
        ui.horizontal(|ui| {
            ui.label("Length:");
            ui.add(egui::Slider::new(&mut length, MIN_LENGTH..=MAX_LENGTH).text("chars"));
        });
        self.generator.set_length(length);

        ui.columns(2, |cols| {
            for (i, class) in CharacterClass::ALL.into_iter().enumerate() {
                let ui = &mut cols[i % 2];
                let mut enabled = self.generator.options().is_enabled(class);
                ui.push_id(class.id(), |ui| {
                    ui.checkbox(&mut enabled, class.label());
                });
                self.generator.set_class(class, enabled);
            }
        });

        ui.separator();

        // egui keeps its own copy of this text; the component's zeroize
        // guarantee does not cover it
        ui.horizontal(|ui| {
            ui.monospace(RichText::new(self.generator.password()).size(18.0));
        });

        ui.horizontal(|ui| {
            let icon = self.generator.copy_icon();
            if ui
                .button(RichText::new(icon.glyph()).size(16.0))
                .on_hover_text("Copy to clipboard")
                .clicked()
            {
                self.generator.copy_to_clipboard();
            }
            if ui.button("Regenerate (Ctrl+G)").clicked() {
                self.generator.regenerate();
            }
        });

        let bits = estimate_entropy(self.generator.options());
        let strength = Strength::from_bits(bits);
        let color = match strength {
            Strength::Weak => Color32::RED,
            Strength::Okay => Color32::YELLOW,
            Strength::Strong => Color32::GREEN,
        };
        ui.colored_label(color, format!("Entropy: ~{:.1} bits ({})", bits, strength.label()));

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save as defaults").clicked() {
                self.save_defaults();
            }
            if let Some((msg, color)) = &self.status_msg {
                ui.colored_label(*color, msg);
            }
        });
    }
}

impl<C: ClipboardWriter, D: DiagnosticSink> App for QuickGenApp<C, D> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.show(ctx);
    }
}

impl<C: ClipboardWriter, D: DiagnosticSink> QuickGenApp<C, D> {
    /// One frame: reset the copy icon if due, handle shortcuts, draw.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.generator.tick(now);

        // Ctrl+G: Generate password
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::G)) {
            self.generator.regenerate();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_generator_ui(ui);
        });

        // Wake up for the icon reset even without input
        if let Some(remaining) = self.generator.time_until_reset(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}

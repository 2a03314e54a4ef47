// NEXTGEN Studio Window
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Dark single-page layout: header, tool cards, generator panel, result
// panel and a feature strip. All state goes through the StudioController.

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::config::StudioConfig;
use crate::studio::{SessionState, StudioController, ToolKind};

// --- Color Palette ---
const COLOR_BG_DARK: egui::Color32 = egui::Color32::from_rgb(10, 10, 12);
const COLOR_PANEL_BG: egui::Color32 = egui::Color32::from_rgb(17, 24, 39); // gray-900
const COLOR_INPUT_BG: egui::Color32 = egui::Color32::from_rgb(31, 41, 55); // gray-800
const COLOR_BORDER: egui::Color32 = egui::Color32::from_rgb(55, 65, 81); // gray-700
const COLOR_DISABLED: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
const COLOR_TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
const COLOR_TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
const COLOR_DOWNLOAD: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
const COLOR_TITLE: egui::Color32 = egui::Color32::from_rgb(244, 114, 182);

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "⚡",
        "Lightning Fast",
        "Generate content in seconds with our optimized AI models",
    ),
    (
        "🎨",
        "High Quality",
        "Professional-grade output for all your creative needs",
    ),
    (
        "🚀",
        "Easy to Use",
        "Simple interface, powerful results. No expertise required",
    ),
];

fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}

pub struct StudioApp {
    controller: StudioController,
    runtime: tokio::runtime::Handle,
}

impl StudioApp {
    pub fn new(controller: StudioController, runtime: tokio::runtime::Handle) -> Self {
        Self {
            controller,
            runtime,
        }
    }

    fn configure_style(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = COLOR_BG_DARK;
        visuals.panel_fill = COLOR_BG_DARK;
        visuals.extreme_bg_color = COLOR_INPUT_BG;
        visuals.widgets.noninteractive.bg_fill = COLOR_PANEL_BG;
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, COLOR_BORDER);
        visuals.selection.bg_fill = rgb(ToolKind::Video.accent().0);
        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        let proportional = |size| egui::FontId::new(size, egui::FontFamily::Proportional);
        style.text_styles = [
            (egui::TextStyle::Heading, proportional(24.0)),
            (egui::TextStyle::Body, proportional(14.0)),
            (egui::TextStyle::Button, proportional(15.0)),
            (egui::TextStyle::Small, proportional(12.0)),
            (
                egui::TextStyle::Monospace,
                egui::FontId::new(13.0, egui::FontFamily::Monospace),
            ),
        ]
        .into();
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(15.0, 8.0);
        ctx.set_style(style);
    }

    fn tool_picker(&self, ui: &mut egui::Ui, session: &SessionState) {
        ui.columns(ToolKind::ALL.len(), |columns| {
            for (column, tool) in columns.iter_mut().zip(ToolKind::ALL) {
                let active = session.selected_tool == tool;
                let (start, end) = tool.accent();
                let (fill, stroke, text) = if active {
                    (rgb(start), egui::Stroke::new(2.0, rgb(end)), egui::Color32::WHITE)
                } else {
                    (COLOR_PANEL_BG, egui::Stroke::new(2.0, COLOR_BORDER), COLOR_TEXT_SECONDARY)
                };

                let label = egui::RichText::new(format!("{}\n{}", tool.icon(), tool.display_name()))
                    .size(16.0)
                    .strong()
                    .color(text);
                let card = egui::Button::new(label)
                    .fill(fill)
                    .stroke(stroke)
                    .rounding(16.0)
                    .min_size(egui::vec2(column.available_width(), 96.0));

                if column.add(card).clicked() {
                    self.controller.select_tool(tool);
                }
            }
        });
    }

    fn generator_panel(&self, ui: &mut egui::Ui, ctx: &egui::Context, session: &mut SessionState) {
        let tool = session.selected_tool;
        let (start, end) = tool.accent();

        egui::Frame::none()
            .fill(COLOR_PANEL_BG)
            .stroke(egui::Stroke::new(3.0, rgb(end)))
            .rounding(24.0)
            .inner_margin(28.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.heading(
                    egui::RichText::new(format!("{} {}", tool.icon(), tool.display_name()))
                        .strong()
                        .color(COLOR_TEXT_PRIMARY),
                );
                ui.add_space(12.0);

                ui.label(egui::RichText::new(tool.input_label()).color(COLOR_TEXT_SECONDARY));
                let edit = ui.add(
                    egui::TextEdit::multiline(&mut session.input_text)
                        .hint_text(tool.placeholder())
                        .desired_rows(5)
                        .desired_width(f32::INFINITY),
                );
                if edit.changed() {
                    self.controller.set_input(session.input_text.clone());
                }
                ui.add_space(8.0);

                let enabled = session.can_generate();
                let caption = if session.is_busy { "Generating..." } else { "Generate" };
                let button_text = egui::RichText::new(caption)
                    .size(18.0)
                    .strong()
                    .color(egui::Color32::WHITE);
                let fill = if enabled { rgb(start) } else { COLOR_DISABLED };
                let button = egui::Button::new(button_text)
                    .fill(fill)
                    .rounding(12.0)
                    .min_size(egui::vec2(ui.available_width(), 48.0));

                if ui.add_enabled(enabled, button).clicked() {
                    let repaint = ctx.clone();
                    self.controller
                        .spawn_generate(&self.runtime, move || repaint.request_repaint());
                }
                if session.is_busy {
                    ui.vertical_centered(|ui| ui.add(egui::Spinner::new().size(20.0)));
                }

                if let Some(result) = &session.result_text {
                    ui.add_space(16.0);
                    result_panel(ui, tool, result);
                }
            });
    }
}

fn result_panel(ui: &mut egui::Ui, tool: ToolKind, result: &str) {
    egui::Frame::none()
        .fill(COLOR_INPUT_BG)
        .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
        .rounding(12.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("✓ Generation Complete")
                    .size(18.0)
                    .strong()
                    .color(COLOR_SUCCESS),
            );
            ui.label(egui::RichText::new(result).color(COLOR_TEXT_PRIMARY));

            if tool.has_result_actions() {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add(egui::Button::new("Download").fill(COLOR_DOWNLOAD).rounding(8.0));
                    ui.add(egui::Button::new("Share").fill(COLOR_BORDER).rounding(8.0));
                });
            }
        });
}

fn feature_strip(ui: &mut egui::Ui) {
    ui.columns(FEATURES.len(), |columns| {
        for (column, (icon, title, blurb)) in columns.iter_mut().zip(FEATURES) {
            egui::Frame::none()
                .fill(COLOR_PANEL_BG)
                .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                .rounding(12.0)
                .inner_margin(18.0)
                .show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(icon).size(28.0));
                    ui.label(egui::RichText::new(title).strong().color(COLOR_TEXT_PRIMARY));
                    ui.label(egui::RichText::new(blurb).small().color(COLOR_TEXT_SECONDARY));
                });
        }
    });
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.configure_style(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("NEXTGEN STUDIO")
                    .size(34.0)
                    .strong()
                    .color(COLOR_TITLE),
            );
            ui.label(
                egui::RichText::new("AI-Powered Creation Platform").color(COLOR_TEXT_SECONDARY),
            );
            ui.add_space(12.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(24.0);
                let session = self.controller.snapshot();
                self.tool_picker(ui, &session);
                ui.add_space(32.0);

                // Re-read so a click above is reflected in this frame.
                let mut session = self.controller.snapshot();
                self.generator_panel(ui, ctx, &mut session);
                ui.add_space(32.0);

                feature_strip(ui);
                ui.add_space(24.0);
            });
        });
    }
}

pub fn run_gui(
    controller: StudioController,
    runtime: tokio::runtime::Handle,
    config: &StudioConfig,
) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("NEXTGEN STUDIO - AI Creation Platform"),
        ..Default::default()
    };

    info!("[GUI] Opening studio window");
    eframe::run_native(
        "NEXTGEN STUDIO",
        options,
        Box::new(|_cc| Ok(Box::new(StudioApp::new(controller, runtime)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

//! App module - annotation toolbar shell

use eframe::egui;

use capture_lang::{ScrollStatus, ToolbarAction, TranslationTable};

use crate::ui::Toolbar;

pub struct CaptureApp {
    /// Built once in `main`; never swapped while the app runs
    text: TranslationTable,
    toolbar: Toolbar,
    pinned: bool,
    status_message: Option<String>,
    status_timer: f64,
}

impl CaptureApp {
    pub fn new(text: TranslationTable) -> Self {
        Self {
            text,
            toolbar: Toolbar::new(),
            pinned: false,
            status_message: None,
            status_timer: 0.0,
        }
    }

    fn set_status(&mut self, key: &str) {
        self.status_message = Some(self.text.get(key).to_string());
        self.status_timer = 3.5;
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: ToolbarAction) {
        log::debug!("Toolbar action {:?}", action);
        match action {
            ToolbarAction::Close => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            ToolbarAction::Pin => {
                self.pinned = !self.pinned;
                let level = if self.pinned {
                    egui::WindowLevel::AlwaysOnTop
                } else {
                    egui::WindowLevel::Normal
                };
                ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
                self.set_status(action.label_key());
            }
            ToolbarAction::Save => self.set_status("saveFile"),
            ToolbarAction::Undo | ToolbarAction::Redo | ToolbarAction::Clipboard => {
                self.set_status(action.label_key());
            }
        }
    }
}

impl eframe::App for CaptureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.status_timer > 0.0 {
            self.status_timer -= ctx.input(|i| i.stable_dt) as f64;
            if self.status_timer <= 0.0 {
                self.status_message = None;
            } else {
                ctx.request_repaint();
            }
        }

        let mut action = None;
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            action = self.toolbar.ui(ui, &self.text);
        });
        if let Some(action) = action {
            self.handle_action(ctx, action);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(msg) = &self.status_message {
                    ui.label(msg);
                }
            });
        });

        let mut start_clicked = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(self.text.get(self.toolbar.current_tool.label_key()));
                ui.add_space(10.0);
                if ui.button(self.text.get(ScrollStatus::Start.label_key())).clicked() {
                    start_clicked = true;
                }
            });
        });
        if start_clicked {
            self.set_status(ScrollStatus::Start.label_key());
        }
    }
}

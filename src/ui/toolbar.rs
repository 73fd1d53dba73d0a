//! Annotation toolbar - every label is looked up in the injected table

use capture_lang::{stroke_label, PaletteColor, Tool, ToolbarAction, TranslationTable, STROKE_WIDTHS};
use egui::{Color32, Response, Ui};

const SWATCH_SIZE: f32 = 24.0;

pub struct Toolbar {
    pub current_tool: Tool,
    pub filled: bool,
    pub italic: bool,
    pub current_color: PaletteColor,
    pub stroke_width: f32,
}

impl Toolbar {
    pub fn new() -> Self {
        Self {
            current_tool: Tool::Rect,
            filled: false,
            italic: false,
            current_color: PaletteColor::Red,
            stroke_width: STROKE_WIDTHS[1],
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, text: &TranslationTable) -> Option<ToolbarAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            for tool in Tool::ALL {
                if self.tool_button(ui, tool, text).clicked() {
                    self.current_tool = tool;
                }
            }

            ui.separator();

            for toolbar_action in ToolbarAction::ALL {
                if ui.button(text.get(toolbar_action.label_key())).clicked() {
                    action = Some(toolbar_action);
                }
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.filled, text.get(self.current_tool.fill_key()));
            // Text is the only tool with a second style toggle
            if self.current_tool == Tool::Text {
                ui.checkbox(&mut self.italic, text.get("italic"));
            }

            ui.separator();

            for color in PaletteColor::ALL {
                self.color_swatch(ui, color, text);
            }

            ui.separator();

            ui.label(stroke_label(text, self.stroke_width));
            for width in STROKE_WIDTHS {
                let selected = (self.stroke_width - width).abs() < 0.1;
                if ui.selectable_label(selected, format!("{:.0}", width)).clicked() {
                    self.stroke_width = width;
                }
            }
        });

        action
    }

    fn tool_button(&self, ui: &mut Ui, tool: Tool, text: &TranslationTable) -> Response {
        let selected = self.current_tool == tool;
        ui.selectable_label(selected, tool.icon())
            .on_hover_text(text.get(tool.label_key()))
    }

    fn color_swatch(&mut self, ui: &mut Ui, color: PaletteColor, text: &TranslationTable) {
        let [r, g, b] = color.rgb();
        let fill = Color32::from_rgb(r, g, b);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let stroke = if self.current_color == color {
                egui::Stroke::new(2.0, Color32::WHITE)
            } else {
                ui.style().interact(&response).bg_stroke
            };
            ui.painter().rect_filled(rect, 2.0, fill);
            ui.painter().rect_stroke(rect, 2.0, stroke);
        }

        if response.clicked() {
            self.current_color = color;
        }
        response.on_hover_text(text.get(color.label_key()));
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

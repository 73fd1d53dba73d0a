//! Annotation toolbar descriptors and the translation keys they display

use crate::table::TranslationTable;

/// Drawing tools offered on the annotation toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Rect,
    Ellipse,
    Arrow,
    Number,
    Line,
    Text,
    Mosaic,
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 8] = [
        Tool::Rect,
        Tool::Ellipse,
        Tool::Arrow,
        Tool::Number,
        Tool::Line,
        Tool::Text,
        Tool::Mosaic,
        Tool::Eraser,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            Tool::Rect => "rect",
            Tool::Ellipse => "ellipse",
            Tool::Arrow => "arrow",
            Tool::Number => "number",
            Tool::Line => "line",
            Tool::Text => "text",
            Tool::Mosaic => "mosaic",
            Tool::Eraser => "eraser",
        }
    }

    /// Key of the tool's variant toggle (filled shape, translucent line, bold text...)
    pub fn fill_key(&self) -> &'static str {
        match self {
            Tool::Rect => "rectFill",
            Tool::Ellipse => "ellipseFill",
            Tool::Arrow => "arrowFill",
            Tool::Number => "numberFill",
            Tool::Line => "lineTransparent",
            Tool::Text => "bold",
            Tool::Mosaic => "mosaicFill",
            Tool::Eraser => "eraserFill",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Rect => "□",
            Tool::Ellipse => "○",
            Tool::Arrow => "→",
            Tool::Number => "#",
            Tool::Line => "—",
            Tool::Text => "T",
            Tool::Mosaic => "⌧",
            Tool::Eraser => "⌫",
        }
    }
}

/// Eight-colour annotation palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    Black,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 8] = [
        PaletteColor::Red,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Cyan,
        PaletteColor::Blue,
        PaletteColor::Purple,
        PaletteColor::Pink,
        PaletteColor::Black,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
            PaletteColor::Cyan => "cyan",
            PaletteColor::Blue => "blue",
            PaletteColor::Purple => "purple",
            PaletteColor::Pink => "pink",
            PaletteColor::Black => "black",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            PaletteColor::Red => [255, 0, 0],
            PaletteColor::Yellow => [255, 255, 0],
            PaletteColor::Green => [0, 255, 0],
            PaletteColor::Cyan => [0, 255, 255],
            PaletteColor::Blue => [0, 0, 255],
            PaletteColor::Purple => [255, 0, 255],
            PaletteColor::Pink => [255, 192, 203],
            PaletteColor::Black => [0, 0, 0],
        }
    }
}

/// Buttons on the right-hand side of the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Undo,
    Redo,
    Pin,
    Clipboard,
    Save,
    Close,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 6] = [
        ToolbarAction::Undo,
        ToolbarAction::Redo,
        ToolbarAction::Pin,
        ToolbarAction::Clipboard,
        ToolbarAction::Save,
        ToolbarAction::Close,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            ToolbarAction::Undo => "undo",
            ToolbarAction::Redo => "redo",
            ToolbarAction::Pin => "pin",
            ToolbarAction::Clipboard => "clipboard",
            ToolbarAction::Save => "save",
            ToolbarAction::Close => "close",
        }
    }
}

/// Status of a scrolling (long) screenshot capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStatus {
    Start,
    ReachedBottom,
    TooLong,
}

impl ScrollStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            ScrollStatus::Start => "start",
            ScrollStatus::ReachedBottom => "reachBottom",
            ScrollStatus::TooLong => "tooLong",
        }
    }
}

pub const STROKE_WIDTHS: [f32; 5] = [1.0, 2.0, 3.0, 5.0, 8.0];

/// "Stroke Width: 3px" style label
pub fn stroke_label(table: &TranslationTable, width: f32) -> String {
    format!("{}{:.0}px", table.get("strokeCtrl"), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, KEYS};

    fn all_keys() -> Vec<&'static str> {
        let mut keys = vec!["saveFile", "italic", "strokeCtrl"];
        keys.extend(Tool::ALL.iter().flat_map(|t| [t.label_key(), t.fill_key()]));
        keys.extend(PaletteColor::ALL.iter().map(|c| c.label_key()));
        keys.extend(ToolbarAction::ALL.iter().map(|a| a.label_key()));
        keys.extend(
            [ScrollStatus::Start, ScrollStatus::ReachedBottom, ScrollStatus::TooLong]
                .iter()
                .map(|s| s.label_key()),
        );
        keys
    }

    #[test]
    fn test_descriptor_keys_cover_key_list() {
        let mut used = all_keys();
        used.sort_unstable();
        let mut expected = KEYS.to_vec();
        expected.sort_unstable();
        assert_eq!(used, expected);
    }

    #[test]
    fn test_every_descriptor_resolves() {
        for lang in Language::all() {
            let table = TranslationTable::for_language(*lang);
            for key in all_keys() {
                assert!(!table.get(key).is_empty(), "{} blank in {}", key, lang);
            }
        }
    }

    #[test]
    fn test_stroke_label() {
        let table = TranslationTable::init("en");
        assert_eq!(stroke_label(&table, 3.0), "Stroke Width: 3px");

        let table = TranslationTable::init("ko");
        assert_eq!(stroke_label(&table, 8.0), "선 굵기: 8px");

        let table = TranslationTable::empty();
        assert_eq!(stroke_label(&table, 1.0), "1px");
    }

    #[test]
    fn test_palette_rgb() {
        assert_eq!(PaletteColor::Red.rgb(), [255, 0, 0]);
        assert_eq!(PaletteColor::Pink.rgb(), [255, 192, 203]);
        assert_eq!(PaletteColor::Black.rgb(), [0, 0, 0]);
    }
}

pub mod error;
pub mod i18n;
pub mod settings;
pub mod table;
pub mod tools;

// Re-export commonly used types
pub use error::LangError;
pub use i18n::{Language, KEYS};
pub use settings::AppSettings;
pub use table::TranslationTable;
pub use tools::{stroke_label, PaletteColor, ScrollStatus, Tool, ToolbarAction, STROKE_WIDTHS};

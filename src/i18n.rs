//! i18n module - language selection and the compiled-in string tables

use std::fmt;
use std::str::FromStr;

use crate::error::LangError;

/// Languages the annotation UI ships strings for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Korean,
    SimplifiedChinese,
    English,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::Korean, Language::SimplifiedChinese, Language::English]
    }

    /// Parse a language code such as `ko`, `kr`, `zhcn`, `zh-CN` or `en`.
    ///
    /// Matching ignores case and surrounding whitespace; `-` and `_` are
    /// only accepted as subtag separators (`zh-CN`, `ko_KR`).
    pub fn from_code(code: &str) -> Option<Self> {
        let subtags: Vec<String> = code
            .trim()
            .split(['-', '_'])
            .map(|tag| tag.to_ascii_lowercase())
            .collect();
        let subtags: Vec<&str> = subtags.iter().map(String::as_str).collect();

        match subtags.as_slice() {
            ["ko"] | ["kr"] | ["ko", "kr"] => Some(Language::Korean),
            ["zhcn"] | ["zh"] | ["zh", "cn"] | ["zh", "hans"] => Some(Language::SimplifiedChinese),
            ["en"] | ["en", "us"] => Some(Language::English),
            _ => None,
        }
    }

    /// Canonical code, accepted back by [`Language::from_code`]
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::SimplifiedChinese => "zhcn",
            Language::English => "en",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Korean => "한국어",
            Language::SimplifiedChinese => "简体中文",
            Language::English => "English",
        }
    }

    /// The full literal table for this language
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Korean => KO_KR,
            Language::SimplifiedChinese => ZH_CN,
            Language::English => EN_US,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| LangError::UnknownLanguage(s.to_string()))
    }
}

/// Every key each language table must define
pub const KEYS: &[&str] = &[
    "saveFile",
    // Tools
    "rect", "ellipse", "arrow", "number", "line", "text", "mosaic", "eraser",
    // Actions
    "undo", "redo", "pin", "clipboard", "save", "close",
    // Tool options
    "rectFill", "strokeCtrl", "ellipseFill", "arrowFill", "numberFill",
    "lineTransparent", "bold", "italic", "mosaicFill", "eraserFill",
    // Palette
    "red", "yellow", "green", "cyan", "blue", "purple", "pink", "black",
    // Long screenshot status
    "start", "reachBottom", "tooLong",
];

pub const KO_KR: &[(&str, &str)] = &[
    ("saveFile", "파일 저장"),

    ("rect", "사각형"), ("ellipse", "원형"), ("arrow", "화살표"), ("number", "번호"),
    ("line", "선"), ("text", "텍스트"), ("mosaic", "모자이크"), ("eraser", "지우개"),
    ("undo", "실행 취소"), ("redo", "다시 실행"), ("pin", "고정"),
    ("clipboard", "클립보드에 저장"), ("save", "디스크에 저장"), ("close", "닫기"),

    ("rectFill", "채워진 사각형"), ("strokeCtrl", "선 굵기: "), ("ellipseFill", "채워진 원형"),
    ("arrowFill", "채워진 화살표"), ("numberFill", "채워진 번호"), ("lineTransparent", "반투명 선"),
    ("bold", "굵게"), ("italic", "기울임"), ("mosaicFill", "사각형 모자이크"), ("eraserFill", "사각형 지우개"),

    ("red", "빨강"), ("yellow", "노랑"), ("green", "초록"), ("cyan", "청록"),
    ("blue", "파랑"), ("purple", "보라"), ("pink", "분홍"), ("black", "검정"),

    ("start", "시작"),
    ("reachBottom", "하단에 도달하여 자동 스크롤이 중지되었습니다"),
    ("tooLong", "이미지가 너무 길어 자동 스크롤이 중지되었습니다"),
];

pub const ZH_CN: &[(&str, &str)] = &[
    ("saveFile", "保存文件"),

    ("rect", "矩形"), ("ellipse", "圆形"), ("arrow", "箭头"), ("number", "标号"),
    ("line", "线条"), ("text", "文本"), ("mosaic", "马赛克"), ("eraser", "橡皮擦"),
    ("undo", "撤销"), ("redo", "重做"), ("pin", "钉在桌面"),
    ("clipboard", "保存到剪贴板"), ("save", "保存到磁盘"), ("close", "关闭"),

    ("rectFill", "实心矩形"), ("strokeCtrl", "线条粗细："), ("ellipseFill", "实心圆形"),
    ("arrowFill", "实心箭头"), ("numberFill", "实心标号"), ("lineTransparent", "半透明线条"),
    ("bold", "粗体"), ("italic", "斜体"), ("mosaicFill", "矩形马赛克"), ("eraserFill", "矩形橡皮擦"),

    ("red", "红"), ("yellow", "黄"), ("green", "绿"), ("cyan", "青"),
    ("blue", "蓝"), ("purple", "紫"), ("pink", "粉"), ("black", "黑"),

    ("start", "开始"),
    ("reachBottom", "已到达底部，自动滚动已停止"),
    ("tooLong", "图片过长，自动滚动已停止"),
];

pub const EN_US: &[(&str, &str)] = &[
    ("saveFile", "Save File"),

    ("rect", "Rectangle"), ("ellipse", "Ellipse"), ("arrow", "Arrow"), ("number", "Number"),
    ("line", "Line"), ("text", "Text"), ("mosaic", "Mosaic"), ("eraser", "Eraser"),
    ("undo", "Undo"), ("redo", "Redo"), ("pin", "Pin to Screen"),
    ("clipboard", "Save to Clipboard"), ("save", "Save to Disk"), ("close", "Close"),

    ("rectFill", "Filled Rectangle"), ("strokeCtrl", "Stroke Width: "), ("ellipseFill", "Filled Ellipse"),
    ("arrowFill", "Filled Arrow"), ("numberFill", "Filled Number"), ("lineTransparent", "Translucent Line"),
    ("bold", "Bold"), ("italic", "Italic"), ("mosaicFill", "Rectangle Mosaic"), ("eraserFill", "Rectangle Eraser"),

    ("red", "Red"), ("yellow", "Yellow"), ("green", "Green"), ("cyan", "Cyan"),
    ("blue", "Blue"), ("purple", "Purple"), ("pink", "Pink"), ("black", "Black"),

    ("start", "Start"),
    ("reachBottom", "Reached the bottom, auto-scroll stopped"),
    ("tooLong", "Image is too long, auto-scroll stopped"),
];

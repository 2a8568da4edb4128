/// Captioned call-out blocks. Every variant shares one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionStyle {
    Note,
    Memo,
    Tip,
    Info,
    Warning,
    Important,
    Caution,
    Notice,
    Box,
}

impl CaptionStyle {
    pub const ALL: [CaptionStyle; 9] = [
        CaptionStyle::Note,
        CaptionStyle::Memo,
        CaptionStyle::Tip,
        CaptionStyle::Info,
        CaptionStyle::Warning,
        CaptionStyle::Important,
        CaptionStyle::Caution,
        CaptionStyle::Notice,
        CaptionStyle::Box,
    ];

    /// Block name as written in markup, e.g. `"note"`.
    pub fn name(self) -> &'static str {
        match self {
            CaptionStyle::Note => "note",
            CaptionStyle::Memo => "memo",
            CaptionStyle::Tip => "tip",
            CaptionStyle::Info => "info",
            CaptionStyle::Warning => "warning",
            CaptionStyle::Important => "important",
            CaptionStyle::Caution => "caution",
            CaptionStyle::Notice => "notice",
            CaptionStyle::Box => "box",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }
}

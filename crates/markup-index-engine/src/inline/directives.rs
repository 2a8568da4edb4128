use super::args::{split_raw, unescape};

/// Base text of a `@<ruby>{base,reading}` directive.
///
/// The reading is left to the rendering stage and dropped here.
pub fn inline_ruby(arg: &str) -> String {
    split_raw(arg)
        .first()
        .map(|base| unescape(base))
        .unwrap_or_default()
}

/// Word of a `@<kw>{word,alt}` directive.
///
/// Splits on the first comma only and does not honour escapes.
pub fn inline_kw(arg: &str) -> String {
    arg.split_once(',')
        .map_or(arg, |(word, _alt)| word)
        .to_string()
}

/// Label of a `@<href>{url,label}` directive, or an empty string when no
/// label is given. The URL itself is never returned.
pub fn inline_href(arg: &str) -> String {
    split_raw(arg)
        .into_iter()
        .map(str::trim_start)
        .nth(1)
        .map(|label| unescape(label).trim().to_string())
        .unwrap_or_default()
}

/// Inline directives the index pass knows how to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineDirective {
    Ruby,
    Kw,
    Href,
    Bou,
    Chap,
    Chapref,
    Title,
    List,
    Img,
    Imgref,
    Table,
    Eq,
    Fn,
    Hd,
    Column,
    Pageref,
    Tcy,
    Balloon,
    W,
    Wb,
    Raw,
    Embed,
}

impl InlineDirective {
    const NAMES: [(&'static str, InlineDirective); 22] = [
        ("ruby", InlineDirective::Ruby),
        ("kw", InlineDirective::Kw),
        ("href", InlineDirective::Href),
        ("bou", InlineDirective::Bou),
        ("chap", InlineDirective::Chap),
        ("chapref", InlineDirective::Chapref),
        ("title", InlineDirective::Title),
        ("list", InlineDirective::List),
        ("img", InlineDirective::Img),
        ("imgref", InlineDirective::Imgref),
        ("table", InlineDirective::Table),
        ("eq", InlineDirective::Eq),
        ("fn", InlineDirective::Fn),
        ("hd", InlineDirective::Hd),
        ("column", InlineDirective::Column),
        ("pageref", InlineDirective::Pageref),
        ("tcy", InlineDirective::Tcy),
        ("balloon", InlineDirective::Balloon),
        ("w", InlineDirective::W),
        ("wb", InlineDirective::Wb),
        ("raw", InlineDirective::Raw),
        ("embed", InlineDirective::Embed),
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, directive)| *directive)
    }

    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, directive)| *directive == self)
            .map(|(n, _)| *n)
            .unwrap_or_default()
    }

    /// Text this directive contributes to an index caption.
    ///
    /// Cross references resolve to nothing here: their targets are only
    /// known once every chapter has been indexed.
    pub fn expand(self, arg: &str) -> String {
        match self {
            InlineDirective::Ruby => inline_ruby(arg),
            InlineDirective::Kw => inline_kw(arg),
            InlineDirective::Href => inline_href(arg),
            InlineDirective::Bou => arg.to_string(),
            _ => String::new(),
        }
    }
}

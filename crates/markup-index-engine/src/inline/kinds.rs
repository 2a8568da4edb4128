/// Delimiters of a comma-separated directive argument.
///
/// The scanner refers to these constants; it never hardcodes `,` or `\`.
pub struct ArgSyntax;

impl ArgSyntax {
    /// Separates arguments.
    pub const SEPARATOR: u8 = b',';
    /// An odd run of these before a separator makes the separator literal.
    pub const ESCAPE: u8 = b'\\';
    /// An escaped separator as it appears in a raw token.
    pub const ESCAPED_SEPARATOR: &'static str = "\\,";
}

use super::{cursor::Cursor, kinds::ArgSyntax};

/// Splits a directive argument on unescaped commas, keeping escapes intact.
///
/// A comma preceded by an odd run of backslashes stays inside the token as a
/// `\,` pair; any other backslash is literal. Empty tokens are dropped, so
/// `"a,,b"` yields `["a", "b"]`.
pub fn split_raw(arg: &str) -> Vec<&str> {
    let mut cur = Cursor::new(arg);
    let mut out = vec![];
    let mut start = cur.pos();
    // Parity of the backslash run ending at the cursor.
    let mut escaping = false;

    fn push_token<'a>(out: &mut Vec<&'a str>, token: &'a str) {
        if !token.is_empty() {
            out.push(token);
        }
    }

    while let Some(b) = cur.peek() {
        match b {
            ArgSyntax::ESCAPE => {
                escaping = !escaping;
                cur.bump();
            }
            ArgSyntax::SEPARATOR if escaping => {
                escaping = false;
                cur.bump();
            }
            ArgSyntax::SEPARATOR => {
                push_token(&mut out, cur.slice_from(start));
                cur.bump();
                start = cur.pos();
            }
            _ => {
                escaping = false;
                cur.bump();
            }
        }
    }

    push_token(&mut out, cur.slice_from(start));
    out
}

/// Replaces every `\,` pair with a literal comma.
pub fn unescape(raw: &str) -> String {
    raw.replace(ArgSyntax::ESCAPED_SEPARATOR, ",")
}

/// Splits a directive argument into unescaped tokens.
pub fn tokenize(arg: &str) -> Vec<String> {
    split_raw(arg).into_iter().map(unescape).collect()
}

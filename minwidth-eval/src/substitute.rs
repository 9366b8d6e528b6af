/// Replaces every whole-token occurrence of `variable` in `formula` with the
/// decimal literal of `value`, padded with spaces.
///
/// Matching is case-insensitive. A character counts as the variable only when
/// it is not part of a longer identifier, so the `x` in `exp` is left alone.
/// The padding keeps the literal from merging with neighboring tokens.
pub(crate) fn substitute(formula: &str, variable: char, value: f64) -> String {
    let needle = variable.to_ascii_lowercase();
    let literal = value.to_string();

    let mut out = String::with_capacity(formula.len() + literal.len() + 2);
    let mut prev: Option<char> = None;
    let mut chars = formula.chars().peekable();

    while let Some(c) = chars.next() {
        let standalone = c.to_ascii_lowercase() == needle
            && !prev.is_some_and(is_identifier_char)
            && !chars.peek().copied().is_some_and(is_identifier_char);

        if standalone {
            out.push(' ');
            out.push_str(&literal);
            out.push(' ');
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

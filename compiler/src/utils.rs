use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref UPPERCASE:  Regex = Regex::new(r"[A-Z]").unwrap();
}

const CPP_KEYWORDS: [&str; 48] = [
    "alignas", "alignof", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "constexpr", "continue", "default", "delete", "do", "double",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "long", "namespace", "new",
    "operator", "private", "protected", "public", "return", "short", "sizeof", "static",
    "struct", "switch", "template", "this", "true", "typedef", "union", "while",
];

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}

/// Converts `WhileLoop` to `while_loop`: every uppercase letter except a
/// leading one gets an underscore in front, then the result is lowercased.
/// Acronyms are split letter by letter (`IO` becomes `i_o`).
pub fn to_snake_case(s: &str) -> String {
    let mut snake = String::with_capacity(s.len() + 4);
    let mut last = 0;
    for mat in UPPERCASE.find_iter(s) {
        if mat.start() > 0 {
            snake.push_str(&s[last..mat.start()]);
            snake.push('_');
            last = mat.start();
        }
    }
    snake.push_str(&s[last..]);
    snake.to_lowercase()
}

pub fn is_cpp_keyword(s: &str) -> bool {
    CPP_KEYWORDS.contains(&s)
}

/// Escapes C++ reserved keywords by suffixing with an underscore.
pub fn escape_cpp_keyword(s: &str) -> String {
    if is_cpp_keyword(s) {
        format!("{}_", s)
    } else {
        s.to_string()
    }
}

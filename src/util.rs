const SHOWN: usize = 33;

/// Pads the head of `s` into a fixed-width, escaped `|...|` column for trace output.
pub fn formatter_str(s: &str) -> String {
    let head: String = s.chars().take(SHOWN).collect();
    let head = head.escape_default().to_string();
    let head = head.replace("\\\"", "\"").replace("\\\'", "\'");
    let head: String = head.chars().take(SHOWN).collect();
    format!("{:<35}", format!("|{head}|"))
}

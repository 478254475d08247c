use once_cell::sync::Lazy;
use regex::Regex;

/// Glyph that replaces `-`, `*` and `+` list markers.
pub const BULLET_GLYPH: &str = "•";

static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*```[^\n]*(?:\n|$)").expect("static regex compile"));
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:#+[ \t]*)+").expect("static regex compile"));
static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)[-*+][ \t]+").expect("static regex compile"));
static BOLD_STAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("static regex compile"));
static BOLD_UNDERSCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").expect("static regex compile"));
static ITALIC_STAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").expect("static regex compile"));
static ITALIC_UNDERSCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b_([^_\n]+)_\b").expect("static regex compile"));
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("static regex compile"));
static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("static regex compile"));

/// Turn model output into plain text suitable for a textarea.
///
/// Bullets are rewritten before emphasis is stripped so that `* item` is read
/// as a list marker rather than an opening italic star.
#[must_use]
pub fn strip_markdown(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = FENCE_RE.replace_all(&text, "");
    let text = HEADING_RE.replace_all(&text, "");
    let text = BULLET_RE.replace_all(&text, format!("${{1}}{BULLET_GLYPH} ").as_str());
    let text = BOLD_STAR_RE.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORE_RE.replace_all(&text, "$1");
    let text = ITALIC_STAR_RE.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE_RE.replace_all(&text, "$1");
    let text = INLINE_CODE_RE.replace_all(&text, "$1");

    // Unbalanced leftovers.
    let text = text.replace("```", "").replace("**", "");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");

    // Never start with '#', whatever emphasis stripping exposed.
    text.trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_end()
        .to_string()
}

/// Maximum length of any free-text field after sanitization, in characters.
const MAX_FIELD_CHARS: usize = 1000;

const JS_SCHEME: &str = "javascript:";

/// Clean one free-text field: trim, drop angle brackets, remove
/// `javascript:` substrings (case-insensitive), cap at 1000 characters.
/// Idempotent: a second pass is a no-op.
pub fn sanitize(input: &str) -> String {
    let stripped: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect();

    // Removing one occurrence can splice a new one together, so run to a
    // fixpoint.
    let mut cleaned = stripped;
    loop {
        let next = remove_js_scheme(&cleaned);
        if next == cleaned {
            break;
        }
        cleaned = next;
    }

    let truncated: String = cleaned.chars().take(MAX_FIELD_CHARS).collect();
    truncated.trim().to_string()
}

/// Sanitize an optional field, collapsing empty results to None.
pub fn sanitize_opt(input: &str) -> Option<String> {
    let cleaned = sanitize(input);
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

fn remove_js_scheme(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let needle: Vec<char> = JS_SCHEME.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let matches_needle = i + needle.len() <= chars.len()
            && chars[i..i + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(a, b)| a.eq_ignore_ascii_case(b));
        if matches_needle {
            i += needle.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

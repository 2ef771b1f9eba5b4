//! Text folding for pattern matching.

/// Fold input for matching: lower-case, Spanish diacritics stripped,
/// whitespace collapsed to single spaces, trimmed.
///
/// The pattern tables are written against this folded form, so `"Húmeda "`
/// and `"humeda"` match identically.
pub fn fold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_was_space = true;
    for ch in input.chars().flat_map(|c| c.to_lowercase()) {
        let ch = fold_char(ch);
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

fn fold_char(ch: char) -> char {
    match ch {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        _ => ch,
    }
}

/// The last whitespace-separated word strictly before byte offset `end`
/// in already-folded text.
pub fn preceding_word(folded: &str, end: usize) -> Option<&str> {
    let head = folded.get(..end)?.trim_end();
    head.rsplit(' ').next().filter(|w| !w.is_empty())
}

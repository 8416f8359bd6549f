const VIETNAMESE_FOLDS: &[(&str, char)] = &[
    ("àáạảãâầấậẩẫăằắặẳẵ", 'a'),
    ("èéẹẻẽêềếệểễ", 'e'),
    ("ìíịỉĩ", 'i'),
    ("òóọỏõôồốộổỗơờớợởỡ", 'o'),
    ("ùúụủũưừứựửữ", 'u'),
    ("ỳýỵỷỹ", 'y'),
    ("đ", 'd'),
];

/// Generates a URL-safe slug from a human-readable title.
///
/// Lowercases, folds Vietnamese diacritics to ASCII, turns every run of
/// other characters into a single hyphen and trims hyphens at both ends.
/// Returns an empty string when the title has no usable characters.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for character in title.chars().flat_map(char::to_lowercase) {
        if is_combining_mark(character) {
            continue;
        }

        let folded = fold_vietnamese(character);
        if folded.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(folded);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

fn fold_vietnamese(character: char) -> char {
    if character.is_ascii() {
        return character;
    }

    VIETNAMESE_FOLDS
        .iter()
        .find(|(variants, _)| variants.contains(character))
        .map_or(character, |(_, base)| *base)
}

// Decomposed input carries tone marks as separate code points.
fn is_combining_mark(character: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&character)
}

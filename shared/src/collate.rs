//! Locale-style string ordering for unit names.
//!
//! Compares in three passes: base letters ignoring accents and case, then
//! accents (unaccented first), then case (lowercase first). Identical keys
//! fall back to code-point order so the result is a total order.

use std::cmp::Ordering;

/// Compare two strings the way a Latin-script collator would.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (ka, kb) = (keys(a), keys(b));
    ka.iter()
        .map(|k| k.0)
        .cmp(kb.iter().map(|k| k.0))
        .then_with(|| ka.iter().map(|k| k.1).cmp(kb.iter().map(|k| k.1)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Collation keys: base letter plus accent flag. Combining diacritics mark the
/// preceding letter; ligatures expand to two letters.
fn keys(s: &str) -> Vec<(char, bool)> {
    let mut out: Vec<(char, bool)> = Vec::with_capacity(s.len());
    for c in s.chars() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.1 = true;
            }
            continue;
        }
        let lower = c.to_lowercase().next().unwrap_or(c);
        match lower {
            'ß' => out.extend([('s', true), ('s', true)]),
            'æ' => out.extend([('a', true), ('e', true)]),
            'œ' => out.extend([('o', true), ('e', true)]),
            _ => out.push(fold(lower)),
        }
    }
    out
}

fn is_combining_mark(c: char) -> bool {
    ('\u{300}'..='\u{36f}').contains(&c)
}

/// Base letter (accent stripped) and whether an accent was stripped.
fn fold(lower: char) -> (char, bool) {
    let base = match lower {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        other => return (other, false),
    };
    (base, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<&str>) -> Vec<&str> {
        words.sort_by(|a, b| locale_cmp(a, b));
        words
    }

    #[test]
    fn ignores_case_for_primary_order() {
        assert_eq!(sorted(vec!["mago", "Bárbaro", "arquera"]), vec!["arquera", "Bárbaro", "mago"]);
    }

    #[test]
    fn accents_sort_with_their_base_letter() {
        assert_eq!(
            sorted(vec!["Rayo", "Curación", "Éxtasis", "Dragón"]),
            vec!["Curación", "Dragón", "Éxtasis", "Rayo"]
        );
    }

    #[test]
    fn unaccented_before_accented_then_lowercase_before_uppercase() {
        assert_eq!(locale_cmp("peña", "pena"), Ordering::Greater);
        assert_eq!(locale_cmp("mago", "Mago"), Ordering::Less);
        assert_eq!(locale_cmp("Mago", "Mago"), Ordering::Equal);
    }

    #[test]
    fn decomposed_accents_match_precomposed() {
        assert_eq!(locale_cmp("Drago\u{301}n", "Dragona"), Ordering::Less);
        assert_eq!(locale_cmp("Drago\u{301}n", "Dragón"), Ordering::Greater);
        assert_eq!(locale_cmp("Drago\u{301}n", "Dragon"), Ordering::Greater);
    }

    #[test]
    fn ligatures_expand_to_two_letters() {
        assert_eq!(locale_cmp("ß", "st"), Ordering::Less);
        assert_eq!(locale_cmp("æ", "af"), Ordering::Less);
        assert_eq!(locale_cmp("œ", "of"), Ordering::Less);
        assert_eq!(locale_cmp("ss", "ß"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_cmp("Globo", "Globo bombardero"), Ordering::Less);
    }
}

//! Display names derived from asset filenames

/// Convert a filename (or bare stem) into a readable title
///
/// - The final `.ext` is dropped
/// - `Dry_Bones` → `Dry Bones` (underscores become spaces)
/// - `KingBoo` → `King Boo` (camel case is split when there are no underscores)
/// - Every word is capitalized, the rest of it lowercased
pub fn format_filename(filename: &str) -> String {
    let name = match filename.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => filename,
    };

    let spaced = if name.contains('_') {
        name.replace('_', " ")
    } else {
        split_camel_case(name)
    };

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscores() {
        assert_eq!(format_filename("Dry_Bones"), "Dry Bones");
        assert_eq!(format_filename("baby_peach.png"), "Baby Peach");
        assert_eq!(format_filename("Mario_Kart_Stadium.jpg"), "Mario Kart Stadium");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(format_filename("KingBoo"), "King Boo");
        assert_eq!(format_filename("FlowerCup"), "Flower Cup");
        assert_eq!(format_filename("standardKart.webp"), "Standard Kart");
    }

    #[test]
    fn test_underscores_win_over_camel_case() {
        // Interior capitals are lowercased, not split, once underscores are present
        assert_eq!(format_filename("Sweet_SweetCanyon"), "Sweet Sweetcanyon");
    }

    #[test]
    fn test_words_are_recapitalized() {
        assert_eq!(format_filename("DK"), "D K");
        assert_eq!(format_filename("TOAD_HARBOR"), "Toad Harbor");
        assert_eq!(format_filename("yoshi"), "Yoshi");
    }

    #[test]
    fn test_only_last_extension_is_dropped() {
        assert_eq!(format_filename("Dr.Mario.png"), "Dr. Mario");
        assert_eq!(format_filename("Mr_Bones.v2.gif"), "Mr Bones.v2");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(format_filename("__Wario__"), "Wario");
        assert_eq!(format_filename(""), "");
    }
}

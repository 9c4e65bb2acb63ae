use rand::Rng;
use rand::seq::IndexedRandom;

use crate::consts::ALPHABET;

/// A single character-level typo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Drop the character at the position. Never empties a word.
    Delete,
    /// Add a random lowercase letter at the position (may append).
    Insert,
    /// Swap the character at the position for a different lowercase letter.
    Substitute,
    /// Swap the character at the position with its right neighbour.
    Transpose,
}

/// The edits [`corrupt`] chooses from. Transposition is left out so the
/// output keeps the three-way delete/insert/substitute distribution.
pub const DEFAULT_EDITS: &[Edit] = &[Edit::Delete, Edit::Insert, Edit::Substitute];

///
/// Introduce a single random typo into a word.
///
/// The edit is drawn uniformly from [`DEFAULT_EDITS`]. An empty word comes
/// back empty. A one-character word that draws a deletion comes back
/// unchanged.
///
pub fn corrupt<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    corrupt_with(word, DEFAULT_EDITS, rng)
}

///
/// Introduce a single random typo drawn from a caller-supplied edit set.
///
/// # Arguments:
/// - word: the word to misspell
/// - edits: the edits to choose from (uniformly); an empty set is a no-op
/// - rng: the random source
///
pub fn corrupt_with<R: Rng + ?Sized>(word: &str, edits: &[Edit], rng: &mut R) -> String {
    if word.is_empty() {
        return String::new();
    }

    let Some(&edit) = edits.choose(rng) else {
        return word.to_string();
    };

    let mut chars: Vec<char> = word.chars().collect();
    edit.apply(&mut chars, rng);

    chars.into_iter().collect()
}

impl Edit {
    fn apply<R: Rng + ?Sized>(self, chars: &mut Vec<char>, rng: &mut R) {
        let len = chars.len();
        match self {
            Edit::Delete => {
                let index = rng.random_range(0..len);
                if len > 1 {
                    chars.remove(index);
                }
            }
            Edit::Insert => {
                let index = rng.random_range(0..=len);
                chars.insert(index, random_letter(rng, None));
            }
            Edit::Substitute => {
                let index = rng.random_range(0..len);
                chars[index] = random_letter(rng, Some(chars[index]));
            }
            Edit::Transpose => {
                let index = rng.random_range(0..len);
                if len > 1 && index < len - 1 {
                    chars.swap(index, index + 1);
                }
            }
        }
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R, exclude: Option<char>) -> char {
    let pool: Vec<char> = ALPHABET
        .iter()
        .map(|&b| b as char)
        .filter(|&c| Some(c) != exclude)
        .collect();
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ITEMS;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::*;

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    #[rstest]
    fn test_empty_word(mut rng: StdRng) {
        assert_eq!(corrupt("", &mut rng), "");
        assert_eq!(corrupt_with("", &[Edit::Insert], &mut rng), "");
    }

    #[rstest]
    fn test_catalog_words_always_change() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for item in ITEMS {
                let typo = corrupt(item, &mut rng);
                let diff = char_len(&typo) as i64 - char_len(item) as i64;

                assert!(diff.abs() <= 1, "{item} -> {typo}");
                assert_ne!(typo.as_str(), *item);
            }
        }
    }

    #[rstest]
    fn test_single_char_word() {
        let mut saw_noop = false;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let typo = corrupt("a", &mut rng);

            assert!(!typo.is_empty());
            assert!(char_len(&typo) <= 2);
            if typo == "a" {
                saw_noop = true;
            }
        }
        assert!(saw_noop, "a deletion on a single character should pass it through");
    }

    #[rstest]
    fn test_delete_only(mut rng: StdRng) {
        for _ in 0..50 {
            let typo = corrupt_with("sofa", &[Edit::Delete], &mut rng);
            assert_eq!(char_len(&typo), 3);
            assert!((0..4).any(|i| {
                let mut chars: Vec<char> = "sofa".chars().collect();
                chars.remove(i);
                chars.into_iter().collect::<String>() == typo
            }));
        }
    }

    #[rstest]
    fn test_insert_only(mut rng: StdRng) {
        for _ in 0..50 {
            let typo = corrupt_with("lamp", &[Edit::Insert], &mut rng);
            assert_eq!(char_len(&typo), 5);
            assert!((0..5).any(|i| {
                let mut chars: Vec<char> = typo.chars().collect();
                let removed = chars.remove(i);
                removed.is_ascii_lowercase() && chars.into_iter().collect::<String>() == "lamp"
            }));
        }
    }

    #[rstest]
    fn test_substitute_only(mut rng: StdRng) {
        for _ in 0..50 {
            let typo = corrupt_with("table", &[Edit::Substitute], &mut rng);
            let differing = typo
                .chars()
                .zip("table".chars())
                .filter(|(a, b)| a != b)
                .count();

            assert_eq!(char_len(&typo), 5);
            assert_eq!(differing, 1);
        }
    }

    #[rstest]
    fn test_transpose_only(mut rng: StdRng) {
        let mut saw_swap = false;
        for _ in 0..50 {
            let typo = corrupt_with("ab", &[Edit::Transpose], &mut rng);
            assert!(typo == "ab" || typo == "ba");
            saw_swap |= typo == "ba";
        }
        assert!(saw_swap);
    }

    #[rstest]
    fn test_empty_edit_set(mut rng: StdRng) {
        assert_eq!(corrupt_with("toys", &[], &mut rng), "toys");
    }

    #[rstest]
    fn test_non_ascii_word(mut rng: StdRng) {
        let typo = corrupt_with("café", &[Edit::Substitute], &mut rng);
        assert_eq!(char_len(&typo), 4);
    }

    #[rstest]
    fn test_same_seed_same_typo() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for item in ITEMS {
            assert_eq!(corrupt(item, &mut a), corrupt(item, &mut b));
        }
    }
}

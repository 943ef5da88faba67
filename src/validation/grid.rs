//! Grid reference grammar and decomposition
//!
//! Accepted form: one letter, one or two row digits, then optionally a hyphen
//! followed by any number of subgrid digits (`E5`, `b12`, `F03`, `E5-`, `E5-267`).
//! Only the grammar is checked here; whether the map can place the reference is
//! decided by the coordinate resolver.

use crate::validation::error::{GridError, GridResult};
use std::fmt;

/// Check grid text against `^[A-Za-z][0-9][0-9]?(-[0-9]*)?$`
///
/// The input must already be trimmed; no normalization is performed.
pub fn validate_grid(text: &str) -> bool {
    let bytes = text.as_bytes();

    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }

    let row_len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if !(1..=2).contains(&row_len) {
        return false;
    }

    match rest[row_len..].split_first() {
        None => true,
        Some((&b'-', subgrid)) => subgrid.iter().all(u8::is_ascii_digit),
        Some(_) => false,
    }
}

/// A grid reference split into its column, row and subgrid parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridReference {
    raw: String,
    column: char,
    row: u32,
    subgrid: String,
}

impl GridReference {
    /// Parse text that satisfies the grid grammar
    pub fn parse(text: &str) -> GridResult<Self> {
        if !validate_grid(text) {
            return Err(GridError::Malformed { input: text.to_string() });
        }

        let mut chars = text.chars();
        // Grammar guarantees a leading ASCII letter
        let column = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or('A');
        let tail = chars.as_str();

        let (row_text, subgrid) = match tail.split_once('-') {
            Some((row, sub)) => (row, sub),
            None => (tail, ""),
        };
        let row = row_text
            .parse::<u32>()
            .map_err(|_| GridError::Malformed { input: text.to_string() })?;

        Ok(Self {
            raw: text.to_string(),
            column,
            row,
            subgrid: subgrid.to_string(),
        })
    }

    /// Upper-case column letter
    pub fn column(&self) -> char {
        self.column
    }

    /// Row number as written (`F03` is row 3)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Subgrid digits, outermost first; empty when absent
    pub fn subgrid(&self) -> &str {
        &self.subgrid
    }

    /// Depth of keypad subdivision
    pub fn depth(&self) -> usize {
        self.subgrid.len()
    }
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw.to_ascii_uppercase())
    }
}

impl std::str::FromStr for GridReference {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Independent restatement of the grammar used as the property oracle
    fn grammar_matches(s: &str) -> bool {
        let (head, subgrid) = match s.find('-') {
            Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
            None => (s, None),
        };
        let mut head_chars = head.chars();
        let letter_ok = head_chars.next().map_or(false, |c| c.is_ascii_alphabetic());
        let digits: Vec<char> = head_chars.collect();
        let row_ok = (1..=2).contains(&digits.len()) && digits.iter().all(|c| c.is_ascii_digit());
        let sub_ok = subgrid.map_or(true, |sub| sub.chars().all(|c| c.is_ascii_digit()));
        letter_ok && row_ok && sub_ok
    }

    #[test]
    fn test_accepts_documented_formats() {
        for grid in ["B5", "a7", "F03", "A1-12", "E5-267", "E5-", "z99-0", "E5-26"] {
            assert!(validate_grid(grid), "{} should be accepted", grid);
        }
    }

    #[test]
    fn test_rejects_malformed_text() {
        for grid in ["", "E", "5E", "E123", "E5-2a", "E5--2", "E5 -2", " E5", "E5 ", "É5", "E-5", "EE5", "E5-2-6"] {
            assert!(!validate_grid(grid), "{:?} should be rejected", grid);
        }
    }

    #[test]
    fn test_validate_matches_grammar_on_generated_strings() {
        let alphabet = ['A', 'e', 'z', 'Q', '0', '1', '5', '9', '-', ' ', '_', 'ж'];
        let mut rng = ChaCha8Rng::seed_from_u64(0x6d6f7274);

        for _ in 0..20_000 {
            let len = rng.gen_range(0..8);
            let s: String = (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect();
            assert_eq!(validate_grid(&s), grammar_matches(&s), "mismatch on {:?}", s);
        }
    }

    #[test]
    fn test_generated_valid_grids_are_accepted() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..2_000 {
            let mut s = String::new();
            let letter = (b'a' + rng.gen_range(0..26u8)) as char;
            s.push(if rng.gen_bool(0.5) { letter.to_ascii_uppercase() } else { letter });
            for _ in 0..rng.gen_range(1..=2) {
                s.push(char::from_digit(rng.gen_range(0..10), 10).unwrap());
            }
            if rng.gen_bool(0.7) {
                s.push('-');
                for _ in 0..rng.gen_range(0..5) {
                    s.push(char::from_digit(rng.gen_range(0..10), 10).unwrap());
                }
            }
            assert!(validate_grid(&s), "{:?} should be accepted", s);
            assert!(GridReference::parse(&s).is_ok());
        }
    }

    #[test]
    fn test_parse_decomposes_reference() {
        let grid = GridReference::parse("e5-267").unwrap();
        assert_eq!(grid.column(), 'E');
        assert_eq!(grid.row(), 5);
        assert_eq!(grid.subgrid(), "267");
        assert_eq!(grid.depth(), 3);
        assert_eq!(grid.to_string(), "E5-267");

        let grid: GridReference = "F03".parse().unwrap();
        assert_eq!(grid.row(), 3);
        assert_eq!(grid.subgrid(), "");

        let grid = GridReference::parse("B12-").unwrap();
        assert_eq!(grid.row(), 12);
        assert_eq!(grid.depth(), 0);
        assert_eq!(grid.to_string(), "B12-");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let err = GridReference::parse("E5 26").unwrap_err();
        assert_eq!(err, GridError::Malformed { input: "E5 26".to_string() });
        assert!(err.is_malformed());
    }
}

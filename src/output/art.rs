//! ASCII art for bulls and cows
//!
//! Art from http://ascii.co.uk. Both figures are nine rows tall and each
//! row is padded to a fixed width so they can be printed side by side or
//! repeated horizontally to show a score count.

/// The bull, row by row
pub const BULL: [&str; 9] = [
    r"  ,           ,    ",
    r" /             \   ",
    r"((__-^^-,-^^-__)   ",
    r" `-_---' `---_-'   ",
    r"  <__|o` 'o|__>    ",
    r"     \  ` /        ",
    r"      ): :(        ",
    r"      :o_o:        ",
    r#"       "-"         "#,
];

/// The cow, row by row
pub const COW: [&str; 9] = [
    r"                    ",
    r"     /)   (\        ",
    r#".-._((,~"~.))_.-,   "#,
    r" `-.   e e   ,-'    ",
    r"   / ,o---o. \      ",
    r"  ( ( .___. ) )     ",
    r"   ) `-----' (      ",
    r"  /`-._____.-'\     ",
    r"                    ",
];

/// Render a figure repeated `count` times side by side
///
/// Returns one string per output row; an empty vec when `count` is zero so
/// a zero score prints nothing.
#[must_use]
pub fn repeated_rows(figure: &[&str; 9], count: u32) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }

    figure
        .iter()
        .map(|row| row.repeat(count as usize))
        .collect()
}

/// Render the bull and cow side by side for the intro banner
#[must_use]
pub fn banner_rows() -> Vec<String> {
    BULL.iter()
        .zip(COW.iter())
        .map(|(bull, cow)| format!("{bull}{cow}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figures_are_same_height() {
        assert_eq!(BULL.len(), COW.len());
    }

    #[test]
    fn figure_rows_are_fixed_width() {
        for row in BULL {
            assert_eq!(row.chars().count(), 19);
        }
        for row in COW {
            assert_eq!(row.chars().count(), 20);
        }
    }

    #[test]
    fn repeated_rows_zero_count_is_empty() {
        assert!(repeated_rows(&BULL, 0).is_empty());
    }

    #[test]
    fn repeated_rows_tile_horizontally() {
        let rows = repeated_rows(&COW, 3);
        assert_eq!(rows.len(), 9);
        for (rendered, original) in rows.iter().zip(COW.iter()) {
            assert_eq!(rendered.chars().count(), original.chars().count() * 3);
        }
    }

    #[test]
    fn banner_pairs_every_row() {
        let rows = banner_rows();
        assert_eq!(rows.len(), 9);
        assert!(rows[0].starts_with(BULL[0]));
        assert!(rows[0].ends_with(COW[0]));
    }
}

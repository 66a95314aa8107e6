/// Renders the annotation of a fragment ion, e.g. `b3` or `y4(2+)`.
///
/// # Arguments
/// * `fragment_length` - Number of residues in the fragment.
/// * `charge` - Charge of the fragment, no suffix is added for charge 1.
/// * `series` - Series letter.
///
pub fn format_label(fragment_length: usize, charge: usize, series: char) -> String {
    if charge == 1 {
        format!("{series}{fragment_length}")
    } else {
        format!("{series}{fragment_length}({charge}+)")
    }
}

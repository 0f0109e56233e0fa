//! Weapon list text conversions.
//!
//! The roster form edits weapons as a single comma-separated text input,
//! while the wire format carries them as an ordered sequence of names.

/// Splits a comma-separated weapon input into the wire sequence.
///
/// Each piece is trimmed; empty and whitespace-only pieces are discarded.
///
/// # Examples
///
/// ```
/// use charvault_domain::common::split_weapon_list;
///
/// assert_eq!(split_weapon_list("Axe, Shield"), vec!["Axe", "Shield"]);
/// assert_eq!(split_weapon_list(" , Sword ,, "), vec!["Sword"]);
/// assert!(split_weapon_list("").is_empty());
/// ```
pub fn split_weapon_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins a weapon sequence back into editable text.
///
/// Round-trips through [`split_weapon_list`] provided no weapon name
/// itself contains a comma.
///
/// # Examples
///
/// ```
/// use charvault_domain::common::join_weapon_list;
///
/// assert_eq!(join_weapon_list(&["Axe".into(), "Shield".into()]), "Axe, Shield");
/// ```
pub fn join_weapon_list(weapons: &[String]) -> String {
    weapons.join(", ")
}

//! Pluralization for diagnostic messages.

/// Format count with the matching noun form
///
/// # Examples
///
/// - `plural_count(1, "elf", "elves")` -> `"1 elf"`
/// - `plural_count(4, "elf", "elves")` -> `"4 elves"`
/// - `plural_count(0, "reindeer", "reindeer")` -> `"0 reindeer"`
#[inline]
pub fn plural_count(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

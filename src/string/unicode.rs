/// Returns the string for a sequence of UTF-16 code units.
/// Any unpaired surrogate becomes the replacement character.
pub fn string_from_code_units(code_units: &[u16]) -> String {
    String::from_utf16_lossy(code_units)
}

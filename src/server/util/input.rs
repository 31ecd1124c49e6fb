/// Treats an empty string the same as an absent value.
///
/// Required text fields count as missing when they are absent, `null`, or `""`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Returns `true` if `name` matches the GraphQL `Name` production:
/// `/[_A-Za-z][_0-9A-Za-z]*/`.
///
/// <https://spec.graphql.org/September2025/#Name>
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

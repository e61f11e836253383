/// Stable per-user seed: the sum of the identifier's UTF-16 code units.
///
/// Missing and empty identifiers both mean "no personalisation".
pub(crate) fn user_seed(user_id: Option<&str>) -> Option<u64> {
    user_id
        .filter(|id| !id.is_empty())
        .map(|id| id.encode_utf16().map(u64::from).sum())
}

/// Returns the segment between the first and second `@` of `email`, or
/// everything after the first `@` when there is only one.
///
/// `None` when the address has no `@` at all.
pub fn extract_domain(email: &str) -> Option<&str> {
    email.split('@').nth(1)
}

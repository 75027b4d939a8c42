/// Compute effective limit with precedence: local arg -> global flag -> fallback.
///
/// Zero is never returned; it falls through to the next source.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local
        .filter(|limit| *limit > 0)
        .or_else(|| global.filter(|limit| *limit > 0))
        .unwrap_or(fallback)
}

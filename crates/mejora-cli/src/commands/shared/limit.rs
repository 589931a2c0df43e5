/// Compute effective page size with precedence: local arg -> global flag -> config.
#[must_use]
pub fn effective_page_size(local: Option<u32>, global: Option<u32>, configured: usize) -> usize {
    local
        .or(global)
        .and_then(|size| usize::try_from(size).ok())
        .unwrap_or(configured)
}

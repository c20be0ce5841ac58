//! Numeric policy for pagination and search
//!
//! Out-of-range page limits are NOT errors: they are clamped silently.
//! Callers that want the boundary behavior can request it explicitly.

/// Smallest page a caller can receive
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest page a caller can receive
pub const MAX_PAGE_SIZE: usize = 100;

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Maximum snippet length in characters
pub const SNIPPET_MAX_LEN: usize = 200;

/// Characters of lead-in kept before the first matched keyword in a snippet
pub const SNIPPET_LEAD: usize = 50;

/// Default number of search results returned
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Default minimum relevance score (0..=100) for a search hit to be kept
pub const DEFAULT_MIN_RELEVANCE: u8 = 30;

/// Clamp a requested page limit to `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`
///
/// `None` yields [`DEFAULT_PAGE_SIZE`]. Zero and negative requests clamp to
/// the minimum; oversized requests clamp to the maximum.
pub fn clamp_limit(requested: Option<i64>) -> usize {
    match requested {
        None => DEFAULT_PAGE_SIZE,
        Some(n) if n < MIN_PAGE_SIZE as i64 => MIN_PAGE_SIZE,
        Some(n) if n > MAX_PAGE_SIZE as i64 => MAX_PAGE_SIZE,
        Some(n) => n as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_default() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_clamp_zero_to_min() {
        assert_eq!(clamp_limit(Some(0)), MIN_PAGE_SIZE);
    }

    #[test]
    fn test_clamp_negative_to_min() {
        assert_eq!(clamp_limit(Some(-5)), MIN_PAGE_SIZE);
    }

    #[test]
    fn test_clamp_oversized_to_max() {
        assert_eq!(clamp_limit(Some(1000)), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_clamp_in_range_untouched() {
        assert_eq!(clamp_limit(Some(1)), 1);
        assert_eq!(clamp_limit(Some(42)), 42);
        assert_eq!(clamp_limit(Some(100)), 100);
    }

    #[test]
    fn test_clamp_idempotent_at_boundaries() {
        // Clamping the clamped value changes nothing.
        let clamped = clamp_limit(Some(1000));
        assert_eq!(clamp_limit(Some(clamped as i64)), clamped);
        let clamped = clamp_limit(Some(0));
        assert_eq!(clamp_limit(Some(clamped as i64)), clamped);
    }
}

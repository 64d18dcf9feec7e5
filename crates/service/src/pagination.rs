//! Result-count cap for listing queries.
//!
//! There is no paging cursor: a listing returns at most [`MAX_PAGE_SIZE`] items.

/// Upper bound on items returned by a single listing.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Caller-requested item count, as received on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limit(pub i64);

impl Limit {
    /// Out-of-range requests (`<= 0` or above the cap) fall back to the cap.
    pub fn normalize(self) -> u64 {
        match u64::try_from(self.0) {
            Ok(n) if n > 0 && n <= MAX_PAGE_SIZE => n,
            _ => MAX_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Limit, MAX_PAGE_SIZE};

    #[test]
    fn normalize_keeps_in_range_values() {
        assert_eq!(Limit(30).normalize(), 30);
        assert_eq!(Limit(1).normalize(), 1);
        assert_eq!(Limit(100).normalize(), 100);
    }

    #[test]
    fn normalize_clamps_out_of_range_to_cap() {
        for requested in [0, -5, 101, 500, i64::MIN, i64::MAX] {
            assert_eq!(Limit(requested).normalize(), MAX_PAGE_SIZE, "limit {requested}");
        }
    }

    #[test]
    fn default_means_cap() {
        assert_eq!(Limit::default().normalize(), MAX_PAGE_SIZE);
    }
}

//! Service locator adapters.
//!
//! - [`StaticServiceLocator`] rotates through a fixed list of instances.
//! - [`EurekaServiceLocator`] asks a Eureka-compatible registry for the
//!   instances that are currently `UP`.
//!
//! Both pick instances round-robin per service name.

mod dto;
mod eureka;
mod static_locator;

use std::collections::HashMap;
use std::sync::Mutex;

pub use eureka::EurekaServiceLocator;
pub use static_locator::StaticServiceLocator;

/// Per-service rotating cursor.
#[derive(Debug, Default)]
struct RoundRobin {
    cursors: Mutex<HashMap<String, usize>>,
}

impl RoundRobin {
    /// Return the index to use next for `service` out of `len` candidates.
    fn next_index(&self, service: &str, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let mut cursors = self
            .cursors
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cursor = cursors.entry(service.to_owned()).or_insert(0);
        let index = *cursor % len;
        *cursor = cursor.wrapping_add(1);
        index
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn cursors_rotate_independently_per_service() {
        let rr = RoundRobin::default();

        let a: Vec<_> = (0..4).map(|_| rr.next_index("A", 3)).collect();
        let b: Vec<_> = (0..2).map(|_| rr.next_index("B", 2)).collect();

        assert_eq!(a, vec![0, 1, 2, 0]);
        assert_eq!(b, vec![0, 1]);
    }

    #[rstest]
    fn shrinking_candidate_list_stays_in_bounds() {
        let rr = RoundRobin::default();
        for _ in 0..5 {
            rr.next_index("A", 5);
        }
        assert!(rr.next_index("A", 2) < 2);
        assert_eq!(rr.next_index("A", 0), 0);
    }
}

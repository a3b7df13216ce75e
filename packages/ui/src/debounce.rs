use std::time::Duration;

use dioxus::prelude::*;

use crate::platform::sleep;

/// Ticket counter: only the most recently issued ticket is still current.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Debouncer {
    latest: u64,
}

impl Debouncer {
    pub fn issue(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Follows `source` after it has been quiet for `delay_ms`.
/// A zero delay follows immediately.
pub fn use_debounced(source: Signal<String>, delay_ms: u32) -> Signal<String> {
    let mut settled = use_signal(|| source.peek().clone());
    let mut debouncer = use_signal(Debouncer::default);

    use_effect(move || {
        let value = source();
        if delay_ms == 0 {
            settled.set(value);
            return;
        }
        let ticket = debouncer.write().issue();
        spawn(async move {
            sleep(Duration::from_millis(u64::from(delay_ms))).await;
            if debouncer.peek().is_current(ticket) && *settled.peek() != value {
                settled.set(value);
            }
        });
    });

    settled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.issue();
        let second = debouncer.issue();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }
}

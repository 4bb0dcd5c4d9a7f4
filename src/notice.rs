use crate::config::NOTICE_MS;
use gloo_timers::callback::Timeout;
use leptos::*;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NOTICE: AtomicU64 = AtomicU64::new(1);

/// A transient message. `seq` tells repeated identical messages apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    seq: u64,
    pub message: String,
}

impl Notice {
    fn new(message: String) -> Self {
        Self {
            seq: NEXT_NOTICE.fetch_add(1, Ordering::Relaxed),
            message,
        }
    }
}

/// Clears `current` only if it is still the notice the timer was armed for.
fn expire(current: &mut Option<Notice>, seq: u64) -> bool {
    if current.as_ref().is_some_and(|notice| notice.seq == seq) {
        *current = None;
        true
    } else {
        false
    }
}

/// Shows `message` for a few seconds. A later message is not cut short by an
/// earlier timer, even when both carry the same text.
pub fn flash(notice: RwSignal<Option<Notice>>, message: String) {
    let next = Notice::new(message);
    let seq = next.seq;
    notice.set(Some(next));
    Timeout::new(NOTICE_MS, move || {
        let _ = notice.try_update(|current| expire(current, seq));
    })
    .forget();
}

#[component]
pub fn ErrorNotice(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice
            .get()
            .map(|notice| view! { <p class="text-red-500 text-sm">{notice.message}</p> })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_own_notice() {
        let notice = Notice::new("Error".into());
        let seq = notice.seq;
        let mut current = Some(notice);
        assert!(expire(&mut current, seq));
        assert_eq!(current, None);
    }

    #[test]
    fn test_older_timer_keeps_repeated_message() {
        let first = Notice::new("Error al generar".into());
        let second = Notice::new("Error al generar".into());
        assert_ne!(first.seq, second.seq);

        let mut current = Some(second.clone());
        assert!(!expire(&mut current, first.seq));
        assert_eq!(current, Some(second));
    }

    #[test]
    fn test_expire_after_clear() {
        let notice = Notice::new("Error".into());
        let mut current = None;
        assert!(!expire(&mut current, notice.seq));
        assert_eq!(current, None);
    }
}

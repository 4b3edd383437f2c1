use std::future::Future;

use async_trait::async_trait;
use dioxus::prelude::*;
use thiserror::Error;

use crate::i18n::{text, Locale, UiKey};

pub const COPIED_RESET_MS: u32 = 1000;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard write failed")]
    WriteFailed,
}

#[async_trait(?Send)]
pub trait ClipboardPort {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

#[async_trait(?Send)]
impl ClipboardPort for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        write_system_clipboard(text).await
    }
}

#[cfg(target_arch = "wasm32")]
async fn write_system_clipboard(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| ClipboardError::WriteFailed)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
async fn write_system_clipboard(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unavailable)
}

/// Identifies the timer armed by one successful copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Transient "copied" flag. Each copy re-arms the reset; only the most recent
/// ticket may clear the flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn mark_copied(&mut self) -> CopyTicket {
        self.generation += 1;
        self.copied = true;
        CopyTicket(self.generation)
    }

    /// Returns true when this ticket was current and the flag was cleared.
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if ticket.0 != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }
}

/// Writes `text`, logging and swallowing failures.
pub async fn write_quietly<C: ClipboardPort>(clipboard: &C, text: &str) -> bool {
    match clipboard.write_text(text).await {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!("copy skipped: {err}");
            false
        }
    }
}

/// Shared holder of a [`CopyFeedback`].
pub trait FeedbackSlot {
    fn update<R>(&mut self, change: impl FnOnce(&mut CopyFeedback) -> R) -> R;
}

impl FeedbackSlot for Signal<CopyFeedback> {
    fn update<R>(&mut self, change: impl FnOnce(&mut CopyFeedback) -> R) -> R {
        change(&mut self.write())
    }
}

/// Copies `text`, raises the flag and lowers it again after
/// [`COPIED_RESET_MS`] unless a later copy took over.
pub async fn copy_with_feedback<C, F, S, Fut>(
    clipboard: &C,
    mut feedback: F,
    text: &str,
    sleep: S,
) -> bool
where
    C: ClipboardPort,
    F: FeedbackSlot,
    S: FnOnce(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    if !write_quietly(clipboard, text).await {
        return false;
    }
    let ticket = feedback.update(CopyFeedback::mark_copied);
    sleep(COPIED_RESET_MS).await;
    feedback.update(|state| state.expire(ticket));
    true
}

#[component]
pub fn CodeBlock(code: String, lang: Option<String>, locale: Locale) -> Element {
    let feedback = use_signal(CopyFeedback::default);
    let copied = feedback.read().copied();
    let label = if copied {
        text(locale, UiKey::Copied)
    } else {
        text(locale, UiKey::Copy)
    };
    let code_for_copy = code.clone();

    rsx! {
        div { class: "code-block",
            div { class: "code-actions",
                if let Some(lang) = lang {
                    span { class: "code-lang", "{lang}" }
                }
                button {
                    r#type: "button",
                    class: "code-copy",
                    onclick: move |_| {
                        let code = code_for_copy.clone();
                        spawn(async move {
                            copy_with_feedback(&SystemClipboard, feedback, &code, |ms| {
                                gloo_timers::future::TimeoutFuture::new(ms)
                            })
                            .await;
                        });
                    },
                    span { class: "code-copy-icon", if copied { "✓" } else { "⧉" } }
                    "{label}"
                }
            }
            div { class: "code-scroll",
                pre { class: "code-pre", "{code}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: RefCell<Vec<String>>,
        deny: bool,
    }

    #[async_trait(?Send)]
    impl ClipboardPort for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.deny {
                return Err(ClipboardError::WriteFailed);
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    type SharedFeedback = Rc<RefCell<CopyFeedback>>;

    impl FeedbackSlot for SharedFeedback {
        fn update<R>(&mut self, change: impl FnOnce(&mut CopyFeedback) -> R) -> R {
            change(&mut self.borrow_mut())
        }
    }

    async fn sleep_ms(ms: u32) {
        tokio::time::sleep(Duration::from_millis(u64::from(ms))).await;
    }

    #[tokio::test(start_paused = true)]
    async fn second_copy_rearms_the_reset() {
        let clipboard = RecordingClipboard::default();
        let feedback = SharedFeedback::default();
        let start = tokio::time::Instant::now();

        let first = copy_with_feedback(&clipboard, Rc::clone(&feedback), "one", sleep_ms);
        let second = async {
            sleep_ms(500).await;
            copy_with_feedback(&clipboard, Rc::clone(&feedback), "two", sleep_ms).await
        };
        // Samples every 50 ms, offset so no sample lands on a timer deadline.
        let observer = async {
            let mut samples = Vec::new();
            for step in 0..40u64 {
                tokio::time::sleep_until(start + Duration::from_millis(25 + step * 50)).await;
                samples.push((25 + step * 50, feedback.borrow().copied()));
            }
            samples
        };
        let (first_ok, second_ok, samples) = tokio::join!(first, second, observer);
        assert!(first_ok && second_ok);

        let at = |ms: u64| {
            samples
                .iter()
                .find(|(time, _)| *time == ms)
                .map(|(_, copied)| *copied)
                .unwrap()
        };
        assert!(at(1025), "first timer must not clear the flag");
        assert!(at(1475));
        assert!(!at(1525));

        let mut observed = vec![false];
        for (_, copied) in &samples {
            if observed.last() != Some(copied) {
                observed.push(*copied);
            }
        }
        assert_eq!(observed, vec![false, true, false]);
        assert_eq!(*clipboard.writes.borrow(), vec!["one", "two"]);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_write_keeps_flag_down() {
        let clipboard = RecordingClipboard {
            deny: true,
            ..Default::default()
        };
        let feedback = SharedFeedback::default();
        assert!(!copy_with_feedback(&clipboard, Rc::clone(&feedback), "text", sleep_ms).await);
        assert!(!feedback.borrow().copied());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn system_clipboard_is_unavailable_off_the_web() {
        assert!(!write_quietly(&SystemClipboard, "text").await);
    }

    #[test]
    fn expiring_twice_is_a_no_op() {
        let mut feedback = CopyFeedback::default();
        let ticket = feedback.mark_copied();
        assert!(feedback.expire(ticket));
        assert!(!feedback.expire(ticket));
        assert!(!feedback.copied());
    }

    #[test]
    fn stale_ticket_cannot_clear_a_newer_copy() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.mark_copied();
        let second = feedback.mark_copied();
        assert!(!feedback.expire(first));
        assert!(feedback.copied());
        assert!(feedback.expire(second));
    }
}

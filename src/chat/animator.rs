use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::common::{Role, timestamp};

use super::renderer::Renderer;

pub const DEFAULT_TYPING_DELAY_MS: u64 = 110;
pub const MIN_TYPING_DELAY_MS: u64 = 100;
pub const MAX_TYPING_DELAY_MS: u64 = 250;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("typing animation cancelled")]
pub struct Cancelled;

/// A fully revealed bot reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typed {
    pub text: String,
    /// Fixed when the animation started, not when it finished.
    pub ts: String,
}

/// Per-token delay, kept inside 100..=250 ms.
pub fn typing_delay(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_TYPING_DELAY_MS, MAX_TYPING_DELAY_MS))
}

/// Reveal `full_text` one space-separated word at a time.
///
/// Splitting is on single spaces with no normalization, so repeated spaces
/// produce empty tokens and the final text equals the input exactly.
pub async fn animate<R: Renderer + ?Sized>(
    full_text: &str,
    renderer: &mut R,
    delay: Duration,
    cancel: &CancellationToken,
) -> Result<Typed, Cancelled> {
    let ts = timestamp();
    let handle = renderer.render_static("", Role::Bot, &ts);
    let mut visible = String::with_capacity(full_text.len());

    for (index, word) in full_text.split(' ').enumerate() {
        if index > 0 {
            // Pause only between words; the last word is final.
            tokio::select! {
                _ = cancel.cancelled() => return Err(Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
            visible.push(' ');
        } else if cancel.is_cancelled() {
            return Err(Cancelled);
        }
        visible.push_str(word);
        renderer.update(handle, &visible);
    }

    Ok(Typed { text: visible, ts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::renderer::testing::RecordingRenderer;

    #[tokio::test(start_paused = true)]
    async fn reveals_one_word_per_step() {
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();

        let typed = animate("a b c", &mut renderer, typing_delay(110), &cancel)
            .await
            .unwrap();

        assert_eq!(renderer.frames, ["a", "a b", "a b c"]);
        assert_eq!(typed.text, "a b c");
        assert_eq!(renderer.shown.len(), 1);
        assert_eq!(renderer.shown[0].role, Role::Bot);
        assert_eq!(renderer.shown[0].ts, typed.ts);
    }

    #[tokio::test(start_paused = true)]
    async fn latency_scales_with_token_count() {
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();
        let start = tokio::time::Instant::now();

        animate("one two three four", &mut renderer, typing_delay(110), &cancel)
            .await
            .unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(330));
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_spaces_are_not_normalized() {
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();

        let typed = animate("hi  there!", &mut renderer, typing_delay(110), &cancel)
            .await
            .unwrap();

        assert_eq!(renderer.frames, ["hi", "hi ", "hi  there!"]);
        assert_eq!(typed.text, "hi  there!");
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_stops_before_the_next_word() {
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(150)).await;
            trigger.cancel();
        });

        let result = animate("a b c d", &mut renderer, typing_delay(110), &cancel).await;

        assert_eq!(result, Err(Cancelled));
        assert_eq!(renderer.frames, ["a", "a b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn no_pause_after_the_final_word() {
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();
        let start = tokio::time::Instant::now();

        animate("done", &mut renderer, typing_delay(110), &cancel)
            .await
            .unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(renderer.frames, ["done"]);
    }

    #[test]
    fn delay_is_clamped() {
        assert_eq!(typing_delay(0), Duration::from_millis(100));
        assert_eq!(typing_delay(180), Duration::from_millis(180));
        assert_eq!(typing_delay(5_000), Duration::from_millis(250));
    }
}

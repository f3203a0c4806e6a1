// src/pipeline/input.rs
// =============================================================================
// The input stage: a stream of field values, one per input event.
//
// debounce() collapses bursts. A value is only let through once the field
// has been quiet for the whole window; every newer value restarts the
// wait. When the input ends, a value still waiting is let through at once.
//
// Example (window = 500ms):
//   t=0   "r"
//   t=100 "ru"
//   t=200 "rust"          -> emitted at t=700 as "rust"
//   t=1000 "rust lang"    -> emitted at t=1500
//
// Rust concepts:
// - Streams: The async version of iterators (futures::Stream)
// - stream::unfold: Builds a stream from a state and an async step function
// - tokio::time::timeout: Races a future against a timer
// =============================================================================

use futures::stream::{self, Stream, StreamExt};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

// Debounces a stream of values
//
// The state is the input itself, or None once the input has ended and the
// last value has been flushed.
pub fn debounce<S>(input: S, window: Duration) -> impl Stream<Item = String>
where
    S: Stream<Item = String>,
{
    stream::unfold(Some(Box::pin(input)), move |state| async move {
        let Some(mut input) = state else {
            return None;
        };

        // Wait (without a deadline) for the first value of a burst
        let Some(mut latest) = input.next().await else {
            return None;
        };

        loop {
            match time::timeout(window, input.next()).await {
                // A newer value arrived within the window: restart the wait
                Ok(Some(value)) => latest = value,
                // Input ended mid-burst: flush and stop
                Ok(None) => return Some((latest, None)),
                // Quiet for the whole window
                Err(_) => return Some((latest, Some(input))),
            }
        }
    })
}

// Reads input events from stdin, one line per event
//
// Each line stands for the full value of the search field after an edit.
pub fn stdin_events() -> impl Stream<Item = String> {
    let lines = BufReader::new(tokio::io::stdin()).lines();

    stream::unfold(lines, |mut lines| async move {
        match lines.next_line().await {
            Ok(Some(line)) => Some((line, lines)),
            Ok(None) => None,
            Err(e) => {
                log::error!("[INPUT] Failed to read from stdin: {}", e);
                None
            }
        }
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Box::pin(input)?
//    - StreamExt::next() needs the stream to be Unpin
//    - Pinning it on the heap makes any stream usable here
//
// 2. Why do both let-else branches return None?
//    - The closure returns Option<(item, next_state)>
//    - None ends the stream: either the last value was already flushed,
//      or the input ran out between bursts
//
// 3. Why does timeout() restart on every value?
//    - Each loop iteration creates a new timeout future
//    - So the window is measured from the most recent value, not the first
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    // Emits each value after sleeping for the given number of milliseconds
    fn typed(events: Vec<(u64, &'static str)>) -> impl Stream<Item = String> {
        stream::iter(events).then(|(after_ms, value)| async move {
            time::sleep(Duration::from_millis(after_ms)).await;
            value.to_string()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let input = typed(vec![(0, "r"), (100, "ru"), (100, "rus"), (100, "rust")]);
        let out: Vec<String> = debounce(input, DEFAULT_DEBOUNCE).collect().await;
        assert_eq!(out, vec!["rust"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_separate_bursts() {
        let input = typed(vec![
            (0, "r"),
            (100, "rust"),
            (600, "rust l"),
            (100, "rust lang"),
        ]);
        let out: Vec<String> = debounce(input, DEFAULT_DEBOUNCE).collect().await;
        assert_eq!(out, vec!["rust", "rust lang"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_value_waits_for_quiet_window() {
        let start = Instant::now();
        let mut seen = Vec::new();

        // A long pause after the value keeps the input open
        let input = typed(vec![(0, "tokio"), (2000, "tokio rt")]);
        let debounced = debounce(input, DEFAULT_DEBOUNCE);
        futures::pin_mut!(debounced);

        while let Some(value) = debounced.next().await {
            seen.push((value, start.elapsed()));
        }

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "tokio");
        assert!(seen[0].1 >= Duration::from_millis(500));
        assert!(seen[0].1 < Duration::from_millis(600));
        // Input ends right after the second value, so it is flushed at once
        assert_eq!(seen[1].0, "tokio rt");
        assert!(seen[1].1 >= Duration::from_millis(2000));
        assert!(seen[1].1 < Duration::from_millis(2100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_emits_nothing() {
        let out: Vec<String> = debounce(stream::empty::<String>(), DEFAULT_DEBOUNCE).collect().await;
        assert!(out.is_empty());
    }
}

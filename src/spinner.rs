//! A terminal spinner shown while a one-shot search is in flight.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

/// Frame to draw on the given tick.
fn frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}

/// Drive `work` to completion while animating `message` on stderr.
///
/// The spinner line is cleared before returning so stdout output that
/// follows starts on a clean line.
pub async fn spin_while<F: Future>(message: &str, work: F) -> F::Output {
    let mut ticker = tokio::time::interval(INTERVAL);
    tokio::pin!(work);

    let mut tick = 0;
    let output = loop {
        tokio::select! {
            output = &mut work => break output,
            _ = ticker.tick() => {
                // \x1b[2K clears the line, \r returns to its start
                eprint!("\x1b[2K\r{} {message}", frame(tick));
                let _ = std::io::stderr().flush();
                tick += 1;
            }
        }
    };

    eprint!("\x1b[2K\r");
    let _ = std::io::stderr().flush();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_single_braille_chars() {
        for frame in FRAMES {
            assert_eq!(frame.chars().count(), 1);
        }
    }

    #[test]
    fn frame_wraps_around() {
        assert_eq!(frame(0), frame(FRAMES.len()));
        assert_eq!(frame(3), FRAMES[3]);
    }

    #[tokio::test]
    async fn returns_work_output() {
        let value = spin_while("Finding Recipes...", async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            42
        })
        .await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn immediate_work_finishes() {
        let value = spin_while("quick", async { "done" }).await;
        assert_eq!(value, "done");
    }
}

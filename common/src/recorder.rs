//! Simulated voice-note recorder. No audio is captured; the widget drives
//! this state machine from a one-second tick.

use std::time::Duration;

use tracing::info;

use crate::community::Sentiment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecorderPhase {
    #[default]
    Idle,
    Recording,
    Recorded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Recorder {
    phase: RecorderPhase,
    elapsed: u32,
    playing: bool,
}

impl Recorder {
    pub fn phase(&self) -> RecorderPhase {
        self.phase
    }

    /// Whole seconds recorded so far.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn is_recording(&self) -> bool {
        self.phase == RecorderPhase::Recording
    }

    pub fn has_recording(&self) -> bool {
        self.phase == RecorderPhase::Recorded
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Begin a fresh recording, discarding any previous one.
    pub fn start(&mut self) {
        *self = Recorder { phase: RecorderPhase::Recording, elapsed: 0, playing: false };
    }

    /// One timer tick. Ignored unless recording.
    pub fn tick(&mut self) {
        if self.is_recording() {
            self.elapsed += 1;
        }
    }

    /// Freeze the timer at the current whole-second count.
    pub fn stop(&mut self) {
        if self.is_recording() {
            self.phase = RecorderPhase::Recorded;
        }
    }

    /// Start simulated playback. Returns how long it lasts, or `None` if
    /// there is nothing to play or playback is already running.
    pub fn play(&mut self) -> Option<Duration> {
        if !self.has_recording() || self.playing {
            return None;
        }
        self.playing = true;
        Some(Duration::from_secs(u64::from(self.elapsed)))
    }

    pub fn playback_finished(&mut self) {
        self.playing = false;
    }

    pub fn delete(&mut self) {
        *self = Recorder::default();
    }

    /// Simulated submission of the recorded note. Returns `false` if there
    /// was nothing recorded.
    pub fn submit(&mut self) -> bool {
        if !self.has_recording() {
            return false;
        }
        info!(seconds = self.elapsed, "voice note submitted");
        *self = Recorder::default();
        true
    }

    pub fn status_text(&self) -> &'static str {
        match self.phase {
            RecorderPhase::Recording => "Recording in progress...",
            RecorderPhase::Recorded => "Ready to submit",
            RecorderPhase::Idle => "Tap to start recording",
        }
    }

    pub fn display_time(&self) -> String {
        format_time(self.elapsed)
    }
}

/// `MM:SS`, minutes zero-padded and unbounded.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Heights in pixels of the eight animated waveform bars.
pub fn waveform_heights() -> [u32; 8] {
    let mut bars = [0; 8];
    for (i, h) in bars.iter_mut().enumerate() {
        *h = 8 + (i as u32 * 11 + 5) % 24;
    }
    bars
}

/// Entry in the static "recent voice notes" list under the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentNote {
    pub id: u32,
    pub duration: &'static str,
    pub status: &'static str,
    pub sentiment: Sentiment,
}

pub const RECENT_NOTES: [RecentNote; 3] = [
    RecentNote { id: 1, duration: "2:34", status: "Analyzed", sentiment: Sentiment::Positive },
    RecentNote { id: 2, duration: "1:45", status: "Processing", sentiment: Sentiment::Neutral },
    RecentNote { id: 3, duration: "3:12", status: "Analyzed", sentiment: Sentiment::Negative },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(seconds: u32) -> Recorder {
        let mut r = Recorder::default();
        r.start();
        for _ in 0..seconds {
            r.tick();
        }
        r.stop();
        r
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let mut r = recorded(7);
        assert!(r.has_recording());
        assert_eq!(r.elapsed(), 7);
        r.tick();
        r.tick();
        assert_eq!(r.elapsed(), 7);
        assert_eq!(r.display_time(), "00:07");
        assert_eq!(r.status_text(), "Ready to submit");
    }

    #[test]
    fn test_tick_ignored_when_idle() {
        let mut r = Recorder::default();
        r.tick();
        assert_eq!(r.elapsed(), 0);
        assert_eq!(r.status_text(), "Tap to start recording");
    }

    #[test]
    fn test_playback_lasts_elapsed_seconds() {
        let mut r = recorded(4);
        assert_eq!(r.play(), Some(Duration::from_secs(4)));
        assert!(r.is_playing());
        assert_eq!(r.play(), None);
        r.playback_finished();
        assert!(!r.is_playing());
        assert_eq!(Recorder::default().play(), None);
    }

    #[test]
    fn test_delete_and_submit_reset() {
        let mut r = recorded(3);
        r.delete();
        assert_eq!(r, Recorder::default());

        let mut r = recorded(3);
        assert!(r.submit());
        assert_eq!(r.phase(), RecorderPhase::Idle);
        assert_eq!(r.elapsed(), 0);
        assert!(!r.submit());
    }

    #[test]
    fn test_restart_discards_previous() {
        let mut r = recorded(9);
        r.start();
        assert!(r.is_recording());
        assert_eq!(r.elapsed(), 0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_waveform_heights_in_range() {
        assert!(waveform_heights().iter().all(|h| (8..32).contains(h)));
    }
}

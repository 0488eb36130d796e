use std::{
    num::NonZeroU32,
    thread::sleep,
    time::{Duration, Instant},
};

use log::debug;

const MEASUREMENT_WINDOW: Duration = Duration::from_secs(1);

/// sleeps between frames so the game runs at a fixed logical rate, whatever the speed of the
/// machine.
///
/// frames are scheduled on a fixed grid of deadlines. when a frame overruns its deadline the grid
/// is re-anchored at the current time rather than rushing through the missed frames.
pub struct FramePacer {
    frame_duration: Duration,
    next_deadline: Instant,
    window_start: Instant,
    frames_in_window: u32,
    measured_fps: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pace {
    /// how long to sleep before starting the next frame.
    pub delay: Duration,
    /// set when a full second has passed, holding the number of frames completed in it.
    pub measured_fps: Option<u32>,
}

impl FramePacer {
    pub fn new(fps: NonZeroU32, now: Instant) -> Self {
        Self {
            frame_duration: MEASUREMENT_WINDOW / fps.get(),
            next_deadline: now,
            window_start: now,
            frames_in_window: 0,
            measured_fps: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// the frame rate measured over the last complete second, if one has passed yet.
    pub fn measured_fps(&self) -> Option<u32> {
        self.measured_fps
    }

    /// blocks until the next frame is due. returns a fresh frame rate measurement once per second.
    pub fn wait(&mut self) -> Option<u32> {
        let pace = self.frame_finished(Instant::now());
        if !pace.delay.is_zero() {
            sleep(pace.delay);
        }
        pace.measured_fps
    }

    /// records that a frame finished at `now` and works out how long to wait for the next one.
    pub fn frame_finished(&mut self, now: Instant) -> Pace {
        self.frames_in_window += 1;
        let mut measured_fps = None;
        if now.saturating_duration_since(self.window_start) >= MEASUREMENT_WINDOW {
            debug!("{} frames in the last second", self.frames_in_window);
            measured_fps = Some(self.frames_in_window);
            self.measured_fps = measured_fps;
            self.frames_in_window = 0;
            self.window_start = now;
        }
        self.next_deadline += self.frame_duration;
        let delay = if self.next_deadline > now {
            self.next_deadline - now
        } else {
            self.next_deadline = now;
            Duration::ZERO
        };
        Pace {
            delay,
            measured_fps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacer(fps: u32, now: Instant) -> FramePacer {
        FramePacer::new(NonZeroU32::new(fps).unwrap(), now)
    }

    #[test]
    fn frame_duration_follows_target_rate() {
        let now = Instant::now();
        assert_eq!(pacer(250, now).frame_duration(), Duration::from_millis(4));
        assert_eq!(pacer(1, now).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn sleeps_until_next_deadline() {
        let start = Instant::now();
        let mut pacer = pacer(100, start);
        let pace = pacer.frame_finished(start + Duration::from_millis(3));
        assert_eq!(pace.delay, Duration::from_millis(7));
        let pace = pacer.frame_finished(start + Duration::from_millis(11));
        assert_eq!(pace.delay, Duration::from_millis(9));
    }

    #[test]
    fn re_anchors_after_overrun() {
        let start = Instant::now();
        let mut pacer = pacer(100, start);
        let pace = pacer.frame_finished(start + Duration::from_millis(35));
        assert_eq!(pace.delay, Duration::ZERO);
        // the missed frames are not made up for.
        let pace = pacer.frame_finished(start + Duration::from_millis(36));
        assert_eq!(pace.delay, Duration::from_millis(9));
    }

    #[test]
    fn measures_frames_per_second() {
        let start = Instant::now();
        let mut pacer = pacer(10, start);
        assert_eq!(pacer.measured_fps(), None);
        for frame in 1..10 {
            let pace = pacer.frame_finished(start + Duration::from_millis(100 * frame));
            assert_eq!(pace.measured_fps, None);
        }
        let pace = pacer.frame_finished(start + Duration::from_secs(1));
        assert_eq!(pace.measured_fps, Some(10));
        assert_eq!(pacer.measured_fps(), Some(10));
        let pace = pacer.frame_finished(start + Duration::from_millis(1500));
        assert_eq!(pace.measured_fps, None);
        let pace = pacer.frame_finished(start + Duration::from_secs(2));
        assert_eq!(pace.measured_fps, Some(2));
    }

    #[test]
    fn waits_roughly_one_frame() {
        let mut pacer = pacer(200, Instant::now());
        let before = Instant::now();
        pacer.wait();
        pacer.wait();
        assert!(before.elapsed() >= Duration::from_millis(5));
    }
}

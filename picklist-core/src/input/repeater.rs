//! Typematic input repeater
//!
//! Turns "is this direction held on this frame" into discrete steps. A tap
//! gives one step; a held direction steps once, stays quiet through a dead
//! zone, then repeats slowly and finally fast. Timing is purely frame
//! counted, there is no timer.

use super::pad::{Buttons, Direction};
use crate::config::RepeatConfig;

/// Advance one direction's counter and report whether it steps this frame
///
/// Uses the default schedule. Releasing the button resets the counter.
pub fn poll_direction(held: bool, counter: &mut u32) -> bool {
    poll_direction_with(&RepeatConfig::default(), held, counter)
}

/// [`poll_direction`] with an explicit schedule
pub fn poll_direction_with(config: &RepeatConfig, held: bool, counter: &mut u32) -> bool {
    if !held {
        *counter = 0;
        return false;
    }

    let held_frames = *counter;
    // Saturates after about two years of continuous hold at 60 Hz
    *counter = counter.saturating_add(1);

    config.fires_at(held_frames)
}

/// Directions that stepped on one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(Buttons);

impl Steps {
    pub const NONE: Steps = Steps(Buttons::NONE);

    /// Steps for the given directions (non-direction bits are dropped)
    pub fn from_buttons(buttons: Buttons) -> Self {
        Steps(buttons & Buttons::DIRECTIONS)
    }

    pub fn contains(self, dir: Direction) -> bool {
        self.0.contains(dir.button())
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    pub fn buttons(self) -> Buttons {
        self.0
    }

    /// Directions that stepped, in application order
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

/// Per-session repeat state for all four directions
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Repeater {
    counters: [u32; 4],
    config: RepeatConfig,
}

impl Repeater {
    /// Create a repeater with all counters at zero
    pub fn new(config: RepeatConfig) -> Self {
        Self {
            counters: [0; 4],
            config,
        }
    }

    /// Advance all counters from this frame's held mask
    ///
    /// Directions are independent: opposite directions held together both
    /// count and can both step.
    pub fn poll(&mut self, held: Buttons) -> Steps {
        let mut fired = Buttons::NONE;

        for dir in Direction::ALL {
            let counter = &mut self.counters[dir.index()];
            if poll_direction_with(&self.config, held.contains(dir.button()), counter) {
                fired |= dir.button();
            }
        }

        Steps(fired)
    }

    /// Consecutive held frames recorded for a direction
    pub fn counter(&self, dir: Direction) -> u32 {
        self.counters[dir.index()]
    }

    /// Forget all held state
    pub fn reset(&mut self) {
        self.counters = [0; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frames at which a direction held from frame 0 steps, up to `frames`
    fn held_schedule(frames: u32) -> Vec<u32> {
        let mut counter = 0;
        (0..frames)
            .filter(|_| poll_direction(true, &mut counter))
            .collect()
    }

    #[test]
    fn test_held_schedule_first_70_frames() {
        let expected: Vec<u32> = vec![0, 34, 38, 42, 46, 50, 54, 58, 62, 64, 66, 68];
        assert_eq!(held_schedule(70), expected);
    }

    #[test]
    fn test_fast_phase_every_other_frame() {
        let schedule = held_schedule(200);
        let fast: Vec<u32> = schedule.into_iter().filter(|f| *f >= 62).collect();
        for pair in fast.windows(2) {
            assert_eq!(pair[1] - pair[0], 2);
        }
        assert_eq!(fast.last(), Some(&198));
    }

    #[test]
    fn test_tap_is_one_step() {
        let mut counter = 0;
        assert!(poll_direction(true, &mut counter));
        assert!(!poll_direction(false, &mut counter));
        assert_eq!(counter, 0);
    }

    #[test]
    fn test_release_resets_counter() {
        let mut counter = 0;
        for _ in 0..40 {
            poll_direction(true, &mut counter);
        }
        assert_eq!(counter, 40);

        assert!(!poll_direction(false, &mut counter));
        assert_eq!(counter, 0);

        // Fresh press fires on its own frame 0
        assert!(poll_direction(true, &mut counter));
        assert_eq!(counter, 1);
        assert!(!poll_direction(true, &mut counter));
    }

    #[test]
    fn test_release_mid_repeat_restarts_dead_zone() {
        let mut counter = 0;
        for _ in 0..100 {
            poll_direction(true, &mut counter);
        }
        poll_direction(false, &mut counter);

        let mut fired = Vec::new();
        for frame in 0..34 {
            if poll_direction(true, &mut counter) {
                fired.push(frame);
            }
        }
        assert_eq!(fired, vec![0]);
    }

    #[test]
    fn test_counter_saturates() {
        let mut counter = u32::MAX;
        poll_direction(true, &mut counter);
        assert_eq!(counter, u32::MAX);
    }

    #[test]
    fn test_repeater_directions_independent() {
        let mut rep = Repeater::default();

        let steps = rep.poll(Buttons::UP);
        assert!(steps.contains(Direction::Up));
        assert!(!steps.contains(Direction::Down));

        // Down joins while up is still held: down fires, up is in its dead zone
        let steps = rep.poll(Buttons::UP | Buttons::DOWN);
        assert!(!steps.contains(Direction::Up));
        assert!(steps.contains(Direction::Down));

        assert_eq!(rep.counter(Direction::Up), 2);
        assert_eq!(rep.counter(Direction::Down), 1);
        assert_eq!(rep.counter(Direction::Left), 0);
    }

    #[test]
    fn test_repeater_opposite_directions_both_step() {
        // Up and down pressed on the same frame both step; no mutual exclusion
        let mut rep = Repeater::default();
        let steps = rep.poll(Buttons::UP | Buttons::DOWN);
        assert!(steps.contains(Direction::Up));
        assert!(steps.contains(Direction::Down));
        assert_eq!(rep.counter(Direction::Up), 1);
        assert_eq!(rep.counter(Direction::Down), 1);
    }

    #[test]
    fn test_repeater_ignores_action_buttons() {
        let mut rep = Repeater::default();
        let steps = rep.poll(Buttons::CONFIRM | Buttons::CANCEL);
        assert!(steps.is_empty());
    }

    #[test]
    fn test_repeater_release_one_keeps_other() {
        let mut rep = Repeater::default();
        for _ in 0..10 {
            rep.poll(Buttons::LEFT | Buttons::RIGHT);
        }
        rep.poll(Buttons::RIGHT);
        assert_eq!(rep.counter(Direction::Left), 0);
        assert_eq!(rep.counter(Direction::Right), 11);

        rep.reset();
        assert_eq!(rep.counter(Direction::Right), 0);
    }

    #[test]
    fn test_repeater_follows_its_config() {
        let mut r = Repeater::new(RepeatConfig {
            dead_zone: 2,
            fast_after: 100,
            slow_period: 1,
            fast_period: 1,
        });
        let fired: Vec<bool> = (0..5)
            .map(|_| !r.poll(Buttons::DOWN).is_empty())
            .collect();
        assert_eq!(fired, vec![true, false, false, true, true]);
    }

    #[test]
    fn test_steps_iter_order() {
        let steps = Steps::from_buttons(Buttons::RIGHT | Buttons::UP | Buttons::CONFIRM);
        let dirs: Vec<Direction> = steps.iter().collect();
        assert_eq!(dirs, vec![Direction::Up, Direction::Right]);
        assert!(!steps.buttons().intersects(Buttons::CONFIRM));
    }
}

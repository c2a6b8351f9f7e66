//! Rolling obstacle field
//!
//! A fixed array of pipes scrolls left. When a pipe's right edge leaves the
//! screen its slot is reused ahead of the leading pipe; nothing is allocated
//! or destroyed while playing.

use serde::{Deserialize, Serialize};

use super::fixed::Fixed;
use crate::platform::RandomSource;
use crate::tuning::Tuning;

/// Number of pipe slots
pub const OBSTACLE_COUNT: usize = 3;

/// A pipe pair with a gap between its upper and lower segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: Fixed,
    /// Height of the upper segment, i.e. the top of the gap
    pub gap_start: Fixed,
}

impl Obstacle {
    pub fn right_edge(&self, tuning: &Tuning) -> Fixed {
        self.x + tuning.obstacle_width
    }

    pub fn gap_end(&self, tuning: &Tuning) -> Fixed {
        self.gap_start + tuning.gap_size
    }

    /// Right edge has passed the left screen edge
    pub fn is_off_screen(&self, tuning: &Tuning) -> bool {
        self.right_edge(tuning) < Fixed::ZERO
    }
}

/// Scroll distance per tick; one extra scaled unit per point scored
pub fn scroll_speed(score: u32, tuning: &Tuning) -> Fixed {
    let bonus = i32::try_from(score).unwrap_or(i32::MAX);
    tuning.base_speed.saturating_add(Fixed::from_raw(bonus))
}

fn random_gap_start<R: RandomSource>(tuning: &Tuning, rng: &mut R) -> Fixed {
    let (lo, hi) = tuning.gap_start_range();
    Fixed::from_raw(rng.range(lo.raw(), hi.raw()))
}

fn random_jitter<R: RandomSource>(tuning: &Tuning, rng: &mut R) -> Fixed {
    let j = tuning.jitter.raw();
    Fixed::from_raw(rng.range(-j, j + 1))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleField {
    slots: [Obstacle; OBSTACLE_COUNT],
}

impl ObstacleField {
    /// Lay out a fresh field: the first pipe sits on the right screen edge,
    /// the rest follow at multiples of the spacing plus jitter.
    pub fn new<R: RandomSource>(tuning: &Tuning, rng: &mut R) -> Self {
        let slots = std::array::from_fn(|i| {
            let x = if i == 0 {
                tuning.screen_width
            } else {
                tuning.screen_width + tuning.spacing * i as i32 + random_jitter(tuning, rng)
            };
            Obstacle {
                x,
                gap_start: random_gap_start(tuning, rng),
            }
        });
        Self { slots }
    }

    pub fn from_slots(slots: [Obstacle; OBSTACLE_COUNT]) -> Self {
        Self { slots }
    }

    pub fn obstacles(&self) -> &[Obstacle; OBSTACLE_COUNT] {
        &self.slots
    }

    /// Rightmost left edge in the field
    pub fn leading_x(&self) -> Fixed {
        self.slots.iter().map(|o| o.x).max().unwrap_or(Fixed::ZERO)
    }

    /// Nearest pipe whose right edge is at or beyond `x`
    pub fn next_ahead(&self, x: Fixed, tuning: &Tuning) -> Option<&Obstacle> {
        self.slots
            .iter()
            .filter(|o| o.right_edge(tuning) >= x)
            .min_by_key(|o| o.x)
    }

    /// Scroll every pipe by the speed for `score`, then recycle the ones
    /// that left the screen. Returns how many were recycled.
    pub fn advance<R: RandomSource>(&mut self, score: u32, tuning: &Tuning, rng: &mut R) -> u32 {
        let speed = scroll_speed(score, tuning);
        for obstacle in &mut self.slots {
            obstacle.x = obstacle.x.saturating_sub(speed);
        }

        let mut recycled = 0;
        for slot in 0..OBSTACLE_COUNT {
            if self.slots[slot].is_off_screen(tuning) {
                self.recycle(slot, tuning, rng);
                recycled += 1;
            }
        }
        recycled
    }

    /// Move a slot ahead of the leading pipe with a fresh gap
    pub fn recycle<R: RandomSource>(&mut self, slot: usize, tuning: &Tuning, rng: &mut R) {
        let x = self.leading_x() + tuning.spacing + random_jitter(tuning, rng);
        let gap_start = random_gap_start(tuning, rng);
        self.slots[slot] = Obstacle { x, gap_start };
        log::debug!("Recycled pipe {} to x={} gap={}", slot, x, gap_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::random::{HighestRandom, LowestRandom};
    use crate::platform::seeded_rng;
    use proptest::prelude::*;

    fn field_with_first_at(x: Fixed) -> ObstacleField {
        ObstacleField::from_slots([
            Obstacle {
                x,
                gap_start: Fixed::from_pixels(10),
            },
            Obstacle {
                x: Fixed::from_pixels(30),
                gap_start: Fixed::from_pixels(10),
            },
            Obstacle {
                x: Fixed::from_pixels(80),
                gap_start: Fixed::from_pixels(10),
            },
        ])
    }

    #[test]
    fn test_initial_layout() {
        let tuning = Tuning::default();
        let field = ObstacleField::new(&tuning, &mut seeded_rng(3));
        let slots = field.obstacles();
        assert_eq!(slots[0].x, tuning.screen_width);
        let (lo, hi) = tuning.gap_start_range();
        for (i, o) in slots.iter().enumerate().skip(1) {
            let nominal = tuning.screen_width + tuning.spacing * i as i32;
            assert!(o.x >= nominal - tuning.jitter && o.x <= nominal + tuning.jitter);
        }
        for o in slots {
            assert!(o.gap_start >= lo && o.gap_start < hi);
        }
    }

    #[test]
    fn test_speed_grows_with_score() {
        let tuning = Tuning::default();
        assert_eq!(scroll_speed(0, &tuning), tuning.base_speed);
        assert_eq!(scroll_speed(7, &tuning), tuning.base_speed + Fixed::from_raw(7));
        assert_eq!(
            scroll_speed(u32::MAX, &tuning),
            Fixed::from_raw(i32::MAX)
        );
    }

    #[test]
    fn test_recycled_when_fully_off_screen() {
        let tuning = Tuning::default();
        let speed = scroll_speed(0, &tuning);
        // Lands at -(width + 1) after this tick's scroll
        let start = -(tuning.obstacle_width + Fixed::from_raw(1)) + speed;
        let mut field = field_with_first_at(start);

        let recycled = field.advance(0, &tuning, &mut LowestRandom);
        assert_eq!(recycled, 1);

        let slots = field.obstacles();
        let leading = Fixed::from_pixels(80) - speed;
        assert_eq!(slots[0].x, leading + tuning.spacing - tuning.jitter);
        assert_eq!(slots[0].gap_start, tuning.gap_margin);
    }

    #[test]
    fn test_not_recycled_while_partly_visible() {
        let tuning = Tuning::default();
        let speed = scroll_speed(0, &tuning);
        // Lands at -(width - 1): one scaled unit still on screen
        let start = -(tuning.obstacle_width - Fixed::from_raw(1)) + speed;
        let mut field = field_with_first_at(start);

        assert_eq!(field.advance(0, &tuning, &mut LowestRandom), 0);
        assert_eq!(field.obstacles()[0].x, start - speed);
    }

    #[test]
    fn test_jitter_reaches_both_ends() {
        let tuning = Tuning::default();
        let nominal = tuning.screen_width + tuning.spacing;
        let low = ObstacleField::new(&tuning, &mut LowestRandom);
        assert_eq!(low.obstacles()[1].x, nominal - tuning.jitter);
        let high = ObstacleField::new(&tuning, &mut HighestRandom);
        assert_eq!(high.obstacles()[1].x, nominal + tuning.jitter);
    }

    #[test]
    fn test_huge_score_scroll_saturates() {
        let tuning = Tuning::default();
        let mut field = field_with_first_at(Fixed::from_pixels(-5));
        assert_eq!(field.advance(u32::MAX, &tuning, &mut LowestRandom), 3);
        assert_eq!(field.advance(u32::MAX, &tuning, &mut LowestRandom), 3);
    }

    #[test]
    fn test_next_ahead() {
        let tuning = Tuning::default();
        let field = field_with_first_at(Fixed::from_pixels(-5));
        let ahead = field.next_ahead(tuning.actor_x, &tuning).unwrap();
        assert_eq!(ahead.x, Fixed::from_pixels(30));
        let ahead = field.next_ahead(Fixed::ZERO, &tuning).unwrap();
        assert_eq!(ahead.x, Fixed::from_pixels(-5));
    }

    proptest! {
        #[test]
        fn prop_recycling_keeps_order_and_spacing(seed: u64, ticks in 1usize..600) {
            let tuning = Tuning::default();
            let mut rng = seeded_rng(seed);
            let mut field = ObstacleField::new(&tuning, &mut rng);
            let (lo, hi) = tuning.gap_start_range();
            let mut score = 0u32;

            for _ in 0..ticks {
                let before = *field.obstacles();
                let recycled = field.advance(score, &tuning, &mut rng);
                let after = field.obstacles();

                let moved: Vec<bool> = (0..OBSTACLE_COUNT).map(|i| after[i].x > before[i].x).collect();
                prop_assert_eq!(moved.iter().filter(|&&m| m).count() as u32, recycled);

                for i in (0..OBSTACLE_COUNT).filter(|&i| moved[i]) {
                    for j in (0..OBSTACLE_COUNT).filter(|&j| j != i && (!moved[j] || j < i)) {
                        prop_assert!(after[i].x > after[j].x);
                    }
                }
                for i in 0..OBSTACLE_COUNT {
                    prop_assert!(after[i].gap_start >= lo && after[i].gap_start < hi);
                    for j in (i + 1)..OBSTACLE_COUNT {
                        prop_assert!((after[i].x - after[j].x).abs() >= tuning.obstacle_width);
                    }
                }

                let previous = score;
                score += recycled;
                prop_assert!(score >= previous);
            }
        }
    }
}

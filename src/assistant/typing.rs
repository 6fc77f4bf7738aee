// ABOUTME: Simulated typing delay applied by callers before showing an assistant reply
// ABOUTME: Fixed for the full-page assistant, uniformly random for the widget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::Rng;
use std::time::Duration;

/// Presentation delay before an assistant reply appears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingDelay {
    /// Always the same delay
    Fixed(Duration),
    /// Uniformly distributed in `[min, max)`
    Uniform {
        /// Lower bound
        min: Duration,
        /// Upper bound (exclusive)
        max: Duration,
    },
}

impl TypingDelay {
    /// Full-page assistant: 1.5 s
    pub const FULL_PAGE: Self = Self::Fixed(Duration::from_millis(1500));

    /// Floating widget: 1 to 3 s
    pub const WIDGET: Self = Self::Uniform {
        min: Duration::from_millis(1000),
        max: Duration::from_millis(3000),
    };

    /// Draw a concrete delay
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        match *self {
            Self::Fixed(delay) => delay,
            Self::Uniform { min, max } if max > min => rng.gen_range(min..max),
            Self::Uniform { min, .. } => min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fixed_delay_ignores_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                TypingDelay::FULL_PAGE.sample(&mut rng),
                Duration::from_millis(1500)
            );
        }
    }

    #[test]
    fn test_widget_delay_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let delay = TypingDelay::WIDGET.sample(&mut rng);
            assert!(delay >= Duration::from_millis(1000));
            assert!(delay < Duration::from_millis(3000));
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let delay = TypingDelay::Uniform {
            min: Duration::from_millis(5),
            max: Duration::from_millis(5),
        };
        assert_eq!(delay.sample(&mut rng), Duration::from_millis(5));
    }
}

/// Levels above this mark an accented hit
pub const ACCENT_LEVEL: u8 = 192;

/// Outcome of one part on one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decision {
    pub hit: bool,
    pub accent: bool,
}

/// Level a step has to exceed to trigger at the given density
#[inline]
pub fn hit_threshold(density: u8) -> u8 {
    255 - density
}

/// Turn an interpolated level into a hit and accent.
/// Raising `density` lowers the threshold, so hits are only ever added.
/// The accent threshold sits strictly above the hit threshold.
pub fn decide(level: u8, density: u8) -> Decision {
    let threshold = hit_threshold(density);
    let accent_threshold = threshold.saturating_add(1).max(ACCENT_LEVEL);
    Decision {
        hit: level > threshold,
        accent: level > accent_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_density_never_hits() {
        for level in 0..=255u8 {
            assert_eq!(decide(level, 0), Decision::default());
        }
    }

    #[test]
    fn test_full_density_hits_any_nonzero_level() {
        assert!(!decide(0, 255).hit);
        for level in 1..=255u8 {
            assert!(decide(level, 255).hit, "Level {} should hit at full density", level);
        }
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // density 55 -> threshold 200
        assert!(!decide(200, 55).hit);
        assert!(decide(201, 55).hit);
    }

    #[test]
    fn test_accents_only_on_loud_hits() {
        assert_eq!(decide(192, 255), Decision { hit: true, accent: false });
        assert_eq!(decide(193, 255), Decision { hit: true, accent: true });
        // Sparse densities push the accent band up past the hit threshold
        assert_eq!(decide(220, 30), Decision { hit: false, accent: false });
        assert_eq!(decide(226, 30), Decision { hit: true, accent: false });
        assert_eq!(decide(227, 30), Decision { hit: true, accent: true });
        assert_eq!(decide(255, 1), Decision { hit: true, accent: false });
    }

    #[test]
    fn test_quietest_hit_is_never_accented() {
        for density in 1..=255u8 {
            let level = hit_threshold(density) + 1;
            let decision = decide(level, density);
            assert!(decision.hit, "Level {} should hit at density {}", level, density);
            assert!(
                !decision.accent,
                "Level {} at density {} is both the first hit and an accent",
                level,
                density
            );
        }
    }

    #[test]
    fn test_accent_implies_hit() {
        for density in 0..=255u8 {
            for level in 0..=255u8 {
                let decision = decide(level, density);
                assert!(
                    !decision.accent || decision.hit,
                    "Accent without hit at level {} density {}",
                    level,
                    density
                );
            }
        }
    }

    #[test]
    fn test_density_is_monotonic() {
        for level in 0..=255u8 {
            let mut was_hit = false;
            for density in 0..=255u8 {
                let hit = decide(level, density).hit;
                assert!(
                    hit || !was_hit,
                    "Raising density to {} removed the hit at level {}",
                    density,
                    level
                );
                was_hit = hit;
            }
        }
    }
}

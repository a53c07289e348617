//! Blended base stats of a fusion

use crate::types::StatBlock;

/// Round to one decimal place, halves away from zero
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Stats of a fusion
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FusedStats {
    /// Per-stat mean of both sources, rounded to a tenth
    pub stats: StatBlock<f64>,

    /// Sum of the rounded stats, rounded to a tenth
    pub total: f64,
}

impl FusedStats {
    /// Stats as displayed, with flip mode applied when requested.
    ///
    /// The total is unaffected by flipping.
    pub fn display(&self, flip: bool) -> StatBlock<f64> {
        self.stats.display(flip)
    }

    /// Signed difference between the fused total and a source's total
    pub fn difference_from(&self, source_bst: u32) -> f64 {
        bst_difference(self.total, source_bst)
    }
}

/// Blend two stat blocks.
///
/// Commutative: swapping the sources gives the same numbers.
pub fn fuse_stats(first: &StatBlock<u32>, second: &StatBlock<u32>) -> FusedStats {
    let stats = StatBlock::from_fn(|stat| {
        round_tenth((f64::from(first.get(stat)) + f64::from(second.get(stat))) / 2.0)
    });

    FusedStats {
        total: round_tenth(stats.total()),
        stats,
    }
}

/// `fused_total - source_bst`, rounded to a tenth
pub fn bst_difference(fused_total: f64, source_bst: u32) -> f64 {
    round_tenth(fused_total - f64::from(source_bst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stat;

    fn uniform(value: u32) -> StatBlock<u32> {
        StatBlock::from_fn(|_| value)
    }

    fn charizard() -> StatBlock<u32> {
        StatBlock {
            hp: 78,
            attack: 84,
            defense: 78,
            sp_atk: 109,
            sp_def: 85,
            speed: 100,
        }
    }

    fn swampert() -> StatBlock<u32> {
        StatBlock {
            hp: 100,
            attack: 110,
            defense: 90,
            sp_atk: 85,
            sp_def: 90,
            speed: 60,
        }
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(75.0), 75.0);
        assert_eq!(round_tenth(97.25), 97.3);
        assert_eq!(round_tenth(-12.04), -12.0);
    }

    #[test]
    fn test_fuse_uniform_stats() {
        let fused = fuse_stats(&uniform(100), &uniform(50));
        for (_, value) in fused.stats.iter() {
            assert_eq!(value, 75.0);
        }
        assert_eq!(fused.total, 450.0);
        // Symmetric values look the same flipped
        assert_eq!(fused.display(true).hp, 75.0);
    }

    #[test]
    fn test_fuse_keeps_half_points() {
        let fused = fuse_stats(&charizard(), &swampert());
        assert_eq!(fused.stats.hp, 89.0);
        assert_eq!(fused.stats.attack, 97.0);
        assert_eq!(fused.stats.defense, 84.0);
        assert_eq!(fused.stats.sp_atk, 97.0);
        assert_eq!(fused.stats.sp_def, 87.5);
        assert_eq!(fused.stats.speed, 80.0);
        assert_eq!(fused.total, 534.5);
    }

    #[test]
    fn test_fuse_is_commutative() {
        let ab = fuse_stats(&charizard(), &swampert());
        let ba = fuse_stats(&swampert(), &charizard());
        for stat in Stat::ALL {
            assert_eq!(ab.stats.get(stat), ba.stats.get(stat));
        }
        assert_eq!(ab.total, ba.total);
    }

    #[test]
    fn test_flip_moves_asymmetric_stats() {
        let fused = fuse_stats(&charizard(), &swampert());
        let shown = fused.display(true);
        assert_eq!(shown.hp, 80.0);
        assert_eq!(shown.speed, 89.0);
        assert_eq!(shown.attack, 87.5);
        assert_eq!(shown.sp_def, 97.0);
        assert_eq!(shown.defense, 97.0);
        assert_eq!(shown.sp_atk, 84.0);
        assert_eq!(fused.display(false), fused.stats);
    }

    #[test]
    fn test_difference_from_sources() {
        let fused = fuse_stats(&charizard(), &swampert());
        // Charizard 534, Swampert 535
        assert_eq!(fused.difference_from(534), 0.5);
        assert_eq!(fused.difference_from(535), -0.5);
        assert_eq!(bst_difference(450.0, 600), -150.0);
    }
}

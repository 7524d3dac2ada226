//! Cost frontier over (usable capacity, total price).
//!
//! Candidates are every `drive_count × catalog entry` pair. They are bucketed
//! by exact total capacity and walked from the largest capacity down; a bucket
//! survives only if its cheapest member costs no more than the last accepted
//! entry. Within a surviving bucket the cheapest, then fewest-drive, then
//! first-generated candidate wins.

use crate::domain::model::{Combination, PriceCatalog, RaidLevel, RankedResult};
use crate::utils::error::{Result, SelectorError};

/// Upper bound on generated candidates per selection.
pub const MAX_CANDIDATES: u64 = 10_000_000;

/// All candidates in generation order: drive count ascending, then catalog
/// order (ascending unit capacity).
pub fn generate_candidates(
    catalog: &PriceCatalog,
    min_drive_count: u32,
    max_drive_count: u32,
    raid_level: RaidLevel,
) -> Result<Vec<Combination>> {
    if min_drive_count > max_drive_count {
        return Err(SelectorError::InvalidRange {
            min: min_drive_count,
            max: max_drive_count,
        });
    }

    if catalog.is_empty() {
        return Ok(Vec::new());
    }

    let drive_counts = u64::from(max_drive_count - min_drive_count) + 1;
    let too_many = || SelectorError::TooManyCandidates {
        drive_counts,
        catalog_size: catalog.len(),
        limit: MAX_CANDIDATES,
    };
    let total = drive_counts
        .checked_mul(catalog.len() as u64)
        .filter(|&total| total <= MAX_CANDIDATES)
        .ok_or_else(too_many)?;

    let mut candidates = Vec::new();
    candidates
        .try_reserve_exact(total as usize)
        .map_err(|_| too_many())?;
    for drive_count in min_drive_count..=max_drive_count {
        for (unit_capacity, unit_price) in catalog.iter() {
            candidates.push(Combination::new(
                drive_count,
                unit_capacity,
                unit_price,
                raid_level,
            ));
        }
    }
    Ok(candidates)
}

pub fn select(
    catalog: &PriceCatalog,
    min_drive_count: u32,
    max_drive_count: u32,
    raid_level: RaidLevel,
) -> Result<RankedResult> {
    let mut candidates =
        generate_candidates(catalog, min_drive_count, max_drive_count, raid_level)?;

    tracing::debug!(
        "Generated {} candidates for {} over {}..={} drives",
        candidates.len(),
        raid_level,
        min_drive_count,
        max_drive_count
    );

    // Stable sort keeps generation order inside each bucket.
    candidates.sort_by(|a, b| bucket_key(b).total_cmp(&bucket_key(a)));

    let mut ranked = RankedResult::default();
    let mut bucket_count = 0usize;

    for bucket in candidates.chunk_by(|a, b| bucket_key(a) == bucket_key(b)) {
        bucket_count += 1;

        let min_price = bucket
            .iter()
            .map(Combination::total_price)
            .fold(f64::INFINITY, f64::min);

        if let Some(last) = ranked.last() {
            if min_price > last.total_price() {
                tracing::debug!(
                    "Skipping capacity {}: cheapest {} costs more than {} at capacity {}",
                    bucket_key(&bucket[0]),
                    min_price,
                    last.total_price(),
                    last.total_capacity()
                );
                continue;
            }
        }

        // min_by_key returns the first of equal minima
        let chosen = bucket
            .iter()
            .filter(|combo| combo.total_price() == min_price)
            .min_by_key(|combo| combo.drive_count);

        if let Some(chosen) = chosen {
            ranked.push(*chosen);
        }
    }

    tracing::debug!(
        "Kept {} of {} capacity levels",
        ranked.len(),
        bucket_count
    );

    Ok(ranked)
}

/// Entry point for callers holding the RAID level as text.
pub fn rank_combinations(
    catalog: &PriceCatalog,
    min_drive_count: u32,
    max_drive_count: u32,
    raid_level: &str,
) -> Result<RankedResult> {
    let raid_level: RaidLevel = raid_level.parse()?;
    select(catalog, min_drive_count, max_drive_count, raid_level)
}

// Adding 0.0 folds -0.0 into 0.0 so both share a bucket.
fn bucket_key(combo: &Combination) -> f64 {
    combo.total_capacity() + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[(f64, f64)]) -> PriceCatalog {
        PriceCatalog::from_entries(entries.iter().copied()).unwrap()
    }

    fn summary(result: &RankedResult) -> Vec<(f64, f64)> {
        result
            .iter()
            .map(|c| (c.total_capacity(), c.total_price()))
            .collect()
    }

    #[test]
    fn test_monotone_catalog_keeps_every_level() {
        let prices = catalog(&[(1.0, 100.0), (2.0, 150.0)]);
        let result = select(&prices, 3, 4, RaidLevel::Raid5).unwrap();

        assert_eq!(
            summary(&result),
            vec![(6.0, 600.0), (4.0, 450.0), (3.0, 400.0), (2.0, 300.0)]
        );
        assert_eq!(result.as_slice()[0], Combination::new(4, 2.0, 150.0, RaidLevel::Raid5));
    }

    #[test]
    fn test_dominated_level_is_skipped() {
        let prices = catalog(&[(1.0, 500.0), (2.0, 150.0)]);
        let result = select(&prices, 3, 3, RaidLevel::Raid5).unwrap();

        assert_eq!(summary(&result), vec![(4.0, 450.0)]);
    }

    #[test]
    fn test_equal_price_smaller_capacity_is_kept() {
        let prices = catalog(&[(1.0, 100.0), (3.0, 100.0)]);
        let result = select(&prices, 1, 1, RaidLevel::Raid0).unwrap();

        assert_eq!(summary(&result), vec![(3.0, 100.0), (1.0, 100.0)]);
    }

    #[test]
    fn test_price_tie_prefers_fewer_drives() {
        let prices = catalog(&[(1.0, 100.0), (2.0, 200.0)]);
        let result = select(&prices, 2, 4, RaidLevel::Raid0).unwrap();

        assert_eq!(
            summary(&result),
            vec![(8.0, 800.0), (6.0, 600.0), (4.0, 400.0), (3.0, 300.0), (2.0, 200.0)]
        );
        let four = result
            .iter()
            .find(|c| c.total_capacity() == 4.0)
            .unwrap();
        assert_eq!(four.drive_count, 2);
        assert_eq!(four.unit_capacity, 2.0);
    }

    #[test]
    fn test_full_tie_picks_smallest_unit_capacity() {
        let prices = catalog(&[(4.0, 50.0), (1.0, 50.0)]);

        // a single drive leaves no usable RAID5 capacity for either entry
        let result = select(&prices, 1, 1, RaidLevel::Raid5).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.as_slice()[0].unit_capacity, 1.0);

        let result = select(&prices, 2, 2, RaidLevel::Raid6).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.as_slice()[0].unit_capacity, 1.0);
        assert_eq!(result.as_slice()[0].total_price(), 100.0);
    }

    #[test]
    fn test_oversized_range_is_rejected_before_allocating() {
        let prices = catalog(&[(1.0, 10.0), (2.0, 20.0), (4.0, 40.0)]);

        match select(&prices, 1, u32::MAX, RaidLevel::Raid5) {
            Err(SelectorError::TooManyCandidates {
                drive_counts,
                catalog_size,
                ..
            }) => {
                assert_eq!(drive_counts, u64::from(u32::MAX));
                assert_eq!(catalog_size, 3);
            }
            other => panic!("expected TooManyCandidates, got {:?}", other),
        }

        // an empty catalog never generates anything, whatever the range
        assert!(select(&PriceCatalog::default(), 1, u32::MAX, RaidLevel::Raid5)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_mirror_picks_smallest_array() {
        let prices = catalog(&[(2.0, 100.0)]);
        let result = select(&prices, 2, 4, RaidLevel::Raid1).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.as_slice()[0].drive_count, 2);
        assert_eq!(result.as_slice()[0].total_price(), 200.0);
    }

    #[test]
    fn test_unsupported_level_aborts() {
        let prices = catalog(&[(1.0, 100.0)]);
        match rank_combinations(&prices, 3, 4, "RAID9") {
            Err(SelectorError::UnsupportedRaidLevel { level }) => assert_eq!(level, "RAID9"),
            other => panic!("expected UnsupportedRaidLevel, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_range() {
        let prices = catalog(&[(1.0, 100.0)]);
        assert!(matches!(
            select(&prices, 5, 4, RaidLevel::Raid5),
            Err(SelectorError::InvalidRange { min: 5, max: 4 })
        ));
    }

    #[test]
    fn test_empty_catalog_gives_empty_result() {
        let prices = PriceCatalog::default();
        let result = rank_combinations(&prices, 3, 8, "RAID6").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_undersized_raid6_still_ranked() {
        let prices = catalog(&[(4.0, 50.0)]);
        let result = select(&prices, 1, 3, RaidLevel::Raid6).unwrap();

        // 3 drives → 4.0, 2 drives → 0.0, 1 drive → -4.0; each smaller array is cheaper
        assert_eq!(summary(&result), vec![(4.0, 150.0), (0.0, 100.0), (-4.0, 50.0)]);
    }

    /// Small deterministic generator so the frontier checks cover many shapes.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: u64) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (self.0 >> 33) % bound
        }
    }

    #[test]
    fn test_frontier_invariants_hold_for_generated_catalogs() {
        let mut rng = Lcg(42);

        for _ in 0..200 {
            let size = rng.next(6) as usize;
            let mut entries = Vec::new();
            for _ in 0..size {
                let capacity = (rng.next(16) + 1) as f64 / 2.0;
                if entries.iter().any(|&(c, _)| c == capacity) {
                    continue;
                }
                entries.push((capacity, (rng.next(400) + 20) as f64));
            }
            let prices = catalog(&entries);
            let level = RaidLevel::ALL[rng.next(6) as usize];
            let min = (rng.next(4) + 1) as u32;
            let max = min + rng.next(5) as u32;

            let result = select(&prices, min, max, level).unwrap();
            let candidates = generate_candidates(&prices, min, max, level).unwrap();

            for pair in result.as_slice().windows(2) {
                assert!(pair[0].total_capacity() > pair[1].total_capacity());
                assert!(pair[0].total_price() >= pair[1].total_price());
            }

            for candidate in &candidates {
                assert!(
                    result.iter().any(|r| r.total_capacity() >= candidate.total_capacity()
                        && r.total_price() <= candidate.total_price()),
                    "{:?} is not covered by the frontier",
                    candidate
                );
            }

            for chosen in &result {
                assert!(candidates.contains(chosen));
            }
        }
    }
}

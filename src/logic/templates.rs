//! Built-in default schedule templates per pool size.

use crate::models::{ScheduleTemplate, SeedPair, TemplateRound};
use std::ops::RangeInclusive;

/// Pool sizes the schedule generator supports. One canonical range for every
/// call site.
pub const SUPPORTED_POOL_SIZES: RangeInclusive<u32> = 4..=5;

fn round(n: u32, a: u32, b: u32, referee: u32) -> TemplateRound {
    TemplateRound {
        round: n,
        pairings: vec![SeedPair { a, b }],
        referees: Some(vec![referee]),
    }
}

/// Default template for a pool size, when one exists. Single court per pool:
/// one match per round, refereed by a sitting team.
pub fn default_template(pool_size: u32) -> Option<ScheduleTemplate> {
    let rounds = match pool_size {
        4 => vec![
            round(1, 1, 4, 2),
            round(2, 2, 3, 1),
            round(3, 1, 3, 4),
            round(4, 2, 4, 3),
            round(5, 1, 2, 4),
            round(6, 3, 4, 1),
        ],
        5 => vec![
            round(1, 1, 2, 3),
            round(2, 3, 4, 5),
            round(3, 1, 5, 2),
            round(4, 2, 3, 4),
            round(5, 4, 5, 1),
            round(6, 1, 3, 2),
            round(7, 2, 4, 5),
            round(8, 3, 5, 1),
            round(9, 1, 4, 2),
            round(10, 2, 5, 3),
        ],
        _ => return None,
    };
    Some(ScheduleTemplate::new(pool_size, rounds))
}

//! Schedule templates: admin-authored round plans expressed in seed numbers.

use serde::{Deserialize, Serialize};

/// One pairing within a template round, in pool-seed numbers (1-based).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeedPair {
    pub a: u32,
    pub b: u32,
}

/// One round of a schedule template: pairings plus an optional referee-seed
/// list aligned by pairing index.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TemplateRound {
    /// Round number, 1-based.
    pub round: u32,
    pub pairings: Vec<SeedPair>,
    /// Referee seed per pairing, same length as `pairings` when present.
    pub referees: Option<Vec<u32>>,
}

/// A schedule template for one pool size. Read-only at generation time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    pub pool_size: u32,
    pub rounds: Vec<TemplateRound>,
}

impl ScheduleTemplate {
    pub fn new(pool_size: u32, rounds: Vec<TemplateRound>) -> Self {
        Self { pool_size, rounds }
    }

    /// Validate the template shape against its pool size. Returns every
    /// problem found, not just the first: out-of-range seeds, referee lists
    /// not aligned with pairings, and referees playing in their own pairing.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        for r in &self.rounds {
            if r.pairings.is_empty() {
                errors.push(format!("round {} has no pairings", r.round));
            }
            if let Some(refs) = &r.referees {
                if refs.len() != r.pairings.len() {
                    errors.push(format!(
                        "round {}: {} referee(s) for {} pairing(s)",
                        r.round,
                        refs.len(),
                        r.pairings.len()
                    ));
                }
            }
            for (i, p) in r.pairings.iter().enumerate() {
                for seed in [p.a, p.b] {
                    if seed < 1 || seed > self.pool_size {
                        errors.push(format!(
                            "round {}: seed {} out of range 1..={}",
                            r.round, seed, self.pool_size
                        ));
                    }
                }
                if p.a == p.b {
                    errors.push(format!("round {}: seed {} paired with itself", r.round, p.a));
                }
                if let Some(referee) = r.referees.as_ref().and_then(|refs| refs.get(i)) {
                    if *referee == p.a || *referee == p.b {
                        errors.push(format!(
                            "round {}: referee seed {} plays in its own pairing",
                            r.round, referee
                        ));
                    }
                    if *referee < 1 || *referee > self.pool_size {
                        errors.push(format!(
                            "round {}: referee seed {} out of range 1..={}",
                            r.round, referee, self.pool_size
                        ));
                    }
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

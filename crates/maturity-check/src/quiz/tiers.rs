use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletKind {
    Strength,
    Risk,
    Opportunity,
}

impl BulletKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "Styrke",
            Self::Risk => "Risiko",
            Self::Opportunity => "Mulighed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    #[serde(rename = "type")]
    pub kind: BulletKind,
    pub text: String,
}

/// Narrative bracket selected by an inclusive `[min, max]` score range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTier {
    pub min: u32,
    pub max: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
}

impl ResultTier {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Configuration defects found in a tier table. None of them stop resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierIssue {
    InvertedRange { index: usize, min: u32, max: u32 },
    Gap { from: u32, to: u32 },
    Overlap { from: u32, to: u32 },
    Uncovered { from: u32, to: u32 },
}

impl std::fmt::Display for TierIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TierIssue::InvertedRange { index, min, max } => {
                write!(f, "tier {index} has min {min} above max {max}")
            }
            TierIssue::Gap { from, to } => write!(f, "scores {from}..={to} match no tier"),
            TierIssue::Overlap { from, to } => {
                write!(f, "scores {from}..={to} match more than one tier")
            }
            TierIssue::Uncovered { from, to } => {
                write!(f, "achievable scores {from}..={to} fall outside every tier")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("result tier table is empty")]
pub struct EmptyTierTable;

/// Ordered, non-empty tier table. The first tier doubles as the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ResultTier>", into = "Vec<ResultTier>")]
pub struct TierTable {
    head: ResultTier,
    tail: Vec<ResultTier>,
}

impl TierTable {
    pub fn new(tiers: Vec<ResultTier>) -> Result<Self, EmptyTierTable> {
        let mut tiers = tiers.into_iter();
        let head = tiers.next().ok_or(EmptyTierTable)?;
        Ok(Self {
            head,
            tail: tiers.collect(),
        })
    }

    pub(crate) fn from_parts(head: ResultTier, tail: Vec<ResultTier>) -> Self {
        Self { head, tail }
    }

    pub fn first(&self) -> &ResultTier {
        &self.head
    }

    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultTier> + '_ {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// First tier, in table order, whose range contains `score`.
    pub fn matching(&self, score: u32) -> Option<&ResultTier> {
        self.iter().find(|tier| tier.contains(score))
    }

    /// Checks that the table covers `0..=max_score` exactly once.
    pub fn audit(&self, max_score: u32) -> Vec<TierIssue> {
        let mut issues = Vec::new();

        for (index, tier) in self.iter().enumerate() {
            if tier.min > tier.max {
                issues.push(TierIssue::InvertedRange {
                    index,
                    min: tier.min,
                    max: tier.max,
                });
            }
        }

        let mut ranges: Vec<(u32, u32)> = self
            .iter()
            .filter(|tier| tier.min <= tier.max)
            .map(|tier| (tier.min, tier.max))
            .collect();
        ranges.sort_unstable();

        let mut covered_to: Option<u32> = None;
        for (min, max) in ranges {
            match covered_to {
                None if min > 0 => issues.push(TierIssue::Gap {
                    from: 0,
                    to: min - 1,
                }),
                Some(end) if min > end.saturating_add(1) => issues.push(TierIssue::Gap {
                    from: end + 1,
                    to: min - 1,
                }),
                Some(end) if min <= end => issues.push(TierIssue::Overlap {
                    from: min,
                    to: end.min(max),
                }),
                _ => {}
            }
            covered_to = Some(covered_to.map_or(max, |end| end.max(max)));
        }

        match covered_to {
            None => issues.push(TierIssue::Uncovered {
                from: 0,
                to: max_score,
            }),
            Some(end) if end < max_score => issues.push(TierIssue::Uncovered {
                from: end + 1,
                to: max_score,
            }),
            _ => {}
        }

        issues
    }
}

impl TryFrom<Vec<ResultTier>> for TierTable {
    type Error = EmptyTierTable;

    fn try_from(value: Vec<ResultTier>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TierTable> for Vec<ResultTier> {
    fn from(value: TierTable) -> Self {
        let mut tiers = Vec::with_capacity(value.tail.len() + 1);
        tiers.push(value.head);
        tiers.extend(value.tail);
        tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(min: u32, max: u32) -> ResultTier {
        ResultTier {
            min,
            max,
            title: format!("{min}-{max}"),
            description: String::new(),
            bullets: Vec::new(),
        }
    }

    fn table(ranges: &[(u32, u32)]) -> TierTable {
        TierTable::new(ranges.iter().map(|(min, max)| tier(*min, *max)).collect())
            .expect("non-empty table")
    }

    #[test]
    fn well_formed_table_has_no_issues() {
        let tiers = table(&[(0, 10), (11, 18), (19, 24), (25, 30)]);
        assert!(tiers.audit(30).is_empty());
        assert_eq!(tiers.len(), 4);
    }

    #[test]
    fn audit_reports_gaps_overlaps_and_uncovered_scores() {
        let tiers = table(&[(0, 11), (13, 20), (18, 24)]);
        let issues = tiers.audit(30);

        assert_eq!(
            issues,
            vec![
                TierIssue::Gap { from: 12, to: 12 },
                TierIssue::Overlap { from: 18, to: 20 },
                TierIssue::Uncovered { from: 25, to: 30 },
            ]
        );
    }

    #[test]
    fn audit_flags_inverted_ranges_and_leading_gap() {
        let tiers = table(&[(5, 30), (9, 2)]);
        let issues = tiers.audit(30);

        assert!(issues.contains(&TierIssue::InvertedRange {
            index: 1,
            min: 9,
            max: 2
        }));
        assert!(issues.contains(&TierIssue::Gap { from: 0, to: 4 }));
    }

    #[test]
    fn bullets_use_type_key_on_the_wire() {
        let bullet = Bullet {
            kind: BulletKind::Opportunity,
            text: "Saml onboarding digitalt".to_string(),
        };
        let value = serde_json::to_value(&bullet).expect("serializes");
        assert_eq!(value["type"], "opportunity");
        assert_eq!(BulletKind::Risk.label(), "Risiko");
    }

    #[test]
    fn table_round_trips_through_a_plain_list() {
        let tiers = table(&[(0, 4), (5, 9)]);
        let list: Vec<ResultTier> = tiers.clone().into();
        assert_eq!(list.len(), 2);
        assert_eq!(TierTable::try_from(list), Ok(tiers));
        assert_eq!(TierTable::new(Vec::new()), Err(EmptyTierTable));
    }
}

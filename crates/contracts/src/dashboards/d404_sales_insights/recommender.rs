use super::dto::SalesRecord;
use crate::shared::indicators::Tone;
use serde::{Deserialize, Serialize};

/// Candidate metrics the recommender chooses between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendedKind {
    Revenue,
    Customers,
    NewProducts,
}

/// The most noteworthy metric of a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendedKind,
    pub label: String,
    pub icon: String,
    pub tone: Tone,
    pub value: f64,
    pub description: String,
}

struct Candidate {
    kind: RecommendedKind,
    label: &'static str,
    icon: &'static str,
    tone: Tone,
    description: &'static str,
}

impl Candidate {
    fn value(&self, record: &SalesRecord) -> f64 {
        match self.kind {
            RecommendedKind::Revenue => record.revenue,
            RecommendedKind::Customers => record.customers,
            RecommendedKind::NewProducts => record.new_products,
        }
    }
}

/// Evaluation order doubles as the tie-break order.
static CANDIDATES: [Candidate; 3] = [
    Candidate {
        kind: RecommendedKind::Revenue,
        label: "Revenue Boost",
        icon: "trending-up",
        tone: Tone::Green,
        description: "Highest potential for growth",
    },
    Candidate {
        kind: RecommendedKind::Customers,
        label: "Customer Expansion",
        icon: "users",
        tone: Tone::Blue,
        description: "Key focus for market penetration",
    },
    Candidate {
        kind: RecommendedKind::NewProducts,
        label: "Innovation Drive",
        icon: "package",
        tone: Tone::Purple,
        description: "Product diversity indicator",
    },
];

/// Pick the largest of revenue, customers and new products.
///
/// Only a strictly greater value replaces the running maximum, so on a tie the
/// earlier candidate wins.
pub fn recommend_metric(record: &SalesRecord) -> Recommendation {
    let mut best = &CANDIDATES[0];
    let mut best_value = best.value(record);

    for candidate in &CANDIDATES[1..] {
        let value = candidate.value(record);
        if value > best_value {
            best = candidate;
            best_value = value;
        }
    }

    Recommendation {
        kind: best.kind,
        label: best.label.to_string(),
        icon: best.icon.to_string(),
        tone: best.tone,
        value: best_value,
        description: best.description.to_string(),
    }
}

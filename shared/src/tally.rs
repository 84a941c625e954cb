use serde::{Serialize, Deserialize};
use crate::models::{Breakdown, Category, CategoryView, Color, ColorCounts};

/// In-memory vote counters, one record per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    counts: [ColorCounts; 5],
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category, color: Color) {
        self.counts[category.index()].record(color);
    }

    pub fn counts(&self, category: Category) -> &ColorCounts {
        &self.counts[category.index()]
    }

    pub fn reset(&mut self) {
        self.counts = Default::default();
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(ColorCounts::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn breakdown(&self, category: Category) -> Breakdown {
        Breakdown::from_counts(self.counts(category))
    }

    /// All categories pooled together.
    pub fn aggregate(&self) -> Breakdown {
        let pooled = self.counts.iter().fold(AggregateCounts::default(), |acc, c| AggregateCounts {
            red: acc.red + u64::from(c.red),
            yellow: acc.yellow + u64::from(c.yellow),
            green: acc.green + u64::from(c.green),
        });
        pooled.breakdown()
    }

    pub fn views(&self) -> Vec<CategoryView> {
        Category::ALL.into_iter()
            .map(|category| CategoryView {
                category,
                counts: *self.counts(category),
                breakdown: self.breakdown(category),
            })
            .collect()
    }
}

#[derive(Default)]
struct AggregateCounts {
    red: u64,
    yellow: u64,
    green: u64,
}

impl AggregateCounts {
    fn breakdown(&self) -> Breakdown {
        let total = self.red + self.yellow + self.green;
        if total == 0 {
            return Breakdown::default();
        }
        let pct = |n: u64| n as f64 / total as f64 * 100.0;
        Breakdown {
            red: pct(self.red),
            yellow: pct(self.yellow),
            green: pct(self.green),
        }
    }
}

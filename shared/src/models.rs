use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Utensilios,
    Menu,
    Cantidad,
    Higiene,
    Atencion,
}

impl Category {
    /// Display order of the survey panel.
    pub const ALL: [Category; 5] = [
        Category::Utensilios,
        Category::Menu,
        Category::Cantidad,
        Category::Higiene,
        Category::Atencion,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Category::Utensilios => "utensilios",
            Category::Menu => "menu",
            Category::Cantidad => "cantidad",
            Category::Higiene => "higiene",
            Category::Atencion => "atencion",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Utensilios => "Utensilios",
            Category::Menu => "Menú",
            Category::Cantidad => "Cantidad",
            Category::Higiene => "Higiene",
            Category::Atencion => "Atención",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL.into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| Error::invalid_input(format!("Unknown category: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color { Red, Yellow, Green }

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Yellow, Color::Green];

    pub const fn id(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::ALL.into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| Error::invalid_input(format!("Unknown color: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCounts {
    pub red: u32,
    pub yellow: u32,
    pub green: u32,
}

impl ColorCounts {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
        }
    }

    pub(crate) fn record(&mut self, color: Color) {
        let counter = match color {
            Color::Red => &mut self.red,
            Color::Yellow => &mut self.yellow,
            Color::Green => &mut self.green,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn total(&self) -> u64 {
        u64::from(self.red) + u64::from(self.yellow) + u64::from(self.green)
    }
}

/// Payload accepted by the vote logging endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    #[serde(rename = "question")]
    pub category: Category,
    pub color: Color,
}

impl VoteRecord {
    pub fn to_payload(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerAck {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub red: f64,
    pub yellow: f64,
    pub green: f64,
}

impl Breakdown {
    pub fn from_counts(counts: &ColorCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        let pct = |n: u32| f64::from(n) / total as f64 * 100.0;
        Self {
            red: pct(counts.red),
            yellow: pct(counts.yellow),
            green: pct(counts.green),
        }
    }

    pub fn get(&self, color: Color) -> f64 {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
        }
    }

    /// Whole-number percentage shown next to the bar, halves rounded up.
    pub fn display(&self, color: Color) -> u32 {
        (self.get(color) + 0.5).floor() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub category: Category,
    pub counts: ColorCounts,
    pub breakdown: Breakdown,
}

/// Everything the display needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub unlocked: bool,
    pub categories: Vec<CategoryView>,
    pub aggregate: Breakdown,
    pub clock: String,
}

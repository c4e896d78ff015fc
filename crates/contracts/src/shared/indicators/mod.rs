use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier within a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    /// Shortest decimal form (`75000`, `4.5`)
    Raw,
    /// Raw value followed by `%`
    Percent,
}

/// Accent colour of an icon (drives the CSS modifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Blue,
    Purple,
    Yellow,
    Indigo,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Green => "tone--green",
            Tone::Blue => "tone--blue",
            Tone::Purple => "tone--purple",
            Tone::Yellow => "tone--yellow",
            Tone::Indigo => "tone--indigo",
        }
    }
}

pub fn format_value(val: f64, fmt: ValueFormat) -> String {
    // -0.0 + 0.0 is +0.0
    let val = val + 0.0;
    match fmt {
        ValueFormat::Raw => format!("{}", val),
        ValueFormat::Percent => format!("{}%", val),
    }
}

// ---------------------------------------------------------------------------
// Indicator sets
// ---------------------------------------------------------------------------

/// One tile of an indicator grid, value already formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorTile {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub tone: Tone,
    pub value: f64,
    pub format: ValueFormat,
    pub display: String,
}

impl IndicatorTile {
    pub fn new(id: &str, label: &str, icon: &str, tone: Tone, value: f64, format: ValueFormat) -> Self {
        Self {
            id: IndicatorId::new(id),
            label: label.to_string(),
            icon: icon.to_string(),
            tone,
            value,
            format,
            display: format_value(value, format),
        }
    }
}

/// A group of tiles rendered together in one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub label: String,
    pub icon: String,
    /// Number of columns in the card grid (2, 3, 4).
    pub columns: u8,
    pub tiles: Vec<IndicatorTile>,
}

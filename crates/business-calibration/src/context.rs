//! Business-Context Miner
//!
//! Pulls coarse business signals out of a narrative with literal numeric
//! patterns: revenue and EBITDA in billions, EBITDA margin and revenue growth in
//! percent, and a market-position tier from leadership wording.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strategy_core::text::round_to;

/// Market position inferred from narrative wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketPosition {
    Leader,
    Strong,
    Competitive,
    Weak,
}

impl MarketPosition {
    pub fn health_contribution(&self) -> f64 {
        match self {
            MarketPosition::Leader => 0.2,
            MarketPosition::Strong => 0.15,
            MarketPosition::Competitive => 0.1,
            MarketPosition::Weak => 0.0,
        }
    }

    pub fn to_label(&self) -> &'static str {
        match self {
            MarketPosition::Leader => "market leader",
            MarketPosition::Strong => "strong market position",
            MarketPosition::Competitive => "competitive market position",
            MarketPosition::Weak => "weak market position",
        }
    }
}

/// Profitability tier from EBITDA margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitabilityTier {
    High,
    Moderate,
    Low,
    Negative,
    Unknown,
}

impl ProfitabilityTier {
    pub fn from_margin(ebitda_margin: Option<f64>) -> Self {
        match ebitda_margin {
            Some(m) if m > 20.0 => ProfitabilityTier::High,
            Some(m) if m > 10.0 => ProfitabilityTier::Moderate,
            Some(m) if m > 0.0 => ProfitabilityTier::Low,
            Some(_) => ProfitabilityTier::Negative,
            None => ProfitabilityTier::Unknown,
        }
    }
}

/// Financial health tier from the business-health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    Strong,
    Moderate,
    Weak,
}

impl HealthTier {
    pub fn from_score(business_health: f64) -> Self {
        match business_health {
            h if h >= 0.7 => HealthTier::Strong,
            h if h >= 0.4 => HealthTier::Moderate,
            _ => HealthTier::Weak,
        }
    }
}

/// Signals mined from one narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessContext {
    /// Billions
    pub revenue: Option<f64>,
    /// Billions
    pub ebitda: Option<f64>,
    /// Percent
    pub ebitda_margin: Option<f64>,
    /// Percent
    pub revenue_growth: Option<f64>,
    pub market_position: MarketPosition,
    pub profitability: ProfitabilityTier,
    pub financial_health: HealthTier,
    /// 0.0 to 1.0
    pub business_health: f64,
}

impl BusinessContext {
    /// Build a context from already-known signals; tiers and health are derived.
    pub fn from_signals(
        revenue: Option<f64>,
        ebitda: Option<f64>,
        ebitda_margin: Option<f64>,
        revenue_growth: Option<f64>,
        market_position: MarketPosition,
    ) -> Self {
        let business_health = business_health_score(revenue, ebitda_margin, revenue_growth, market_position);
        Self {
            revenue,
            ebitda,
            ebitda_margin,
            revenue_growth,
            market_position,
            profitability: ProfitabilityTier::from_margin(ebitda_margin),
            financial_health: HealthTier::from_score(business_health),
            business_health,
        }
    }

    /// Short description of the known signals for narrative output.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(revenue) = self.revenue {
            parts.push(format!("revenue ${:.2}B", revenue));
        }
        if let Some(margin) = self.ebitda_margin {
            parts.push(format!("EBITDA margin {:.1}%", margin));
        }
        if let Some(growth) = self.revenue_growth {
            parts.push(format!("revenue growth {:.1}%", growth));
        }
        parts.push(self.market_position.to_label().to_string());
        parts.join(", ")
    }
}

/// Sum of four capped contributions: revenue scale (<=0.3), margin (<=0.3),
/// growth (<=0.2) and market position (<=0.2). Two decimals.
pub fn business_health_score(
    revenue: Option<f64>,
    ebitda_margin: Option<f64>,
    revenue_growth: Option<f64>,
    market_position: MarketPosition,
) -> f64 {
    let revenue_part = match revenue {
        Some(r) if r > 5.0 => 0.3,
        Some(r) if r > 1.0 => 0.2,
        Some(r) if r > 0.1 => 0.1,
        _ => 0.0,
    };
    let margin_part = match ebitda_margin {
        Some(m) if m > 15.0 => 0.3,
        Some(m) if m > 10.0 => 0.2,
        Some(m) if m > 5.0 => 0.1,
        _ => 0.0,
    };
    let growth_part = match revenue_growth {
        Some(g) if g > 5.0 => 0.2,
        Some(g) if g > 0.0 => 0.1,
        _ => 0.0,
    };
    round_to(
        revenue_part + margin_part + growth_part + market_position.health_contribution(),
        2,
    )
}

const AMOUNT: &str = r"\$?\s*(\d[\d,]*(?:\.\d+)?)\s*(billion|bn|b|million|mn|m)\b";

/// Year ("2023", "FY2024") and quarter ("Q3") tokens that may sit between a
/// label and its amount.
const PERIOD: &str = r"(?:(?:19|20)\d{2}\b|\bQ[1-4]\b)";

const POSITIVE_VERBS: &str = "growth|grew|increased|rose";
const NEGATIVE_VERBS: &[&str] = &["declined", "decreased", "fell"];

// Patterns are literal; compile failures surface in the tests below.
static REVENUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\brevenues?\b(?:{PERIOD}|[^0-9$]){{0,40}}?{AMOUNT}"))
        .expect("static regex must compile")
});
static EBITDA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\bebitda\b(?:{PERIOD}|[^0-9$%]){{0,40}}?{AMOUNT}"))
        .expect("static regex must compile")
});
static EBITDA_MARGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bebitda\s+margins?\b[^0-9%]{0,20}?(-?\d+(?:\.\d+)?)\s*%").expect("static regex must compile")
});
static MARGIN_BEFORE_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(-?\d+(?:\.\d+)?)\s*%\s+ebitda\s+margins?\b").expect("static regex must compile")
});
static REVENUE_GROWTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    let verbs = format!("{}|{}", POSITIVE_VERBS, NEGATIVE_VERBS.join("|"));
    Regex::new(&format!(
        r"(?i)\b(?:revenues?|sales)\b[^0-9%.]{{0,30}}?\b({verbs})\b[^0-9%]{{0,30}}?(-?\d+(?:\.\d+)?)\s*%"
    ))
    .expect("static regex must compile")
});
static GROWTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    let verbs = format!("{}|{}", POSITIVE_VERBS, NEGATIVE_VERBS.join("|"));
    Regex::new(&format!(r"(?i)\b({verbs})\b[^0-9%]{{0,30}}?(-?\d+(?:\.\d+)?)\s*%"))
        .expect("static regex must compile")
});
static LEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:leader\w*|only|largest)\b").expect("static regex must compile"));
static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:strong|top)\b").expect("static regex must compile"));

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Amount in billions from a (number, unit) capture pair.
fn amount_in_billions(caps: &Captures) -> Option<f64> {
    let value = parse_number(caps.get(1)?.as_str())?;
    let unit = caps.get(2)?.as_str().to_ascii_lowercase();
    if unit.starts_with('b') {
        Some(value)
    } else {
        Some(value / 1000.0)
    }
}

pub fn mine_revenue(text: &str) -> Option<f64> {
    REVENUE_RE.captures(text).and_then(|caps| amount_in_billions(&caps))
}

pub fn mine_ebitda(text: &str) -> Option<f64> {
    EBITDA_RE.captures(text).and_then(|caps| amount_in_billions(&caps))
}

pub fn mine_ebitda_margin(text: &str) -> Option<f64> {
    EBITDA_MARGIN_RE
        .captures(text)
        .or_else(|| MARGIN_BEFORE_LABEL_RE.captures(text))
        .and_then(|caps| parse_number(caps.get(1)?.as_str()))
}

/// Growth/decline percentage, preferring a phrase about revenue or sales
/// over the first generic one. Decline verbs flip the sign.
pub fn mine_revenue_growth(text: &str) -> Option<f64> {
    let caps = REVENUE_GROWTH_RE
        .captures(text)
        .or_else(|| GROWTH_RE.captures(text))?;
    let verb = caps.get(1)?.as_str().to_ascii_lowercase();
    let value = parse_number(caps.get(2)?.as_str())?;
    let declining = NEGATIVE_VERBS.contains(&verb.as_str());
    Some(if declining { -value.abs() } else { value })
}

pub fn mine_market_position(text: &str) -> MarketPosition {
    if LEADER_RE.is_match(text) {
        MarketPosition::Leader
    } else if STRONG_RE.is_match(text) {
        MarketPosition::Strong
    } else {
        MarketPosition::Competitive
    }
}

/// Mine every business signal from `text`.
pub fn mine_business_context(text: &str) -> BusinessContext {
    let revenue = mine_revenue(text);
    let ebitda = mine_ebitda(text);
    let ebitda_margin = mine_ebitda_margin(text).or_else(|| match (ebitda, revenue) {
        (Some(e), Some(r)) if r > 0.0 => Some(round_to(e / r * 100.0, 1)),
        _ => None,
    });
    let revenue_growth = mine_revenue_growth(text);
    let market_position = mine_market_position(text);

    let context = BusinessContext::from_signals(revenue, ebitda, ebitda_margin, revenue_growth, market_position);
    tracing::debug!(
        "Business context: {} (health {:.2})",
        context.summary(),
        context.business_health
    );
    context
}

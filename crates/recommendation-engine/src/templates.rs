//! Recommendation templates, evaluated in declaration order.

use crate::models::{ActionableRecommendation, Level, Timeframe};
use business_calibration::{BusinessContext, MarketPosition};
use strategy_core::text::contains_any;

pub const ESG_KEYWORDS: &[&str] = &[
    "environmental",
    "sustainability",
    "sustainable",
    "esg",
    "climate",
    "carbon",
    "emissions",
    "renewable",
];

pub const INNOVATION_KEYWORDS: &[&str] = &[
    "innovation",
    "innovative",
    "r&d",
    "research and development",
    "technology",
];

/// Everything a template gate or builder may look at
#[derive(Debug, Clone)]
pub struct RecommendationSignals {
    pub strategic_score: f64,
    pub pestel_score: f64,
    pub forces_score: f64,
    pub swot_score: f64,
    pub context: BusinessContext,
    pub mentions_esg: bool,
    pub mentions_innovation: bool,
}

impl RecommendationSignals {
    pub fn new(
        text: &str,
        context: BusinessContext,
        strategic_score: f64,
        pestel_score: f64,
        forces_score: f64,
        swot_score: f64,
    ) -> Self {
        Self {
            strategic_score,
            pestel_score,
            forces_score,
            swot_score,
            context,
            mentions_esg: contains_any(text, ESG_KEYWORDS),
            mentions_innovation: contains_any(text, INNOVATION_KEYWORDS),
        }
    }

    fn revenue_above(&self, billions: f64) -> bool {
        self.context.revenue.is_some_and(|r| r > billions)
    }
}

pub struct RecommendationTemplate {
    pub key: &'static str,
    pub applies: fn(&RecommendationSignals) -> bool,
    pub build: fn(&RecommendationSignals) -> ActionableRecommendation,
}

pub static TEMPLATES: [RecommendationTemplate; 8] = [
    RecommendationTemplate {
        key: "growth_expansion",
        applies: |s| s.strategic_score > 60.0 && s.revenue_above(1.0),
        build: growth_expansion,
    },
    RecommendationTemplate {
        key: "operational_excellence",
        applies: |s| s.context.ebitda_margin.is_some_and(|m| m < 15.0),
        build: operational_excellence,
    },
    RecommendationTemplate {
        key: "digital_transformation",
        applies: |s| s.strategic_score < 70.0,
        build: digital_transformation,
    },
    RecommendationTemplate {
        key: "esg_leadership",
        applies: |s| s.mentions_esg,
        build: esg_leadership,
    },
    RecommendationTemplate {
        key: "capital_structure",
        applies: |s| s.revenue_above(3.0),
        build: capital_structure,
    },
    RecommendationTemplate {
        key: "competitive_defense",
        applies: |s| {
            s.forces_score < 0.5
                || matches!(
                    s.context.market_position,
                    MarketPosition::Competitive | MarketPosition::Weak
                )
        },
        build: competitive_defense,
    },
    RecommendationTemplate {
        key: "risk_mitigation",
        applies: |s| s.pestel_score < 0.0 || s.swot_score < 0.0,
        build: risk_mitigation,
    },
    RecommendationTemplate {
        key: "innovation_pipeline",
        applies: |s| s.mentions_innovation && s.strategic_score >= 50.0,
        build: innovation_pipeline,
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn revenue_phrase(context: &BusinessContext) -> String {
    match context.revenue {
        Some(r) => format!("${:.2}B in revenue", r),
        None => "an undisclosed revenue base".to_string(),
    }
}

fn growth_expansion(s: &RecommendationSignals) -> ActionableRecommendation {
    ActionableRecommendation {
        title: "Growth & Expansion Strategy".to_string(),
        description: "Use the current strategic strength to expand into adjacent markets and segments."
            .to_string(),
        specific_actions: strings(&[
            "Rank adjacent geographies and segments by addressable demand",
            "Build a business case for the top two expansion targets",
            "Evaluate bolt-on acquisitions that accelerate market entry",
            "Stand up a dedicated expansion team with quarterly milestones",
        ]),
        timeframe: Timeframe::TwelveMonthsPlus,
        resource_requirement: Level::High,
        expected_impact: Level::High,
        kpi_measures: strings(&[
            "Revenue from new markets",
            "Market share in target segments",
            "Customer acquisition cost in new markets",
        ]),
        risk_factors: strings(&[
            "Execution risk in unfamiliar markets",
            "Dilution of management focus",
            "Integration risk on acquisitions",
        ]),
        business_justification: format!(
            "A {:.1}% strategic score and {} give the scale to fund expansion.",
            s.strategic_score,
            revenue_phrase(&s.context)
        ),
    }
}

fn operational_excellence(s: &RecommendationSignals) -> ActionableRecommendation {
    let margin = s.context.ebitda_margin.unwrap_or_default();
    ActionableRecommendation {
        title: "Operational Excellence Program".to_string(),
        description: "Lift margins through cost discipline and process efficiency.".to_string(),
        specific_actions: strings(&[
            "Benchmark cost structure against best-in-class peers",
            "Automate high-volume manual processes",
            "Renegotiate top supplier contracts",
            "Introduce lean operating reviews in every business unit",
        ]),
        timeframe: Timeframe::SixMonths,
        resource_requirement: Level::Medium,
        expected_impact: Level::High,
        kpi_measures: strings(&[
            "EBITDA margin",
            "Operating cost as a share of revenue",
            "Process cycle time",
        ]),
        risk_factors: strings(&[
            "Service quality erosion from cost cuts",
            "Employee resistance to process change",
        ]),
        business_justification: format!(
            "An EBITDA margin of {:.1}% trails the 15% level expected of efficient operators.",
            margin
        ),
    }
}

fn digital_transformation(s: &RecommendationSignals) -> ActionableRecommendation {
    ActionableRecommendation {
        title: "Digital Transformation Initiative".to_string(),
        description: "Modernize core systems and customer channels to strengthen the strategic position."
            .to_string(),
        specific_actions: strings(&[
            "Assess digital maturity across core processes",
            "Prioritize customer-facing digital channels",
            "Migrate legacy systems to scalable platforms",
            "Build data and analytics capabilities",
        ]),
        timeframe: Timeframe::TwelveMonthsPlus,
        resource_requirement: Level::High,
        expected_impact: Level::Medium,
        kpi_measures: strings(&[
            "Share of revenue through digital channels",
            "Process automation rate",
            "Customer satisfaction score",
        ]),
        risk_factors: strings(&[
            "Technology implementation overruns",
            "Skills gaps in the workforce",
            "Cybersecurity exposure",
        ]),
        business_justification: format!(
            "A {:.1}% strategic score leaves room to build advantage through digital capabilities.",
            s.strategic_score
        ),
    }
}

fn esg_leadership(s: &RecommendationSignals) -> ActionableRecommendation {
    ActionableRecommendation {
        title: "ESG Leadership".to_string(),
        description: "Turn existing sustainability commitments into a measurable competitive advantage."
            .to_string(),
        specific_actions: strings(&[
            "Set science-based emissions reduction targets",
            "Publish an annual sustainability report against a recognized framework",
            "Link executive incentives to ESG outcomes",
        ]),
        timeframe: Timeframe::TwelveMonthsPlus,
        resource_requirement: Level::Medium,
        expected_impact: Level::Medium,
        kpi_measures: strings(&[
            "Scope 1 and 2 emissions",
            "ESG rating",
            "Share of renewable energy",
        ]),
        risk_factors: strings(&[
            "Greenwashing accusations if targets slip",
            "Upfront capital cost of decarbonization",
        ]),
        business_justification: format!(
            "Sustainability already features in the narrative, and a {} can turn it into a differentiator.",
            s.context.market_position.to_label()
        ),
    }
}

fn capital_structure(s: &RecommendationSignals) -> ActionableRecommendation {
    ActionableRecommendation {
        title: "Capital Structure Optimization".to_string(),
        description: "Rebalance debt, equity and shareholder returns to lower the cost of capital."
            .to_string(),
        specific_actions: strings(&[
            "Review leverage against rating agency thresholds",
            "Refinance high-cost debt",
            "Define a capital allocation policy for buybacks and dividends",
        ]),
        timeframe: Timeframe::NinetyDays,
        resource_requirement: Level::Low,
        expected_impact: Level::Medium,
        kpi_measures: strings(&[
            "Weighted average cost of capital",
            "Net debt to EBITDA",
            "Return on invested capital",
        ]),
        risk_factors: strings(&[
            "Interest rate movements",
            "Credit rating pressure",
        ]),
        business_justification: format!(
            "With {}, the balance sheet is large enough for capital structure to move returns.",
            revenue_phrase(&s.context)
        ),
    }
}

fn competitive_defense(s: &RecommendationSignals) -> ActionableRecommendation {
    ActionableRecommendation {
        title: "Competitive Defense Strategy".to_string(),
        description: "Protect share and pricing power against intensifying competitive pressure."
            .to_string(),
        specific_actions: strings(&[
            "Map competitor moves and price positioning quarterly",
            "Strengthen retention programs for key accounts",
            "Sharpen differentiation in the core offering",
        ]),
        timeframe: Timeframe::NinetyDays,
        resource_requirement: Level::Medium,
        expected_impact: Level::Medium,
        kpi_measures: strings(&[
            "Market share",
            "Customer retention rate",
            "Price realization",
        ]),
        risk_factors: strings(&[
            "Price wars eroding margins",
            "New entrants with lower cost bases",
        ]),
        business_justification: format!(
            "Industry attractiveness of {:.2} and a {} call for defending the current base.",
            s.forces_score,
            s.context.market_position.to_label()
        ),
    }
}

fn risk_mitigation(s: &RecommendationSignals) -> ActionableRecommendation {
    ActionableRecommendation {
        title: "Strategic Risk Mitigation".to_string(),
        description: "Reduce exposure to the external and internal risks weighing on the outlook."
            .to_string(),
        specific_actions: strings(&[
            "Build a risk register covering regulatory and macro exposures",
            "Stress-test the plan against adverse scenarios",
            "Diversify supply and revenue concentrations",
            "Assign owners and review cadence for top risks",
        ]),
        timeframe: Timeframe::ThirtyDays,
        resource_requirement: Level::Low,
        expected_impact: Level::Medium,
        kpi_measures: strings(&[
            "Number of high-severity open risks",
            "Revenue concentration in top customers",
            "Time to mitigate identified risks",
        ]),
        risk_factors: strings(&[
            "Risks that materialize before mitigation completes",
            "Over-hedging that limits upside",
        ]),
        business_justification: format!(
            "Environmental impact of {:.2} and SWOT effectiveness of {:.2} signal net downside exposure.",
            s.pestel_score, s.swot_score
        ),
    }
}

fn innovation_pipeline(s: &RecommendationSignals) -> ActionableRecommendation {
    ActionableRecommendation {
        title: "Innovation Pipeline Acceleration".to_string(),
        description: "Convert existing technology and R&D investment into a steady product pipeline."
            .to_string(),
        specific_actions: strings(&[
            "Adopt a stage-gate process for R&D projects",
            "Partner with startups and universities on emerging technology",
            "Ring-fence budget for breakthrough projects",
        ]),
        timeframe: Timeframe::SixMonths,
        resource_requirement: Level::Medium,
        expected_impact: Level::High,
        kpi_measures: strings(&[
            "Revenue from products launched in the last three years",
            "R&D spend as a share of revenue",
            "Time to market",
        ]),
        risk_factors: strings(&[
            "Low hit rate on early-stage projects",
            "Talent competition for technical staff",
        ]),
        business_justification: format!(
            "Innovation is part of the narrative and a {:.1}% strategic score supports investing behind it.",
            s.strategic_score
        ),
    }
}

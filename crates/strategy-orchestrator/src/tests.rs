#[cfg(test)]
mod assessment_tests {
    use crate::*;
    use financial_ratios::FinancialData;
    use strategy_core::{DataQuality, StrategyError};

    const NARRATIVE: &str = "### COMPANY INFORMATION
Northwind Logistics operates freight networks across three continents.

### FINANCIAL DATA
Revenue of $5.68 billion with EBITDA margin of 19% and revenue growth of 3.5%.

### REGULATORY AND LEGAL INFORMATION
Customs rules and emissions reporting obligations apply in every region served.

### TECHNOLOGY AND INNOVATION
Route optimization software and telematics across the whole truck fleet.

### ENVIRONMENTAL AND SUSTAINABILITY
Electrifying last-mile vans and buying renewable power for every depot.

### COMPETITIVE LANDSCAPE
Competes with global integrators and many regional carriers on price.

### MARKET INFORMATION
Large retail shippers hold significant negotiating leverage on contract rates.

### STRENGTHS AND ADVANTAGES
The largest cold-chain network in the region and a trusted brand.

### CHALLENGES AND WEAKNESSES
Legacy warehouse systems and high driver turnover in peak seasons.

### OPPORTUNITIES
Cross-border e-commerce growth and pharmaceutical logistics contracts.

### THREATS AND RISKS
Fuel price volatility and tightening labour regulation in key markets.
";

    fn northwind_financials() -> FinancialData {
        FinancialData {
            revenue: Some(5680.0),
            cost_of_goods_sold: Some(4100.0),
            operating_income: Some(640.0),
            net_income: Some(410.0),
            total_assets: Some(6200.0),
            current_assets: Some(1500.0),
            current_liabilities: Some(1000.0),
            total_debt: Some(1800.0),
            shareholders_equity: Some(2900.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_assessment() {
        let engine = StrategicAnalysisEngine::new();
        let request = AssessmentRequest::new(NARRATIVE, -10.0);
        let assessment = engine.analyze(&request);

        assert_eq!(assessment.extraction.evidence_count, 10);
        assert_eq!(assessment.extraction.data_quality, DataQuality::High);
        assert!(assessment.financial_analysis.is_none());

        assert_eq!(assessment.calibration.business_context.business_health, 0.9);
        assert!((assessment.calibration.calibrated_strategic_score - 81.0).abs() < 1e-9);

        let titles: Vec<&str> = assessment
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles.len(), 4);
        assert_eq!(
            &titles[..3],
            &[
                "Growth & Expansion Strategy",
                "ESG Leadership",
                "Capital Structure Optimization"
            ]
        );
    }

    #[test]
    fn test_financial_data_adds_ratio_analysis() {
        let request = AssessmentRequest::new(NARRATIVE, 70.0).with_financial_data(northwind_financials());
        let assessment = StrategicAnalysisEngine::new().analyze(&request);

        let analysis = assessment.financial_analysis.expect("financial analysis present");
        assert_eq!(analysis.ratios.current_ratio, Some(1.5));
        assert!(analysis.benchmark_comparisons.is_none());
        assert!((0.0..=100.0).contains(&analysis.overall_score));
    }

    #[test]
    fn test_empty_text_assessment() {
        let assessment = StrategicAnalysisEngine::new().analyze(&AssessmentRequest::new("", 50.0));

        assert!(assessment.extraction.is_empty());
        assert_eq!(assessment.extraction.data_quality, DataQuality::Insufficient);
        assert_eq!(assessment.framework_scores.forces, 0.5);
        assert_eq!(assessment.calibration.calibrated_strategic_score, 50.0);

        let titles: Vec<&str> = assessment
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Digital Transformation Initiative", "Competitive Defense Strategy"]
        );
    }

    #[test]
    fn test_recommendation_limit_from_config() {
        let config = EngineConfig {
            max_recommendations: 2,
            ..Default::default()
        };
        let assessment =
            StrategicAnalysisEngine::with_config(config).analyze(&AssessmentRequest::new(NARRATIVE, -10.0));
        assert_eq!(assessment.recommendations.len(), 2);
    }

    #[test]
    fn test_request_from_json() {
        let request =
            AssessmentRequest::from_json(r#"{"text": "Revenue of $2 billion", "raw_strategic_score": 42}"#)
                .unwrap();
        assert_eq!(request.raw_strategic_score, 42.0);
        assert!(request.financial_data.is_none());
        assert!(request.benchmarks.is_none());

        assert!(AssessmentRequest::from_json(r#"{"text": 5}"#).is_err());

        let orphan = AssessmentRequest::from_json(
            r#"{"text": "", "raw_strategic_score": 10, "benchmarks": {"net_margin": {"median": 8}}}"#,
        );
        assert!(matches!(orphan, Err(StrategyError::InvalidData(_))));
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let engine = StrategicAnalysisEngine::new();
        let request = AssessmentRequest::new(NARRATIVE, 35.0).with_financial_data(northwind_financials());
        let a = serde_json::to_string(&engine.analyze(&request)).unwrap();
        let b = serde_json::to_string(&engine.analyze(&request)).unwrap();
        assert_eq!(a, b);
        assert!(!a.contains("\"financial_analysis\":null"));
    }
}

use crate::models::{FinancialData, FinancialRatioResult};

/// Tax rate applied to operating income for ROIC (21% US corporate rate).
pub const ROIC_TAX_RATE: f64 = 0.21;

/// Division that never yields NaN or infinity.
///
/// A zero denominator returns 0. That value is financially meaningless and
/// callers should read a zero ratio with a known-zero denominator as
/// "unavailable".
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let result = numerator / denominator;
    if result.is_finite() {
        result
    } else {
        0.0
    }
}

/// What a zero (or overflowing) denominator turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZeroDenominator {
    /// Report 0 via `safe_divide`.
    Zero,
    /// Leave the ratio out.
    Omit,
}

impl ZeroDenominator {
    fn divide(self, numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
        let (numerator, denominator) = (numerator?, denominator?);
        if self == ZeroDenominator::Omit && (denominator == 0.0 || !(numerator / denominator).is_finite()) {
            return None;
        }
        Some(safe_divide(numerator, denominator))
    }

    fn percent(self, numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
        self.divide(numerator, denominator).map(|r| r * 100.0)
    }

    /// Period-over-period change in percent, measured against |previous|.
    fn growth(self, current: Option<f64>, previous: Option<f64>) -> Option<f64> {
        let (current, previous) = (current?, previous?);
        self.percent(Some(current - previous), Some(previous.abs()))
    }
}

/// Compute every ratio whose inputs are present.
pub fn calculate_ratios(data: &FinancialData) -> FinancialRatioResult {
    let ratios = compute(data, ZeroDenominator::Zero);
    tracing::debug!("Computed {} of 28 ratios", ratios.present_count());
    ratios
}

/// Like [`calculate_ratios`], but ratios whose denominator is zero are left
/// out instead of reported as 0. This is the set threshold rules, scoring
/// and risk points read.
pub fn usable_ratios(data: &FinancialData) -> FinancialRatioResult {
    compute(data, ZeroDenominator::Omit)
}

fn compute(data: &FinancialData, mode: ZeroDenominator) -> FinancialRatioResult {
    let ratio = |n: Option<f64>, d: Option<f64>| mode.divide(n, d);
    let percent = |n: Option<f64>, d: Option<f64>| mode.percent(n, d);
    let growth = |c: Option<f64>, p: Option<f64>| mode.growth(c, p);

    let ebit = data.ebit.or(data.operating_income);
    let eps = data
        .eps
        .or_else(|| ratio(data.net_income, data.shares_outstanding));
    let invested_capital = match (data.total_debt, data.shareholders_equity) {
        (Some(debt), Some(equity)) => Some(debt + equity),
        _ => None,
    };
    let enterprise_value = match (data.market_cap, data.total_debt, data.cash_and_equivalents) {
        (Some(cap), Some(debt), Some(cash)) => Some(cap + debt - cash),
        _ => None,
    };
    let quick_assets = match (data.current_assets, data.inventory) {
        (Some(assets), Some(inventory)) => Some(assets - inventory),
        _ => None,
    };

    FinancialRatioResult {
        current_ratio: ratio(data.current_assets, data.current_liabilities),
        quick_ratio: ratio(quick_assets, data.current_liabilities),
        cash_ratio: ratio(data.cash_and_equivalents, data.current_liabilities),
        operating_cash_flow_ratio: ratio(data.operating_cash_flow, data.current_liabilities),

        gross_margin: percent(data.gross_profit, data.revenue),
        operating_margin: percent(data.operating_income, data.revenue),
        net_margin: percent(data.net_income, data.revenue),
        ebitda_margin: percent(data.ebitda, data.revenue),
        return_on_equity: percent(data.net_income, data.shareholders_equity),
        return_on_assets: percent(data.net_income, data.total_assets),
        return_on_invested_capital: percent(
            data.operating_income.map(|oi| oi * (1.0 - ROIC_TAX_RATE)),
            invested_capital,
        ),

        asset_turnover: ratio(data.revenue, data.total_assets),
        inventory_turnover: ratio(data.cost_of_goods_sold, data.inventory),
        receivables_turnover: ratio(data.revenue, data.accounts_receivable),
        payables_turnover: ratio(data.cost_of_goods_sold, data.accounts_payable),

        debt_to_equity: ratio(data.total_debt, data.shareholders_equity),
        debt_to_assets: ratio(data.total_debt, data.total_assets),
        debt_to_capital: ratio(data.total_debt, invested_capital),
        interest_coverage: ratio(ebit, data.interest_expense),
        debt_service_coverage: ratio(data.ebitda, data.debt_service),

        price_to_earnings: ratio(data.share_price, eps),
        price_to_book: ratio(data.market_cap, data.shareholders_equity),
        price_to_sales: ratio(data.market_cap, data.revenue),
        ev_to_ebitda: ratio(enterprise_value, data.ebitda),
        dividend_yield: percent(data.dividends_per_share, data.share_price),

        revenue_growth: growth(data.revenue, data.previous_revenue),
        earnings_growth: growth(data.net_income, data.previous_net_income),
        dividend_growth: growth(data.dividends_per_share, data.previous_dividends_per_share),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_safe_divide() {
        assert_eq!(safe_divide(10.0, 4.0), 2.5);
        assert_eq!(safe_divide(10.0, 0.0), 0.0);
        assert_eq!(safe_divide(-3.0, 0.0), 0.0);
        assert_eq!(safe_divide(0.0, 0.0), 0.0);
        assert_eq!(safe_divide(f64::MAX, f64::MIN_POSITIVE), 0.0);
    }

    #[test]
    fn test_current_ratio_only() {
        let data = FinancialData {
            current_assets: Some(200.0),
            current_liabilities: Some(100.0),
            ..Default::default()
        };
        let ratios = calculate_ratios(&data);
        assert_eq!(ratios.current_ratio, Some(2.0));
        assert_eq!(ratios.return_on_equity, None);
        assert_eq!(ratios.net_margin, None);
        assert_eq!(ratios.present_count(), 1);
    }

    #[test]
    fn test_zero_current_liabilities() {
        let data = FinancialData {
            current_assets: Some(350.0),
            current_liabilities: Some(0.0),
            cash_and_equivalents: Some(40.0),
            ..Default::default()
        };
        let ratios = calculate_ratios(&data);
        assert_eq!(ratios.current_ratio, Some(0.0));
        assert_eq!(ratios.cash_ratio, Some(0.0));

        let usable = usable_ratios(&data);
        assert_eq!(usable.current_ratio, None);
        assert_eq!(usable.cash_ratio, None);
        assert_eq!(usable.present_count(), 0);
    }

    #[test]
    fn test_usable_ratios_keep_real_values() {
        let data = FinancialData {
            revenue: Some(500.0),
            net_income: Some(-20.0),
            previous_revenue: Some(0.0),
            operating_income: Some(80.0),
            interest_expense: Some(0.0),
            ..Default::default()
        };
        let usable = usable_ratios(&data);
        assert_eq!(usable.net_margin, Some(-4.0));
        assert_eq!(usable.operating_margin, Some(16.0));
        assert_eq!(usable.revenue_growth, None);
        assert_eq!(usable.interest_coverage, None);
        assert_eq!(calculate_ratios(&data).interest_coverage, Some(0.0));
    }

    #[test]
    fn test_zero_denominators_never_produce_nan() {
        let data = FinancialData {
            revenue: Some(0.0),
            gross_profit: Some(10.0),
            operating_income: Some(5.0),
            net_income: Some(3.0),
            ebitda: Some(0.0),
            total_assets: Some(0.0),
            shareholders_equity: Some(0.0),
            total_debt: Some(0.0),
            interest_expense: Some(0.0),
            inventory: Some(0.0),
            cost_of_goods_sold: Some(7.0),
            market_cap: Some(100.0),
            cash_and_equivalents: Some(0.0),
            share_price: Some(0.0),
            dividends_per_share: Some(1.0),
            previous_revenue: Some(0.0),
            ..Default::default()
        };
        let ratios = calculate_ratios(&data);
        for (name, value) in ratios.entries() {
            if let Some(v) = value {
                assert!(v.is_finite(), "{name} is not finite");
            }
        }
        assert_eq!(ratios.net_margin, Some(0.0));
        assert_eq!(ratios.debt_to_equity, Some(0.0));
        assert_eq!(ratios.ev_to_ebitda, Some(0.0));
        assert_eq!(ratios.revenue_growth, Some(0.0));
    }

    #[test]
    fn test_full_statement() {
        let data = FinancialData {
            revenue: Some(1000.0),
            cost_of_goods_sold: Some(600.0),
            gross_profit: Some(400.0),
            operating_income: Some(150.0),
            ebitda: Some(200.0),
            interest_expense: Some(25.0),
            net_income: Some(100.0),
            total_assets: Some(800.0),
            current_assets: Some(300.0),
            current_liabilities: Some(150.0),
            cash_and_equivalents: Some(60.0),
            inventory: Some(90.0),
            total_debt: Some(200.0),
            shareholders_equity: Some(400.0),
            share_price: Some(20.0),
            shares_outstanding: Some(50.0),
            market_cap: Some(1000.0),
            previous_revenue: Some(800.0),
            previous_net_income: Some(-50.0),
            ..Default::default()
        };
        let r = calculate_ratios(&data);

        assert!(approx(r.current_ratio.unwrap(), 2.0));
        assert!(approx(r.quick_ratio.unwrap(), 1.4));
        assert!(approx(r.gross_margin.unwrap(), 40.0));
        assert!(approx(r.net_margin.unwrap(), 10.0));
        assert!(approx(r.return_on_equity.unwrap(), 25.0));
        assert!(approx(r.return_on_invested_capital.unwrap(), 150.0 * 0.79 / 600.0 * 100.0));
        assert!(approx(r.debt_to_capital.unwrap(), 200.0 / 600.0));
        // falls back to operating income for EBIT
        assert!(approx(r.interest_coverage.unwrap(), 6.0));
        // EPS derived from net income / shares = 2.0
        assert!(approx(r.price_to_earnings.unwrap(), 10.0));
        assert!(approx(r.ev_to_ebitda.unwrap(), (1000.0 + 200.0 - 60.0) / 200.0));
        assert!(approx(r.revenue_growth.unwrap(), 25.0));
        // (100 - -50) / 50
        assert!(approx(r.earnings_growth.unwrap(), 300.0));
        assert_eq!(r.dividend_yield, None);
        assert_eq!(r.debt_service_coverage, None);
    }
}

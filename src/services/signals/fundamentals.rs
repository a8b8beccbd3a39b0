//! Qualitative reasons derived from fundamental attributes.
//!
//! Fundamentals never move the score; they only add explanatory text.

use crate::types::{Fundamentals, QuoteType};

const TEN_BILLION: f64 = 10e9;
const HUNDRED_BILLION: f64 = 100e9;

/// Build the fundamental reasons for an instrument.
///
/// Fund (or equity) specific reasons come first, followed by the rules that
/// apply to every instrument type.
pub fn annotate(fundamentals: &Fundamentals) -> Vec<String> {
    let mut reasons = Vec::new();

    if fundamentals.quote_type.is_fund() {
        fund_reasons(fundamentals, &mut reasons);
    } else if fundamentals.quote_type == QuoteType::Equity {
        equity_reasons(fundamentals, &mut reasons);
    }

    shared_reasons(fundamentals, &mut reasons);
    reasons
}

fn fund_reasons(f: &Fundamentals, reasons: &mut Vec<String>) {
    if let Some(expense) = f.expense_ratio {
        if expense < 0.20 {
            reasons.push(format!("Ultra-low cost with {:.2}% expense ratio", expense));
        } else if expense <= 0.50 {
            reasons.push(format!("Low cost with {:.2}% expense ratio", expense));
        } else if expense > 1.00 {
            reasons.push(format!(
                "High cost: {:.2}% expense ratio impacts returns",
                expense
            ));
        }
    }

    if let Some(assets) = f.net_assets {
        if assets > TEN_BILLION {
            reasons.push(format!(
                "High liquidity with {} in net assets",
                format_money(assets)
            ));
        }
    }
}

fn equity_reasons(f: &Fundamentals, reasons: &mut Vec<String>) {
    // Non-positive P/E means negative earnings; nothing useful to say.
    let Some(pe) = f.pe_ratio.filter(|pe| *pe > 0.0) else {
        return;
    };

    if pe < 15.0 {
        reasons.push(format!("Attractive valuation with P/E of {:.1}", pe));
    } else if pe > 50.0 {
        reasons.push(format!(
            "Premium valuation (P/E {:.1}), priced for growth",
            pe
        ));
    } else {
        reasons.push(format!("Fair valuation with P/E of {:.1}", pe));
    }
}

fn shared_reasons(f: &Fundamentals, reasons: &mut Vec<String>) {
    if let Some(yield_pct) = f.dividend_yield {
        if yield_pct > 2.0 {
            reasons.push(format!(
                "Provides income with {:.2}% dividend yield",
                yield_pct
            ));
        }
    }

    if let Some(beta) = f.beta {
        if beta < 0.8 {
            reasons.push(format!("Low volatility (beta {:.2})", beta));
        } else if beta > 1.5 {
            reasons.push(format!("High volatility (beta {:.2})", beta));
        }
    }

    if let Some(cap) = f.market_cap {
        if cap > HUNDRED_BILLION {
            reasons.push(format!(
                "Large-cap strength with {} market cap",
                format_money(cap)
            ));
        }
    }
}

/// Format a currency amount with a T/B/M suffix.
pub fn format_money(amount: f64) -> String {
    if amount >= 1e12 {
        format!("${:.2}T", amount / 1e12)
    } else if amount >= 1e9 {
        format!("${:.2}B", amount / 1e9)
    } else if amount >= 1e6 {
        format!("${:.2}M", amount / 1e6)
    } else {
        format!("${:.0}", amount)
    }
}

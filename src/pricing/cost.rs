use serde::Serialize;

use super::PricingRow;

const TOKENS_PER_MTOK: f64 = 1_000_000.0;

/// Cost of one request, split by direction. Always finite and
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub input_cost_usd: f64,
    pub output_cost_usd: f64,
    pub total_usd: f64,
}

/// NaN, infinities, and negatives all become 0 before multiplication, so
/// bad token counts can never leak into user-visible currency figures.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Turn token counts and a pricing row into a cost breakdown.
///
/// Pure and total: never panics, never returns NaN or infinity. A row
/// without `output_per_mtok` prices output at 0.
pub fn compute_cost_usd(tokens_in: f64, tokens_out: f64, row: &PricingRow) -> CostBreakdown {
    let input_cost_usd = sanitize(tokens_in) / TOKENS_PER_MTOK * sanitize(row.input_per_mtok);
    let output_cost_usd = match row.output_per_mtok {
        Some(rate) => sanitize(tokens_out) / TOKENS_PER_MTOK * sanitize(rate),
        None => 0.0,
    };
    CostBreakdown {
        input_cost_usd,
        output_cost_usd,
        total_usd: input_cost_usd + output_cost_usd,
    }
}

/// Format a USD amount with adaptive precision: two fraction digits for
/// amounts at cent scale or exactly zero, more digits as amounts shrink so
/// micro-costs stay distinguishable. Non-finite input renders as an
/// explicit unavailable marker, never "NaN".
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    // Tier on the magnitude: `CostBreakdown` never produces negatives,
    // but this helper is public, and "-5" must not fall through to the
    // eight-digit tier.
    let magnitude = value.abs();
    let digits = if magnitude >= 0.01 || magnitude == 0.0 {
        2
    } else if magnitude >= 0.0001 {
        4
    } else if magnitude >= 0.000_001 {
        6
    } else {
        8
    };
    format!("${:.*}", digits, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_a_megatoken_at_four_dollars() {
        let row = PricingRow::minimal("OpenAI", "gpt-4o", 4.0);
        let cost = compute_cost_usd(500_000.0, 250_000.0, &row);
        assert!((cost.input_cost_usd - 2.0).abs() < 1e-9);
        assert_eq!(cost.output_cost_usd, 0.0);
        assert!((cost.total_usd - 2.0).abs() < 1e-9);
    }

    #[test]
    fn output_rate_is_applied_when_present() {
        let mut row = PricingRow::minimal("OpenAI", "gpt-4o", 2.5);
        row.output_per_mtok = Some(10.0);
        let cost = compute_cost_usd(1_000_000.0, 1_000_000.0, &row);
        assert!((cost.input_cost_usd - 2.5).abs() < 1e-9);
        assert!((cost.output_cost_usd - 10.0).abs() < 1e-9);
        assert!((cost.total_usd - 12.5).abs() < 1e-9);
    }

    #[test]
    fn non_finite_inputs_sanitize_to_zero() {
        let mut row = PricingRow::minimal("OpenAI", "gpt-4o", 4.0);
        row.output_per_mtok = Some(8.0);
        let cost = compute_cost_usd(f64::NAN, f64::INFINITY, &row);
        assert_eq!(cost.input_cost_usd, 0.0);
        assert_eq!(cost.output_cost_usd, 0.0);
        assert_eq!(cost.total_usd, 0.0);
    }

    #[test]
    fn negative_counts_sanitize_to_zero() {
        let row = PricingRow::minimal("OpenAI", "gpt-4o", 4.0);
        let cost = compute_cost_usd(-100.0, -100.0, &row);
        assert_eq!(cost.total_usd, 0.0);
    }

    #[test]
    fn outputs_are_always_finite_and_non_negative() {
        let mut row = PricingRow::minimal("X", "y", f64::INFINITY);
        row.output_per_mtok = Some(f64::NAN);
        let cost = compute_cost_usd(1e18, 1e18, &row);
        assert!(cost.input_cost_usd.is_finite() && cost.input_cost_usd >= 0.0);
        assert!(cost.output_cost_usd.is_finite() && cost.output_cost_usd >= 0.0);
        assert!(cost.total_usd.is_finite() && cost.total_usd >= 0.0);
    }

    #[test]
    fn usd_formatting_precision_tiers() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1.5), "$1.50");
        assert_eq!(format_usd(0.01), "$0.01");
        assert_eq!(format_usd(0.0025), "$0.0025");
        assert_eq!(format_usd(0.000045), "$0.000045");
        assert_eq!(format_usd(0.00000012), "$0.00000012");
    }

    #[test]
    fn negative_amounts_tier_by_magnitude() {
        assert_eq!(format_usd(-5.0), "$-5.00");
        assert_eq!(format_usd(-0.0025), "$-0.0025");
        assert_eq!(format_usd(-0.000045), "$-0.000045");
    }

    #[test]
    fn non_finite_amounts_format_as_unavailable() {
        assert_eq!(format_usd(f64::NAN), "—");
        assert_eq!(format_usd(f64::INFINITY), "—");
        assert!(!format_usd(f64::NAN).contains("NaN"));
    }
}

//! Display model of a calculation result.
//!
//! [`ResultReport::build`] turns a [`CalculationResult`] (and, when known,
//! the form values it was computed from) into ordered sections of labelled
//! lines and paragraphs. The frontend only maps these sections to markup, so
//! everything the page shows is decided here.

use crate::format::{format_dollars, format_input_dollars, format_percent};
use crate::{BudgetInput, CalculationResult, TrustFundChoice, TRUST_FUND_CREDIT_THRESHOLD};

pub const ESTIMATE_TITLE: &str = "Home Buying Budget Estimate";
pub const DOWN_PAYMENT_TITLE: &str = "Down Payment Breakdown";
pub const MONTHLY_COSTS_TITLE: &str = "Monthly Costs Breakdown";
pub const ASSUMPTIONS_TITLE: &str = "Assumptions Used";
pub const EXPLANATION_TITLE: &str = "Explanation";

const PLANNING_NOTE: &str = "This is an estimate intended for initial planning purposes only. For a more accurate assessment of your home buying budget, please consult with a financial advisor and a local real estate professional who can provide personalized advice based on your specific financial situation and local market conditions.";

/// How a line should stand out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Emphasis,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
    pub style: LineStyle,
}

impl ReportLine {
    fn plain(label: &str, value: String) -> Self {
        Self { label: label.to_string(), value, style: LineStyle::Plain }
    }

    fn emphasis(label: &str, value: String) -> Self {
        Self { label: label.to_string(), value, style: LineStyle::Emphasis }
    }

    fn danger(label: &str, value: String) -> Self {
        Self { label: label.to_string(), value, style: LineStyle::Danger }
    }
}

/// A paragraph of prose, optionally led by a bold caption
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub lead: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Lines(Vec<ReportLine>),
    Paragraphs(Vec<Paragraph>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: String,
    pub body: SectionBody,
}

impl ReportSection {
    pub fn lines(&self) -> &[ReportLine] {
        match &self.body {
            SectionBody::Lines(lines) => lines,
            SectionBody::Paragraphs(_) => &[],
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        match &self.body {
            SectionBody::Paragraphs(paragraphs) => paragraphs,
            SectionBody::Lines(_) => &[],
        }
    }
}

/// Which trust fund story the explanation tells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustFundNarrative {
    /// 4% annual return credited against the monthly payment
    MonthlyCredit,
    /// Below the threshold: only used for the down payment
    DownPaymentOnly,
}

impl TrustFundNarrative {
    pub fn for_amount(amount: u64) -> Self {
        if amount as f64 >= TRUST_FUND_CREDIT_THRESHOLD {
            TrustFundNarrative::MonthlyCredit
        } else {
            TrustFundNarrative::DownPaymentOnly
        }
    }

    pub fn text(&self, amount: u64) -> String {
        let amount = format_dollars(amount as f64);
        match self {
            TrustFundNarrative::MonthlyCredit => format!(
                "Your trust fund of {} is being used to supplement your monthly payments. We've calculated a 4% annual return on your trust fund, which contributes up to the total monthly payment amount as a credit.",
                amount
            ),
            TrustFundNarrative::DownPaymentOnly => format!(
                "Your trust fund of {} is less than $1,000,000, so it's not included in the monthly payment calculations. However, it has been applied to the down payment calculation if needed.",
                amount
            ),
        }
    }
}

/// Everything the result panel shows, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct ResultReport {
    pub sections: Vec<ReportSection>,
    pub trust_fund_narrative: Option<TrustFundNarrative>,
}

impl ResultReport {
    pub fn build(result: &CalculationResult, input: Option<&BudgetInput>) -> Self {
        let trust_fund = trust_fund_amount(result, input);
        let trust_fund_narrative = trust_fund.map(TrustFundNarrative::for_amount);

        let sections = vec![
            estimate_section(result),
            down_payment_section(result),
            monthly_costs_section(result),
            assumptions_section(result, input),
            explanation_section(result, trust_fund, trust_fund_narrative),
        ];

        Self { sections, trust_fund_narrative }
    }

    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// Value of the line with the given label in the given section
    pub fn value(&self, title: &str, label: &str) -> Option<&str> {
        self.section(title)?
            .lines()
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

/// Annual property tax as a percentage of the home price, recovered from the
/// monthly figure. Zero when there is no price to divide by.
pub fn property_tax_rate_percent(result: &CalculationResult) -> f64 {
    if result.home_price <= 0.0 {
        return 0.0;
    }
    result.monthly_costs.property_tax * 12.0 / result.home_price * 100.0
}

/// Trust fund amount to narrate, if the borrower has one.
///
/// The form values decide when present; a scenario saved without them falls
/// back to what the down payment says about the fund.
fn trust_fund_amount(result: &CalculationResult, input: Option<&BudgetInput>) -> Option<u64> {
    match input {
        Some(input) => match input.trust_fund_choice() {
            TrustFundChoice::Yes => Some(input.trust_fund_amount_value().unwrap_or(0)),
            TrustFundChoice::No => None,
        },
        None => {
            let amount = result.down_payment.from_trust + result.down_payment.remaining_trust_fund;
            (amount > 0.0).then(|| amount.round() as u64)
        }
    }
}

fn estimate_section(result: &CalculationResult) -> ReportSection {
    let mut lines = vec![ReportLine::emphasis(
        "Recommended home price",
        format_dollars(result.home_price),
    )];
    if !result.limiting_factor.is_empty() {
        lines.push(ReportLine::plain("Price determined by", result.limiting_factor.clone()));
    }

    ReportSection {
        title: ESTIMATE_TITLE.to_string(),
        body: SectionBody::Lines(lines),
    }
}

fn down_payment_section(result: &CalculationResult) -> ReportSection {
    let down_payment = &result.down_payment;
    let mut lines = vec![
        ReportLine::plain("Required Down Payment (20%)", format_dollars(down_payment.required)),
        ReportLine::plain("Down Payment from Savings", format_dollars(down_payment.from_savings)),
        ReportLine::plain("Down Payment from Income", format_dollars(down_payment.from_income)),
        ReportLine::plain("Down Payment from Trust Fund", format_dollars(down_payment.from_trust)),
        ReportLine::emphasis("Total Down Payment", format_dollars(down_payment.total)),
    ];
    if down_payment.shortfall > 0.0 {
        lines.push(ReportLine::danger("Shortfall", format_dollars(down_payment.shortfall)));
    }
    lines.push(ReportLine::plain("Remaining Savings", format_dollars(down_payment.remaining_savings)));
    lines.push(ReportLine::plain(
        "Remaining Trust Fund",
        format_dollars(down_payment.remaining_trust_fund),
    ));

    ReportSection {
        title: DOWN_PAYMENT_TITLE.to_string(),
        body: SectionBody::Lines(lines),
    }
}

fn monthly_costs_section(result: &CalculationResult) -> ReportSection {
    let costs = &result.monthly_costs;
    let lines = vec![
        ReportLine::plain("Mortgage (P&I)", format_dollars(costs.mortgage)),
        ReportLine::plain("Property Tax", format_dollars(costs.property_tax)),
        ReportLine::plain("Homeowners Insurance", format_dollars(costs.insurance)),
        ReportLine::plain("HOA Fees", format_dollars(costs.hoa)),
        ReportLine::plain("Trust Fund Credit", format!("-{}", format_dollars(costs.trust_fund_credit))),
        ReportLine::emphasis("Total Monthly Payment", format_dollars(costs.total)),
    ];

    ReportSection {
        title: MONTHLY_COSTS_TITLE.to_string(),
        body: SectionBody::Lines(lines),
    }
}

fn assumptions_section(result: &CalculationResult, input: Option<&BudgetInput>) -> ReportSection {
    let mut lines = Vec::new();

    if let Some(input) = input {
        lines.push(ReportLine::plain("Annual Income", format_input_dollars(&input.annual_income)));
        lines.push(ReportLine::plain("Total Savings", format_input_dollars(&input.total_savings)));
        let trust_fund = match input.trust_fund_choice() {
            TrustFundChoice::Yes => format_input_dollars(&input.trust_fund_amount),
            TrustFundChoice::No => "None".to_string(),
        };
        lines.push(ReportLine::plain("Trust Fund", trust_fund));
        lines.push(ReportLine::plain("City", input.city.clone()));
        lines.push(ReportLine::plain("Interest Rate", format!("{}%", input.interest_rate.trim())));
    }

    lines.push(ReportLine::plain(
        "Property Tax Rate",
        format_percent(property_tax_rate_percent(result)),
    ));

    for (key, value) in &result.assumptions {
        lines.push(ReportLine::plain(key, value.clone()));
    }

    ReportSection {
        title: ASSUMPTIONS_TITLE.to_string(),
        body: SectionBody::Lines(lines),
    }
}

fn explanation_section(
    result: &CalculationResult,
    trust_fund: Option<u64>,
    narrative: Option<TrustFundNarrative>,
) -> ReportSection {
    let mut paragraphs: Vec<Paragraph> = result
        .explanations
        .iter()
        .map(|text| Paragraph { lead: None, text: text.clone() })
        .collect();

    if let (Some(amount), Some(narrative)) = (trust_fund, narrative) {
        paragraphs.push(Paragraph {
            lead: Some("Trust Fund Calculation:".to_string()),
            text: narrative.text(amount),
        });
    }

    paragraphs.push(Paragraph {
        lead: Some("Note:".to_string()),
        text: PLANNING_NOTE.to_string(),
    });

    ReportSection {
        title: EXPLANATION_TITLE.to_string(),
        body: SectionBody::Paragraphs(paragraphs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_amount;
    use crate::{DownPayment, MonthlyCosts};
    use std::collections::BTreeMap;

    fn sample_result() -> CalculationResult {
        let mut assumptions = BTreeMap::new();
        assumptions.insert("Loan Term".to_string(), "30-year fixed".to_string());

        CalculationResult {
            home_price: 1_488_000.0,
            down_payment: DownPayment {
                required: 297_600.0,
                from_savings: 30_000.0,
                from_income: 40_000.0,
                from_trust: 227_600.0,
                total: 297_600.0,
                shortfall: 0.0,
                remaining_savings: 120_000.0,
                remaining_trust_fund: 22_400.0,
            },
            monthly_costs: MonthlyCosts {
                mortgage: 10_404.33,
                property_tax: 1_116.0,
                insurance: 372.0,
                hoa: 1_000.0,
                trust_fund_credit: 0.0,
                total: 12_892.33,
            },
            assumptions,
            explanations: vec!["First paragraph.".to_string(), "Second paragraph.".to_string()],
            limiting_factor: "Income".to_string(),
        }
    }

    fn input_with_trust(amount: &str) -> BudgetInput {
        BudgetInput {
            annual_income: "200000".to_string(),
            total_savings: "150000".to_string(),
            has_trust_fund: "yes".to_string(),
            trust_fund_amount: amount.to_string(),
            city: "NYC".to_string(),
            interest_rate: "7".to_string(),
        }
    }

    #[test]
    fn test_monetary_lines_match_json_values() {
        let result = sample_result();
        let report = ResultReport::build(&result, None);

        let expected = [
            (ESTIMATE_TITLE, "Recommended home price", result.home_price),
            (DOWN_PAYMENT_TITLE, "Required Down Payment (20%)", result.down_payment.required),
            (DOWN_PAYMENT_TITLE, "Down Payment from Savings", result.down_payment.from_savings),
            (DOWN_PAYMENT_TITLE, "Down Payment from Income", result.down_payment.from_income),
            (DOWN_PAYMENT_TITLE, "Down Payment from Trust Fund", result.down_payment.from_trust),
            (DOWN_PAYMENT_TITLE, "Total Down Payment", result.down_payment.total),
            (DOWN_PAYMENT_TITLE, "Remaining Savings", result.down_payment.remaining_savings),
            (DOWN_PAYMENT_TITLE, "Remaining Trust Fund", result.down_payment.remaining_trust_fund),
            (MONTHLY_COSTS_TITLE, "Mortgage (P&I)", result.monthly_costs.mortgage),
            (MONTHLY_COSTS_TITLE, "Property Tax", result.monthly_costs.property_tax),
            (MONTHLY_COSTS_TITLE, "Homeowners Insurance", result.monthly_costs.insurance),
            (MONTHLY_COSTS_TITLE, "HOA Fees", result.monthly_costs.hoa),
            (MONTHLY_COSTS_TITLE, "Total Monthly Payment", result.monthly_costs.total),
        ];

        for (section, label, amount) in expected {
            assert_eq!(
                report.value(section, label),
                Some(format!("${}", format_amount(amount)).as_str()),
                "{} / {}",
                section,
                label
            );
        }
        assert_eq!(report.value(MONTHLY_COSTS_TITLE, "Mortgage (P&I)"), Some("$10,404.33"));
        assert_eq!(report.value(MONTHLY_COSTS_TITLE, "Trust Fund Credit"), Some("-$0"));
    }

    #[test]
    fn test_shortfall_only_shown_when_positive() {
        let mut result = sample_result();
        let report = ResultReport::build(&result, None);
        assert_eq!(report.value(DOWN_PAYMENT_TITLE, "Shortfall"), None);

        result.down_payment.shortfall = 12_345.67;
        let report = ResultReport::build(&result, None);
        let line = report
            .section(DOWN_PAYMENT_TITLE)
            .unwrap()
            .lines()
            .iter()
            .find(|line| line.label == "Shortfall")
            .unwrap();
        assert_eq!(line.value, "$12,345.67");
        assert_eq!(line.style, LineStyle::Danger);
    }

    #[test]
    fn test_property_tax_rate_is_back_computed() {
        let result = sample_result();
        let report = ResultReport::build(&result, None);
        // 1116 * 12 / 1_488_000 * 100 = 0.9
        assert_eq!(report.value(ASSUMPTIONS_TITLE, "Property Tax Rate"), Some("0.90%"));
    }

    #[test]
    fn test_property_tax_rate_with_zero_price() {
        let mut result = sample_result();
        result.home_price = 0.0;
        assert_eq!(property_tax_rate_percent(&result), 0.0);
    }

    #[test]
    fn test_trust_fund_at_threshold_selects_credit_narrative() {
        let report = ResultReport::build(&sample_result(), Some(&input_with_trust("1000000")));
        assert_eq!(report.trust_fund_narrative, Some(TrustFundNarrative::MonthlyCredit));

        let explanation = report.section(EXPLANATION_TITLE).unwrap();
        let trust = explanation
            .paragraphs()
            .iter()
            .find(|p| p.lead.as_deref() == Some("Trust Fund Calculation:"))
            .unwrap();
        assert!(trust.text.contains("4% annual return"));
        assert!(trust.text.contains("$1,000,000"));
    }

    #[test]
    fn test_trust_fund_below_threshold_selects_down_payment_narrative() {
        let report = ResultReport::build(&sample_result(), Some(&input_with_trust("999999")));
        assert_eq!(report.trust_fund_narrative, Some(TrustFundNarrative::DownPaymentOnly));

        let explanation = report.section(EXPLANATION_TITLE).unwrap();
        let trust = explanation
            .paragraphs()
            .iter()
            .find(|p| p.lead.as_deref() == Some("Trust Fund Calculation:"))
            .unwrap();
        assert!(!trust.text.contains("4% annual return"));
        assert!(trust.text.contains("$999,999 is less than $1,000,000"));
    }

    #[test]
    fn test_no_trust_fund_narrative_without_trust_fund() {
        let mut input = input_with_trust("5000000");
        input.has_trust_fund = "no".to_string();
        let report = ResultReport::build(&sample_result(), Some(&input));

        assert_eq!(report.trust_fund_narrative, None);
        assert_eq!(report.value(ASSUMPTIONS_TITLE, "Trust Fund"), Some("None"));
    }

    #[test]
    fn test_trust_fund_derived_from_result_without_input() {
        let report = ResultReport::build(&sample_result(), None);
        // 227_600 + 22_400 = 250_000
        assert_eq!(report.trust_fund_narrative, Some(TrustFundNarrative::DownPaymentOnly));
    }

    #[test]
    fn test_assumptions_include_input_and_server_values() {
        let report = ResultReport::build(&sample_result(), Some(&input_with_trust("250000")));

        assert_eq!(report.value(ASSUMPTIONS_TITLE, "Annual Income"), Some("$200,000"));
        assert_eq!(report.value(ASSUMPTIONS_TITLE, "Total Savings"), Some("$150,000"));
        assert_eq!(report.value(ASSUMPTIONS_TITLE, "Trust Fund"), Some("$250,000"));
        assert_eq!(report.value(ASSUMPTIONS_TITLE, "City"), Some("NYC"));
        assert_eq!(report.value(ASSUMPTIONS_TITLE, "Interest Rate"), Some("7%"));
        assert_eq!(report.value(ASSUMPTIONS_TITLE, "Loan Term"), Some("30-year fixed"));
    }

    #[test]
    fn test_explanations_keep_server_order_and_end_with_note() {
        let report = ResultReport::build(&sample_result(), None);
        let paragraphs = report.section(EXPLANATION_TITLE).unwrap().paragraphs();

        assert_eq!(paragraphs[0].text, "First paragraph.");
        assert_eq!(paragraphs[1].text, "Second paragraph.");
        assert_eq!(paragraphs.last().unwrap().lead.as_deref(), Some("Note:"));
    }
}

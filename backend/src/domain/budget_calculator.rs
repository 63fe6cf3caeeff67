//! # Budget Calculator
//!
//! Validates the raw form values and turns them into a recommended home
//! price, a down payment waterfall and a monthly cost breakdown.
//!
//! ## Rules
//!
//! - Home price is a multiple of annual income, scaled by a per-city market
//!   factor and discounted by the interest rate.
//! - The mortgage is a 30-year fixed loan on the full home price.
//! - A 20% down payment is required. It is funded in order from savings (at
//!   most 20% of them), income (at most 20% of it) and the trust fund.
//! - Trust funds of $1,000,000 or more contribute only 20% of their value to
//!   the down payment, but earn a 4% annual return that is credited against
//!   the monthly payment (never more than the payment itself).

use shared::format::format_dollars;
use shared::{
    BudgetField, BudgetInput, CalculateResponse, CalculationResult, City, DownPayment,
    FieldErrors, MonthlyCosts, TrustFundChoice, TRUST_FUND_CREDIT_THRESHOLD,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

const MIN_INTEREST_RATE: f64 = 5.5;
const MAX_INTEREST_RATE: f64 = 15.0;
const INCOME_MULTIPLE: f64 = 4.0;
const LOAN_TERM_MONTHS: i32 = 360;
const DOWN_PAYMENT_RATE: f64 = 0.2;
const SAVINGS_CONTRIBUTION_RATE: f64 = 0.2;
const INCOME_CONTRIBUTION_RATE: f64 = 0.2;
const LARGE_TRUST_CONTRIBUTION_RATE: f64 = 0.2;
const INSURANCE_RATE: f64 = 0.003;
const TRUST_FUND_ANNUAL_RETURN: f64 = 0.04;

const EXPLANATIONS: [&str; 4] = [
    "This estimate is based on a calculation that takes into account your annual income, total savings, trust fund (if applicable), the selected city's cost of living, current interest rates, property taxes, homeowners insurance, and HOA fees.",
    "The recommended home price is calculated as a multiple of your annual income, adjusted for local market conditions and available funds.",
    "The down payment is calculated assuming a 20% requirement. It first uses your total savings, then considers your annual income (up to 20% of annual income), and finally uses the trust fund if applicable.",
    "The monthly costs breakdown includes the mortgage payment (principal and interest), property taxes, homeowners insurance, and HOA fees specific to the selected city.",
];

/// Market data for a supported city
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityMarket {
    /// Multiplier applied to the income-based price
    pub price_factor: f64,
    /// Annual property tax as a fraction of the home price
    pub property_tax_rate: f64,
    /// Monthly HOA fee in dollars
    pub hoa_fee: f64,
}

impl CityMarket {
    pub fn for_city(city: City) -> Self {
        let (price_factor, property_tax_rate, hoa_fee) = match city {
            City::Nyc => (2.0, 0.009, 1000.0),
            City::GreenwichCt => (1.8, 0.011, 400.0),
            City::NassauCounty => (1.6, 0.021, 300.0),
            City::RidgewoodNj => (1.5, 0.025, 250.0),
            City::SummitNj => (1.7, 0.024, 200.0),
        };
        Self { price_factor, property_tax_rate, hoa_fee }
    }
}

/// Form values after validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBudget {
    pub annual_income: u64,
    pub total_savings: u64,
    /// Zero when the borrower has no trust fund
    pub trust_fund_amount: u64,
    pub city: City,
    /// Percent, e.g. `7.5`
    pub interest_rate: f64,
}

#[derive(Clone, Default)]
pub struct BudgetCalculator;

impl BudgetCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Validate and compute in one step, as `/calculate` does
    pub fn calculate(&self, input: &BudgetInput) -> CalculateResponse {
        match self.validate(input) {
            Ok(budget) => CalculateResponse::Computed(self.compute(&budget)),
            Err(errors) => {
                info!("Rejected budget input with {} invalid field(s)", errors.len());
                CalculateResponse::Invalid { errors }
            }
        }
    }

    /// Check every field, reporting all failures together
    pub fn validate(&self, input: &BudgetInput) -> Result<ValidatedBudget, FieldErrors> {
        let mut errors = FieldErrors::new();

        let annual_income = parse_whole_dollars(&input.annual_income);
        if annual_income.is_none() {
            errors.insert(BudgetField::AnnualIncome, "Please enter a valid annual income.".to_string());
        }

        let total_savings = parse_whole_dollars(&input.total_savings);
        if total_savings.is_none() {
            errors.insert(
                BudgetField::TotalSavings,
                "Please enter a valid total savings amount.".to_string(),
            );
        }

        let mut trust_fund_amount = Some(0);
        if input.trust_fund_choice() == TrustFundChoice::Yes {
            trust_fund_amount = parse_whole_dollars(&input.trust_fund_amount);
            if trust_fund_amount.is_none() {
                errors.insert(
                    BudgetField::TrustFundAmount,
                    "Please enter a valid trust fund amount.".to_string(),
                );
            }
        }

        let city = City::from_display_name(&input.city);
        if city.is_none() {
            errors.insert(BudgetField::City, "Please select a valid city.".to_string());
        }

        let interest_rate = input
            .interest_rate
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|rate| (MIN_INTEREST_RATE..=MAX_INTEREST_RATE).contains(rate));
        if interest_rate.is_none() {
            errors.insert(
                BudgetField::InterestRate,
                "Please enter a valid interest rate between 5.5% and 15%.".to_string(),
            );
        }

        match (annual_income, total_savings, trust_fund_amount, city, interest_rate) {
            (Some(annual_income), Some(total_savings), Some(trust_fund_amount), Some(city), Some(interest_rate)) => {
                Ok(ValidatedBudget { annual_income, total_savings, trust_fund_amount, city, interest_rate })
            }
            _ => Err(errors),
        }
    }

    /// Full breakdown for a validated budget
    pub fn compute(&self, budget: &ValidatedBudget) -> CalculationResult {
        let market = CityMarket::for_city(budget.city);
        let home_price = self.home_price(budget, &market);
        let monthly_costs = self.monthly_costs(home_price, budget, &market);
        let down_payment = self.down_payment(home_price, budget);
        let limiting_factor = self.limiting_factor(budget, &down_payment);

        debug!(
            "Computed budget: price={}, down payment total={}, monthly total={}",
            home_price, down_payment.total, monthly_costs.total
        );

        CalculationResult {
            home_price,
            down_payment,
            monthly_costs,
            assumptions: self.assumptions(&market),
            explanations: EXPLANATIONS.iter().map(|text| text.to_string()).collect(),
            limiting_factor,
        }
    }

    fn home_price(&self, budget: &ValidatedBudget, market: &CityMarket) -> f64 {
        let base_price = budget.annual_income as f64 * INCOME_MULTIPLE;
        round_cents(base_price * market.price_factor * (1.0 - budget.interest_rate / 100.0))
    }

    fn monthly_costs(&self, home_price: f64, budget: &ValidatedBudget, market: &CityMarket) -> MonthlyCosts {
        let mortgage = monthly_mortgage_payment(home_price, budget.interest_rate);
        let property_tax = home_price * market.property_tax_rate / 12.0;
        let insurance = home_price * INSURANCE_RATE / 12.0;
        let hoa = market.hoa_fee;

        let mut total = mortgage + property_tax + insurance + hoa;

        let trust_fund = budget.trust_fund_amount as f64;
        let mut trust_fund_credit = 0.0;
        if trust_fund >= TRUST_FUND_CREDIT_THRESHOLD {
            let monthly_return = trust_fund * TRUST_FUND_ANNUAL_RETURN / 12.0;
            trust_fund_credit = monthly_return.min(total);
            total -= trust_fund_credit;
        }

        MonthlyCosts {
            mortgage: round_cents(mortgage),
            property_tax: round_cents(property_tax),
            insurance: round_cents(insurance),
            hoa,
            trust_fund_credit: round_cents(trust_fund_credit),
            total: round_cents(total),
        }
    }

    fn down_payment(&self, home_price: f64, budget: &ValidatedBudget) -> DownPayment {
        let savings = budget.total_savings as f64;
        let income = budget.annual_income as f64;
        let trust_fund = budget.trust_fund_amount as f64;

        let required = home_price * DOWN_PAYMENT_RATE;

        let from_savings = (savings * SAVINGS_CONTRIBUTION_RATE).min(required);
        let mut remaining = required - from_savings;

        let from_income = (income * INCOME_CONTRIBUTION_RATE).min(remaining);
        remaining -= from_income;

        let from_trust = if trust_fund < TRUST_FUND_CREDIT_THRESHOLD {
            trust_fund.min(remaining)
        } else {
            (trust_fund * LARGE_TRUST_CONTRIBUTION_RATE).min(remaining)
        };

        let total = from_savings + from_income + from_trust;
        let shortfall = (required - total).max(0.0);

        DownPayment {
            required: round_cents(required),
            from_savings: round_cents(from_savings),
            from_income: round_cents(from_income),
            from_trust: round_cents(from_trust),
            total: round_cents(total),
            shortfall: round_cents(shortfall),
            remaining_savings: round_cents(savings - from_savings),
            remaining_trust_fund: round_cents(trust_fund - from_trust),
        }
    }

    fn limiting_factor(&self, budget: &ValidatedBudget, down_payment: &DownPayment) -> String {
        if down_payment.shortfall > 0.0 {
            format!(
                "Savings: available funds cover {} of the {} down payment, leaving a {} shortfall",
                format_dollars(down_payment.total),
                format_dollars(down_payment.required),
                format_dollars(down_payment.shortfall)
            )
        } else {
            format!(
                "Income: {}x annual income, adjusted for the {} market and a {}% interest rate",
                INCOME_MULTIPLE,
                budget.city,
                budget.interest_rate
            )
        }
    }

    fn assumptions(&self, market: &CityMarket) -> BTreeMap<String, String> {
        [
            ("Down Payment Requirement", "20% of home price".to_string()),
            ("Savings Contribution", "Up to 20% of total savings".to_string()),
            ("Income Contribution", "Up to 20% of annual income".to_string()),
            ("Homeowners Insurance", "0.3% of home price annually".to_string()),
            ("HOA Fees", format!("{} per month", format_dollars(market.hoa_fee))),
            ("Loan Term", "30-year fixed (360 monthly payments)".to_string()),
            (
                "Trust Fund Return",
                "4% annually, credited monthly for trust funds of $1,000,000 or more".to_string(),
            ),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
    }
}

/// Standard amortized payment over the loan term
pub fn monthly_mortgage_payment(principal: f64, annual_rate_percent: f64) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return principal / LOAN_TERM_MONTHS as f64;
    }
    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-LOAN_TERM_MONTHS))
}

/// Non-empty and ASCII digits only
fn parse_whole_dollars(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

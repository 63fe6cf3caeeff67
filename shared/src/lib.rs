use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod chart;
pub mod format;
pub mod report;

/// Trust funds at or above this amount earn a monthly credit instead of
/// only feeding the down payment.
pub const TRUST_FUND_CREDIT_THRESHOLD: f64 = 1_000_000.0;

/// Inputs of the budget form, addressable individually for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetField {
    AnnualIncome,
    TotalSavings,
    HasTrustFund,
    TrustFundAmount,
    City,
    InterestRate,
}

impl BudgetField {
    pub const ALL: [BudgetField; 6] = [
        BudgetField::AnnualIncome,
        BudgetField::TotalSavings,
        BudgetField::HasTrustFund,
        BudgetField::TrustFundAmount,
        BudgetField::City,
        BudgetField::InterestRate,
    ];

    /// Wire name of the field, identical to its key in [`BudgetInput`] JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetField::AnnualIncome => "annualIncome",
            BudgetField::TotalSavings => "totalSavings",
            BudgetField::HasTrustFund => "hasTrustFund",
            BudgetField::TrustFundAmount => "trustFundAmount",
            BudgetField::City => "city",
            BudgetField::InterestRate => "interestRate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetField::AnnualIncome => "Annual Income ($)",
            BudgetField::TotalSavings => "Total Savings ($)",
            BudgetField::HasTrustFund => "Do you have a trust fund?",
            BudgetField::TrustFundAmount => "Trust Fund Amount ($)",
            BudgetField::City => "City",
            BudgetField::InterestRate => "Interest Rate (%)",
        }
    }
}

impl fmt::Display for BudgetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation messages keyed by the field they belong to
pub type FieldErrors = BTreeMap<BudgetField, String>;

/// Answer of the "do you have a trust fund" select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrustFundChoice {
    Yes,
    #[default]
    No,
}

impl TrustFundChoice {
    /// Anything other than `"yes"` counts as no, like the server does
    pub fn from_select_value(value: &str) -> Self {
        if value == "yes" {
            TrustFundChoice::Yes
        } else {
            TrustFundChoice::No
        }
    }

    pub fn as_select_value(&self) -> &'static str {
        match self {
            TrustFundChoice::Yes => "yes",
            TrustFundChoice::No => "no",
        }
    }

    /// Whether the trust fund amount group is visible
    pub fn shows_amount(&self) -> bool {
        matches!(self, TrustFundChoice::Yes)
    }
}

/// Locations the estimator knows market data for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Nyc,
    GreenwichCt,
    NassauCounty,
    RidgewoodNj,
    SummitNj,
}

impl City {
    pub const ALL: [City; 5] = [
        City::Nyc,
        City::GreenwichCt,
        City::NassauCounty,
        City::RidgewoodNj,
        City::SummitNj,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Nyc => "NYC",
            City::GreenwichCt => "Greenwich CT",
            City::NassauCounty => "Nassau County",
            City::RidgewoodNj => "Ridgewood NJ",
            City::SummitNj => "Summit NJ",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        City::ALL.into_iter().find(|city| city.display_name() == name)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raw form values posted to `/calculate`. Every field is the string the
/// form holds; parsing and validation happen server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    #[serde(default)]
    pub annual_income: String,
    #[serde(default)]
    pub total_savings: String,
    /// `"yes"` or `"no"`
    #[serde(default)]
    pub has_trust_fund: String,
    #[serde(default)]
    pub trust_fund_amount: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub interest_rate: String,
}

impl Default for BudgetInput {
    fn default() -> Self {
        Self {
            annual_income: String::new(),
            total_savings: String::new(),
            has_trust_fund: TrustFundChoice::No.as_select_value().to_string(),
            trust_fund_amount: String::new(),
            city: City::Nyc.display_name().to_string(),
            interest_rate: "7".to_string(),
        }
    }
}

impl BudgetInput {
    pub fn trust_fund_choice(&self) -> TrustFundChoice {
        TrustFundChoice::from_select_value(&self.has_trust_fund)
    }

    /// Trust fund amount as a whole number of dollars, if it parses
    pub fn trust_fund_amount_value(&self) -> Option<u64> {
        self.trust_fund_amount.trim().parse::<u64>().ok()
    }

    /// Current value of a single field
    pub fn value_of(&self, field: BudgetField) -> &str {
        match field {
            BudgetField::AnnualIncome => &self.annual_income,
            BudgetField::TotalSavings => &self.total_savings,
            BudgetField::HasTrustFund => &self.has_trust_fund,
            BudgetField::TrustFundAmount => &self.trust_fund_amount,
            BudgetField::City => &self.city,
            BudgetField::InterestRate => &self.interest_rate,
        }
    }

    /// Replace a single field, returning the updated input
    pub fn with_value(mut self, field: BudgetField, value: String) -> Self {
        match field {
            BudgetField::AnnualIncome => self.annual_income = value,
            BudgetField::TotalSavings => self.total_savings = value,
            BudgetField::HasTrustFund => self.has_trust_fund = value,
            BudgetField::TrustFundAmount => self.trust_fund_amount = value,
            BudgetField::City => self.city = value,
            BudgetField::InterestRate => self.interest_rate = value,
        }
        self
    }
}

/// How the required down payment is covered
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DownPayment {
    pub required: f64,
    pub from_savings: f64,
    pub from_income: f64,
    pub from_trust: f64,
    pub total: f64,
    pub shortfall: f64,
    #[serde(default)]
    pub remaining_savings: f64,
    #[serde(default)]
    pub remaining_trust_fund: f64,
}

/// Monthly cost components; `total` already has the trust fund credit applied
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyCosts {
    pub mortgage: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub hoa: f64,
    pub trust_fund_credit: f64,
    pub total: f64,
}

/// Breakdown returned by `/calculate`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub home_price: f64,
    pub down_payment: DownPayment,
    pub monthly_costs: MonthlyCosts,
    #[serde(default)]
    pub assumptions: BTreeMap<String, String>,
    #[serde(default)]
    pub explanations: Vec<String>,
    /// Why the recommended price is what it is (income vs. savings)
    #[serde(default, alias = "priceDetermination")]
    pub limiting_factor: String,
}

/// Body of a `/calculate` response: either the breakdown or per-field errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculateResponse {
    Invalid { errors: FieldErrors },
    Computed(CalculationResult),
}

/// A named, persisted calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Server-assigned identifier (UUID v4)
    pub id: String,
    pub name: String,
    /// RFC 3339 timestamp of when the scenario was saved
    pub saved_at: String,
    /// Form values the result was computed from, when the client sent them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<BudgetInput>,
    #[serde(flatten)]
    pub result: CalculationResult,
}

/// Scenarios keyed by id, as returned by `GET /scenarios`
pub type ScenarioMap = BTreeMap<String, Scenario>;

/// Body of `POST /scenarios`: a calculation result plus its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveScenarioRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<BudgetInput>,
    #[serde(flatten)]
    pub result: CalculationResult,
}

/// Acknowledgement for scenario mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
}

/// Log line forwarded from the browser to the server log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

use {
    crate::{config::DF, models::DemandDataset, utils::round_units},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Why a simulation form could not produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    InvalidPrice,
    InvalidPriceOrCost,
    ZeroBaselinePrice,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidPrice => write!(f, "new price is not a finite number"),
            InputError::InvalidPriceOrCost => {
                write!(f, "new price or unit cost is not a finite number")
            }
            InputError::ZeroBaselinePrice => write!(f, "baseline price is zero"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parses a user-typed amount. Whitespace around the number is allowed.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Last observed price and demand: the reference point of every what-if.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub current_price: f64,
    pub current_demand: f64,
}

impl Baseline {
    pub fn from_dataset(dataset: &DemandDataset) -> Self {
        let last = dataset.last();
        Self {
            current_price: last.price,
            current_demand: last.demand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceImpact {
    pub new_price: f64,
    pub new_demand: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitImpact {
    pub new_price: f64,
    pub unit_cost: f64,
    pub new_demand: i64,
    pub profit: f64,
}

pub struct ScenarioSimulator;

impl ScenarioSimulator {
    /// Linear elasticity of one: demand moves by the opposite of the relative price change.
    pub fn price_impact(baseline: &Baseline, new_price: f64) -> Result<PriceImpact, InputError> {
        if baseline.current_price.abs() <= f64::EPSILON {
            return Err(InputError::ZeroBaselinePrice);
        }
        let relative_change = (new_price - baseline.current_price) / baseline.current_price;
        let new_demand = round_units(baseline.current_demand * (1.0 - relative_change));

        if DF.log_simulation {
            log::info!(
                "Price impact: {} -> {} moves demand {} -> {}",
                baseline.current_price,
                new_price,
                baseline.current_demand,
                new_demand
            );
        }
        Ok(PriceImpact {
            new_price,
            new_demand,
        })
    }

    pub fn profit_impact(
        baseline: &Baseline,
        new_price: f64,
        unit_cost: f64,
    ) -> Result<ProfitImpact, InputError> {
        let PriceImpact { new_demand, .. } = Self::price_impact(baseline, new_price)?;
        let profit = (new_price - unit_cost) * new_demand as f64;

        if DF.log_simulation {
            log::info!("Profit impact: margin {} x {} units = {}", new_price - unit_cost, new_demand, profit);
        }
        Ok(ProfitImpact {
            new_price,
            unit_cost,
            new_demand,
            profit,
        })
    }

    /// Price form entry point: raw field text in, result or field-specific error out.
    pub fn price_from_input(baseline: &Baseline, price_text: &str) -> Result<PriceImpact, InputError> {
        let new_price = parse_amount(price_text).ok_or(InputError::InvalidPrice)?;
        Self::price_impact(baseline, new_price)
    }

    pub fn profit_from_input(
        baseline: &Baseline,
        price_text: &str,
        cost_text: &str,
    ) -> Result<ProfitImpact, InputError> {
        let (Some(new_price), Some(unit_cost)) = (parse_amount(price_text), parse_amount(cost_text))
        else {
            return Err(InputError::InvalidPriceOrCost);
        };
        Self::profit_impact(baseline, new_price, unit_cost)
    }
}

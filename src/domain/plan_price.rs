/// Monthly price in USD. Must be a finite number strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PlanPrice(f64);

impl PlanPrice {
    pub fn parse(price: f64) -> Result<PlanPrice, String> {
        if !price.is_finite() || price <= 0.0 {
            return Err(format!("{} is not a valid plan price", price));
        }

        Ok(Self(price))
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

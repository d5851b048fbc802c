#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum PlanStatus {
    Active,
    Inactive,
}

impl PlanStatus {
    pub fn toggled(&self) -> PlanStatus {
        match self {
            PlanStatus::Active => PlanStatus::Inactive,
            PlanStatus::Inactive => PlanStatus::Active,
        }
    }

    pub fn parse(status: String) -> Result<PlanStatus, String> {
        match status.as_str() {
            "Active" => Ok(PlanStatus::Active),
            "Inactive" => Ok(PlanStatus::Inactive),
            _ => Err(format!("{} is not a valid plan status", status)),
        }
    }
}

impl AsRef<str> for PlanStatus {
    fn as_ref(&self) -> &str {
        match self {
            PlanStatus::Active => "Active",
            PlanStatus::Inactive => "Inactive",
        }
    }
}

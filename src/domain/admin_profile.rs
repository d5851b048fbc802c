/// The account information shown on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AdminProfile {
    pub username: String,
    pub email: String,
    pub billing_email: String,
}

impl AdminProfile {
    /// Every field of the profile form is required.
    pub fn parse(
        username: String,
        email: String,
        billing_email: String,
    ) -> Result<AdminProfile, String> {
        if username.trim().is_empty() || email.trim().is_empty() || billing_email.trim().is_empty()
        {
            return Err(String::from("All profile fields are required"));
        }

        Ok(AdminProfile {
            username,
            email,
            billing_email,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForActivity {
    pub activity_name: String,
    pub email: String,
}

impl SignupForActivity {
    pub fn confirmation(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterFromActivity {
    pub activity_name: String,
    pub email: String,
}

impl UnregisterFromActivity {
    pub fn confirmation(&self) -> String {
        format!("Unregistered {} from {}", self.email, self.activity_name)
    }
}

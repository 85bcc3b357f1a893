/// The signed-in user. There is no credential store behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub email: &'static str
}

const MOCK_USER: User = User { email: "demo@app.local" };

pub fn current_user() -> User {
    MOCK_USER
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRecipient {
    pub user_id: String,
    pub email: String,
}

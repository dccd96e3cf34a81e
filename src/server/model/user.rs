/// Parameters for upserting a user during the OAuth callback.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Subject identifier from the identity provider.
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    /// Grants the admin role. Never revokes: the role column is left alone
    /// when this is false and the user already exists.
    pub make_admin: bool,
}

use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AuthenticatedTenantId(Uuid);

impl AuthenticatedTenantId {
    pub fn new(value: &str) -> Result<Self, String> {
        let parsed =
            Uuid::parse_str(value).map_err(|_| "tenant_id must be a valid UUID".to_string())?;
        Ok(Self(parsed))
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

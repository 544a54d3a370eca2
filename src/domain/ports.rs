use crate::domain::model::{AccessSecret, DEFAULT_ACCESS_CODE};

pub trait ConfigProvider: Send + Sync {
    /// Explicitly configured code, if any source supplied one.
    fn access_code(&self) -> Option<&str>;

    fn access_secret(&self) -> AccessSecret {
        AccessSecret::new(self.access_code().unwrap_or(DEFAULT_ACCESS_CODE))
    }
}

use crate::config::{non_empty, ACCESS_CODE_ENV};
use crate::core::ConfigProvider;
use std::env;

#[derive(Clone, Default)]
pub struct LambdaConfig {
    pub access_code: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            access_code: non_empty(lookup(ACCESS_CODE_ENV)),
        }
    }
}

impl ConfigProvider for LambdaConfig {
    fn access_code(&self) -> Option<&str> {
        self.access_code.as_deref()
    }
}

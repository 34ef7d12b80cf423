use serde::{Deserialize, Serialize};
use tracing::info;

use super::dto::PublicUser;
use super::password::{hash_password, parse_hash, verify_password};
use crate::config::DemoAccountConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub location: String,
}

/// The single account the dashboard accepts.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    password_hash: String,
    pub profile: Profile,
}

impl DemoAccount {
    pub fn from_config(cfg: &DemoAccountConfig) -> anyhow::Result<Self> {
        let password_hash = match &cfg.password_hash {
            Some(hash) => {
                parse_hash(hash)?;
                hash.clone()
            }
            None => {
                info!("hashing built-in demo password");
                hash_password(&cfg.password)?
            }
        };

        Ok(Self {
            password_hash,
            profile: Profile {
                name: "Rohit Sharma".into(),
                email: cfg.email.clone(),
                role: "Frontend Developer".into(),
                department: "Product Engineering".into(),
                location: "Bengaluru, IN".into(),
            },
        })
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    /// Email must match exactly after trimming; the password is checked against the argon2 hash.
    pub fn check(&self, email: &str, password: &str) -> anyhow::Result<bool> {
        if email.trim() != self.email() {
            return Ok(false);
        }
        verify_password(password, &self.password_hash)
    }

    pub fn public_user(&self) -> PublicUser {
        PublicUser {
            name: self.profile.name.clone(),
            email: self.profile.email.clone(),
            role: self.profile.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> DemoAccountConfig {
        DemoAccountConfig {
            email: "admin@starter.com".into(),
            password: "Admin@123".into(),
            password_hash: None,
        }
    }

    #[test]
    fn accepts_demo_credentials() {
        let account = DemoAccount::from_config(&cfg()).unwrap();
        assert!(account.check("admin@starter.com", "Admin@123").unwrap());
        assert!(account.check("  admin@starter.com ", "Admin@123").unwrap());
    }

    #[test]
    fn rejects_anything_else() {
        let account = DemoAccount::from_config(&cfg()).unwrap();
        assert!(!account.check("admin@starter.com", "Admin@1234").unwrap());
        assert!(!account.check("ADMIN@starter.com", "Admin@123").unwrap());
        assert!(!account.check("", "").unwrap());
    }

    #[test]
    fn uses_configured_hash() {
        let hash = hash_password("s3cret!").unwrap();
        let account = DemoAccount::from_config(&DemoAccountConfig {
            password_hash: Some(hash),
            ..cfg()
        })
        .unwrap();
        assert!(account.check("admin@starter.com", "s3cret!").unwrap());
        assert!(!account.check("admin@starter.com", "Admin@123").unwrap());
    }

    #[test]
    fn malformed_hash_fails_at_startup() {
        let result = DemoAccount::from_config(&DemoAccountConfig {
            password_hash: Some("plaintext".into()),
            ..cfg()
        });
        assert!(result.is_err());
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Auxiliary infrastructure services beyond a primary database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Mailpit,
    Minio,
    Rabbitmq,
    Adminer,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] =
        [ServiceKind::Mailpit, ServiceKind::Minio, ServiceKind::Rabbitmq, ServiceKind::Adminer];

    pub fn slug(&self) -> &'static str {
        match self {
            ServiceKind::Mailpit => "mailpit",
            ServiceKind::Minio => "minio",
            ServiceKind::Rabbitmq => "rabbitmq",
            ServiceKind::Adminer => "adminer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Mailpit => "Mailpit",
            ServiceKind::Minio => "MinIO",
            ServiceKind::Rabbitmq => "RabbitMQ",
            ServiceKind::Adminer => "Adminer",
        }
    }

    /// Short purpose tag used in prompts and the assistant guide.
    pub fn purpose(&self) -> &'static str {
        match self {
            ServiceKind::Mailpit => "email testing",
            ServiceKind::Minio => "S3 storage",
            ServiceKind::Rabbitmq => "message queue",
            ServiceKind::Adminer => "DB admin",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ServiceKind> {
        ServiceKind::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Canonical compose service name. Matches the slug for every kind.
    pub fn container_name(&self) -> &'static str {
        self.slug()
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_roundtrip() {
        for svc in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_slug(svc.slug()), Some(svc));
        }
    }
}

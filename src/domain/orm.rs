use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::StackKind;

/// ORM choice. Mutually exclusive; the PHP stacks imply theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrmKind {
    Prisma,
    Doctrine,
    Eloquent,
    None,
}

impl OrmKind {
    pub const ALL: [OrmKind; 4] =
        [OrmKind::Prisma, OrmKind::Doctrine, OrmKind::Eloquent, OrmKind::None];

    pub fn slug(&self) -> &'static str {
        match self {
            OrmKind::Prisma => "prisma",
            OrmKind::Doctrine => "doctrine",
            OrmKind::Eloquent => "eloquent",
            OrmKind::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrmKind::Prisma => "Prisma",
            OrmKind::Doctrine => "Doctrine",
            OrmKind::Eloquent => "Eloquent",
            OrmKind::None => "none",
        }
    }

    pub fn from_slug(slug: &str) -> Option<OrmKind> {
        match slug {
            "prisma" => Some(OrmKind::Prisma),
            "doctrine" => Some(OrmKind::Doctrine),
            "eloquent" => Some(OrmKind::Eloquent),
            "none" => Some(OrmKind::None),
            _ => None,
        }
    }

    /// ORM forced by the stack, if any (Symfony → Doctrine, Laravel → Eloquent).
    pub fn implied_by(stack: StackKind) -> Option<OrmKind> {
        match stack {
            StackKind::Symfony => Some(OrmKind::Doctrine),
            StackKind::Laravel => Some(OrmKind::Eloquent),
            _ => None,
        }
    }
}

impl fmt::Display for OrmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn php_stacks_imply_their_orm() {
        assert_eq!(OrmKind::implied_by(StackKind::Symfony), Some(OrmKind::Doctrine));
        assert_eq!(OrmKind::implied_by(StackKind::Laravel), Some(OrmKind::Eloquent));
        assert_eq!(OrmKind::implied_by(StackKind::Nextjs), None);
    }
}

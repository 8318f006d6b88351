use serde::{Deserialize, Serialize};

/// Commercial resources managed by the admin tool.
///
/// The code doubles as the first path segment of every server route
/// (`/campanha/...`, `/parceiro/...`, `/tabloide/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Campanha,
    Parceiro,
    Tabloide,
}

impl ResourceKind {
    /// Route segment of the resource
    pub fn code(&self) -> &'static str {
        match self {
            ResourceKind::Campanha => "campanha",
            ResourceKind::Parceiro => "parceiro",
            ResourceKind::Tabloide => "tabloide",
        }
    }

    /// Human readable name shown in dialogs
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Campanha => "Campanha",
            ResourceKind::Parceiro => "Parceiro",
            ResourceKind::Tabloide => "Tabloide",
        }
    }

    /// Whether the resource owns a product table (`/{code}/{id}/produtos`)
    pub fn has_products(&self) -> bool {
        matches!(self, ResourceKind::Campanha | ResourceKind::Tabloide)
    }

    pub fn all() -> Vec<ResourceKind> {
        vec![
            ResourceKind::Campanha,
            ResourceKind::Parceiro,
            ResourceKind::Tabloide,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "campanha" => Some(ResourceKind::Campanha),
            "parceiro" => Some(ResourceKind::Parceiro),
            "tabloide" => Some(ResourceKind::Tabloide),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for kind in ResourceKind::all() {
            assert_eq!(ResourceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ResourceKind::from_code("produtos"), None);
    }

    #[test]
    fn test_only_campanha_and_tabloide_have_products() {
        assert!(ResourceKind::Campanha.has_products());
        assert!(ResourceKind::Tabloide.has_products());
        assert!(!ResourceKind::Parceiro.has_products());
    }
}

//! Server route building for form submissions and the GTIN check endpoint.

use crate::enums::ResourceKind;

/// Form actions available on a product table page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    Update,
    Add,
    Delete,
    ValidateGtins,
}

impl ProductAction {
    fn segment(&self) -> &'static str {
        match self {
            ProductAction::Update => "atualizar",
            ProductAction::Add => "adicionar",
            ProductAction::Delete => "deletar",
            ProductAction::ValidateGtins => "validar_gtins",
        }
    }
}

/// The campaign/flyer whose products a page is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    pub kind: ResourceKind,
    pub id: String,
}

impl ProductPage {
    pub fn new(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Extract the owning entity from a page path such as
    /// `/campanha/123/produtos` or `/tabloide/45/produtos/`.
    pub fn from_path(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        segments.windows(3).find_map(|w| {
            let kind = ResourceKind::from_code(w[0]).filter(|k| k.has_products())?;
            let is_numeric = !w[1].is_empty() && w[1].chars().all(|c| c.is_ascii_digit());
            (is_numeric && w[2] == "produtos").then(|| ProductPage::new(kind, w[1]))
        })
    }

    /// Path of one of the page's form/API actions
    pub fn action(&self, action: ProductAction) -> String {
        format!(
            "/{}/{}/produtos/{}",
            self.kind.code(),
            self.id,
            action.segment()
        )
    }

    /// Substitute `{id}` in a configured URL template
    pub fn fill_template(&self, template: &str) -> String {
        template.replace("{id}", &self.id)
    }
}

/// `/{resource}/editar/{id}`
pub fn edit_url(kind: ResourceKind, id: &str) -> String {
    format!("/{}/editar/{}", kind.code(), id)
}

/// `/{resource}/deletar/{id}`
pub fn delete_url(kind: ResourceKind, id: &str) -> String {
    format!("/{}/deletar/{}", kind.code(), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            ProductPage::from_path("/campanha/123/produtos"),
            Some(ProductPage::new(ResourceKind::Campanha, "123"))
        );
        assert_eq!(
            ProductPage::from_path("/app/tabloide/45/produtos/"),
            Some(ProductPage::new(ResourceKind::Tabloide, "45"))
        );
    }

    #[test]
    fn test_from_path_rejects_other_pages() {
        assert_eq!(ProductPage::from_path("/campanha/abc/produtos"), None);
        assert_eq!(ProductPage::from_path("/parceiro/1/produtos"), None);
        assert_eq!(ProductPage::from_path("/campanha/12"), None);
        assert_eq!(ProductPage::from_path("/"), None);
    }

    #[test]
    fn test_actions_and_template() {
        let page = ProductPage::new(ResourceKind::Tabloide, "7");
        assert_eq!(
            page.action(ProductAction::ValidateGtins),
            "/tabloide/7/produtos/validar_gtins"
        );
        assert_eq!(page.action(ProductAction::Delete), "/tabloide/7/produtos/deletar");
        assert_eq!(
            page.fill_template("/tabloide/{id}/produtos/validar_gtins"),
            "/tabloide/7/produtos/validar_gtins"
        );
    }

    #[test]
    fn test_resource_routes() {
        assert_eq!(edit_url(ResourceKind::Parceiro, "3"), "/parceiro/editar/3");
        assert_eq!(delete_url(ResourceKind::Campanha, "9"), "/campanha/deletar/9");
    }
}

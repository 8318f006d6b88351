use crate::enums::ResourceKind;
use crate::shared::error::{TableError, TableResult};
use crate::shared::routes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Form field of the edit dialog and the record value that prefills it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityField {
    pub key: String,
    pub label: String,
    #[serde(default = "default_input_type")]
    pub input_type: String,
}

fn default_input_type() -> String {
    "text".to_string()
}

impl EntityField {
    pub fn new(key: &str, label: &str, input_type: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            input_type: input_type.to_string(),
        }
    }

    /// `id` attribute used by the server templates (`nome_edit`, ...)
    pub fn input_id(&self) -> String {
        format!("{}_edit", self.key)
    }
}

/// Row of a campaign/partner/flyer listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl EntityRecord {
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }
}

/// Edit/delete dialogs of one list page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityListConfig {
    pub kind: ResourceKind,
    /// Field the user has to retype to confirm a delete
    pub name_field: String,
    pub edit_fields: Vec<EntityField>,
    /// Extra form field the delete route reads (e.g. `confirmation_password`)
    #[serde(default)]
    pub confirmation_field: Option<String>,
}

impl EntityListConfig {
    pub fn campanha() -> Self {
        Self {
            kind: ResourceKind::Campanha,
            name_field: "nome".to_string(),
            confirmation_field: None,
            edit_fields: vec![
                EntityField::new("nome", "Nome", "text"),
                EntityField::new("data_inicio", "Data Início", "date"),
                EntityField::new("data_fim", "Data Fim", "date"),
                EntityField::new("parceiro_id", "Parceiro", "number"),
            ],
        }
    }

    pub fn tabloide() -> Self {
        Self {
            kind: ResourceKind::Tabloide,
            name_field: "nome".to_string(),
            confirmation_field: None,
            edit_fields: vec![
                EntityField::new("nome", "Nome", "text"),
                EntityField::new("data_inicio", "Data Início", "date"),
                EntityField::new("data_fim", "Data Fim", "date"),
            ],
        }
    }

    pub fn parceiro() -> Self {
        Self {
            kind: ResourceKind::Parceiro,
            name_field: "nome_ajustado".to_string(),
            confirmation_field: Some("confirmation_password".to_string()),
            edit_fields: vec![
                EntityField::new("nome_ajustado", "Nome Ajustado", "text"),
                EntityField::new("cnpj", "CNPJ", "text"),
                EntityField::new("nome_fantasia", "Nome Fantasia", "text"),
                EntityField::new("razao_social", "Razão Social", "text"),
                EntityField::new("tipo", "Tipo", "text"),
                EntityField::new("gestor", "Gestor", "text"),
                EntityField::new("email_gestor", "E-mail do Gestor", "email"),
                EntityField::new("telefone_gestor", "Telefone do Gestor", "tel"),
                EntityField::new("data_entrada", "Data Entrada", "date"),
                EntityField::new("data_saida", "Data Saída", "date"),
            ],
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        ResourceKind::from_code(name).map(|kind| match kind {
            ResourceKind::Campanha => Self::campanha(),
            ResourceKind::Parceiro => Self::parceiro(),
            ResourceKind::Tabloide => Self::tabloide(),
        })
    }

    pub fn from_json(json: &str) -> TableResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| TableError::config("configuração inválida").with_details(e.to_string()))
    }

    pub fn edit_action(&self, record: &EntityRecord) -> String {
        routes::edit_url(self.kind, &record.id)
    }

    pub fn delete_action(&self, record: &EntityRecord) -> String {
        routes::delete_url(self.kind, &record.id)
    }

    pub fn display_name<'a>(&self, record: &'a EntityRecord) -> &'a str {
        record.value(&self.name_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EntityRecord {
        EntityRecord {
            id: "12".into(),
            values: BTreeMap::from([
                ("nome_ajustado".to_string(), "Lab Vida".to_string()),
                ("cnpj".to_string(), "00.000.000/0001-00".to_string()),
            ]),
        }
    }

    #[test]
    fn test_actions() {
        let config = EntityListConfig::parceiro();
        assert_eq!(config.edit_action(&record()), "/parceiro/editar/12");
        assert_eq!(config.delete_action(&record()), "/parceiro/deletar/12");
        assert_eq!(config.display_name(&record()), "Lab Vida");
    }

    #[test]
    fn test_presets() {
        for kind in ResourceKind::all() {
            let config = EntityListConfig::preset(kind.code()).unwrap();
            assert_eq!(config.kind, kind);
            assert!(config.edit_fields.iter().any(|f| f.key == config.name_field));
        }
        assert!(EntityListConfig::preset("produtos").is_none());
    }

    #[test]
    fn test_delete_confirmation_field() {
        assert_eq!(
            EntityListConfig::parceiro().confirmation_field.as_deref(),
            Some("confirmation_password")
        );
        assert!(EntityListConfig::campanha().confirmation_field.is_none());

        let json = r#"{"kind":"tabloide","name_field":"nome","edit_fields":[]}"#;
        assert!(EntityListConfig::from_json(json).unwrap().confirmation_field.is_none());
    }

    #[test]
    fn test_missing_value_is_empty() {
        assert_eq!(record().value("gestor"), "");
        assert_eq!(EntityField::new("data_fim", "Data Fim", "date").input_id(), "data_fim_edit");
    }
}

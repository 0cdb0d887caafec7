//! YAML rendering of the composition document via `serde_yaml`.

use stackup_core::{
    application::{ApplicationError, ports::CompositionSerializer},
    domain::CompositionDocument,
    error::StackupResult,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSerializer;

impl YamlSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl CompositionSerializer for YamlSerializer {
    fn serialize(&self, document: &CompositionDocument) -> StackupResult<String> {
        serde_yaml::to_string(document).map_err(|e| {
            ApplicationError::SerializationFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackup_core::domain::{
        ApiKind, DatabaseKind, FrontBackKind, Selection, ServiceComposer,
    };

    fn render(db: DatabaseKind, api: ApiKind, fb: FrontBackKind) -> String {
        let selection = Selection::builder()
            .project_name("demo")
            .database(db)
            .api(api)
            .front_back(fb)
            .build()
            .unwrap();
        YamlSerializer::new()
            .serialize(&ServiceComposer::compose(&selection))
            .unwrap()
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in:\n{haystack}"))
    }

    #[test]
    fn top_level_keys_in_order() {
        let yaml = render(DatabaseKind::Mysql, ApiKind::Express, FrontBackKind::React);

        assert!(yaml.starts_with("version: '3.7'\n"), "{yaml}");
        assert!(position(&yaml, "\nservices:") < position(&yaml, "\nnetworks:"));
        assert!(yaml.contains("networks:\n  back-network:\n    driver: bridge\n"));
    }

    #[test]
    fn services_emitted_web_api_db() {
        let yaml = render(DatabaseKind::Postgresql, ApiKind::Flask, FrontBackKind::Vue);

        let web = position(&yaml, "\n  web:\n");
        let api = position(&yaml, "\n  api:\n");
        let db = position(&yaml, "\n  db:\n");
        assert!(web < api && api < db);
        let compact = yaml.lines().map(str::trim).collect::<Vec<_>>().join("\n");
        assert!(compact.contains("depends_on:\n- api"));
        assert!(compact.contains("depends_on:\n- db"));
        assert!(yaml.contains("5432:5432"));
        assert!(yaml.contains("POSTGRES_DB: my-database"));
    }

    #[test]
    fn no_depends_on_when_single_service() {
        let yaml = render(DatabaseKind::None, ApiKind::None, FrontBackKind::React);

        assert!(!yaml.contains("depends_on"));
        assert!(!yaml.contains("environment"));
        assert!(yaml.contains("image: demo-react-web"));
        assert!(yaml.contains("./my-react-app:/app/web"));
    }

    #[test]
    fn cocasus_web_has_no_volumes() {
        let yaml = render(DatabaseKind::None, ApiKind::None, FrontBackKind::Cocasus);
        assert!(!yaml.contains("volumes"));
        assert!(yaml.contains("context: cocasus-app"));
    }
}

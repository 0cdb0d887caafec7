//! Service composer: Selection → CompositionDocument.
//!
//! Pure and deterministic. Each service depends on at most the adjacent
//! downstream tier: `web → api → db`, with `web → db` only when there is no
//! api.

use crate::domain::{
    capabilities::{self, API_MOUNT_POINT, API_PORT, DB_DATA_DIR, DB_DIR, WEB_MOUNT_POINT, WEB_PORT},
    entities::{
        composition::{CompositionDocument, Service},
        selection::Selection,
    },
    value_objects::Tier,
};

pub struct ServiceComposer;

impl ServiceComposer {
    pub fn compose(selection: &Selection) -> CompositionDocument {
        let mut doc = CompositionDocument::new();
        let project = selection.project_name();

        // web
        if let Some(def) = capabilities::web_def(selection.front_back()) {
            let name = format!("{project}-{}-web", selection.front_back());
            let mut web = Service::new(def.source_dir, name, WEB_PORT);
            if def.mount_source {
                web = web.with_volume(&bind_source(def.source_dir), WEB_MOUNT_POINT);
            }
            doc.services.insert(Tier::Web, web);
        }

        // api
        if let Some(def) = capabilities::api_def(selection.api()) {
            let name = format!("{project}-{}-api", selection.api());
            let mut api = Service::new(def.source_dir, name, API_PORT);
            if def.mount_source {
                api = api.with_volume(&bind_source(def.source_dir), API_MOUNT_POINT);
            }
            doc.services.insert(Tier::Api, api);
            link(&mut doc, Tier::Web, Tier::Api);
        }

        // db
        if let (Some(def), Some(creds)) = (
            capabilities::database_def(selection.database()),
            selection.credentials(),
        ) {
            let data_dir = format!("{DB_DIR}/{DB_DATA_DIR}");
            let db = Service::new(DB_DIR, format!("{project}-db"), def.port)
                .with_volume(&bind_source(&data_dir), def.data_mount)
                .with_env(def.env.root_password, &creds.root_password)
                .with_env(def.env.name, &creds.name)
                .with_env(def.env.user, &creds.user)
                .with_env(def.env.password, &creds.password);
            doc.services.insert(Tier::Db, db);

            if doc.services.contains(Tier::Api) {
                link(&mut doc, Tier::Api, Tier::Db);
            } else {
                link(&mut doc, Tier::Web, Tier::Db);
            }
        }

        doc
    }
}

/// `./<dir>` as a compose bind-mount source.
fn bind_source(dir: &str) -> String {
    format!("./{dir}")
}

/// Make `from` depend on `to`, unless `from` is absent or already depends
/// on something.
fn link(doc: &mut CompositionDocument, from: Tier, to: Tier) {
    if let Some(service) = doc.services.get_mut(from) {
        if service.depends_on.is_none() {
            service.depends_on = Some(vec![to]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::selection::DatabaseCredentials,
        value_objects::{ApiKind, DatabaseKind, FrontBackKind},
    };

    fn selection(db: DatabaseKind, api: ApiKind, fb: FrontBackKind) -> Selection {
        Selection::builder()
            .project_name("demo")
            .database(db)
            .api(api)
            .front_back(fb)
            .build()
            .unwrap()
    }

    fn all_selections() -> impl Iterator<Item = Selection> {
        DatabaseKind::ALL.into_iter().flat_map(|db| {
            ApiKind::ALL.into_iter().flat_map(move |api| {
                FrontBackKind::ALL
                    .into_iter()
                    .map(move |fb| selection(db, api, fb))
            })
        })
    }

    #[test]
    fn scenario_full_stack_chains_web_api_db() {
        let doc = ServiceComposer::compose(&selection(
            DatabaseKind::Mysql,
            ApiKind::Express,
            FrontBackKind::React,
        ));
        let web = doc.service(Tier::Web).unwrap();
        let api = doc.service(Tier::Api).unwrap();
        let db = doc.service(Tier::Db).unwrap();

        assert_eq!(api.depends_on(), &[Tier::Db]);
        assert_eq!(web.depends_on(), &[Tier::Api]);
        assert_eq!(db.image, "demo-db");
        assert_eq!(api.image, "demo-express-api");
        assert_eq!(web.image, "demo-react-web");
        assert_eq!(web.container_name, "demo-react-web");
        assert_eq!(web.build.context, "my-react-app");
        assert_eq!(
            web.volumes.as_deref(),
            Some(&["./my-react-app:/app/web".to_string()][..])
        );
        assert_eq!(
            api.volumes.as_deref(),
            Some(&["./express-api:/app/api".to_string()][..])
        );
    }

    #[test]
    fn scenario_web_only_has_no_depends_on() {
        let doc = ServiceComposer::compose(&selection(
            DatabaseKind::None,
            ApiKind::None,
            FrontBackKind::Vue,
        ));
        assert_eq!(doc.services.len(), 1);
        let web = doc.service(Tier::Web).unwrap();
        assert!(web.depends_on.is_none());
        assert_eq!(web.build.context, "my-vue-app");
    }

    #[test]
    fn scenario_cocasus_web_on_postgres() {
        let doc = ServiceComposer::compose(&selection(
            DatabaseKind::Postgresql,
            ApiKind::None,
            FrontBackKind::Cocasus,
        ));
        let web = doc.service(Tier::Web).unwrap();
        assert!(doc.service(Tier::Api).is_none());
        assert!(doc.service(Tier::Db).is_some());
        assert_eq!(web.depends_on(), &[Tier::Db]);
        assert!(web.volumes.is_none());
        assert_eq!(web.build.context, "cocasus-app");
    }

    #[test]
    fn no_database_means_no_db_service_and_no_environment() {
        for sel in all_selections().filter(|s| s.database().is_none()) {
            let doc = ServiceComposer::compose(&sel);
            assert!(doc.service(Tier::Db).is_none());
            for (_, svc) in doc.services.iter() {
                assert!(svc.environment.is_none());
                assert!(!svc.depends_on().contains(&Tier::Db));
            }
        }
    }

    #[test]
    fn mysql_credentials_copied_verbatim() {
        let sel = Selection::builder()
            .project_name("shop")
            .database(DatabaseKind::Mysql)
            .credentials(DatabaseCredentials::new("orders", "bob", "pw", "rootpw"))
            .build()
            .unwrap();
        let doc = ServiceComposer::compose(&sel);
        let env = doc.service(Tier::Db).unwrap().environment.clone().unwrap();
        assert_eq!(env.len(), 4);
        assert_eq!(env["MYSQL_ROOT_PASSWORD"], "rootpw");
        assert_eq!(env["MYSQL_DATABASE"], "orders");
        assert_eq!(env["MYSQL_USER"], "bob");
        assert_eq!(env["MYSQL_PASSWORD"], "pw");
    }

    #[test]
    fn postgres_credentials_copied_verbatim() {
        let sel = Selection::builder()
            .database(DatabaseKind::Postgresql)
            .credentials(DatabaseCredentials::new("orders", "bob", "pw", "rootpw"))
            .build()
            .unwrap();
        let db = ServiceComposer::compose(&sel).service(Tier::Db).cloned().unwrap();
        let env = db.environment.unwrap();
        assert_eq!(env["POSTGRES_PASSWORD"], "pw");
        assert_eq!(env["POSTGRES_USER"], "bob");
        assert_eq!(env["POSTGRES_DB"], "orders");
        assert_eq!(env["POSTGRES_ROOT_PASSWORD"], "rootpw");
        assert_eq!(
            db.volumes.as_deref(),
            Some(&["./db/data:/var/lib/postgresql/data".to_string()][..])
        );
    }

    #[test]
    fn dependency_edges_follow_adjacent_tier() {
        for sel in all_selections() {
            let doc = ServiceComposer::compose(&sel);
            let has = |t| doc.services.contains(t);

            if let Some(api) = doc.service(Tier::Api) {
                let expected: &[Tier] = if has(Tier::Db) { &[Tier::Db] } else { &[] };
                assert_eq!(api.depends_on(), expected, "{sel}");
            }
            if let Some(web) = doc.service(Tier::Web) {
                let expected: &[Tier] = if has(Tier::Api) {
                    &[Tier::Api]
                } else if has(Tier::Db) {
                    &[Tier::Db]
                } else {
                    &[]
                };
                assert_eq!(web.depends_on(), expected, "{sel}");
            }
            if let Some(db) = doc.service(Tier::Db) {
                assert!(db.depends_on.is_none());
            }
        }
    }

    #[test]
    fn ports_are_fixed_per_tier() {
        for sel in all_selections() {
            let doc = ServiceComposer::compose(&sel);
            if let Some(web) = doc.service(Tier::Web) {
                assert_eq!(web.ports, vec!["8080:8080"]);
            }
            if let Some(api) = doc.service(Tier::Api) {
                assert_eq!(api.ports, vec!["5000:5000"]);
            }
            if let Some(db) = doc.service(Tier::Db) {
                let expected = match sel.database() {
                    DatabaseKind::Mysql => "3306:3306",
                    DatabaseKind::Postgresql => "5432:5432",
                    DatabaseKind::None => unreachable!(),
                };
                assert_eq!(db.ports, vec![expected]);
            }
        }
    }

    #[test]
    fn composition_is_deterministic() {
        for sel in all_selections() {
            assert_eq!(ServiceComposer::compose(&sel), ServiceComposer::compose(&sel));
        }
    }

    #[test]
    fn every_service_joins_back_network() {
        let doc = ServiceComposer::compose(&selection(
            DatabaseKind::Mysql,
            ApiKind::Flask,
            FrontBackKind::Flask,
        ));
        for (_, svc) in doc.services.iter() {
            assert_eq!(svc.networks, vec!["back-network"]);
        }
        assert_eq!(doc.service(Tier::Web).unwrap().image, "demo-flask-web");
        assert_eq!(doc.service(Tier::Api).unwrap().image, "demo-flask-api");
    }
}

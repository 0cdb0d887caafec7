//! Scaffold planner: Selection → ScaffoldPlan.
//!
//! Pure. The plan lists, per tier and in execution order, the directories
//! and files to create, the generator to run, and the fixups that follow
//! it. Tiers are planned db, api, web; nothing runs concurrently.

use std::path::Path;

use crate::domain::{
    capabilities::{
        self, DB_DATA_DIR, DB_DIR, NODE_IMAGE, PostGenerate, SourceTierDef, WEB_MOUNT_POINT,
        WEB_PORT,
    },
    entities::{
        common::RelativePath,
        scaffold_plan::{FileToWrite, GeneratorInvocation, ScaffoldPlan, ScaffoldStep},
        selection::Selection,
    },
    value_objects::{DatabaseKind, Tier},
};

const ENV_EXAMPLE: &str = ".env.example";
const ENV_FILE: &str = ".env";

pub struct ScaffoldPlanner;

impl ScaffoldPlanner {
    pub fn plan(selection: &Selection) -> ScaffoldPlan {
        let mut plan = ScaffoldPlan::new();

        plan_database(selection.database(), &mut plan);

        if let Some(def) = capabilities::api_def(selection.api()) {
            plan_source_tier(Tier::Api, &def, &mut plan);
        }
        if let Some(def) = capabilities::web_def(selection.front_back()) {
            plan_source_tier(Tier::Web, &def, &mut plan);
        }

        plan
    }
}

fn plan_database(database: DatabaseKind, plan: &mut ScaffoldPlan) {
    let Some(def) = capabilities::database_def(database) else {
        return;
    };

    let root = Path::new(DB_DIR);
    plan.push(Tier::Db, ScaffoldStep::CreateDir(RelativePath::new(root)));
    plan.push(
        Tier::Db,
        ScaffoldStep::CreateDir(RelativePath::new(root.join(DB_DATA_DIR))),
    );
    plan.push(
        Tier::Db,
        ScaffoldStep::WriteFile(FileToWrite::new(
            RelativePath::new(root.join("Dockerfile")),
            format!("FROM {}\nEXPOSE {}", def.image, def.port),
        )),
    );
}

fn plan_source_tier(tier: Tier, def: &SourceTierDef, plan: &mut ScaffoldPlan) {
    let dir = Path::new(def.source_dir);
    let in_dir = |name: &str| RelativePath::new(dir.join(name));

    plan.push(
        tier,
        ScaffoldStep::RunGenerator(GeneratorInvocation {
            package: def.generator.package.to_string(),
            prerequisite: def.generator.prerequisite.map(str::to_string),
            produces: RelativePath::new(dir),
        }),
    );

    match def.post {
        PostGenerate::Nothing => {}
        PostGenerate::CopyEnvExample => {
            plan.push(
                tier,
                ScaffoldStep::CopyFile {
                    from: in_dir(ENV_EXAMPLE),
                    to: in_dir(ENV_FILE),
                },
            );
        }
        PostGenerate::NodeWebApp { command } => {
            plan.push(tier, ScaffoldStep::RemoveDir(in_dir(".git")));
            plan.push(
                tier,
                ScaffoldStep::WriteFile(FileToWrite::new(
                    in_dir("Dockerfile"),
                    node_dockerfile(command),
                )),
            );
            plan.push(
                tier,
                ScaffoldStep::WriteFile(FileToWrite::new(
                    in_dir(ENV_EXAMPLE),
                    format!("PORT={WEB_PORT}"),
                )),
            );
            plan.push(
                tier,
                ScaffoldStep::CopyFile {
                    from: in_dir(ENV_EXAMPLE),
                    to: in_dir(ENV_FILE),
                },
            );
        }
    }
}

/// Dockerfile for a generated Node web app, starting with `command`.
fn node_dockerfile(command: &[&str]) -> String {
    let cmd = command
        .iter()
        .map(|part| format!("\"{part}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "FROM {NODE_IMAGE}\n\
         WORKDIR {WEB_MOUNT_POINT}\n\
         COPY package*.json ./\n\
         RUN npm i\n\
         COPY . .\n\
         EXPOSE {WEB_PORT}\n\
         CMD [{cmd}]"
    )
}

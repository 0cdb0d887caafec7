//! Turns flags, configured defaults and prompt answers into a [`Selection`].
//!
//! Questions are asked in a fixed order: project name, database, the four
//! credentials (only when a database is chosen), API, frontend/backend.
//! A flag given on the command line skips its question.

use std::str::FromStr;

use tracing::debug;

use stackup_core::{
    domain::{ApiKind, DatabaseCredentials, DatabaseKind, FrontBackKind, Selection},
    error::StackupError,
};

use crate::{
    cli::SelectionArgs,
    config::Defaults,
    error::{CliError, CliResult},
    prompt::Prompter,
};

pub const PROJECT_NAME_QUESTION: &str = "What is your project name?";
pub const DATABASE_QUESTION: &str = "Which database do you want?";
pub const DB_NAME_QUESTION: &str = "Name of the database?";
pub const DB_USER_QUESTION: &str = "Name of the database user?";
pub const DB_PASSWORD_QUESTION: &str = "Password of the database user?";
pub const DB_ROOT_PASSWORD_QUESTION: &str = "Root password of the database?";
pub const API_QUESTION: &str = "Which API framework do you want?";
pub const FRONT_BACK_QUESTION: &str = "Which frontend/backend framework do you want?";
pub const CLEAR_QUESTION: &str = "The folder is not empty. Do you want to clear it?";

/// Resolve every answer, then build the selection once.
pub fn resolve_selection(
    args: &SelectionArgs,
    defaults: &Defaults,
    prompter: &dyn Prompter,
) -> CliResult<Selection> {
    let project_name = match &args.name {
        Some(name) => name.clone(),
        None => prompter.text(PROJECT_NAME_QUESTION, &defaults.project_name)?,
    };

    let database = choose(
        prompter,
        DATABASE_QUESTION,
        args.database.as_deref(),
        ("defaults.database", &defaults.database),
        &DatabaseKind::ALL,
        DatabaseKind::label,
    )?;

    let credentials = if database.is_none() {
        // Credentials given anyway are passed on so the domain can reject them.
        args.has_credentials()
            .then(|| flag_credentials(args, &defaults.credentials()))
    } else {
        Some(ask_credentials(args, &defaults.credentials(), prompter)?)
    };

    let api = choose(
        prompter,
        API_QUESTION,
        args.api.as_deref(),
        ("defaults.api", &defaults.api),
        &ApiKind::ALL,
        ApiKind::label,
    )?;

    let front_back = choose(
        prompter,
        FRONT_BACK_QUESTION,
        args.front_back.as_deref(),
        ("defaults.front_back", &defaults.front_back),
        &FrontBackKind::ALL,
        FrontBackKind::label,
    )?;

    let mut builder = Selection::builder()
        .project_name(project_name)
        .database(database)
        .api(api)
        .front_back(front_back);
    if let Some(credentials) = credentials {
        builder = builder.credentials(credentials);
    }

    let selection = builder.build().map_err(StackupError::from)?;
    debug!(%selection, "Selection resolved");
    Ok(selection)
}

/// Take the flag value if present, otherwise ask with the configured default
/// preselected.
fn choose<T>(
    prompter: &dyn Prompter,
    question: &str,
    flag: Option<&str>,
    (config_key, configured): (&str, &str),
    all: &[T],
    label: fn(&T) -> &'static str,
) -> CliResult<T>
where
    T: Copy + PartialEq + FromStr,
    T::Err: Into<StackupError>,
{
    if let Some(value) = flag {
        return value.parse::<T>().map_err(|e| CliError::Core(e.into()));
    }

    let default = configured
        .parse::<T>()
        .map_err(|e| {
            let err: StackupError = e.into();
            CliError::ConfigError {
                message: format!("{config_key}: {err}"),
                source: Some(Box::new(err)),
            }
        })?;
    let default_index = all.iter().position(|v| *v == default).unwrap_or(0);
    let labels: Vec<&'static str> = all.iter().map(label).collect();

    let index = prompter.choose(question, &labels, default_index)?;
    all.get(index).copied().ok_or_else(|| CliError::InvalidInput {
        message: format!("no choice number {index} for '{question}'"),
        source: None,
    })
}

fn ask_credentials(
    args: &SelectionArgs,
    defaults: &DatabaseCredentials,
    prompter: &dyn Prompter,
) -> CliResult<DatabaseCredentials> {
    let ask = |flag: &Option<String>, question: &str, default: &str| match flag {
        Some(value) => Ok(value.clone()),
        None => prompter.text(question, default),
    };

    Ok(DatabaseCredentials::new(
        ask(&args.db_name, DB_NAME_QUESTION, &defaults.name)?,
        ask(&args.db_user, DB_USER_QUESTION, &defaults.user)?,
        ask(&args.db_password, DB_PASSWORD_QUESTION, &defaults.password)?,
        ask(
            &args.db_root_password,
            DB_ROOT_PASSWORD_QUESTION,
            &defaults.root_password,
        )?,
    ))
}

/// Credentials from flags only, filling gaps with the defaults.
fn flag_credentials(args: &SelectionArgs, defaults: &DatabaseCredentials) -> DatabaseCredentials {
    let pick = |flag: &Option<String>, default: &str| flag.clone().unwrap_or_else(|| default.into());
    DatabaseCredentials::new(
        pick(&args.db_name, &defaults.name),
        pick(&args.db_user, &defaults.user),
        pick(&args.db_password, &defaults.password),
        pick(&args.db_root_password, &defaults.root_password),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{AcceptDefaults, MockPrompter};
    use mockall::{Sequence, predicate::eq};
    use stackup_core::error::ErrorCategory;

    fn flags() -> SelectionArgs {
        SelectionArgs::default()
    }

    #[test]
    fn accepting_defaults_gives_the_wizard_defaults() {
        let selection = resolve_selection(&flags(), &Defaults::default(), &AcceptDefaults).unwrap();

        assert_eq!(selection.project_name(), "my-project");
        assert_eq!(selection.database(), DatabaseKind::Mysql);
        assert_eq!(selection.api(), ApiKind::Cocasus);
        assert_eq!(selection.front_back(), FrontBackKind::Cocasus);
        assert_eq!(selection.credentials(), Some(&DatabaseCredentials::default()));
    }

    #[test]
    fn questions_are_asked_in_order() {
        let mut prompter = MockPrompter::new();
        let mut seq = Sequence::new();

        prompter
            .expect_text()
            .with(eq(PROJECT_NAME_QUESTION), eq("my-project"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok("shop".into()));
        prompter
            .expect_choose()
            .withf(|q, options, default| {
                q == DATABASE_QUESTION && options == ["None", "MySQL", "PostgreSQL"] && *default == 1
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(2));
        for (question, answer) in [
            (DB_NAME_QUESTION, "orders"),
            (DB_USER_QUESTION, "bob"),
            (DB_PASSWORD_QUESTION, "pw"),
            (DB_ROOT_PASSWORD_QUESTION, "rootpw"),
        ] {
            prompter
                .expect_text()
                .withf(move |q, _| q == question)
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_, _| Ok(answer.into()));
        }
        prompter
            .expect_choose()
            .withf(|q, _, default| q == API_QUESTION && *default == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(2));
        prompter
            .expect_choose()
            .withf(|q, _, default| q == FRONT_BACK_QUESTION && *default == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(3));

        let selection = resolve_selection(&flags(), &Defaults::default(), &prompter).unwrap();

        assert_eq!(selection.project_name(), "shop");
        assert_eq!(selection.database(), DatabaseKind::Postgresql);
        assert_eq!(selection.api(), ApiKind::Express);
        assert_eq!(selection.front_back(), FrontBackKind::Vue);
        assert_eq!(
            selection.credentials(),
            Some(&DatabaseCredentials::new("orders", "bob", "pw", "rootpw"))
        );
    }

    #[test]
    fn no_database_skips_credential_questions() {
        let mut prompter = MockPrompter::new();
        prompter.expect_text().times(0);
        prompter.expect_choose().times(0);
        prompter.expect_confirm().times(0);

        let args = SelectionArgs {
            name: Some("web-only".into()),
            database: Some("none".into()),
            api: Some("none".into()),
            front_back: Some("react".into()),
            ..SelectionArgs::default()
        };
        let selection = resolve_selection(&args, &Defaults::default(), &prompter).unwrap();

        assert!(selection.credentials().is_none());
        assert_eq!(selection.front_back(), FrontBackKind::React);
    }

    #[test]
    fn credential_flags_skip_only_their_question() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_text()
            .withf(|q, _| q == DB_PASSWORD_QUESTION || q == DB_ROOT_PASSWORD_QUESTION)
            .times(2)
            .returning(|_, default| Ok(default.to_string()));

        let args = SelectionArgs {
            name: Some("p".into()),
            database: Some("mysql".into()),
            api: Some("none".into()),
            front_back: Some("none".into()),
            db_name: Some("orders".into()),
            db_user: Some("bob".into()),
            ..SelectionArgs::default()
        };
        let selection = resolve_selection(&args, &Defaults::default(), &prompter).unwrap();

        assert_eq!(
            selection.credentials(),
            Some(&DatabaseCredentials::new(
                "orders",
                "bob",
                "my-password",
                "my-root-password"
            ))
        );
    }

    #[test]
    fn unknown_flag_value_is_not_found() {
        let args = SelectionArgs {
            api: Some("rails".into()),
            ..SelectionArgs::default()
        };
        let err = resolve_selection(&args, &Defaults::default(), &AcceptDefaults).unwrap_err();
        match err {
            CliError::Core(core) => assert_eq!(core.category(), ErrorCategory::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_configured_default_is_a_config_error() {
        let defaults = Defaults {
            front_back: "angular".into(),
            ..Defaults::default()
        };
        let err = resolve_selection(&flags(), &defaults, &AcceptDefaults).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn credentials_without_database_are_rejected() {
        let args = SelectionArgs {
            database: Some("none".into()),
            db_user: Some("bob".into()),
            ..SelectionArgs::default()
        };
        let err = resolve_selection(&args, &Defaults::default(), &AcceptDefaults).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn blank_project_name_is_rejected() {
        let args = SelectionArgs {
            name: Some("   ".into()),
            ..SelectionArgs::default()
        };
        let err = resolve_selection(&args, &Defaults::default(), &AcceptDefaults).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}

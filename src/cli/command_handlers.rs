use std::{collections::HashMap, error::Error, path::Path};

use log::{debug, info};

use crate::{
    cli::args::FetchArgs,
    model::params::{COLLECTION_URL, PASSWORD, REPO_NAME, TARGET_DIRECTORY, USERNAME},
    DataSource, FetchOutcome, TeamFoundationSourceBuilder,
};

/// Handler to fetch command
pub fn do_fetch(
    builder: TeamFoundationSourceBuilder,
    args: &FetchArgs,
) -> Result<(), Box<dyn Error>> {
    let params = collect_params(args)?;
    let source = builder.params(params).try_build()?;

    match source.fetch()? {
        FetchOutcome::Cloned => {
            info!("Fetch finished");
            Ok(())
        }
        FetchOutcome::Failed { stage, error } => {
            Err(format!("Fetch failed during {stage}: {error}").into())
        }
    }
}

/// Handler to icon command
pub fn do_icon(builder: TeamFoundationSourceBuilder) -> Result<(), Box<dyn Error>> {
    let source = builder.try_build()?;
    println!("{}", source.get_icon());
    Ok(())
}

/// Handler to connection-data command
pub fn do_connection_data(builder: TeamFoundationSourceBuilder) -> Result<(), Box<dyn Error>> {
    let source = builder.try_build()?;
    print!("{}", source.get_connection_data().to_toml()?);
    Ok(())
}

/// Merges the parameters file, if any, with the values given as flags.
/// Only values that were actually provided end up in the mapping.
fn collect_params(args: &FetchArgs) -> Result<HashMap<String, String>, Box<dyn Error>> {
    let mut params = match &args.params {
        Some(path) => load_params_file(path)?,
        None => HashMap::new(),
    };

    let flags = [
        (COLLECTION_URL, &args.collection_url),
        (REPO_NAME, &args.repo_name),
        (TARGET_DIRECTORY, &args.target_directory),
        (USERNAME, &args.username),
        (PASSWORD, &args.password),
    ];
    for (key, value) in flags {
        if let Some(value) = value {
            params.insert(key.to_string(), value.clone());
        }
    }

    Ok(params)
}

fn load_params_file(path: &Path) -> Result<HashMap<String, String>, Box<dyn Error>> {
    debug!("Loading parameters from {}", path.display());
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read {}: {}", path.display(), e))?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn args(params: Option<PathBuf>) -> FetchArgs {
        FetchArgs {
            params,
            collection_url: None,
            repo_name: None,
            target_directory: None,
            username: None,
            password: None,
        }
    }

    #[test]
    fn flags_override_params_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("params.toml");
        std::fs::write(
            &file,
            r#"
                collection_url = "https://tfs.example.com/col"
                repo_name = "from-file"
                username = "u"
            "#,
        )
        .unwrap();

        let mut args = args(Some(file));
        args.repo_name = Some("from-flag".to_string());

        let params = collect_params(&args).unwrap();
        assert_eq!(
            params,
            HashMap::from([
                (
                    "collection_url".to_string(),
                    "https://tfs.example.com/col".to_string()
                ),
                ("repo_name".to_string(), "from-flag".to_string()),
                ("username".to_string(), "u".to_string()),
            ])
        );
    }

    #[test]
    fn absent_values_stay_absent() {
        let params = collect_params(&args(None)).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn non_string_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("params.toml");
        std::fs::write(&file, "repo_name = 42\n").unwrap();

        assert!(collect_params(&args(Some(file))).is_err());
    }
}

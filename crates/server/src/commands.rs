//! Handlers for each CLI subcommand.

use crate::api::RecommendationRequest;
use crate::cli::ServeArgs;
use crate::config::parse_origins;
use crate::handler::AppState;
use crate::http_transport::{serve_http, HttpConfig};
use anyhow::{Context, Result};
use learnavia_intelligence::Catalog;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

/// Loads the catalog named on the command line, or the built-in pool.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = Catalog::load_or_builtin(path).context("failed to load candidate catalog")?;
    tracing::info!(
        target: "learnavia::catalog",
        source = path.map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        entries = catalog.len(),
        "Candidate catalog ready"
    );
    Ok(catalog)
}

pub(crate) fn handle_serve_command(args: ServeArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let config = HttpConfig {
        bind: args.http,
        cors_origins: args
            .cors_origins
            .iter()
            .flat_map(|raw| parse_origins(raw))
            .collect(),
    };
    let rt = Runtime::new()?;
    rt.block_on(serve_http(AppState::new(catalog), config))
}

pub(crate) fn handle_recommend_command(
    input: Option<PathBuf>,
    catalog: Option<PathBuf>,
    num_recs: Option<i64>,
    pretty: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match input {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            write_recommendations(file, &mut out, &catalog, num_recs, pretty)
        }
        None => {
            let stdin = std::io::stdin().lock();
            write_recommendations(stdin, &mut out, &catalog, num_recs, pretty)
        }
    }
}

pub(crate) fn handle_catalog_command(catalog: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog.as_deref())?;
    let stdout = std::io::stdout();
    write_catalog(&mut stdout.lock(), &catalog)
}

/// Reads one request, runs it against `catalog` and writes the response JSON.
fn write_recommendations<R: Read, W: Write>(
    reader: R,
    writer: &mut W,
    catalog: &Catalog,
    num_recs: Option<i64>,
    pretty: bool,
) -> Result<()> {
    let mut request: RecommendationRequest =
        serde_json::from_reader(reader).context("invalid recommendation request")?;
    if num_recs.is_some() {
        request.num_recs = num_recs;
    }

    let response = request.respond(catalog);
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &response)?;
    } else {
        serde_json::to_writer(&mut *writer, &response)?;
    }
    writeln!(writer)?;
    Ok(())
}

fn write_catalog<W: Write>(writer: &mut W, catalog: &Catalog) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, catalog.entries())?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnavia_test_utils::{recommendation_request, TestFixture, SYNTHETIC_CATALOG_TOML};
    use serde_json::Value;

    fn run(request: &Value, num_recs: Option<i64>, pretty: bool) -> Result<String> {
        let input = serde_json::to_vec(request).unwrap();
        let mut out = Vec::new();
        write_recommendations(
            input.as_slice(),
            &mut out,
            &Catalog::builtin(),
            num_recs,
            pretty,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn writes_recommendation_response() {
        let out = run(&recommendation_request(Some(2)), None, false).unwrap();
        let body: Value = serde_json::from_str(&out).unwrap();

        assert!(out.ends_with('\n'));
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
        assert_eq!(
            body["recommendations"][0]["title"],
            "Research Internship (CS Dept)"
        );
    }

    #[test]
    fn flag_overrides_request_count() {
        let out = run(&recommendation_request(Some(2)), Some(0), false).unwrap();
        let body: Value = serde_json::from_str(&out).unwrap();
        assert!(body["recommendations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn pretty_and_compact_are_equivalent() {
        let compact: Value =
            serde_json::from_str(&run(&recommendation_request(None), None, false).unwrap())
                .unwrap();
        let pretty_out = run(&recommendation_request(None), None, true).unwrap();
        let pretty: Value = serde_json::from_str(&pretty_out).unwrap();

        assert!(pretty_out.lines().count() > 1);
        assert_eq!(compact, pretty);
    }

    #[test]
    fn invalid_request_is_an_error() {
        let err = run(&serde_json::json!({ "num_recs": 2 }), None, false).unwrap_err();
        assert!(err.to_string().contains("invalid recommendation request"));
    }

    #[test]
    fn catalog_output_lists_entries() {
        let mut out = Vec::new();
        write_catalog(&mut out, &Catalog::builtin()).unwrap();
        let entries: Vec<Value> = serde_json::from_slice(&out).unwrap();

        assert_eq!(entries.len(), 8);
        assert_eq!(entries[6]["title"], "NLP Hands-on");
        assert_eq!(entries[6]["type"], "workshop");
    }

    #[test]
    fn load_catalog_from_file_and_builtin() {
        let fixture = TestFixture::new().unwrap();
        let path = fixture
            .write_catalog("catalog.toml", SYNTHETIC_CATALOG_TOML)
            .unwrap();

        assert_eq!(load_catalog(Some(path.as_path())).unwrap().len(), 3);
        assert_eq!(load_catalog(None).unwrap().len(), 8);
    }

    #[test]
    fn load_catalog_reports_bad_file() {
        let fixture = TestFixture::new().unwrap();
        let path = fixture.write_catalog("catalog.csv", "a,b").unwrap();
        let err = load_catalog(Some(path.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported catalog format"));
    }
}

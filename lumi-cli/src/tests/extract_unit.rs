//! Focused unit tests covering extract CLI configuration and execution.

use super::helpers::{utf8_workspace, write_utf8};
use super::*;
use crate::extract::{ExtractArgs, ExtractConfig, run_extract};
use camino::Utf8PathBuf;
use rstest::rstest;

fn export_payload() -> String {
    r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "properties": {
        "location": { "name": "Dansang" },
        "five_star_rating_published": 5.0,
        "review_text_published": "",
        "date": "2026-01-10"
      }
    },
    {
      "properties": {
        "location": { "name": "Loud Bar" },
        "five_star_rating_published": 2.0,
        "review_text_published": "   "
      }
    },
    {
      "properties": {
        "location": { "name": "Jongno Alley" },
        "five_star_rating_published": 3.0,
        "review_text_published": "숨은 맛집"
      }
    }
  ]
}"#
    .to_owned()
}

#[rstest]
fn converting_extract_without_export_errors() {
    let args = ExtractArgs {
        export_path: None,
        ..ExtractArgs::default()
    };

    let err = ExtractConfig::try_from(args).expect_err("missing export should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_EXTRACT_EXPORT);
            assert_eq!(env, ENV_EXTRACT_EXPORT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_extract_without_user_errors() {
    let args = ExtractArgs {
        export_path: Some(Utf8PathBuf::from("reviews.json")),
        ..ExtractArgs::default()
    };

    let err = ExtractConfig::try_from(args).expect_err("missing user should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_EXTRACT_USER);
            assert_eq!(env, ENV_EXTRACT_USER);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn extract_config_defaults_the_output_path() {
    let args = ExtractArgs {
        export_path: Some(Utf8PathBuf::from("reviews.json")),
        user: Some("Yuna".to_owned()),
        output: None,
    };

    let config = ExtractConfig::try_from(args).expect("config should build");
    assert_eq!(config.output_path, DEFAULT_PROFILE_FILENAME);
    assert_eq!(config.user, "Yuna");
}

#[rstest]
fn validate_sources_reports_missing_export() {
    let (_tmp, root) = utf8_workspace();
    let config = ExtractConfig {
        export_path: root.join("reviews.json"),
        output_path: root.join(DEFAULT_PROFILE_FILENAME),
        user: "Yuna".to_owned(),
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_EXTRACT_EXPORT),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn run_extract_writes_the_snapshot() {
    let (_tmp, root) = utf8_workspace();
    let export_path = root.join("reviews.json");
    let output_path = root.join("out").join("snapshots").join("taste.json");
    write_utf8(&export_path, export_payload().as_bytes());

    let args = ExtractArgs {
        export_path: Some(export_path),
        user: Some("Yuna".to_owned()),
        output: Some(output_path.clone()),
    };
    run_extract(args).expect("extract should succeed");

    let raw = std::fs::read_to_string(&output_path).expect("snapshot file");
    assert!(raw.ends_with('\n'));
    let snapshot: serde_json::Value = serde_json::from_str(&raw).expect("snapshot json");
    assert_eq!(snapshot["user"], "Yuna");
    assert_eq!(snapshot["style_keywords"][0], "modern");
    let reviews = snapshot["reviews"].as_array().expect("reviews");
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["place"], "Dansang");
    assert_eq!(reviews[1]["place"], "Jongno Alley");
}

#[rstest]
fn run_extract_surfaces_parse_failures() {
    let (_tmp, root) = utf8_workspace();
    let export_path = root.join("reviews.json");
    write_utf8(&export_path, b"{ not valid json");

    let args = ExtractArgs {
        export_path: Some(export_path),
        user: Some("Yuna".to_owned()),
        output: Some(root.join("taste.json")),
    };

    let err = run_extract(args).expect_err("malformed export should error");
    match err {
        CliError::Extract(_) => {}
        other => panic!("expected Extract, found {other:?}"),
    }
}

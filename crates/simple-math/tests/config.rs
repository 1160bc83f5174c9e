//! Integration tests for config defaults, serialization and loading.

use std::io::Write;

use simple_math::config::{load_config, FillConfig, MathConfig};
use simple_math::text::{Brackets, Layout, Separator};
use simple_math::{algebra, FillStrategy, Matrix, RangeFill};

// ---------------------------------------------------------------------------
// Defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn math_config_default_values() {
    let cfg = MathConfig::default();
    assert_eq!(cfg.fill.strategy, FillStrategy::Auto);
    assert_eq!(cfg.fill.parallel_threshold, RangeFill::DEFAULT_PARALLEL_THRESHOLD);
    assert_eq!(cfg.format.layout, Layout::Bracketed);
    assert!(cfg.format.spacing);
    assert_eq!(cfg.parse.column_separator, Separator::Comma);
}

#[test]
fn math_config_serializes_to_json() {
    let cfg = MathConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("parallel_threshold"));
    assert!(json.contains("\"bracketed\""));
    let back: MathConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn fill_config_builds_range_fill() {
    let cfg = FillConfig {
        strategy: FillStrategy::Sequential,
        parallel_threshold: 16,
    };
    let fill = cfg.range_fill();
    assert_eq!(fill.strategy(), FillStrategy::Sequential);
    assert_eq!(fill.parallel_threshold(), 16);
}

// ---------------------------------------------------------------------------
// load_config
// ---------------------------------------------------------------------------

#[test]
fn load_partial_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("math.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{
            "fill": {{ "strategy": "parallel" }},
            "format": {{ "brackets": "round", "spacing": false }},
            "parse": {{ "brackets": "round" }}
        }}"#
    )
    .unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.fill.strategy, FillStrategy::Parallel);
    assert_eq!(cfg.fill.parallel_threshold, RangeFill::DEFAULT_PARALLEL_THRESHOLD);
    assert_eq!(cfg.format.brackets, Brackets::Round);
    assert!(!cfg.format.spacing);

    let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let text = m.to_string_with(&cfg.format);
    assert_eq!(text, "((1,2),(3,4))");
    let back: Matrix<i32> = algebra::from_text(&text, &cfg.parse).unwrap();
    assert_eq!(back, m);

    let stacked = algebra::stack_vertically_with(&m, &back, &cfg.fill.range_fill()).unwrap();
    assert_eq!(stacked.rows(), 4);
}

#[test]
fn load_missing_file_errors() {
    let err = load_config("/nonexistent/path/math.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn load_invalid_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "fill": { "strategy": "threads" } }"#).unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

//! End-to-end tests for the run command.

use std::fs;
use std::path::{Path, PathBuf};

use per90_cli::cli::RunArgs;
use per90_cli::commands::{build_schema, run_normalize};
use per90_cli::summary::{preview_table, summary_table};

fn run_args(input: &Path, output: PathBuf) -> RunArgs {
    RunArgs {
        input: input.to_path_buf(),
        output: Some(output),
        schema: None,
        denominator: None,
        target: None,
        no_target: false,
        identifiers: Vec::new(),
        allow_no_stats: false,
        dry_run: false,
        preview: 5,
    }
}

const PLAYERS: &str = "\
Id,Player,Nation,Pos,Squad,Comp,Age,Born,MP,Starts,Min,Gls,Ast,market_value_in_eur,xG
1,A,ENG,FW,Arsenal,Premier League,22,2001,10,5,45,9,1,1000000,2.5
2,B,ESP,MF,Girona,La Liga,30,1993,3,0,0,5,,500000,
3,C,FRA,DF,Lille,Ligue 1,27,1996,20,20,1800,2,4,8000000,1.8
";

#[test]
fn normalizes_player_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("players.csv");
    let output = dir.path().join("players_per90.csv");
    fs::write(&input, PLAYERS).unwrap();

    let result = run_normalize(&run_args(&input, output.clone())).unwrap();

    assert_eq!(result.output.as_deref(), Some(output.as_path()));
    assert_eq!(result.report.input_rows, 3);
    assert_eq!(result.report.output_rows, 3);
    assert_eq!(result.report.stat_columns, vec!["Gls", "Ast", "xG"]);

    let content = fs::read_to_string(&output).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(
            "Id,Player,Nation,Pos,Squad,Comp,Age,Born,MP,Starts,Min,\
             Gls_per90,Ast_per90,xG_per90,market_value_in_eur"
        )
    );
    let first: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(first.len(), 15);
    assert_eq!(first[10], "45");
    assert_eq!(first[11].parse::<f64>().unwrap(), 18.0);
    assert_eq!(first[12].parse::<f64>().unwrap(), 2.0);
    assert_eq!(first[13].parse::<f64>().unwrap(), 5.0);
    assert_eq!(first[14], "1000000");

    let second: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(second[10], "0");
    for value in &second[11..14] {
        assert_eq!(value.parse::<f64>().unwrap(), 0.0);
    }
    assert!(lines.next().is_some());
    assert!(lines.next().is_none());
}

#[test]
fn missing_minutes_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("players.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "Id,Player,Gls\n1,A,3\n").unwrap();

    let error = run_normalize(&run_args(&input, output.clone())).unwrap_err();

    assert!(format!("{error:#}").contains("required column 'Min' not found"));
    assert!(!output.exists());
}

#[test]
fn unreadable_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.csv");
    let output = dir.path().join("out.csv");

    let error = run_normalize(&run_args(&input, output.clone())).unwrap_err();

    assert!(format!("{error:#}").contains("CSV file not found"));
    assert!(!output.exists());
}

#[test]
fn dry_run_skips_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("players.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, PLAYERS).unwrap();
    let mut args = run_args(&input, output.clone());
    args.dry_run = true;
    args.preview = 2;

    let result = run_normalize(&args).unwrap();

    assert!(result.output.is_none());
    assert!(!output.exists());
    assert_eq!(result.preview.height(), 2);
    let rendered = preview_table(&result.preview).to_string();
    assert!(rendered.contains("Gls_per90"));
    let rendered = summary_table(&result.report).to_string();
    assert!(rendered.contains("Gls_per90, Ast_per90, xG_per90"));
    assert!(rendered.contains("market_value_in_eur (moved last)"));
}

#[test]
fn schema_file_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = dir.path().join("schema.json");
    fs::write(
        &schema_path,
        r#"{ "identifier_columns": ["Player"], "denominator": "Minutes", "target": null }"#,
    )
    .unwrap();
    let mut args = run_args(Path::new("players.csv"), dir.path().join("out.csv"));
    args.schema = Some(schema_path);
    args.identifiers = vec!["Age".to_string()];
    args.target = Some("Value".to_string());

    let schema = build_schema(&args).unwrap();

    assert_eq!(schema.denominator, "Minutes");
    assert_eq!(schema.identifier_columns, vec!["Player", "Age"]);
    assert_eq!(schema.target.as_deref(), Some("Value"));
    assert!((schema.scale - 90.0).abs() < f64::EPSILON);
}

#[test]
fn no_stats_needs_opt_in() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("players.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "Player,Min,market_value_in_eur\nA,90,10\n").unwrap();

    let error = run_normalize(&run_args(&input, output.clone())).unwrap_err();
    assert!(format!("{error:#}").contains("no numeric stat columns"));
    assert!(!output.exists());

    let mut args = run_args(&input, output.clone());
    args.allow_no_stats = true;
    let result = run_normalize(&args).unwrap();
    assert!(result.report.derived_columns.is_empty());
    assert_eq!(
        fs::read_to_string(&output).unwrap().lines().next(),
        Some("Player,Min,market_value_in_eur")
    );
}

#[test]
fn blank_stat_column_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("players.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "Player,Min,Gls,Ast\nA,90,1,\nB,45,2,\n").unwrap();

    let result = run_normalize(&run_args(&input, output.clone())).unwrap();

    assert_eq!(result.report.stat_columns, vec!["Gls", "Ast"]);
    assert!(result.report.passthrough_columns.is_empty());
    let content = fs::read_to_string(&output).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Player,Min,Gls_per90,Ast_per90"));
    let first: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(first[3].parse::<f64>().unwrap(), 0.0);
}

#[test]
fn missing_markers_are_zero_filled() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("players.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "Player,Min,Gls,xG\nA,90,1,NA\nB,45,2,0.5\n").unwrap();

    let result = run_normalize(&run_args(&input, output.clone())).unwrap();

    assert_eq!(result.report.stat_columns, vec!["Gls", "xG"]);
    let content = fs::read_to_string(&output).unwrap();
    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(|line| line.split(',').collect())
        .collect();
    assert_eq!(rows[0], vec!["Player", "Min", "Gls_per90", "xG_per90"]);
    assert_eq!(rows[1][3].parse::<f64>().unwrap(), 0.0);
    assert_eq!(rows[2][3].parse::<f64>().unwrap(), 1.0);
}

#[test]
fn invalid_schema_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = dir.path().join("schema.json");
    fs::write(&schema_path, r#"{ "derived_suffix": "" }"#).unwrap();
    let mut args = run_args(Path::new("players.csv"), dir.path().join("out.csv"));
    args.schema = Some(schema_path);

    let error = build_schema(&args).unwrap_err();

    assert!(format!("{error:#}").contains("invalid schema field 'derived_suffix'"));
}

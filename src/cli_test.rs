use super::*;

#[test]
fn score_flags_override_file_values() {
    let cli = Cli::try_parse_from([
        "bs",
        "score",
        "block.json",
        "--crime",
        "12",
        "--service-requests",
        "4",
    ])
    .unwrap();
    let Commands::Score { input, metrics, .. } = cli.command else {
        panic!("expected score command");
    };
    assert_eq!(input, Some(PathBuf::from("block.json")));

    let mut raw = RawMetrics {
        crime: 99.0,
        crashes: 7.0,
        ..RawMetrics::default()
    };
    metrics.apply(&mut raw);
    assert_eq!(raw.crime, 12.0);
    assert_eq!(raw.crashes, 7.0);
    assert_eq!(raw.service_requests, 4.0);
}

#[test]
fn score_accepts_negative_counts() {
    let cli = Cli::try_parse_from(["bs", "score", "--crime", "-5", "--strict"]).unwrap();
    let Commands::Score {
        metrics, strict, ..
    } = cli.command
    else {
        panic!("expected score command");
    };
    assert!(strict);
    assert_eq!(metrics.crime, Some(-5.0));
}

#[test]
fn grade_rejects_out_of_range() {
    assert!(Cli::try_parse_from(["bs", "grade", "101"]).is_err());
    assert!(Cli::try_parse_from(["bs", "grade", "100"]).is_ok());
}

#[test]
fn top_defaults_to_three() {
    let cli = Cli::try_parse_from(["bs", "score"]).unwrap();
    let Commands::Score { top, input, .. } = cli.command else {
        panic!("expected score command");
    };
    assert_eq!(top, 3);
    assert!(input.is_none());
}

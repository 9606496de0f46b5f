use latency_breakdown::{
    summarize, write_report, EventMap, EventStatistics, Report, ReportPolicy,
    DEFAULT_ROLLUP_FROM, DEFAULT_TOP_N, OTHER_MARKER, REPORT_HEADER,
};

/// Statistics whose zero-padded mean equals the given value.
fn stats_with_means(means: &[(&str, f64)]) -> EventMap<EventStatistics> {
    means
        .iter()
        .map(|(name, mean)| ((*name).to_owned(), summarize(&[*mean], 1).unwrap()))
        .collect::<std::collections::BTreeMap<_, _>>()
        .into()
}

/// `n` events named `e00`, `e01`, ... where `e00` has the largest mean, `n` and the last has 1.
fn ranked_events(n: usize) -> EventMap<EventStatistics> {
    let names: Vec<String> = (0..n).map(|i| format!("e{i:02}")).collect();
    let means: Vec<(&str, f64)> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), (n - i) as f64))
        .collect();
    stats_with_means(&means)
}

fn row_names(report: &Report) -> Vec<&str> {
    report.rows.iter().map(|row| row.name.as_str()).collect()
}

fn render(report: &Report) -> String {
    let mut out = Vec::new();
    write_report(report, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_rows_sorted_by_descending_padded_mean() {
    let stats = stats_with_means(&[("fast", 1.0), ("slow", 30.0), ("medium", 7.5)]);
    let report = Report::build(&stats, &ReportPolicy::default());

    assert_eq!(row_names(&report), vec!["slow", "medium", "fast"]);
    assert_eq!(report.other, None);
    assert_eq!(report.event_count, 3);
}

#[test]
fn test_ties_keep_name_order() {
    let stats = stats_with_means(&[("c", 5.0), ("a", 5.0), ("big", 9.0), ("b", 5.0)]);
    let report = Report::build(&stats, &ReportPolicy::default());
    assert_eq!(row_names(&report), vec!["big", "a", "b", "c"]);
}

#[test]
fn test_row_counts_and_rollup_presence() {
    assert_eq!(DEFAULT_TOP_N, 19);
    assert_eq!(DEFAULT_ROLLUP_FROM, 20);

    for n in [0, 1, 18, 19, 20, 21, 22, 40] {
        let report = Report::build(&ranked_events(n), &ReportPolicy::default());
        assert_eq!(report.rows.len(), n.min(19), "rows for {n} events");
        assert_eq!(report.other.is_some(), n > 20, "rollup for {n} events");
    }
}

#[test]
fn test_rollup_skips_twentieth_ranked_event() {
    // 21 events with means 21 down to 1: ranks 0..=18 are listed, rank 19 (mean 2) is dropped
    // and only rank 20 (mean 1) is rolled up.
    let report = Report::build(&ranked_events(21), &ReportPolicy::default());
    assert_eq!(report.rows.len(), 19);
    assert_eq!(report.rows.last().map(|r| r.name.as_str()), Some("e18"));
    assert!(!row_names(&report).contains(&"e19"));
    assert_eq!(report.other, Some(1.0));

    // 25 events with means 25 down to 1: ranks 20..=24 have means 5 down to 1.
    let report = Report::build(&ranked_events(25), &ReportPolicy::default());
    assert_eq!(report.other, Some(5.0 + 4.0 + 3.0 + 2.0 + 1.0));
}

#[test]
fn test_twenty_events_drop_the_last_without_rollup() {
    let report = Report::build(&ranked_events(20), &ReportPolicy::default());
    assert_eq!(report.rows.len(), 19);
    assert!(!row_names(&report).contains(&"e19"));
    assert_eq!(report.other, None);
    assert_eq!(report.event_count, 20);
}

#[test]
fn test_custom_policy() {
    let policy = ReportPolicy::default().with_top_n(3).with_rollup_from(3);
    assert_eq!(policy.top_n(), 3);
    assert_eq!(policy.rollup_from(), 3);

    let report = Report::build(&ranked_events(6), &policy);
    assert_eq!(row_names(&report), vec!["e00", "e01", "e02"]);
    assert_eq!(report.other, Some(3.0 + 2.0 + 1.0));
}

#[test]
fn test_csv_layout_without_rollup() {
    let stats: EventMap<EventStatistics> = [
        ("A".to_owned(), summarize(&[4.0], 2).unwrap()),
        ("B".to_owned(), summarize(&[100.0, 0.0], 2).unwrap()),
    ]
    .into_iter()
    .collect::<std::collections::BTreeMap<_, _>>()
    .into();
    let report = Report::build(&stats, &ReportPolicy::default());
    let csv = render(&report);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], REPORT_HEADER.join(","));
    assert_eq!(lines[1], "B,50,50,50,25,75,90,99,2");
    assert_eq!(lines[2], "A,2,4,4,4,4,4,4,1");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_csv_layout_with_rollup() {
    let report = Report::build(&ranked_events(22), &ReportPolicy::default());
    let csv = render(&report);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], REPORT_HEADER.join(","));
    assert!(lines[1].starts_with("e00,22,22,22,"));
    assert!(lines[19].starts_with("e18,4,"));
    // Ranks 20 and 21 have means 2 and 1.
    assert_eq!(lines[20], "other,3");
    assert_eq!(lines[21], "");
    assert_eq!(lines[22], OTHER_MARKER);
    assert_eq!(lines.last().copied(), Some(OTHER_MARKER));
    assert_eq!(lines.len(), 23);
    assert!(!csv.contains("e19"));
    assert!(!csv.contains("e20"));
}

#[test]
fn test_shares_of_listed_rows_and_rollup() {
    let stats = stats_with_means(&[("a", 6.0), ("b", 3.0), ("c", 1.0)]);
    let report = Report::build(&stats, &ReportPolicy::default());
    assert_eq!(report.total(), 10.0);
    assert_eq!(report.shares(), vec![("a", 0.6), ("b", 0.3), ("c", 0.1)]);

    // 22 events: 19 listed rows with means 22 down to 4 plus a rollup of 2 + 1.
    let report = Report::build(&ranked_events(22), &ReportPolicy::default());
    let total = (4..=22).sum::<usize>() as f64 + 3.0;
    assert_eq!(report.total(), total);
    let shares = report.shares();
    assert_eq!(shares.len(), 20);
    assert_eq!(shares[0], ("e00", 22.0 / total));
    assert_eq!(shares.last().copied(), Some(("other", 3.0 / total)));
    let sum = shares.iter().map(|(_, share)| share).sum::<f64>();
    assert!((sum - 1.0).abs() < 1e-12, "shares sum to {sum}");
}

#[test]
fn test_shares_of_all_zero_report() {
    let stats = stats_with_means(&[("idle", 0.0), ("noop", 0.0)]);
    let report = Report::build(&stats, &ReportPolicy::default());
    assert_eq!(report.total(), 0.0);
    assert_eq!(report.shares(), vec![("idle", 0.0), ("noop", 0.0)]);
}

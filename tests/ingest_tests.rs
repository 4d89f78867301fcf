mod common;
use common::{SAMPLE_TABLE, d, t};
use rshifthours::errors::AppError;
use rshifthours::ingest::{Delimiter, read_table_str};
use rshifthours::models::SkipReason;

#[test]
fn test_reads_french_pasted_table() {
    let rows = read_table_str(SAMPLE_TABLE, Delimiter::Tab).expect("table");
    assert_eq!(rows.len(), 4);

    let first = rows[0].as_ref().expect("row 1");
    assert_eq!(first.row, 1);
    assert_eq!(first.date, d(2025, 3, 4));
    assert_eq!(first.start, t(8, 0));
    assert_eq!(first.end, t(16, 0));
    assert_eq!(first.unpaid_break_minutes, 30);
    assert_eq!(first.declared_minutes, 450);
    assert_eq!(first.notes, "");

    let second = rows[1].as_ref().expect("row 2");
    assert_eq!(second.notes, "renfort");

    let skipped = rows[3].as_ref().unwrap_err();
    assert_eq!(skipped.row, 4);
    assert_eq!(skipped.reason, SkipReason::InvalidDate("bad".to_string()));
}

#[test]
fn test_reads_english_comma_table() {
    let input = "date,start,end,break,total\n2025-03-04,8,16:30:00,1,7.5\n";
    let rows = read_table_str(input, Delimiter::Comma).expect("table");

    let rec = rows[0].as_ref().expect("row");
    assert_eq!(rec.start, t(8, 0));
    assert_eq!(rec.end, t(16, 30));
    assert_eq!(rec.unpaid_break_minutes, 60);
    assert_eq!(rec.notes, "");
}

#[test]
fn test_missing_columns_fail_the_batch() {
    let input = "Date\tDébut\tNotes\n04/03/2025\t08:00\t\n";
    match read_table_str(input, Delimiter::Tab) {
        Err(AppError::MissingColumns(cols)) => assert_eq!(cols, "end, break, total"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_header_only_table_is_empty() {
    let input = "date;start;end;break;total\n";
    assert!(matches!(
        read_table_str(input, Delimiter::Semicolon),
        Err(AppError::EmptyTable)
    ));
}

#[test]
fn test_bad_rows_are_reported_not_fatal() {
    let input = "date;start;end;break;total;notes
04/03/2025;;16:00;0;8;
04/03/2025;8h;16:00;0;8;
04/03/2025;08:00;16:00;abc;8;
04/03/2025;08:00;16:00;-1;8;
;08:00;16:00;0;8;
;;;;;
05/03/2025;08:00;16:00;;;RAS
";
    let rows = read_table_str(input, Delimiter::Semicolon).expect("table");
    let reasons: Vec<SkipReason> = rows
        .iter()
        .filter_map(|r| r.as_ref().err().map(|s| s.reason.clone()))
        .collect();

    assert_eq!(
        reasons,
        vec![
            SkipReason::MissingTime("start".to_string()),
            SkipReason::InvalidTime("8h".to_string()),
            SkipReason::InvalidNumber("abc".to_string()),
            SkipReason::NegativeBreak("-1".to_string()),
            SkipReason::MissingDate,
        ]
    );

    // the blank line is dropped, the last row keeps its 1-based index
    let last = rows.last().expect("rows").as_ref().expect("valid row");
    assert_eq!(last.row, 7);
    assert_eq!(last.unpaid_break_minutes, 0);
    assert_eq!(last.declared_minutes, 0);
    assert_eq!(last.notes, "ras");
}

#[test]
fn test_delimiter_names() {
    assert_eq!("tab".parse::<Delimiter>().ok(), Some(Delimiter::Tab));
    assert_eq!(";".parse::<Delimiter>().ok(), Some(Delimiter::Semicolon));
    assert_eq!("Comma".parse::<Delimiter>().ok(), Some(Delimiter::Comma));
    assert!("pipe".parse::<Delimiter>().is_err());
}

#[test]
fn test_out_of_range_hours_are_rejected() {
    let input = "date;start;end;break;total
04/03/2025;08:00;16:00;0;1e300
04/03/2025;08:00;16:00;25;8
04/03/2025;08:00;16:00;0;-2000000
04/03/2025;08:00;16:00;24;1000000
";
    let rows = read_table_str(input, Delimiter::Semicolon).expect("table");
    let reasons: Vec<SkipReason> = rows
        .iter()
        .filter_map(|r| r.as_ref().err().map(|s| s.reason.clone()))
        .collect();

    assert_eq!(
        reasons,
        vec![
            SkipReason::InvalidNumber("1e300".to_string()),
            SkipReason::InvalidNumber("25".to_string()),
            SkipReason::InvalidNumber("-2000000".to_string()),
        ]
    );
    let limit = rows[3].as_ref().expect("limits are accepted");
    assert_eq!(limit.unpaid_break_minutes, 24 * 60);
    assert_eq!(limit.declared_minutes, 60_000_000);
}

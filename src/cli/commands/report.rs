use crate::cli::commands::classify_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Category, ClassifiedShift, Report};
use crate::ui::messages::{header, info, warning};
use crate::utils::date::weekday_short;
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_hours, mins2readable};
use ansi_term::Style;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        input,
        delimiter,
        details,
    } = cmd
    {
        let report = classify_input(input, *delimiter, cfg)?;

        if report.shifts.is_empty() {
            warning("No valid shifts found in the input.");
        } else {
            header("Hours per shift");
            print!("{}", shifts_table(&report, cfg.decimals, *details).render());
        }

        print_skipped(&report);
        print_notes(&report);
        print_summary(&report, cfg.decimals);
    }
    Ok(())
}

fn shifts_table(report: &Report, decimals: usize, details: bool) -> Table {
    let mut columns = vec![
        Column::right("Row"),
        Column::left("Date"),
        Column::left("Start"),
        Column::left("End"),
    ];
    columns.extend(Category::ALL.iter().map(|c| Column::right(c.label())));
    if details {
        columns.push(Column::right("Elapsed"));
        columns.push(Column::right("Break"));
        columns.push(Column::left("Tokens"));
    }

    let mut table = Table::new(columns);
    for shift in &report.shifts {
        table.add_row(shift_row(shift, decimals, details));
    }
    table
}

fn shift_row(shift: &ClassifiedShift, decimals: usize, details: bool) -> Vec<String> {
    let r = &shift.record;
    let mut row = vec![
        r.row.to_string(),
        format!("{} {}", weekday_short(r.date), r.date_str()),
        r.start_str(),
        r.end_str(),
    ];
    row.extend(
        Category::ALL
            .iter()
            .map(|c| fmt_hours(shift.bucket.get(*c), decimals)),
    );
    if details {
        row.push(mins2readable(shift.elapsed_minutes()));
        row.push(mins2readable(shift.break_deducted));
        row.push(shift.tokens.describe());
    }
    row
}

fn print_skipped(report: &Report) {
    if report.skipped.is_empty() {
        return;
    }
    header("Skipped rows");
    for s in &report.skipped {
        warning(format!("row {}: {}", s.row, s.reason));
    }
}

fn print_notes(report: &Report) {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Supervisor notes").wrapped(60),
    ]);
    for shift in report.annotated() {
        table.add_row(vec![
            shift.record.date_str(),
            shift.record.notes.clone(),
        ]);
    }
    if table.rows.is_empty() {
        return;
    }
    header("Supervisor notes");
    print!("{}", table.render());
}

fn print_summary(report: &Report, decimals: usize) {
    let s = &report.summary;
    let bold = Style::new().bold();

    header("Summary");
    println!("{:<22}{}", "Days worked:", bold.paint(s.days_worked().to_string()));
    println!("{:<22}{}", "Shifts:", s.shifts);
    for cat in Category::ALL {
        println!(
            "{:<22}{} h",
            format!("{} hours:", cat.label()),
            fmt_hours(s.totals.get(cat), decimals)
        );
    }
    println!(
        "{:<22}{} h",
        "Computed total:",
        bold.paint(fmt_hours(s.computed_minutes(), decimals))
    );
    println!(
        "{:<22}{} h",
        "Declared total:",
        fmt_hours(s.declared_minutes, decimals)
    );

    if !report.skipped.is_empty() {
        info(format!("{} row(s) skipped", report.skipped.len()));
    }
}

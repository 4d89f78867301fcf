use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::{parse_year, weekday_short};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holidays { year } = cmd {
        let y = parse_year(year).ok_or_else(|| AppError::InvalidYear(year.clone()))?;
        let calendar = cfg.calendar()?;

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Day"),
            Column::left("Holiday"),
        ]);
        for h in calendar.holidays(y) {
            table.add_row(vec![
                h.date.format("%Y-%m-%d").to_string(),
                weekday_short(h.date).to_string(),
                h.name,
            ]);
        }

        header(format!("Holidays {y}"));
        print!("{}", table.render());
    }
    Ok(())
}

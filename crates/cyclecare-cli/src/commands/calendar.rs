use chrono::{Datelike, Local, NaiveDate, Weekday};
use clap::{Args, ValueEnum};
use cyclecare_core::{parse_date, Config, CyclePhase, DayCell, MonthGrid};

use super::{print_json, GlobalArgs};

#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM, default: current month)
    #[arg(long)]
    month: Option<String>,
    /// First column of the grid (default: from config)
    #[arg(long, value_enum)]
    week_start: Option<WeekStartArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum WeekStartArg {
    Sunday,
    Monday,
}

pub fn run(global: &GlobalArgs, args: &CalendarArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = global.profile()?;
    let today = Local::now().date_naive();

    let (year, month) = match &args.month {
        Some(m) => parse_month(m)?,
        None => (today.year(), today.month()),
    };
    let week_start = match args.week_start {
        Some(WeekStartArg::Sunday) => Weekday::Sun,
        Some(WeekStartArg::Monday) => Weekday::Mon,
        None => Config::load()?.calendar.week_starts_on.weekday(),
    };

    let grid = MonthGrid::build(year, month, today, &profile, week_start)?;

    if global.json {
        return print_json(&grid);
    }
    print!("{}", render(&grid));
    Ok(())
}

fn parse_month(input: &str) -> Result<(i32, u32), Box<dyn std::error::Error>> {
    let first: NaiveDate = parse_date(&format!("{}-01", input.trim()))
        .map_err(|_| format!("invalid month '{input}': expected YYYY-MM"))?;
    Ok((first.year(), first.month()))
}

fn phase_marker(phase: CyclePhase) -> char {
    match phase {
        CyclePhase::Menstrual => 'M',
        CyclePhase::Follicular => 'F',
        CyclePhase::Ovulation => 'O',
        CyclePhase::Luteal => 'L',
    }
}

fn render_cell(cell: &DayCell) -> String {
    if !cell.is_current_month {
        return "     ".to_string();
    }
    let marker = phase_marker(cell.info.phase);
    if cell.is_today {
        format!("[{:>2}{}]", cell.date.day(), marker)
    } else {
        format!(" {:>2}{} ", cell.date.day(), marker)
    }
}

fn render(grid: &MonthGrid) -> String {
    let mut out = String::new();
    if let Some(first) = NaiveDate::from_ymd_opt(grid.year, grid.month, 1) {
        out.push_str(&format!("{}\n", first.format("%B %Y")));
    }

    let mut header = String::new();
    let mut weekday = grid.week_start;
    for _ in 0..7 {
        header.push_str(&format!("  {:<3}", &weekday.to_string()[..2]));
        weekday = weekday.succ();
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for week in grid.weeks() {
        let row: String = week.iter().map(render_cell).collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out.push_str("M menstrual  F follicular  O ovulation (fertile)  L luteal\n");
    out
}

//! Text rendering of the attendance views.
//!
//! This module turns the structures produced by `core::view` and
//! `core::monthly` into plain-text tables for the command line. Percentages
//! are rounded to the nearest integer here and nowhere else.

use crate::core::{
    monthly::MonthlySummary,
    view::{DailyEntry, DayMark, MonthGrid, RecordEntry},
};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Placeholder for an empty cell in the daily and records tables.
const EMPTY_CELL: &str = "-";

/// Rounds a percentage to the nearest integer for display, e.g. `"14%"`.
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    // Percentages are in [0, 100]; truncation cannot occur.
    #[allow(clippy::cast_possible_truncation)]
    let rounded = percentage.round() as i64;
    format!("{rounded}%")
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80%`
///
/// # Arguments
/// * `percentage` - Attendance percentage (0-100)
/// * `bar_length` - Length of the progress bar in characters (default 10)
#[must_use]
pub fn format_progress_bar(percentage: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = percentage.clamp(0.0, 100.0);

    // Cast safety: clamped ∈ [0, 100], length is small (10-20).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!(
        "[{}{}] {}",
        "█".repeat(filled),
        "░".repeat(empty),
        format_percentage(percentage)
    )
}

fn cell(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(EMPTY_CELL)
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max(4)
}

/// Renders the daily view as a table of name, email, status and times.
#[must_use]
pub fn format_daily_report(date: NaiveDate, entries: &[DailyEntry<'_>]) -> String {
    DailyReport { date, entries }.to_string()
}

struct DailyReport<'r, 'a> {
    date: NaiveDate,
    entries: &'r [DailyEntry<'a>],
}

impl fmt::Display for DailyReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = name_width(self.entries.iter().map(|e| e.teacher.name.as_str()));
        writeln!(f, "Daily Attendance - {}", self.date.format("%A %-d %B %Y"))?;
        writeln!(
            f,
            "  {:<width$}  {:<28}  {:<8}  {:<8}  {:<9}",
            "Name", "Email", "Status", "Check In", "Check Out"
        )?;
        for entry in self.entries {
            let record = entry.record;
            writeln!(
                f,
                "  {:<width$}  {:<28}  {:<8}  {:<8}  {:<9}",
                entry.teacher.name,
                entry.teacher.email,
                record.map_or(EMPTY_CELL, |r| r.status.label()),
                cell(record.and_then(|r| r.check_in_time.as_deref())),
                cell(record.and_then(|r| r.check_out_time.as_deref())),
            )?;
        }
        Ok(())
    }
}

fn mark_char(mark: DayMark) -> char {
    match mark {
        DayMark::Weekend => '·',
        DayMark::Recorded(_) | DayMark::Unmarked => mark.letter().unwrap_or(' '),
    }
}

fn weekday_initial(date: NaiveDate) -> char {
    date.weekday().to_string().chars().next().unwrap_or(' ')
}

/// Renders the month grid: one column per day, one row per teacher, and the
/// teacher's rounded percentage from `summary` in the last column.
///
/// Today's column is marked with `^` under the day numbers.
#[must_use]
pub fn format_month_grid(grid: &MonthGrid<'_>, summary: &MonthlySummary) -> String {
    GridReport { grid, summary }.to_string()
}

struct GridReport<'r, 'a> {
    grid: &'r MonthGrid<'a>,
    summary: &'r MonthlySummary,
}

impl fmt::Display for GridReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid;
        let width = name_width(grid.rows.iter().map(|r| r.teacher.name.as_str()));
        writeln!(f, "{}", grid.month)?;

        write!(f, "  {:<width$} ", "")?;
        for day in &grid.days {
            write!(f, "{:>3}", day.date.day())?;
        }
        writeln!(f)?;

        write!(f, "  {:<width$} ", "Name")?;
        for day in &grid.days {
            write!(f, "{:>3}", weekday_initial(day.date))?;
        }
        writeln!(f, "     %")?;

        if let Some(column) = grid.days.iter().position(|d| d.is_today) {
            let offset = 3 * (column + 1);
            writeln!(f, "  {:<width$} {:>offset$}", "", '^')?;
        }

        for row in &grid.rows {
            write!(f, "  {:<width$} ", row.teacher.name)?;
            for mark in &row.marks {
                write!(f, "{:>3}", mark_char(*mark))?;
            }
            let percentage = self
                .summary
                .per_teacher
                .iter()
                .find(|p| p.teacher_id == row.teacher.id)
                .map_or_else(|| EMPTY_CELL.to_string(), |p| format_percentage(p.percentage));
            writeln!(f, "  {percentage:>4}")?;
        }
        Ok(())
    }
}

/// Formats the monthly summary card: totals followed by one progress bar per
/// teacher.
#[must_use]
pub fn format_monthly_summary(summary: &MonthlySummary) -> String {
    SummaryReport(summary).to_string()
}

struct SummaryReport<'r>(&'r MonthlySummary);

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "Attendance Summary - {}", summary.month)?;
        writeln!(f, "  Total Teachers: {}", summary.total_teachers)?;
        writeln!(
            f,
            "  Average Attendance: {}",
            format_percentage(summary.average_percentage)
        )?;
        writeln!(f, "  Working Days: {}", summary.working_days)?;

        if !summary.per_teacher.is_empty() {
            writeln!(f)?;
        }
        let width = name_width(summary.per_teacher.iter().map(|p| p.name.as_str()));
        for teacher in &summary.per_teacher {
            writeln!(
                f,
                "  {:<width$}  {}",
                teacher.name,
                format_progress_bar(teacher.percentage, None)
            )?;
        }
        Ok(())
    }
}

/// Renders the records listing (name, date, status, times, notes).
#[must_use]
pub fn format_records(entries: &[RecordEntry<'_>]) -> String {
    RecordsReport(entries).to_string()
}

struct RecordsReport<'r, 'a>(&'r [RecordEntry<'a>]);

impl fmt::Display for RecordsReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.0;
        let width = name_width(entries.iter().map(|e| e.teacher.name.as_str()));
        writeln!(f, "Attendance Records ({})", entries.len())?;
        for entry in entries {
            let record = entry.record;
            writeln!(
                f,
                "  {:<width$}  {}  {:<8}  {:<5}  {:<5}  {}",
                entry.teacher.name,
                record.date.format("%b %-d, %Y"),
                record.status.label(),
                cell(record.check_in_time.as_deref()),
                cell(record.check_out_time.as_deref()),
                cell(record.notes.as_deref()),
            )?;
        }
        Ok(())
    }
}

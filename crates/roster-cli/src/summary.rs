use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use roster_cli::types::{BatchResult, FileStatus, FileSummary};
use roster_report::RenderedWith;

pub fn print_batch_summary(result: &BatchResult) {
    println!("Folder: {}", result.folder.display());
    if result.files.is_empty() {
        println!("No exports found.");
        return;
    }
    print_file_table(&result.files);
    println!(
        "{} converted, {} failed",
        result.succeeded_count(),
        result.failed_count()
    );
    print_errors(&result.files);
}

pub fn print_file_summary(summary: &FileSummary) {
    if let Some(path) = &summary.output {
        println!("Output: {}", path.display());
    }
    print_file_table(std::slice::from_ref(summary));
}

fn print_file_table(files: &[FileSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Company"),
        header_cell("Employees"),
        header_cell("Exams"),
        header_cell("Skipped rows"),
        header_cell("Status"),
        header_cell("Time"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Right);

    let mut total_employees = 0usize;
    let mut total_skipped = 0usize;
    for file in files {
        total_employees += file.employees;
        total_skipped += file.rows_skipped;
        table.add_row(vec![
            Cell::new(file_name(&file.input)),
            company_cell(file),
            Cell::new(file.employees),
            Cell::new(file.exam_types),
            count_cell(file.rows_skipped, Color::Yellow),
            status_cell(&file.status),
            dim_cell(format!("{:.2}s", file.elapsed.as_secs_f64())),
        ]);
    }
    if files.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            Cell::new(total_employees).add_attribute(Attribute::Bold),
            dim_cell("-"),
            count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");
}

fn print_errors(files: &[FileSummary]) {
    let failures: Vec<(&FileSummary, &str)> = files
        .iter()
        .filter_map(|file| match &file.status {
            FileStatus::Failed(message) => Some((file, message.as_str())),
            FileStatus::Written(_) | FileStatus::DryRun => None,
        })
        .collect();
    if failures.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for (file, message) in failures {
        eprintln!("- {}: {message}", file_name(&file.input));
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn company_cell(file: &FileSummary) -> Cell {
    if file.company.is_empty() {
        dim_cell("-")
    } else if file.defaulted_fields > 0 {
        Cell::new(&file.company).fg(Color::Yellow)
    } else {
        Cell::new(&file.company)
    }
}

fn status_cell(status: &FileStatus) -> Cell {
    match status {
        FileStatus::Written(RenderedWith::Styled) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        FileStatus::Written(RenderedWith::Plain) => Cell::new("✓ plain").fg(Color::Yellow),
        FileStatus::DryRun => dim_cell("dry run"),
        FileStatus::Failed(_) => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

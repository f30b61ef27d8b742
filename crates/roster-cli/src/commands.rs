use anyhow::Result;
use comfy_table::Table;

use roster_cli::batch::{ConvertSettings, convert_file, run_batch};
use roster_cli::config::load_options;
use roster_cli::types::{BatchResult, FileSummary};
use roster_report::RenderOptions;

use crate::cli::{BatchArgs, ConvertArgs, OptionsArgs, OutputArgs};
use crate::summary::apply_table_style;

pub fn run_exams(args: &OptionsArgs) -> Result<()> {
    let options = load_options(args.config.as_deref(), &args.preferred_exams)?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Preferred exam"]);
    apply_table_style(&mut table);
    for (index, label) in options.preferred_exams.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), label.clone()]);
    }
    println!("{table}");
    println!("Other exams follow in alphabetical order.");
    Ok(())
}

pub fn run_batch_command(args: &BatchArgs) -> Result<BatchResult> {
    let settings = settings_from(&args.options, &args.output)?;
    run_batch(&args.folder, &settings)
}

pub fn run_convert(args: &ConvertArgs) -> Result<FileSummary> {
    let settings = settings_from(&args.options, &args.output)?;
    convert_file(&args.input, args.output_path.as_deref(), &settings)
}

fn settings_from(options: &OptionsArgs, output: &OutputArgs) -> Result<ConvertSettings> {
    Ok(ConvertSettings {
        options: load_options(options.config.as_deref(), &options.preferred_exams)?,
        render: RenderOptions {
            styled: !output.plain,
            autofit: !output.no_autofit,
        },
        output_dir: output.output_dir.clone(),
        dry_run: output.dry_run,
    })
}

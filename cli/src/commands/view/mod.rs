use std::path::PathBuf;

use basins::engine::field::BasinField;
use basins::graphics;
use basins::models::task::RenderTask;
use clap::Parser;

use super::FieldArgs;

#[derive(Parser, Debug)]
pub struct ViewCommand {
    /// 📄 JSON render-task file; takes precedence over the inline options
    #[arg(short, long)]
    pub task: Option<PathBuf>,

    #[clap(flatten)]
    pub field: FieldArgs,
}

pub fn run(args: ViewCommand) -> Result<(), Box<dyn std::error::Error>> {
    let task = match &args.task {
        Some(path) => RenderTask::from_json(&std::fs::read_to_string(path)?)?,
        None => args.field.to_task()?,
    };

    let field = BasinField::from_task(&task)?;
    graphics::start_viewer(field, task.resolution.width, task.resolution.height)?;
    Ok(())
}

use std::path::PathBuf;

use basins::engine::field::BasinField;
use basins::graphics::canvas::ImageCanvas;
use basins::models::task::RenderTask;
use clap::Parser;
use log::info;

use super::FieldArgs;

#[derive(Parser, Debug)]
pub struct RenderCommand {
    /// 📄 JSON render-task file; takes precedence over the inline options
    #[arg(short, long)]
    pub task: Option<PathBuf>,

    /// 🖼️ Output PNG path
    #[arg(short, long, default_value = "basins.png")]
    pub output: PathBuf,

    #[clap(flatten)]
    pub field: FieldArgs,
}

pub fn run(args: RenderCommand) -> Result<(), Box<dyn std::error::Error>> {
    let task = match &args.task {
        Some(path) => RenderTask::from_json(&std::fs::read_to_string(path)?)?,
        None => args.field.to_task()?,
    };

    let mut field = BasinField::from_task(&task)?;
    let mut canvas = ImageCanvas::new(task.resolution.width, task.resolution.height);
    field.render(&mut canvas)?;

    for (index, root) in field.roots().iter().enumerate() {
        info!("root {}: {} + {}i", index, root.re, root.im);
    }

    canvas.save(&args.output)?;
    info!("wrote {}", args.output.display());
    Ok(())
}

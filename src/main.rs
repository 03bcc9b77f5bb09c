mod cli;

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

use cli::{Cli, Command, PlanArgs, SplitArgs};
use cubesplit_edit::{CommandError, Document, split_selection};
use cubesplit_geom::Axis;
use cubesplit_io::{SceneFile, load_config, load_scene, save_scene};
use cubesplit_model::Cube;
use cubesplit_split::{SplitConfig, SplitPlan};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(CommandError::EmptySelection) = e.downcast_ref::<CommandError>() {
                log::warn!("nothing to split: select at least one cube");
                return ExitCode::from(2);
            }
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(&cli.config)?.split;
    match cli.command {
        Command::Split(args) => {
            override_extent(&mut config, args.max_extent)?;
            split(args, &config)
        }
        Command::Plan(args) => {
            override_extent(&mut config, args.max_extent)?;
            plan(args, &config)
        }
    }
}

fn override_extent(config: &mut SplitConfig, value: Option<f32>) -> Result<(), Box<dyn Error>> {
    if let Some(v) = value {
        config.max_extent = v;
    }
    config.validate()?;
    Ok(())
}

fn apply_selection(doc: &mut Document, names: &[String]) {
    if !names.is_empty() {
        let ids: Vec<_> = names.iter().flat_map(|n| doc.find_by_name(n)).collect();
        if ids.is_empty() {
            log::warn!("no cube matches {:?}", names);
        }
        doc.select(ids);
    } else if doc.selection().is_empty() {
        doc.select_all();
    }
}

fn split(args: SplitArgs, config: &SplitConfig) -> Result<(), Box<dyn Error>> {
    let mut doc = load_scene(&args.scene)?;
    apply_selection(&mut doc, &args.select);
    let report = split_selection(&mut doc, config)?;
    for failure in &report.failed {
        log::warn!("left {} in place: {}", failure.element, failure.error);
    }
    log::info!(
        "split {} cube(s) into {} piece(s); {} flat, {} skipped",
        report.split.len(),
        report.piece_count(),
        report.flat.len(),
        report.failed.len()
    );
    match &args.output {
        Some(path) => save_scene(&doc, path)?,
        None => print!("{}", SceneFile::from_document(&doc).to_toml_string()?),
    }
    Ok(())
}

fn describe(cube: &Cube, config: &SplitConfig) -> String {
    match SplitPlan::for_cube(cube, config.max_extent) {
        Ok(plan) => {
            let axes: Vec<String> = Axis::ALL
                .iter()
                .map(|&a| format!("{}={:?}", a, plan.boundaries(a)))
                .collect();
            format!("{}: {} -> {} piece(s)", cube.name, axes.join(" "), plan.cell_count())
        }
        Err(e) => format!("{}: {}", cube.name, e),
    }
}

fn plan(args: PlanArgs, config: &SplitConfig) -> Result<(), Box<dyn Error>> {
    let doc = load_scene(&args.scene)?;
    for (_, cube) in doc.cubes() {
        println!("{}", describe(cube, config));
    }
    Ok(())
}

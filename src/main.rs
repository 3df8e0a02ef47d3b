//! Artisan's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration layering and the
//! generation flow, coordinating interactions between modules.

use artisan::{
    cli::{get_args, Args},
    config::Config,
    constants::SESSION_FILE,
    context::build_context,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    processor::{OverwritePolicy, Processor},
    report::{generation_phases, ConsoleReporter, Reporter},
    template::TemplateStore,
    wizard::run_wizard,
};
use std::path::Path;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Assembles the layered configuration: persisted session first, then the
/// JSON config file, then command-line flags.
fn assemble_config(args: &Args) -> Result<Config> {
    let mut config = Config::load_session(Path::new(SESSION_FILE));
    if let Some(path) = &args.config {
        config.merge(Config::from_file(path)?);
    }
    config.merge_args(args);
    Ok(config)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Merges session file, config file and CLI flags
/// 2. Runs the wizard when no module name is known (unless --silent)
/// 3. Builds the substitution context (validates the request)
/// 4. Selects the template store (built-in or custom directory)
/// 5. Materializes the module tree, narrating each phase
/// 6. Persists the accepted configuration for the next run
fn run(args: Args) -> Result<()> {
    let mut config = assemble_config(&args)?;

    if config.project_name.is_none() {
        if args.silent {
            return Err(Error::InvalidRequest(
                "a module name is required for silent execution".to_string(),
            ));
        }
        let answers = run_wizard(&config)?;
        config.merge(answers);
    }

    let request = config.clone().into_request()?;
    let reporter = ConsoleReporter;
    println!(">>> artisan: initializing {}", request.project_name);

    let phases = generation_phases(&request.project_name);

    reporter.phase(&phases[0].0, &phases[0].1);
    let context = build_context(&request)?;
    let store = match &args.templates {
        Some(dir) => TemplateStore::from_dir(dir)?,
        None => TemplateStore::builtin(),
    };
    store.ensure_required()?;

    let module_root = request.output_dir.join(request.stem());
    let policy = if request.overwrite {
        OverwritePolicy::Overwrite
    } else {
        OverwritePolicy::Fail
    };
    let processor = Processor::new(&store, &context, &module_root, policy, &reporter);

    reporter.phase(&phases[1].0, &phases[1].1);
    processor.prepare()?;

    reporter.phase(&phases[2].0, &phases[2].1);
    let written = processor.generate()?;

    reporter.phase(&phases[3].0, &phases[3].1);
    if let Err(err) = config.save_session(Path::new(SESSION_FILE)) {
        log::debug!("could not persist session: {}", err);
    }

    println!("\nSUCCESS: generated {} files.", written.len());
    println!(">>> Location: {}", module_root.display());
    Ok(())
}

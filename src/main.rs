use {
    clap::Parser,
    demand_forecaster::{Cli, PERSISTENCE, run_app, run_report, ui::UI_TEXT},
    eframe::NativeOptions,
    std::{panic, path::PathBuf, process::ExitCode},
};

fn main() -> ExitCode {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("demand_forecaster"), my_code_level)
        .init();

    let args = Cli::parse();

    if args.report {
        // clap guarantees --file with --report
        let Some(path) = args.file.as_deref() else {
            return ExitCode::FAILURE;
        };
        return match run_report(path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 750.0])
            .with_title(UI_TEXT.window_title.as_str()),
        ..Default::default()
    };

    let result = eframe::run_native(
        &UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Window failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

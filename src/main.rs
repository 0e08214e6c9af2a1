// SPDX-License-Identifier: MPL-2.0
use green_classify::cli::{self, Flags, EXIT_ERROR, USAGE};
use green_classify::i18n::I18n;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let flags = match Flags::from_env() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if flags.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config = cli::load_config(flags.config_path.as_deref());
    let i18n = I18n::new(flags.lang.clone(), &config);

    let outcome = cli::run(&flags, &config, &i18n);
    match &outcome {
        Ok(report) => {
            for line in report.render(&i18n) {
                println!("{line}");
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "check failed");
            eprintln!("{err}");
        }
    }
    ExitCode::from(cli::exit_code(&outcome))
}

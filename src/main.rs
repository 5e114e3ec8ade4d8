// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, paths, Flags};
use art_space::catalog;
use art_space::config::{self, Config};
use art_space::i18n::fluent::I18n;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "art_space=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);
        let i18n = I18n::new(lang, &Config::default());
        println!("{}", i18n.tr("cli-help"));
        return Ok(());
    }

    let init_config = args.contains("--init-config");

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    if init_config {
        let dir = flags.config_dir.clone().map(PathBuf::from);
        match config::write_default_with_override(dir) {
            Ok(path) => println!("{}", path.display()),
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let gallery = match catalog::gallery() {
        Ok(gallery) => gallery,
        Err(err) => {
            tracing::error!(error = %err, "cannot build the gallery");
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags, gallery)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

// SPDX-License-Identifier: MPL-2.0
use manim_studio::app::{self, paths, Flags};
use manim_studio::logging;

const HELP: &str = "\
Manim Studio

USAGE:
  manim_studio [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          UI language (e.g. en-US, fr)
  --i18n-dir <DIR>         Load .ftl translations from DIR
  --config-dir <DIR>       Directory holding settings.toml
  --data-dir <DIR>         Directory holding state.cbor
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    for extra in args.finish() {
        tracing::warn!(argument = ?extra, "Ignoring unknown argument");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

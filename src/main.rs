// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::logging;

const HELP: &str = "\
iced_folio - personal portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --config-dir <DIR>  Directory holding settings.toml (env: FOLIO_CONFIG_DIR)
  --data-dir <DIR>    Directory holding storage.cbor (env: FOLIO_DATA_DIR)
  -h, --help          Print this help

Logging is controlled with RUST_LOG, e.g. RUST_LOG=iced_folio=debug.
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init();

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!("ignoring --config-dir: {err}");
        None
    });
    let data_dir: Option<String> = args.opt_value_from_str("--data-dir").unwrap_or_else(|err| {
        tracing::warn!("ignoring --data-dir: {err}");
        None
    });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(data_dir.clone(), config_dir.clone());

    app::run(Flags {
        data_dir,
        config_dir,
    })
}

// SPDX-License-Identifier: MPL-2.0
use front_desk::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        api_url: args.opt_value_from_str("--api-url").unwrap_or(None),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("[front-desk] ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

//! CLI 層: 引数解析と補完スクリプト生成

mod args;

pub use args::{config_to_command, parse_args, parse_args_from, print_completion, Config, ParseOutcome};

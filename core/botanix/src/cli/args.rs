//! コマンドライン引数の解析

use crate::domain::{BotanixCommand, Language};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -L / --list-profiles: 利用可能なプロバイダプロファイル一覧を表示
    pub list_profiles: bool,
    /// -H / --history: 保存済みの識別履歴を表示
    pub history: bool,
    /// --json: レポート／履歴を整形テキストではなく JSON で出力
    pub json: bool,
    /// -v / --verbose: 不具合調査用の冗長ログを stderr に出力する
    pub verbose: bool,
    /// -l / --language: 出力言語（en / bn）。未指定なら BOTANIX_LANG → en
    pub language: Option<Language>,
    pub profile: Option<String>,
    pub model: Option<String>,
    /// 識別にかける画像ファイル
    pub image_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            list_profiles: false,
            history: false,
            json: false,
            verbose: false,
            language: None,
            profile: None,
            model: None,
            image_path: None,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("botanix")
        .about("Identify a plant from a photo and keep a collection of past findings")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-profiles")
                .short('L')
                .long("list-profiles")
                .help("List currently available provider profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("history")
                .short('H')
                .long("history")
                .help("Show saved identification history (newest first)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Output the report or history as JSON instead of formatted text")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("language")
                .short('l')
                .long("language")
                .value_name("lang")
                .help("Output language: en or bn (default: BOTANIX_LANG, then en)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify provider profile (gemini, fixture, or a name from profiles.json)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gemini-2.5-flash)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("image")
                .index(1)
                .value_name("image")
                .help("Path to the photo to identify")
                .num_args(0..=1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let language = match matches.get_one::<String>("language") {
        Some(raw) => Some(Language::parse(raw).ok_or_else(|| {
            Error::invalid_argument(format!("Unknown language: {}. Supported: en, bn", raw))
        })?),
        None => None,
    };
    Ok(Config {
        help: matches.get_flag("help"),
        list_profiles: matches.get_flag("list-profiles"),
        history: matches.get_flag("history"),
        json: matches.get_flag("json"),
        verbose: matches.get_flag("verbose"),
        language,
        profile: matches.get_one::<String>("profile").cloned(),
        model: matches.get_one::<String>("model").cloned(),
        image_path: matches.get_one::<String>("image").map(PathBuf::from),
    })
}

/// Config から実行コマンドを決める
///
/// 優先順位: help → list-profiles → history → identify。
/// どのフラグも無く画像も無い場合は help 扱い。
pub fn config_to_command(config: &Config) -> Result<BotanixCommand, Error> {
    if config.help {
        return Ok(BotanixCommand::Help);
    }
    if config.list_profiles {
        return Ok(BotanixCommand::ListProfiles);
    }
    if config.history {
        return Ok(BotanixCommand::History { json: config.json });
    }
    match &config.image_path {
        Some(image_path) => Ok(BotanixCommand::Identify {
            image_path: image_path.clone(),
            json: config.json,
        }),
        None => Ok(BotanixCommand::Help),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    matches_to_config(&matches)
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    emit_fallback_completion(shell);
}

fn emit_fallback_completion(shell: Shell) {
    let opts = "-h --help -L --list-profiles -H --history --json -v --verbose -l --language -p --profile -m --model --generate";
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for botanix (options + image paths)
_botanix() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{opts}" -- "$cur") $(compgen -f -- "$cur"))
}}
complete -F _botanix botanix
"#,
                opts = opts
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for botanix (options + image paths)
#compdef botanix
local -a reply
reply=({opts})
_describe 'botanix' reply
_files
"#,
                opts = opts
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for botanix (options + image paths)
complete -c botanix -l help -s h -d "Show help"
complete -c botanix -l list-profiles -s L -d "List profiles"
complete -c botanix -l history -s H -d "Show saved history"
complete -c botanix -l json -d "Output as JSON"
complete -c botanix -l verbose -s v -d "Verbose debug logs"
complete -c botanix -l language -s l -d "Output language" -r -a "en bn"
complete -c botanix -l profile -s p -d "Provider profile" -r
complete -c botanix -l model -s m -d "Model name" -r
complete -c botanix -l generate -d "Generate completion script" -r -a "bash zsh fish"
"#
            );
        }
        _ => {
            eprintln!("Completion for {shell} is not supported");
        }
    }
}

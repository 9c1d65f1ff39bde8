mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::{BotanixCommand, Language};
use ports::inbound::RunBotanixApp;
use wiring::{wire_botanix, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    /// 出力言語を決める: -l フラグ → BOTANIX_LANG → en
    fn resolve_language(&self, config: &Config) -> Language {
        config
            .language
            .or_else(|| {
                self.app
                    .env_resolver
                    .language_from_env()
                    .and_then(|raw| Language::parse(&raw))
            })
            .unwrap_or_default()
    }

    fn log(&self, level: LogLevel, message: &str, kind: &str) {
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message: message.to_string(),
            layer: Some("cli".to_string()),
            kind: Some(kind.to_string()),
            fields: None,
        });
    }

    fn run_identify(
        &self,
        image_path: &std::path::Path,
        json: bool,
        language: Language,
    ) -> Result<i32, Error> {
        let messages = language.messages();
        let image_data = self.app.fs.read(image_path)?;
        match self.app.identify_use_case.identify(&image_data, language) {
            Ok(record) => {
                // 履歴保存は便利機能。失敗しても識別結果の表示は続ける
                if let Err(e) = self.app.history_use_case.save(&record) {
                    self.log(
                        LogLevel::Warn,
                        &format!("failed to save history: {}", e),
                        "history",
                    );
                }
                if json {
                    let rendered = serde_json::to_string_pretty(&record)
                        .map_err(|e| Error::json(format!("Failed to serialize record: {}", e)))?;
                    println!("{}", rendered);
                } else {
                    print!("{}", adapter::render_record(&record, messages));
                }
                Ok(0)
            }
            // モデル側の失敗はユーザー向けの定型文に変換する
            Err(e @ Error::Http(_)) | Err(e @ Error::MalformedReply(_)) => {
                self.log(LogLevel::Error, &e.to_string(), "identify");
                eprintln!("{}", messages.error_inconclusive);
                Ok(e.exit_code())
            }
            Err(e) => Err(e),
        }
    }
}

impl RunBotanixApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config)?;
        let command_name = cmd_name_for_log(&cmd);
        let language = self.resolve_language(&config);
        if config.verbose {
            eprintln!(
                "botanix: profile={} home={}",
                self.app.profile.name,
                self.app.home_dir.display()
            );
        }
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("language".to_string(), serde_json::json!(language.as_str()));
                Some(m)
            },
        });

        let result = match cmd {
            BotanixCommand::Help => {
                print_help();
                Ok(0)
            }
            BotanixCommand::ListProfiles => {
                let (names, default) = self.app.profiles_use_case.list();
                for name in &names {
                    if default.as_deref() == Some(name.as_str()) {
                        println!("{} (default)", name);
                    } else {
                        println!("{}", name);
                    }
                }
                Ok(0)
            }
            BotanixCommand::History { json } => {
                let history = self.app.history_use_case.list();
                if json {
                    let rendered = serde_json::to_string_pretty(&history)
                        .map_err(|e| Error::json(format!("Failed to serialize history: {}", e)))?;
                    println!("{}", rendered);
                } else {
                    print!("{}", adapter::render_history(&history, language.messages()));
                }
                Ok(0)
            }
            BotanixCommand::Identify { image_path, json } => {
                self.run_identify(&image_path, json, language)
            }
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn cmd_name_for_log(cmd: &BotanixCommand) -> &'static str {
    match cmd {
        BotanixCommand::Help => "help",
        BotanixCommand::ListProfiles => "list-profiles",
        BotanixCommand::History { .. } => "history",
        BotanixCommand::Identify { .. } => "identify",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("botanix: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match &outcome {
        ParseOutcome::Config(c) => c.clone(),
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(*shell);
            return Ok(0);
        }
    };
    let app = wire_botanix(config.profile.as_deref(), config.model.as_deref())?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: botanix [options] [image]");
}

fn print_help() {
    println!("Usage: botanix [options] [image]");
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -L, --list-profiles       List currently available provider profiles (from profiles.json + built-ins)");
    println!("  -H, --history             Show saved identification history (newest first)");
    println!("  --json                    Output the report or history as JSON instead of formatted text");
    println!("  -l, --language <lang>     Output language: en or bn. Default: BOTANIX_LANG, then en.");
    println!("  -p, --profile <profile>   Specify provider profile (gemini, fixture, or a name from profiles.json). Default: profiles.json default, or gemini.");
    println!("  -m, --model <model>       Specify model name (e.g. gemini-2.5-flash). Default: profile default from profiles.json");
    println!("  -v, --verbose             Emit verbose debug logs to stderr (for troubleshooting)");
    println!("  --generate <shell>        Generate shell completion script (bash, zsh, fish). Source the output to enable tab completion.");
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY   API key for the built-in gemini profile (profiles.json can name a different variable).");
    println!("  BOTANIX_LANG     Default output language (en or bn).");
    println!("  BOTANIX_HOME     Home directory. Profiles: $BOTANIX_HOME/profiles.json; history: $BOTANIX_HOME/botanix_history_v3.json");
    println!("                  If unset, $XDG_CONFIG_HOME/botanix (e.g. ~/.config/botanix) is used.");
    println!();
    println!("Description:");
    println!("  Identify the plant in a photo and print a structured report");
    println!("  (names, care guide, safety, health diagnostics). Each successful");
    println!("  identification is saved to the local history.");
    println!();
    println!("Examples:");
    println!("  botanix garden/rose.jpg");
    println!("  botanix -l bn tulsi.jpg");
    println!("  botanix -p fixture --json leaf.png");
    println!("  botanix --history");
}

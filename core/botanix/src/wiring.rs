//! 配線: 標準アダプタでアプリを組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, StdClock, StdEnvResolver, StdFileSystem, StdIdGenerator};
use common::error::Error;
use common::llm::config::ProfilesConfig;
use common::llm::resolver::{resolve_profile, ResolvedProfile};
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{FileHistoryStore, JpegImageNormalizer, LlmVision};
use crate::usecase::{HistoryUseCase, IdentifyUseCase, ProfilesUseCase};

/// ログファイルのパス（ホーム配下）
const LOG_FILE: &str = "logs/botanix.jsonl";

/// 組み立て済みアプリケーション
pub struct App {
    pub identify_use_case: IdentifyUseCase,
    pub history_use_case: HistoryUseCase,
    pub profiles_use_case: ProfilesUseCase,
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
    pub profile: ResolvedProfile,
    pub home_dir: PathBuf,
}

/// profiles.json を読み込む
///
/// ファイルが無い場合は既定設定。壊れている場合は設定ミスとして
/// パス付きのエラーで落とす（黙って無視しない）。
fn load_profiles_config(
    fs: &dyn FileSystem,
    env_resolver: &dyn EnvResolver,
) -> Result<ProfilesConfig, Error> {
    let path = env_resolver.resolve_profiles_config_path()?;
    if !fs.exists(&path) {
        return Ok(ProfilesConfig::default());
    }
    let contents = fs.read_to_string(&path)?;
    ProfilesConfig::parse(&contents)
        .map_err(|e| Error::json(format!("Invalid profiles config {}: {}", path.display(), e)))
}

/// 標準アダプタで App を組み立てる
///
/// # Arguments
/// * `profile` - -p/--profile で明示されたプロファイル名
/// * `model` - -m/--model で明示されたモデル名
pub fn wire_botanix(profile: Option<&str>, model: Option<&str>) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let clock = Arc::new(StdClock);
    let id_generator = Arc::new(StdIdGenerator::new(clock.clone()));

    let home_dir = env_resolver.resolve_home_dir()?;
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), home_dir.join(LOG_FILE)));

    let config = load_profiles_config(fs.as_ref(), env_resolver.as_ref())?;
    let resolved = resolve_profile(&config, profile, model)?;

    let identify_use_case = IdentifyUseCase::new(
        Arc::new(JpegImageNormalizer::new()),
        Arc::new(LlmVision::new(resolved.clone())),
        id_generator,
        clock,
    );
    let history_use_case = HistoryUseCase::new(Arc::new(FileHistoryStore::new(
        Arc::clone(&fs),
        home_dir.clone(),
    )));
    let profiles_use_case = ProfilesUseCase::new(config);

    Ok(App {
        identify_use_case,
        history_use_case,
        profiles_use_case,
        fs,
        env_resolver,
        logger,
        profile: resolved,
        home_dir,
    })
}

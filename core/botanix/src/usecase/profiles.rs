//! プロファイル一覧ユースケース

use common::llm::config::ProfilesConfig;
use common::llm::resolver::list_profiles;

pub struct ProfilesUseCase {
    config: ProfilesConfig,
}

impl ProfilesUseCase {
    pub fn new(config: ProfilesConfig) -> Self {
        Self { config }
    }

    /// 利用可能なプロファイル名（ソート済み）と既定プロファイル名
    pub fn list(&self) -> (Vec<String>, Option<String>) {
        list_profiles(&self.config)
    }
}

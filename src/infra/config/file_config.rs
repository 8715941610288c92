use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{
    AppConfig, ClearPolicy, ComposerConfig, DeliveryMode, LogConfig, WorkspaceConfig,
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub workspace: Option<FileWorkspaceConfig>,
    pub composer: Option<FileComposerConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(workspace) = self.workspace {
            workspace.merge_into(&mut config.workspace);
        }

        if let Some(composer) = self.composer {
            composer.merge_into(&mut config.composer);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub directory: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(directory) = self.directory {
            config.directory = Some(directory);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileWorkspaceConfig {
    pub seed_file: Option<PathBuf>,
    pub initial_chat: Option<String>,
}

impl FileWorkspaceConfig {
    fn merge_into(self, config: &mut WorkspaceConfig) {
        if let Some(seed_file) = self.seed_file {
            config.seed_file = Some(seed_file);
        }

        if let Some(initial_chat) = self.initial_chat {
            config.initial_chat = Some(initial_chat);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileComposerConfig {
    pub max_draft_chars: Option<usize>,
    pub clear_policy: Option<ClearPolicy>,
    pub delivery: Option<DeliveryMode>,
}

impl FileComposerConfig {
    fn merge_into(self, config: &mut ComposerConfig) {
        if let Some(max_draft_chars) = self.max_draft_chars {
            config.max_draft_chars = Some(max_draft_chars);
        }

        if let Some(clear_policy) = self.clear_policy {
            config.clear_policy = clear_policy;
        }

        if let Some(delivery) = self.delivery {
            config.delivery = delivery;
        }
    }
}

use std::path::Path;

use clitree_codegen_click::{PromptError, ReplacePrompt};
use dialoguer::Confirm;

/// Ask on the terminal before replacing an existing project
pub struct TerminalPrompt;

impl ReplacePrompt for TerminalPrompt {
    fn confirm_replace(&self, path: &Path) -> Result<bool, PromptError> {
        Confirm::new()
            .with_prompt(format!("'{}' already exists. Replace it?", path.display()))
            .default(false)
            .interact()
            .map_err(|e| Box::new(e) as PromptError)
    }
}

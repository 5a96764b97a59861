//! Terminal prompts backed by `dialoguer`.

use dialoguer::{Input, MultiSelect, Select};
use npr_core::interactive::Prompter;
use npr_util::errors::NprError;

pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select_workspaces(&mut self, options: &[String]) -> Result<Vec<usize>, NprError> {
        MultiSelect::new()
            .with_prompt("Workspaces")
            .items(options)
            .interact()
            .map_err(prompt_error)
    }

    fn select_script(&mut self, options: &[String]) -> Result<usize, NprError> {
        Select::new()
            .with_prompt("Script")
            .items(options)
            .default(0)
            .interact()
            .map_err(prompt_error)
    }

    fn input_arguments(&mut self) -> Result<String, NprError> {
        Input::<String>::new()
            .with_prompt("Arguments")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }
}

fn prompt_error(e: dialoguer::Error) -> NprError {
    NprError::Prompt {
        message: e.to_string(),
    }
}

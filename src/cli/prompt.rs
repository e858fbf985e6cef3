use codesync::core::{CodesyncError, CodesyncResult};
use codesync::di::UserPrompt;
use dialoguer::{Confirm, Password, Select};

fn prompt_error(e: dialoguer::Error) -> CodesyncError {
    CodesyncError::Prompt(format!("Failed to read input: {}", e))
}

/// Terminal prompts via dialoguer. Escape or `q` dismisses a selection.
pub struct DialoguerPrompt;

impl UserPrompt for DialoguerPrompt {
    fn select(&self, prompt: &str, items: &[String]) -> CodesyncResult<Option<usize>> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str) -> CodesyncResult<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_opt()
            .map_err(prompt_error)?;
        Ok(answer.unwrap_or(false))
    }

    fn secret(&self, prompt: &str) -> CodesyncResult<Option<String>> {
        let input = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)?;
        if input.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(input))
        }
    }

    fn info(&self, message: &str) {
        println!("✓ {}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}

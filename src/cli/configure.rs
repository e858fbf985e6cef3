use super::prompt::DialoguerPrompt;
use codesync::core::CodesyncResult;
use codesync::credential::{configure, ConfigureOutcome, KeyringSecretStore};

pub fn run() -> CodesyncResult<()> {
    println!("Codesync needs a GitHub personal access token with the `gist` scope.");
    println!("Create one at https://github.com/settings/tokens");
    println!();

    let outcome = configure(&DialoguerPrompt, &KeyringSecretStore)?.ensure_accepted()?;
    if outcome == ConfigureOutcome::Cancelled {
        println!("No token entered. Nothing was stored.");
    }
    Ok(())
}

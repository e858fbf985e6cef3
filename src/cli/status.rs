use super::prompt::DialoguerPrompt;
use codesync::core::path::config_file;
use codesync::core::{CodesyncResult, EditorVariant};
use codesync::credential::{TokenSource, TOKEN_ENV};
use codesync::di::SyncContext;
use std::sync::Arc;

pub fn run(editor: Option<EditorVariant>) -> CodesyncResult<()> {
    let ctx = SyncContext::new(Arc::new(DialoguerPrompt), editor)?;

    println!("Editor:        {}", ctx.config.editor().app_name());
    println!("Settings file: {}", ctx.local.settings_path()?.display());

    match ctx.state.remote_handle()? {
        Some(handle) => println!("Gist:          {}", handle),
        None => println!("Gist:          not linked (the next sync creates one)"),
    }

    let token = match ctx.token_source()? {
        TokenSource::Environment => format!("from {}", TOKEN_ENV),
        TokenSource::Keychain => "stored in keychain".to_string(),
        TokenSource::Missing => "not configured (run `codesync configure`)".to_string(),
    };
    println!("Token:         {}", token);
    println!("Config file:   {}", config_file()?.display());

    Ok(())
}

use super::prompt::DialoguerPrompt;
use codesync::core::{CodesyncResult, EditorVariant};
use codesync::di::SyncContext;
use codesync::sync::{Direction, Reconciler, SyncOptions, SyncOutcome};
use std::sync::Arc;

pub async fn run(
    direction: Option<Direction>,
    assume_yes: bool,
    editor: Option<EditorVariant>,
) -> CodesyncResult<()> {
    let ctx = SyncContext::new(Arc::new(DialoguerPrompt), editor)?;
    let editor = ctx.config.editor();

    let options = SyncOptions {
        direction,
        assume_yes,
    };
    let outcome = Reconciler::new(&ctx).run(&options).await?;

    match outcome {
        SyncOutcome::Created(handle) => {
            println!("✓ Created private gist {}", handle);
            println!("  Run `codesync link {}` on your other machines.", handle);
        }
        SyncOutcome::Updated(handle) => {
            println!("✓ Uploaded settings and extensions to gist {}", handle);
        }
        SyncOutcome::Applied {
            settings_keys,
            report,
        } => {
            println!("✓ Applied {} setting(s)", settings_keys);
            println!("  {}", report.summary());
            if report.installed_count() > 0 {
                println!();
                println!(
                    "Restart {} to activate the new extensions.",
                    editor.app_name()
                );
            }
        }
        SyncOutcome::Cancelled => {
            println!("Sync cancelled. Nothing was changed.");
        }
    }

    Ok(())
}

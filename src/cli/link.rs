use codesync::core::CodesyncResult;
use codesync::di::StateStore;
use codesync::state::FileStateStore;
use codesync::sync::RemoteHandle;

/// Point this machine at an existing gist, accepting an id or a gist URL.
pub fn run(gist: String) -> CodesyncResult<()> {
    let handle = RemoteHandle::parse(&gist)?;
    let store = FileStateStore::open_default()?;

    if let Some(previous) = store.remote_handle()? {
        if previous != handle {
            println!("Replacing previously linked gist {}", previous);
        }
    }
    store.set_remote_handle(&handle)?;

    println!("✓ Linked gist {}", handle);
    println!("  Run `codesync sync --pull` to apply it here.");
    Ok(())
}

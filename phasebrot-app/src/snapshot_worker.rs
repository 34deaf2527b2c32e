use std::path::PathBuf;
use std::sync::mpsc;

use tracing::{debug, error, info};

use phasebrot_core::ViewportState;
use phasebrot_render::{save_snapshot, FrameBuffer};

/// A frame handed off to be written as PNG.
pub(crate) struct SnapshotRequest {
    pub(crate) buffer: FrameBuffer,
    pub(crate) state: ViewportState,
    pub(crate) dir: PathBuf,
}

/// Spawn the thread that encodes and writes snapshots.
///
/// PNG encoding of a full frame takes far longer than a fill, so it runs
/// off the frame loop. The thread exits when the sender is dropped.
pub(crate) fn spawn_snapshot_worker() -> std::io::Result<mpsc::Sender<SnapshotRequest>> {
    let (tx, rx) = mpsc::channel::<SnapshotRequest>();

    std::thread::Builder::new()
        .name("snapshot-writer".into())
        .spawn(move || {
            debug!("Snapshot worker started");
            while let Ok(req) = rx.recv() {
                match save_snapshot(&req.buffer, &req.state, &req.dir) {
                    Ok(path) => info!("Saved snapshot {}", path.display()),
                    Err(e) => error!("Failed to save snapshot: {e}"),
                }
            }
            debug!("Snapshot worker exiting");
        })?;

    Ok(tx)
}

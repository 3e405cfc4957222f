use client::AssetClient;
use models::PageResponse;
use tokio::sync::mpsc::UnboundedSender;
use viewer::Command;

/// Completion of one spawned fetch, tagged with its request sequence number.
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub result: client::Result<PageResponse>,
}

/// Perform `command` in the background; the outcome is sent on `tx`.
///
/// In-flight requests are never cancelled. Superseded ones are filtered out
/// by sequence number when their outcome is applied.
pub fn dispatch(command: Command, client: &AssetClient, tx: &UnboundedSender<FetchOutcome>) {
    match command {
        Command::Fetch(request) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.fetch_page(&request.query).await;
                // The receiver is gone only when the UI is shutting down.
                let _ = tx.send(FetchOutcome { seq: request.seq, result });
            });
        }
    }
}

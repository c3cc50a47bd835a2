//! Background archiver turning queued skin uploads into files on disk.

use records::SkinUpload;

/// Consume skin uploads from the queue and archive each one.
///
/// Runs until the sending side closes. A failed write is logged and the loop
/// keeps going; one bad record must not stall the queue.
pub async fn archive_received_records(
    mut rx: tokio::sync::mpsc::Receiver<SkinUpload>,
    archive_directory: String,
) {
    while let Some(upload) = rx.recv().await {
        log::info!(
            "Archiving skin {} for {} ({})",
            upload.skin.skin_id,
            upload.player_name,
            upload.xuid
        );

        if let Err(error) = write_record(&archive_directory, &upload) {
            log::error!(
                "Error archiving skin {} for {}: {}",
                upload.skin.skin_id,
                upload.player_name,
                error
            );
        }
    }
}

/// Write one upload as pretty-printed JSON under the archive directory,
/// creating the directory on first use.
pub fn write_record(archive_directory: &str, upload: &SkinUpload) -> std::io::Result<()> {
    let archive_directory = std::env::current_dir()?.join(archive_directory);
    if !archive_directory.exists() {
        log::info!(
            "Archive directory not found. Creating at {}",
            archive_directory.to_string_lossy()
        );
        std::fs::create_dir_all(&archive_directory)?;
    }

    let file_name = sanitize_file_name(&format!("{}-{}.json", upload.xuid, upload.skin.skin_id));
    let record_path = archive_directory.join(file_name);

    let json = serde_json::to_vec_pretty(upload).map_err(std::io::Error::other)?;
    std::fs::write(&record_path, json)?;
    log::info!("Wrote {}", record_path.to_string_lossy());

    Ok(())
}

/// Both identifiers in the file name are client-supplied; anything outside
/// `[A-Za-z0-9._-]` becomes an underscore so the name stays a plain file in
/// the archive directory.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_upload(skin_id: &str) -> SkinUpload {
        SkinUpload {
            player_name: "Steve".to_string(),
            xuid: "42".to_string(),
            server_address: "lobby:19132".to_string(),
            skin: records::Skin {
                skin_id: skin_id.to_string(),
                skin_data: vec![1, 2, 3, 4],
                ..Default::default()
            },
        }
    }

    #[test]
    fn writes_record_as_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let upload = sample_upload("plain-skin");

        write_record(dir.path().to_str().unwrap(), &upload).unwrap();

        let written = dir.path().join("42-plain-skin.json");
        let contents = std::fs::read_to_string(written).unwrap();
        let parsed: SkinUpload = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, upload);
    }

    #[test]
    fn hostile_identifiers_cannot_leave_the_archive_directory() {
        let dir = tempfile::tempdir().unwrap();
        let upload = sample_upload("../../etc/passwd");

        write_record(dir.path().to_str().unwrap(), &upload).unwrap();

        assert!(dir.path().join("42-.._.._etc_passwd.json").exists());
    }

    #[tokio::test]
    async fn archiver_drains_the_queue_until_closed() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, rx) = tokio::sync::mpsc::channel(4);

        tx.send(sample_upload("first")).await.unwrap();
        tx.send(sample_upload("second")).await.unwrap();
        drop(tx);

        archive_received_records(rx, dir.path().to_string_lossy().into_owned()).await;

        assert!(dir.path().join("42-first.json").exists());
        assert!(dir.path().join("42-second.json").exists());
    }
}

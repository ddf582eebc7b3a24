//! Contract store backed by a directory of Markdown files.
//!
//! Each contract lives in `<root>/<uuid>.md` with its structured fields as
//! YAML frontmatter. Writes go to a sibling temp file first and are renamed
//! into place, so readers never see a half-written document.
//!
//! Writers serialize on `<root>/.lock`, created with `create_new` so only one
//! writer at a time (across processes) can hold it. A writer that dies while
//! holding it leaves the file behind; it must then be removed by hand.

use super::lock::{WriteGuard, LOCK_FILE};
use super::query::native_order;
use super::{
    ContractStore, ContractStoreMut, DateSpan, Query, RecoveredNumber, StoreError,
    UnreadableContract,
};
use crate::common::frontmatter::{generate_frontmatter, parse_frontmatter};
use crate::contract::id::{contract_id_from_filename, generate_contract_id, is_uuid};
use crate::contract::{Contract, ContractFrontmatter};
use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::time::Instant;
use tracing::{debug, warn};

/// How long a writer waits for the store lock before giving up.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(10);

const LOCK_RETRY_INTERVAL: Duration = Duration::from_millis(20);

/// The only field needed to keep an otherwise unreadable document's number taken.
#[derive(Deserialize)]
struct StoredNumber {
    #[serde(default)]
    number: Option<u32>,
}

/// Result of reading every document in the store folder.
#[derive(Default)]
struct Scan {
    contracts: Vec<Contract>,
    unreadable: Vec<UnreadableContract>,
}

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    lock_timeout: Duration,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.md"))
    }

    fn parse_document(path: &Path, id: &str, content: &str) -> Result<Contract, StoreError> {
        let (frontmatter, title, body) = parse_frontmatter::<ContractFrontmatter>(content)
            .map_err(|source| StoreError::Corrupt {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Contract {
            id: Some(id.to_string()),
            title,
            body,
            frontmatter,
        })
    }

    async fn write_document(&self, id: &str, contract: &Contract) -> Result<(), StoreError> {
        let content = generate_frontmatter(&contract.frontmatter, &contract.title, &contract.body)
            .map_err(|source| StoreError::Render {
                id: id.to_string(),
                source,
            })?;
        let target = self.document_path(id);
        let temp = self.root.join(format!("{id}.md.tmp"));
        fs::write(&temp, content).await?;
        fs::rename(&temp, &target).await?;
        Ok(())
    }

    /// Read every contract document.
    ///
    /// Documents that fail to read or parse are left out of the contracts and
    /// recorded as unreadable, with whatever number can still be salvaged.
    async fn scan(&self) -> Result<Scan, StoreError> {
        if !fs::try_exists(&self.root).await? {
            return Ok(Scan::default());
        }

        let mut scan = Scan::default();
        let mut entries = fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(id) = name.to_str().and_then(contract_id_from_filename) else {
                continue;
            };
            let path = entry.path();
            let read = match fs::read_to_string(&path).await {
                Ok(content) => Self::parse_document(&path, id, &content)
                    .map_err(|e| (e.to_string(), salvage_number(&content))),
                Err(e) => Err((e.to_string(), RecoveredNumber::Unknown)),
            };
            match read {
                Ok(contract) => scan.contracts.push(contract),
                Err((reason, number)) => {
                    warn!(path = %path.display(), error = %reason, ?number, "Unreadable contract document");
                    scan.unreadable.push(UnreadableContract {
                        id: id.to_string(),
                        number,
                        reason,
                    });
                }
            }
        }

        debug!(
            count = scan.contracts.len(),
            unreadable = scan.unreadable.len(),
            root = %self.root.display(),
            "Scanned contracts"
        );
        Ok(scan)
    }
}

fn salvage_number(content: &str) -> RecoveredNumber {
    match parse_frontmatter::<StoredNumber>(content) {
        Ok((StoredNumber { number: Some(number) }, _, _)) => RecoveredNumber::Number(number),
        Ok((StoredNumber { number: None }, _, _)) => RecoveredNumber::Unnumbered,
        Err(_) => RecoveredNumber::Unknown,
    }
}

#[async_trait]
impl ContractStore for FileStore {
    async fn get(&self, id: &str) -> Result<Option<Contract>, StoreError> {
        if !is_uuid(id) {
            return Ok(None);
        }
        let path = self.document_path(id);
        if !fs::try_exists(&path).await? {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).await?;
        Self::parse_document(&path, id, &content).map(Some)
    }

    async fn query(&self, query: &Query) -> Result<Vec<Contract>, StoreError> {
        let mut matches: Vec<Contract> = self
            .scan()
            .await?
            .contracts
            .into_iter()
            .filter(|c| query.matches(c))
            .collect();
        matches.sort_by(native_order);
        Ok(matches)
    }

    async fn max_number(&self) -> Result<Option<u32>, StoreError> {
        let scan = self.scan().await?;
        let mut max = scan.contracts.iter().filter_map(Contract::number).max();
        for doc in &scan.unreadable {
            max = max.max(doc.salvaged_number()?);
        }
        Ok(max)
    }

    async fn date_span(&self) -> Result<Option<DateSpan>, StoreError> {
        Ok(DateSpan::of(
            self.scan().await?.contracts.iter().filter_map(Contract::date),
        ))
    }

    async fn unreadable(&self) -> Result<Vec<UnreadableContract>, StoreError> {
        Ok(self.scan().await?.unreadable)
    }
}

#[async_trait]
impl ContractStoreMut for FileStore {
    async fn lock_writes(&self) -> Result<WriteGuard, StoreError> {
        fs::create_dir_all(&self.root).await?;
        let lock_path = self.root.join(LOCK_FILE);
        let started = Instant::now();
        loop {
            match fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&lock_path)
                .await
            {
                Ok(mut file) => {
                    let guard = WriteGuard::file(lock_path);
                    file.write_all(std::process::id().to_string().as_bytes())
                        .await?;
                    return Ok(guard);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if started.elapsed() >= self.lock_timeout {
                        return Err(StoreError::Locked {
                            path: lock_path.display().to_string(),
                        });
                    }
                    tokio::time::sleep(LOCK_RETRY_INTERVAL).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn insert(&self, mut contract: Contract) -> Result<Contract, StoreError> {
        if let Some(id) = &contract.id {
            return Err(StoreError::AlreadyPersisted(id.clone()));
        }
        fs::create_dir_all(&self.root).await?;
        let id = generate_contract_id();
        self.write_document(&id, &contract).await?;
        contract.id = Some(id);
        Ok(contract)
    }

    async fn update(&self, contract: &Contract) -> Result<(), StoreError> {
        let id = contract.id.as_deref().ok_or(StoreError::MissingId)?;
        if !is_uuid(id) || !fs::try_exists(self.document_path(id)).await? {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.write_document(id, contract).await
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

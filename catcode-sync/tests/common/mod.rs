#![allow(dead_code)]

use base64::{engine::general_purpose, Engine as _};
use catcode_sync::{
    CodeHost, CodeItem, CodeRepository, DiscoveryEvent, EventBus, FileContent, HostError,
    PublishError, RateLimitInfo,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::time::Instant;

pub const OWNER: &str = "acme";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/catcode")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

pub fn item(repo: &str, path: &str, sha: &str) -> CodeItem {
    CodeItem {
        path: path.to_string(),
        sha: sha.to_string(),
        repository: CodeRepository {
            name: repo.to_string(),
            owner_login: Some(OWNER.to_string()),
            url: format!("https://api.github.com/repos/{OWNER}/{repo}"),
        },
    }
}

/// `count` distinct items, one repository each.
pub fn items(prefix: &str, count: usize) -> Vec<CodeItem> {
    (0..count)
        .map(|i| item(&format!("{prefix}-{i}"), "catcode.yaml", &format!("{prefix}{i:04}")))
        .collect()
}

enum Page {
    Items(Vec<CodeItem>),
    Status(u16, String),
}

enum File {
    Encoded(String),
    NoContent,
    Status(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub per_page: u8,
    pub issued_at: Instant,
}

/// In-memory code host serving scripted search pages and files.
#[derive(Default)]
pub struct FakeHost {
    pages: Vec<Page>,
    files: HashMap<(String, String), File>,
    rate_limit: Option<Result<RateLimitInfo, u16>>,
    searches: Mutex<Vec<SearchRequest>>,
    fetches: Mutex<Vec<String>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, items: Vec<CodeItem>) -> Self {
        self.pages.push(Page::Items(items));
        self
    }

    pub fn with_failing_page(mut self, status_code: u16, body: &str) -> Self {
        self.pages.push(Page::Status(status_code, body.to_string()));
        self
    }

    pub fn with_rate_limit(mut self, info: RateLimitInfo) -> Self {
        self.rate_limit = Some(Ok(info));
        self
    }

    pub fn with_rate_limit_status(mut self, status_code: u16) -> Self {
        self.rate_limit = Some(Err(status_code));
        self
    }

    pub fn with_file(mut self, repo: &str, path: &str, text: &str) -> Self {
        let encoded = general_purpose::STANDARD.encode(text);
        self.files.insert(key(repo, path), File::Encoded(encoded));
        self
    }

    pub fn with_empty_response(mut self, repo: &str, path: &str) -> Self {
        self.files.insert(key(repo, path), File::NoContent);
        self
    }

    pub fn with_file_status(mut self, repo: &str, path: &str, status_code: u16) -> Self {
        self.files.insert(key(repo, path), File::Status(status_code));
        self
    }

    pub fn searches(&self) -> Vec<SearchRequest> {
        self.searches.lock().unwrap().clone()
    }

    /// `owner/repo/path` of every file requested, in request order.
    pub fn fetches(&self) -> Vec<String> {
        self.fetches.lock().unwrap().clone()
    }
}

fn key(repo: &str, path: &str) -> (String, String) {
    (repo.to_string(), path.to_string())
}

impl CodeHost for FakeHost {
    async fn search_code(
        &self,
        query: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<CodeItem>, HostError> {
        self.searches.lock().unwrap().push(SearchRequest {
            query: query.to_string(),
            page,
            per_page,
            issued_at: Instant::now(),
        });

        match self.pages.get(page as usize - 1) {
            Some(Page::Items(items)) => Ok(items.clone()),
            Some(Page::Status(status_code, body)) => Err(HostError::Status {
                status_code: *status_code,
                body: body.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn get_file(&self, owner: &str, repo: &str, path: &str) -> Result<FileContent, HostError> {
        self.fetches
            .lock()
            .unwrap()
            .push(format!("{owner}/{repo}/{path}"));

        match self.files.get(&key(repo, path)) {
            Some(File::Encoded(content)) => Ok(FileContent {
                content: Some(content.clone()),
            }),
            Some(File::NoContent) => Ok(FileContent { content: None }),
            Some(File::Status(status_code)) => Err(HostError::Status {
                status_code: *status_code,
                body: "error".to_string(),
            }),
            None => Err(HostError::Status {
                status_code: 404,
                body: "Not Found".to_string(),
            }),
        }
    }

    async fn search_rate_limit(&self) -> Result<RateLimitInfo, HostError> {
        match &self.rate_limit {
            None => Ok(RateLimitInfo::unlimited()),
            Some(Ok(info)) => Ok(info.clone()),
            Some(Err(status_code)) => Err(HostError::Status {
                status_code: *status_code,
                body: "rate limit unavailable".to_string(),
            }),
        }
    }
}

/// Bus that keeps every published event.
#[derive(Default)]
pub struct RecordingBus {
    events: Mutex<Vec<DiscoveryEvent>>,
    reject: bool,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<DiscoveryEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.body.name).collect()
    }
}

impl EventBus for RecordingBus {
    async fn publish(&self, event: DiscoveryEvent) -> Result<(), PublishError> {
        if self.reject {
            return Err(PublishError::Handler("catalog unavailable".to_string()));
        }
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

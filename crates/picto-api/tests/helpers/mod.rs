//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p picto-api`.
//! Storage goes to a per-test temp directory and translation calls are served by
//! `RecordingTranslator`, so no network access is needed.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use picto_api::setup::routes::build_router;
use picto_api::state::AppState;
use picto_storage::LocalStorage;
use picto_translate::{TargetLang, Translation, TranslationError, Translator};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Translator fake that records every call and answers deterministically.
pub struct RecordingTranslator {
    calls: Mutex<Vec<(String, TargetLang)>>,
    failure: Option<fn() -> TranslationError>,
}

impl RecordingTranslator {
    pub fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing_with(failure: fn() -> TranslationError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(failure),
        }
    }

    pub fn calls(&self) -> Vec<(String, TargetLang)> {
        self.calls.lock().unwrap().clone()
    }

    /// Text the fake returns for a successful call.
    pub fn expected_output(text: &str, target: TargetLang) -> String {
        format!("[{}] {}", target, text)
    }
}

#[async_trait]
impl Translator for RecordingTranslator {
    async fn translate(
        &self,
        text: &str,
        target: TargetLang,
    ) -> Result<Translation, TranslationError> {
        self.calls.lock().unwrap().push((text.to_string(), target));
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(Translation {
                text: Self::expected_output(text, target),
                detected_source_language: Some("EN".to_string()),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

/// Test application: server plus the resources it owns.
pub struct TestApp {
    pub server: TestServer,
    pub translator: Arc<RecordingTranslator>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn storage_dir(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Sorted names of the files currently in the storage directory.
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.storage_dir())
            .expect("Failed to read storage directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

/// Setup test app with isolated local storage and a succeeding translator.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(RecordingTranslator::succeeding(), None).await
}

pub async fn setup_test_app_with(
    translator: RecordingTranslator,
    max_body_bytes: Option<usize>,
) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage = LocalStorage::new(temp_dir.path())
        .await
        .expect("Failed to create local storage");

    let translator = Arc::new(translator);
    let state = Arc::new(AppState::new(Arc::new(storage), translator.clone()));
    let router = build_router(state, max_body_bytes);

    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        translator,
        _temp_dir: temp_dir,
    }
}

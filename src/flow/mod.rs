//! The interactive selection pipeline
//!
//! login → search → pick a title → list depots → pick a depot → list
//! manifests → pick a manifest → render the console command → logout.
//!
//! The flow owns no business logic: every step is delegated to the catalog
//! session, the store search, the extractors and the command formatter. All
//! of them arrive as [`Capabilities`], so a run can be driven entirely by
//! fakes.

pub mod state;

pub use state::{FlowState, StateTrail};

use std::path::PathBuf;

use crate::catalog::CatalogSession;
use crate::command::{self, RenderedCommand};
use crate::domain::{Application, Depot, Manifest};
use crate::error::Result;
use crate::extract::{extract_depots, extract_manifests};
use crate::progress::ProgressReporter;
use crate::record::{self, DownloadRequest};
use crate::search::StoreSearch;
use crate::system::{Clipboard, ConsoleLauncher};
use crate::ui::Prompter;
use crate::ui::display::{application_label, depot_label, manifest_label};

/// Everything the flow talks to
pub struct Capabilities<'a> {
    pub session: &'a mut dyn CatalogSession,
    pub search: &'a dyn StoreSearch,
    pub prompter: &'a mut dyn Prompter,
    pub progress: &'a mut dyn ProgressReporter,
    /// `None` disables the clipboard copy
    pub clipboard: Option<&'a mut dyn Clipboard>,
    /// `None` disables opening the Steam console
    pub launcher: Option<&'a dyn ConsoleLauncher>,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub struct FlowOutcome {
    pub final_state: FlowState,
    /// States in the order they were entered, starting with `Idle`
    pub visited: Vec<FlowState>,
    pub application: Option<Application>,
    pub depot: Option<Depot>,
    pub manifest: Option<Manifest>,
    pub rendered: Option<RenderedCommand>,
    pub record_path: Option<PathBuf>,
}

#[derive(Default)]
struct Selection {
    application: Option<Application>,
    depot: Option<Depot>,
    manifest: Option<Manifest>,
    rendered: Option<RenderedCommand>,
    record_path: Option<PathBuf>,
}

pub struct InteractionFlow<'a> {
    caps: Capabilities<'a>,
    record_dir: Option<PathBuf>,
    trail: StateTrail,
    selection: Selection,
}

impl<'a> InteractionFlow<'a> {
    pub fn new(caps: Capabilities<'a>) -> Self {
        Self {
            caps,
            record_dir: None,
            trail: StateTrail::default(),
            selection: Selection::default(),
        }
    }

    /// Also write a download record under `dir` once a command is rendered
    pub fn with_record_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.record_dir = dir;
        self
    }

    /// Run the whole pipeline once.
    ///
    /// The session is logged out on every exit path. A fatal error is
    /// returned after that logout with the flow already in `Done`.
    pub async fn run(mut self) -> Result<FlowOutcome> {
        let result = self.drive().await;
        if result.is_err() {
            self.caps.progress.abandon();
        }
        self.caps.session.logout().await;
        self.trail.advance(FlowState::Done);

        match result {
            Ok(()) => Ok(self.into_outcome()),
            Err(e) => {
                tracing::error!("Flow aborted: {e}");
                Err(e)
            }
        }
    }

    async fn drive(&mut self) -> Result<()> {
        self.caps.progress.start("Logging in to Steam anonymously...");
        self.caps.session.login().await?;
        self.caps.progress.finish("Logged in to Steam");
        self.trail.advance(FlowState::LoggedIn);

        let Some(applications) = self.search_loop().await? else {
            return Ok(());
        };
        self.trail.advance(FlowState::Searched);
        if applications.is_empty() {
            self.caps.prompter.notice("No results found.");
            return Ok(());
        }

        let labels = applications.iter().map(application_label).collect();
        let Some(app) = self.pick(&applications, "Select a title:", labels)? else {
            return Ok(());
        };
        self.trail.advance(FlowState::AppSelected);
        self.selection.application = Some(app.clone());

        self.caps
            .progress
            .start(&format!("Fetching product info for {}...", app.name));
        let product = self.caps.session.fetch_product(app.id).await?;
        self.caps.progress.finish("Product info received");

        let depots = extract_depots(&product);
        self.trail.advance(FlowState::DepotsListed);

        let labels = depots.iter().map(depot_label).collect();
        let Some(depot) = self.pick(&depots, "Select a depot:", labels)? else {
            return Ok(());
        };
        self.trail.advance(FlowState::DepotSelected);
        self.selection.depot = Some(depot.clone());

        let manifests = extract_manifests(&product, &depot.id);
        self.trail.advance(FlowState::ManifestsListed);
        if manifests.is_empty() {
            self.caps
                .prompter
                .notice(&format!("No manifests found for depot {}.", depot.id));
            return Ok(());
        }

        let labels = manifests.iter().map(manifest_label).collect();
        let Some(manifest) = self.pick(&manifests, "Select a manifest:", labels)? else {
            return Ok(());
        };
        self.trail.advance(FlowState::ManifestSelected);

        let rendered = command::render(app.id, &depot.id, &manifest.manifest_id);
        let clipboard = self
            .caps
            .clipboard
            .as_mut()
            .map(|c| &mut **c as &mut dyn Clipboard);
        command::deliver(&rendered, clipboard, self.caps.launcher);
        self.write_record(&app, &depot, &manifest, &rendered);

        self.selection.manifest = Some(manifest);
        self.selection.rendered = Some(rendered);
        Ok(())
    }

    /// Prompt until a term passes validation. `None` when the user quits.
    async fn search_loop(&mut self) -> Result<Option<Vec<Application>>> {
        loop {
            let Some(term) = self.caps.prompter.search_term()? else {
                return Ok(None);
            };

            self.caps.progress.start(&format!("Searching for \"{}\"...", term.trim()));
            match self.caps.search.search(&term).await {
                Ok(applications) => {
                    self.caps
                        .progress
                        .finish(&format!("{} result(s)", applications.len()));
                    return Ok(Some(applications));
                }
                Err(e) if !e.is_fatal() => {
                    self.caps.progress.abandon();
                    self.caps.prompter.notice(&e.to_string());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn pick<T: Clone>(
        &mut self,
        items: &[T],
        message: &str,
        labels: Vec<String>,
    ) -> Result<Option<T>> {
        let index = self.caps.prompter.select(message, labels)?;
        Ok(index.and_then(|i| items.get(i).cloned()))
    }

    fn write_record(
        &mut self,
        app: &Application,
        depot: &Depot,
        manifest: &Manifest,
        rendered: &RenderedCommand,
    ) {
        let Some(root) = &self.record_dir else {
            return;
        };
        let request = DownloadRequest::new(
            app.id,
            app.name.clone(),
            depot.id.clone(),
            manifest.manifest_id.clone(),
            manifest.branch_name.clone(),
            rendered.command.clone(),
        );
        match record::write_record(root, &request, rendered) {
            Ok(path) => self.selection.record_path = Some(path),
            Err(e) => tracing::warn!("{e}"),
        }
    }

    fn into_outcome(self) -> FlowOutcome {
        FlowOutcome {
            final_state: self.trail.current(),
            visited: self.trail.into_visited(),
            application: self.selection.application,
            depot: self.selection.depot,
            manifest: self.selection.manifest,
            rendered: self.selection.rendered,
            record_path: self.selection.record_path,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::ProductInfo;
    use crate::error::{PickerError, catalog, search, system};
    use crate::progress::SilentProgressReporter;
    use crate::test_fixtures::{STARDEW_APP_ID, STARDEW_APPINFO_VDF};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeSession {
        fail_login: bool,
        products: HashMap<u32, Value>,
        /// Raw appinfo text, parsed the way a PICS buffer is
        appinfo: HashMap<u32, &'static str>,
        logins: usize,
        logouts: usize,
    }

    #[async_trait]
    impl CatalogSession for FakeSession {
        async fn login(&mut self) -> Result<()> {
            self.logins += 1;
            if self.fail_login {
                return Err(catalog::auth_failed("rejected"));
            }
            Ok(())
        }

        async fn logout(&mut self) {
            self.logouts += 1;
        }

        async fn fetch_product(&self, app_id: u32) -> Result<ProductInfo> {
            if let Some(raw) = self.appinfo.get(&app_id) {
                return ProductInfo::from_vdf(app_id, raw);
            }
            self.products
                .get(&app_id)
                .map(|data| ProductInfo::new(app_id, data.clone()))
                .ok_or_else(|| catalog::lookup_failed(app_id, "no product info returned"))
        }
    }

    #[derive(Default)]
    struct FakeSearch {
        results: Vec<Application>,
        fail: bool,
        terms: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl StoreSearch for FakeSearch {
        async fn search(&self, term: &str) -> Result<Vec<Application>> {
            let term = crate::search::validate_term(term)?;
            self.terms.lock().expect("lock").push(term.to_string());
            if self.fail {
                return Err(search::network("connection refused"));
            }
            Ok(self.results.clone())
        }
    }

    #[derive(Default)]
    struct ScriptedPrompter {
        terms: VecDeque<Option<String>>,
        picks: VecDeque<Option<usize>>,
        notices: Vec<String>,
        offered: Vec<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn new(terms: &[Option<&str>], picks: &[Option<usize>]) -> Self {
            Self {
                terms: terms.iter().map(|t| t.map(str::to_string)).collect(),
                picks: picks.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn search_term(&mut self) -> Result<Option<String>> {
            Ok(self.terms.pop_front().flatten())
        }

        fn select(&mut self, _message: &str, options: Vec<String>) -> Result<Option<usize>> {
            self.offered.push(options);
            Ok(self.picks.pop_front().flatten())
        }

        fn notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct BrokenLauncher;

    impl ConsoleLauncher for BrokenLauncher {
        fn open_console(&self) -> Result<()> {
            Err(system::console_launch_failed("no handler"))
        }
    }

    fn stardew() -> Application {
        Application {
            id: 413_150,
            name: "Stardew Valley".to_string(),
            kind: "app".to_string(),
            price_minor_units: 1499,
            discount_percent: 0,
            thumbnail_url: String::new(),
        }
    }

    fn stardew_with_depots() -> Value {
        json!({
            "common": { "name": "Stardew Valley" },
            "depots": {
                "413151": { "name": "Stardew Valley Mac", "config": { "oslist": "macos" } },
                "413153": {
                    "name": "Stardew Valley Windows",
                    "config": { "oslist": "windows" },
                    "manifests": { "public": { "gid": "8881193748180768755" } }
                },
                "branches": {
                    "public": { "buildid": "6000001", "timeupdated": "1700000000" }
                }
            }
        })
    }

    struct Harness {
        session: FakeSession,
        search: FakeSearch,
        prompter: ScriptedPrompter,
        progress: SilentProgressReporter,
        clipboard: RecordingClipboard,
    }

    impl Harness {
        fn new(prompter: ScriptedPrompter) -> Self {
            Self {
                session: FakeSession::default(),
                search: FakeSearch {
                    results: vec![stardew()],
                    ..Default::default()
                },
                prompter,
                progress: SilentProgressReporter,
                clipboard: RecordingClipboard::default(),
            }
        }

        async fn run(&mut self, record_dir: Option<PathBuf>) -> Result<FlowOutcome> {
            let caps = Capabilities {
                session: &mut self.session,
                search: &self.search,
                prompter: &mut self.prompter,
                progress: &mut self.progress,
                clipboard: Some(&mut self.clipboard),
                launcher: Some(&BrokenLauncher),
            };
            InteractionFlow::new(caps)
                .with_record_dir(record_dir)
                .run()
                .await
        }
    }

    #[tokio::test]
    async fn test_full_run_renders_command() {
        let mut h = Harness::new(ScriptedPrompter::new(
            &[Some("Stardew Valley")],
            &[Some(0), Some(1), Some(0)],
        ));
        h.session.products.insert(413_150, stardew_with_depots());

        let outcome = h.run(None).await.expect("flow succeeds");

        assert_eq!(outcome.final_state, FlowState::Done);
        assert_eq!(
            outcome.visited,
            vec![
                FlowState::Idle,
                FlowState::LoggedIn,
                FlowState::Searched,
                FlowState::AppSelected,
                FlowState::DepotsListed,
                FlowState::DepotSelected,
                FlowState::ManifestsListed,
                FlowState::ManifestSelected,
                FlowState::Done,
            ]
        );
        let rendered = outcome.rendered.expect("command rendered");
        assert_eq!(
            rendered.command,
            "download_depot 413150 413153 8881193748180768755"
        );
        assert_eq!(h.clipboard.copied, vec![rendered.annotated_command]);
        assert_eq!(h.session.logins, 1);
        assert_eq!(h.session.logouts, 1);
        assert_eq!(h.prompter.offered[1].len(), 2);
    }

    #[tokio::test]
    async fn test_app_without_depots_or_manifests_ends_without_command() {
        let mut h = Harness::new(ScriptedPrompter::new(
            &[Some("Stardew Valley")],
            &[Some(0), Some(0)],
        ));
        h.session
            .products
            .insert(413_150, json!({ "common": { "name": "Stardew Valley" } }));

        let outcome = h.run(None).await.expect("flow succeeds");

        let depot = outcome.depot.expect("synthetic depot selected");
        assert_eq!(depot.id, "413150");
        assert_eq!(h.prompter.offered[1].len(), 1);
        assert_eq!(outcome.final_state, FlowState::Done);
        assert!(outcome.visited.contains(&FlowState::ManifestsListed));
        assert!(!outcome.visited.contains(&FlowState::ManifestSelected));
        assert!(outcome.rendered.is_none());
        assert!(h.clipboard.copied.is_empty());
        assert!(h.prompter.notices.iter().any(|n| n.contains("No manifests")));
        assert_eq!(h.session.logouts, 1);
    }

    #[tokio::test]
    async fn test_blank_term_is_reprompted() {
        let mut h = Harness::new(ScriptedPrompter::new(&[Some("   "), None], &[]));

        let outcome = h.run(None).await.expect("flow succeeds");

        assert_eq!(outcome.final_state, FlowState::Done);
        assert!(!outcome.visited.contains(&FlowState::Searched));
        assert!(h.search.terms.lock().expect("lock").is_empty());
        assert_eq!(h.prompter.notices.len(), 1);
        assert!(h.prompter.notices[0].contains("must not be blank"));
    }

    #[tokio::test]
    async fn test_no_results_is_not_an_error() {
        let mut h = Harness::new(ScriptedPrompter::new(&[Some("zzzz")], &[]));
        h.search.results.clear();

        let outcome = h.run(None).await.expect("flow succeeds");

        assert_eq!(
            outcome.visited,
            vec![
                FlowState::Idle,
                FlowState::LoggedIn,
                FlowState::Searched,
                FlowState::Done
            ]
        );
        assert!(h.prompter.notices.iter().any(|n| n.contains("No results")));
        assert_eq!(h.session.logouts, 1);
    }

    #[tokio::test]
    async fn test_cancelled_selection_finishes_cleanly() {
        let mut h = Harness::new(ScriptedPrompter::new(&[Some("Stardew")], &[None]));

        let outcome = h.run(None).await.expect("flow succeeds");

        assert_eq!(outcome.final_state, FlowState::Done);
        assert!(outcome.application.is_none());
        assert_eq!(h.session.logouts, 1);
    }

    #[tokio::test]
    async fn test_login_failure_logs_out_and_fails() {
        let mut h = Harness::new(ScriptedPrompter::default());
        h.session.fail_login = true;

        let err = h.run(None).await.unwrap_err();

        assert!(matches!(err, PickerError::AuthFailed { .. }));
        assert_eq!(h.session.logouts, 1);
    }

    #[tokio::test]
    async fn test_search_failure_is_fatal() {
        let mut h = Harness::new(ScriptedPrompter::new(&[Some("Stardew")], &[]));
        h.search.fail = true;

        let err = h.run(None).await.unwrap_err();

        assert!(matches!(err, PickerError::Network { .. }));
        assert_eq!(h.session.logouts, 1);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_fatal() {
        let mut h = Harness::new(ScriptedPrompter::new(&[Some("Stardew")], &[Some(0)]));

        let err = h.run(None).await.unwrap_err();

        assert!(matches!(err, PickerError::LookupFailed { app_id: 413_150, .. }));
        assert_eq!(h.session.logouts, 1);
    }

    #[tokio::test]
    async fn test_record_written_when_configured() {
        let temp = tempfile::TempDir::new().expect("Failed to create temp directory");
        let mut h = Harness::new(ScriptedPrompter::new(
            &[Some("Stardew Valley")],
            &[Some(0), Some(1), Some(0)],
        ));
        h.session.products.insert(413_150, stardew_with_depots());

        let outcome = h
            .run(Some(temp.path().to_path_buf()))
            .await
            .expect("flow succeeds");

        let dir = outcome.record_path.expect("record written");
        assert!(dir.join(record::REQUEST_FILE).exists());
        assert!(dir.join(record::INSTRUCTIONS_FILE).exists());
    }

    #[tokio::test]
    async fn test_full_run_over_appinfo_text() {
        let mut h = Harness::new(ScriptedPrompter::new(
            &[Some("Stardew Valley")],
            &[Some(0), Some(1), Some(1)],
        ));
        h.session
            .appinfo
            .insert(STARDEW_APP_ID, STARDEW_APPINFO_VDF);

        let outcome = h.run(None).await.expect("flow succeeds");

        assert_eq!(h.prompter.offered[1].len(), 2);
        assert_eq!(h.prompter.offered[2].len(), 2);
        let rendered = outcome.rendered.expect("command rendered");
        assert_eq!(
            rendered.command,
            "download_depot 413150 413153 8881193748180768755"
        );
        assert_eq!(outcome.final_state, FlowState::Done);
        assert_eq!(h.session.logouts, 1);
    }
}

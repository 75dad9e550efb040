//! Behavioural tests for the reviewer configuration store.

mod support;

use gh_createpr::{ConfigError, ConfigStore};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tempfile::TempDir;

use support::{config_path_in, create_temp_dir};

#[derive(ScenarioState, Default)]
struct StoreState {
    temp_dir: Slot<TempDir>,
    store: Slot<ConfigStore>,
    last_result: Slot<Result<(), ConfigError>>,
    snapshot: Slot<String>,
}

#[fixture]
fn store_state() -> StoreState {
    StoreState::default()
}

fn store(state: &StoreState) -> ConfigStore {
    state
        .store
        .get()
        .unwrap_or_else(|| panic!("configuration store not prepared"))
}

fn read_raw(store: &ConfigStore) -> String {
    std::fs::read_to_string(store.path())
        .unwrap_or_else(|error| panic!("failed to read '{}': {error}", store.path()))
}

// --- Given steps ---

#[given("a configuration path that does not exist")]
fn fresh_path(store_state: &StoreState) {
    let temp_dir = create_temp_dir();
    let store = ConfigStore::new(config_path_in(&temp_dir));

    store_state.temp_dir.set(temp_dir);
    store_state.store.set(store);
}

#[given("the default configuration has been created")]
fn default_created(store_state: &StoreState) {
    let store = store(store_state);
    store
        .load()
        .unwrap_or_else(|error| panic!("default configuration should load: {error}"));
    store_state.snapshot.set(read_raw(&store));
}

// --- When steps ---

#[when("the configuration is loaded")]
fn load_configuration(store_state: &StoreState) {
    let result = store(store_state).load().map(drop);
    store_state.last_result.set(result);
}

#[when("reviewer {name} is added")]
fn add_reviewer(store_state: &StoreState, name: String) {
    let result = store(store_state).add_reviewer(&name);
    store_state.last_result.set(result);
}

#[when("reviewer {name} is removed")]
fn remove_reviewer(store_state: &StoreState, name: String) {
    let result = store(store_state).remove_reviewer(&name);
    store_state.last_result.set(result);
}

#[when("the target branch is set to {branch}")]
fn set_target_branch(store_state: &StoreState, branch: String) {
    let result = store(store_state).set_target_branch(&branch);
    store_state.last_result.set(result);
}

// --- Then steps ---

#[then("the configuration file exists")]
fn file_exists(store_state: &StoreState) {
    let store = store(store_state);
    assert!(store.path().exists(), "expected '{}' to exist", store.path());
}

#[then("no reviewers are configured")]
fn no_reviewers(store_state: &StoreState) {
    let reviewers = store(store_state)
        .list_reviewers()
        .unwrap_or_else(|error| panic!("reviewers should load: {error}"));
    assert!(reviewers.is_empty(), "expected no reviewers, got {reviewers:?}");
}

#[then("the assignee is {assignee}")]
fn assignee_is(store_state: &StoreState, assignee: String) {
    let actual = store(store_state)
        .assignee()
        .unwrap_or_else(|error| panic!("assignee should load: {error}"));
    assert_eq!(actual, assignee, "assignee mismatch");
}

#[then("the configured reviewers are {names}")]
fn reviewers_are(store_state: &StoreState, names: String) {
    let expected: Vec<&str> = names.split(',').map(str::trim).collect();
    let reviewers = store(store_state)
        .list_reviewers()
        .unwrap_or_else(|error| panic!("reviewers should load: {error}"));
    assert_eq!(reviewers, expected, "reviewer list mismatch");
}

#[then("the last operation succeeded")]
fn last_succeeded(store_state: &StoreState) {
    let result = store_state
        .last_result
        .get()
        .unwrap_or_else(|| panic!("no operation recorded"));
    assert_eq!(result, Ok(()), "expected success");
}

#[then("the last operation failed because the reviewer already exists")]
fn last_failed_duplicate(store_state: &StoreState) {
    let result = store_state
        .last_result
        .get()
        .unwrap_or_else(|| panic!("no operation recorded"));
    assert!(
        matches!(result, Err(ConfigError::ReviewerAlreadyExists { .. })),
        "expected duplicate error, got {result:?}"
    );
}

#[then("the last operation failed because the reviewer was not found")]
fn last_failed_missing(store_state: &StoreState) {
    let result = store_state
        .last_result
        .get()
        .unwrap_or_else(|| panic!("no operation recorded"));
    assert!(
        matches!(result, Err(ConfigError::ReviewerNotFound { .. })),
        "expected not-found error, got {result:?}"
    );
}

#[then("the configuration file is unchanged")]
fn file_unchanged(store_state: &StoreState) {
    let before = store_state
        .snapshot
        .get()
        .unwrap_or_else(|| panic!("no snapshot recorded"));
    assert_eq!(read_raw(&store(store_state)), before, "file was modified");
}

#[then("a fresh load reports target branch {branch}")]
fn fresh_load_branch(store_state: &StoreState, branch: String) {
    let path = store(store_state).path().to_path_buf();
    let config = ConfigStore::new(path)
        .load()
        .unwrap_or_else(|error| panic!("configuration should reload: {error}"));
    assert_eq!(config.target_branch, branch, "target branch mismatch");
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/config_store.feature", index = 0)]
fn first_load_creates_defaults(store_state: StoreState) {
    let _ = store_state;
}

#[scenario(path = "tests/features/config_store.feature", index = 1)]
fn duplicate_reviewer_rejected(store_state: StoreState) {
    let _ = store_state;
}

#[scenario(path = "tests/features/config_store.feature", index = 2)]
fn remove_keeps_other_reviewer(store_state: StoreState) {
    let _ = store_state;
}

#[scenario(path = "tests/features/config_store.feature", index = 3)]
fn remove_absent_reviewer_is_noop(store_state: StoreState) {
    let _ = store_state;
}

#[scenario(path = "tests/features/config_store.feature", index = 4)]
fn target_branch_persists(store_state: StoreState) {
    let _ = store_state;
}

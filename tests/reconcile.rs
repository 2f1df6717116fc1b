use std::cell::RefCell;
use std::collections::HashSet;

use facesync::api::{Profile, ProfileApi, ResourceId};
use facesync::error::{AppError, AppResult};
use facesync::names::NameSet;
use facesync::sync::{SyncOutcome, SyncSummary, reconcile};

#[derive(Default)]
struct FakeApi {
    profiles: RefCell<Vec<Profile>>,
    failing: HashSet<String>,
    calls: RefCell<Vec<(String, bool)>>,
}

impl FakeApi {
    fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RefCell::new(profiles),
            ..Self::default()
        }
    }

    fn failing_on(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    fn active_of(&self, id: &str) -> bool {
        self.profiles
            .borrow()
            .iter()
            .find(|profile| profile.id.as_str() == id)
            .map(|profile| profile.active)
            .expect("profile exists")
    }
}

impl ProfileApi for FakeApi {
    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        Ok(self.profiles.borrow().clone())
    }

    async fn set_active(&self, id: &ResourceId, active: bool) -> AppResult<()> {
        self.calls.borrow_mut().push((id.to_string(), active));
        if self.failing.contains(id.as_str()) {
            return Err(AppError::Network("connection reset by peer".to_string()));
        }

        let mut profiles = self.profiles.borrow_mut();
        let profile = profiles
            .iter_mut()
            .find(|profile| &profile.id == id)
            .ok_or_else(|| AppError::NotFound(format!("profile {id}")))?;
        profile.active = active;
        Ok(())
    }
}

fn profile(id: &str, name: &str, active: bool) -> Profile {
    Profile {
        id: ResourceId::new(id),
        name: name.to_string(),
        active,
    }
}

fn scenario() -> (NameSet, FakeApi) {
    let names: NameSet = ["John Doe", "Jane Smith"].into_iter().collect();
    let api = FakeApi::with_profiles(vec![
        profile("1", "John Doe", false),
        profile("2", "Old Employee", true),
        profile("3", "Jane Smith", false),
    ]);
    (names, api)
}

async fn run_pass(api: &FakeApi, names: &NameSet) -> (Vec<SyncOutcome>, SyncSummary) {
    let profiles = api.list_profiles().await.expect("listing works");
    let (reports, summary) = reconcile(api, names, &profiles, |_| {}).await;
    let outcomes = reports.into_iter().map(|report| report.outcome).collect();
    (outcomes, summary)
}

#[tokio::test]
async fn activates_listed_and_deactivates_the_rest() {
    let (names, api) = scenario();

    let (outcomes, summary) = run_pass(&api, &names).await;

    assert_eq!(
        outcomes,
        vec![
            SyncOutcome::Activated,
            SyncOutcome::Deactivated,
            SyncOutcome::Activated,
        ]
    );
    assert_eq!(
        summary,
        SyncSummary {
            activated: 2,
            deactivated: 1,
            unchanged: 0,
            errors: 0,
            total: 3,
        }
    );
    assert!(api.active_of("1"));
    assert!(!api.active_of("2"));
    assert!(api.active_of("3"));
}

#[tokio::test]
async fn second_pass_is_a_no_op() {
    let (names, api) = scenario();
    run_pass(&api, &names).await;
    api.calls.borrow_mut().clear();

    let (_, summary) = run_pass(&api, &names).await;

    assert_eq!(summary.unchanged, 3);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.activated + summary.deactivated, 0);
    assert!(api.calls.borrow().is_empty());
}

#[tokio::test]
async fn profiles_in_target_state_are_never_updated() {
    let names: NameSet = ["John Doe"].into_iter().collect();
    let api = FakeApi::with_profiles(vec![
        profile("1", "John Doe", true),
        profile("2", "Someone Else", false),
        profile("3", "Jane Smith", true),
    ]);

    let (outcomes, _) = run_pass(&api, &names).await;

    assert_eq!(outcomes[0], SyncOutcome::Unchanged);
    assert_eq!(outcomes[1], SyncOutcome::Unchanged);
    assert_eq!(*api.calls.borrow(), vec![("3".to_string(), false)]);
}

#[tokio::test]
async fn failed_update_is_recorded_and_pass_continues() {
    let (names, api) = scenario();
    let api = api.failing_on("2");

    let (outcomes, summary) = run_pass(&api, &names).await;

    assert_eq!(outcomes[0], SyncOutcome::Activated);
    assert!(matches!(
        &outcomes[1],
        SyncOutcome::Error { kind: "network", .. }
    ));
    assert_eq!(outcomes[2], SyncOutcome::Activated);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.total, 3);
    assert!(api.active_of("2"));
}

#[tokio::test]
async fn matching_ignores_case_and_surrounding_whitespace() {
    let names: NameSet = ["  JOHN doe "].into_iter().collect();
    let api = FakeApi::with_profiles(vec![profile("1", "John Doe  ", false)]);

    let (outcomes, _) = run_pass(&api, &names).await;

    assert_eq!(outcomes, vec![SyncOutcome::Activated]);
}

#[tokio::test]
async fn names_without_profiles_are_silently_ignored() {
    let names: NameSet = ["John Doe", "Nobody Here"].into_iter().collect();
    let api = FakeApi::with_profiles(vec![profile("1", "John Doe", true)]);

    let (outcomes, summary) = run_pass(&api, &names).await;

    assert_eq!(outcomes, vec![SyncOutcome::Unchanged]);
    assert_eq!(summary.errors, 0);
    assert_eq!(summary.total, 1);
}

#[tokio::test]
async fn reports_arrive_in_listing_order() {
    let (names, api) = scenario();
    let profiles = api.list_profiles().await.expect("listing works");
    let mut seen = Vec::new();

    reconcile(&api, &names, &profiles, |report| {
        seen.push(report.id.to_string());
    })
    .await;

    assert_eq!(seen, ["1", "2", "3"]);
}

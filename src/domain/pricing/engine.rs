//! Pricing engine.
//!
//! One engine serves every registration surface: it is parameterised by a
//! [`RegistrationMode`] and an optional [`GuichetLockPolicy`] instead of
//! being forked per surface. All operations are synchronous reducers over a
//! [`SelectionStore`]; catalog access goes through the `ActivityCatalog` port.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::rendered::{self, DEFAULT_FREE_LABEL, INCLUDED_STANDING};
use super::{GuichetLockPolicy, PricingError, RegistrationMode};
use crate::domain::catalog::{Activity, PriceOption};
use crate::domain::foundation::{ActivityId, StandingId};
use crate::domain::selection::{Selection, SelectionStore};
use crate::ports::ActivityCatalog;

/// What a toggle did to the selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Activity selected with the given default standing.
    Added(StandingId),
    /// Activity deselected.
    Removed,
    /// Activity is locked; nothing changed.
    Locked,
}

/// A selection with its resolved price, for summaries and payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub activity_id: ActivityId,
    pub standing_id: StandingId,
    /// Amount charged in this registration. Locked lines are always 0.
    pub price: u64,
    pub locked: bool,
}

/// Pricing rules over an injected activity catalog.
#[derive(Clone)]
pub struct PricingEngine {
    catalog: Arc<dyn ActivityCatalog>,
    mode: RegistrationMode,
    lock_policy: Option<GuichetLockPolicy>,
    free_label: String,
}

impl fmt::Debug for PricingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricingEngine")
            .field("mode", &self.mode)
            .field("lock_policy", &self.lock_policy)
            .field("free_label", &self.free_label)
            .finish_non_exhaustive()
    }
}

impl PricingEngine {
    pub fn new(catalog: Arc<dyn ActivityCatalog>, mode: RegistrationMode) -> Self {
        Self {
            catalog,
            mode,
            lock_policy: None,
            free_label: DEFAULT_FREE_LABEL.to_string(),
        }
    }

    /// Attaches a lock policy for the counter modification flow.
    ///
    /// # Errors
    ///
    /// - `LockPolicyRequiresCounter` unless the engine runs in counter mode
    pub fn with_lock_policy(mut self, policy: GuichetLockPolicy) -> Result<Self, PricingError> {
        if !self.mode.allows_lock_policy() {
            return Err(PricingError::LockPolicyRequiresCounter);
        }
        self.lock_policy = Some(policy);
        Ok(self)
    }

    /// Overrides the label of the synthetic free option.
    pub fn with_free_label(mut self, label: impl Into<String>) -> Self {
        self.free_label = label.into();
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Arc<dyn ActivityCatalog> {
        &self.catalog
    }

    pub fn mode(&self) -> RegistrationMode {
        self.mode
    }

    pub fn lock_policy(&self) -> Option<&GuichetLockPolicy> {
        self.lock_policy.as_ref()
    }

    pub fn is_locked(&self, activity_id: &ActivityId) -> bool {
        self.lock_policy
            .as_ref()
            .is_some_and(|policy| policy.is_locked(activity_id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Options
    // ─────────────────────────────────────────────────────────────────────────

    /// Catalog-level rendered options, ignoring any lock policy.
    pub fn rendered_options(&self, activity: &Activity) -> Vec<PriceOption> {
        rendered::rendered_options(activity, &self.free_label)
    }

    /// Options to present for an activity. Locked activities offer none.
    ///
    /// # Errors
    ///
    /// - `UnknownActivity` if the catalog has no such activity
    pub fn offered_options(&self, activity_id: &ActivityId) -> Result<Vec<PriceOption>, PricingError> {
        let activity = self.find_activity(activity_id)?;
        if self.is_locked(activity_id) {
            return Ok(Vec::new());
        }
        Ok(self.rendered_options(&activity))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Selects or deselects an activity.
    ///
    /// A new selection gets the default standing of its activity. Locked
    /// activities are left untouched.
    ///
    /// # Errors
    ///
    /// - `UnknownActivity` when selecting an id the catalog does not know
    pub fn toggle(
        &self,
        activity_id: &ActivityId,
        store: &mut SelectionStore,
    ) -> Result<ToggleOutcome, PricingError> {
        if self.is_locked(activity_id) {
            debug!(activity_id = %activity_id, "Toggle ignored for locked activity");
            return Ok(ToggleOutcome::Locked);
        }

        if store.remove(activity_id).is_some() {
            debug!(activity_id = %activity_id, "Activity deselected");
            return Ok(ToggleOutcome::Removed);
        }

        let activity = self.find_activity(activity_id)?;
        let standing = rendered::default_standing(&activity);
        store.insert(Selection::new(activity_id.clone(), standing.clone()));
        debug!(activity_id = %activity_id, standing = %standing, "Activity selected");
        Ok(ToggleOutcome::Added(standing))
    }

    /// Changes the standing of a selected activity.
    ///
    /// # Errors
    ///
    /// - `ActivityLocked` for locked activities
    /// - `NotSelected` if the activity is not in the selection set
    /// - `UnknownActivity` if the catalog no longer has the activity
    /// - `UnknownStanding` if the standing is not among the rendered options
    pub fn set_standing(
        &self,
        activity_id: &ActivityId,
        standing_id: &StandingId,
        store: &mut SelectionStore,
    ) -> Result<(), PricingError> {
        if self.is_locked(activity_id) {
            return Err(PricingError::ActivityLocked(activity_id.clone()));
        }
        if !store.contains(activity_id) {
            return Err(PricingError::NotSelected(activity_id.clone()));
        }

        let activity = self.find_activity(activity_id)?;
        let offered = self
            .rendered_options(&activity)
            .iter()
            .any(|option| &option.id == standing_id);
        if !offered {
            return Err(PricingError::UnknownStanding {
                activity_id: activity_id.clone(),
                standing_id: standing_id.clone(),
            });
        }

        store.replace_standing(activity_id, standing_id.clone());
        debug!(activity_id = %activity_id, standing = %standing_id, "Standing changed");
        Ok(())
    }

    /// Adds every locked activity to the store so it stays on display.
    ///
    /// Locked activities missing from the catalog are skipped with a warning.
    pub fn seed_locked_selections(&self, store: &mut SelectionStore) {
        let Some(policy) = &self.lock_policy else {
            return;
        };
        for activity_id in policy.locked_ids() {
            match self.catalog.find_by_id(activity_id) {
                Some(activity) => {
                    let standing = rendered::default_standing(&activity);
                    store.insert(Selection::new(activity_id.clone(), standing));
                }
                None => {
                    warn!(activity_id = %activity_id, "Locked activity is missing from the catalog");
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Totals
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum charged for the selection set.
    ///
    /// Locked selections are already paid and contribute nothing. A selection
    /// that cannot be resolved against the catalog also contributes nothing;
    /// that fallback is logged because it signals a catalog/selection desync.
    pub fn total_price(&self, store: &SelectionStore) -> u64 {
        self.priced_lines(store)
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.price))
    }

    /// Each selection with the price it contributes, in selection order.
    pub fn priced_lines(&self, store: &SelectionStore) -> Vec<PricedLine> {
        store
            .selections()
            .iter()
            .map(|selection| {
                let locked = self.is_locked(&selection.activity_id);
                let price = if locked { 0 } else { self.resolve_price(selection) };
                PricedLine {
                    activity_id: selection.activity_id.clone(),
                    standing_id: selection.selected_standing_id.clone(),
                    price,
                    locked,
                }
            })
            .collect()
    }

    /// Selections made in this session, i.e. excluding locked ones.
    pub fn unlocked_selections<'a>(&self, store: &'a SelectionStore) -> Vec<&'a Selection> {
        store
            .selections()
            .iter()
            .filter(|selection| !self.is_locked(&selection.activity_id))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn find_activity(&self, activity_id: &ActivityId) -> Result<Activity, PricingError> {
        self.catalog
            .find_by_id(activity_id)
            .ok_or_else(|| PricingError::UnknownActivity(activity_id.clone()))
    }

    fn resolve_price(&self, selection: &Selection) -> u64 {
        let Some(activity) = self.catalog.find_by_id(&selection.activity_id) else {
            warn!(
                activity_id = %selection.activity_id,
                "Selected activity not found in catalog, pricing it at 0"
            );
            return 0;
        };

        if activity.is_included_access() && selection.selected_standing_id == INCLUDED_STANDING {
            return 0;
        }

        match self
            .rendered_options(&activity)
            .into_iter()
            .find(|option| option.id == selection.selected_standing_id)
        {
            Some(option) => option.price,
            None => {
                warn!(
                    activity_id = %selection.activity_id,
                    standing = %selection.selected_standing_id,
                    "Selected standing not offered by catalog, pricing it at 0"
                );
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixtures::{activity, option, scenario_catalog};
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Catalog whose contents can change under the engine, to simulate desync.
    struct TestCatalog {
        activities: RwLock<Vec<Activity>>,
    }

    impl TestCatalog {
        fn new(activities: Vec<Activity>) -> Arc<Self> {
            Arc::new(Self {
                activities: RwLock::new(activities),
            })
        }

        fn replace(&self, activities: Vec<Activity>) {
            *self.activities.write().unwrap() = activities;
        }
    }

    impl ActivityCatalog for TestCatalog {
        fn get_all(&self) -> Vec<Activity> {
            self.activities.read().unwrap().clone()
        }

        fn find_by_id(&self, id: &ActivityId) -> Option<Activity> {
            self.activities
                .read()
                .unwrap()
                .iter()
                .find(|a| &a.id == id)
                .cloned()
        }
    }

    fn id(s: &str) -> ActivityId {
        ActivityId::new(s).unwrap()
    }

    fn standing(s: &str) -> StandingId {
        StandingId::new(s).unwrap()
    }

    fn engine() -> PricingEngine {
        PricingEngine::new(TestCatalog::new(scenario_catalog()), RegistrationMode::SelfService)
    }

    fn counter_engine(locked: &[&str]) -> PricingEngine {
        PricingEngine::new(TestCatalog::new(scenario_catalog()), RegistrationMode::Counter)
            .with_lock_policy(GuichetLockPolicy::new(locked.iter().map(|s| id(s))))
            .unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Toggle
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn toggle_assigns_default_standings() {
        let engine = engine();
        let mut store = SelectionStore::new();

        assert_eq!(engine.toggle(&id("A"), &mut store), Ok(ToggleOutcome::Added(standing("standard"))));
        assert_eq!(engine.toggle(&id("D"), &mut store), Ok(ToggleOutcome::Added(standing("included"))));
        assert_eq!(engine.toggle(&id("E"), &mut store), Ok(ToggleOutcome::Added(standing("gratuit"))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn toggle_twice_removes_selection() {
        let engine = engine();
        let mut store = SelectionStore::new();
        engine.toggle(&id("A"), &mut store).unwrap();
        assert_eq!(engine.toggle(&id("A"), &mut store), Ok(ToggleOutcome::Removed));
        assert!(store.is_empty());
    }

    #[test]
    fn toggle_unknown_activity_fails() {
        let engine = engine();
        let mut store = SelectionStore::new();
        assert_eq!(
            engine.toggle(&id("Z"), &mut store),
            Err(PricingError::UnknownActivity(id("Z")))
        );
    }

    #[test]
    fn toggle_removes_stale_selection_even_if_catalog_lost_it() {
        let catalog = TestCatalog::new(scenario_catalog());
        let engine = PricingEngine::new(catalog.clone(), RegistrationMode::SelfService);
        let mut store = SelectionStore::new();
        engine.toggle(&id("A"), &mut store).unwrap();

        catalog.replace(vec![]);
        assert_eq!(engine.toggle(&id("A"), &mut store), Ok(ToggleOutcome::Removed));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Standings
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn set_standing_accepts_rendered_tier() {
        let engine = engine();
        let mut store = SelectionStore::new();
        engine.toggle(&id("A"), &mut store).unwrap();
        engine.set_standing(&id("A"), &standing("vip"), &mut store).unwrap();
        assert_eq!(store.get(&id("A")).unwrap().selected_standing_id, "vip");
        assert_eq!(engine.total_price(&store), 50_000);
    }

    #[test]
    fn set_standing_rejects_unknown_standing() {
        let engine = engine();
        let mut store = SelectionStore::new();
        engine.toggle(&id("A"), &mut store).unwrap();
        let err = engine
            .set_standing(&id("A"), &standing("platinum"), &mut store)
            .unwrap_err();
        assert!(matches!(err, PricingError::UnknownStanding { .. }));
        assert_eq!(store.get(&id("A")).unwrap().selected_standing_id, "standard");
    }

    #[test]
    fn set_standing_validates_against_rendered_not_raw_options() {
        let catalog = TestCatalog::new(vec![activity(
            "F",
            Some(vec![option("student", 0), option("guest", 0)]),
        )]);
        let engine = PricingEngine::new(catalog, RegistrationMode::SelfService);
        let mut store = SelectionStore::new();
        engine.toggle(&id("F"), &mut store).unwrap();

        assert!(engine.set_standing(&id("F"), &standing("student"), &mut store).is_err());
        assert!(engine.set_standing(&id("F"), &standing("gratuit"), &mut store).is_ok());
    }

    #[test]
    fn set_standing_on_included_activity_always_fails() {
        let engine = engine();
        let mut store = SelectionStore::new();
        engine.toggle(&id("D"), &mut store).unwrap();
        assert!(engine.set_standing(&id("D"), &standing("included"), &mut store).is_err());
    }

    #[test]
    fn set_standing_requires_selection() {
        let engine = engine();
        let mut store = SelectionStore::new();
        assert_eq!(
            engine.set_standing(&id("A"), &standing("vip"), &mut store),
            Err(PricingError::NotSelected(id("A")))
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Totals
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn empty_selection_totals_zero() {
        assert_eq!(engine().total_price(&SelectionStore::new()), 0);
    }

    #[test]
    fn free_and_included_selections_total_zero() {
        let engine = engine();
        let mut store = SelectionStore::new();
        engine.toggle(&id("D"), &mut store).unwrap();
        engine.toggle(&id("E"), &mut store).unwrap();
        assert_eq!(engine.total_price(&store), 0);
    }

    #[test]
    fn scenario_total_and_deselect() {
        let engine = engine();
        let mut store = SelectionStore::new();
        for a in ["A", "D", "E"] {
            engine.toggle(&id(a), &mut store).unwrap();
        }
        assert_eq!(engine.total_price(&store), 5_000);

        engine.toggle(&id("A"), &mut store).unwrap();
        assert!(!store.contains(&id("A")));
        assert_eq!(engine.total_price(&store), 0);
    }

    #[test]
    fn desynced_selection_contributes_zero() {
        let catalog = TestCatalog::new(scenario_catalog());
        let engine = PricingEngine::new(catalog.clone(), RegistrationMode::SelfService);
        let mut store = SelectionStore::new();
        engine.toggle(&id("A"), &mut store).unwrap();
        engine.set_standing(&id("A"), &standing("vvip"), &mut store).unwrap();

        // vvip disappears from the catalog after it was chosen
        catalog.replace(vec![activity("A", Some(vec![option("standard", 5_000)]))]);
        assert_eq!(engine.total_price(&store), 0);

        catalog.replace(vec![]);
        assert_eq!(engine.total_price(&store), 0);
    }

    #[test]
    fn priced_lines_report_each_selection() {
        let engine = engine();
        let mut store = SelectionStore::new();
        engine.toggle(&id("A"), &mut store).unwrap();
        engine.toggle(&id("E"), &mut store).unwrap();

        let prices: HashMap<String, u64> = engine
            .priced_lines(&store)
            .into_iter()
            .map(|line| (line.activity_id.to_string(), line.price))
            .collect();
        assert_eq!(prices.get("A"), Some(&5_000));
        assert_eq!(prices.get("E"), Some(&0));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Lock policy
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn lock_policy_rejected_in_self_service() {
        let result = engine().with_lock_policy(GuichetLockPolicy::new([id("A")]));
        assert_eq!(result.unwrap_err(), PricingError::LockPolicyRequiresCounter);
    }

    #[test]
    fn locked_activity_toggle_is_noop() {
        let engine = counter_engine(&["A"]);
        let mut store = SelectionStore::new();
        engine.seed_locked_selections(&mut store);
        assert!(store.contains(&id("A")));

        assert_eq!(engine.toggle(&id("A"), &mut store), Ok(ToggleOutcome::Locked));
        assert!(store.contains(&id("A")));
    }

    #[test]
    fn locked_activity_is_not_charged() {
        let engine = counter_engine(&["A"]);
        let mut store = SelectionStore::new();
        engine.seed_locked_selections(&mut store);
        assert_eq!(engine.total_price(&store), 0);

        let catalog = engine.catalog().clone();
        let extra = PricingEngine::new(catalog, RegistrationMode::Counter);
        let mut unlocked_store = SelectionStore::new();
        extra.toggle(&id("A"), &mut unlocked_store).unwrap();
        assert_eq!(extra.total_price(&unlocked_store), 5_000);
    }

    #[test]
    fn locked_activity_offers_no_options_and_rejects_standing_change() {
        let engine = counter_engine(&["A"]);
        let mut store = SelectionStore::new();
        engine.seed_locked_selections(&mut store);

        assert!(engine.offered_options(&id("A")).unwrap().is_empty());
        assert_eq!(engine.offered_options(&id("E")).unwrap().len(), 1);
        assert_eq!(
            engine.set_standing(&id("A"), &standing("vip"), &mut store),
            Err(PricingError::ActivityLocked(id("A")))
        );
    }

    #[test]
    fn unlocked_selections_exclude_locked() {
        let engine = counter_engine(&["A"]);
        let mut store = SelectionStore::new();
        engine.seed_locked_selections(&mut store);
        engine.toggle(&id("E"), &mut store).unwrap();

        let unlocked: Vec<&str> = engine
            .unlocked_selections(&store)
            .iter()
            .map(|s| s.activity_id.as_str())
            .collect();
        assert_eq!(unlocked, vec!["E"]);
    }

    #[test]
    fn seeding_skips_locked_ids_missing_from_catalog() {
        let engine = counter_engine(&["A", "ghost"]);
        let mut store = SelectionStore::new();
        engine.seed_locked_selections(&mut store);
        assert_eq!(store.len(), 1);
    }
}

pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use log::{info, warn};
use std::collections::BTreeMap;

use errors::CoreError;
use models::{
    calculator::CalculatorInstance,
    display_format::DisplayFormat,
    field::Field,
    mode::CalculatorMode,
    preferences::Preferences,
    results::{
        CalculatorResult, RenderedResult, SipYear, FUTURE_VALUE, GAINS, NEW_AVERAGE_PRICE,
        REQUIRED_QUANTITY, TOTAL_INVESTED, TOTAL_PRICE,
    },
    theme::Theme,
};
use services::{
    calculation_service::CalculationService, format_service::NumberFormatter,
    instance_registry::InstanceRegistry,
};
use storage::{manager::PreferenceManager, store::PreferenceStore};

/// Main entry point for the Stock Calc core library.
///
/// Owns the open calculators, the slot registry and the shared preferences.
/// A front end forwards user actions here and renders what comes back;
/// every mutating call on a calculator returns its freshly rendered results.
#[must_use]
pub struct CalculatorWorkspace {
    registry: InstanceRegistry,
    calculators: BTreeMap<u8, CalculatorInstance>,
    calculation_service: CalculationService,
    formatter: NumberFormatter,
    preferences: Preferences,
    /// Tracks whether preferences changed since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for CalculatorWorkspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalculatorWorkspace")
            .field("calculators", &self.calculators.keys().collect::<Vec<_>>())
            .field("preferences", &self.preferences)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl CalculatorWorkspace {
    /// Start a page with the given preferences and one calculator open.
    pub fn new(preferences: Preferences) -> Self {
        let mut workspace = Self::create_empty(preferences);
        if let Err(e) = workspace.add_calculator() {
            warn!("Could not open the initial calculator: {e}");
        }
        workspace
    }

    /// Start with no calculator open.
    pub fn create_empty(preferences: Preferences) -> Self {
        Self {
            registry: InstanceRegistry::new(),
            calculators: BTreeMap::new(),
            calculation_service: CalculationService::new(),
            formatter: NumberFormatter::new(preferences.display_format),
            preferences,
            dirty: false,
        }
    }

    /// Bootstrap from stored preferences (page load).
    pub fn load(
        store: &dyn PreferenceStore,
        system_prefers_dark: bool,
    ) -> Result<Self, CoreError> {
        let preferences = PreferenceManager::load(store, system_prefers_dark)?;
        Ok(Self::new(preferences))
    }

    /// Persist the current preferences. Clears the unsaved-changes flag on success.
    pub fn save_preferences(&mut self, store: &mut dyn PreferenceStore) -> Result<(), CoreError> {
        PreferenceManager::save(store, &self.preferences)?;
        self.dirty = false;
        Ok(())
    }

    // ── Calculator Management ───────────────────────────────────────

    /// Open a new calculator in the smallest free slot.
    /// Fails with `CapacityExceeded` when every slot is in use.
    pub fn add_calculator(&mut self) -> Result<u8, CoreError> {
        let id = self.registry.add()?;
        self.calculators.insert(id, CalculatorInstance::new(id));
        Ok(id)
    }

    /// Close a calculator. Closing one that is not open does nothing.
    pub fn remove_calculator(&mut self, id: u8) {
        self.registry.remove(id);
        self.calculators.remove(&id);
    }

    /// Whether another calculator can be opened (drives the "add" button).
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.registry.can_add()
    }

    #[must_use]
    pub fn calculator_count(&self) -> usize {
        self.registry.occupied_count()
    }

    /// Ids of the open calculators, ascending.
    #[must_use]
    pub fn calculator_ids(&self) -> Vec<u8> {
        self.registry.occupied_ids().collect()
    }

    #[must_use]
    pub fn calculator(&self, id: u8) -> Option<&CalculatorInstance> {
        self.calculators.get(&id)
    }

    // ── Per-calculator Actions ──────────────────────────────────────

    /// Show another formula section. Entered values of every section are kept.
    pub fn switch_mode(
        &mut self,
        id: u8,
        mode: CalculatorMode,
    ) -> Result<RenderedResult, CoreError> {
        self.calculator_mut(id)?.mode = mode;
        self.rendered_results(id)
    }

    /// Update one input and recompute the calculator.
    pub fn set_field(
        &mut self,
        id: u8,
        field: Field,
        text: impl Into<String>,
    ) -> Result<RenderedResult, CoreError> {
        self.calculator_mut(id)?.set_field(field, text);
        self.rendered_results(id)
    }

    /// Clear every input of one calculator. The returned results are all zero
    /// for every mode; the next input change recomputes them.
    pub fn reset_calculator(&mut self, id: u8) -> Result<RenderedResult, CoreError> {
        let calculator = self.calculator_mut(id)?;
        calculator.reset();
        let cleared = CalculatorResult::cleared(calculator.mode);
        Ok(self.render(&cleared))
    }

    /// Clear every input of every open calculator.
    /// Returns the zeroed results of each calculator, by ascending id.
    pub fn reset_all(&mut self) -> Vec<(u8, RenderedResult)> {
        for calculator in self.calculators.values_mut() {
            calculator.reset();
        }
        info!("Reset {} calculators", self.calculators.len());

        self.calculators
            .values()
            .map(|c| (c.id, self.render(&CalculatorResult::cleared(c.mode))))
            .collect()
    }

    /// Raw result of the calculator's active formula.
    pub fn compute(&self, id: u8) -> Result<CalculatorResult, CoreError> {
        let calculator = self.calculator_ref(id)?;
        Ok(self.calculation_service.evaluate(calculator))
    }

    /// Results of the calculator's active formula, formatted for display.
    pub fn rendered_results(&self, id: u8) -> Result<RenderedResult, CoreError> {
        let result = self.compute(id)?;
        Ok(self.render(&result))
    }

    /// Year-by-year breakdown of the calculator's SIP inputs.
    pub fn sip_schedule(&self, id: u8) -> Result<Vec<SipYear>, CoreError> {
        let calculator = self.calculator_ref(id)?;
        Ok(self.calculation_service.sip_schedule(&calculator.sip_inputs()))
    }

    // ── Preferences ─────────────────────────────────────────────────

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[must_use]
    pub fn display_format(&self) -> DisplayFormat {
        self.formatter.format()
    }

    /// Change the grouping convention used by every calculator.
    pub fn set_display_format(&mut self, format: DisplayFormat) {
        if self.preferences.display_format != format {
            info!("Number format changed to {}", format.key());
        }
        self.formatter.set_format(format);
        self.preferences.display_format = format;
        self.dirty = true;
    }

    /// Render a number with the current display format.
    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        self.formatter.format_number(value)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    /// Choose a theme explicitly; it stops following the system from now on.
    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
        self.preferences.theme_explicit = true;
        self.dirty = true;
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.preferences.theme.toggle();
        self.set_theme(theme);
        theme
    }

    /// React to a system colour-scheme change.
    /// Ignored once the user has picked a theme. Returns the active theme.
    pub fn follow_system_theme(&mut self, system_prefers_dark: bool) -> Theme {
        if !self.preferences.theme_explicit {
            self.preferences.theme = Theme::resolve(None, system_prefers_dark);
        }
        self.preferences.theme
    }

    /// Returns `true` if preferences changed since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Snapshot of all open calculators as JSON (for debugging/display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        let calculators: Vec<&CalculatorInstance> = self.calculators.values().collect();
        serde_json::to_string_pretty(&calculators)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize calculators: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn calculator_ref(&self, id: u8) -> Result<&CalculatorInstance, CoreError> {
        self.calculators
            .get(&id)
            .ok_or(CoreError::InstanceNotFound(id))
    }

    fn calculator_mut(&mut self, id: u8) -> Result<&mut CalculatorInstance, CoreError> {
        self.calculators
            .get_mut(&id)
            .ok_or(CoreError::InstanceNotFound(id))
    }

    fn render(&self, result: &CalculatorResult) -> RenderedResult {
        let fmt = |v: f64| self.formatter.format_number(v);
        let lines = match result {
            CalculatorResult::AverageStock { new_avg_price } => {
                vec![(NEW_AVERAGE_PRICE, fmt(*new_avg_price))]
            }
            CalculatorResult::RequiredQuantity(outcome) => {
                let quantity = match outcome.sentinel_label() {
                    Some(label) => label.to_string(),
                    None => fmt(outcome.quantity().unwrap_or(0.0)),
                };
                vec![
                    (REQUIRED_QUANTITY, quantity),
                    (TOTAL_PRICE, fmt(outcome.total_price())),
                ]
            }
            CalculatorResult::Sip(projection) => vec![
                (TOTAL_INVESTED, fmt(projection.total_invested)),
                (FUTURE_VALUE, fmt(projection.future_value)),
                (GAINS, fmt(projection.gains)),
            ],
        };

        RenderedResult {
            lines: lines
                .into_iter()
                .map(|(label, text)| (label.to_string(), text))
                .collect(),
        }
    }
}

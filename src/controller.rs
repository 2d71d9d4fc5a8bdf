use tracing::debug;

use crate::{
  DashboardError, Result,
  aggregate::{
    ChartUpdate, CompensationSample, LanguageCounts, PreferenceTrend, WorkPreferenceCounts,
    compensation_sample, preference_trend, top_languages, work_preference,
  },
  dataset::{ALL_DEV_TYPES, SurveyData},
  filter::filter_subset,
};

pub const MAX_EXPERIENCE_YEARS: u32 = 30;
pub const DEFAULT_MIN_YEARS: u32 = 5;

/// The complete set of current widget selections driving all four charts.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
  pub country:     String,
  pub dev_type:    String,
  pub remote_pref: String,
  pub min_years:   u32,
}

/// A single widget change. All four widgets funnel through the same
/// dispatch path in [`Controller::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
  Country(String),
  DevType(String),
  RemotePreference(String),
  MinYears(u32),
}

/// Receives freshly recomputed chart datasets. Implemented by the
/// presentation layer; the pipeline never renders anything itself.
pub trait ChartSink {
  fn publish(&mut self, update: ChartUpdate);
}

/// Owns the normalized dataset and the current [`FilterState`]; every
/// accepted event recomputes all four aggregates and pushes them to the
/// sink. Construction runs the initial recomputation with the default
/// state: the most frequent country, the `"All"` developer type, the first
/// remote preference, five years minimum experience.
pub struct Controller<S> {
  data:  SurveyData,
  state: FilterState,
  sink:  S,
}

impl<S: ChartSink> Controller<S> {
  pub fn new(data: SurveyData, sink: S) -> Result<Controller<S>> {
    let state = FilterState {
      country:     data.countries().first().cloned().ok_or(DashboardError::EmptyDataset)?,
      dev_type:    ALL_DEV_TYPES.to_string(),
      remote_pref: data.remote_prefs().first().cloned().ok_or(DashboardError::EmptyDataset)?,
      min_years:   DEFAULT_MIN_YEARS,
    };

    let mut controller = Controller { data, state, sink };
    controller.refresh()?;
    Ok(controller)
  }

  pub fn data(&self) -> &SurveyData { &self.data }
  pub fn state(&self) -> &FilterState { &self.state }
  pub fn sink(&self) -> &S { &self.sink }

  pub fn set_country(&mut self, country: &str) -> Result<()> {
    self.apply(FilterEvent::Country(country.to_string()))
  }

  pub fn set_dev_type(&mut self, dev_type: &str) -> Result<()> {
    self.apply(FilterEvent::DevType(dev_type.to_string()))
  }

  pub fn set_remote_preference(&mut self, remote_pref: &str) -> Result<()> {
    self.apply(FilterEvent::RemotePreference(remote_pref.to_string()))
  }

  pub fn set_min_years(&mut self, min_years: u32) -> Result<()> {
    self.apply(FilterEvent::MinYears(min_years))
  }

  /// Validates the event against the option lists computed at load time,
  /// commits the field, and recomputes every chart. A rejected event leaves
  /// the state untouched and publishes nothing.
  pub fn apply(&mut self, event: FilterEvent) -> Result<()> {
    self.validate(&event)?;

    match event {
      FilterEvent::Country(country) => self.state.country = country,
      FilterEvent::DevType(dev_type) => self.state.dev_type = dev_type,
      FilterEvent::RemotePreference(remote_pref) => self.state.remote_pref = remote_pref,
      FilterEvent::MinYears(min_years) => self.state.min_years = min_years,
    }

    self.refresh()
  }

  fn validate(&self, event: &FilterEvent) -> Result<()> {
    let invalid = |field: &'static str, value: String| {
      Err(DashboardError::InvalidSelection { field, value })
    };

    match event {
      FilterEvent::Country(country) if !self.data.countries().contains(country) => {
        invalid("country", country.clone())
      }
      FilterEvent::DevType(dev_type) if !self.data.dev_types().contains(dev_type) => {
        invalid("developer type", dev_type.clone())
      }
      FilterEvent::RemotePreference(pref) if !self.data.remote_prefs().contains(pref) => {
        invalid("remote preference", pref.clone())
      }
      FilterEvent::MinYears(years) if *years > MAX_EXPERIENCE_YEARS => {
        invalid("minimum years", years.to_string())
      }
      _ => Ok(()),
    }
  }

  fn refresh(&mut self) -> Result<()> {
    let state = self.state.clone();
    debug!(?state, "recomputing chart data");

    // Work preference and the trend read the same country+devtype subset.
    let base = filter_subset(self.data.frame(), &state.country, &state.dev_type, None, None)?;

    let counts = work_preference(&base)?;
    self.sink.publish(ChartUpdate::WorkPreference(WorkPreferenceCounts {
      country: state.country.clone(),
      counts,
    }));

    let language_subset = filter_subset(
      self.data.frame(),
      &state.country,
      &state.dev_type,
      Some(&state.remote_pref),
      None,
    )?;
    let counts = top_languages(&language_subset)?;
    self.sink.publish(ChartUpdate::Languages(LanguageCounts {
      country: state.country.clone(),
      remote_pref: state.remote_pref.clone(),
      counts,
    }));

    let scatter_subset = filter_subset(
      self.data.frame(),
      &state.country,
      &state.dev_type,
      None,
      Some(state.min_years),
    )?;
    let limit = self.data.config().sample_limit;
    let seed = self.data.config().sample_seed;
    let points = compensation_sample(&scatter_subset, limit, seed)?;
    self.sink.publish(ChartUpdate::Compensation(points.map(|points| CompensationSample {
      country: state.country.clone(),
      min_years: state.min_years,
      points,
    })));

    let points = preference_trend(&base)?;
    self.sink.publish(ChartUpdate::Trend(points.map(|points| PreferenceTrend {
      country: state.country.clone(),
      points,
    })));

    Ok(())
  }
}

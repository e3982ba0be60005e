//! `AppCore` - the primary application facade.
//!
//! Adapters (CLI, Web) receive an `AppCore` instance and use it to access
//! all functionality.

use crate::ports::Repos;

use super::{CategoryService, ColaboratorService, WeatherService};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete repository
/// implementations.
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
/// let colaborators = core.colaborators().list().await?;
/// ```
pub struct AppCore {
    categories: CategoryService,
    colaborators: ColaboratorService,
    weather: WeatherService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            categories: CategoryService::new(repos.categories),
            colaborators: ColaboratorService::new(repos.colaborators),
            weather: WeatherService::new(),
        }
    }

    /// Access the category service.
    pub const fn categories(&self) -> &CategoryService {
        &self.categories
    }

    /// Access the colaborator service.
    pub const fn colaborators(&self) -> &ColaboratorService {
        &self.colaborators
    }

    /// Access the weather service.
    pub const fn weather(&self) -> &WeatherService {
        &self.weather
    }
}

//! Available cogs and the loader that activates them.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serenity::all::CreateCommand;

use crate::{
    cog::{config::ConfigCog, general::GeneralCog, moderation::ModerationCog, Cog, CogDeps},
    error::cog::CogError,
};

/// Builds a cog from the shared dependencies.
pub type CogFactory = fn(&CogDeps) -> Result<Box<dyn Cog>, CogError>;

/// Cogs compiled into the bot, by name.
pub struct CogRegistry {
    factories: Vec<(&'static str, CogFactory)>,
}

impl CogRegistry {
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Registry with every cog shipped with the bot.
    pub fn builtin() -> Self {
        Self::new()
            .register("General", |deps| Ok(Box::new(GeneralCog::new(deps))))
            .register("Config", |deps| Ok(Box::new(ConfigCog::new(deps))))
            .register("Moderation", |_| Ok(Box::new(ModerationCog)))
    }

    pub fn register(mut self, name: &'static str, factory: CogFactory) -> Self {
        self.factories.push((name, factory));
        self
    }

    /// Looks up the factory of a cog.
    ///
    /// Names starting with an underscore are private and never available.
    pub fn get(&self, name: &str) -> Option<CogFactory> {
        if name.starts_with('_') {
            return None;
        }

        self.factories
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, factory)| *factory)
    }

    /// Names of every available cog, in registration order.
    pub fn available(&self) -> Vec<&'static str> {
        self.factories
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !name.starts_with('_'))
            .collect()
    }
}

impl Default for CogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Cogs activated at startup, read-only once loading finished.
#[derive(Default)]
pub struct LoadedCogs {
    cogs: Vec<Arc<dyn Cog>>,
    routes: HashMap<&'static str, usize>,
}

impl LoadedCogs {
    /// Adds a cog and takes ownership of its commands.
    ///
    /// # Returns
    /// - `Ok(())` - The cog was added
    /// - `Err(CogError::DuplicateCommand)` - A loaded cog already owns one of
    ///   its commands; nothing was added
    pub fn insert(&mut self, cog: Box<dyn Cog>) -> Result<(), CogError> {
        let names: Vec<&'static str> = cog.commands().iter().map(|c| c.name).collect();

        for name in &names {
            if let Some(&owner) = self.routes.get(name) {
                return Err(CogError::DuplicateCommand {
                    command: name.to_string(),
                    owner: self.cogs[owner].name().to_string(),
                });
            }
        }

        let index = self.cogs.len();
        self.cogs.push(Arc::from(cog));
        for name in names {
            self.routes.insert(name, index);
        }

        Ok(())
    }

    /// Finds the cog handling a command.
    pub fn route(&self, command: &str) -> Option<Arc<dyn Cog>> {
        self.routes
            .get(command)
            .map(|&index| Arc::clone(&self.cogs[index]))
    }

    /// Command definitions of every loaded cog, for syncing.
    pub fn definitions(&self) -> Vec<CreateCommand> {
        self.cogs
            .iter()
            .flat_map(|cog| cog.commands())
            .map(|command| command.definition)
            .collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.cogs.iter().map(|cog| cog.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.cogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cogs.is_empty()
    }
}

/// Outcome of activating the configured cogs.
#[derive(Default)]
pub struct LoadReport {
    pub loaded: LoadedCogs,
    /// Cogs whose factory or registration failed.
    pub failed: Vec<(String, CogError)>,
    /// Configured names with no matching cog.
    pub missing: Vec<String>,
}

/// Activates every allowed cog, in allow-list order.
///
/// A failing cog is logged and skipped; it never prevents the others from
/// loading.
pub fn load_cogs(allowed: &[String], registry: &CogRegistry, deps: &CogDeps) -> LoadReport {
    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    for name in allowed {
        if !seen.insert(name.as_str()) {
            tracing::warn!("Cog {} is listed more than once, loading it once", name);
            continue;
        }

        let Some(factory) = registry.get(name) else {
            tracing::error!(
                "Unable to load {}! It does not exist in the available cog list.",
                name
            );
            report.missing.push(name.clone());
            continue;
        };

        match factory(deps).and_then(|cog| report.loaded.insert(cog)) {
            Ok(()) => tracing::info!("Loaded cog {}", name),
            Err(e) => {
                tracing::error!("Unable to load {}! {}", name, e);
                report.failed.push((name.clone(), e));
            }
        }
    }

    report
}

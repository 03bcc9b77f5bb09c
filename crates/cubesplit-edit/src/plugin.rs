use cubesplit_split::SplitConfig;
use std::collections::BTreeMap;

use crate::command::{SplitReport, split_selection};
use crate::error::CommandError;
use crate::host::SceneHost;

pub const SPLIT_ACTION_ID: &str = "split_model_knife";
pub const FILTER_MENU: &str = "filter";

type Condition = fn(&dyn SceneHost) -> bool;
type Handler = fn(&mut dyn SceneHost, &SplitConfig) -> Result<SplitReport, CommandError>;

/// A menu entry: metadata, an enable condition, and what it runs.
#[derive(Clone, Debug)]
pub struct Action {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    condition: Condition,
    handler: Handler,
}

fn has_selection(host: &dyn SceneHost) -> bool {
    !host.selected().is_empty()
}

fn run_split(host: &mut dyn SceneHost, config: &SplitConfig) -> Result<SplitReport, CommandError> {
    split_selection(host, config)
}

impl Action {
    pub fn split_model() -> Self {
        Self {
            id: SPLIT_ACTION_ID,
            name: "Split Model with Knife Tool",
            description: "Split the selected cubes into 16x16x16 sections.",
            icon: "content_cut",
            condition: has_selection,
            handler: run_split,
        }
    }

    #[inline]
    pub fn is_enabled(&self, host: &dyn SceneHost) -> bool {
        (self.condition)(host)
    }
}

/// Menu categories and their actions, in registration order.
#[derive(Default, Debug)]
pub struct MenuBar {
    menus: BTreeMap<String, Vec<Action>>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` under `category`, replacing any action with the same id.
    pub fn add_action(&mut self, action: Action, category: &str) {
        self.remove_action(action.id);
        self.menus
            .entry(category.to_string())
            .or_default()
            .push(action);
    }

    pub fn remove_action(&mut self, id: &str) -> Option<Action> {
        for actions in self.menus.values_mut() {
            if let Some(pos) = actions.iter().position(|a| a.id == id) {
                return Some(actions.remove(pos));
            }
        }
        None
    }

    pub fn actions(&self, category: &str) -> &[Action] {
        self.menus.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, id: &str) -> Option<&Action> {
        self.menus.values().flatten().find(|a| a.id == id)
    }

    /// Runs action `id` against `host`. Returns `None` when the action is not
    /// registered or its condition is false.
    pub fn trigger(
        &self,
        id: &str,
        host: &mut dyn SceneHost,
        config: &SplitConfig,
    ) -> Option<Result<SplitReport, CommandError>> {
        let action = self.find(id)?;
        if !action.is_enabled(host) {
            log::debug!(target: "edit", "action `{}` is disabled", id);
            return None;
        }
        log::info!(target: "edit", "action triggered: {}", action.name);
        Some((action.handler)(host, config))
    }
}

/// Plugin lifecycle: registers the split action on load and removes it on unload.
#[derive(Debug, Default)]
pub struct Plugin {
    pub config: SplitConfig,
    loaded: bool,
}

impl Plugin {
    pub const ID: &'static str = "split_model_knife_tool";
    pub const TITLE: &'static str = "Split Model with Knife Tool";
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            loaded: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn on_load(&mut self, menu: &mut MenuBar) {
        menu.add_action(Action::split_model(), FILTER_MENU);
        self.loaded = true;
        log::info!(target: "edit", "{} ({}) {} loaded", Self::TITLE, Self::ID, Self::VERSION);
    }

    pub fn on_unload(&mut self, menu: &mut MenuBar) {
        menu.remove_action(SPLIT_ACTION_ID);
        self.loaded = false;
        log::info!(target: "edit", "{} unloaded", Self::ID);
    }

    /// Triggers the split action with this plugin's config.
    pub fn run(
        &self,
        menu: &MenuBar,
        host: &mut dyn SceneHost,
    ) -> Option<Result<SplitReport, CommandError>> {
        menu.trigger(SPLIT_ACTION_ID, host, &self.config)
    }
}

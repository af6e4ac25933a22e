//! Named menu registry.
//!
//! [`Menus`] is created by the host application and passed around
//! explicitly; menus are built by a [`MenuFactory`] on first access.

use std::collections::HashMap;
use std::rc::Rc;

use crate::config::MenuDefinition;
use crate::error::{MenuError, MenuResult};
use crate::icons::{icon_hook, Icons};
use crate::menu::Menu;

/// Creates menus for a [`Menus`] registry.
pub trait MenuFactory {
    fn create_menu(&self, name: &str) -> Menu;
}

/// Creates plain menus.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMenuFactory;

impl MenuFactory for DefaultMenuFactory {
    fn create_menu(&self, name: &str) -> Menu {
        Menu::new(name)
    }
}

/// Creates menus that render item icons through `icons`.
#[derive(Clone)]
pub struct IconsMenuFactory {
    icons: Rc<dyn Icons>,
}

impl IconsMenuFactory {
    pub fn new(icons: impl Icons + 'static) -> Self {
        Self {
            icons: Rc::new(icons),
        }
    }
}

impl MenuFactory for IconsMenuFactory {
    fn create_menu(&self, name: &str) -> Menu {
        let mut menu = Menu::new(name);
        menu.each(icon_hook(Rc::clone(&self.icons)));
        menu
    }
}

/// Menus by name.
pub struct Menus {
    factory: Box<dyn MenuFactory>,
    menus: HashMap<String, Menu>,
}

impl Default for Menus {
    fn default() -> Self {
        Self::new()
    }
}

impl Menus {
    pub fn new() -> Self {
        Self::with_factory(DefaultMenuFactory)
    }

    pub fn with_factory(factory: impl MenuFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            menus: HashMap::new(),
        }
    }

    /// Build one menu per definition; later definitions replace earlier
    /// ones of the same name.
    pub fn from_definitions<'a>(definitions: impl IntoIterator<Item = &'a MenuDefinition>) -> Self {
        let mut menus = Self::new();
        for definition in definitions {
            menus.add(definition.build());
        }
        menus
    }

    /// Store `menu` under its own name, replacing any menu of that name.
    pub fn add(&mut self, menu: Menu) -> &mut Self {
        self.menus.insert(menu.name().to_string(), menu);
        self
    }

    /// Get the menu `name`, creating it through the factory on first use.
    pub fn menu(&mut self, name: &str) -> &mut Menu {
        let factory = &self.factory;
        self.menus
            .entry(name.to_string())
            .or_insert_with(|| factory.create_menu(name))
    }

    /// Look up a menu without creating it.
    pub fn get(&self, name: &str) -> Option<&Menu> {
        self.menus.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Menu> {
        self.menus.get_mut(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }

    /// Render an existing menu.
    pub fn render(&mut self, name: &str) -> MenuResult<String> {
        self.menus
            .get_mut(name)
            .ok_or_else(|| MenuError::MenuNotFound {
                name: name.to_string(),
            })?
            .render()
    }
}

//! Dropdown menu: a trigger plus a popup of items and separators
//!
//! The caller's override class and attributes land on the popup.

use crate::element::StyledElement;
use crate::styled::{impl_passthrough, Passthrough};

const TRIGGER: &str = "inline-flex items-center justify-center \
                       focus-visible:outline-none focus-visible:ring-2 \
                       focus-visible:ring-semantic-border-focus";

const POPUP: &str = "min-w-[8rem] overflow-hidden rounded-md \
                     bg-semantic-background-primary border border-semantic-border-primary \
                     shadow-lg p-1 \
                     data-[state=open]:animate-in data-[state=closed]:animate-out \
                     data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 \
                     data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95";

const ITEM: &str = "relative flex cursor-pointer select-none items-center \
                    rounded-sm px-2 py-1.5 text-sm text-semantic-text-primary \
                    outline-none transition-colors focus:bg-semantic-background-secondary \
                    data-[disabled]:pointer-events-none data-[disabled]:opacity-50";

const SEPARATOR: &str = "-mx-1 my-1 h-px bg-semantic-border-primary";

#[derive(Clone, Debug)]
enum MenuEntry {
    Item(MenuItem),
    Separator(MenuSeparator),
}

#[derive(Clone, Debug, Default)]
pub struct Menu {
    trigger: String,
    open: bool,
    entries: Vec<MenuEntry>,
    passthrough: Passthrough,
}

impl_passthrough!(Menu);

impl Menu {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            ..Default::default()
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.entries.push(MenuEntry::Item(item));
        self
    }

    pub fn separator(mut self, separator: MenuSeparator) -> Self {
        self.entries.push(MenuEntry::Separator(separator));
        self
    }

    pub fn render(&self) -> StyledElement {
        let trigger = StyledElement::new("trigger", TRIGGER)
            .attr("aria-haspopup", "menu")
            .attr("aria-expanded", if self.open { "true" } else { "false" })
            .text(&self.trigger);
        let root = StyledElement::new("root", "").child(trigger);
        if !self.open {
            return root;
        }

        let popup = StyledElement::new("popup", self.passthrough.merged(POPUP))
            .attr("role", "menu")
            .attr("data-state", "open")
            .attrs(&self.passthrough.attrs)
            .children(self.entries.iter().map(|entry| match entry {
                MenuEntry::Item(item) => item.render(),
                MenuEntry::Separator(separator) => separator.render(),
            }));
        root.child(popup)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MenuItem {
    label: String,
    disabled: bool,
    passthrough: Passthrough,
}

impl_passthrough!(MenuItem);

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn render(&self) -> StyledElement {
        let item = StyledElement::new("item", self.passthrough.merged(ITEM))
            .attr("role", "menuitem")
            .attrs(&self.passthrough.attrs)
            .text(&self.label);
        if self.disabled {
            item.attr("aria-disabled", "true").attr("data-disabled", "")
        } else {
            item
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MenuSeparator {
    passthrough: Passthrough,
}

impl_passthrough!(MenuSeparator);

impl MenuSeparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> StyledElement {
        StyledElement::new("separator", self.passthrough.merged(SEPARATOR))
            .attr("role", "separator")
            .attrs(&self.passthrough.attrs)
    }
}

pub fn menu(trigger: impl Into<String>) -> Menu {
    Menu::new(trigger)
}

pub fn menu_item(label: impl Into<String>) -> MenuItem {
    MenuItem::new(label)
}

pub fn menu_separator() -> MenuSeparator {
    MenuSeparator::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styled::PassthroughExt;
    use pretty_assertions::assert_eq;

    fn actions() -> Menu {
        menu("Actions")
            .item(menu_item("Edit"))
            .item(menu_item("Duplicate").disabled(true))
            .separator(menu_separator())
            .item(menu_item("Delete").class("text-error-600"))
    }

    #[test]
    fn test_closed_menu_has_trigger_only() {
        let root = actions().render();
        assert_eq!(root.parts(), ["root", "trigger"]);
        assert_eq!(
            root.find("trigger").unwrap().get_attr("aria-expanded"),
            Some("false")
        );
    }

    #[test]
    fn test_open_menu_entries_in_order() {
        let root = actions().open(true).render();
        assert_eq!(
            root.parts(),
            ["root", "trigger", "popup", "item", "item", "separator", "item"]
        );
        let items = root.find_all("item");
        assert_eq!(items[1].get_attr("data-disabled"), Some(""));
        assert!(items[2].has_class("text-error-600"));
        assert!(!items[2].has_class("text-semantic-text-primary"));
        assert!(items[2].has_class("text-sm"));
    }

    #[test]
    fn test_popup_override() {
        let root = menu("More").open(true).class("min-w-[12rem] p-2").render();
        let popup = root.find("popup").unwrap();
        assert!(popup.has_class("min-w-[12rem]"));
        assert!(!popup.has_class("min-w-[8rem]"));
        assert!(popup.has_class("p-2"));
        assert!(!popup.has_class("p-1"));
    }

    #[test]
    fn test_separator_keeps_negative_margin() {
        let separator = menu_separator().class("my-2").render();
        assert_eq!(
            separator.class_name,
            "-mx-1 h-px bg-semantic-border-primary my-2"
        );
    }
}

//! Tabbed interface
//!
//! The active value is the controlled `value`, else `default_value`, else the
//! first tab. Tabs matching it are marked selected; other panels are hidden.

use crate::element::StyledElement;
use crate::styled::{impl_passthrough, Passthrough};

const LIST: &str = "inline-flex h-10 items-center justify-center \
                    rounded-md bg-semantic-background-secondary p-1 \
                    text-semantic-text-secondary";

const TAB: &str = "inline-flex items-center justify-center whitespace-nowrap \
                   rounded-sm px-3 py-1.5 text-sm font-medium \
                   ring-offset-semantic-background-primary transition-all \
                   focus-visible:outline-none focus-visible:ring-2 \
                   focus-visible:ring-semantic-border-focus focus-visible:ring-offset-2 \
                   data-[disabled]:pointer-events-none data-[disabled]:opacity-50 \
                   data-[selected]:bg-semantic-background-primary \
                   data-[selected]:text-semantic-text-primary data-[selected]:shadow-sm";

const PANEL: &str = "mt-2 ring-offset-semantic-background-primary \
                     focus-visible:outline-none focus-visible:ring-2 \
                     focus-visible:ring-semantic-border-focus focus-visible:ring-offset-2";

#[derive(Clone, Debug, Default)]
pub struct Tabs {
    value: Option<String>,
    default_value: Option<String>,
    list: TabsList,
    panels: Vec<TabPanel>,
    passthrough: Passthrough,
}

impl_passthrough!(Tabs);

impl Tabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controlled active tab
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Active tab when no controlled value is given
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn list(mut self, list: TabsList) -> Self {
        self.list = list;
        self
    }

    pub fn panel(mut self, panel: TabPanel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn active_value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .or(self.default_value.as_deref())
            .or_else(|| self.list.tabs.first().map(|tab| tab.value.as_str()))
    }

    pub fn render(&self) -> StyledElement {
        let active = self.active_value();
        StyledElement::new("root", self.passthrough.merged("w-full"))
            .attrs(&self.passthrough.attrs)
            .child(self.list.render(active))
            .children(self.panels.iter().map(|panel| panel.render(active)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct TabsList {
    tabs: Vec<Tab>,
    passthrough: Passthrough,
}

impl_passthrough!(TabsList);

impl TabsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn render(&self, active: Option<&str>) -> StyledElement {
        StyledElement::new("list", self.passthrough.merged(LIST))
            .attr("role", "tablist")
            .attrs(&self.passthrough.attrs)
            .children(self.tabs.iter().map(|tab| tab.render(active)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Tab {
    value: String,
    label: String,
    disabled: bool,
    passthrough: Passthrough,
}

impl_passthrough!(Tab);

impl Tab {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn render(&self, active: Option<&str>) -> StyledElement {
        let selected = active == Some(self.value.as_str());
        let mut tab = StyledElement::new("tab", self.passthrough.merged(TAB))
            .attr("role", "tab")
            .attr("data-value", &self.value)
            .attr("aria-selected", if selected { "true" } else { "false" })
            .attrs(&self.passthrough.attrs)
            .text(&self.label);
        if selected {
            tab = tab.attr("data-selected", "");
        }
        if self.disabled {
            tab = tab.attr("aria-disabled", "true").attr("data-disabled", "");
        }
        tab
    }
}

#[derive(Clone, Debug, Default)]
pub struct TabPanel {
    value: String,
    content: Vec<StyledElement>,
    passthrough: Passthrough,
}

impl_passthrough!(TabPanel);

impl TabPanel {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn child(mut self, child: StyledElement) -> Self {
        self.content.push(child);
        self
    }

    pub fn render(&self, active: Option<&str>) -> StyledElement {
        let panel = StyledElement::new("panel", self.passthrough.merged(PANEL))
            .attr("role", "tabpanel")
            .attr("data-value", &self.value)
            .attrs(&self.passthrough.attrs)
            .children(self.content.iter().cloned());
        if active == Some(self.value.as_str()) {
            panel
        } else {
            panel.attr("hidden", "")
        }
    }
}

pub fn tabs() -> Tabs {
    Tabs::new()
}

pub fn tabs_list() -> TabsList {
    TabsList::new()
}

pub fn tab(value: impl Into<String>, label: impl Into<String>) -> Tab {
    Tab::new(value, label)
}

pub fn tab_panel(value: impl Into<String>) -> TabPanel {
    TabPanel::new(value)
}

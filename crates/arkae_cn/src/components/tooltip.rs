//! Tooltip shown over a trigger after a delay

use crate::element::StyledElement;
use crate::styled::{impl_passthrough, Passthrough};

/// Milliseconds before the popup opens
pub const DEFAULT_DELAY_MS: u32 = 400;

const POPUP: &str = "z-tooltip rounded-md bg-gray-900 px-3 py-1.5 \
                     text-xs text-white shadow-md \
                     data-[state=open]:animate-in data-[state=closed]:animate-out \
                     data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 \
                     data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95";

#[derive(Clone, Debug)]
pub struct Tooltip {
    content: String,
    trigger: Option<StyledElement>,
    delay: u32,
    open: bool,
    passthrough: Passthrough,
}

impl_passthrough!(Tooltip);

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            content: String::new(),
            trigger: None,
            delay: DEFAULT_DELAY_MS,
            open: false,
            passthrough: Passthrough::default(),
        }
    }
}

impl Tooltip {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Element the tooltip describes
    pub fn trigger(mut self, trigger: StyledElement) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay = delay_ms;
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn render(&self) -> StyledElement {
        let mut root = StyledElement::new("root", "").attr("delay", self.delay.to_string());
        if let Some(trigger) = &self.trigger {
            root = root.child(
                StyledElement::new("trigger", "")
                    .attr("data-state", self.state())
                    .child(trigger.clone()),
            );
        }
        if !self.open {
            return root;
        }

        root.child(
            StyledElement::new("popup", self.passthrough.merged(POPUP))
                .attr("role", "tooltip")
                .attr("data-state", self.state())
                .attrs(&self.passthrough.attrs)
                .text(&self.content)
                .child(StyledElement::new("arrow", "fill-gray-900")),
        )
    }

    fn state(&self) -> &'static str {
        if self.open {
            "open"
        } else {
            "closed"
        }
    }
}

pub fn tooltip(content: impl Into<String>) -> Tooltip {
    Tooltip::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styled::PassthroughExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_delay() {
        let root = tooltip("Copy").render();
        assert_eq!(root.get_attr("delay"), Some("400"));
        assert!(root.find("popup").is_none());
    }

    #[test]
    fn test_open_tooltip_with_trigger() {
        let trigger = StyledElement::new("icon", "h-4 w-4");
        let root = tooltip("Copy to clipboard")
            .trigger(trigger)
            .delay(150)
            .open(true)
            .render();
        assert_eq!(root.get_attr("delay"), Some("150"));
        assert_eq!(root.parts(), ["root", "trigger", "icon", "popup", "arrow"]);

        let popup = root.find("popup").unwrap();
        assert_eq!(popup.text.as_deref(), Some("Copy to clipboard"));
        assert_eq!(popup.get_attr("role"), Some("tooltip"));
    }

    #[test]
    fn test_popup_override() {
        let root = tooltip("Saved").open(true).class("bg-success-600 px-2").render();
        let popup = root.find("popup").unwrap();
        assert!(popup.has_class("bg-success-600"));
        assert!(!popup.has_class("bg-gray-900"));
        assert!(popup.has_class("px-2"));
        assert!(popup.has_class("py-1.5"));
    }
}

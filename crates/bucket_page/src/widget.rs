//! Button widgets for the pagination controls.

use crate::escape::escape_html;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::Serialize;

/// A link styled as a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, Builder)]
#[builder(setter(into))]
pub struct ButtonWidget {
    /// Link target
    pub(crate) href: String,
    /// Tooltip
    #[builder(default)]
    pub(crate) title: String,
    /// Visible label
    pub(crate) label: String,
    /// Disabled buttons render without a link
    #[builder(default)]
    pub(crate) disabled: bool,
    /// Marks the option matching the current state
    #[builder(default)]
    pub(crate) active: bool,
}

impl ButtonWidget {
    /// Create a new builder for a button.
    pub fn builder() -> ButtonWidgetBuilder {
        ButtonWidgetBuilder::default()
    }
}

impl std::fmt::Display for ButtonWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.disabled {
            "oo-ui-widget-disabled"
        } else {
            "oo-ui-widget-enabled"
        };
        let active = if self.active {
            " oo-ui-buttonElement-active"
        } else {
            ""
        };
        write!(
            f,
            "<span aria-disabled=\"{disabled}\" class=\"oo-ui-widget {state} oo-ui-buttonElement \
             oo-ui-buttonElement-framed oo-ui-labelElement oo-ui-buttonWidget{active}\">",
            disabled = self.disabled,
        )?;
        write!(f, "<a role=\"button\" title=\"{}\"", escape_html(&self.title))?;
        if self.disabled {
            f.write_str(" tabindex=\"-1\" aria-disabled=\"true\"")?;
        } else {
            write!(
                f,
                " tabindex=\"0\" aria-disabled=\"false\" href=\"{}\" rel=\"nofollow\"",
                escape_html(&self.href)
            )?;
        }
        write!(
            f,
            " class=\"oo-ui-buttonElement-button\"><span class=\"oo-ui-labelElement-label\">{}</span></a></span>",
            escape_html(&self.label)
        )
    }
}

/// Buttons rendered side by side as one control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Getters)]
pub struct ButtonGroupWidget {
    /// Buttons in display order
    items: Vec<ButtonWidget>,
}

impl ButtonGroupWidget {
    /// Groups the given buttons.
    pub fn new(items: Vec<ButtonWidget>) -> Self {
        Self { items }
    }
}

impl std::fmt::Display for ButtonGroupWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<div class=\"oo-ui-widget oo-ui-widget-enabled oo-ui-buttonGroupWidget\">")?;
        for item in &self.items {
            write!(f, "{}", item)?;
        }
        f.write_str("</div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_button_html() {
        let button = ButtonWidget::builder()
            .href("/wiki/A?x=1&y=2")
            .title("Go \"there\"")
            .label("<Next>")
            .build()
            .unwrap();
        assert_eq!(
            button.to_string(),
            "<span aria-disabled=\"false\" class=\"oo-ui-widget oo-ui-widget-enabled oo-ui-buttonElement \
             oo-ui-buttonElement-framed oo-ui-labelElement oo-ui-buttonWidget\">\
             <a role=\"button\" title=\"Go &quot;there&quot;\" tabindex=\"0\" aria-disabled=\"false\" \
             href=\"/wiki/A?x=1&amp;y=2\" rel=\"nofollow\" class=\"oo-ui-buttonElement-button\">\
             <span class=\"oo-ui-labelElement-label\">&lt;Next&gt;</span></a></span>"
        );
    }

    #[test]
    fn test_disabled_active_button_html() {
        let button = ButtonWidget::builder()
            .href("/wiki/A")
            .label("20")
            .disabled(true)
            .active(true)
            .build()
            .unwrap();
        let html = button.to_string();
        assert!(html.contains("oo-ui-widget-disabled"));
        assert!(html.contains("oo-ui-buttonWidget oo-ui-buttonElement-active\""));
        assert!(html.contains("tabindex=\"-1\""));
        assert!(!html.contains("href"));
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(
            ButtonGroupWidget::default().to_string(),
            "<div class=\"oo-ui-widget oo-ui-widget-enabled oo-ui-buttonGroupWidget\"></div>"
        );
    }
}

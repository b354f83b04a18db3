pub mod tip_form;
pub mod tracker;

use gpui::{App, ClickEvent, Pixels, SharedString, Size, Styled, Window, px};
use gpui_component::Sizable;
use gpui_component::button::Button;

pub use tip_form::TipCalculatorForm;
pub use tracker::{ChangeTracker, FormField, apply_field, apply_focus, people_correction};

use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self::new(px(config.width), px(config.height))
    }
}

/// Creates a large button with a label and click handler; callers pick the variant.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .large()
        .label(label.into())
        .on_click(on_click)
}

/// Same as [`make_button`] with a fixed width, for rows of equal buttons.
pub fn make_fixed_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    width: Pixels,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    make_button(id, label, on_click).w(width)
}

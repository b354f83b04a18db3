use gpui::{
    App, AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window, div, px,
};
use gpui_component::{
    ActiveTheme, Sizable, h_flex,
    button::{Button, ButtonVariants},
    input::{Input, InputEvent, InputState, MaskPattern},
    v_flex,
};
use tip_core::{TIP_PRESETS, TipForm};
use tracing::{debug, info};

#[cfg(not(target_os = "linux"))]
use crate::{Quit, quit};
use crate::components::{
    ChangeTracker, FormField, apply_field, apply_focus, make_button, make_fixed_button,
    people_correction,
};

/// The bill-splitting form: inputs on top, amounts below, reset at the bottom.
pub struct TipCalculatorForm {
    form: TipForm,
    tracker: ChangeTracker,

    bill_input: Entity<InputState>,
    custom_tip_input: Entity<InputState>,
    people_input: Entity<InputState>,

    _subscriptions: Vec<Subscription>,
}

impl TipCalculatorForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let bill_input = make_input_state(
            "0.00",
            MaskPattern::Number {
                separator: Some(','),
                fraction: Some(2),
            },
            None,
            window,
            cx,
        );
        let custom_tip_input = make_input_state(
            "Custom",
            MaskPattern::Number {
                separator: None,
                fraction: Some(2),
            },
            None,
            window,
            cx,
        );
        let people_input = make_input_state(
            "1",
            MaskPattern::Number {
                separator: None,
                fraction: Some(0),
            },
            Some("1"),
            window,
            cx,
        );

        let mut subscriptions = vec![
            observe_field(&bill_input, FormField::Bill, window, cx),
            observe_field(&custom_tip_input, FormField::CustomTip, window, cx),
            observe_field(&people_input, FormField::People, window, cx),
            cx.subscribe_in(
                &custom_tip_input,
                window,
                |this, _, event: &InputEvent, _, cx| {
                    if matches!(event, InputEvent::Focus)
                        && apply_focus(&mut this.form, FormField::CustomTip)
                    {
                        cx.notify();
                    }
                },
            ),
        ];

        subscriptions.push(cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed callback");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        }));

        info!("Tip calculator constructed");
        Self {
            form: TipForm::new(),
            tracker: ChangeTracker::default(),
            bill_input,
            custom_tip_input,
            people_input,
            _subscriptions: subscriptions,
        }
    }

    fn on_field_changed(
        &mut self,
        field: FormField,
        input: Entity<InputState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let value = input.read(cx).value().to_string();
        if !self.tracker.update(field, &value) {
            return;
        }
        apply_field(&mut self.form, field, &value);
        if field == FormField::People {
            if let Some(shown) = people_correction(&self.form, &value) {
                self.write_input(FormField::People, &shown, window, cx);
            }
        }
        cx.notify();
    }

    /// Writes `value` into an input widget without replaying it as a user edit.
    fn write_input(
        &mut self,
        field: FormField,
        value: &str,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.tracker.record(field, value);
        let input = match field {
            FormField::Bill => &self.bill_input,
            FormField::CustomTip => &self.custom_tip_input,
            FormField::People => &self.people_input,
        };
        let value = SharedString::from(value.to_string());
        input.update(cx, |state, cx| state.set_value(value, window, cx));
    }

    fn select_preset(
        &mut self,
        percent: u32,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.form.select_preset(percent);
        let custom = self.form.custom_tip_display();
        self.write_input(FormField::CustomTip, &custom, window, cx);
        cx.notify();
    }

    fn reset(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.form.reset();
        let bill = self.form.bill_amount().to_string();
        let custom = self.form.custom_tip_display();
        let people = self.form.number_of_people().to_string();
        self.write_input(FormField::Bill, &bill, window, cx);
        self.write_input(FormField::CustomTip, &custom, window, cx);
        self.write_input(FormField::People, &people, window, cx);
        debug!("Form reset from UI");
        cx.notify();
    }

    fn preset_buttons(
        &self,
        cx: &mut Context<Self>,
    ) -> Vec<Button> {
        TIP_PRESETS
            .iter()
            .map(|&percent| {
                let button = make_fixed_button(
                    format!("tip-preset-{percent}"),
                    format!("{percent}%"),
                    px(72.),
                    cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.select_preset(percent, window, cx);
                    }),
                );
                if self.form.is_preset_active(percent) {
                    button.primary()
                } else {
                    button.outline()
                }
            })
            .collect()
    }
}

impl Render for TipCalculatorForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let summary = self.form.summary();
        let presets = self.preset_buttons(cx);
        let custom_border = if self.form.is_custom_active() {
            cx.theme().primary
        } else {
            cx.theme().border
        };
        let tip_caption = self
            .form
            .shows_tip_subtitle()
            .then_some("Total tip for the bill");

        v_flex()
            .w(px(460.))
            .gap_6()
            .p_6()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .child(
                v_flex()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .text_3xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(cx.theme().primary)
                            .child("TipEase"),
                    )
                    .child(
                        div()
                            .text_color(cx.theme().muted_foreground)
                            .child("Calculate tips and split bills with ease."),
                    ),
            )
            .child(
                make_field("Bill Amount").child(
                    Input::new(&self.bill_input)
                        .prefix(div().child("$"))
                        .large(),
                ),
            )
            .child(
                make_field("Select Tip %").child(
                    h_flex()
                        .flex_wrap()
                        .gap_2()
                        .children(presets)
                        .child(
                            div()
                                .w(px(120.))
                                .rounded_md()
                                .border_2()
                                .border_color(custom_border)
                                .child(
                                    Input::new(&self.custom_tip_input).suffix(div().child("%")),
                                ),
                        ),
                ),
            )
            .child(
                make_field("Number of People").child(Input::new(&self.people_input).large()),
            )
            .child(
                v_flex()
                    .gap_4()
                    .p_6()
                    .rounded_lg()
                    .bg(cx.theme().secondary)
                    .child(make_result_row("Tip Amount", tip_caption, summary.tip, cx))
                    .child(make_result_row("Total Amount", None, summary.total, cx))
                    .child(
                        make_result_row("Amount per Person", None, summary.per_person, cx)
                            .border_t_1()
                            .border_color(cx.theme().border)
                            .pt_4(),
                    ),
            )
            .child(
                make_button(
                    "reset",
                    "Reset",
                    cx.listener(|this, _: &ClickEvent, window, cx| this.reset(window, cx)),
                )
                .danger()
                .w_full(),
            )
    }
}

fn make_input_state(
    placeholder: impl Into<SharedString>,
    pattern: MaskPattern,
    initial: Option<&'static str>,
    window: &mut Window,
    cx: &mut Context<TipCalculatorForm>,
) -> Entity<InputState> {
    cx.new(|closure_cx| {
        let state = InputState::new(window, closure_cx)
            .mask_pattern(pattern)
            .placeholder(placeholder.into());
        match initial {
            Some(value) => state.default_value(value),
            None => state,
        }
    })
}

fn observe_field(
    input: &Entity<InputState>,
    field: FormField,
    window: &mut Window,
    cx: &mut Context<TipCalculatorForm>,
) -> Subscription {
    cx.observe_in(input, window, move |this, input, window, cx| {
        this.on_field_changed(field, input, window, cx);
    })
}

/// A label stacked above its control.
fn make_field(label: impl Into<SharedString>) -> Div {
    v_flex()
        .gap_2()
        .child(div().font_weight(FontWeight::MEDIUM).child(label.into()))
}

fn make_result_row(
    label: &'static str,
    caption: Option<&'static str>,
    amount: String,
    cx: &App,
) -> Div {
    h_flex()
        .items_center()
        .justify_between()
        .child(
            v_flex()
                .child(div().text_lg().font_weight(FontWeight::MEDIUM).child(label))
                .children(
                    caption.map(|c| div().text_xs().text_color(cx.theme().muted_foreground).child(c)),
                ),
        )
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .text_color(cx.theme().primary)
                .child(SharedString::from(amount)),
        )
}
